pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::CliConfig;
pub use core::{api::ExpoApi, client::GraphqlClient};
pub use server::LteExpoServer;
pub use utils::error::{ExpoError, Result};
