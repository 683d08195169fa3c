pub mod api;
pub mod client;
pub mod normalize;
pub mod preset;
pub mod query;

pub use crate::domain::model::{GraphqlRequest, LteEvent, LteEventSpeaker};
pub use crate::domain::ports::GraphqlTransport;
pub use crate::utils::error::Result;
