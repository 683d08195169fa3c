use std::sync::Arc;

use chrono::NaiveDate;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::config::CliConfig;
use crate::core::api::ExpoApi;
use crate::core::client::GraphqlClient;
use crate::core::query::LocationFilter;

/// 工具層接受的三個展會日期（YYYY-MM-DD）
pub const TOOL_DATES: [&str; 3] = ["2025-07-02", "2025-07-03", "2025-07-04"];

#[derive(Debug, Deserialize, JsonSchema)]
pub struct QueryLteEventsParams {
    /// Event date in YYYY-MM-DD format. Only the three official expo dates
    /// (2025-07-02, 2025-07-03, 2025-07-04) are supported.
    pub date: String,
    /// Venue filter option: 'main stage' (shows only events located at the main
    /// stage), 'theatre' (shows only events located at theatre venues), or 'all'
    /// (shows all LTE events regardless of location). Defaults to 'all'.
    #[serde(default)]
    pub location: Option<String>,
}

/// MCP 伺服器：把兩個查詢工具接到展會查詢管線
#[derive(Clone)]
pub struct LteExpoServer {
    api: Arc<ExpoApi<GraphqlClient>>,
    token: Option<String>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl LteExpoServer {
    pub fn new(config: &CliConfig) -> Self {
        let client = GraphqlClient::new(config.api_endpoint.clone());
        Self {
            api: Arc::new(ExpoApi::new(client)),
            token: config.token.clone().filter(|token| !token.is_empty()),
            tool_router: Self::tool_router(),
        }
    }

    /// Retrieves Learning & Teaching Expo (LTE) 2025 events scheduled for a
    /// specific date and filtered by venue location. Returns programme
    /// information with: id (unique ID), type, topic_e (topic), language_e
    /// (presentation language), abstract_e (abstract), schedule_time, and
    /// location_info (containing title_e and location_code).
    #[tool(name = "query_lte_events")]
    async fn query_lte_events(
        &self,
        params: Parameters<QueryLteEventsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let QueryLteEventsParams { date, location } = params.0;

        let full_date =
            expand_tool_date(&date).map_err(|message| ErrorData::invalid_params(message, None))?;
        let location = location
            .as_deref()
            .unwrap_or("all")
            .parse::<LocationFilter>()
            .map_err(|error| ErrorData::invalid_params(error.to_string(), None))?;

        tracing::info!("🔍 query_lte_events: date={}, location={:?}", date, location);

        let events = self
            .api
            .fetch_filtered_programmes(&full_date, location, self.token.as_deref())
            .await
            .map_err(|error| {
                ErrorData::internal_error(format!("Failed to fetch LTE events: {}", error), None)
            })?;

        render_json(&events)
    }

    /// Retrieves all exhibitors participating in the Learning & Teaching Expo
    /// (LTE) 2025. Returns an array of exhibitor information with: id (unique
    /// ID), type, name_e (name), description_e (description), and abstract_e
    /// (abstract).
    #[tool(name = "query_lte_exhibitors")]
    async fn query_lte_exhibitors(&self) -> Result<CallToolResult, ErrorData> {
        tracing::info!("🔍 query_lte_exhibitors");

        let exhibitors = self
            .api
            .fetch_exhibitors(self.token.as_deref())
            .await
            .map_err(|error| {
                ErrorData::internal_error(
                    format!("Failed to fetch LTE exhibitors: {}", error),
                    None,
                )
            })?;

        render_json(&exhibitors)
    }

    /// 在 stdin/stdout 上服務 MCP 請求直到對端關閉
    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for LteExpoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Learning & Teaching Expo (LTE) 2025 query server (tools: query_lte_events, \
                 query_lte_exhibitors)"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// 把工具層的 YYYY-MM-DD 轉成後端需要的午夜 UTC 時間戳。
/// 格式錯誤與不在開放日清單都在這裡擋下，不會走到網路。
pub fn expand_tool_date(date: &str) -> std::result::Result<String, String> {
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(format!(
            "Invalid date format '{}'. Expected YYYY-MM-DD.",
            date
        ));
    }
    if !TOOL_DATES.contains(&date) {
        return Err(format!(
            "Invalid date '{}'. Please choose one of: {}",
            date,
            TOOL_DATES.join(", ")
        ));
    }
    Ok(format!("{}T00:00:00.000Z", date))
}

fn render_json(value: &impl serde::Serialize) -> Result<CallToolResult, ErrorData> {
    let text = serde_json::to_string_pretty(value).map_err(|error| {
        ErrorData::internal_error(format!("Failed to serialize response: {}", error), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::VALID_SCHEDULE_DATES;

    #[test]
    fn test_expand_tool_date_accepts_the_three_expo_dates() {
        for (tool_date, full_date) in TOOL_DATES.iter().zip(VALID_SCHEDULE_DATES) {
            assert_eq!(expand_tool_date(tool_date).unwrap(), full_date);
        }
    }

    #[test]
    fn test_expand_tool_date_rejects_malformed_input() {
        let message = expand_tool_date("02/07/2025").unwrap_err();
        assert!(message.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_expand_tool_date_lists_accepted_dates() {
        let message = expand_tool_date("2025-01-01").unwrap_err();
        for date in TOOL_DATES {
            assert!(message.contains(date));
        }
    }
}
