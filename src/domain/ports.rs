use crate::domain::model::GraphqlRequest;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// 傳輸層介面：發送單次查詢並回傳回應的 data 欄位
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn execute(&self, request: &GraphqlRequest, credential: Option<&str>) -> Result<Value>;
}
