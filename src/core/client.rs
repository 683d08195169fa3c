use crate::domain::model::GraphqlRequest;
use crate::domain::ports::GraphqlTransport;
use crate::utils::error::{ExpoError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

/// 對固定 GraphQL 端點發送單次 POST 查詢的傳輸層。
/// 不做重試，逾時由 reqwest 自身機制處理並以 TransportError 浮出。
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    client: Client,
    endpoint: String,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for GraphqlClient {
    async fn execute(&self, request: &GraphqlRequest, credential: Option<&str>) -> Result<Value> {
        let mut body = json!({ "query": request.document });
        if let Some(variables) = &request.variables {
            body["variables"] = variables.clone();
        }

        let mut http_request = self.client.post(&self.endpoint).json(&body);
        // 只有提供了憑證才附上 Authorization 標頭
        if let Some(token) = credential {
            http_request = http_request.header("Authorization", format!("Bearer {}", token));
        }

        tracing::debug!("📡 GraphQL request to: {}", self.endpoint);
        let response = http_request.send().await?;
        tracing::debug!("📡 GraphQL response status: {}", response.status());

        let envelope: Value = response.json().await?;

        if let Some(message) = first_error_message(&envelope) {
            tracing::error!("❌ GraphQL backend error: {}", message);
            return Err(ExpoError::RemoteError { message });
        }

        Ok(envelope.get("data").cloned().unwrap_or(Value::Null))
    }
}

/// 取出回應外層 errors 陣列的第一則訊息
fn first_error_message(envelope: &Value) -> Option<String> {
    let first = envelope.get("errors")?.as_array()?.first()?;
    Some(
        first
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown GraphQL error")
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn simple_request() -> GraphqlRequest {
        GraphqlRequest {
            document: "query Ping { ping }".to_string(),
            variables: Some(json!({ "take": 20 })),
        }
    }

    #[tokio::test]
    async fn test_execute_returns_data_field() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/graphql")
                .body_contains("query Ping");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "data": { "ping": "pong" } }));
        });

        let client = GraphqlClient::new(server.url("/graphql"));
        let data = client.execute(&simple_request(), None).await.unwrap();

        api_mock.assert();
        assert_eq!(data["ping"], "pong");
    }

    #[tokio::test]
    async fn test_execute_forwards_variables() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/graphql")
                .body_contains("\"take\":20");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "data": {} }));
        });

        let client = GraphqlClient::new(server.url("/graphql"));
        client.execute(&simple_request(), None).await.unwrap();

        api_mock.assert();
    }

    #[tokio::test]
    async fn test_execute_attaches_bearer_header_only_with_credential() {
        let server = MockServer::start();
        let with_auth = server.mock(|when, then| {
            when.method(POST)
                .path("/graphql")
                .header("Authorization", "Bearer secret-token");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "data": {} }));
        });

        let client = GraphqlClient::new(server.url("/graphql"));
        client
            .execute(&simple_request(), Some("secret-token"))
            .await
            .unwrap();
        with_auth.assert();

        // 沒有憑證時不應該帶 Authorization 標頭
        let server = MockServer::start();
        let without_auth = server.mock(|when, then| {
            when.method(POST)
                .path("/graphql")
                .matches(|req| {
                    req.headers.as_ref().map_or(true, |headers| {
                        !headers
                            .iter()
                            .any(|(name, _)| name.eq_ignore_ascii_case("authorization"))
                    })
                });
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({ "data": {} }));
        });

        let client = GraphqlClient::new(server.url("/graphql"));
        client.execute(&simple_request(), None).await.unwrap();
        without_auth.assert();
    }

    #[tokio::test]
    async fn test_execute_surfaces_first_backend_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/graphql");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "errors": [
                        { "message": "Field 'ping' not found" },
                        { "message": "Second error" }
                    ]
                }));
        });

        let client = GraphqlClient::new(server.url("/graphql"));
        let error = client.execute(&simple_request(), None).await.unwrap_err();

        match error {
            ExpoError::RemoteError { message } => {
                assert_eq!(message, "Field 'ping' not found");
            }
            other => panic!("Expected RemoteError, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_network_failure_is_transport_error() {
        // 指向沒有服務的端口
        let client = GraphqlClient::new("http://127.0.0.1:9");
        let error = client.execute(&simple_request(), None).await.unwrap_err();

        assert!(matches!(error, ExpoError::TransportError(_)));
    }
}
