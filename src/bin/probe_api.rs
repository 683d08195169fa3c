use lte_expo_mcp::config::DEFAULT_API_ENDPOINT;
use lte_expo_mcp::core::api::ExpoApi;
use lte_expo_mcp::core::client::GraphqlClient;
use lte_expo_mcp::core::query::{
    EventListParams, LocationFilter, SpeakerListParams, VALID_SCHEDULE_DATES,
};
use lte_expo_mcp::utils::error::Result;

/// 手動對真實端點跑一輪四個查詢（用於驗證後端 schema）
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let endpoint = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());
    println!("🚀 測試 LTE API: {}", endpoint);

    let api = ExpoApi::new(GraphqlClient::new(endpoint));

    // 事件清單
    let params = EventListParams {
        take: 5,
        ..EventListParams::for_year(2025)
    };
    let events = api.fetch_all_events(&params).await?;
    println!("✅ 取得 {} 個展會事件", events.len());

    if let Some(first) = events.first() {
        println!("  - ID: {}", first.id);
        println!("  - 參考編號: {}", first.schedule_ref);
        println!("  - 主題: {}", first.topic_c);
        println!("  - 演講者數量: {}", first.speakers.len());

        // 演講者清單
        let speakers = api
            .fetch_event_speakers(&SpeakerListParams::for_event(first.id.to_string()))
            .await?;
        println!("✅ 取得 {} 位演講者", speakers.len());
    }

    // 節目清單
    let programmes = api
        .fetch_filtered_programmes(VALID_SCHEDULE_DATES[0], LocationFilter::All, None)
        .await?;
    println!("✅ 取得 {} 個節目", programmes.len());

    // 展示商
    let exhibitors = api.fetch_exhibitors(None).await?;
    println!("✅ 取得 {} 個展示商", exhibitors.len());

    println!("🎉 測試完成");
    Ok(())
}
