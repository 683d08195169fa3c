use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 一次 GraphQL 查詢的文件與變數
#[derive(Debug, Clone)]
pub struct GraphqlRequest {
    pub document: String,
    pub variables: Option<Value>,
}

/// LteEvents 清單回傳的展會事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LteEvent {
    pub id: i64,
    #[serde(rename = "Year", default)]
    pub year: i32,
    #[serde(default)]
    pub schedule_ref: String,
    #[serde(default)]
    pub schedule_date: String,
    #[serde(default)]
    pub schedule_time: String,
    #[serde(default)]
    pub language_c: String,
    #[serde(default)]
    pub language_e: String,
    #[serde(default)]
    pub location_c: String,
    #[serde(default)]
    pub location_e: String,
    #[serde(default)]
    pub location_icon: Option<String>,
    #[serde(default)]
    pub topic_c: String,
    #[serde(default)]
    pub topic_e: String,
    #[serde(default)]
    pub abstract_c: String,
    #[serde(default)]
    pub abstract_e: String,
    #[serde(default)]
    pub speakers: Vec<LteEventSpeaker>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LteEventSpeaker {
    pub id: i64,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub event_id: String,
    #[serde(default)]
    pub name_c: String,
    #[serde(default)]
    pub name_e: String,
    #[serde(default)]
    pub title_c: String,
    #[serde(default)]
    pub title_e: String,
}

/// 使用者的三組預選 ID，線上可能是數字或數字字串
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresetRecommendation {
    #[serde(rename = "exhibitorIds", default)]
    pub exhibitor_ids: Vec<Value>,
    #[serde(rename = "mainStageEventIds", default)]
    pub main_stage_event_ids: Vec<Value>,
    #[serde(rename = "otherEventIds", default)]
    pub other_event_ids: Vec<Value>,
}

/// userPresetList 的回應外層
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresetListEnvelope {
    #[serde(default)]
    pub recommendation: PresetRecommendation,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
