use crate::core::query::preset_list_query;
use crate::domain::model::{PresetListEnvelope, PresetRecommendation};
use crate::domain::ports::GraphqlTransport;
use crate::utils::error::{ExpoError, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::str::FromStr;

/// 使用者預選清單的三種類別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    Exhibitor,
    MainStageEvent,
    OtherEvent,
}

impl FromStr for PresetKind {
    type Err = ExpoError;

    // 只會被內部選擇器用到，未知字串屬於程式錯誤
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "exhibitor" => Ok(Self::Exhibitor),
            "mainStageEvent" => Ok(Self::MainStageEvent),
            "otherEvent" => Ok(Self::OtherEvent),
            other => Err(ExpoError::InvalidArgument {
                message: format!("Unknown preset kind: {}", other),
            }),
        }
    }
}

impl PresetKind {
    fn select(self, recommendation: &PresetRecommendation) -> &[Value] {
        match self {
            Self::Exhibitor => &recommendation.exhibitor_ids,
            Self::MainStageEvent => &recommendation.main_stage_event_ids,
            Self::OtherEvent => &recommendation.other_event_ids,
        }
    }
}

/// 呼叫一次 userPresetList 並取出指定類別的 ID 集合。
/// 後端一次回傳三組 ID，這裡只挑需要的那組。
pub async fn fetch_preset_ids<T: GraphqlTransport>(
    transport: &T,
    kind: PresetKind,
    token: &str,
) -> Result<HashSet<i64>> {
    let request = preset_list_query();
    let data = transport.execute(&request, Some(token)).await?;

    let envelope: PresetListEnvelope = serde_json::from_value(
        data.get("userPresetList")
            .cloned()
            .unwrap_or_else(|| Value::Object(Default::default())),
    )?;

    if !envelope.success {
        return Err(ExpoError::RemoteError {
            message: envelope
                .message
                .unwrap_or_else(|| "Preset list lookup failed".to_string()),
        });
    }

    Ok(kind
        .select(&envelope.recommendation)
        .iter()
        .filter_map(numeric_id)
        .collect())
}

/// 線上 ID 可能是數字或數字字串，比較前一律轉成數值
pub fn numeric_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// 移除 ID 落在排除集合中的候選者，其餘保持原本順序。
/// 無法轉成數值的候選者一律保留。
pub fn exclude_chosen(
    candidates: Vec<Value>,
    id_field: &str,
    exclude: &HashSet<i64>,
) -> Vec<Value> {
    if exclude.is_empty() {
        return candidates;
    }

    candidates
        .into_iter()
        .filter(|candidate| {
            candidate
                .get(id_field)
                .and_then(numeric_id)
                .map_or(true, |id| !exclude.contains(&id))
        })
        .collect()
}
