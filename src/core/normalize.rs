use crate::utils::error::{ExpoError, Result};
use serde_json::Value;

pub const PROGRAMME_ID_FIELD: &str = "event_id";
pub const PROGRAMME_TYPE_TAG: &str = "lte_event";
pub const EXHIBITOR_ID_FIELD: &str = "exhibitor_id";
pub const EXHIBITOR_TYPE_TAG: &str = "lte_exhibitor";

/// 把後端識別欄位改名為 id 並注入 type 標籤，其餘欄位原樣保留。
/// 識別欄位缺失視為後端回應格式錯誤。
pub fn normalize_record(mut raw: Value, id_field: &str, type_tag: &str) -> Result<Value> {
    let Some(object) = raw.as_object_mut() else {
        return Err(ExpoError::ProcessingError {
            message: format!("Expected a JSON object record, got: {}", raw),
        });
    };

    let id = object
        .remove(id_field)
        .ok_or_else(|| ExpoError::ProcessingError {
            message: format!("Record is missing identifier field '{}'", id_field),
        })?;
    object.insert("id".to_string(), id);
    object.insert("type".to_string(), Value::String(type_tag.to_string()));

    Ok(raw)
}

pub fn normalize_records(raw: Vec<Value>, id_field: &str, type_tag: &str) -> Result<Vec<Value>> {
    raw.into_iter()
        .map(|record| normalize_record(record, id_field, type_tag))
        .collect()
}
