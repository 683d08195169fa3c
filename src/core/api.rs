use crate::core::normalize::{
    normalize_records, EXHIBITOR_ID_FIELD, EXHIBITOR_TYPE_TAG, PROGRAMME_ID_FIELD,
    PROGRAMME_TYPE_TAG,
};
use crate::core::preset::{exclude_chosen, fetch_preset_ids, PresetKind};
use crate::core::query::{
    event_list_query, exhibitor_query, programme_query, speaker_list_query, EventListParams,
    LocationFilter, SpeakerListParams, MAIN_STAGE_CODE, VALID_SCHEDULE_DATES,
};
use crate::domain::model::{LteEvent, LteEventSpeaker};
use crate::domain::ports::GraphqlTransport;
use crate::utils::error::{ExpoError, Result};
use serde_json::Value;
use std::collections::HashSet;

/// 展會查詢管線：查詢組裝 → 傳輸 → 正規化 → 排除過濾
pub struct ExpoApi<T: GraphqlTransport> {
    transport: T,
}

impl<T: GraphqlTransport> ExpoApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// 取得指定年份的展會事件清單
    pub async fn fetch_all_events(&self, params: &EventListParams) -> Result<Vec<LteEvent>> {
        let request = event_list_query(params);
        let data = self.transport.execute(&request, None).await?;
        let events = data
            .get("LteEvents")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        Ok(serde_json::from_value(events)?)
    }

    /// 取得指定事件的演講者清單
    pub async fn fetch_event_speakers(
        &self,
        params: &SpeakerListParams,
    ) -> Result<Vec<LteEventSpeaker>> {
        let request = speaker_list_query(params);
        let data = self.transport.execute(&request, None).await?;
        let speakers = data
            .get("LteEventSpeakers")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        Ok(serde_json::from_value(speakers)?)
    }

    /// 依日期與場地取得節目清單，提供 token 時排除使用者已選事件。
    /// 日期驗證在任何網路呼叫之前。
    pub async fn fetch_filtered_programmes(
        &self,
        schedule_date: &str,
        location: LocationFilter,
        token: Option<&str>,
    ) -> Result<Vec<Value>> {
        if !VALID_SCHEDULE_DATES.contains(&schedule_date) {
            return Err(ExpoError::ValidationError {
                message: format!(
                    "Invalid date. Please choose one of: {}",
                    VALID_SCHEDULE_DATES.join(", ")
                ),
            });
        }

        let request = programme_query(schedule_date, location);
        let data = self.transport.execute(&request, None).await?;
        let mut programmes = as_record_array(data.get("programmes"))?;

        // main stage 在本地再守一次場地代碼；theatre 後端無法表達
        // "not X00"，只能取回後在本地排除主舞台
        match location {
            LocationFilter::MainStage => {
                programmes.retain(|programme| venue_code(programme) == Some(MAIN_STAGE_CODE));
            }
            LocationFilter::Theatre => {
                programmes.retain(|programme| venue_code(programme) != Some(MAIN_STAGE_CODE));
            }
            LocationFilter::All => {}
        }

        if let Some(token) = token {
            match self.exclusion_set(location, token).await {
                Ok(exclude) => {
                    programmes = exclude_chosen(programmes, PROGRAMME_ID_FIELD, &exclude);
                }
                Err(error) => {
                    // 預選清單查詢失敗時不過濾，照樣回傳完整結果
                    tracing::warn!(
                        "⚠️ Preset list lookup failed, returning unfiltered programmes: {}",
                        error
                    );
                }
            }
        }

        normalize_records(programmes, PROGRAMME_ID_FIELD, PROGRAMME_TYPE_TAG)
    }

    /// 取得所有展示商，提供 token 時排除使用者已選展示商
    pub async fn fetch_exhibitors(&self, token: Option<&str>) -> Result<Vec<Value>> {
        let request = exhibitor_query();
        let data = self.transport.execute(&request, None).await?;
        let mut exhibitors = as_record_array(data.get("exhibitors"))?;

        if let Some(token) = token {
            match fetch_preset_ids(&self.transport, PresetKind::Exhibitor, token).await {
                Ok(exclude) => {
                    exhibitors = exclude_chosen(exhibitors, EXHIBITOR_ID_FIELD, &exclude);
                }
                Err(error) => {
                    tracing::warn!(
                        "⚠️ Preset list lookup failed, returning unfiltered exhibitors: {}",
                        error
                    );
                }
            }
        }

        normalize_records(exhibitors, EXHIBITOR_ID_FIELD, EXHIBITOR_TYPE_TAG)
    }

    /// 決定排除集合：main stage / theatre 各對應一組，
    /// all 取兩組聯集，兩次查詢彼此獨立所以併發執行
    async fn exclusion_set(&self, location: LocationFilter, token: &str) -> Result<HashSet<i64>> {
        match location {
            LocationFilter::MainStage => {
                fetch_preset_ids(&self.transport, PresetKind::MainStageEvent, token).await
            }
            LocationFilter::Theatre => {
                fetch_preset_ids(&self.transport, PresetKind::OtherEvent, token).await
            }
            LocationFilter::All => {
                let (main_stage, other) = tokio::try_join!(
                    fetch_preset_ids(&self.transport, PresetKind::MainStageEvent, token),
                    fetch_preset_ids(&self.transport, PresetKind::OtherEvent, token),
                )?;
                Ok(main_stage.union(&other).copied().collect())
            }
        }
    }
}

fn venue_code(programme: &Value) -> Option<&str> {
    programme
        .pointer("/location_info/location_code")
        .and_then(Value::as_str)
}

fn as_record_array(value: Option<&Value>) -> Result<Vec<Value>> {
    match value {
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(other) => Err(ExpoError::ProcessingError {
            message: format!("Expected an array of records, got: {}", other),
        }),
    }
}
