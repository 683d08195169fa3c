use crate::domain::model::GraphqlRequest;
use crate::utils::error::ExpoError;
use serde_json::{json, Map, Value};
use std::str::FromStr;

/// 後端保留給主舞台的場地代碼
pub const MAIN_STAGE_CODE: &str = "X00";

/// 展會僅有的三個開放日（後端要求完整的午夜 UTC 時間戳）
pub const VALID_SCHEDULE_DATES: [&str; 3] = [
    "2025-07-02T00:00:00.000Z",
    "2025-07-03T00:00:00.000Z",
    "2025-07-04T00:00:00.000Z",
];

/// 節目查詢的場地選項
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationFilter {
    MainStage,
    Theatre,
    #[default]
    All,
}

impl FromStr for LocationFilter {
    type Err = ExpoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "main stage" => Ok(Self::MainStage),
            "theatre" => Ok(Self::Theatre),
            "all" => Ok(Self::All),
            other => Err(ExpoError::ValidationError {
                message: format!(
                    "Invalid location '{}'. Expected one of: main stage, theatre, all",
                    other
                ),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventListParams {
    pub year: i32,
    pub id: i64,
    pub skip: i64,
    pub take: i64,
    pub location: Option<String>,
}

impl EventListParams {
    /// id = 0 表示全部事件
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            id: 0,
            skip: 0,
            take: 20,
            location: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpeakerListParams {
    pub event_id: String,
    pub ids: Vec<i64>,
    pub skip: i64,
    pub take: i64,
}

impl SpeakerListParams {
    pub fn for_event(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            ids: Vec::new(),
            skip: 0,
            take: 20,
        }
    }
}

/// LteEvents 事件清單查詢。
/// location 為空字串或未提供時整個子句省略，與「不過濾」等價。
pub fn event_list_query(params: &EventListParams) -> GraphqlRequest {
    let mut declarations = String::from("$id: Int!, $skip: Int!, $take: Int!, $year: Int!");
    let mut arguments = String::from("id: $id, skip: $skip, take: $take, Year: $year");
    let mut variables = Map::new();
    variables.insert("id".to_string(), json!(params.id));
    variables.insert("skip".to_string(), json!(params.skip));
    variables.insert("take".to_string(), json!(params.take));
    variables.insert("year".to_string(), json!(params.year));

    if let Some(location) = params.location.as_deref().filter(|l| !l.is_empty()) {
        declarations.push_str(", $location: String!");
        arguments.push_str(", location: $location");
        variables.insert("location".to_string(), json!(location));
    }

    let document = format!(
        r#"query LteEvents({declarations}) {{
  LteEvents({arguments}) {{
    id
    Year
    schedule_ref
    schedule_date
    schedule_time
    language_c
    language_e
    location_c
    location_e
    location_icon
    topic_c
    topic_e
    abstract_c
    abstract_e
    speakers {{
      id
      year
      event_id
      name_c
      name_e
      title_c
      title_e
    }}
  }}
}}"#
    );

    GraphqlRequest {
        document,
        variables: Some(Value::Object(variables)),
    }
}

/// LteEventSpeakers 演講者清單查詢。
/// ids 為空時省略 id 子句。
pub fn speaker_list_query(params: &SpeakerListParams) -> GraphqlRequest {
    let mut declarations = String::from("$eventId: String!, $skip: Int!, $take: Int!");
    let mut arguments = String::from("event_id: $eventId, skip: $skip, take: $take");
    let mut variables = Map::new();
    variables.insert("eventId".to_string(), json!(params.event_id));
    variables.insert("skip".to_string(), json!(params.skip));
    variables.insert("take".to_string(), json!(params.take));

    if !params.ids.is_empty() {
        declarations.push_str(", $ids: [Int!]!");
        arguments.push_str(", id: $ids");
        variables.insert("ids".to_string(), json!(params.ids));
    }

    let document = format!(
        r#"query LteEventSpeakers({declarations}) {{
  LteEventSpeakers({arguments}) {{
    id
    year
    event_id
    name_c
    name_e
    title_c
    title_e
  }}
}}"#
    );

    GraphqlRequest {
        document,
        variables: Some(Value::Object(variables)),
    }
}

/// programmes 節目查詢。
/// 只有 main stage 送出 location_code 過濾；theatre 無法在後端表達
/// "not X00"，由呼叫端取回後在本地排除。
pub fn programme_query(schedule_date: &str, location: LocationFilter) -> GraphqlRequest {
    let mut declarations = String::from("$date: String!");
    let mut arguments = String::from("date: $date");
    let mut variables = Map::new();
    variables.insert("date".to_string(), json!(schedule_date));

    if location == LocationFilter::MainStage {
        declarations.push_str(", $locationCode: String!");
        arguments.push_str(", location_code: $locationCode");
        variables.insert("locationCode".to_string(), json!(MAIN_STAGE_CODE));
    }

    let document = format!(
        r#"query Programmes({declarations}) {{
  programmes({arguments}) {{
    event_id
    topic_e
    language_e
    abstract_e
    schedule_time
    location_info {{
      title_e
      location_code
    }}
  }}
}}"#
    );

    GraphqlRequest {
        document,
        variables: Some(Value::Object(variables)),
    }
}

/// exhibitors 展示商查詢，欄位固定
pub fn exhibitor_query() -> GraphqlRequest {
    let document = r#"query Exhibitors {
  exhibitors {
    exhibitor_id
    name_e
    description_e
    abstract_e
  }
}"#
    .to_string();

    GraphqlRequest {
        document,
        variables: None,
    }
}

/// userPresetList 預選清單查詢。
/// 後端一次回傳三組 ID，由呼叫端挑選需要的那組。
pub fn preset_list_query() -> GraphqlRequest {
    let document = r#"query UserPresetList {
  userPresetList {
    recommendation {
      exhibitorIds
      mainStageEventIds
      otherEventIds
    }
    success
    message
  }
}"#
    .to_string();

    GraphqlRequest {
        document,
        variables: None,
    }
}
