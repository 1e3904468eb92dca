use super::game::GameWrapper;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreboardResponse {
    #[serde(default)]
    pub games: Vec<GameWrapper>,
}

/// Schedule payload. The metadata fields are echoed back untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduleResponse {
    #[serde(rename = "inputMD5Sum", default)]
    pub input_md5_sum: Option<String>,
    #[serde(rename = "instanceId", default)]
    pub instance_id: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(rename = "hideRank", default)]
    pub hide_rank: Option<bool>,
    #[serde(default)]
    pub games: Vec<GameWrapper>,
}
