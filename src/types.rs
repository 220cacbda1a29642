//! Response bodies, shaped after what the upstream sends.
//!
//! The upstream changes these payloads without notice. Declared fields it may
//! leave out are `Option`s that are skipped again on serialization, and
//! anything undeclared lands in `extra`, so a decoded value serializes back to
//! the body it came from.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ids come back as `"123"` from some endpoints and `123` from others; the
/// variant records which, so the id serializes back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(u64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{n}"),
            Id::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_division: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_info: Option<ClubDetails>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_kit: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Club details keyed by club id, one entry per requested id.
pub type ClubInfo = HashMap<String, ClubDetails>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_division: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games_played: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub losses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals_against: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relegations: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_ago: Option<TimeAgo>,
    /// Per-club result, keyed by club id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clubs: Option<HashMap<String, MatchClub>>,
    /// Per-player line, keyed by club id then player name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<HashMap<String, HashMap<String, Map<String, Value>>>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeAgo {
    pub number: u64,
    pub unit: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchClub {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals_against: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ClubDetails>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub members: Vec<Member>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_count: Option<HashMap<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games_played: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pro_pos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pro_overall: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_ave: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_position: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCareerStats {
    pub members: Vec<CareerMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_count: Option<HashMap<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMember {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pro_pos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games_played: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub man_of_the_match: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_ave: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_position: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
