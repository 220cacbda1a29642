use serde::{Deserialize, Serialize};

/// Platform codes the upstream accepts.
pub const PLATFORMS: &[&str] = &["common-gen5", "common-gen4", "nx"];

/// Match types the upstream accepts for the matches endpoint.
pub const MATCH_TYPES: &[&str] = &["leagueMatch", "playoffMatch"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    CommonGen5,
    CommonGen4,
    Nx,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::CommonGen5 => "common-gen5",
            Platform::CommonGen4 => "common-gen4",
            Platform::Nx => "nx",
        }
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        platform.as_str().into()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchType {
    League,
    Playoff,
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::League => "leagueMatch",
            MatchType::Playoff => "playoffMatch",
        }
    }
}

impl From<MatchType> for String {
    fn from(match_type: MatchType) -> Self {
        match_type.as_str().into()
    }
}

// Fields are serialized in declaration order, which becomes the query
// parameter order. Values stay plain strings so the schema decides what is
// acceptable.

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubSearchInput {
    pub name: String,
    pub platform: String,
}

impl ClubSearchInput {
    pub fn new(name: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            platform: platform.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStatsInput {
    pub club_ids: String,
    pub platform: String,
}

impl OverallStatsInput {
    pub fn new(club_ids: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            club_ids: club_ids.into(),
            platform: platform.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatsInput {
    pub club_id: String,
    pub platform: String,
}

impl MemberStatsInput {
    pub fn new(club_id: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            club_id: club_id.into(),
            platform: platform.into(),
        }
    }
}

/// Same shape as [`MemberStatsInput`], kept separate so each endpoint owns its
/// parameter type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCareerStatsInput {
    pub club_id: String,
    pub platform: String,
}

impl MemberCareerStatsInput {
    pub fn new(club_id: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            club_id: club_id.into(),
            platform: platform.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesStatsInput {
    pub club_ids: String,
    pub platform: String,
    /// `leagueMatch` unless set otherwise.
    pub match_type: String,
}

impl MatchesStatsInput {
    pub fn new(club_ids: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            club_ids: club_ids.into(),
            platform: platform.into(),
            match_type: MatchType::League.into(),
        }
    }

    pub fn with_match_type(mut self, match_type: impl Into<String>) -> Self {
        self.match_type = match_type.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubInfoInput {
    pub club_ids: String,
    pub platform: String,
}

impl ClubInfoInput {
    pub fn new(club_ids: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            club_ids: club_ids.into(),
            platform: platform.into(),
        }
    }
}
