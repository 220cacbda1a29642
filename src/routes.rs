use crate::schema::{self, Schema};

/// Every upstream operation this client can call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ClubSearch,
    OverallStats,
    MemberCareerStats,
    MemberStats,
    MatchesStats,
    ClubInfo,
}

/// Path relative to the API base URL, and the schema its query must satisfy.
#[derive(Clone, Copy, Debug)]
pub struct Route {
    pub path: &'static str,
    pub schema: &'static Schema,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::ClubSearch,
        Endpoint::OverallStats,
        Endpoint::MemberCareerStats,
        Endpoint::MemberStats,
        Endpoint::MatchesStats,
        Endpoint::ClubInfo,
    ];

    pub fn route(self) -> Route {
        match self {
            Endpoint::ClubSearch => Route {
                path: "clubs/search",
                schema: &schema::CLUB_SEARCH,
            },
            Endpoint::OverallStats => Route {
                path: "clubs/overallStats",
                schema: &schema::OVERALL_STATS,
            },
            Endpoint::MemberCareerStats => Route {
                path: "members/career/stats",
                schema: &schema::MEMBER_CAREER_STATS,
            },
            Endpoint::MemberStats => Route {
                path: "members/stats",
                schema: &schema::MEMBER_STATS,
            },
            Endpoint::MatchesStats => Route {
                path: "clubs/matches",
                schema: &schema::MATCHES_STATS,
            },
            Endpoint::ClubInfo => Route {
                path: "clubs/info",
                schema: &schema::CLUB_INFO,
            },
        }
    }

    pub fn path(self) -> &'static str {
        self.route().path
    }

    pub fn schema(self) -> &'static Schema {
        self.route().schema
    }
}
