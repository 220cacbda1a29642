use std::env;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use proclubs::config::DEFAULT_BASE_URL;
use proclubs::{ClientConfig, Endpoint, ProClubsClient};

#[derive(Parser, Debug)]
#[command(about = "Query the Pro Clubs statistics API and print the raw JSON")]
pub struct Cli {
    /// Skip TLS certificate verification (also PROCLUBS_ACCEPT_INVALID_CERTS=1).
    #[arg(long, global = true)]
    pub insecure: bool,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Args, Debug)]
pub struct ClubArgs {
    /// Numeric club id.
    pub club_id: String,
    #[arg(long, default_value = "common-gen5")]
    pub platform: String,
}

#[derive(Args, Debug)]
pub struct ClubsArgs {
    /// One or more numeric club ids, comma-separated.
    pub club_ids: String,
    #[arg(long, default_value = "common-gen5")]
    pub platform: String,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    SearchClub {
        name: String,
        #[arg(long, default_value = "common-gen5")]
        platform: String,
    },
    OverallStats(ClubsArgs),
    MemberCareerStats(ClubArgs),
    MemberStats(ClubArgs),
    MatchesStats {
        #[command(flatten)]
        clubs: ClubsArgs,
        /// leagueMatch or playoffMatch.
        #[arg(long)]
        match_type: Option<String>,
    },
    ClubInfo(ClubsArgs),
}

fn config(insecure: bool) -> ClientConfig {
    let base_url = env::var("PROCLUBS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
    let insecure = insecure
        || env::var("PROCLUBS_ACCEPT_INVALID_CERTS")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

    ClientConfig::default()
        .with_base_url(base_url)
        .accept_invalid_certs(insecure)
}

fn club_query(args: &ClubArgs) -> Value {
    serde_json::json!({ "clubId": args.club_id, "platform": args.platform })
}

fn clubs_query(args: &ClubsArgs) -> Value {
    serde_json::json!({ "clubIds": args.club_ids, "platform": args.platform })
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let client = ProClubsClient::with_config(config(self.insecure))?;

        let (endpoint, query) = match self.cmd {
            Cmd::SearchClub { name, platform } => (
                Endpoint::ClubSearch,
                serde_json::json!({ "name": name, "platform": platform }),
            ),
            Cmd::OverallStats(args) => (Endpoint::OverallStats, clubs_query(&args)),
            Cmd::MemberCareerStats(args) => (Endpoint::MemberCareerStats, club_query(&args)),
            Cmd::MemberStats(args) => (Endpoint::MemberStats, club_query(&args)),
            Cmd::MatchesStats { clubs, match_type } => {
                let mut query = clubs_query(&clubs);
                if let Some(match_type) = match_type {
                    query["matchType"] = match_type.into();
                }
                (Endpoint::MatchesStats, query)
            }
            Cmd::ClubInfo(args) => (Endpoint::ClubInfo, clubs_query(&args)),
        };

        let json = client.fetch_json(endpoint, &query).await?;
        println!("{}", serde_json::to_string_pretty(&json)?);

        Ok(())
    }
}
