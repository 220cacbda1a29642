//! Typed client for the EA Sports FC Pro Clubs statistics API.
//!
//! Each [`ProClubsClient`] method checks its input against the endpoint's
//! [`schema`], joins the endpoint's path from the [`routes`] table onto the
//! base URL, sends a single GET through a [`Transport`] and decodes the JSON
//! body into the endpoint's [`types`].

pub mod api_client;
pub mod config;
pub mod error;
pub mod inputs;
pub mod routes;
pub mod schema;
pub mod transport;
pub mod types;

pub use api_client::ProClubsClient;
pub use config::ClientConfig;
pub use error::{ConfigError, DecodeError, Error, InputValidationError, TransportError, Violation};
pub use inputs::{
    ClubInfoInput, ClubSearchInput, MatchType, MatchesStatsInput, MemberCareerStatsInput,
    MemberStatsInput, OverallStatsInput, Platform,
};
pub use routes::Endpoint;
pub use transport::{HttpTransport, Transport};
