use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ConfigError, DecodeError, Error};
use crate::inputs::*;
use crate::routes::Endpoint;
use crate::transport::{HttpTransport, Transport};
use crate::types::*;

/// Client for the Pro Clubs statistics API.
///
/// Every call validates its input, builds the URL, performs exactly one GET
/// and decodes the body. Nothing is cached or retried, and calls share no
/// state beyond the transport's connection pool.
pub struct ProClubsClient<T = HttpTransport> {
    transport: T,
    base_url: Url,
}

impl ProClubsClient<HttpTransport> {
    pub fn new() -> Result<Self, Error> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(transport, &config)
    }
}

impl<T: Transport> ProClubsClient<T> {
    pub fn with_transport(transport: T, config: &ClientConfig) -> Result<Self, Error> {
        Ok(Self {
            transport,
            base_url: config.parsed_base_url()?,
        })
    }

    /// Validates `input` against the endpoint's schema and returns the full
    /// request URL, without doing any I/O.
    pub fn build_url<I: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        input: &I,
    ) -> Result<Url, Error> {
        let route = endpoint.route();
        let pairs = route.schema.validate(input)?;

        let mut url = self
            .base_url
            .join(route.path)
            .map_err(|e| ConfigError::BaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    async fn send<I: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        input: &I,
    ) -> Result<(Url, Value), Error> {
        let url = self.build_url(endpoint, input)?;
        tracing::debug!(?endpoint, %url, "GET");
        let json = self.transport.get_json(&url).await?;
        Ok((url, json))
    }

    /// Calls `endpoint` and returns the JSON body untouched.
    pub async fn fetch_json<I: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        input: &I,
    ) -> Result<Value, Error> {
        let (_, json) = self.send(endpoint, input).await?;
        Ok(json)
    }

    async fn get<I: Serialize + ?Sized, M: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        input: &I,
    ) -> Result<M, Error> {
        let (url, json) = self.send(endpoint, input).await?;
        Ok(serde_json::from_value(json).map_err(|source| DecodeError::new(&url, source))?)
    }

    pub async fn search_club(&self, input: &ClubSearchInput) -> Result<Vec<Club>, Error> {
        self.get(Endpoint::ClubSearch, input).await
    }

    pub async fn overall_stats(&self, input: &OverallStatsInput) -> Result<Vec<OverallStats>, Error> {
        self.get(Endpoint::OverallStats, input).await
    }

    pub async fn member_career_stats(
        &self,
        input: &MemberCareerStatsInput,
    ) -> Result<MemberCareerStats, Error> {
        self.get(Endpoint::MemberCareerStats, input).await
    }

    pub async fn member_stats(&self, input: &MemberStatsInput) -> Result<MemberStats, Error> {
        self.get(Endpoint::MemberStats, input).await
    }

    pub async fn matches_stats(&self, input: &MatchesStatsInput) -> Result<Vec<Match>, Error> {
        self.get(Endpoint::MatchesStats, input).await
    }

    /// The response is keyed by club id; index it with the id you asked for.
    pub async fn club_info(&self, input: &ClubInfoInput) -> Result<ClubInfo, Error> {
        self.get(Endpoint::ClubInfo, input).await
    }
}
