use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::error::{LookupError, Stage};
use super::types::{Coordinates, IpResponse, Pass, PassResponse};
use crate::config::Config;

/// Owns the HTTP client and the three service endpoints.
pub struct LookupClient {
    client: Client,
    ip_api: String,
    geo_api: String,
    pass_api: String,
}

impl LookupClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            ip_api: config.ip_api.clone(),
            geo_api: config.geo_api.clone(),
            pass_api: config.pass_api.clone(),
        })
    }

    /// Ask the IP identification service who we are.
    pub async fn fetch_public_ip(&self) -> Result<String, LookupError> {
        let url = format!("{}/?format=json", self.ip_api);
        let body: IpResponse = self.get_json(Stage::PublicIp, &url).await?;
        tracing::debug!("public IP resolved to {}", body.ip);
        Ok(body.ip)
    }

    /// Resolve an IP address to approximate coordinates. The IP is embedded
    /// in the request path.
    pub async fn fetch_coordinates(&self, ip: &str) -> Result<Coordinates, LookupError> {
        let url = format!("{}/json/{}", self.geo_api, ip);
        let coords: Coordinates = self.get_json(Stage::Geolocation, &url).await?;
        tracing::debug!(
            "IP {} geolocated to ({}, {})",
            ip,
            coords.latitude,
            coords.longitude
        );
        Ok(coords)
    }

    /// Fetch the predicted passes for a position, in service order.
    pub async fn fetch_flyover_times(&self, coords: Coordinates) -> Result<Vec<Pass>, LookupError> {
        let url = format!(
            "{}/json/?lat={}&lon={}",
            self.pass_api, coords.latitude, coords.longitude
        );
        let body: PassResponse = self.get_json(Stage::Flyover, &url).await?;
        tracing::debug!("{} upcoming passes predicted", body.response.len());
        Ok(body.response)
    }

    /// Run the whole chain: IP, then coordinates, then flyover times. The
    /// first failed stage aborts the rest.
    pub async fn next_passes(&self) -> Result<Vec<Pass>, LookupError> {
        let ip = self.fetch_public_ip().await?;
        let coords = self.fetch_coordinates(&ip).await?;
        self.fetch_flyover_times(coords).await
    }

    /// Shared per-stage contract: GET the URL, require status exactly 200,
    /// decode the JSON body. The body is read as text first so a status
    /// error can carry it.
    async fn get_json<T: DeserializeOwned>(
        &self,
        stage: Stage,
        url: &str,
    ) -> Result<T, LookupError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| LookupError::Transport { stage, source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| LookupError::Transport { stage, source })?;

        if status != StatusCode::OK {
            return Err(LookupError::unexpected_status(stage, status, body));
        }

        serde_json::from_str(&body).map_err(|source| LookupError::Decode { stage, source })
    }
}
