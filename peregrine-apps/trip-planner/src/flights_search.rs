//!  Peregrine Trip Planner
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # SerpAPI Flights Search Client
//!
//! Effectful (network) operations for the Google Flights engine.
//! Transport and HTTP-status failures are errors; a well-formed response
//! without offers is a zero-result search.

use crate::flights_query_builder::FlightQueryParams;
use crate::flights_results_parser::{FlightOffer, select_cheapest};
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use wreq::redirect::Policy;

#[derive(Clone)]
pub struct SerpApiFlightsClient {
    client: Arc<wreq::Client>,
    api_key: String,
}

impl SerpApiFlightsClient {
    pub fn new(api_key: String, timeout_secs: u64) -> Result<Self> {
        let client = wreq::Client::builder()
            .redirect(Policy::default())
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client: Arc::new(client),
            api_key,
        })
    }

    /// Fetch one search URL and parse the JSON body.
    ///
    /// The URL carries the API key, so it is never logged.
    pub async fn fetch_raw(&self, url: &str) -> Result<Value> {
        let http_start = std::time::Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Request failed")?;

        let status = response.status();
        let body = response.text().await.context("Read body")?;
        tracing::debug!(
            "[fetch_raw] HTTP {} in {:?}: {} KB",
            status.as_u16(),
            http_start.elapsed(),
            body.len() / 1024
        );

        if !status.is_success() {
            let body_preview = body.chars().take(500).collect::<String>();
            bail!("HTTP error {}: {}", status, body_preview);
        }

        serde_json::from_str(&body).context("Provider response is not valid JSON")
    }

    /// Run one flight search and return the cheapest offers, at most three,
    /// sorted ascending by price.
    pub async fn search_cheapest(&self, params: &FlightQueryParams) -> Result<Vec<FlightOffer>> {
        let overall_start = std::time::Instant::now();
        tracing::info!(
            "🛫 Searching flights {} → {} on {} (return {})",
            params.departure_id,
            params.arrival_id,
            params.outbound_date,
            params.return_date
        );

        let url = params.search_url(&self.api_key);
        let data = self.fetch_raw(&url).await.context("Flight search failed")?;

        let offers = select_cheapest(&data);
        if offers.is_empty() {
            tracing::warn!(
                "No flights in provider response for {} → {}",
                params.departure_id,
                params.arrival_id
            );
        }

        tracing::info!(
            "Flight search completed in {:?}: {} offers",
            overall_start.elapsed(),
            offers.len()
        );
        Ok(offers)
    }
}
