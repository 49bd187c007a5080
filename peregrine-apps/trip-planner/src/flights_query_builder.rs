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

//! # Flights Query Builder
//!
//! Side-effect free query encoding for the SerpAPI Google Flights engine.
//! Builds the `search.json` query string and the user-facing booking link.

use crate::trip_request::TripRequest;

pub const SERPAPI_ENDPOINT: &str = "https://serpapi.com/search.json";
pub const FLIGHTS_ENGINE: &str = "google_flights";
pub const CURRENCY: &str = "INR";
pub const LOCALE: &str = "en";

/// Provider-facing search parameters. Codes and dates are carried verbatim;
/// the provider owns validation and its error response surfaces as zero offers.
#[derive(Debug, Clone)]
pub struct FlightQueryParams {
    pub departure_id: String,
    pub arrival_id: String,
    pub outbound_date: String,
    pub return_date: String,
}

impl FlightQueryParams {
    pub fn from_trip(trip: &TripRequest) -> Self {
        Self {
            departure_id: trip.origin_code.clone(),
            arrival_id: trip.destination_code.clone(),
            outbound_date: trip.departure_date.format("%Y-%m-%d").to_string(),
            return_date: trip.return_date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Ordered query pairs, fixed engine/currency/locale included.
    pub fn query_pairs(&self, api_key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("engine", FLIGHTS_ENGINE.to_string()),
            ("departure_id", self.departure_id.clone()),
            ("arrival_id", self.arrival_id.clone()),
            ("outbound_date", self.outbound_date.clone()),
            ("return_date", self.return_date.clone()),
            ("currency", CURRENCY.to_string()),
            ("hl", LOCALE.to_string()),
            ("api_key", api_key.to_string()),
        ]
    }

    pub fn search_url(&self, api_key: &str) -> String {
        let query = self
            .query_pairs(api_key)
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", SERPAPI_ENDPOINT, query)
    }
}

/// Google Flights deep link for manual booking.
///
/// Plain interpolation: inputs must already be URL-safe, pathological codes
/// produce a malformed link rather than an error.
pub fn booking_link(origin: &str, destination: &str, outbound_date: &str, return_date: &str) -> String {
    format!(
        "https://www.google.com/travel/flights?q=Flights%20from%20{}%20to%20{}%20on%20{}%20returning%20{}",
        origin, destination, outbound_date, return_date
    )
}
