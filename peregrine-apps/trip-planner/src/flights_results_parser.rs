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

//! # Flights Results Parser
//!
//! Side-effect free extraction of flight offers from the raw provider
//! response. Provider data is best-effort: every field beyond the currency
//! tag is optional and a malformed entry still yields an offer.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::flights_query_builder::CURRENCY;

/// Upper bound on offers kept from one response.
pub const MAX_OFFERS: usize = 3;

/// Rendered in place of any timestamp that fails to parse.
pub const TIME_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightOffer {
    pub airline: Option<String>,
    pub price: Option<i64>,
    pub currency: String,
    pub total_duration_minutes: Option<i64>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
}

impl FlightOffer {
    /// Normalize one `best_flights` entry. Airline and departure time come
    /// from the first segment, arrival time from the last.
    fn from_value(entry: &Value) -> Self {
        let segments = entry.get("flights").and_then(Value::as_array);
        let first = segments.and_then(|s| s.first());
        let last = segments.and_then(|s| s.last());

        Self {
            airline: first
                .and_then(|s| s.get("airline"))
                .and_then(Value::as_str)
                .map(str::to_string),
            price: entry.get("price").and_then(as_whole_number),
            currency: CURRENCY.to_string(),
            total_duration_minutes: entry.get("total_duration").and_then(as_whole_number),
            departure_time: first
                .and_then(|s| s.get("departure_airport"))
                .and_then(|a| a.get("time"))
                .and_then(Value::as_str)
                .map(str::to_string),
            arrival_time: last
                .and_then(|s| s.get("arrival_airport"))
                .and_then(|a| a.get("time"))
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

fn as_whole_number(v: &Value) -> Option<i64> {
    v.as_i64().or_else(|| v.as_f64().map(|f| f.round() as i64))
}

/// Pick the cheapest offers out of a raw provider response.
///
/// Missing `best_flights` is treated as an empty result set. The sort is
/// stable and ascending by price; offers without a price go last. At most
/// [`MAX_OFFERS`] entries are returned.
pub fn select_cheapest(response: &Value) -> Vec<FlightOffer> {
    let mut offers: Vec<FlightOffer> = response
        .get("best_flights")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(FlightOffer::from_value).collect())
        .unwrap_or_default();

    offers.sort_by_key(|o| (o.price.is_none(), o.price.unwrap_or(0)));
    offers.truncate(MAX_OFFERS);
    offers
}

/// Human-readable rendering of a `YYYY-MM-DD HH:MM` provider timestamp.
///
/// Total over all inputs: anything that does not parse renders as
/// [`TIME_PLACEHOLDER`].
pub fn format_flight_time(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
        Ok(t) => t.format("%d %b %Y | %I:%M %p").to_string(),
        Err(_) => TIME_PLACEHOLDER.to_string(),
    }
}
