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

//! Terminal rendering of a finished plan.

use crate::flights_query_builder::booking_link;
use crate::flights_results_parser::{FlightOffer, format_flight_time};
use crate::plan_orchestrator::TravelPlan;
use crate::trip_request::TripRequest;

/// Shown whenever a run ends with zero offers.
pub const NO_FLIGHTS_NOTICE: &str = "⚠️ No flights found";

/// Get terminal width for responsive output
fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(100)
}

fn dash_bar() -> String {
    "-".repeat(get_terminal_width().min(100))
}

fn title_bar() -> String {
    "=".repeat(get_terminal_width().min(100))
}

/// Format duration in hours/minutes.
pub fn fmt_duration(minutes: i64) -> String {
    let hrs = minutes / 60;
    let mins = minutes % 60;
    if mins == 0 {
        format!("{}h", hrs)
    } else if hrs == 0 {
        format!("{}m", mins)
    } else {
        format!("{}h {:02}m", hrs, mins)
    }
}

fn fmt_price(price: Option<i64>) -> String {
    price.map_or("N/A".to_string(), |p| p.to_string())
}

fn render_offer(out: &mut String, rank: usize, offer: &FlightOffer, link: &str) {
    let airline = offer.airline.as_deref().unwrap_or("Unknown Airline");
    let dep = format_flight_time(offer.departure_time.as_deref().unwrap_or(""));
    let arr = format_flight_time(offer.arrival_time.as_deref().unwrap_or(""));
    let duration = offer
        .total_duration_minutes
        .map_or("N/A".to_string(), fmt_duration);

    out.push_str(&format!("  #{}  ✈️ {}\n", rank, airline));
    out.push_str(&format!("      🛫 {}  →  🛬 {}\n", dep, arr));
    out.push_str(&format!(
        "      ⏱ {}   💰 ₹ {}\n",
        duration,
        fmt_price(offer.price)
    ));
    out.push_str(&format!("      🔗 {}\n\n", link));
}

fn trip_notes(trip: &TripRequest) -> Vec<&'static str> {
    let mut notes = Vec::new();
    if trip.visa_required {
        notes.push("🛂 Visa required");
    }
    if trip.travel_insurance {
        notes.push("🛡️ Travel insurance");
    }
    notes
}

/// Assemble the full plan report: flights first, then the three text blocks.
pub fn render_plan(plan: &TravelPlan, trip: &TripRequest) -> String {
    let bar = title_bar();
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n  🛫  {} → {} | {} → {}\n  🎭  {}-day {} | {} budget | {} class | Hotels: {}\n",
        bar,
        trip.origin_code,
        trip.destination_code,
        trip.departure_date.format("%Y-%m-%d"),
        trip.return_date.format("%Y-%m-%d"),
        trip.num_days,
        trip.theme,
        trip.budget_tier,
        trip.flight_class,
        trip.hotel_rating
    ));
    let notes = trip_notes(trip);
    if !notes.is_empty() {
        out.push_str(&format!("  📋  {}\n", notes.join(" | ")));
    }
    out.push_str(&format!("{}\n\n", bar));

    out.push_str("✈️ Cheapest Flights\n");
    out.push_str(&format!("{}\n", dash_bar()));
    if plan.offers.is_empty() {
        out.push_str(&format!("{}\n\n", NO_FLIGHTS_NOTICE));
    } else {
        let link = booking_link(
            &trip.origin_code,
            &trip.destination_code,
            &trip.departure_date.format("%Y-%m-%d").to_string(),
            &trip.return_date.format("%Y-%m-%d").to_string(),
        );
        for (i, offer) in plan.offers.iter().enumerate() {
            render_offer(&mut out, i + 1, offer, &link);
        }
    }

    out.push_str("🔍 Destination Research\n");
    out.push_str(&format!("{}\n{}\n\n", dash_bar(), plan.research));

    out.push_str("🏨 Hotels & Restaurants\n");
    out.push_str(&format!("{}\n{}\n\n", dash_bar(), plan.lodging));

    out.push_str("🗺️ Personalized Itinerary\n");
    out.push_str(&format!("{}\n{}\n\n", dash_bar(), plan.itinerary));

    out.push_str("✅ Travel plan generated successfully!\n");
    out
}
