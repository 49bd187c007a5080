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

//! Offer selection tests over canned SerpAPI Google Flights responses.
//!
//! The fixtures are real-shaped `search.json` payloads; these tests pin the
//! selection invariants (ascending price, bound of three, zero-result
//! handling) against them.
//!
//! Run with:
//!     cargo test --test t_offers_selection_fixtures

use serde_json::Value;
use std::path::Path;

use peregrine_trip_planner::{
    MAX_OFFERS, NO_FLIGHTS_NOTICE, TravelPlan, TripRequest, render_plan, select_cheapest,
};

fn load_fixture(name: &str) -> Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    serde_json::from_str(&raw).expect("fixture is valid JSON")
}

#[test]
fn test_selection_is_cheapest_three_in_ascending_order() {
    let response = load_fixture("google_flights_bom_del.json");
    let offers = select_cheapest(&response);

    assert_eq!(offers.len(), MAX_OFFERS);
    let prices: Vec<_> = offers.iter().map(|o| o.price).collect();
    assert_eq!(prices, vec![Some(9000), Some(12000), Some(13500)]);
    // the 15000 layover itinerary is the one dropped
    assert!(offers.iter().all(|o| o.price != Some(15000)));
}

#[test]
fn test_selected_offers_carry_segment_fields() {
    let response = load_fixture("google_flights_bom_del.json");
    let offers = select_cheapest(&response);

    let cheapest = &offers[0];
    assert_eq!(cheapest.airline.as_deref(), Some("IndiGo"));
    assert_eq!(cheapest.departure_time.as_deref(), Some("2025-03-10 14:30"));
    assert_eq!(cheapest.arrival_time.as_deref(), Some("2025-03-10 16:45"));
    assert_eq!(cheapest.total_duration_minutes, Some(135));
    assert_eq!(cheapest.currency, "INR");
}

#[test]
fn test_zero_result_response_yields_empty_selection() {
    let response = load_fixture("google_flights_no_results.json");
    assert!(
        response.get("error").is_some(),
        "fixture documents the provider's zero-result shape"
    );
    assert!(select_cheapest(&response).is_empty());
}

#[test]
fn test_zero_result_run_renders_explicit_notice() {
    use chrono::NaiveDate;
    use peregrine_trip_planner::{BudgetTier, FlightClass, HotelRating, TravelTheme};

    let response = load_fixture("google_flights_no_results.json");
    let plan = TravelPlan {
        offers: select_cheapest(&response),
        research: "research".to_string(),
        lodging: "lodging".to_string(),
        itinerary: "itinerary".to_string(),
    };
    let trip = TripRequest {
        origin_code: "BOM".to_string(),
        destination_code: "XXX".to_string(),
        departure_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        return_date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
        num_days: 5,
        theme: TravelTheme::SoloExploration,
        activity_preferences: "Hiking".to_string(),
        budget_tier: BudgetTier::Standard,
        flight_class: FlightClass::Economy,
        hotel_rating: HotelRating::Any,
        visa_required: false,
        travel_insurance: false,
    };

    let report = render_plan(&plan, &trip);
    assert!(report.contains(NO_FLIGHTS_NOTICE));
}
