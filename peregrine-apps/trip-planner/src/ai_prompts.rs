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

//! # Planner Prompts
//!
//! Side-effect free prompt assembly for the three plan categories.
//! The three prompts share input fields but not each other's output;
//! the itinerary additionally takes the selected offers as JSON.

use crate::trip_request::TripRequest;

pub fn research_prompt(trip: &TripRequest) -> String {
    format!(
        "Research top attractions, safety tips, and best experiences in {} for a {}-day {}. Activities: {}.",
        trip.destination_code, trip.num_days, trip.theme, trip.activity_preferences
    )
}

pub fn lodging_prompt(trip: &TripRequest) -> String {
    format!(
        "Suggest best hotels ({}) and restaurants in {} for a {} budget.",
        trip.hotel_rating, trip.destination_code, trip.budget_tier
    )
}

pub fn itinerary_prompt(trip: &TripRequest, offers_json: &str) -> String {
    format!(
        "Create a detailed {}-day itinerary for {}. Theme: {}. Budget: {}. Activities: {}. Flights: {}.",
        trip.num_days,
        trip.destination_code,
        trip.theme,
        trip.budget_tier,
        trip.activity_preferences,
        offers_json
    )
}
