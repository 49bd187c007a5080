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

// Library for peregrine-trip-planner
// Trip planning: cheap-flight search plus AI destination research

mod ai_client;
mod ai_prompts;
mod config;
mod flights_query_builder;
mod flights_results_parser;
mod flights_search;
mod plan_orchestrator;
mod plan_render;
mod trip_request;

pub use ai_client::{OPENROUTER_BASE_URL, OpenRouterClient, PLANNER_MODEL};
pub use ai_prompts::{itinerary_prompt, lodging_prompt, research_prompt};
pub use config::{OPENROUTER_KEY_VAR, PlannerConfig, SERPAPI_KEY_VAR};
pub use flights_query_builder::{
    CURRENCY, FLIGHTS_ENGINE, FlightQueryParams, LOCALE, SERPAPI_ENDPOINT, booking_link,
};
pub use flights_results_parser::{
    FlightOffer, MAX_OFFERS, TIME_PLACEHOLDER, format_flight_time, select_cheapest,
};
pub use flights_search::SerpApiFlightsClient;
pub use plan_orchestrator::{TravelPlan, generate_plan};
pub use plan_render::{NO_FLIGHTS_NOTICE, fmt_duration, render_plan};
pub use trip_request::{BudgetTier, FlightClass, HotelRating, TravelTheme, TripRequest};
