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

//! # Plan Orchestrator
//!
//! One plan generation run: flight search, then the three planner prompts,
//! strictly in sequence. The first failed step aborts the run; no partial
//! plan is produced.

use crate::ai_client::OpenRouterClient;
use crate::ai_prompts::{itinerary_prompt, lodging_prompt, research_prompt};
use crate::flights_query_builder::FlightQueryParams;
use crate::flights_results_parser::FlightOffer;
use crate::flights_search::SerpApiFlightsClient;
use crate::trip_request::TripRequest;
use anyhow::{Context, Result};

/// Everything one run produces, handed to the renderer as a unit.
#[derive(Debug, Clone)]
pub struct TravelPlan {
    pub offers: Vec<FlightOffer>,
    pub research: String,
    pub lodging: String,
    pub itinerary: String,
}

pub async fn generate_plan(
    flights: &SerpApiFlightsClient,
    planner: &OpenRouterClient,
    trip: &TripRequest,
) -> Result<TravelPlan> {
    let overall_start = std::time::Instant::now();

    tracing::info!("✈️ Fetching flights...");
    let offers = flights
        .search_cheapest(&FlightQueryParams::from_trip(trip))
        .await?;

    tracing::info!("🔍 Researching destination...");
    let research = planner
        .complete(&research_prompt(trip))
        .await
        .context("Destination research failed")?;

    tracing::info!("🏨 Finding hotels & food...");
    let lodging = planner
        .complete(&lodging_prompt(trip))
        .await
        .context("Lodging suggestions failed")?;

    tracing::info!("🗺️ Creating itinerary...");
    let offers_json = serde_json::to_string(&offers).context("Serialize offers")?;
    let itinerary = planner
        .complete(&itinerary_prompt(trip, &offers_json))
        .await
        .context("Itinerary generation failed")?;

    tracing::info!(
        "Plan generated in {:?}: {} offers, {} research chars, {} itinerary chars",
        overall_start.elapsed(),
        offers.len(),
        research.len(),
        itinerary.len()
    );

    Ok(TravelPlan {
        offers,
        research,
        lodging,
        itinerary,
    })
}
