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

//! CLI for end-to-end travel plan generation.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use peregrine_trip_planner::{
    BudgetTier, FlightClass, HotelRating, OpenRouterClient, PlannerConfig, SerpApiFlightsClient,
    TravelTheme, TripRequest, generate_plan, render_plan,
};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "peregrine-plan")]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Origin airport code (e.g., BOM, SFO)
    #[arg(short, long, default_value = "BOM")]
    from: String,

    /// Destination airport code (e.g., DEL, JFK)
    #[arg(short, long, default_value = "DEL")]
    to: String,

    /// Departure date (YYYY-MM-DD or YYYY/MM/DD)
    #[arg(short, long)]
    date: String,

    /// Return date (YYYY-MM-DD or YYYY/MM/DD)
    #[arg(short = 'R', long)]
    return_date: String,

    /// Trip duration in days (1-14)
    #[arg(short = 'n', long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=14))]
    days: u32,

    /// Travel theme
    #[arg(long, value_enum, default_value = "couple-getaway")]
    theme: TravelTheme,

    /// Preferred activities, free text
    #[arg(long, default_value = "Relaxing, sightseeing, local food")]
    activities: String,

    /// Budget tier
    #[arg(long, value_enum, default_value = "economy")]
    budget: BudgetTier,

    /// Flight class
    #[arg(long, value_enum, default_value = "economy")]
    flight_class: FlightClass,

    /// Hotel rating filter
    #[arg(long, value_enum, default_value = "any")]
    hotel_rating: HotelRating,

    /// Trip requires a visa
    #[arg(long)]
    visa_required: bool,

    /// Trip includes travel insurance
    #[arg(long)]
    travel_insurance: bool,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

/// Configure logging based on verbosity level
fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}

/// Parse date string to NaiveDate
fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y/%m/%d"))
        .context(format!(
            "Invalid date format: {}. Use YYYY-MM-DD or YYYY/MM/DD",
            s
        ))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = CliArgs::parse();
    setup_logging(args.verbose);

    tracing::info!("Starting peregrine-plan CLI");
    tracing::info!("Args: {:?}", args);

    // Credentials first: fail before any network call if a key is missing.
    let config = PlannerConfig::from_env().context("❌ API keys missing")?;

    let departure_date = parse_date(&args.date)?;
    let return_date = parse_date(&args.return_date)?;

    let trip = TripRequest {
        origin_code: args.from.to_uppercase(),
        destination_code: args.to.to_uppercase(),
        departure_date,
        return_date,
        num_days: args.days,
        theme: args.theme,
        activity_preferences: args.activities,
        budget_tier: args.budget,
        flight_class: args.flight_class,
        hotel_rating: args.hotel_rating,
        visa_required: args.visa_required,
        travel_insurance: args.travel_insurance,
    };

    tracing::info!(
        "Planning {} → {} ({} days, {:?})",
        trip.origin_code,
        trip.destination_code,
        trip.num_days,
        trip.theme
    );

    let flights = SerpApiFlightsClient::new(
        config.serpapi_key.clone(),
        30, // timeout_secs
    )?;
    let planner = OpenRouterClient::new(
        config.openrouter_key.clone(),
        120, // timeout_secs
    )?;

    let plan = generate_plan(&flights, &planner, &trip).await?;

    println!("{}", render_plan(&plan, &trip));

    Ok(())
}
