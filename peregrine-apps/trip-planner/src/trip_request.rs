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

//! # Trip Request
//!
//! Input model for one plan generation run. Immutable once built;
//! display strings match the vocabulary the prompts are written in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum TravelTheme {
    CoupleGetaway,
    FamilyVacation,
    AdventureTrip,
    SoloExploration,
}

impl TravelTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelTheme::CoupleGetaway => "Couple Getaway",
            TravelTheme::FamilyVacation => "Family Vacation",
            TravelTheme::AdventureTrip => "Adventure Trip",
            TravelTheme::SoloExploration => "Solo Exploration",
        }
    }
}

impl std::fmt::Display for TravelTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Economy,
    Standard,
    Luxury,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Economy => "Economy",
            BudgetTier::Standard => "Standard",
            BudgetTier::Luxury => "Luxury",
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum FlightClass {
    Economy,
    Business,
    FirstClass,
}

impl FlightClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightClass::Economy => "Economy",
            FlightClass::Business => "Business",
            FlightClass::FirstClass => "First Class",
        }
    }
}

impl std::fmt::Display for FlightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum HotelRating {
    Any,
    ThreeStar,
    FourStar,
    FiveStar,
}

impl HotelRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            HotelRating::Any => "Any",
            HotelRating::ThreeStar => "3⭐",
            HotelRating::FourStar => "4⭐",
            HotelRating::FiveStar => "5⭐",
        }
    }
}

impl std::fmt::Display for HotelRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All user-supplied parameters for one run.
///
/// Codes and dates are forwarded to the flight provider as-is; no IATA
/// format or date ordering checks happen here.
#[derive(Debug, Clone)]
pub struct TripRequest {
    pub origin_code: String,
    pub destination_code: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub num_days: u32,
    pub theme: TravelTheme,
    pub activity_preferences: String,
    pub budget_tier: BudgetTier,
    pub flight_class: FlightClass,
    pub hotel_rating: HotelRating,
    pub visa_required: bool,
    pub travel_insurance: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strings_match_prompt_vocabulary() {
        assert_eq!(TravelTheme::CoupleGetaway.to_string(), "Couple Getaway");
        assert_eq!(TravelTheme::SoloExploration.to_string(), "Solo Exploration");
        assert_eq!(BudgetTier::Luxury.to_string(), "Luxury");
        assert_eq!(FlightClass::FirstClass.to_string(), "First Class");
        assert_eq!(HotelRating::Any.to_string(), "Any");
        assert_eq!(HotelRating::ThreeStar.to_string(), "3⭐");
    }
}
