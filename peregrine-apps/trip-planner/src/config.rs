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

//! Provider credentials, loaded once at startup and passed to the two
//! clients that need them.

use anyhow::{Context, Result, ensure};
use std::env;

pub const SERPAPI_KEY_VAR: &str = "SERPAPI_KEY";
pub const OPENROUTER_KEY_VAR: &str = "OPENROUTER_API_KEY";

// No Debug derive: keys must not end up in logs or error chains.
#[derive(Clone)]
pub struct PlannerConfig {
    pub serpapi_key: String,
    pub openrouter_key: String,
}

impl PlannerConfig {
    pub fn new(serpapi_key: String, openrouter_key: String) -> Result<Self> {
        ensure!(!serpapi_key.trim().is_empty(), "{} is blank", SERPAPI_KEY_VAR);
        ensure!(
            !openrouter_key.trim().is_empty(),
            "{} is blank",
            OPENROUTER_KEY_VAR
        );
        Ok(Self {
            serpapi_key,
            openrouter_key,
        })
    }

    /// Read both provider keys from the environment. Fails before any
    /// network activity if either is absent or blank.
    pub fn from_env() -> Result<Self> {
        let serpapi_key = env::var(SERPAPI_KEY_VAR)
            .with_context(|| format!("{} must be set", SERPAPI_KEY_VAR))?;
        let openrouter_key = env::var(OPENROUTER_KEY_VAR)
            .with_context(|| format!("{} must be set", OPENROUTER_KEY_VAR))?;
        Self::new(serpapi_key, openrouter_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_keys_are_rejected() {
        assert!(PlannerConfig::new("".to_string(), "or-key".to_string()).is_err());
        assert!(PlannerConfig::new("sp-key".to_string(), "   ".to_string()).is_err());
        assert!(PlannerConfig::new("sp-key".to_string(), "or-key".to_string()).is_ok());
    }
}
