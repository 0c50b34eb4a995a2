//! Regional pricing: currency and utility rates in local money.

use serde::{Deserialize, Serialize};

use super::cost_model::UtilityRates;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    UnitedStates,
    UnitedKingdom,
    Eurozone,
    Canada,
    Australia,
    Japan,
}

const EUROZONE_COUNTRIES: &[&str] = &[
    "AT", "BE", "CY", "DE", "EE", "ES", "FI", "FR", "GR", "HR", "IE", "IT", "LT", "LU", "LV",
    "MT", "NL", "PT", "SI", "SK",
];

impl Region {
    /// Maps a BCP 47 / POSIX locale tag (`en-GB`, `de_DE.UTF-8`) to a region.
    /// Unknown or language-only tags resolve to `None`.
    pub fn from_locale_tag(tag: &str) -> Option<Region> {
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        let country = tag.split(['-', '_']).nth(1)?.to_ascii_uppercase();
        match country.as_str() {
            "US" => Some(Region::UnitedStates),
            "GB" | "UK" => Some(Region::UnitedKingdom),
            "CA" => Some(Region::Canada),
            "AU" => Some(Region::Australia),
            "JP" => Some(Region::Japan),
            code if EUROZONE_COUNTRIES.contains(&code) => Some(Region::Eurozone),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionalProfile {
    pub region: Region,
    pub currency: String,
    pub currency_symbol: String,
    pub is_metric: bool,
    pub electricity_rate: f64,
    /// Price per litre.
    pub water_rate: f64,
}

impl Default for RegionalProfile {
    fn default() -> Self {
        Self::for_region(Region::UnitedStates)
    }
}

impl RegionalProfile {
    pub fn for_region(region: Region) -> Self {
        let (currency, symbol, metric, electricity, water) = match region {
            Region::UnitedStates => ("USD", "$", false, 0.15, 0.002),
            Region::UnitedKingdom => ("GBP", "£", true, 0.28, 0.004),
            Region::Eurozone => ("EUR", "€", true, 0.30, 0.004),
            Region::Canada => ("CAD", "$", true, 0.13, 0.002),
            Region::Australia => ("AUD", "$", true, 0.30, 0.003),
            Region::Japan => ("JPY", "¥", true, 31.0, 0.3),
        };
        Self {
            region,
            currency: currency.to_string(),
            currency_symbol: symbol.to_string(),
            is_metric: metric,
            electricity_rate: electricity,
            water_rate: water,
        }
    }

    /// Falls back to US pricing when the tag names no known region.
    pub fn for_locale_tag(tag: &str) -> Self {
        Self::for_region(Region::from_locale_tag(tag).unwrap_or_default())
    }

    pub fn utility_rates(&self) -> UtilityRates {
        UtilityRates {
            electricity_per_kwh: self.electricity_rate,
            water_per_litre: self.water_rate,
        }
    }
}
