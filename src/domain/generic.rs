//! Preset-driven lifetime calculator for arbitrary appliances.
//!
//! Simpler than the ten-year model: saved minutes per use are valued at the
//! hourly wage (or, for cash-substitution presets, the café spend avoided),
//! resource differences are priced with the regional rates, and the return
//! is expressed as a percentage of the purchase price.

use serde::{Deserialize, Serialize};

use super::cost_model::{HORIZON_YEARS, WEEKS_PER_YEAR};
use super::entities::GenericInputs;
use super::region::RegionalProfile;
use super::tables::{AppliancePreset, GenericConstants, PresetKind};
use super::verdict::{break_even_months, verdict_tier, VerdictTier};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EcoImpact {
    pub water_saved: f64,
    pub energy_saved: f64,
    /// Kilograms of CO2.
    pub carbon_saved: f64,
}

/// Saved time and resources restated as everyday equivalents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparisons {
    pub netflix_series: f64,
    pub showers: f64,
    pub car_miles: f64,
    pub bulb_days: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LifetimeRoiResult {
    pub preset_id: String,
    pub uses_per_year: f64,
    pub annual_hours_saved: f64,
    /// Yearly benefit in money, signed.
    pub annual_value_saved: f64,
    pub upfront_cost: f64,
    pub break_even_months: f64,
    /// Absent when nothing was paid upfront.
    pub lifetime_roi: Option<f64>,
    pub is_worth_it: bool,
    pub eco_impact: EcoImpact,
    pub comparisons: Comparisons,
}

impl LifetimeRoiResult {
    pub fn verdict_tier(&self) -> VerdictTier {
        verdict_tier(self.is_worth_it, self.break_even_months)
    }
}

impl GenericInputs {
    /// Inputs pre-filled with a preset's defaults.
    pub fn from_preset(preset: &AppliancePreset, hourly_wage: f64) -> Self {
        GenericInputs {
            preset_id: preset.id.clone(),
            cost: preset.default_cost,
            hourly_wage,
            frequency: preset.default_frequency,
            minutes_per_use: preset.default_minutes_per_use,
            cafe_price: None,
            cups_per_day: None,
        }
    }
}

pub fn calculate_roi(
    preset: &AppliancePreset,
    inputs: &GenericInputs,
    regional: &RegionalProfile,
    constants: &GenericConstants,
) -> LifetimeRoiResult {
    let inputs = inputs.normalized();
    let uses_per_year = inputs.frequency * WEEKS_PER_YEAR;

    let net_minutes = (inputs.minutes_per_use - constants.machine_overhead_minutes).max(0.0);
    let annual_hours_saved = net_minutes * uses_per_year / 60.0;

    let primary_value = match preset.kind {
        PresetKind::TimeSaver => annual_hours_saved * inputs.hourly_wage,
        PresetKind::CashSubstitution { home_cost_per_cup } => {
            let cafe_price = inputs.cafe_price.unwrap_or(constants.default_cafe_price);
            let cups = inputs.cups_per_day.unwrap_or(constants.default_cups_per_day);
            (cafe_price - home_cost_per_cup) * cups * uses_per_year
        }
    };

    let energy_delta =
        uses_per_year * (preset.baseline_energy_kwh_per_use - preset.energy_kwh_per_use);
    let water_delta =
        uses_per_year * (preset.baseline_water_litres_per_use - preset.water_litres_per_use);
    let resource_value =
        energy_delta * regional.electricity_rate + water_delta * regional.water_rate;

    let annual_value_saved = primary_value + resource_value;
    let upfront_cost = inputs.cost;
    let horizon_value = annual_value_saved * f64::from(HORIZON_YEARS);

    let eco_impact = EcoImpact {
        water_saved: water_delta.max(0.0),
        energy_saved: energy_delta.max(0.0),
        carbon_saved: energy_delta.max(0.0) * constants.carbon_kg_per_kwh,
    };
    let comparisons = Comparisons {
        netflix_series: annual_hours_saved / constants.hours_per_series,
        showers: eco_impact.water_saved / constants.litres_per_shower,
        car_miles: eco_impact.carbon_saved / constants.carbon_kg_per_car_mile,
        bulb_days: eco_impact.energy_saved / constants.bulb_kwh_per_day,
    };

    LifetimeRoiResult {
        preset_id: preset.id.clone(),
        uses_per_year,
        annual_hours_saved,
        annual_value_saved,
        upfront_cost,
        break_even_months: break_even_months(upfront_cost, annual_value_saved),
        lifetime_roi: (upfront_cost > 0.0).then(|| horizon_value / upfront_cost * 100.0),
        is_worth_it: horizon_value > upfront_cost,
        eco_impact,
        comparisons,
    }
}
