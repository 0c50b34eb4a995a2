//! Annual and ten-year cost accumulation for the manual and machine paths.

use serde::{Deserialize, Serialize};

use super::tables::TaskCoefficients;

pub const WEEKS_PER_YEAR: f64 = 52.0;
/// Nominal horizon; no discounting, flat prices.
pub const HORIZON_YEARS: u32 = 10;

/// Utility prices used to monetize water and energy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UtilityRates {
    pub electricity_per_kwh: f64,
    pub water_per_litre: f64,
}

/// One path's yearly resource use and what it costs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PathCost {
    pub labor_hours: f64,
    pub labor_cost: f64,
    pub water_litres: f64,
    pub water_cost: f64,
    pub energy_kwh: f64,
    pub energy_cost: f64,
    pub consumables_cost: f64,
    /// Fixed yearly upkeep independent of usage (filters, pads).
    pub upkeep_cost: f64,
}

impl PathCost {
    pub fn total(&self) -> f64 {
        self.labor_cost + self.supplies_cost()
    }

    /// Everything except labor.
    pub fn supplies_cost(&self) -> f64 {
        self.water_cost + self.energy_cost + self.consumables_cost + self.upkeep_cost
    }

    /// Adds another batch of tasks on the same path.
    pub fn combine(mut self, other: &PathCost) -> PathCost {
        self.labor_hours += other.labor_hours;
        self.labor_cost += other.labor_cost;
        self.water_litres += other.water_litres;
        self.water_cost += other.water_cost;
        self.energy_kwh += other.energy_kwh;
        self.energy_cost += other.energy_cost;
        self.consumables_cost += other.consumables_cost;
        self.upkeep_cost += other.upkeep_cost;
        self
    }

    pub fn with_upkeep(mut self, upkeep: f64) -> PathCost {
        self.upkeep_cost += upkeep;
        self
    }
}

/// Yearly cost of performing `tasks_per_year` tasks with the given coefficients,
/// valuing time at `time_value` per hour.
pub fn accumulate(
    tasks_per_year: f64,
    task: &TaskCoefficients,
    rates: &UtilityRates,
    time_value: f64,
) -> PathCost {
    let labor_hours = tasks_per_year * task.minutes_per_task / 60.0;
    let water_litres = tasks_per_year * task.water_litres_per_task;
    let energy_kwh = tasks_per_year * task.energy_kwh_per_task;
    PathCost {
        labor_hours,
        labor_cost: labor_hours * time_value,
        water_litres,
        water_cost: water_litres * rates.water_per_litre,
        energy_kwh,
        energy_cost: energy_kwh * rates.electricity_per_kwh,
        consumables_cost: tasks_per_year * task.consumable_cost_per_task,
        upkeep_cost: 0.0,
    }
}

/// Replacements of a part with the given service life that fall strictly
/// inside the horizon: `ceil(horizon / interval) - 1`. A zero interval means
/// the part is never replaced.
pub fn replacement_events(horizon_years: u32, interval_years: u32) -> u32 {
    if interval_years == 0 || horizon_years == 0 {
        return 0;
    }
    horizon_years.div_ceil(interval_years) - 1
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TenYearProjection {
    pub upfront_cost: f64,
    pub replacement_cost: f64,
    pub annual_manual_cost: f64,
    pub annual_machine_op_cost: f64,
    pub ten_year_manual_cost: f64,
    pub ten_year_machine_cost: f64,
}

impl TenYearProjection {
    pub fn new(
        annual_manual_cost: f64,
        annual_machine_op_cost: f64,
        upfront_cost: f64,
        replacement_cost: f64,
    ) -> Self {
        let years = f64::from(HORIZON_YEARS);
        Self {
            upfront_cost,
            replacement_cost,
            annual_manual_cost,
            annual_machine_op_cost,
            ten_year_manual_cost: annual_manual_cost * years,
            ten_year_machine_cost: upfront_cost + replacement_cost + annual_machine_op_cost * years,
        }
    }

    /// Machine operating spend over the horizon, excluding purchase and replacements.
    pub fn machine_operating_total(&self) -> f64 {
        self.annual_machine_op_cost * f64::from(HORIZON_YEARS)
    }
}
