//! Engine entry points: inputs plus tables in, a plain result out.
//!
//! Every function here is pure arithmetic over already-validated inputs. No
//! call can fail except the generic-mode preset lookup in [`evaluate`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::cost_model::{
    accumulate, replacement_events, PathCost, TenYearProjection, HORIZON_YEARS, WEEKS_PER_YEAR,
};
use super::entities::{
    ApplianceCategory, ApplianceInputs, CulinaryStyle, DishwasherInputs, InstallationType,
    RobotVacuumInputs,
};
use super::generic::{calculate_roi, LifetimeRoiResult};
use super::load_estimator::{
    estimate_cleaning_sessions, estimate_dishwasher_load, ItemBreakdown, RackFill,
};
use super::region::RegionalProfile;
use super::tables::{ConstantTable, TaskCoefficients};
use super::verdict::{break_even_months, pays_back_within_horizon, verdict_tier, VerdictTier};

/// The figures the computation actually used, so callers can restate them
/// ("2.6 loads/wk at $25/hr") without recomputing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectiveInputs {
    /// Manual minutes per load or session.
    pub duration_minutes: f64,
    /// Loads or sessions per week.
    pub frequency: f64,
    pub period_label: String,
    /// Hourly value of time.
    pub rate: f64,
    pub people: Option<u32>,
    pub cooking_style: Option<CulinaryStyle>,
    pub region: Option<String>,
}

/// Itemized cost data backing the transparency tooltips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub manual: PathCost,
    pub machine: PathCost,
    pub purchase_cost: f64,
    pub installation_cost: f64,
    pub replacement_count: u32,
    pub replacement_cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub category: ApplianceCategory,
    pub ten_year_manual_cost: f64,
    pub ten_year_machine_cost: f64,
    /// Signed: negative means keep doing it by hand.
    pub net_savings_10_year: f64,
    pub hours_saved_per_year: f64,
    pub litres_saved_per_year: f64,
    pub kwh_saved_per_year: f64,
    pub break_even_months: f64,
    pub is_worth_it: bool,
    /// Messaging only; never alters the arithmetic.
    pub is_high_usage: bool,
    pub is_hygiene_triggered: bool,
    pub upfront_cost: f64,
    pub annual_manual_cost: f64,
    pub annual_machine_op_cost: f64,
    pub loads_per_week: f64,
    pub annual_manual_labor_hours: f64,
    pub annual_manual_labor_cost: f64,
    pub annual_manual_supplies_cost: f64,
    pub breakdown: CostBreakdown,
    pub item_breakdown: Option<ItemBreakdown>,
    pub rack_fill: Option<RackFill>,
    pub region_caveat: Option<String>,
    pub inputs: EffectiveInputs,
}

impl RoiResult {
    pub fn verdict_tier(&self) -> VerdictTier {
        verdict_tier(self.is_worth_it, self.break_even_months)
    }

    pub fn pays_back_within_horizon(&self) -> bool {
        pays_back_within_horizon(self.break_even_months)
    }
}

/// One-off machine spend over the horizon.
struct Capital {
    purchase_cost: f64,
    installation_cost: f64,
    replacement_count: u32,
    replacement_unit_cost: f64,
}

struct Usage {
    loads_per_week: f64,
    is_high_usage: bool,
    is_hygiene_triggered: bool,
}

/// Shared tail of both ten-year calculators: projection, break-even, verdict.
fn finish_ten_year(
    category: ApplianceCategory,
    manual: PathCost,
    machine: PathCost,
    capital: Capital,
    usage: Usage,
    inputs: EffectiveInputs,
) -> RoiResult {
    let Capital {
        purchase_cost,
        installation_cost,
        replacement_count,
        replacement_unit_cost,
    } = capital;
    let upfront_cost = purchase_cost + installation_cost;
    let replacement_cost = f64::from(replacement_count) * replacement_unit_cost;
    let projection =
        TenYearProjection::new(manual.total(), machine.total(), upfront_cost, replacement_cost);

    let net_savings_10_year = projection.ten_year_manual_cost - projection.ten_year_machine_cost;
    let annual_benefit = projection.annual_manual_cost - projection.annual_machine_op_cost;

    RoiResult {
        category,
        ten_year_manual_cost: projection.ten_year_manual_cost,
        ten_year_machine_cost: projection.ten_year_machine_cost,
        net_savings_10_year,
        hours_saved_per_year: (manual.labor_hours - machine.labor_hours).max(0.0),
        litres_saved_per_year: (manual.water_litres - machine.water_litres).max(0.0),
        kwh_saved_per_year: (manual.energy_kwh - machine.energy_kwh).max(0.0),
        break_even_months: break_even_months(upfront_cost, annual_benefit),
        is_worth_it: net_savings_10_year > 0.0,
        is_high_usage: usage.is_high_usage,
        is_hygiene_triggered: usage.is_hygiene_triggered,
        upfront_cost,
        annual_manual_cost: projection.annual_manual_cost,
        annual_machine_op_cost: projection.annual_machine_op_cost,
        loads_per_week: usage.loads_per_week,
        annual_manual_labor_hours: manual.labor_hours,
        annual_manual_labor_cost: manual.labor_cost,
        annual_manual_supplies_cost: manual.supplies_cost(),
        breakdown: CostBreakdown {
            manual,
            machine,
            purchase_cost,
            installation_cost,
            replacement_count,
            replacement_cost,
        },
        item_breakdown: None,
        rack_fill: None,
        region_caveat: None,
        inputs,
    }
}

pub fn calculate_dishwasher_roi(
    inputs: &DishwasherInputs,
    table: &ConstantTable,
    regional: &RegionalProfile,
) -> RoiResult {
    let inputs = inputs.normalized();
    let dish = &table.dishwasher;
    let profile = dish.profiles.get(inputs.culinary_style);

    let load = estimate_dishwasher_load(&inputs, &dish.load_model, &dish.racks, profile);
    let loads_per_year = load.loads_per_week * WEEKS_PER_YEAR;
    debug!(
        loads_per_week = load.loads_per_week,
        hygiene = load.is_hygiene_triggered,
        style = inputs.culinary_style.name(),
        "estimated dishwasher load"
    );

    let rates = regional.utility_rates();
    let manual_task = dish.manual_task(inputs.culinary_style, inputs.washing_method);
    let manual = accumulate(loads_per_year, &manual_task, &rates, inputs.time_value);
    let machine = accumulate(loads_per_year, &dish.machine, &rates, inputs.time_value);

    let installation_cost = match inputs.installation {
        InstallationType::Pro => dish.pro_installation_cost,
        InstallationType::Diy => 0.0,
    };

    let mut result = finish_ten_year(
        ApplianceCategory::Dishwasher,
        manual,
        machine,
        Capital {
            purchase_cost: inputs.machine_cost,
            installation_cost,
            replacement_count: 0,
            replacement_unit_cost: 0.0,
        },
        Usage {
            loads_per_week: load.loads_per_week,
            is_high_usage: load.loads_per_week > dish.high_usage_loads_per_week,
            is_hygiene_triggered: load.is_hygiene_triggered,
        },
        EffectiveInputs {
            duration_minutes: manual_task.minutes_per_task,
            frequency: load.loads_per_week,
            period_label: ApplianceCategory::Dishwasher.usage_unit().to_string(),
            rate: inputs.time_value,
            people: Some(inputs.household_size),
            cooking_style: Some(inputs.culinary_style),
            region: Some(profile.region.clone()),
        },
    );
    result.item_breakdown = load.items;
    result.rack_fill = load.racks;
    result.region_caveat = profile.region_caveat.clone();

    debug!(
        net = result.net_savings_10_year,
        break_even = result.break_even_months,
        tier = result.verdict_tier().name(),
        "dishwasher verdict"
    );
    result
}

pub fn calculate_robot_vacuum_roi(
    inputs: &RobotVacuumInputs,
    table: &ConstantTable,
    regional: &RegionalProfile,
) -> RoiResult {
    let inputs = inputs.normalized();
    let robot = &table.robot_vacuum;
    let sessions = estimate_cleaning_sessions(&inputs);
    let vac_per_year = sessions.vacuum_per_week * WEEKS_PER_YEAR;
    let mop_per_year = sessions.mop_per_week * WEEKS_PER_YEAR;
    let rates = regional.utility_rates();

    let manual_vac = TaskCoefficients {
        minutes_per_task: inputs.manual_vac_minutes,
        water_litres_per_task: 0.0,
        energy_kwh_per_task: inputs.manual_vac_minutes / 60.0 * robot.manual_vacuum_kw,
        consumable_cost_per_task: 0.0,
    };
    let manual_mop = TaskCoefficients {
        minutes_per_task: inputs.manual_mop_minutes,
        water_litres_per_task: robot.manual_mop_litres_per_session,
        energy_kwh_per_task: 0.0,
        consumable_cost_per_task: robot.manual_mop_supplies_per_session,
    };
    let manual = accumulate(vac_per_year, &manual_vac, &rates, inputs.time_value).combine(
        &accumulate(mop_per_year, &manual_mop, &rates, inputs.time_value),
    );

    let run_energy = robot.robot_kwh_per_run_per_1000_sq_ft * inputs.home_size_sq_ft / 1000.0;
    let robot_vac = TaskCoefficients {
        minutes_per_task: robot.machine_minutes_per_run,
        water_litres_per_task: 0.0,
        energy_kwh_per_task: run_energy,
        consumable_cost_per_task: 0.0,
    };
    let robot_mop = TaskCoefficients {
        minutes_per_task: robot.machine_minutes_per_run + robot.mop_refill_minutes_per_run,
        water_litres_per_task: robot.robot_mop_litres_per_run,
        energy_kwh_per_task: run_energy,
        consumable_cost_per_task: 0.0,
    };

    let mut upkeep = robot.annual_maintenance_cost;
    if inputs.has_pets {
        upkeep += robot.pet_maintenance_cost;
    }
    if inputs.robot_type.can_mop() {
        upkeep += robot.mop_pad_annual_cost;
    }
    let machine = accumulate(vac_per_year, &robot_vac, &rates, inputs.time_value)
        .combine(&accumulate(mop_per_year, &robot_mop, &rates, inputs.time_value))
        .with_upkeep(upkeep);

    let batteries = replacement_events(HORIZON_YEARS, robot.battery_interval_years);
    debug!(
        sessions_per_week = sessions.total_per_week(),
        batteries, "estimated robot vacuum usage"
    );

    // Session-weighted, so minutes * sessions restates the manual labor.
    let average_session_minutes = if sessions.total_per_week() > 0.0 {
        (sessions.vacuum_per_week * inputs.manual_vac_minutes
            + sessions.mop_per_week * inputs.manual_mop_minutes)
            / sessions.total_per_week()
    } else {
        inputs.manual_vac_minutes
    };

    let result = finish_ten_year(
        ApplianceCategory::RobotVacuum,
        manual,
        machine,
        Capital {
            purchase_cost: inputs.machine_cost,
            installation_cost: 0.0,
            replacement_count: batteries,
            replacement_unit_cost: robot.battery_cost,
        },
        Usage {
            loads_per_week: sessions.total_per_week(),
            is_high_usage: inputs.home_size_sq_ft > robot.large_home_sq_ft,
            is_hygiene_triggered: false,
        },
        EffectiveInputs {
            duration_minutes: average_session_minutes,
            frequency: sessions.total_per_week(),
            period_label: ApplianceCategory::RobotVacuum.usage_unit().to_string(),
            rate: inputs.time_value,
            people: None,
            cooking_style: None,
            region: None,
        },
    );

    debug!(
        net = result.net_savings_10_year,
        break_even = result.break_even_months,
        tier = result.verdict_tier().name(),
        "robot vacuum verdict"
    );
    result
}

/// Result of either engine mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RoiOutcome {
    TenYear(RoiResult),
    Lifetime(LifetimeRoiResult),
}

impl RoiOutcome {
    pub fn is_worth_it(&self) -> bool {
        match self {
            RoiOutcome::TenYear(result) => result.is_worth_it,
            RoiOutcome::Lifetime(result) => result.is_worth_it,
        }
    }

    pub fn break_even_months(&self) -> f64 {
        match self {
            RoiOutcome::TenYear(result) => result.break_even_months,
            RoiOutcome::Lifetime(result) => result.break_even_months,
        }
    }

    pub fn verdict_tier(&self) -> VerdictTier {
        verdict_tier(self.is_worth_it(), self.break_even_months())
    }

    pub fn as_ten_year(&self) -> Option<&RoiResult> {
        match self {
            RoiOutcome::TenYear(result) => Some(result),
            RoiOutcome::Lifetime(_) => None,
        }
    }

    pub fn as_lifetime(&self) -> Option<&LifetimeRoiResult> {
        match self {
            RoiOutcome::Lifetime(result) => Some(result),
            RoiOutcome::TenYear(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("no appliance preset with id {0}")]
    UnknownPreset(String),
}

/// Runs the engine mode selected by the input's category.
pub fn evaluate(
    inputs: &ApplianceInputs,
    table: &ConstantTable,
    regional: &RegionalProfile,
) -> Result<RoiOutcome, EvaluationError> {
    match inputs {
        ApplianceInputs::Dishwasher(inputs) => Ok(RoiOutcome::TenYear(calculate_dishwasher_roi(
            inputs, table, regional,
        ))),
        ApplianceInputs::RobotVacuum(inputs) => Ok(RoiOutcome::TenYear(
            calculate_robot_vacuum_roi(inputs, table, regional),
        )),
        ApplianceInputs::Generic(inputs) => {
            let preset = table
                .preset(&inputs.preset_id)
                .ok_or_else(|| EvaluationError::UnknownPreset(inputs.preset_id.clone()))?;
            Ok(RoiOutcome::Lifetime(calculate_roi(
                preset,
                inputs,
                regional,
                &table.generic,
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{GenericInputs, RobotType, WashingMethod};
    use crate::domain::verdict::NEVER_BREAKS_EVEN;

    fn dishwasher(adjust: impl FnOnce(&mut DishwasherInputs)) -> RoiResult {
        let mut inputs = DishwasherInputs::default();
        adjust(&mut inputs);
        calculate_dishwasher_roi(&inputs, &ConstantTable::default(), &RegionalProfile::default())
    }

    #[test]
    fn pro_install_raises_upfront_cost() {
        let diy = dishwasher(|_| {});
        let pro = dishwasher(|inputs| inputs.installation = InstallationType::Pro);
        assert_eq!(pro.upfront_cost - diy.upfront_cost, 200.0);
        assert_eq!(pro.breakdown.installation_cost, 200.0);
        assert!(pro.break_even_months > diy.break_even_months);
    }

    #[test]
    fn culinary_style_changes_manual_minutes() {
        let asia = dishwasher(|inputs| inputs.culinary_style = CulinaryStyle::Asia);
        let europe = dishwasher(|inputs| inputs.culinary_style = CulinaryStyle::Europe);
        assert_eq!(asia.inputs.duration_minutes, 15.0);
        assert_eq!(europe.inputs.duration_minutes, 25.0);
        assert_eq!(asia.inputs.region.as_deref(), Some("Asia"));
        assert!(asia.region_caveat.is_some());
    }

    #[test]
    fn basin_washing_saves_less_water() {
        let tap = dishwasher(|_| {});
        let basin = dishwasher(|inputs| inputs.washing_method = WashingMethod::Basin);
        assert!(basin.litres_saved_per_year < tap.litres_saved_per_year);
        assert_eq!(basin.loads_per_week, tap.loads_per_week);
    }

    #[test]
    fn machine_labor_is_never_free() {
        let result = dishwasher(|_| {});
        assert!(result.breakdown.machine.labor_hours > 0.0);
        assert!(result.hours_saved_per_year < result.annual_manual_labor_hours);
    }

    #[test]
    fn manual_breakdown_splits_labor_and_supplies() {
        let result = dishwasher(|_| {});
        let sum = result.annual_manual_labor_cost + result.annual_manual_supplies_cost;
        assert!((sum - result.annual_manual_cost).abs() < 1e-9);
    }

    #[test]
    fn heavy_cooking_sets_high_usage_flag() {
        let result = dishwasher(|inputs| {
            inputs.household_size = 10;
            inputs.breakfasts = 7;
            inputs.lunches = 7;
            inputs.dinners = 7;
        });
        assert!(result.loads_per_week > 10.0);
        assert!(result.is_high_usage);
    }

    #[test]
    fn robot_breakdown_itemizes_three_batteries() {
        let result = calculate_robot_vacuum_roi(
            &RobotVacuumInputs::default(),
            &ConstantTable::default(),
            &RegionalProfile::default(),
        );
        assert_eq!(result.breakdown.replacement_count, 3);
        assert_eq!(result.breakdown.replacement_cost, 210.0);
        let expected = result.upfront_cost + 210.0 + result.annual_machine_op_cost * 10.0;
        assert!((result.ten_year_machine_cost - expected).abs() < 1e-9);
    }

    #[test]
    fn mopping_robot_restates_all_sessions() {
        let result = calculate_robot_vacuum_roi(
            &RobotVacuumInputs {
                robot_type: RobotType::VacMop,
                manual_mop_frequency: 2.0,
                ..RobotVacuumInputs::default()
            },
            &ConstantTable::default(),
            &RegionalProfile::default(),
        );
        assert_eq!(result.inputs.frequency, result.loads_per_week);
        assert_eq!(result.inputs.frequency, 5.0);
        assert_eq!(result.inputs.period_label, "runs/wk");
        assert!((result.inputs.duration_minutes - 39.0).abs() < 1e-9);
        let restated =
            result.inputs.duration_minutes * result.inputs.frequency * WEEKS_PER_YEAR / 60.0;
        assert!((restated - result.annual_manual_labor_hours).abs() < 1e-9);
    }

    #[test]
    fn idle_robot_keeps_vacuum_minutes() {
        let result = calculate_robot_vacuum_roi(
            &RobotVacuumInputs {
                manual_vac_frequency: 0.0,
                ..RobotVacuumInputs::default()
            },
            &ConstantTable::default(),
            &RegionalProfile::default(),
        );
        assert_eq!(result.inputs.frequency, 0.0);
        assert_eq!(result.inputs.duration_minutes, 45.0);
    }

    #[test]
    fn pets_and_mopping_add_upkeep() {
        let base = RobotVacuumInputs::default();
        let table = ConstantTable::default();
        let region = RegionalProfile::default();
        let plain = calculate_robot_vacuum_roi(&base, &table, &region);
        let pets = calculate_robot_vacuum_roi(
            &RobotVacuumInputs {
                has_pets: true,
                ..base.clone()
            },
            &table,
            &region,
        );
        assert_eq!(pets.breakdown.machine.upkeep_cost - plain.breakdown.machine.upkeep_cost, 30.0);

        let mop = calculate_robot_vacuum_roi(
            &RobotVacuumInputs {
                robot_type: RobotType::VacMop,
                ..base
            },
            &table,
            &region,
        );
        assert_eq!(mop.breakdown.machine.upkeep_cost - plain.breakdown.machine.upkeep_cost, 25.0);
        assert!(mop.litres_saved_per_year > 0.0);
        assert_eq!(plain.litres_saved_per_year, 0.0);
    }

    #[test]
    fn large_home_is_flagged_without_changing_costs() {
        let table = ConstantTable::default();
        let region = RegionalProfile::default();
        let mansion = calculate_robot_vacuum_roi(
            &RobotVacuumInputs {
                home_size_sq_ft: 3500.0,
                ..RobotVacuumInputs::default()
            },
            &table,
            &region,
        );
        assert!(mansion.is_high_usage);
    }

    #[test]
    fn evaluate_dispatches_by_category() {
        let table = ConstantTable::default();
        let region = RegionalProfile::default();
        let outcome = evaluate(
            &ApplianceInputs::Dishwasher(DishwasherInputs::default()),
            &table,
            &region,
        )
        .unwrap();
        assert!(outcome.as_ten_year().is_some());

        let preset = table.preset("robot-mower").unwrap();
        let outcome = evaluate(
            &ApplianceInputs::Generic(GenericInputs::from_preset(preset, 30.0)),
            &table,
            &region,
        )
        .unwrap();
        assert!(outcome.as_lifetime().is_some());
        assert_eq!(outcome.verdict_tier(), outcome.as_lifetime().unwrap().verdict_tier());
    }

    #[test]
    fn evaluate_rejects_unknown_preset() {
        let inputs = ApplianceInputs::Generic(GenericInputs {
            preset_id: "jetpack".to_string(),
            cost: 1.0,
            hourly_wage: 1.0,
            frequency: 1.0,
            minutes_per_use: 1.0,
            cafe_price: None,
            cups_per_day: None,
        });
        assert_eq!(
            evaluate(&inputs, &ConstantTable::default(), &RegionalProfile::default()),
            Err(EvaluationError::UnknownPreset("jetpack".to_string()))
        );
    }

    #[test]
    fn free_time_and_a_basin_never_break_even() {
        let result = dishwasher(|inputs| {
            inputs.time_value = 0.0;
            inputs.washing_method = WashingMethod::Basin;
        });
        // Pods and power cost more than a basin of hot water.
        assert!(result.annual_manual_cost < result.annual_machine_op_cost);
        assert_eq!(result.break_even_months, NEVER_BREAKS_EVEN);
        assert!(!result.is_worth_it);
    }
}
