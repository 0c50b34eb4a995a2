//! Coefficient tables consumed by the engine.
//!
//! Everything here is data. Swapping a table (or a single culinary profile)
//! changes the outcome without touching the algorithms in
//! [`load_estimator`](super::load_estimator) or [`cost_model`](super::cost_model).

use semver::Version;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{CulinaryStyle, WashingMethod};
use crate::util::version::{is_schema_compatible, TABLE_SCHEMA_VERSION};

/// Per-task coefficients for one path (manual or machine).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskCoefficients {
    pub minutes_per_task: f64,
    pub water_litres_per_task: f64,
    pub energy_kwh_per_task: f64,
    /// Detergent, cleaner, pods.
    pub consumable_cost_per_task: f64,
}

/// One value per dish category. Used both for base rates and multipliers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemRates {
    pub small: f64,
    pub plates: f64,
    pub pots: f64,
    pub utensils: f64,
}

impl ItemRates {
    pub const UNIT: ItemRates = ItemRates {
        small: 1.0,
        plates: 1.0,
        pots: 1.0,
        utensils: 1.0,
    };

    /// `fields` names small, plates, pots and utensils in that order.
    fn check_non_negative(&self, fields: [&'static str; 4]) -> Result<(), TableError> {
        let [small, plates, pots, utensils] = fields;
        non_negative(small, self.small)?;
        non_negative(plates, self.plates)?;
        non_negative(pots, self.pots)?;
        non_negative(utensils, self.utensils)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MealWeights {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
}

/// Which items compete for which rack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum RackStrategy {
    /// Small items on top; plates, pots and utensils below.
    Standard,
    /// A share of the small items are deep bowls that only fit the bottom
    /// rack, costing one plate slot each.
    SharedBowls { bottom_share: f64 },
    /// Oversized plates occupy more than their nominal slot.
    WidePlates { plate_slot_cost: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CulinaryProfile {
    /// Shown as the region in "based on" restatements.
    pub region: String,
    pub multipliers: ItemRates,
    pub rack_strategy: RackStrategy,
    /// Active hand-washing minutes per load for this cuisine.
    pub manual_minutes_per_load: f64,
    #[serde(default)]
    pub region_caveat: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CulinaryProfiles {
    pub global: CulinaryProfile,
    pub asia: CulinaryProfile,
    pub europe: CulinaryProfile,
}

impl CulinaryProfiles {
    pub fn get(&self, style: CulinaryStyle) -> &CulinaryProfile {
        match style {
            CulinaryStyle::Global => &self.global,
            CulinaryStyle::Asia => &self.asia,
            CulinaryStyle::Europe => &self.europe,
        }
    }

    fn iter(&self) -> impl Iterator<Item = &CulinaryProfile> {
        [&self.global, &self.asia, &self.europe].into_iter()
    }
}

/// Physical rack model: two compartments with independent capacities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RackModel {
    pub top_capacity: f64,
    pub bottom_capacity: f64,
    /// Bottom-rack slots taken by one pot or pan.
    pub pot_slot_cost: f64,
    /// Bottom-rack slots taken by one utensil in the basket.
    pub utensil_slot_cost: f64,
    /// Items per weighted meal per person, before culinary multipliers.
    pub base_rates: ItemRates,
    pub meal_weights: MealWeights,
    /// Minimum runs per week once anything is cooked at all.
    pub hygiene_floor_loads_per_week: f64,
}

/// Earlier single-compartment model: dish "units" per meal and a flat capacity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitCapacityModel {
    pub breakfast_base: f64,
    pub breakfast_per_person: f64,
    pub lunch_base: f64,
    pub lunch_per_person: f64,
    pub dinner_base: f64,
    pub dinner_per_person: f64,
    pub units_per_load: f64,
    pub hygiene_floor_loads_per_week: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum LoadModel {
    RackPhysics,
    UnitCapacity(UnitCapacityModel),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DishwasherConstants {
    pub load_model: LoadModel,
    pub racks: RackModel,
    pub profiles: CulinaryProfiles,
    pub manual_tap_litres_per_load: f64,
    pub manual_basin_litres_per_load: f64,
    pub heat_kwh_per_litre: f64,
    pub manual_detergent_per_load: f64,
    pub machine: TaskCoefficients,
    pub pro_installation_cost: f64,
    pub high_usage_loads_per_week: f64,
}

impl DishwasherConstants {
    /// Manual-path coefficients for a cuisine and washing method. The
    /// energy figure is the cost of heating the wash water.
    pub fn manual_task(&self, style: CulinaryStyle, method: WashingMethod) -> TaskCoefficients {
        let water = match method {
            WashingMethod::Tap => self.manual_tap_litres_per_load,
            WashingMethod::Basin => self.manual_basin_litres_per_load,
        };
        TaskCoefficients {
            minutes_per_task: self.profiles.get(style).manual_minutes_per_load,
            water_litres_per_task: water,
            energy_kwh_per_task: water * self.heat_kwh_per_litre,
            consumable_cost_per_task: self.manual_detergent_per_load,
        }
    }
}

impl Default for DishwasherConstants {
    fn default() -> Self {
        Self {
            load_model: LoadModel::RackPhysics,
            racks: RackModel {
                top_capacity: 50.0,
                bottom_capacity: 35.0,
                pot_slot_cost: 5.0,
                utensil_slot_cost: 0.05,
                base_rates: ItemRates {
                    small: 3.0,
                    plates: 1.5,
                    pots: 0.3,
                    utensils: 4.0,
                },
                meal_weights: MealWeights {
                    breakfast: 0.3,
                    lunch: 0.5,
                    dinner: 1.0,
                },
                hygiene_floor_loads_per_week: 2.3,
            },
            profiles: CulinaryProfiles {
                global: CulinaryProfile {
                    region: "Global".to_string(),
                    multipliers: ItemRates::UNIT,
                    rack_strategy: RackStrategy::Standard,
                    manual_minutes_per_load: 20.0,
                    region_caveat: None,
                },
                asia: CulinaryProfile {
                    region: "Asia".to_string(),
                    multipliers: ItemRates {
                        small: 1.6,
                        plates: 0.6,
                        pots: 0.8,
                        utensils: 0.7,
                    },
                    rack_strategy: RackStrategy::SharedBowls { bottom_share: 0.3 },
                    manual_minutes_per_load: 15.0,
                    region_caveat: Some(
                        "Compact kitchens often lack dishwasher plumbing. A countertop model may be the realistic option."
                            .to_string(),
                    ),
                },
                europe: CulinaryProfile {
                    region: "Europe".to_string(),
                    multipliers: ItemRates {
                        small: 0.9,
                        plates: 1.2,
                        pots: 1.2,
                        utensils: 1.1,
                    },
                    rack_strategy: RackStrategy::WidePlates {
                        plate_slot_cost: 1.5,
                    },
                    manual_minutes_per_load: 25.0,
                    region_caveat: Some(
                        "Slimline 45 cm machines are common here and hold noticeably less per run."
                            .to_string(),
                    ),
                },
            },
            manual_tap_litres_per_load: 100.0,
            manual_basin_litres_per_load: 40.0,
            heat_kwh_per_litre: 0.04,
            manual_detergent_per_load: 0.10,
            machine: TaskCoefficients {
                minutes_per_task: 5.0,
                water_litres_per_task: 12.0,
                energy_kwh_per_task: 1.2,
                consumable_cost_per_task: 0.25,
            },
            pro_installation_cost: 200.0,
            high_usage_loads_per_week: 10.0,
        }
    }
}

impl Default for UnitCapacityModel {
    fn default() -> Self {
        Self {
            breakfast_base: 0.5,
            breakfast_per_person: 0.5,
            lunch_base: 1.5,
            lunch_per_person: 1.0,
            dinner_base: 3.0,
            dinner_per_person: 1.0,
            units_per_load: 15.0,
            hygiene_floor_loads_per_week: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotVacuumConstants {
    /// Emptying the bin, untangling brushes.
    pub machine_minutes_per_run: f64,
    pub mop_refill_minutes_per_run: f64,
    pub manual_vacuum_kw: f64,
    pub robot_kwh_per_run_per_1000_sq_ft: f64,
    pub manual_mop_litres_per_session: f64,
    pub robot_mop_litres_per_run: f64,
    pub manual_mop_supplies_per_session: f64,
    pub annual_maintenance_cost: f64,
    pub pet_maintenance_cost: f64,
    pub mop_pad_annual_cost: f64,
    pub battery_cost: f64,
    pub battery_interval_years: u32,
    pub large_home_sq_ft: f64,
}

impl Default for RobotVacuumConstants {
    fn default() -> Self {
        Self {
            machine_minutes_per_run: 3.0,
            mop_refill_minutes_per_run: 2.0,
            manual_vacuum_kw: 1.2,
            robot_kwh_per_run_per_1000_sq_ft: 0.05,
            manual_mop_litres_per_session: 5.0,
            robot_mop_litres_per_run: 0.4,
            manual_mop_supplies_per_session: 0.10,
            annual_maintenance_cost: 40.0,
            pet_maintenance_cost: 30.0,
            mop_pad_annual_cost: 25.0,
            battery_cost: 70.0,
            battery_interval_years: 3,
            large_home_sq_ft: 3000.0,
        }
    }
}

/// How a generic preset produces its primary benefit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PresetKind {
    /// Saved minutes valued at the hourly wage.
    TimeSaver,
    /// A bought product (café coffee) replaced by a home-made one.
    CashSubstitution { home_cost_per_cup: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppliancePreset {
    pub id: String,
    pub name: String,
    pub default_cost: f64,
    pub default_frequency: f64,
    pub default_minutes_per_use: f64,
    pub task_label: String,
    pub kind: PresetKind,
    pub energy_kwh_per_use: f64,
    pub water_litres_per_use: f64,
    /// Consumption of whatever the machine replaces (hot tap, old dryer).
    #[serde(default)]
    pub baseline_energy_kwh_per_use: f64,
    #[serde(default)]
    pub baseline_water_litres_per_use: f64,
}

impl AppliancePreset {
    fn check_non_negative(&self) -> Result<(), TableError> {
        for (field, value) in [
            ("presets.default_cost", self.default_cost),
            ("presets.default_frequency", self.default_frequency),
            ("presets.default_minutes_per_use", self.default_minutes_per_use),
            ("presets.energy_kwh_per_use", self.energy_kwh_per_use),
            ("presets.water_litres_per_use", self.water_litres_per_use),
            ("presets.baseline_energy_kwh_per_use", self.baseline_energy_kwh_per_use),
            ("presets.baseline_water_litres_per_use", self.baseline_water_litres_per_use),
        ] {
            non_negative(field, value)?;
        }
        if let PresetKind::CashSubstitution { home_cost_per_cup } = self.kind {
            non_negative("presets.kind.home_cost_per_cup", home_cost_per_cup)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenericConstants {
    /// Minutes still spent interacting with the machine per use.
    pub machine_overhead_minutes: f64,
    pub default_cafe_price: f64,
    pub default_cups_per_day: f64,
    pub carbon_kg_per_kwh: f64,
    pub hours_per_series: f64,
    pub litres_per_shower: f64,
    pub carbon_kg_per_car_mile: f64,
    pub bulb_kwh_per_day: f64,
}

impl Default for GenericConstants {
    fn default() -> Self {
        Self {
            machine_overhead_minutes: 2.0,
            default_cafe_price: 6.0,
            default_cups_per_day: 2.0,
            carbon_kg_per_kwh: 0.4,
            hours_per_series: 10.0,
            litres_per_shower: 65.0,
            carbon_kg_per_car_mile: 0.404,
            bulb_kwh_per_day: 0.24,
        }
    }
}

pub fn default_presets() -> Vec<AppliancePreset> {
    vec![
        AppliancePreset {
            id: "robot-vacuum".to_string(),
            name: "Robot Vacuum".to_string(),
            default_cost: 500.0,
            default_frequency: 3.0,
            default_minutes_per_use: 45.0,
            task_label: "Minutes per vacuum session".to_string(),
            kind: PresetKind::TimeSaver,
            energy_kwh_per_use: 0.05,
            water_litres_per_use: 0.0,
            baseline_energy_kwh_per_use: 0.0,
            baseline_water_litres_per_use: 0.0,
        },
        AppliancePreset {
            id: "espresso-machine".to_string(),
            name: "Auto Espresso Machine".to_string(),
            default_cost: 800.0,
            default_frequency: 5.0,
            default_minutes_per_use: 20.0,
            task_label: "Mins roundtrip to cafe".to_string(),
            kind: PresetKind::CashSubstitution {
                home_cost_per_cup: 0.5,
            },
            energy_kwh_per_use: 0.1,
            water_litres_per_use: 0.2,
            baseline_energy_kwh_per_use: 0.0,
            baseline_water_litres_per_use: 0.0,
        },
        AppliancePreset {
            id: "robot-mower".to_string(),
            name: "Robot Mower".to_string(),
            default_cost: 1200.0,
            default_frequency: 1.0,
            default_minutes_per_use: 60.0,
            task_label: "Minutes mowing lawn".to_string(),
            kind: PresetKind::TimeSaver,
            energy_kwh_per_use: 0.1,
            water_litres_per_use: 0.0,
            baseline_energy_kwh_per_use: 0.0,
            baseline_water_litres_per_use: 0.0,
        },
        AppliancePreset {
            id: "dishwasher".to_string(),
            name: "Dishwasher".to_string(),
            default_cost: 600.0,
            default_frequency: 7.0,
            default_minutes_per_use: 30.0,
            task_label: "Minutes scrubbing dishes".to_string(),
            kind: PresetKind::TimeSaver,
            energy_kwh_per_use: 1.2,
            water_litres_per_use: 12.0,
            baseline_energy_kwh_per_use: 4.0,
            baseline_water_litres_per_use: 100.0,
        },
        AppliancePreset {
            id: "heat-pump-dryer".to_string(),
            name: "Heat Pump Dryer".to_string(),
            default_cost: 900.0,
            default_frequency: 4.0,
            default_minutes_per_use: 20.0,
            task_label: "Mins hanging wet clothes".to_string(),
            kind: PresetKind::TimeSaver,
            energy_kwh_per_use: 1.5,
            water_litres_per_use: 0.0,
            baseline_energy_kwh_per_use: 3.0,
            baseline_water_litres_per_use: 0.0,
        },
    ]
}

/// Complete, versioned coefficient set for every calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstantTable {
    pub schema_version: Version,
    pub dishwasher: DishwasherConstants,
    pub robot_vacuum: RobotVacuumConstants,
    pub generic: GenericConstants,
    pub presets: Vec<AppliancePreset>,
}

impl Default for ConstantTable {
    fn default() -> Self {
        Self {
            schema_version: TABLE_SCHEMA_VERSION,
            dishwasher: DishwasherConstants::default(),
            robot_vacuum: RobotVacuumConstants::default(),
            generic: GenericConstants::default(),
            presets: default_presets(),
        }
    }
}

impl ConstantTable {
    pub fn preset(&self, id: &str) -> Option<&AppliancePreset> {
        self.presets.iter().find(|preset| preset.id == id)
    }

    /// Checks the invariants the algorithms rely on (positive capacities,
    /// non-negative coefficients, a usable replacement interval).
    pub fn validate(&self) -> Result<(), TableError> {
        if !is_schema_compatible(&self.schema_version) {
            return Err(TableError::IncompatibleSchema {
                found: self.schema_version.clone(),
                expected: TABLE_SCHEMA_VERSION,
            });
        }

        let dish = &self.dishwasher;
        let racks = &dish.racks;
        positive("dishwasher.racks.top_capacity", racks.top_capacity)?;
        positive("dishwasher.racks.bottom_capacity", racks.bottom_capacity)?;
        non_negative("dishwasher.racks.pot_slot_cost", racks.pot_slot_cost)?;
        non_negative("dishwasher.racks.utensil_slot_cost", racks.utensil_slot_cost)?;
        non_negative(
            "dishwasher.racks.hygiene_floor_loads_per_week",
            racks.hygiene_floor_loads_per_week,
        )?;
        racks.base_rates.check_non_negative([
            "dishwasher.racks.base_rates.small",
            "dishwasher.racks.base_rates.plates",
            "dishwasher.racks.base_rates.pots",
            "dishwasher.racks.base_rates.utensils",
        ])?;
        non_negative("dishwasher.racks.meal_weights.breakfast", racks.meal_weights.breakfast)?;
        non_negative("dishwasher.racks.meal_weights.lunch", racks.meal_weights.lunch)?;
        non_negative("dishwasher.racks.meal_weights.dinner", racks.meal_weights.dinner)?;

        if let LoadModel::UnitCapacity(model) = &dish.load_model {
            positive("dishwasher.load_model.units_per_load", model.units_per_load)?;
            for (field, value) in [
                ("dishwasher.load_model.breakfast_base", model.breakfast_base),
                ("dishwasher.load_model.breakfast_per_person", model.breakfast_per_person),
                ("dishwasher.load_model.lunch_base", model.lunch_base),
                ("dishwasher.load_model.lunch_per_person", model.lunch_per_person),
                ("dishwasher.load_model.dinner_base", model.dinner_base),
                ("dishwasher.load_model.dinner_per_person", model.dinner_per_person),
                (
                    "dishwasher.load_model.hygiene_floor_loads_per_week",
                    model.hygiene_floor_loads_per_week,
                ),
            ] {
                non_negative(field, value)?;
            }
        }

        for profile in dish.profiles.iter() {
            non_negative(
                "dishwasher.profiles.manual_minutes_per_load",
                profile.manual_minutes_per_load,
            )?;
            profile.multipliers.check_non_negative([
                "dishwasher.profiles.multipliers.small",
                "dishwasher.profiles.multipliers.plates",
                "dishwasher.profiles.multipliers.pots",
                "dishwasher.profiles.multipliers.utensils",
            ])?;
            match profile.rack_strategy {
                RackStrategy::SharedBowls { bottom_share }
                    if !(0.0..=1.0).contains(&bottom_share) =>
                {
                    return Err(TableError::OutOfRange {
                        field: "dishwasher.profiles.rack_strategy.bottom_share",
                        value: bottom_share,
                    });
                }
                RackStrategy::WidePlates { plate_slot_cost } => {
                    positive(
                        "dishwasher.profiles.rack_strategy.plate_slot_cost",
                        plate_slot_cost,
                    )?;
                }
                _ => {}
            }
        }

        for (field, value) in [
            ("dishwasher.manual_tap_litres_per_load", dish.manual_tap_litres_per_load),
            ("dishwasher.manual_basin_litres_per_load", dish.manual_basin_litres_per_load),
            ("dishwasher.heat_kwh_per_litre", dish.heat_kwh_per_litre),
            ("dishwasher.manual_detergent_per_load", dish.manual_detergent_per_load),
            ("dishwasher.machine.minutes_per_task", dish.machine.minutes_per_task),
            ("dishwasher.machine.water_litres_per_task", dish.machine.water_litres_per_task),
            ("dishwasher.machine.energy_kwh_per_task", dish.machine.energy_kwh_per_task),
            (
                "dishwasher.machine.consumable_cost_per_task",
                dish.machine.consumable_cost_per_task,
            ),
            ("dishwasher.pro_installation_cost", dish.pro_installation_cost),
            ("dishwasher.high_usage_loads_per_week", dish.high_usage_loads_per_week),
        ] {
            non_negative(field, value)?;
        }

        let robot = &self.robot_vacuum;
        if robot.battery_interval_years == 0 {
            return Err(TableError::ZeroInterval("robot_vacuum.battery_interval_years"));
        }
        for (field, value) in [
            ("robot_vacuum.machine_minutes_per_run", robot.machine_minutes_per_run),
            ("robot_vacuum.mop_refill_minutes_per_run", robot.mop_refill_minutes_per_run),
            ("robot_vacuum.manual_vacuum_kw", robot.manual_vacuum_kw),
            (
                "robot_vacuum.robot_kwh_per_run_per_1000_sq_ft",
                robot.robot_kwh_per_run_per_1000_sq_ft,
            ),
            (
                "robot_vacuum.manual_mop_litres_per_session",
                robot.manual_mop_litres_per_session,
            ),
            ("robot_vacuum.robot_mop_litres_per_run", robot.robot_mop_litres_per_run),
            (
                "robot_vacuum.manual_mop_supplies_per_session",
                robot.manual_mop_supplies_per_session,
            ),
            ("robot_vacuum.annual_maintenance_cost", robot.annual_maintenance_cost),
            ("robot_vacuum.pet_maintenance_cost", robot.pet_maintenance_cost),
            ("robot_vacuum.mop_pad_annual_cost", robot.mop_pad_annual_cost),
            ("robot_vacuum.battery_cost", robot.battery_cost),
            ("robot_vacuum.large_home_sq_ft", robot.large_home_sq_ft),
        ] {
            non_negative(field, value)?;
        }

        let generic = &self.generic;
        non_negative("generic.machine_overhead_minutes", generic.machine_overhead_minutes)?;
        non_negative("generic.default_cafe_price", generic.default_cafe_price)?;
        non_negative("generic.default_cups_per_day", generic.default_cups_per_day)?;
        non_negative("generic.carbon_kg_per_kwh", generic.carbon_kg_per_kwh)?;
        positive("generic.hours_per_series", generic.hours_per_series)?;
        positive("generic.litres_per_shower", generic.litres_per_shower)?;
        positive("generic.carbon_kg_per_car_mile", generic.carbon_kg_per_car_mile)?;
        positive("generic.bulb_kwh_per_day", generic.bulb_kwh_per_day)?;

        for preset in &self.presets {
            preset.check_non_negative()?;
        }

        let mut seen = std::collections::HashSet::new();
        for preset in &self.presets {
            if !seen.insert(preset.id.as_str()) {
                return Err(TableError::DuplicatePreset(preset.id.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("table schema {found} is not compatible with {expected}")]
    IncompatibleSchema { found: Version, expected: Version },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("{0} must be at least one year")]
    ZeroInterval(&'static str),
    #[error("preset id {0} appears more than once")]
    DuplicatePreset(String),
}

fn positive(field: &'static str, value: f64) -> Result<(), TableError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TableError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), TableError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TableError::Negative { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        assert_eq!(ConstantTable::default().validate(), Ok(()));
    }

    #[test]
    fn zero_rack_capacity_is_rejected() {
        let mut table = ConstantTable::default();
        table.dishwasher.racks.bottom_capacity = 0.0;
        assert!(matches!(
            table.validate(),
            Err(TableError::NotPositive {
                field: "dishwasher.racks.bottom_capacity",
                ..
            })
        ));
    }

    #[test]
    fn zero_battery_interval_is_rejected() {
        let mut table = ConstantTable::default();
        table.robot_vacuum.battery_interval_years = 0;
        assert_eq!(
            table.validate(),
            Err(TableError::ZeroInterval("robot_vacuum.battery_interval_years"))
        );
    }

    fn rejected_field(adjust: impl FnOnce(&mut ConstantTable)) -> &'static str {
        let mut table = ConstantTable::default();
        adjust(&mut table);
        match table.validate() {
            Err(TableError::Negative { field, .. }) => field,
            other => panic!("expected a negative-coefficient error, got {other:?}"),
        }
    }

    #[test]
    fn negative_item_rates_are_rejected() {
        assert_eq!(
            rejected_field(|t| t.dishwasher.racks.base_rates.pots = -1.0),
            "dishwasher.racks.base_rates.pots"
        );
        assert_eq!(
            rejected_field(|t| t.dishwasher.racks.meal_weights.lunch = -0.5),
            "dishwasher.racks.meal_weights.lunch"
        );
        assert_eq!(
            rejected_field(|t| t.dishwasher.profiles.europe.multipliers.plates = -1.2),
            "dishwasher.profiles.multipliers.plates"
        );
    }

    #[test]
    fn negative_dishwashing_costs_are_rejected() {
        assert_eq!(
            rejected_field(|t| t.dishwasher.machine.consumable_cost_per_task = -5.0),
            "dishwasher.machine.consumable_cost_per_task"
        );
        assert_eq!(
            rejected_field(|t| t.dishwasher.manual_detergent_per_load = -1.0),
            "dishwasher.manual_detergent_per_load"
        );
        assert_eq!(
            rejected_field(|t| t.dishwasher.heat_kwh_per_litre = -0.04),
            "dishwasher.heat_kwh_per_litre"
        );
    }

    #[test]
    fn negative_unit_model_coefficients_are_rejected() {
        let field = rejected_field(|t| {
            t.dishwasher.load_model = LoadModel::UnitCapacity(UnitCapacityModel {
                dinner_per_person: -1.0,
                ..UnitCapacityModel::default()
            })
        });
        assert_eq!(field, "dishwasher.load_model.dinner_per_person");
    }

    #[test]
    fn negative_robot_costs_are_rejected() {
        assert_eq!(
            rejected_field(|t| t.robot_vacuum.annual_maintenance_cost = -40.0),
            "robot_vacuum.annual_maintenance_cost"
        );
        assert_eq!(
            rejected_field(|t| t.robot_vacuum.robot_mop_litres_per_run = -0.4),
            "robot_vacuum.robot_mop_litres_per_run"
        );
    }

    #[test]
    fn negative_generic_constants_are_rejected() {
        assert_eq!(
            rejected_field(|t| t.generic.machine_overhead_minutes = -10.0),
            "generic.machine_overhead_minutes"
        );
        assert_eq!(
            rejected_field(|t| t.generic.default_cafe_price = -6.0),
            "generic.default_cafe_price"
        );
        assert_eq!(
            rejected_field(|t| t.presets[0].energy_kwh_per_use = -0.05),
            "presets.energy_kwh_per_use"
        );
    }

    #[test]
    fn duplicate_presets_are_rejected() {
        let mut table = ConstantTable::default();
        let copy = table.presets[0].clone();
        table.presets.push(copy);
        assert!(matches!(table.validate(), Err(TableError::DuplicatePreset(_))));
    }

    #[test]
    fn manual_task_follows_cuisine_and_method() {
        let dish = DishwasherConstants::default();
        let asia_basin = dish.manual_task(CulinaryStyle::Asia, WashingMethod::Basin);
        assert_eq!(asia_basin.minutes_per_task, 15.0);
        assert_eq!(asia_basin.water_litres_per_task, 40.0);
        assert!((asia_basin.energy_kwh_per_task - 1.6).abs() < 1e-9);

        let europe_tap = dish.manual_task(CulinaryStyle::Europe, WashingMethod::Tap);
        assert_eq!(europe_tap.minutes_per_task, 25.0);
        assert_eq!(europe_tap.water_litres_per_task, 100.0);
    }

    #[test]
    fn table_survives_json() {
        let table = ConstantTable::default();
        let json = serde_json::to_string_pretty(&table).unwrap();
        let back: ConstantTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
