//! Turns qualitative habits (meals cooked, cleaning sessions) into a single
//! usage rate per week that the cost model consumes uniformly.

use serde::{Deserialize, Serialize};

use super::entities::{DishwasherInputs, RobotVacuumInputs};
use super::tables::{CulinaryProfile, LoadModel, RackModel, RackStrategy, UnitCapacityModel};

/// Weekly dish counts per category, after culinary multipliers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemBreakdown {
    pub small: f64,
    pub plates: f64,
    pub pots: f64,
    pub utensils: f64,
}

impl ItemBreakdown {
    pub fn total_weekly_items(&self) -> f64 {
        self.small + self.plates + self.pots + self.utensils
    }
}

/// How full each rack gets per week, measured in slots.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RackFill {
    pub top_slots: f64,
    pub bottom_slots: f64,
    pub top_loads: f64,
    pub bottom_loads: f64,
}

impl RackFill {
    /// The rack that fills first dictates how often the machine runs.
    pub fn bottleneck_loads(&self) -> f64 {
        self.top_loads.max(self.bottom_loads)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DishwasherLoad {
    pub loads_per_week: f64,
    pub is_hygiene_triggered: bool,
    /// Absent for the unit-capacity model, which does not itemize.
    pub items: Option<ItemBreakdown>,
    pub racks: Option<RackFill>,
}

/// `(0.3·breakfasts + 0.5·lunches + 1.0·dinners) × household`.
pub fn weighted_meal_factor(inputs: &DishwasherInputs, racks: &RackModel) -> f64 {
    let weights = &racks.meal_weights;
    let meals = weights.breakfast * f64::from(inputs.breakfasts)
        + weights.lunch * f64::from(inputs.lunches)
        + weights.dinner * f64::from(inputs.dinners);
    meals * f64::from(inputs.household_size)
}

pub fn estimate_items(
    inputs: &DishwasherInputs,
    racks: &RackModel,
    profile: &CulinaryProfile,
) -> ItemBreakdown {
    let factor = weighted_meal_factor(inputs, racks);
    let base = &racks.base_rates;
    let mult = &profile.multipliers;
    ItemBreakdown {
        small: factor * base.small * mult.small,
        plates: factor * base.plates * mult.plates,
        pots: factor * base.pots * mult.pots,
        utensils: factor * base.utensils * mult.utensils,
    }
}

pub fn rack_fill(items: &ItemBreakdown, racks: &RackModel, strategy: &RackStrategy) -> RackFill {
    let (bowls_below, plate_slot_cost) = match *strategy {
        RackStrategy::Standard => (0.0, 1.0),
        RackStrategy::SharedBowls { bottom_share } => (items.small * bottom_share, 1.0),
        RackStrategy::WidePlates { plate_slot_cost } => (0.0, plate_slot_cost),
    };

    let top_slots = items.small - bowls_below;
    let bottom_slots = items.plates * plate_slot_cost
        + bowls_below
        + items.pots * racks.pot_slot_cost
        + items.utensils * racks.utensil_slot_cost;

    RackFill {
        top_slots,
        bottom_slots,
        top_loads: top_slots / racks.top_capacity,
        bottom_loads: bottom_slots / racks.bottom_capacity,
    }
}

/// Raises a low-but-nonzero rate to the odor-prevention floor. Zero cooking
/// means zero loads; the floor never applies then.
pub fn apply_hygiene_floor(raw_loads: f64, total_meals: u32, floor: f64) -> (f64, bool) {
    if total_meals == 0 {
        return (0.0, false);
    }
    if raw_loads < floor {
        (floor, true)
    } else {
        (raw_loads, false)
    }
}

pub fn estimate_dishwasher_load(
    inputs: &DishwasherInputs,
    model: &LoadModel,
    racks: &RackModel,
    profile: &CulinaryProfile,
) -> DishwasherLoad {
    match model {
        LoadModel::RackPhysics => {
            let items = estimate_items(inputs, racks, profile);
            let fill = rack_fill(&items, racks, &profile.rack_strategy);
            let (loads_per_week, is_hygiene_triggered) = apply_hygiene_floor(
                fill.bottleneck_loads(),
                inputs.total_meals(),
                racks.hygiene_floor_loads_per_week,
            );
            DishwasherLoad {
                loads_per_week,
                is_hygiene_triggered,
                items: Some(items),
                racks: Some(fill),
            }
        }
        LoadModel::UnitCapacity(units) => {
            let (loads_per_week, is_hygiene_triggered) = apply_hygiene_floor(
                weekly_units(inputs, units) / units.units_per_load,
                inputs.total_meals(),
                units.hygiene_floor_loads_per_week,
            );
            DishwasherLoad {
                loads_per_week,
                is_hygiene_triggered,
                items: None,
                racks: None,
            }
        }
    }
}

fn weekly_units(inputs: &DishwasherInputs, units: &UnitCapacityModel) -> f64 {
    let people = f64::from(inputs.household_size);
    f64::from(inputs.breakfasts) * (units.breakfast_base + people * units.breakfast_per_person)
        + f64::from(inputs.lunches) * (units.lunch_base + people * units.lunch_per_person)
        + f64::from(inputs.dinners) * (units.dinner_base + people * units.dinner_per_person)
}

/// Manual sessions per week that a robot actually takes over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleaningSessions {
    pub vacuum_per_week: f64,
    /// Zero when the robot cannot mop, whatever the household's habit.
    pub mop_per_week: f64,
}

impl CleaningSessions {
    pub fn total_per_week(&self) -> f64 {
        self.vacuum_per_week + self.mop_per_week
    }
}

pub fn estimate_cleaning_sessions(inputs: &RobotVacuumInputs) -> CleaningSessions {
    CleaningSessions {
        vacuum_per_week: inputs.manual_vac_frequency.max(0.0),
        mop_per_week: if inputs.robot_type.can_mop() {
            inputs.manual_mop_frequency.max(0.0)
        } else {
            0.0
        },
    }
}
