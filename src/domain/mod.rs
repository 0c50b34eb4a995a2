//! Domain logic for appliance ROI lives here.

pub mod cost_model;
pub mod entities;
pub mod evaluation;
pub mod generic;
pub mod load_estimator;
pub mod region;
pub mod session;
pub mod tables;
pub mod verdict;

pub use cost_model::{PathCost, TenYearProjection, UtilityRates, HORIZON_YEARS, WEEKS_PER_YEAR};
pub use entities::{
    ApplianceCategory, ApplianceInputs, CulinaryStyle, DishwasherInputs, GenericInputs,
    InputError, InstallationType, RobotType, RobotVacuumInputs, WashingMethod,
};
pub use evaluation::{
    calculate_dishwasher_roi, calculate_robot_vacuum_roi, evaluate, CostBreakdown,
    EffectiveInputs, EvaluationError, RoiOutcome, RoiResult,
};
pub use generic::{calculate_roi, Comparisons, EcoImpact, LifetimeRoiResult};
pub use load_estimator::{CleaningSessions, DishwasherLoad, ItemBreakdown, RackFill};
pub use region::{Region, RegionalProfile};
pub use session::CalculatorSession;
pub use tables::{ConstantTable, TableError};
pub use verdict::{VerdictTier, HORIZON_MONTHS, NEVER_BREAKS_EVEN};
