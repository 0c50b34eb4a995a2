//! Decides whether a household appliance pays for itself.
//!
//! The engine in [`domain`] is pure: inputs, a [`ConstantTable`] and a
//! [`RegionalProfile`] go in, a deterministic [`RoiOutcome`] comes out.
//! [`infra`] holds the collaborators a host injects (locale detection,
//! analytics) and [`util`] the presentation and table file helpers.

pub mod domain;
pub mod infra;
pub mod util;

pub use domain::{
    evaluate, ApplianceCategory, ApplianceInputs, CalculatorSession, ConstantTable,
    DishwasherInputs, EvaluationError, GenericInputs, LifetimeRoiResult, RegionalProfile,
    RobotVacuumInputs, RoiOutcome, RoiResult, VerdictTier,
};
