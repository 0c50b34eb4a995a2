use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cooked meals per week are counted per day of the week.
pub const MAX_MEALS_PER_WEEK: u8 = 7;

/// Which calculator (and therefore which engine mode) an input belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplianceCategory {
    Dishwasher,
    RobotVacuum,
    Generic,
}

impl ApplianceCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ApplianceCategory::Dishwasher => "Dishwasher",
            ApplianceCategory::RobotVacuum => "Robot Vacuum",
            ApplianceCategory::Generic => "Appliance",
        }
    }

    /// Unit the usage figure of this category is reported in.
    pub fn usage_unit(&self) -> &'static str {
        match self {
            ApplianceCategory::Dishwasher => "loads/wk",
            ApplianceCategory::RobotVacuum => "runs/wk",
            ApplianceCategory::Generic => "uses/wk",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallationType {
    #[default]
    Diy,
    Pro,
}

/// Cuisine the household cooks; selects the culinary coefficient profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CulinaryStyle {
    #[default]
    Global,
    Asia,
    Europe,
}

impl CulinaryStyle {
    pub fn name(&self) -> &'static str {
        match self {
            CulinaryStyle::Global => "Global",
            CulinaryStyle::Asia => "Asia",
            CulinaryStyle::Europe => "Europe",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WashingMethod {
    /// Running tap the whole time.
    #[default]
    Tap,
    /// Filled sink or basin.
    Basin,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotType {
    #[default]
    VacOnly,
    VacMop,
}

impl RobotType {
    pub fn can_mop(&self) -> bool {
        matches!(self, RobotType::VacMop)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DishwasherInputs {
    /// What an hour of the user's time is worth.
    pub time_value: f64,
    pub household_size: u32,
    pub breakfasts: u8,
    pub lunches: u8,
    pub dinners: u8,
    #[serde(default)]
    pub culinary_style: CulinaryStyle,
    #[serde(default)]
    pub washing_method: WashingMethod,
    pub machine_cost: f64,
    #[serde(default)]
    pub installation: InstallationType,
}

impl Default for DishwasherInputs {
    fn default() -> Self {
        Self {
            time_value: 25.0,
            household_size: 2,
            breakfasts: 2,
            lunches: 2,
            dinners: 5,
            culinary_style: CulinaryStyle::Global,
            washing_method: WashingMethod::Tap,
            machine_cost: 600.0,
            installation: InstallationType::Diy,
        }
    }
}

impl DishwasherInputs {
    pub fn total_meals(&self) -> u32 {
        u32::from(self.breakfasts) + u32::from(self.lunches) + u32::from(self.dinners)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        check_amount("time_value", self.time_value)?;
        check_amount("machine_cost", self.machine_cost)?;
        for (field, count) in [
            ("breakfasts", self.breakfasts),
            ("lunches", self.lunches),
            ("dinners", self.dinners),
        ] {
            if count > MAX_MEALS_PER_WEEK {
                return Err(InputError::MealsOutOfRange { field, value: count });
            }
        }
        Ok(())
    }

    /// Copy with meal counts clamped to a week and non-finite amounts zeroed.
    pub fn normalized(&self) -> Self {
        Self {
            time_value: finite_or_zero(self.time_value),
            breakfasts: self.breakfasts.min(MAX_MEALS_PER_WEEK),
            lunches: self.lunches.min(MAX_MEALS_PER_WEEK),
            dinners: self.dinners.min(MAX_MEALS_PER_WEEK),
            machine_cost: finite_or_zero(self.machine_cost),
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotVacuumInputs {
    pub time_value: f64,
    #[serde(default)]
    pub robot_type: RobotType,
    pub machine_cost: f64,
    pub home_size_sq_ft: f64,
    #[serde(default)]
    pub has_pets: bool,
    /// Manual vacuum sessions per week.
    pub manual_vac_frequency: f64,
    /// Minutes per manual vacuum session.
    pub manual_vac_minutes: f64,
    #[serde(default)]
    pub manual_mop_frequency: f64,
    #[serde(default)]
    pub manual_mop_minutes: f64,
}

impl Default for RobotVacuumInputs {
    fn default() -> Self {
        Self {
            time_value: 25.0,
            robot_type: RobotType::VacOnly,
            machine_cost: 500.0,
            home_size_sq_ft: 1200.0,
            has_pets: false,
            manual_vac_frequency: 3.0,
            manual_vac_minutes: 45.0,
            manual_mop_frequency: 1.0,
            manual_mop_minutes: 30.0,
        }
    }
}

impl RobotVacuumInputs {
    pub fn validate(&self) -> Result<(), InputError> {
        check_amount("time_value", self.time_value)?;
        check_amount("machine_cost", self.machine_cost)?;
        check_amount("home_size_sq_ft", self.home_size_sq_ft)?;
        check_amount("manual_vac_frequency", self.manual_vac_frequency)?;
        check_amount("manual_vac_minutes", self.manual_vac_minutes)?;
        check_amount("manual_mop_frequency", self.manual_mop_frequency)?;
        check_amount("manual_mop_minutes", self.manual_mop_minutes)
    }

    pub fn normalized(&self) -> Self {
        Self {
            time_value: finite_or_zero(self.time_value),
            machine_cost: finite_or_zero(self.machine_cost),
            home_size_sq_ft: finite_or_zero(self.home_size_sq_ft),
            manual_vac_frequency: finite_or_zero(self.manual_vac_frequency),
            manual_vac_minutes: finite_or_zero(self.manual_vac_minutes),
            manual_mop_frequency: finite_or_zero(self.manual_mop_frequency),
            manual_mop_minutes: finite_or_zero(self.manual_mop_minutes),
            ..self.clone()
        }
    }
}

/// Inputs for the preset-driven lifetime calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenericInputs {
    pub preset_id: String,
    /// Purchase price.
    pub cost: f64,
    pub hourly_wage: f64,
    /// Uses per week (days per week for cash-substitution presets).
    pub frequency: f64,
    pub minutes_per_use: f64,
    #[serde(default)]
    pub cafe_price: Option<f64>,
    #[serde(default)]
    pub cups_per_day: Option<f64>,
}

impl GenericInputs {
    pub fn validate(&self) -> Result<(), InputError> {
        if self.preset_id.trim().is_empty() {
            return Err(InputError::MissingPreset);
        }
        check_amount("cost", self.cost)?;
        check_amount("hourly_wage", self.hourly_wage)?;
        check_amount("frequency", self.frequency)?;
        check_amount("minutes_per_use", self.minutes_per_use)?;
        if let Some(price) = self.cafe_price {
            check_amount("cafe_price", price)?;
        }
        if let Some(cups) = self.cups_per_day {
            check_amount("cups_per_day", cups)?;
        }
        Ok(())
    }

    pub fn normalized(&self) -> Self {
        Self {
            preset_id: self.preset_id.clone(),
            cost: finite_or_zero(self.cost),
            hourly_wage: finite_or_zero(self.hourly_wage),
            frequency: finite_or_zero(self.frequency),
            minutes_per_use: finite_or_zero(self.minutes_per_use),
            cafe_price: self.cafe_price.map(finite_or_zero),
            cups_per_day: self.cups_per_day.map(finite_or_zero),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ApplianceInputs {
    Dishwasher(DishwasherInputs),
    RobotVacuum(RobotVacuumInputs),
    Generic(GenericInputs),
}

impl ApplianceInputs {
    pub fn category(&self) -> ApplianceCategory {
        match self {
            ApplianceInputs::Dishwasher(_) => ApplianceCategory::Dishwasher,
            ApplianceInputs::RobotVacuum(_) => ApplianceCategory::RobotVacuum,
            ApplianceInputs::Generic(_) => ApplianceCategory::Generic,
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        match self {
            ApplianceInputs::Dishwasher(inputs) => inputs.validate(),
            ApplianceInputs::RobotVacuum(inputs) => inputs.validate(),
            ApplianceInputs::Generic(inputs) => inputs.validate(),
        }
    }
}

/// Rejections raised at the caller boundary. The engine itself never validates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be between 0 and {max} per week, got {value}", max = MAX_MEALS_PER_WEEK)]
    MealsOutOfRange { field: &'static str, value: u8 },
    #[error("no appliance preset selected")]
    MissingPreset,
}

fn check_amount(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(())
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
