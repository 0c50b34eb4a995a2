//! Fire-and-forget usage events. Sinks never fail and never block the
//! calculation; a host that does not care plugs in [`NullSink`].

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::entities::{ApplianceCategory, ApplianceInputs, InstallationType, RobotType};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    CalculateTruthClicked {
        hourly_rate: f64,
        household_size: u32,
        meals_breakfast: u8,
        meals_lunch: u8,
        meals_dinner: u8,
        machine_cost: f64,
        installation: InstallationType,
    },
    CalculateRobotTruthClicked {
        robot_type: RobotType,
        has_pets: bool,
        hourly_rate: f64,
        machine_cost: f64,
        vac_freq: f64,
        mop_freq: f64,
    },
    CalculateLifetimeClicked {
        preset_id: String,
        cost: f64,
        hourly_wage: f64,
        frequency: f64,
    },
    ShareResult { category: ApplianceCategory },
    OpenBoringMathModal { category: ApplianceCategory },
    ResetCalculator { category: ApplianceCategory },
}

impl AnalyticsEvent {
    /// The event a calculate button sends for these inputs.
    pub fn calculate_clicked(inputs: &ApplianceInputs) -> Self {
        match inputs {
            ApplianceInputs::Dishwasher(data) => AnalyticsEvent::CalculateTruthClicked {
                hourly_rate: data.time_value,
                household_size: data.household_size,
                meals_breakfast: data.breakfasts,
                meals_lunch: data.lunches,
                meals_dinner: data.dinners,
                machine_cost: data.machine_cost,
                installation: data.installation,
            },
            ApplianceInputs::RobotVacuum(data) => AnalyticsEvent::CalculateRobotTruthClicked {
                robot_type: data.robot_type,
                has_pets: data.has_pets,
                hourly_rate: data.time_value,
                machine_cost: data.machine_cost,
                vac_freq: data.manual_vac_frequency,
                mop_freq: data.manual_mop_frequency,
            },
            ApplianceInputs::Generic(data) => AnalyticsEvent::CalculateLifetimeClicked {
                preset_id: data.preset_id.clone(),
                cost: data.cost,
                hourly_wage: data.hourly_wage,
                frequency: data.frequency,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::CalculateTruthClicked { .. } => "calculate_truth_clicked",
            AnalyticsEvent::CalculateRobotTruthClicked { .. } => "calculate_robot_truth_clicked",
            AnalyticsEvent::CalculateLifetimeClicked { .. } => "calculate_lifetime_clicked",
            AnalyticsEvent::ShareResult { .. } => "share_result",
            AnalyticsEvent::OpenBoringMathModal { .. } => "open_boring_math_modal",
            AnalyticsEvent::ResetCalculator { .. } => "reset_calculator",
        }
    }
}

pub trait AnalyticsSink {
    fn record(&self, event: &AnalyticsEvent);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn record(&self, _event: &AnalyticsEvent) {}
}

/// Emits each event as an `info` record on the `analytics` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn record(&self, event: &AnalyticsEvent) {
        match serde_json::to_string(event) {
            Ok(payload) => info!(target: "analytics", event = event.name(), %payload),
            Err(err) => warn!(
                target: "analytics",
                event = event.name(),
                error = %err,
                "unserializable event"
            ),
        }
    }
}

/// Forwards events only after the user granted consent. The flag lives in
/// memory; persisting the choice is up to the host.
#[derive(Debug, Default)]
pub struct ConsentGate<S> {
    inner: S,
    granted: AtomicBool,
}

impl<S: AnalyticsSink> ConsentGate<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            granted: AtomicBool::new(false),
        }
    }

    pub fn grant(&self) {
        self.granted.store(true, Ordering::Relaxed);
    }

    pub fn revoke(&self) {
        self.granted.store(false, Ordering::Relaxed);
    }

    pub fn is_granted(&self) -> bool {
        self.granted.load(Ordering::Relaxed)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: AnalyticsSink> AnalyticsSink for ConsentGate<S> {
    fn record(&self, event: &AnalyticsEvent) {
        if self.is_granted() {
            self.inner.record(event);
        }
    }
}
