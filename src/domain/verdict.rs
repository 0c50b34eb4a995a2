use serde::{Deserialize, Serialize};

/// Break-even value meaning "never pays back".
pub const NEVER_BREAKS_EVEN: f64 = 999.0;
/// Anything at or beyond this is shown as "10+ years".
pub const HORIZON_MONTHS: f64 = 120.0;
/// Payback at or beyond this is a weak verdict even when net positive.
pub const LOW_TIER_MONTHS: f64 = 60.0;
/// Payback within this is a strong verdict.
pub const HIGH_TIER_MONTHS: f64 = 24.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictTier {
    Low,
    Borderline,
    High,
}

impl VerdictTier {
    pub fn name(&self) -> &'static str {
        match self {
            VerdictTier::Low => "low",
            VerdictTier::Borderline => "borderline",
            VerdictTier::High => "high",
        }
    }
}

/// Months until the upfront spend is recovered by the yearly benefit. The
/// benefit is not net of the upfront cost.
pub fn break_even_months(upfront_cost: f64, annual_benefit: f64) -> f64 {
    if annual_benefit > 0.0 {
        upfront_cost / annual_benefit * 12.0
    } else {
        NEVER_BREAKS_EVEN
    }
}

pub fn pays_back_within_horizon(months: f64) -> bool {
    months < HORIZON_MONTHS
}

pub fn verdict_tier(is_worth_it: bool, break_even_months: f64) -> VerdictTier {
    if !is_worth_it || break_even_months >= LOW_TIER_MONTHS {
        VerdictTier::Low
    } else if break_even_months > HIGH_TIER_MONTHS {
        VerdictTier::Borderline
    } else {
        VerdictTier::High
    }
}
