//! Display strings for results. Everything here is presentation sugar over
//! numbers the engine already produced; nothing feeds back into it.

use time::macros::format_description;
use time::{Date, Month};

use crate::domain::generic::LifetimeRoiResult;
use crate::domain::verdict::pays_back_within_horizon;

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole units with thousands separators: `-1234.5` becomes `-1,235`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round();
    let digits = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Like [`format_number`] with the currency symbol after the sign: `-$1,235`.
pub fn format_money(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return format!("{symbol}{value}");
    }
    let rounded = value.round();
    let digits = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-{symbol}{digits}")
    } else {
        format!("{symbol}{digits}")
    }
}

pub fn payback_label(months: f64) -> String {
    if !pays_back_within_horizon(months) || months.is_nan() {
        "10+ years".to_string()
    } else if months < 12.0 {
        format!("{} Months", months.round())
    } else {
        format!("{:.1} Years", months / 12.0)
    }
}

/// First day of the month in which the machine has paid for itself,
/// counting `round(months)` calendar months from `from`.
pub fn payback_date(from: Date, months: f64) -> Option<Date> {
    if months.is_nan() || months < 0.0 || !pays_back_within_horizon(months) {
        return None;
    }
    let offset = months.round() as i32;
    let index = from.year() * 12 + i32::from(u8::from(from.month())) - 1 + offset;
    let month = Month::try_from(u8::try_from(index.rem_euclid(12) + 1).ok()?).ok()?;
    Date::from_calendar_date(index.div_euclid(12), month, 1).ok()
}

pub fn format_month_year(date: Date) -> String {
    date.format(format_description!("[month repr:long] [year]"))
        .unwrap_or_else(|_| format!("{} {}", date.month(), date.year()))
}

fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{rate:.0}")
    } else {
        rate.to_string()
    }
}

/// "Based on 3 loads/wk @ $25/hr". Frequencies under one keep a decimal.
pub fn workload_label(frequency: f64, unit_label: &str, rate: f64, symbol: &str) -> String {
    let frequency = if frequency < 1.0 {
        format!("{frequency:.1}")
    } else {
        format!("{}", frequency.round())
    };
    format!(
        "Based on {frequency} {unit_label} @ {symbol}{}/hr",
        format_rate(rate)
    )
}

/// Plain-text summary of a lifetime result, ready for the clipboard.
pub fn lifetime_summary(appliance_name: &str, result: &LifetimeRoiResult) -> String {
    let roi = result
        .lifetime_roi
        .map(|roi| format!("{roi:.0}%"))
        .unwrap_or_else(|| "n/a".to_string());
    let break_even = if pays_back_within_horizon(result.break_even_months) {
        format!("{:.1} months", result.break_even_months)
    } else {
        "never".to_string()
    };
    format!(
        "ROI Analysis: {appliance_name}\n---\nAnnual Hours Reclaimed: {:.1} hrs\nFinancial Break-even: {break_even}\nLifetime ROI (10yr): {roi}",
        result.annual_hours_saved
    )
}
