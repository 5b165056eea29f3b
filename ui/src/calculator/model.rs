//! Revenue projection model behind the clinic ROI calculator.

use serde::{Deserialize, Serialize};

/// Reference subscription price (rupiah per month) the multiplier is
/// expressed against.
pub const SUBSCRIPTION_REF: f64 = 1_250_000.0;

/// Share of no-show revenue the reminder engine is projected to recover.
const NO_SHOW_RECOVERY_RATE: f64 = 0.45;
/// Projected revenue uplift from retention automation.
const RETENTION_GAIN_RATE: f64 = 0.12;
/// Projected revenue uplift from treatment upsells.
const UPSELL_GAIN_RATE: f64 = 0.08;

/// Clinic metrics as entered on the calculator. The caller is responsible
/// for numeric validity; the projection evaluates for any finite inputs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub monthly_visits: f64,
    pub avg_treatment_value: f64,
    pub no_show_rate_pct: f64,
    /// Collected for the sales team; the projection does not use it.
    pub avg_repeat_visits: f64,
}

/// Projected financial impact, fully recomputed on every calculation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiProjection {
    pub monthly_increase: f64,
    pub annual_impact: f64,
    pub roi_multiplier: f64,
}

/// Map clinic metrics to their projected financial impact.
pub fn project(inputs: &RoiInputs) -> RoiProjection {
    let baseline = inputs.monthly_visits * inputs.avg_treatment_value;
    let no_show_loss = baseline * (inputs.no_show_rate_pct / 100.0);
    let recovered_no_show = no_show_loss * NO_SHOW_RECOVERY_RATE;
    let retention_gain = baseline * RETENTION_GAIN_RATE;
    let upsell_gain = baseline * UPSELL_GAIN_RATE;
    let monthly_increase = recovered_no_show + retention_gain + upsell_gain;

    RoiProjection {
        monthly_increase,
        annual_impact: monthly_increase * 12.0,
        roi_multiplier: (monthly_increase / SUBSCRIPTION_REF).round(),
    }
}
