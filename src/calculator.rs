//! Tip arithmetic.
//!
//! [`compute_tip`] and [`compute_total`] are the whole contract: pure, total,
//! and deterministic. [`TipCalculator`] wraps one set of inputs and produces a
//! [`TipBreakdown`] with a calculation trace.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TipConfig;
use crate::inputs::{parse_or_zero, IntoTipDecimal};
use crate::types::{CalculationStep, TipBreakdown, TipError};

/// Returns `percent / 100 * amount`, rounded up to the next whole unit when
/// `round_up` is set.
///
/// Every input is accepted. Negative values give negative tips, and a
/// negative tip rounds up toward zero. Results saturate at the `Decimal`
/// bounds.
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use tipcalc::calculator::compute_tip;
///
/// assert_eq!(compute_tip(dec!(10), dec!(20), false), dec!(2));
/// assert_eq!(compute_tip(dec!(10), dec!(21), true), dec!(3));
/// ```
pub fn compute_tip(amount: Decimal, percent: Decimal, round_up: bool) -> Decimal {
    let tip = (percent / Decimal::ONE_HUNDRED).saturating_mul(amount);
    if round_up { tip.ceil() } else { tip }
}

/// Returns `amount + tip`, saturating at the `Decimal` bounds.
pub fn compute_total(amount: Decimal, tip: Decimal) -> Decimal {
    amount.saturating_add(tip)
}

/// One set of tip inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TipCalculator {
    pub amount: Decimal,
    pub tip_percent: Decimal,
    pub round_up: bool,
    pub label: Option<String>,
}

impl TipCalculator {
    pub fn new(amount: impl IntoTipDecimal, tip_percent: impl IntoTipDecimal) -> Result<Self, TipError> {
        Ok(Self {
            amount: amount.into_tip_decimal()?,
            tip_percent: tip_percent.into_tip_decimal()?,
            ..Default::default()
        })
    }

    /// Builds a calculator from raw field text. Unparseable text counts as zero.
    pub fn from_text(amount_text: &str, percent_text: &str) -> Self {
        Self {
            amount: parse_or_zero(amount_text),
            tip_percent: parse_or_zero(percent_text),
            ..Default::default()
        }
    }

    /// Uses the configured default percentage and round-up preference.
    pub fn from_config(amount: impl IntoTipDecimal, config: &TipConfig) -> Result<Self, TipError> {
        Ok(Self {
            amount: amount.into_tip_decimal()?,
            tip_percent: config.default_tip_percent,
            round_up: config.round_up_by_default,
            label: None,
        })
    }

    pub fn round_up(mut self, round_up: bool) -> Self {
        self.round_up = round_up;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Calculates the tip and total, recording each step.
    ///
    /// Values past the `Decimal` range saturate exactly like [`compute_tip`]
    /// and [`compute_total`]; the trace notes where that happened.
    pub fn calculate(&self) -> TipBreakdown {
        let rate = self.tip_percent / Decimal::ONE_HUNDRED;
        let tip_capped = rate.checked_mul(self.amount).is_none();
        let unrounded_tip = rate.saturating_mul(self.amount);
        let tip_amount = compute_tip(self.amount, self.tip_percent, self.round_up);
        let total_capped = self.amount.checked_add(tip_amount).is_none();
        let total_amount = compute_total(self.amount, tip_amount);

        let mut trace = vec![
            CalculationStep::initial("Bill Amount", self.amount),
            CalculationStep::rate("Tip Percentage", self.tip_percent),
            CalculationStep::multiply("Tip (percent / 100 x amount)", unrounded_tip),
        ];
        if tip_capped {
            trace.push(CalculationStep::info("Tip exceeds the largest representable amount, capped"));
        }
        if self.round_up {
            if tip_amount == unrounded_tip {
                trace.push(CalculationStep::info("Tip already a whole unit, no rounding needed"));
            } else {
                trace.push(CalculationStep::round_up("Rounded Up Tip", tip_amount));
            }
        }
        trace.push(CalculationStep::add("Tip Amount", tip_amount));
        if total_capped {
            trace.push(CalculationStep::info("Total exceeds the largest representable amount, capped"));
        }
        trace.push(CalculationStep::result("Total Amount", total_amount));

        debug!(
            amount = %self.amount,
            percent = %self.tip_percent,
            round_up = self.round_up,
            tip = %tip_amount,
            total = %total_amount,
            "calculated tip"
        );

        TipBreakdown {
            amount: self.amount,
            tip_percent: self.tip_percent,
            round_up: self.round_up,
            unrounded_tip,
            tip_amount,
            total_amount,
            label: self.label.clone(),
            calculation_trace: trace,
        }
    }
}
