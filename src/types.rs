use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of arithmetic performed in a single trace step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Initial,
    Rate,
    Multiply,
    RoundUp,
    Add,
    Result,
    Info,
}

impl Operation {
    fn symbol(&self) -> &'static str {
        match self {
            Operation::Initial => " ",
            Operation::Rate => "%",
            Operation::Multiply => "x",
            Operation::RoundUp => "^",
            Operation::Add => "+",
            Operation::Result => "=",
            Operation::Info => " ",
        }
    }
}

/// Represents a single step in the tip calculation.
///
/// The trace makes it possible to show a user exactly how the displayed
/// tip and total were derived from their inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationStep {
    /// Human-readable description of what this step does.
    pub description: String,
    /// The value at this step (if applicable).
    pub amount: Option<Decimal>,
    pub operation: Operation,
}

impl CalculationStep {
    fn with_amount(description: impl Into<String>, amount: Decimal, operation: Operation) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation,
        }
    }

    pub fn initial(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with_amount(description, amount, Operation::Initial)
    }

    pub fn rate(description: impl Into<String>, rate: Decimal) -> Self {
        Self::with_amount(description, rate, Operation::Rate)
    }

    pub fn multiply(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with_amount(description, amount, Operation::Multiply)
    }

    pub fn round_up(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with_amount(description, amount, Operation::RoundUp)
    }

    pub fn add(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with_amount(description, amount, Operation::Add)
    }

    pub fn result(description: impl Into<String>, amount: Decimal) -> Self {
        Self::with_amount(description, amount, Operation::Result)
    }

    pub fn info(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: None,
            operation: Operation::Info,
        }
    }
}

/// The detailed result of one tip calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TipBreakdown {
    /// The bill amount the tip is based on.
    pub amount: Decimal,
    /// Tip percentage, e.g. `15` for 15%.
    pub tip_percent: Decimal,
    /// Whether the tip was rounded up to a whole unit.
    pub round_up: bool,
    /// The tip before any rounding.
    pub unrounded_tip: Decimal,
    /// The final tip.
    pub tip_amount: Decimal,
    /// `amount + tip_amount`.
    pub total_amount: Decimal,
    /// Optional label (e.g. "Dinner at Luigi's").
    pub label: Option<String>,
    /// Step-by-step trace of how this calculation was derived.
    pub calculation_trace: Vec<CalculationStep>,
}

impl TipBreakdown {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the tip formatted with 2 decimal places.
    pub fn format_tip(&self) -> String {
        format_two_places(self.tip_amount)
    }

    /// Returns the total formatted with 2 decimal places.
    pub fn format_total(&self) -> String {
        format_two_places(self.total_amount)
    }

    /// Returns a concise one-line status string.
    /// Format: "{Label}: Tip {tip} - Total {total}"
    pub fn summary(&self) -> String {
        let label_str = self.label.as_deref().unwrap_or("Bill");
        let rounded = if self.round_up { " (rounded up)" } else { "" };
        format!(
            "{}: Tip {}{} - Total {}",
            label_str,
            self.format_tip(),
            rounded,
            self.format_total()
        )
    }

    /// Generates a human-readable explanation of the calculation,
    /// one line per trace step.
    pub fn explain(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();
        let label = self.label.as_deref().unwrap_or("Bill");

        // Writing into a String cannot fail.
        let _ = writeln!(&mut output, "Explanation for '{}':", label);
        let _ = writeln!(&mut output, "{:-<50}", "");

        let width = self
            .calculation_trace
            .iter()
            .map(|step| step.description.len())
            .max()
            .unwrap_or(20)
            .max(20);

        for step in &self.calculation_trace {
            match step.amount {
                None => {
                    let _ = writeln!(&mut output, "  INFO: {}", step.description);
                }
                Some(amt) => {
                    let amount_str = if step.operation == Operation::Rate {
                        format!("{}%", amt.normalize())
                    } else {
                        format!("{:.2}", amt)
                    };
                    let _ = writeln!(
                        &mut output,
                        "  {:<width$} : {} {:>12}",
                        step.description,
                        step.operation.symbol(),
                        amount_str,
                        width = width
                    );
                }
            }
        }

        let _ = writeln!(&mut output, "{:-<50}", "");
        let _ = writeln!(&mut output, "Tip:   {}", self.format_tip());
        let _ = writeln!(&mut output, "Total: {}", self.format_total());
        output
    }
}

impl std::fmt::Display for TipBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label_str = self.label.as_deref().unwrap_or("Bill");
        writeln!(f, "{}: {} at {}%", label_str, self.amount, self.tip_percent.normalize())?;
        write!(f, "Tip: {} | Total: {}", self.format_tip(), self.format_total())
    }
}

pub(crate) fn format_two_places(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    // Near the bounds there is no room for more digits, so `rescale` leaves
    // the scale lower than asked.
    match rounded.scale() {
        0 => format!("{}.00", rounded),
        1 => format!("{}0", rounded),
        _ => rounded.to_string(),
    }
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum TipError {
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
    #[error("Configuration Error: {0}")]
    ConfigurationError(String),
    #[error("Formatting Error: {0}")]
    FormattingError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> TipBreakdown {
        TipBreakdown {
            amount: dec!(10),
            tip_percent: dec!(21),
            round_up: true,
            unrounded_tip: dec!(2.1),
            tip_amount: dec!(3),
            total_amount: dec!(13),
            label: None,
            calculation_trace: vec![
                CalculationStep::initial("Bill Amount", dec!(10)),
                CalculationStep::rate("Tip Percentage", dec!(21)),
                CalculationStep::multiply("Unrounded Tip", dec!(2.1)),
                CalculationStep::round_up("Rounded Up Tip", dec!(3)),
                CalculationStep::add("Tip Amount", dec!(3)),
                CalculationStep::result("Total Amount", dec!(13)),
            ],
        }
    }

    #[test]
    fn test_format_two_places_pads_and_rounds_half_even() {
        assert_eq!(format_two_places(dec!(3)), "3.00");
        assert_eq!(format_two_places(dec!(2.125)), "2.12");
        assert_eq!(format_two_places(dec!(2.135)), "2.14");
        assert_eq!(format_two_places(dec!(-1.5)), "-1.50");
    }

    #[test]
    fn test_format_two_places_at_decimal_bounds() {
        assert_eq!(format_two_places(Decimal::MAX), "79228162514264337593543950335.00");
        assert_eq!(format_two_places(Decimal::MIN), "-79228162514264337593543950335.00");
        let near_max = Decimal::MAX / dec!(10);
        assert!(format_two_places(near_max).ends_with(".50"));
    }

    #[test]
    fn test_summary_and_display() {
        let breakdown = sample().with_label("Dinner");
        assert_eq!(breakdown.summary(), "Dinner: Tip 3.00 (rounded up) - Total 13.00");

        let shown = breakdown.to_string();
        assert!(shown.contains("Dinner: 10 at 21%"));
        assert!(shown.contains("Tip: 3.00 | Total: 13.00"));
    }

    #[test]
    fn test_explain_lists_every_step() {
        let text = sample().explain();
        assert!(text.starts_with("Explanation for 'Bill':"));
        assert!(text.contains("Tip Percentage"));
        assert!(text.contains("21%"));
        assert!(text.contains("Rounded Up Tip"));
        assert!(text.contains("Total: 13.00"));
    }

    #[test]
    fn test_operation_serializes_camel_case() {
        let step = CalculationStep::round_up("Rounded Up Tip", dec!(3));
        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains(r#""operation":"roundUp""#));
        assert!(json.contains(r#""amount":"3""#));
    }
}
