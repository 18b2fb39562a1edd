use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tipcalc::prelude::*;

#[derive(Tabled)]
struct StepRow {
    #[tabled(rename = "Step")]
    description: String,
    #[tabled(rename = "Op")]
    operation: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl From<&CalculationStep> for StepRow {
    fn from(step: &CalculationStep) -> Self {
        let value = match (step.operation, step.amount) {
            (_, None) => String::new(),
            (Operation::Rate, Some(amount)) => format!("{}%", amount.normalize()),
            (_, Some(amount)) => format!("{:.2}", amount),
        };
        StepRow {
            description: step.description.clone(),
            operation: format!("{:?}", step.operation),
            value,
        }
    }
}

/// The screen as plain lines: heading, the three inputs, then tip and total.
pub fn screen(form: &TipForm, view: &TipView) -> String {
    let toggle = if view.round_up { "on" } else { "off" };
    let amount_text = if form.amount_input.is_empty() { "-" } else { form.amount_input.as_str() };
    let tip_text = if form.tip_input.is_empty() { "-" } else { form.tip_input.as_str() };

    [
        view.heading.bold().to_string(),
        format!("  {:<16} {}", view.amount_label, amount_text),
        format!("  {:<16} {}%", view.tip_label, tip_text),
        format!("  {:<16} {}", view.round_up_label, toggle),
        String::new(),
        view.tip_line.bright_green().bold().to_string(),
        view.total_line.bright_green().bold().to_string(),
    ]
    .join("\n")
}

/// Calculation trace as a table, followed by the one-line summary.
pub fn explanation(breakdown: &TipBreakdown) -> String {
    let rows: Vec<StepRow> = breakdown.calculation_trace.iter().map(StepRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n{}", table, breakdown.summary().dimmed())
}
