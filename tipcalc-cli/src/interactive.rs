use colored::Colorize;
use inquire::{Confirm, Text};
use tipcalc::i18n::keys;
use tipcalc::prelude::*;

use crate::render;

/// Runs the single-screen calculator in the terminal.
///
/// Each round edits the three inputs, starting from the previous values, and
/// redraws the tip and total. Text that is not a number counts as zero, just
/// like the on-screen fields.
pub fn run_interactive(config: &TipConfig) -> Result<(), Box<dyn std::error::Error>> {
    let translator = Translator::new()?;
    let currency = DefaultCurrency::new()?;

    let mut form = TipForm::from_config(config);
    form.set_tip_input(config.default_tip_percent.normalize().to_string());

    println!("\n{}", "TIP CALCULATOR".bright_cyan().bold());
    println!("{}", "Press Ctrl+C at any time to exit.".dimmed());

    loop {
        println!();
        let amount_label = translator.translate(keys::BILL_AMOUNT, None);
        let amount = Text::new(&format!("{}:", amount_label))
            .with_initial_value(&form.amount_input)
            .with_placeholder("e.g. 42.50")
            .prompt()?;
        form.set_amount_input(amount);

        let tip_label = translator.translate(keys::TIP_PERCENTAGE, None);
        let tip = Text::new(&format!("{}:", tip_label))
            .with_initial_value(&form.tip_input)
            .with_placeholder("e.g. 15")
            .prompt()?;
        form.set_tip_input(tip);

        let round_up = Confirm::new(&translator.translate(keys::ROUND_UP_TIP, None))
            .with_default(form.round_up)
            .prompt()?;
        form.set_round_up(round_up);

        let view = form.view(&translator, &currency);
        println!("\n{}", render::screen(&form, &view));

        if !Confirm::new("Calculate another?").with_default(true).prompt()? {
            break;
        }
    }

    Ok(())
}
