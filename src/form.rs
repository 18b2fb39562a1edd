//! View state for the single-screen calculator.
//!
//! A [`TipForm`] holds exactly what the user typed. Nothing derived is
//! stored: every read parses the raw text again and recomputes tip and total,
//! so the rendered [`TipView`] always matches the current inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculator::{compute_tip, compute_total};
use crate::config::TipConfig;
use crate::i18n::{keys, CurrencyFormatter, Translator};
use crate::inputs::parse_or_zero;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipForm {
    pub amount_input: String,
    pub tip_input: String,
    pub round_up: bool,
}

/// Everything the screen displays, already formatted and labelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipView {
    pub heading: String,
    pub amount_label: String,
    pub tip_label: String,
    pub round_up_label: String,
    pub round_up: bool,
    pub formatted_tip: String,
    pub formatted_total: String,
    /// e.g. "Tip Amount: $2.00"
    pub tip_line: String,
    /// e.g. "Total Amount: $12.00"
    pub total_line: String,
}

impl TipForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty form whose toggle starts in the configured position.
    pub fn from_config(config: &TipConfig) -> Self {
        Self {
            round_up: config.round_up_by_default,
            ..Self::default()
        }
    }

    pub fn set_amount_input(&mut self, text: impl Into<String>) {
        self.amount_input = text.into();
    }

    pub fn set_tip_input(&mut self, text: impl Into<String>) {
        self.tip_input = text.into();
    }

    pub fn set_round_up(&mut self, round_up: bool) {
        self.round_up = round_up;
    }

    pub fn amount(&self) -> Decimal {
        parse_or_zero(&self.amount_input)
    }

    pub fn tip_percent(&self) -> Decimal {
        parse_or_zero(&self.tip_input)
    }

    pub fn tip_amount(&self) -> Decimal {
        compute_tip(self.amount(), self.tip_percent(), self.round_up)
    }

    pub fn total_amount(&self) -> Decimal {
        compute_total(self.amount(), self.tip_amount())
    }

    pub fn view(&self, translator: &Translator, currency: &impl CurrencyFormatter) -> TipView {
        let formatted_tip = currency.format_currency(self.tip_amount());
        let formatted_total = currency.format_currency(self.total_amount());

        TipView {
            heading: translator.translate(keys::CALCULATE_TIP, None),
            amount_label: translator.translate(keys::BILL_AMOUNT, None),
            tip_label: translator.translate(keys::TIP_PERCENTAGE, None),
            round_up_label: translator.translate(keys::ROUND_UP_TIP, None),
            round_up: self.round_up,
            tip_line: translator.translate_amount(keys::TIP_AMOUNT, &formatted_tip),
            total_line: translator.translate_amount(keys::TOTAL_AMOUNT, &formatted_total),
            formatted_tip,
            formatted_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::DefaultCurrency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_form_is_zero() {
        let form = TipForm::new();
        assert_eq!(form.amount(), Decimal::ZERO);
        assert_eq!(form.tip_amount(), Decimal::ZERO);
        assert_eq!(form.total_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_recomputes_on_every_change() {
        let mut form = TipForm::new();
        form.set_amount_input("10");
        form.set_tip_input("21");
        assert_eq!(form.tip_amount(), dec!(2.1));

        form.set_round_up(true);
        assert_eq!(form.tip_amount(), dec!(3));
        assert_eq!(form.total_amount(), dec!(13));

        form.set_tip_input("oops");
        assert_eq!(form.tip_amount(), Decimal::ZERO);
        assert_eq!(form.total_amount(), dec!(10));
    }

    #[test]
    fn test_view_renders_labels_and_currency() {
        let translator = Translator::new().unwrap();
        let currency = DefaultCurrency::new().unwrap();

        let mut form = TipForm::new();
        form.set_amount_input("10");
        form.set_tip_input("20");
        let view = form.view(&translator, &currency);

        assert_eq!(view.heading, "Calculate Tip");
        assert_eq!(view.amount_label, "Bill Amount");
        assert_eq!(view.tip_label, "Tip Percentage");
        assert_eq!(view.formatted_tip, "$2.00");
        assert_eq!(view.tip_line, "Tip Amount: $2.00");
        assert_eq!(view.total_line, "Total Amount: $12.00");
    }

    #[test]
    fn test_from_config_seeds_toggle() {
        let config = TipConfig::default().with_round_up(true);
        let form = TipForm::from_config(&config);
        assert!(form.round_up);
        assert!(form.amount_input.is_empty());
    }
}
