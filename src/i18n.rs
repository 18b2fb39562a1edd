//! Currency formatting and screen messages.
//!
//! Output always uses the default locale (`en-US`) and currency (USD).

use fixed_decimal::FixedDecimal;
use fluent_bundle::bundle::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use icu::decimal::options::FixedDecimalFormatterOptions;
use icu::decimal::FixedDecimalFormatter;
use icu::locid::locale;
use rust_decimal::Decimal;
use rust_embed::RustEmbed;
use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;
use unic_langid::LanguageIdentifier;
use writeable::Writeable;

use crate::types::{format_two_places, TipError};

#[derive(RustEmbed)]
#[folder = "assets/locales"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

/// Message keys used by the calculator screen.
pub mod keys {
    pub const CALCULATE_TIP: &str = "calculate-tip";
    pub const BILL_AMOUNT: &str = "bill-amount";
    pub const TIP_PERCENTAGE: &str = "tip-percentage";
    pub const ROUND_UP_TIP: &str = "round-up-tip";
    pub const TIP_AMOUNT: &str = "tip-amount";
    pub const TOTAL_AMOUNT: &str = "total-amount";
}

/// Formats a monetary amount for display.
pub trait CurrencyFormatter {
    fn format_currency(&self, amount: Decimal) -> String;
}

/// US-dollar formatting with grouping separators and two fraction digits,
/// e.g. `$1,234.50` or `-$2.00`.
pub struct DefaultCurrency {
    formatter: FixedDecimalFormatter,
}

impl std::fmt::Debug for DefaultCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultCurrency")
            .field("locale", &DEFAULT_LOCALE)
            .finish()
    }
}

impl DefaultCurrency {
    pub fn new() -> Result<Self, TipError> {
        let formatter = FixedDecimalFormatter::try_new(
            &locale!("en-US").into(),
            FixedDecimalFormatterOptions::default(),
        )
        .map_err(|e| TipError::FormattingError(format!("Failed to create number formatter: {:?}", e)))?;
        Ok(Self { formatter })
    }
}

impl CurrencyFormatter for DefaultCurrency {
    fn format_currency(&self, amount: Decimal) -> String {
        let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
        // Half-even rounding to cents, then the magnitude is grouped by ICU.
        let plain = format_two_places(amount.abs());

        match FixedDecimal::from_str(&plain) {
            Ok(fixed) => {
                let number = self.formatter.format(&fixed).write_to_string().into_owned();
                format!("{}${}", sign, number)
            }
            Err(e) => {
                warn!(amount = %plain, "ICU could not parse amount ({:?}), printing ungrouped", e);
                format!("{}${}", sign, plain)
            }
        }
    }
}

/// Looks up user-facing strings from the embedded Fluent messages.
#[derive(Clone)]
pub struct Translator {
    bundle: Arc<FluentBundle<FluentResource, intl_memoizer::concurrent::IntlLangMemoizer>>,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &DEFAULT_LOCALE)
            .finish()
    }
}

impl Translator {
    pub fn new() -> Result<Self, TipError> {
        let lang_id: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .map_err(|e| TipError::FormattingError(format!("Invalid language id: {:?}", e)))?;
        let mut bundle = FluentBundle::new_concurrent(vec![lang_id]);
        // Plain terminal and FFI output, no bidi isolation marks.
        bundle.set_use_isolating(false);

        let file_path = format!("{}/main.ftl", DEFAULT_LOCALE);
        let file = Asset::get(&file_path)
            .ok_or_else(|| TipError::FormattingError(format!("Translation file not found: {}", file_path)))?;
        let source = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| TipError::FormattingError(format!("Non-utf8 ftl file: {}", e)))?;
        let resource = FluentResource::try_new(source.to_string())
            .map_err(|(_, errors)| TipError::FormattingError(format!("Failed to parse FTL: {:?}", errors)))?;
        bundle
            .add_resource(resource)
            .map_err(|errors| TipError::FormattingError(format!("Failed to add resource: {:?}", errors)))?;

        Ok(Translator { bundle: Arc::new(bundle) })
    }

    /// Returns the message for `key`, or `MISSING:<key>` if there is none.
    pub fn translate(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let Some(pattern) = self.bundle.get_message(key).and_then(|msg| msg.value()) else {
            return format!("MISSING:{}", key);
        };
        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            warn!(key, "message formatted with errors: {:?}", errors);
        }
        value.into_owned()
    }

    /// Formats a message that takes a single `$amount` argument.
    pub fn translate_amount(&self, key: &str, formatted_amount: &str) -> String {
        let mut args = FluentArgs::new();
        args.set("amount", formatted_amount.to_string());
        self.translate(key, Some(&args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_formatting() {
        let currency = DefaultCurrency::new().unwrap();
        assert_eq!(currency.format_currency(dec!(1234.5)), "$1,234.50");
        assert_eq!(currency.format_currency(dec!(2)), "$2.00");
        assert_eq!(currency.format_currency(Decimal::ZERO), "$0.00");
        assert_eq!(currency.format_currency(dec!(0.125)), "$0.12");
        assert_eq!(currency.format_currency(dec!(-3)), "-$3.00");
        assert_eq!(currency.format_currency(dec!(1000000)), "$1,000,000.00");
    }

    #[test]
    fn test_currency_formatting_at_decimal_bound() {
        let currency = DefaultCurrency::new().unwrap();
        assert_eq!(
            currency.format_currency(Decimal::MAX),
            "$79,228,162,514,264,337,593,543,950,335.00"
        );
    }

    #[test]
    fn test_translate_labels() {
        let t = Translator::new().unwrap();
        assert_eq!(t.translate(keys::CALCULATE_TIP, None), "Calculate Tip");
        assert_eq!(t.translate(keys::ROUND_UP_TIP, None), "Round up tip?");
        assert_eq!(t.translate_amount(keys::TIP_AMOUNT, "$2.00"), "Tip Amount: $2.00");
        assert_eq!(t.translate("no-such-key", None), "MISSING:no-such-key");
    }
}
