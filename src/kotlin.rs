//! UniFFI facade for Kotlin/Swift hosts.
//!
//! A mobile screen passes the raw field text straight through; parsing,
//! arithmetic and currency formatting all happen on this side.

use crate::form::TipForm;
use crate::i18n::{DefaultCurrency, Translator};
use crate::types::TipError;

/// UniFFI-compatible error type for Kotlin/Swift bindings.
#[derive(Debug, uniffi::Error)]
#[uniffi(flat_error)]
pub enum KotlinTipError {
    /// The formatter or message bundle could not be initialised.
    FormattingError { reason: String },
}

impl std::fmt::Display for KotlinTipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FormattingError { reason } => write!(f, "Formatting error: {}", reason),
        }
    }
}

impl std::error::Error for KotlinTipError {}

impl From<TipError> for KotlinTipError {
    fn from(err: TipError) -> Self {
        KotlinTipError::FormattingError { reason: err.to_string() }
    }
}

/// Tip and total as exact decimal strings plus their display forms.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct KotlinTipResult {
    pub tip: String,
    pub total: String,
    pub formatted_tip: String,
    pub formatted_total: String,
    pub tip_line: String,
    pub total_line: String,
}

/// Computes tip and total from raw field text. Unparseable text counts as zero.
#[uniffi::export]
pub fn calculate_tip(
    amount_text: String,
    percent_text: String,
    round_up: bool,
) -> Result<KotlinTipResult, KotlinTipError> {
    let form = TipForm {
        amount_input: amount_text,
        tip_input: percent_text,
        round_up,
    };
    let translator = Translator::new()?;
    let currency = DefaultCurrency::new()?;
    let view = form.view(&translator, &currency);

    Ok(KotlinTipResult {
        tip: form.tip_amount().to_string(),
        total: form.total_amount().to_string(),
        formatted_tip: view.formatted_tip,
        formatted_total: view.formatted_total,
        tip_line: view.tip_line,
        total_line: view.total_line,
    })
}
