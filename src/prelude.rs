//! Prelude module for tipcalc
//!
//! Re-exports the types most callers need.
//!
//! ```rust
//! use tipcalc::prelude::*;
//! ```

pub use crate::builder::TipBuilder;
pub use crate::calculator::{compute_tip, compute_total, TipCalculator};
pub use crate::config::{TipConfig, TipConfigBuilder};
pub use crate::form::{TipForm, TipView};
pub use crate::i18n::{CurrencyFormatter, DefaultCurrency, Translator};
pub use crate::inputs::{parse_or_zero, IntoTipDecimal};
pub use crate::types::{CalculationStep, Operation, TipBreakdown, TipError};
