//! # tipcalc
//!
//! Computes the tip and total for a bill from three inputs: the bill amount,
//! a tip percentage, and a round-up toggle.
//!
//! ```rust
//! use tipcalc::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let tip = compute_tip(dec!(10), dec!(21), true);
//! assert_eq!(tip, dec!(3));
//! assert_eq!(compute_total(dec!(10), tip), dec!(13));
//! ```

pub mod builder;
pub mod calculator;
pub mod config;
pub mod form;
pub mod i18n;
pub mod inputs;
pub mod prelude;
pub mod types;

#[cfg(feature = "uniffi")]
pub mod kotlin;

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

pub use calculator::{compute_tip, compute_total, TipCalculator};
pub use config::TipConfig;
pub use form::{TipForm, TipView};
pub use types::{TipBreakdown, TipError};
