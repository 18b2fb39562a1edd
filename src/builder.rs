use crate::types::TipError;

/// Trait for builders that produce a calculator input or configuration.
pub trait TipBuilder<T> {
    /// Builds the final object, returning a Result.
    fn build(self) -> Result<T, TipError>;
}

/// Checks a builder's collected values before `build` consumes it.
pub trait Validate {
    fn validate(&self) -> Result<(), TipError>;
}
