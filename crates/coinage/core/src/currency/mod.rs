//! Currency definitions and registry tables.
//!
//! Three independent definition kinds back the economy: [`Unit`]s form value
//! tiers and convert upward, [`Reward`]s drop by weighted sampling, and
//! [`Skeleton`]s craft from fixed multisets of rewards. Definitions are
//! immutable once loaded and live in the [`CurrencyRegistry`]'s tables.
mod registry;
mod reward;
mod skeleton;
mod table;
mod tier;
mod unit;

pub use registry::CurrencyRegistry;
pub use reward::Reward;
pub use skeleton::Skeleton;
pub use table::{CurrencyTable, ItemBacked};
pub use unit::Unit;

use crate::error::{CoinageError, ErrorSeverity};

/// Invariant violations raised when constructing currency definitions.
///
/// These reject a single definition record; loading continues for the rest
/// of the batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefinitionError {
    /// Unit values must be positive non-zero integers.
    #[error("expected a positive non-zero value")]
    NonPositiveValue,

    /// Reward weights must be positive non-zero integers.
    #[error("expected a positive non-zero weight")]
    NonPositiveWeight,

    /// Skeleton cost lists must name at least one reward.
    #[error("expected a non-empty cost list")]
    EmptyCost,
}

impl CoinageError for DefinitionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveValue => "DEF_NON_POSITIVE_VALUE",
            Self::NonPositiveWeight => "DEF_NON_POSITIVE_WEIGHT",
            Self::EmptyCost => "DEF_EMPTY_COST",
        }
    }
}
