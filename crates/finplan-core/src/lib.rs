//! Personal-finance calculation engine.
//!
//! Pure, synchronous numeric functions over explicit inputs: EMI,
//! real bond return, compound growth projection, and the save score.
//! Record lookup is abstracted behind the [`catalog::Catalog`] trait;
//! the engine itself performs no I/O and keeps no state between calls.

pub mod catalog;
pub mod error;
pub mod records;
pub mod types;

#[cfg(feature = "loans")]
pub mod loans;

#[cfg(feature = "bonds")]
pub mod bonds;

#[cfg(feature = "savings")]
pub mod savings;

pub use error::FinPlanError;
pub use types::*;

/// Standard result type for all finplan operations
pub type FinPlanResult<T> = Result<T, FinPlanError>;
