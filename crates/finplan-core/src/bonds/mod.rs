//! Bond analytics: post-tax post-inflation yield and multi-year
//! growth projection.

pub mod projection;
pub mod returns;

pub use projection::{project_growth, GrowthPoint, MAX_PROJECTION_YEARS};
pub use returns::{compute_bond_returns, real_return, BondReturnsOutput, YearReturn};
