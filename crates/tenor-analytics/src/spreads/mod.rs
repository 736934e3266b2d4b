//! Spread analytics.

pub mod zspread;

pub use zspread::{solve_z_spread, ZSpreadCalculator, ZSpreadKernel, ZSpreadSolution};
