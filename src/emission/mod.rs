//! 배출계수 표와 연간 CO2e 배출량 계산기.

pub mod bounds;
pub mod calculator;
pub mod factors;
pub mod input;

pub use bounds::{validate_bounds, BoundViolation};
pub use calculator::{compute, compute_with, Category, EmissionError, EmissionOutput};
pub use factors::{DietType, EmissionFactors, FactorError, FactorKey};
pub use input::EmissionInput;
