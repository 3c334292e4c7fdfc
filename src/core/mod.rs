pub mod calculator;
pub mod demo;

pub use crate::domain::Operand;
pub use crate::utils::error::Result;
