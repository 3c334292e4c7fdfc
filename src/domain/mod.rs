// Domain layer: operand model only, no logging or IO.

pub mod model;

pub use model::Operand;
