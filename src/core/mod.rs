pub mod batch;
pub mod coercion;
pub mod validators;

pub use crate::domain::model::{InputValue, ValueKind};
pub use crate::utils::error::Result;
