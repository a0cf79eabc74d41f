pub mod array;
pub mod async_map;
pub mod equality;
pub mod format;
pub mod math;
pub mod object;
pub mod types;

pub use crate::domain::ports::Worker;
pub use crate::domain::value::{Function, KindClass, Value, ValueKind};
pub use crate::utils::error::Result;
