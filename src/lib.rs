//! The subset of underscore/lodash I actually use, plus a couple more things.
//!
//! Everything operates on [`Value`], a small dynamic value model with
//! identity-compared functions and insertion-ordered objects. The two
//! interesting pieces are [`is_equal`] and [`async_map`]; the rest are thin
//! helpers.

#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::config::Settings;

pub use crate::core::array::{
    array_subtract, contains, filter, find, flatten, for_each, for_each_reverse, includes, map,
};
pub use crate::core::async_map::{async_map, spawn_map, Done};
pub use crate::core::equality::is_equal;
pub use crate::core::format::{lpad, seconds_to_object, TimeParts};
pub use crate::core::math::{clamp, normalize, rand, rand_with, range, range_to};
pub use crate::core::object::{count_by, deep_clone, filter_object, map_object, to_array};
pub use crate::core::types::{is_array, is_email, is_function, is_object};
pub use crate::domain::ports::Worker;
pub use crate::domain::value::{Function, KindClass, Value, ValueKind};
pub use crate::utils::error::{Result, WunderError};
