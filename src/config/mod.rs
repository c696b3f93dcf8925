//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Top-level config struct, loading and [`ConfigError`]
//! - [`limits`]: Submission limits (LimitsConfig)
//! - [`selector`]: Default channel and input behavior (SelectorConfig)
//! - [`filters`]: Initial filter state (FiltersConfig)
//! - [`validation`]: Semantic checks run after parsing

mod defaults;
mod filters;
mod limits;
mod selector;
mod types;
mod validation;

pub use filters::FiltersConfig;
pub use limits::LimitsConfig;
pub use selector::SelectorConfig;
pub use types::{Config, ConfigError};
pub use validation::{ValidationError, validate};
