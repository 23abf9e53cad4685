//! Builtin travel tools
//!
//! The example registrants demonstrating the registration surface:
//! - get_current_time: date/time lookup for known zones
//! - calculate_budget: trip budget with per-category breakdown
//! - convert_currency: fixed-rate currency conversion
//! - estimate_travel_time: distance/speed/overhead estimation
//! - get_season_info: per-destination season tables

pub mod clock;
pub mod money;
pub mod seasons;
pub mod transit;

use crate::errors::ToolError;
use crate::tools::registry::ToolRegistry;

/// Install every builtin tool, in the canonical listing order
pub fn install(registry: &mut ToolRegistry) -> std::result::Result<(), ToolError> {
    clock::register(registry)?;
    money::register(registry)?;
    transit::register(registry)?;
    seasons::register(registry)?;
    Ok(())
}

/// Round to a fixed number of decimal digits
pub(crate) fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
