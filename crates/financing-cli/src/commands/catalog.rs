use serde_json::Value;

use financing_core::catalog;

/// List every investment option with its default return, compounding and
/// descriptive metadata.
pub fn run_options() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(catalog::all_profiles())?)
}
