//! Export module for budget-tracker
//!
//! - JSON: machine-readable snapshot for external chart tools
//! - YAML: the same snapshot, human-readable

pub mod json;
pub mod yaml;

pub use json::{export_json, BudgetExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
