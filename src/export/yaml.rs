//! YAML Export functionality
//!
//! Same snapshot as the JSON export, with a short comment header.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::BudgetExport;

/// Export the snapshot to YAML
pub fn export_yaml<W: Write>(export: &BudgetExport, writer: &mut W) -> BudgetResult<()> {
    writeln!(writer, "# Budget Tracker Export").map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
