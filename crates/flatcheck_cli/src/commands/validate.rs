use anyhow::{Context, Result};
use flatcheck_core::Dataset;
use flatcheck_parser::{RowReader, parse_file};
use flatcheck_validator::{DatasetValidator, DiagnosticLog, TracingSink};
use std::path::Path;
use tracing::{debug, info};

use crate::output;

pub fn execute(data_path: &Path, config_path: &Path, format: &str) -> Result<()> {
    info!("Validating data file: {}", data_path.display());

    let configuration = parse_file(config_path).with_context(|| {
        format!(
            "Failed to parse configuration file: {}",
            config_path.display()
        )
    })?;

    if format == "text" {
        output::print_info(&format!(
            "Configuration loaded: {} columns, {} fields per row, delimiter '{}'",
            configuration.columns.len(),
            configuration.size,
            configuration.delimiter
        ));
    }

    let mut rows = RowReader::open(data_path)
        .with_context(|| format!("Failed to open data file: {}", data_path.display()))?;

    let mut validator = DatasetValidator::new();
    let dataset = Dataset::new(rows.by_ref(), &configuration);

    // `log` streams diagnostics as they are found; the other formats collect them
    let mut log = DiagnosticLog::new();
    let report = if format == "log" {
        validator.validate_data(dataset, TracingSink)
    } else {
        validator.validate_data(dataset, &mut log)
    }
    .context("Validation aborted")?;

    debug!(rows = rows.rows_read(), "Finished reading data file");
    rows.finish()
        .with_context(|| format!("Failed to read data file: {}", data_path.display()))?;

    output::print_validation_report(&report, log.diagnostics(), format)?;

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
