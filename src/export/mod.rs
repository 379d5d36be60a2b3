use crate::models::CalculationResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

pub mod csv;
pub mod json;
pub mod text;

/// Export format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Text => "text",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Nothing to export: no calculation result is available")]
    NoResult,
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Render a calculation result in the requested format
pub fn render(result: &CalculationResult, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Text => Ok(text::render_text(result)),
        ExportFormat::Json => json::render_json(result),
        ExportFormat::Csv => csv::render_csv(result),
    }
}

/// Render a calculation result and write it to a file
pub fn export_to_file<P: AsRef<Path>>(
    result: &CalculationResult,
    format: ExportFormat,
    output_path: P,
) -> Result<(), ExportError> {
    let rendered = render(result, format)?;

    let mut file = std::fs::File::create(&output_path)?;
    file.write_all(rendered.as_bytes())?;

    tracing::info!(
        path = %output_path.as_ref().display(),
        format = %format,
        "Exported calculation result"
    );

    Ok(())
}
