use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File formats offered by `GET /api/export/{card_id}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Xml,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xml => "xml",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Suggested file name, matching the backend's `Content-Disposition`
    pub fn file_name(&self, card_id: &str) -> String {
        format!("card_{}_metrics.{}", card_id, self.as_str())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "xml" => Ok(ExportFormat::Xml),
            "xlsx" => Ok(ExportFormat::Xlsx),
            other => Err(format!("unsupported export format: {}", other)),
        }
    }
}
