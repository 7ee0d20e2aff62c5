use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::{CreditError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings of the command line host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Broker log file; stdin when absent
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
    pub show_summary: bool,
    pub show_diagnostics: bool,
}

impl AppConfig {
    /// Read the whole broker log from the configured source.
    pub fn read_log(&self) -> Result<String> {
        match &self.input {
            Some(path) => Ok(fs::read_to_string(path)?),
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

pub fn validate_config(config: &AppConfig) -> Result<()> {
    if let Some(path) = &config.input {
        if !path.exists() {
            return Err(CreditError::InvalidInput(
                format!("Input file {:?} does not exist", path)
            ));
        }
        if !path.is_file() {
            return Err(CreditError::InvalidInput(
                format!("Input path {:?} is not a file", path)
            ));
        }
    }

    if config.show_summary && config.format == OutputFormat::Json {
        return Err(CreditError::InvalidInput(
            "The summary table is only available with text output".to_string()
        ));
    }

    Ok(())
}
