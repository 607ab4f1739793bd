use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use std::path::Path;

use serde_json::Value;

use crate::file_utils::FileManager;
use crate::merge_engine;
use crate::string_record::{self, StringRecord};

// @module: Application controller for the merge workflow

/// Fixed output filename, written to the current working directory
pub const OUTPUT_FILENAME: &str = "output.json";

/// Main application controller for string table merging
pub struct Controller;

impl Controller {
    // @method: Create a new controller
    pub fn new() -> Self {
        Controller
    }

    /// Run the full merge workflow.
    ///
    /// Reads both input tables to completion, joins them by composite key
    /// and writes the merged table to `output_path`. The output file is
    /// only written after the whole merge has completed without error, so
    /// a failing run never leaves partial output behind.
    pub fn run(&self, original_path: &Path, translated_path: &Path, output_path: &Path) -> Result<()> {
        let original = Self::load_records(original_path)?;
        let translated = Self::load_records(translated_path)?;
        debug!(
            "Loaded {} original and {} translated records",
            original.len(),
            translated.len()
        );

        let merged = merge_engine::merge(&original, &translated);
        info!(
            "Merged {} of {} original records",
            merged.len(),
            original.len()
        );

        let json = string_record::to_pretty_json(&merged)?;
        FileManager::write_to_file(output_path, &json)?;

        Ok(())
    }

    // @reads: One input table, validating every record
    fn load_records(path: &Path) -> Result<Vec<StringRecord>> {
        if !FileManager::file_exists(path) {
            return Err(anyhow!("Unable to open input file: {:?}", path));
        }

        let content = FileManager::read_to_string(path)?;

        let document: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON in {:?}", path))?;

        let records = string_record::parse_records(&document)
            .with_context(|| format!("Invalid string records in {:?}", path))?;

        Ok(records)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
