/*!
 * # StringMerger
 *
 * A Rust library and CLI for merging original and translated localization
 * string tables.
 *
 * ## Features
 *
 * - Join two JSON string tables by composite key (editor_id, type, index)
 * - Keep only entries present in both tables with a non-empty translation
 * - Preserve the original table's order and cardinality in the output
 * - Strict per-record validation with tagged parse errors
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `string_record`: Input/output record types, composite keys and
 *   per-record JSON validation
 * - `merge_engine`: The composite-key join
 * - `app_controller`: Main application controller (read, merge, write)
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod merge_engine;
pub mod string_record;

// Re-export main types for easier usage
pub use app_controller::{Controller, OUTPUT_FILENAME};
pub use errors::ParseError;
pub use merge_engine::merge;
pub use string_record::{CompositeKey, MergedRecord, StringRecord};
