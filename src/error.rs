//! Error types for TOPS parsing
//!
//! This module provides error handling for TOPS file operations. Errors come in
//! two tiers that are deliberately kept as separate types:
//!
//! - [`Error`] is fatal: it aborts the parse (or the layout computation) and
//!   propagates to the caller.
//! - [`BoxRowError`] is skippable: a malformed box-placement row produces one of
//!   these, the row is dropped with a diagnostic, and parsing continues.
//!
//! # Error Codes
//!
//! Fatal error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O errors
//! - **E2xxx**: metadata record errors
//! - **E3xxx**: layout computation errors
//!
//! ## Common Error Codes
//!
//! - `E1001`: I/O error reading file
//! - `E1002`: file not found or unreadable
//! - `E2001`: metadata line with too few fields
//! - `E2002`: non-numeric dimension in a metadata line
//! - `E3001`: layout operation on a model lacking a metadata record
//! - `E3002`: layout operation over zero placements

use std::io;
use thiserror::Error;

/// Result type for TOPS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors that abort a TOPS parse or a layout computation
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the file
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - Disk read error
    /// - Invalid UTF-8 in the file
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// The target path does not resolve to a readable file
    ///
    /// **Error Code**: E1002
    ///
    /// **Common Causes**:
    /// - Wrong path or file name
    /// - Insufficient permissions
    #[error("[E1002] File not found: {0}")]
    FileNotFound(String),

    /// A metadata line matched a known tag but carried too few fields
    ///
    /// **Error Code**: E2001
    ///
    /// A truncated metadata record invalidates the dimensional basis for
    /// everything downstream, so this is fatal rather than skippable.
    #[error(
        "[E2001] Malformed [{tag}] metadata on line {line}: expected {expected} fields, found {found}"
    )]
    MalformedMetadata {
        /// The metadata tag that matched (`Ship Case` or `Pallet`)
        tag: &'static str,
        /// 1-based line number in the source file
        line: usize,
        /// Number of comma-separated fields the record requires
        expected: usize,
        /// Number of fields actually present
        found: usize,
    },

    /// A dimension field in a metadata line did not parse as a number
    ///
    /// **Error Code**: E2002
    #[error(
        "[E2002] Invalid number in [{tag}] metadata on line {line}: field '{field}' has value '{value}'"
    )]
    InvalidMetadataNumber {
        /// The metadata tag that matched
        tag: &'static str,
        /// Name of the offending field (`length`, `width` or `height`)
        field: &'static str,
        /// The raw field text that failed to parse
        value: String,
        /// 1-based line number in the source file
        line: usize,
    },

    /// A layout operation needs a metadata record the model does not carry
    ///
    /// **Error Code**: E3001
    ///
    /// Metadata records are optional in a TOPS file; callers of the layout
    /// helpers hit this when the file omitted one the computation requires.
    #[error("[E3001] Missing metadata: {0}")]
    MissingMetadata(&'static str),

    /// A layout operation was asked to bound zero placements
    ///
    /// **Error Code**: E3002
    #[error("[E3002] Empty load: {0}")]
    EmptyLoad(String),
}

impl Error {
    /// Create a MalformedMetadata error for a metadata line with too few fields
    ///
    /// # Arguments
    /// * `tag` - The metadata tag that matched (`Ship Case` or `Pallet`)
    /// * `line` - 1-based line number in the source file
    /// * `expected` - Required field count for the record shape
    /// * `found` - Field count actually present
    pub fn malformed_metadata(tag: &'static str, line: usize, expected: usize, found: usize) -> Self {
        Error::MalformedMetadata {
            tag,
            line,
            expected,
            found,
        }
    }

    /// Create an InvalidMetadataNumber error for a non-numeric dimension field
    ///
    /// # Arguments
    /// * `tag` - The metadata tag that matched
    /// * `field` - The name of the field being parsed (e.g., "length")
    /// * `value` - The value that failed to parse
    /// * `line` - 1-based line number in the source file
    pub fn invalid_metadata_number(
        tag: &'static str,
        field: &'static str,
        value: &str,
        line: usize,
    ) -> Self {
        Error::InvalidMetadataNumber {
            tag,
            field,
            value: value.to_string(),
            line,
        }
    }
}

/// Skippable errors produced by a single malformed box-placement row
///
/// These never abort a parse: the outer loop logs the offending row and moves
/// on to the next line. Kept as a separate type from [`Error`] so the two
/// policies cannot be conflated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoxRowError {
    /// The row has fewer comma-separated fields than a placement requires
    #[error("box row has {0} fields, expected at least 5")]
    FieldCount(usize),

    /// A field did not parse as the required numeric type
    #[error("invalid value '{value}' for box row field '{field}'")]
    InvalidField {
        /// Name of the offending field
        field: &'static str,
        /// The raw field text that failed to parse
        value: String,
    },
}

impl BoxRowError {
    /// Create an InvalidField error for a named box row field
    pub fn invalid_field(field: &'static str, value: &str) -> Self {
        BoxRowError::InvalidField {
            field,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_in_messages() {
        // Verify error codes are present in error messages
        let io_err = Error::Io(io::Error::new(io::ErrorKind::NotFound, "test"));
        assert!(io_err.to_string().contains("[E1001]"));

        let not_found = Error::FileNotFound("pallet.txt".to_string());
        assert!(not_found.to_string().contains("[E1002]"));

        let missing = Error::MissingMetadata("ship case dimensions");
        assert!(missing.to_string().contains("[E3001]"));

        let empty = Error::EmptyLoad("no placements".to_string());
        assert!(empty.to_string().contains("[E3002]"));
    }

    #[test]
    fn test_malformed_metadata_helper() {
        let err = Error::malformed_metadata("Pallet", 3, 5, 2);
        assert!(err.to_string().contains("[E2001]"));
        assert!(err.to_string().contains("[Pallet]"));
        assert!(err.to_string().contains("line 3"));
        assert!(err.to_string().contains("expected 5 fields, found 2"));
    }

    #[test]
    fn test_invalid_metadata_number_helper() {
        let err = Error::invalid_metadata_number("Ship Case", "width", "abc", 7);
        assert!(err.to_string().contains("[E2002]"));
        assert!(err.to_string().contains("'width'"));
        assert!(err.to_string().contains("'abc'"));
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_box_row_error_messages() {
        let err = BoxRowError::FieldCount(3);
        assert!(err.to_string().contains("3 fields"));
        assert!(err.to_string().contains("at least 5"));

        let err = BoxRowError::invalid_field("orientation", "2");
        assert!(err.to_string().contains("'orientation'"));
        assert!(err.to_string().contains("'2'"));
    }
}
