//! Line-oriented parsing for TOPS export files
//!
//! A TOPS export is plain text, one record per line. Lines starting with a
//! bracketed tag carry metadata; every other non-blank line is a
//! box-placement row:
//!
//! ```text
//! [Ship Case],"<name>","<spec>",<length>,<width>,<height>
//! [Pallet],"<name>",<length>,<width>,<height>
//! <layer>,<x>,<y>,<z>,<orientation>,
//! ```
//!
//! There is no header row and no fixed line ordering; metadata may appear
//! before, after, or interleaved with box rows. Classification is purely
//! per-line.
//!
//! Error handling is two-tier: a malformed metadata line aborts the whole
//! parse, while a malformed box row is logged and skipped (see
//! [`crate::error`]).

mod record;

use crate::error::{Error, Result};
use crate::model::Model;
use crate::streaming::{Record, RecordReader};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

// Re-export the line-level record parsers
pub use record::{parse_box_row, parse_pallet, parse_ship_case};

/// Tag prefix of a ship-case metadata line
pub(crate) const SHIP_CASE_TAG: &str = "[Ship Case]";

/// Tag prefix of a pallet metadata line
pub(crate) const PALLET_TAG: &str = "[Pallet]";

/// Parse a TOPS file from a path
///
/// The pallet identifier is derived from the file's base name with everything
/// from the first `.` onward removed (`test_tops.txt` becomes `test_tops`).
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] when the path does not resolve to a
/// readable file, and any fatal parse error from [`parse_reader`].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Model> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            Error::FileNotFound(path.display().to_string())
        }
        _ => Error::Io(e),
    })?;

    parse_reader(BufReader::new(file), pallet_id_from_path(path))
}

/// Parse a TOPS export from a buffered reader
///
/// A reader carries no file name, so the caller supplies the pallet
/// identifier. The returned model is built fresh for this call and owns all
/// its data.
///
/// # Arguments
///
/// * `reader` - Buffered reader over TOPS text
/// * `pallet_id` - Identifier to record on the model
///
/// # Example
///
/// ```
/// use libtops::parser;
/// use std::io::Cursor;
///
/// # fn main() -> libtops::Result<()> {
/// let text = "[Pallet],\"CHEP Pallet\",40.0,48.0,5.625\n1,-15.1875,-19.875,5.625,0,\n";
/// let model = parser::parse_reader(Cursor::new(text), "demo")?;
/// assert_eq!(model.box_count(), 1);
/// # Ok(())
/// # }
/// ```
pub fn parse_reader<R: BufRead>(reader: R, pallet_id: impl Into<String>) -> Result<Model> {
    let mut model = Model::new(pallet_id);

    // Fold the record stream; the skip-or-abort policy lives in RecordReader
    // so the full and incremental APIs cannot drift.
    for item in RecordReader::new(reader) {
        match item? {
            // Last tag line wins: a repeated metadata tag overwrites
            Record::ShipCase(ship_case) => model.metadata.ship_case = Some(ship_case),
            Record::Pallet(pallet) => model.metadata.pallet = Some(pallet),
            Record::Placement(placement) => model.push_box(placement),
        }
    }

    Ok(model)
}

/// Derive the pallet identifier from a file path
///
/// Strips directory components, then everything from the first `.` onward.
fn pallet_id_from_path(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.split('.').next().map(str::to_string))
        .unwrap_or_default()
}
