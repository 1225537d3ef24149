//! Streaming record reader for TOPS files
//!
//! This module provides an iterator-based API that yields one classified
//! record per line, for consumers that want to react to records as they
//! arrive instead of materializing a full [`Model`](crate::Model). The full
//! parser is implemented as a fold over this iterator, so the two APIs apply
//! the identical skip-or-abort policy.
//!
//! # Example
//!
//! ```
//! use libtops::streaming::{Record, RecordReader};
//! use std::io::Cursor;
//!
//! # fn main() -> libtops::Result<()> {
//! let text = "[Pallet],\"CHEP Pallet\",40.0,48.0,5.625\n1,-15.1875,-19.875,5.625,0,\n";
//! for item in RecordReader::new(Cursor::new(text)) {
//!     match item? {
//!         Record::ShipCase(ship_case) => println!("case: {}", ship_case.spec),
//!         Record::Pallet(pallet) => println!("pallet: {}", pallet.name),
//!         Record::Placement(placement) => println!("box on layer {}", placement.layer),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::model::{BoxPlacement, Pallet, ShipCase};
use crate::parser::{PALLET_TAG, SHIP_CASE_TAG, parse_box_row, parse_pallet, parse_ship_case};
use std::io::{BufRead, Lines};
use tracing::warn;

/// One classified line of a TOPS file
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// A `[Ship Case]` metadata line
    ShipCase(ShipCase),
    /// A `[Pallet]` metadata line
    Pallet(Pallet),
    /// A box-placement row
    Placement(BoxPlacement),
}

/// Iterator over the records of a TOPS export
///
/// Yields records in file order. Blank lines are skipped silently; malformed
/// box rows are skipped with a `warn` diagnostic and never surface as items.
/// A metadata error (or an I/O error) is yielded once as `Err`, after which
/// the iterator is fused and yields nothing further.
pub struct RecordReader<R: BufRead> {
    lines: Lines<R>,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> RecordReader<R> {
    /// Create a record reader over a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            done: false,
        }
    }

    /// 1-based number of the most recently read line
    ///
    /// Zero before the first line is read. Useful for consumer diagnostics
    /// when reacting to a yielded record or error.
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    fn next_record(&mut self) -> Option<Result<Record>> {
        loop {
            let line = match self.lines.next() {
                None => return None,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(Error::Io(e)));
                }
                Some(Ok(line)) => line,
            };
            self.line_no += 1;

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            // Classification is priority-ordered: known tags first, anything
            // else is treated as a box row.
            if line.starts_with(SHIP_CASE_TAG) {
                return Some(match parse_ship_case(line, self.line_no) {
                    Ok(ship_case) => Ok(Record::ShipCase(ship_case)),
                    Err(e) => {
                        self.done = true;
                        Err(e)
                    }
                });
            }

            if line.starts_with(PALLET_TAG) {
                return Some(match parse_pallet(line, self.line_no) {
                    Ok(pallet) => Ok(Record::Pallet(pallet)),
                    Err(e) => {
                        self.done = true;
                        Err(e)
                    }
                });
            }

            match parse_box_row(line) {
                Ok(placement) => return Some(Ok(Record::Placement(placement))),
                Err(e) => {
                    warn!(line = self.line_no, row = %line, error = %e, "skipping malformed box row");
                    continue;
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.next_record()
    }
}
