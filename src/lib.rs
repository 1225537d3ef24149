//! # libtops
//!
//! A Rust parser for TOPS palletization exports.
//!
//! A TOPS file is a plain-text, line-oriented description of how boxes are
//! stacked on a pallet: up to two metadata records (ship-case and pallet
//! dimensions) plus one row per placed box. This library reads such a file in
//! a single pass and reconstructs the load as a [`Model`]: the metadata, every
//! box placement in file order, and the same placements partitioned into
//! per-layer buckets.
//!
//! ## Features
//!
//! - Single-pass, line-oriented parsing with no unsafe code
//! - Tolerant handling of malformed box rows (logged and skipped) with strict
//!   handling of malformed metadata
//! - Streaming record iterator for consumers that do not want the full model
//! - Layout helpers: load/layer bounds, stacked height, volume utilization
//!
//! ## Example
//!
//! ```
//! use libtops::Model;
//! use std::io::Cursor;
//!
//! # fn main() -> libtops::Result<()> {
//! let text = "\
//! [Ship Case],\"\",\"RSC (FEFCO 0201)\",9.9375,8.0625,5.8125
//! [Pallet],\"CHEP Pallet\",40.0,48.0,5.625
//! 1,-15.1875,-19.8750,5.6250,0,
//! 2,-15.1875,-19.8750,11.4375,0,
//! ";
//! let model = Model::from_reader(Cursor::new(text), "demo")?;
//!
//! assert_eq!(model.box_count(), 2);
//! assert_eq!(model.layer_count(), 2);
//! assert_eq!(model.metadata.pallet.as_ref().unwrap().name, "CHEP Pallet");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod streaming;

pub use error::{BoxRowError, Error, Result};
pub use model::{BoxPlacement, Metadata, Model, Orientation, Pallet, ShipCase};
pub use streaming::{Record, RecordReader};

use std::io::BufRead;
use std::path::Path;

impl Model {
    /// Parse a TOPS file from a path
    ///
    /// The pallet identifier is derived from the file's base name with the
    /// extension removed.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOPS export file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use libtops::Model;
    ///
    /// # fn main() -> libtops::Result<()> {
    /// let model = Model::from_file("test_tops.txt")?;
    /// println!("{} boxes on {} layers", model.box_count(), model.layer_count());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        parser::parse_file(path)
    }

    /// Parse a TOPS export from a buffered reader
    ///
    /// A reader carries no file name, so the pallet identifier is supplied by
    /// the caller.
    ///
    /// # Arguments
    ///
    /// * `reader` - Buffered reader over TOPS text
    /// * `pallet_id` - Identifier to record on the model
    pub fn from_reader<R: BufRead>(reader: R, pallet_id: impl Into<String>) -> Result<Self> {
        parser::parse_reader(reader, pallet_id)
    }
}
