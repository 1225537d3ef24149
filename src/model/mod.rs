//! Data structures representing parsed TOPS pallet loads

mod core;

pub use core::{BoxPlacement, Metadata, Model, Orientation, Pallet, ShipCase};
