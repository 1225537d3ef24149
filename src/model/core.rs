//! Core TOPS types and structures

use std::collections::BTreeMap;

/// Placement orientation of a box on the pallet
///
/// TOPS exports encode this as a binary flag on each box row. When a box is
/// rotated, its length and width are swapped at placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Length along X, width along Y (flag 0)
    Normal,
    /// Length and width swapped (flag 1)
    Rotated,
}

impl Orientation {
    /// Get the orientation for a TOPS flag value
    ///
    /// Returns `None` for any value outside {0, 1}; a box row carrying such a
    /// flag cannot construct a placement and is skipped.
    pub fn from_flag(flag: i64) -> Option<Self> {
        match flag {
            0 => Some(Orientation::Normal),
            1 => Some(Orientation::Rotated),
            _ => None,
        }
    }

    /// Get the TOPS flag value for this orientation
    pub fn flag(&self) -> u8 {
        match self {
            Orientation::Normal => 0,
            Orientation::Rotated => 1,
        }
    }

    /// Get a human-readable name for this orientation
    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Normal => "Normal",
            Orientation::Rotated => "Rotated",
        }
    }
}

/// One box's reference-corner position and layer assignment
///
/// Coordinates are relative to a pallet-centered origin and may be negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxPlacement {
    /// Layer number (1-based, counted from the pallet deck up)
    pub layer: u32,
    /// X coordinate of the reference corner
    pub x: f64,
    /// Y coordinate of the reference corner
    pub y: f64,
    /// Z coordinate of the reference corner
    pub z: f64,
    /// Whether length/width are swapped at placement
    pub orientation: Orientation,
}

impl BoxPlacement {
    /// Create a new box placement
    pub fn new(layer: u32, x: f64, y: f64, z: f64, orientation: Orientation) -> Self {
        Self {
            layer,
            x,
            y,
            z,
            orientation,
        }
    }
}

/// Ship-case metadata: the box/case dimensions and packaging specification
#[derive(Debug, Clone, PartialEq)]
pub struct ShipCase {
    /// Case name (may be empty in exports)
    pub name: String,
    /// Free-text packaging specification, e.g. an FEFCO code
    pub spec: String,
    /// Case length
    pub length: f64,
    /// Case width
    pub width: f64,
    /// Case height
    pub height: f64,
}

impl ShipCase {
    /// Create a new ship case record
    pub fn new(name: String, spec: String, length: f64, width: f64, height: f64) -> Self {
        Self {
            name,
            spec,
            length,
            width,
            height,
        }
    }
}

/// Pallet metadata: the base platform's name and dimensions
///
/// Unlike [`ShipCase`] this record carries no packaging specification; the
/// differing field layout comes straight from the export format.
#[derive(Debug, Clone, PartialEq)]
pub struct Pallet {
    /// Pallet name, e.g. "CHEP Pallet"
    pub name: String,
    /// Pallet length
    pub length: f64,
    /// Pallet width
    pub width: f64,
    /// Pallet (deck) height
    pub height: f64,
}

impl Pallet {
    /// Create a new pallet record
    pub fn new(name: String, length: f64, width: f64, height: f64) -> Self {
        Self {
            name,
            length,
            width,
            height,
        }
    }
}

/// The metadata records of a TOPS file
///
/// Either record may be absent from a given file; absence is a valid state,
/// not an error. Consumers must check for presence before use.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    /// Ship-case record, if the file carried a `[Ship Case]` line
    pub ship_case: Option<ShipCase>,
    /// Pallet record, if the file carried a `[Pallet]` line
    pub pallet: Option<Pallet>,
}

/// A parsed TOPS pallet load
///
/// Holds the file's metadata records plus every box placement, both as a flat
/// file-ordered list and partitioned into per-layer buckets. The two views
/// always agree: every placement in `boxes` appears in exactly one layer
/// bucket, at the same relative position among same-layer placements.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Identifier derived from the source file's base name, extension removed
    pub pallet_id: String,
    /// Ship-case and pallet metadata records
    pub metadata: Metadata,
    /// All box placements in file order (duplicates allowed)
    pub boxes: Vec<BoxPlacement>,
    /// Placements grouped by layer number, preserving file order per layer
    pub layers: BTreeMap<u32, Vec<BoxPlacement>>,
}

impl Model {
    /// Create a new empty model with the given pallet identifier
    pub fn new(pallet_id: impl Into<String>) -> Self {
        Self {
            pallet_id: pallet_id.into(),
            metadata: Metadata::default(),
            boxes: Vec::new(),
            layers: BTreeMap::new(),
        }
    }

    /// Append a box placement to the model
    ///
    /// The placement goes into `boxes` and into its layer bucket, creating the
    /// bucket on first use. All accumulation goes through here so the
    /// boxes/layers partition cannot drift.
    pub fn push_box(&mut self, placement: BoxPlacement) {
        self.boxes.push(placement);
        self.layers.entry(placement.layer).or_default().push(placement);
    }

    /// Get the placements of one layer, in file order
    ///
    /// Returns `None` for a layer number the file never mentioned.
    pub fn layer(&self, layer: u32) -> Option<&[BoxPlacement]> {
        self.layers.get(&layer).map(Vec::as_slice)
    }

    /// Number of distinct layers in the load
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Total number of box placements in the load
    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_flags() {
        assert_eq!(Orientation::from_flag(0), Some(Orientation::Normal));
        assert_eq!(Orientation::from_flag(1), Some(Orientation::Rotated));
        assert_eq!(Orientation::from_flag(2), None);
        assert_eq!(Orientation::from_flag(-1), None);

        assert_eq!(Orientation::Normal.flag(), 0);
        assert_eq!(Orientation::Rotated.flag(), 1);
        assert_eq!(Orientation::Rotated.name(), "Rotated");
    }

    #[test]
    fn test_push_box_partitions_by_layer() {
        let mut model = Model::new("demo");
        model.push_box(BoxPlacement::new(1, 0.0, 0.0, 0.0, Orientation::Normal));
        model.push_box(BoxPlacement::new(2, 1.0, 0.0, 5.0, Orientation::Normal));
        model.push_box(BoxPlacement::new(1, 2.0, 0.0, 0.0, Orientation::Rotated));

        assert_eq!(model.box_count(), 3);
        assert_eq!(model.layer_count(), 2);
        assert_eq!(model.layer(1).unwrap().len(), 2);
        assert_eq!(model.layer(2).unwrap().len(), 1);
        assert_eq!(model.layer(3), None);

        // File order preserved within the layer bucket
        assert_eq!(model.layer(1).unwrap()[0].x, 0.0);
        assert_eq!(model.layer(1).unwrap()[1].x, 2.0);
    }

    #[test]
    fn test_empty_model() {
        let model = Model::new("empty");
        assert_eq!(model.pallet_id, "empty");
        assert!(model.metadata.ship_case.is_none());
        assert!(model.metadata.pallet.is_none());
        assert_eq!(model.box_count(), 0);
        assert_eq!(model.layer_count(), 0);
    }
}
