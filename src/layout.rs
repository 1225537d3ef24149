//! Placement geometry for parsed pallet loads
//!
//! This module turns a parsed [`Model`] into the figures pallet-pattern
//! consumers usually want: per-placement bounds, the bounding box of the
//! whole load or of one layer, the stacked height above the pallet deck, and
//! the volume utilization of the pattern.
//!
//! All computations need the ship-case dimensions from the file's metadata;
//! some also need the pallet record. Metadata is optional in the format, so
//! these helpers fail with [`Error::MissingMetadata`] rather than assuming
//! presence.

use crate::error::{Error, Result};
use crate::model::{BoxPlacement, Model, Orientation, Pallet, ShipCase};

/// A 3D point represented as (x, y, z)
pub type Point3d = (f64, f64, f64);

/// An axis-aligned bounding box represented as (min_point, max_point)
pub type BoundingBox = (Point3d, Point3d);

/// Footprint of a case at a given orientation, as (extent along X, extent along Y)
///
/// A `Rotated` placement swaps the case's length and width.
pub fn oriented_footprint(case: &ShipCase, orientation: Orientation) -> (f64, f64) {
    match orientation {
        Orientation::Normal => (case.length, case.width),
        Orientation::Rotated => (case.width, case.length),
    }
}

/// Axis-aligned bounds of one placed case
///
/// The placement's coordinates are the minimum corner; the maximum corner
/// adds the oriented footprint and the case height.
pub fn placement_bounds(case: &ShipCase, placement: &BoxPlacement) -> BoundingBox {
    let (dx, dy) = oriented_footprint(case, placement.orientation);
    (
        (placement.x, placement.y, placement.z),
        (placement.x + dx, placement.y + dy, placement.z + case.height),
    )
}

/// Compute the bounding box of the whole load
///
/// # Arguments
/// * `model` - The parsed pallet load
///
/// # Returns
/// A tuple of (min_point, max_point) enclosing every placed case
///
/// # Errors
/// [`Error::MissingMetadata`] without a ship-case record;
/// [`Error::EmptyLoad`] when the model has no placements.
pub fn compute_load_bounds(model: &Model) -> Result<BoundingBox> {
    let case = require_ship_case(model)?;
    if model.boxes.is_empty() {
        return Err(Error::EmptyLoad("model has no box placements".to_string()));
    }
    Ok(bounds_of(case, &model.boxes))
}

/// Compute the bounding box of one layer of the load
///
/// # Errors
/// [`Error::MissingMetadata`] without a ship-case record;
/// [`Error::EmptyLoad`] for a layer number the file never mentioned.
pub fn compute_layer_bounds(model: &Model, layer: u32) -> Result<BoundingBox> {
    let case = require_ship_case(model)?;
    match model.layer(layer) {
        Some(placements) if !placements.is_empty() => Ok(bounds_of(case, placements)),
        _ => Err(Error::EmptyLoad(format!("layer {layer} has no box placements"))),
    }
}

/// Height of the stacked load measured from the pallet deck
///
/// The top of the highest placed case minus the pallet height. Needs both
/// metadata records.
pub fn stacked_height(model: &Model) -> Result<f64> {
    let pallet = require_pallet(model)?;
    let (_, (_, _, z_max)) = compute_load_bounds(model)?;
    Ok(z_max - pallet.height)
}

/// Volume utilization of the pallet pattern
///
/// Total placed-case volume divided by the envelope spanned by the pallet
/// footprint and the stacked height. This is the conventional cube-utilization
/// figure for a pallet pattern; values near 1.0 mean a tight pattern.
pub fn compute_volume_utilization(model: &Model) -> Result<f64> {
    let case = require_ship_case(model)?;
    let pallet = require_pallet(model)?;
    let height = stacked_height(model)?;

    let envelope = pallet.length * pallet.width * height;
    if envelope <= 0.0 {
        return Err(Error::EmptyLoad(format!(
            "pallet envelope has non-positive volume ({envelope})"
        )));
    }

    let case_volume = case.length * case.width * case.height;
    Ok(case_volume * model.box_count() as f64 / envelope)
}

fn require_ship_case(model: &Model) -> Result<&ShipCase> {
    model
        .metadata
        .ship_case
        .as_ref()
        .ok_or(Error::MissingMetadata(
            "ship case dimensions are required for layout computations",
        ))
}

fn require_pallet(model: &Model) -> Result<&Pallet> {
    model.metadata.pallet.as_ref().ok_or(Error::MissingMetadata(
        "pallet dimensions are required for layout computations",
    ))
}

/// Union of the per-placement bounds over a non-empty slice
fn bounds_of(case: &ShipCase, placements: &[BoxPlacement]) -> BoundingBox {
    let (mut result_min, mut result_max) = placement_bounds(case, &placements[0]);

    for placement in &placements[1..] {
        let (min, max) = placement_bounds(case, placement);
        result_min.0 = result_min.0.min(min.0);
        result_min.1 = result_min.1.min(min.1);
        result_min.2 = result_min.2.min(min.2);
        result_max.0 = result_max.0.max(max.0);
        result_max.1 = result_max.1.max(max.1);
        result_max.2 = result_max.2.max(max.2);
    }

    (result_min, result_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Metadata, Pallet};

    fn sample_case() -> ShipCase {
        ShipCase::new(String::new(), "RSC (FEFCO 0201)".to_string(), 10.0, 8.0, 6.0)
    }

    fn sample_model() -> Model {
        let mut model = Model::new("sample");
        model.metadata = Metadata {
            ship_case: Some(sample_case()),
            pallet: Some(Pallet::new("CHEP Pallet".to_string(), 40.0, 48.0, 5.0)),
        };
        model.push_box(BoxPlacement::new(1, -10.0, -8.0, 5.0, Orientation::Normal));
        model.push_box(BoxPlacement::new(1, 0.0, -8.0, 5.0, Orientation::Normal));
        model.push_box(BoxPlacement::new(2, -10.0, -8.0, 11.0, Orientation::Normal));
        model.push_box(BoxPlacement::new(2, 0.0, -8.0, 11.0, Orientation::Normal));
        model
    }

    #[test]
    fn test_oriented_footprint_swaps_axes() {
        let case = sample_case();
        assert_eq!(oriented_footprint(&case, Orientation::Normal), (10.0, 8.0));
        assert_eq!(oriented_footprint(&case, Orientation::Rotated), (8.0, 10.0));
    }

    #[test]
    fn test_placement_bounds() {
        let case = sample_case();
        let placement = BoxPlacement::new(1, -10.0, -8.0, 5.0, Orientation::Rotated);
        let (min, max) = placement_bounds(&case, &placement);
        assert_eq!(min, (-10.0, -8.0, 5.0));
        assert_eq!(max, (-2.0, 2.0, 11.0));
    }

    #[test]
    fn test_load_bounds_unions_all_placements() {
        let model = sample_model();
        let (min, max) = compute_load_bounds(&model).unwrap();
        assert_eq!(min, (-10.0, -8.0, 5.0));
        assert_eq!(max, (10.0, 0.0, 17.0));
    }

    #[test]
    fn test_layer_bounds() {
        let model = sample_model();
        let (min, max) = compute_layer_bounds(&model, 2).unwrap();
        assert_eq!(min.2, 11.0);
        assert_eq!(max.2, 17.0);

        let err = compute_layer_bounds(&model, 9).unwrap_err();
        assert!(matches!(err, Error::EmptyLoad(_)));
    }

    #[test]
    fn test_stacked_height() {
        let model = sample_model();
        // Top of layer 2 is 17.0, pallet deck is 5.0
        assert_eq!(stacked_height(&model).unwrap(), 12.0);
    }

    #[test]
    fn test_volume_utilization() {
        let model = sample_model();
        // 4 cases of 480 each over a 40 x 48 x 12 envelope
        let expected = 4.0 * 480.0 / (40.0 * 48.0 * 12.0);
        let utilization = compute_volume_utilization(&model).unwrap();
        assert!((utilization - expected).abs() < 1e-12);
    }

    #[test]
    fn test_missing_metadata_errors() {
        let mut model = sample_model();
        model.metadata.ship_case = None;
        assert!(matches!(
            compute_load_bounds(&model),
            Err(Error::MissingMetadata(_))
        ));

        let mut model = sample_model();
        model.metadata.pallet = None;
        assert!(matches!(stacked_height(&model), Err(Error::MissingMetadata(_))));
    }

    #[test]
    fn test_empty_load_error() {
        let mut model = Model::new("empty");
        model.metadata.ship_case = Some(sample_case());
        assert!(matches!(compute_load_bounds(&model), Err(Error::EmptyLoad(_))));
    }
}
