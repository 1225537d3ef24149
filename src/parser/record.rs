//! Line-level record parsers
//!
//! One function per record shape. The metadata parsers return fatal errors;
//! the box-row parser returns the separate skippable [`BoxRowError`] so the
//! outer loop can apply its two-tier policy without inspecting message text.

use crate::error::{BoxRowError, Error, Result};
use crate::model::{BoxPlacement, Orientation, Pallet, ShipCase};

/// Field count of a `[Ship Case]` line: tag, name, spec, length, width, height
const SHIP_CASE_FIELD_COUNT: usize = 6;

/// Field count of a `[Pallet]` line: tag, name, length, width, height
const PALLET_FIELD_COUNT: usize = 5;

/// Field count of a box row: layer, x, y, z, orientation
const BOX_ROW_FIELD_COUNT: usize = 5;

/// Parse a `[Ship Case]` metadata line
///
/// The line is stripped of literal `[`/`]` characters at its ends and split on
/// commas into positional fields: tag (discarded), quoted name, quoted spec,
/// then length/width/height as floats. Extra trailing fields are ignored.
///
/// # Errors
///
/// Fewer than 6 fields yields [`Error::MalformedMetadata`]; a dimension that
/// does not parse yields [`Error::InvalidMetadataNumber`]. Both abort the
/// whole parse.
pub fn parse_ship_case(line: &str, line_no: usize) -> Result<ShipCase> {
    const TAG: &str = "Ship Case";

    let fields = split_metadata_fields(line);
    if fields.len() < SHIP_CASE_FIELD_COUNT {
        return Err(Error::malformed_metadata(
            TAG,
            line_no,
            SHIP_CASE_FIELD_COUNT,
            fields.len(),
        ));
    }

    Ok(ShipCase::new(
        strip_quotes(fields[1]),
        strip_quotes(fields[2]),
        parse_dimension(TAG, "length", fields[3], line_no)?,
        parse_dimension(TAG, "width", fields[4], line_no)?,
        parse_dimension(TAG, "height", fields[5], line_no)?,
    ))
}

/// Parse a `[Pallet]` metadata line
///
/// Same stripping and splitting as [`parse_ship_case`], but the record shape
/// differs: tag (discarded), quoted name, then length/width/height. There is
/// no spec field; that asymmetry comes straight from the export format.
pub fn parse_pallet(line: &str, line_no: usize) -> Result<Pallet> {
    const TAG: &str = "Pallet";

    let fields = split_metadata_fields(line);
    if fields.len() < PALLET_FIELD_COUNT {
        return Err(Error::malformed_metadata(
            TAG,
            line_no,
            PALLET_FIELD_COUNT,
            fields.len(),
        ));
    }

    Ok(Pallet::new(
        strip_quotes(fields[1]),
        parse_dimension(TAG, "length", fields[2], line_no)?,
        parse_dimension(TAG, "width", fields[3], line_no)?,
        parse_dimension(TAG, "height", fields[4], line_no)?,
    ))
}

/// Parse a box-placement row
///
/// The exporter emits a dangling comma after the orientation field; any
/// trailing commas are trimmed before splitting. The row needs at least 5
/// fields (layer, x, y, z, orientation); extras are ignored.
///
/// # Errors
///
/// Every failure is a [`BoxRowError`], never a fatal [`Error`](crate::Error):
/// too few fields, a non-numeric field, a layer below 1, or an orientation
/// flag outside {0, 1}. The caller logs and skips.
pub fn parse_box_row(line: &str) -> std::result::Result<BoxPlacement, BoxRowError> {
    let fields: Vec<&str> = line.trim_end_matches(',').split(',').collect();
    if fields.len() < BOX_ROW_FIELD_COUNT {
        return Err(BoxRowError::FieldCount(fields.len()));
    }

    let layer: u32 = fields[0]
        .trim()
        .parse()
        .map_err(|_| BoxRowError::invalid_field("layer", fields[0]))?;
    if layer == 0 {
        return Err(BoxRowError::invalid_field("layer", fields[0]));
    }

    let x: f64 = fields[1]
        .trim()
        .parse()
        .map_err(|_| BoxRowError::invalid_field("x", fields[1]))?;
    let y: f64 = fields[2]
        .trim()
        .parse()
        .map_err(|_| BoxRowError::invalid_field("y", fields[2]))?;
    let z: f64 = fields[3]
        .trim()
        .parse()
        .map_err(|_| BoxRowError::invalid_field("z", fields[3]))?;

    let flag: i64 = fields[4]
        .trim()
        .parse()
        .map_err(|_| BoxRowError::invalid_field("orientation", fields[4]))?;
    let orientation = Orientation::from_flag(flag)
        .ok_or_else(|| BoxRowError::invalid_field("orientation", fields[4]))?;

    Ok(BoxPlacement::new(layer, x, y, z, orientation))
}

/// Strip literal bracket characters from the line ends and split on commas
///
/// This mirrors the exporter convention of removing `[`/`]` characters rather
/// than trimming a structural bracket pair: the `]` after the tag text lands
/// inside field 0, which every caller discards.
fn split_metadata_fields(line: &str) -> Vec<&str> {
    line.trim_matches(|c| c == '[' || c == ']').split(',').collect()
}

/// Strip surrounding double-quote characters from a field
///
/// Only quote characters are removed; embedded whitespace stays untouched.
fn strip_quotes(field: &str) -> String {
    field.trim_matches('"').to_string()
}

/// Parse a metadata dimension field as a float
fn parse_dimension(tag: &'static str, field: &'static str, value: &str, line_no: usize) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::invalid_metadata_number(tag, field, value, line_no))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ship_case_line() {
        let line = r#"[Ship Case],"","RSC (FEFCO 0201)",9.9375,8.0625,5.8125"#;
        let ship_case = parse_ship_case(line, 1).unwrap();
        assert_eq!(ship_case.name, "");
        assert_eq!(ship_case.spec, "RSC (FEFCO 0201)");
        assert_eq!(ship_case.length, 9.9375);
        assert_eq!(ship_case.width, 8.0625);
        assert_eq!(ship_case.height, 5.8125);
    }

    #[test]
    fn test_parse_pallet_line() {
        let line = r#"[Pallet],"CHEP Pallet",40.0,48.0,5.625"#;
        let pallet = parse_pallet(line, 2).unwrap();
        assert_eq!(pallet.name, "CHEP Pallet");
        assert_eq!(pallet.length, 40.0);
        assert_eq!(pallet.width, 48.0);
        assert_eq!(pallet.height, 5.625);
    }

    #[test]
    fn test_truncated_metadata_is_fatal() {
        let err = parse_pallet(r#"[Pallet],"CHEP Pallet",40.0"#, 4).unwrap_err();
        match err {
            Error::MalformedMetadata {
                tag,
                line,
                expected,
                found,
            } => {
                assert_eq!(tag, "Pallet");
                assert_eq!(line, 4);
                assert_eq!(expected, 5);
                assert_eq!(found, 3);
            }
            other => panic!("expected MalformedMetadata, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_metadata_dimension_is_fatal() {
        let err = parse_ship_case(r#"[Ship Case],"a","b",1.0,wide,3.0"#, 9).unwrap_err();
        match err {
            Error::InvalidMetadataNumber { tag, field, value, line } => {
                assert_eq!(tag, "Ship Case");
                assert_eq!(field, "width");
                assert_eq!(value, "wide");
                assert_eq!(line, 9);
            }
            other => panic!("expected InvalidMetadataNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_metadata_extra_fields_ignored() {
        let line = r#"[Pallet],"CHEP Pallet",40.0,48.0,5.625,leftover,junk"#;
        let pallet = parse_pallet(line, 1).unwrap();
        assert_eq!(pallet.height, 5.625);
    }

    #[test]
    fn test_parse_box_row() {
        let placement = parse_box_row("1,-15.1875,-19.8750,5.6250,0,").unwrap();
        assert_eq!(placement.layer, 1);
        assert_eq!(placement.x, -15.1875);
        assert_eq!(placement.y, -19.875);
        assert_eq!(placement.z, 5.625);
        assert_eq!(placement.orientation, Orientation::Normal);
    }

    #[test]
    fn test_box_row_trailing_comma_optional() {
        let with = parse_box_row("2,-5.0625,-19.8750,11.4375,1,").unwrap();
        let without = parse_box_row("2,-5.0625,-19.8750,11.4375,1").unwrap();
        assert_eq!(with, without);
        assert_eq!(with.orientation, Orientation::Rotated);
    }

    #[test]
    fn test_box_row_extra_fields_ignored() {
        let placement = parse_box_row("1,0.0,0.0,0.0,0,99,extra").unwrap();
        assert_eq!(placement.layer, 1);
    }

    #[test]
    fn test_box_row_failures_are_skippable() {
        assert_eq!(
            parse_box_row("1,abc,-19.8750,5.6250,0,"),
            Err(BoxRowError::invalid_field("x", "abc"))
        );
        assert_eq!(parse_box_row("1,2.0,3.0,"), Err(BoxRowError::FieldCount(3)));
        assert_eq!(
            parse_box_row("0,0.0,0.0,0.0,0,"),
            Err(BoxRowError::invalid_field("layer", "0"))
        );
        assert_eq!(
            parse_box_row("-1,0.0,0.0,0.0,0,"),
            Err(BoxRowError::invalid_field("layer", "-1"))
        );
        assert_eq!(
            parse_box_row("1,0.0,0.0,0.0,2,"),
            Err(BoxRowError::invalid_field("orientation", "2"))
        );
        // A non-integer layer is rejected even though it is numeric
        assert_eq!(
            parse_box_row("1.5,0.0,0.0,0.0,0,"),
            Err(BoxRowError::invalid_field("layer", "1.5"))
        );
    }
}
