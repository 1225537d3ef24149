//! Example of building and parsing a TOPS export
//!
//! This example demonstrates how to:
//! 1. Build a small TOPS export in memory
//! 2. Parse it using libtops
//! 3. Inspect the parsed load data

use libtops::{Model, layout};
use std::io::Cursor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building a simple TOPS export...\n");

    // Two layers of four cases each, plus one deliberately corrupt row that
    // the parser skips.
    let mut text = String::new();
    text.push_str("[Ship Case],\"\",\"RSC (FEFCO 0201)\",9.9375,8.0625,5.8125\n");
    text.push_str("[Pallet],\"CHEP Pallet\",40.0,48.0,5.625\n");
    text.push_str("\n");
    for layer in 1..=2u32 {
        let z = 5.625 + (layer - 1) as f64 * 5.8125;
        for col in 0..2 {
            for row in 0..2 {
                let x = -15.1875 + col as f64 * 10.125;
                let y = -19.875 + row as f64 * 8.25;
                text.push_str(&format!("{layer},{x},{y},{z},0,\n"));
            }
        }
    }
    text.push_str("2,not_a_number,0.0,11.4375,0,\n");

    println!("Parsing the TOPS export...\n");
    let model = Model::from_reader(Cursor::new(text), "demo_pallet")?;

    println!("Load Information:");
    println!("  Pallet id: {}", model.pallet_id);
    println!();

    if let Some(ref ship_case) = model.metadata.ship_case {
        println!("Ship Case:");
        println!("  Name: {:?}", ship_case.name);
        println!("  Spec: {}", ship_case.spec);
        println!(
            "  Dimensions: {} x {} x {}",
            ship_case.length, ship_case.width, ship_case.height
        );
        println!();
    }

    if let Some(ref pallet) = model.metadata.pallet {
        println!("Pallet:");
        println!("  Name: {}", pallet.name);
        println!(
            "  Dimensions: {} x {} x {}",
            pallet.length, pallet.width, pallet.height
        );
        println!();
    }

    println!("Placements: {} boxes on {} layers", model.box_count(), model.layer_count());
    for (layer, placements) in &model.layers {
        println!("  Layer {layer}: {} boxes", placements.len());
        for (i, placement) in placements.iter().enumerate() {
            println!(
                "    Box {}: ({:.4}, {:.4}, {:.4}) {}",
                i,
                placement.x,
                placement.y,
                placement.z,
                placement.orientation.name()
            );
        }
    }
    println!();

    let (min, max) = layout::compute_load_bounds(&model)?;
    println!("Load bounds:");
    println!("  min: ({:.4}, {:.4}, {:.4})", min.0, min.1, min.2);
    println!("  max: ({:.4}, {:.4}, {:.4})", max.0, max.1, max.2);
    println!("Stacked height: {:.4}", layout::stacked_height(&model)?);
    println!(
        "Volume utilization: {:.1}%",
        layout::compute_volume_utilization(&model)? * 100.0
    );
    println!();

    println!("Successfully parsed the TOPS export!");

    Ok(())
}
