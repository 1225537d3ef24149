//! Command-line summary of a TOPS export
//!
//! Takes a single file-path argument, parses it, and prints a report of the
//! load. Any error goes to stderr with a non-zero exit status. Skipped-row
//! diagnostics are visible via `RUST_LOG=libtops=warn`.

use libtops::{Model, layout};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("libtops=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    init_logger();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "pallet_summary".to_string());
    let Some(path) = args.next() else {
        eprintln!("Usage: {program} <tops-file>");
        return ExitCode::FAILURE;
    };

    let model = match Model::from_file(&path) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    print_summary(&model);
    ExitCode::SUCCESS
}

fn print_summary(model: &Model) {
    println!("Pallet id: {}", model.pallet_id);

    match model.metadata.ship_case {
        Some(ref ship_case) => println!(
            "Ship case: {:?} ({}) {} x {} x {}",
            ship_case.name, ship_case.spec, ship_case.length, ship_case.width, ship_case.height
        ),
        None => println!("Ship case: (not present)"),
    }

    match model.metadata.pallet {
        Some(ref pallet) => println!(
            "Pallet:    {:?} {} x {} x {}",
            pallet.name, pallet.length, pallet.width, pallet.height
        ),
        None => println!("Pallet:    (not present)"),
    }

    println!("Boxes:     {} on {} layers", model.box_count(), model.layer_count());
    for (layer, placements) in &model.layers {
        println!("  layer {layer}: {} boxes", placements.len());
    }

    // Layout figures need the metadata records; report them when available.
    if let Ok((min, max)) = layout::compute_load_bounds(model) {
        println!(
            "Load bounds: ({:.4}, {:.4}, {:.4}) .. ({:.4}, {:.4}, {:.4})",
            min.0, min.1, min.2, max.0, max.1, max.2
        );
    }
    if let Ok(height) = layout::stacked_height(model) {
        println!("Stacked height: {height:.4}");
    }
    if let Ok(utilization) = layout::compute_volume_utilization(model) {
        println!("Volume utilization: {:.1}%", utilization * 100.0);
    }
}
