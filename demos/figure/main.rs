//! Cut-away figure demo: resolves a preset figure and dumps its paths.
//!
//! Usage:
//! ```text
//! cargo run --example figure                  # flat plate, variable thickness
//! cargo run --example figure -- saddle        # hyperbolic paraboloid
//! cargo run --example figure -- saddle const  # ... with constant thickness
//! RUST_LOG=cutaway=debug cargo run --example figure
//! ```

use cutaway::drawing::{PathCommand, PathRecorder};
use cutaway::figure::{CutawayFigure, FigureConfig};
use cutaway::geometry::{MidSurfaceKind, Thickness};
use cutaway::CutawayError;
use tracing::info;

fn main() -> Result<(), CutawayError> {
    // Default: WARN for everything, INFO for this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=cutaway=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("figure=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mid_surface = if args.iter().any(|a| a == "saddle") {
        MidSurfaceKind::Saddle
    } else {
        MidSurfaceKind::Plate
    };
    let thickness = if args.iter().any(|a| a == "const") {
        Thickness::Constant
    } else {
        Thickness::Variable
    };
    let config = FigureConfig {
        mid_surface,
        thickness,
        ..FigureConfig::default()
    };

    let figure = CutawayFigure::from_config(&config)?;
    let set = figure.visibility()?;
    for (name, pieces) in [
        ("gamma_visible", &set.gamma_visible),
        ("bc", &set.bc),
        ("gh", &set.gh),
        ("iso_u", &set.iso_u_outside),
        ("iso_v", &set.iso_v_outside),
    ] {
        for piece in pieces {
            info!(
                name,
                points = piece.len(),
                length = piece.length(),
                first = ?piece.first(),
                last = ?piece.last(),
                "parameter-space piece"
            );
        }
    }

    let outlines = figure.outlines()?;
    let anchors = outlines.label_anchors;
    info!(
        gamma = ?anchors.gamma,
        lateral = ?anchors.lateral,
        sub_region = ?anchors.sub_region,
        "label anchors"
    );

    let mut recorder = PathRecorder::new();
    outlines.emit(&mut recorder);
    info!(
        subpaths = recorder.subpath_count(),
        commands = recorder.commands.len(),
        "projected outlines"
    );

    for command in &recorder.commands {
        match command {
            PathCommand::MoveTo(p) => println!("M {:.4} {:.4}", p.x, p.y),
            PathCommand::LineTo(p) => println!("L {:.4} {:.4}", p.x, p.y),
            PathCommand::ClosePath => println!("Z"),
        }
    }
    Ok(())
}
