//! cmudraft CLI - generate masonry drafting profiles as JSON.
//!
//! Stands in for the host drawing system: resolves numeric
//! parameters from flags, runs the layout assemblers, and prints the
//! resulting profiles for a downstream renderer to consume.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use cmudraft_layout::{core_section, elevation, BlockParams, CoreLayoutParams, WallHalf};
use cmudraft_math::PlaneFrame;
use cmudraft_profile::Point2D;

#[derive(Parser)]
#[command(name = "cmudraft")]
#[command(about = "Generate CMU wall elevation and section profiles", long_about = None)]
struct Cli {
    /// Write JSON here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sectioned wall elevation (courses of blocks and
    /// mortar joints)
    Elevation {
        /// Total number of courses (must be even)
        #[arg(short, long, default_value_t = 8)]
        courses: u32,
        /// Block face width
        #[arg(long, default_value_t = 5.625)]
        width: f64,
        /// Block face height
        #[arg(long, default_value_t = 5.625)]
        height: f64,
        /// Block length (used for the inventory label)
        #[arg(long, default_value_t = 15.625)]
        length: f64,
        /// Mortar joint thickness
        #[arg(long, default_value_t = 0.375)]
        mortar: f64,
        /// Display stroke width
        #[arg(long, default_value_t = 0.03)]
        stroke: f64,
        /// Insertion point, as X,Y
        #[arg(long, default_value = "0,0", value_parser = parse_point)]
        at: Point2D,
    },
    /// Generate a hollow-unit plan cross section (shell plus cores)
    Section {
        /// Number of core openings
        #[arg(short, long, default_value_t = 3)]
        cores: u32,
        /// Overall unit width (across the wall)
        #[arg(long, default_value_t = 7.625)]
        width: f64,
        /// Overall unit length (along the wall)
        #[arg(long, default_value_t = 15.625)]
        length: f64,
        /// Outer shell thickness
        #[arg(long, default_value_t = 1.25)]
        shell: f64,
        /// Web thickness between cores
        #[arg(long, default_value_t = 0.75)]
        web: f64,
        /// Display stroke width
        #[arg(long, default_value_t = 0.03)]
        stroke: f64,
        /// Insertion point, as X,Y
        #[arg(long, default_value = "0,0", value_parser = parse_point)]
        at: Point2D,
    },
}

fn parse_point(s: &str) -> Result<Point2D, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad X: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad Y: {e}"))?;
    Ok(Point2D::new(x, y))
}

/// Elevation output: the course profiles plus the inventory labels
/// the source emits for the two halves.
#[derive(Serialize)]
struct ElevationReport {
    lower_label: String,
    upper_label: String,
    elevation: cmudraft_layout::Elevation,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let json = match cli.command {
        Commands::Elevation {
            courses,
            width,
            height,
            length,
            mortar,
            stroke,
            at,
        } => {
            let params = BlockParams {
                width,
                height,
                length,
                mortar_thickness: mortar,
                stroke_width: stroke,
            };
            let wall = elevation(at, courses, &params, &PlaneFrame::world_xy())?;
            let half = courses / 2;
            let report = ElevationReport {
                lower_label: params.block_label(half, WallHalf::Lower),
                upper_label: params.block_label(half, WallHalf::Upper),
                elevation: wall,
            };
            serde_json::to_string_pretty(&report)?
        }
        Commands::Section {
            cores,
            width,
            length,
            shell,
            web,
            stroke,
            at,
        } => {
            let params = CoreLayoutParams {
                width,
                length,
                shell_thickness: shell,
                web_thickness: web,
                core_count: cores,
            };
            let section = core_section(at, &params, stroke)?;
            serde_json::to_string_pretty(&section)?
        }
    };

    match cli.output {
        Some(path) => std::fs::write(&path, json)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}
