use anyhow::{bail, Context, Result};
use bricks::dim2::{convex_hull, polygon_area};
use bricks::dim3::{rx, ry, rz, Point3};
use bricks::slices::interleave;
use bricks::Matrix;
use clap::{Parser, Subcommand, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;

#[derive(Parser)]
#[command(name = "bricks")]
#[command(about = "Matrix and geometry utilities")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull and its area for the points in a CSV/Parquet file (columns x,y)
    Hull {
        #[arg(long)]
        input: PathBuf,
        /// Also write the JSON result to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Shoelace area of the polygon given by the points in file order
    Area {
        #[arg(long)]
        input: PathBuf,
    },
    /// Rotate a point about a coordinate axis
    Rotate {
        #[arg(long, value_enum)]
        axis: Axis,
        /// Angle in radians
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
        /// Point as x,y,z
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        point: Vec<f64>,
    },
    /// Interleave two comma-separated integer lists
    Zip {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        a: Vec<i64>,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        b: Vec<i64>,
    },
    /// Print a matrix with cells drawn from U[0, 1)
    Random {
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        cols: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Serialize)]
struct HullReport {
    input: String,
    points: usize,
    hull: Vec<[f64; 2]>,
    area: f64,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Hull { input, out } => {
            let report = hull(&input, out.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Action::Area { input } => println!("{}", area(&input)?),
        Action::Rotate { axis, angle, point } => {
            let p = rotate(axis, angle, &point)?;
            println!("{},{},{}", p.x, p.y, p.z);
        }
        Action::Zip { a, b } => {
            tracing::info!(a = a.len(), b = b.len(), "zip");
            let joined: Vec<String> = interleave(&a, &b)
                .iter()
                .map(|v| v.to_string())
                .collect();
            println!("{}", joined.join(","));
        }
        Action::Random { rows, cols, seed } => println!("{}", random(rows, cols, seed)),
    }
    Ok(())
}

fn hull(input: &Path, out: Option<&Path>) -> Result<HullReport> {
    tracing::info!(input = %input.display(), out = ?out, "hull");
    let pts = points::read_points(input)?;
    let hull = convex_hull(&pts).with_context(|| format!("hull of {}", input.display()))?;
    tracing::debug!(points = pts.len(), hull = hull.len(), "hull_done");
    let report = HullReport {
        input: input.to_string_lossy().into_owned(),
        points: pts.len(),
        area: polygon_area(&hull),
        hull: hull.iter().map(|p| [p.x, p.y]).collect(),
    };

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(out, serde_json::to_vec_pretty(&report)?)
            .with_context(|| format!("writing {}", out.display()))?;
        tracing::debug!(out = %out.display(), "hull_written");
    }
    Ok(report)
}

fn area(input: &Path) -> Result<f64> {
    tracing::info!(input = %input.display(), "area");
    let pts = points::read_points(input)?;
    Ok(polygon_area(&pts))
}

fn rotate(axis: Axis, angle: f64, point: &[f64]) -> Result<Point3> {
    tracing::info!(axis = ?axis, angle, "rotate");
    let &[x, y, z] = point else {
        bail!("--point needs exactly 3 coordinates, got {}", point.len());
    };
    let r = match axis {
        Axis::X => rx(angle),
        Axis::Y => ry(angle),
        Axis::Z => rz(angle),
    };
    tracing::debug!(matrix = %r, "rotation");
    Ok(Point3::new(x, y, z).rotate(&r)?)
}

fn random(rows: usize, cols: usize, seed: Option<u64>) -> Matrix {
    tracing::info!(rows, cols, seed = ?seed, "random");
    match seed {
        Some(s) => Matrix::random_with(rows, cols, &mut StdRng::seed_from_u64(s)),
        None => Matrix::random(rows, cols),
    }
}
