extern crate points;
use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use log::{debug, LevelFilter};
use points::Point;

/// Compare and combine a few points.
#[derive(Parser, Debug)]
#[command(name = "points", version)]
struct Args {
    /// First point, moved by the second at the end.
    #[arg(default_value = "1,0", allow_hyphen_values = true)]
    a: Point,

    #[arg(default_value = "2,2", allow_hyphen_values = true)]
    b: Point,

    /// Compared against the first point.
    #[arg(default_value = "1,0", allow_hyphen_values = true)]
    c: Point,

    #[arg(short, long)]
    verbose: bool,
}

fn setup_logs(verbose: bool) {
    let mut env = env_logger::Builder::new();
    let level = if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    env.filter_module("points", level);
    if let Ok(content) = std::env::var("POINTS_LOG") {
        env.parse_filters(&content);
    }
    env.init();
}

fn run(mut a: Point, b: Point, c: Point, mut out: impl Write) -> anyhow::Result<()> {
    a.print_to(&mut out)?;
    b.print_to(&mut out)?;

    writeln!(out, "Distance: {}", a.manhattan_distance(&b))?;

    if a == c {
        writeln!(out, "Points are equal!")?;
    }

    a.checked_translate(b)
        .with_context(|| format!("moving {a} by {b}"))?;
    debug!("first point is now {a}");

    a.print_to(&mut out)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logs(args.verbose);
    run(args.a, args.b, args.c, io::stdout().lock())
}
