extern crate intlist;
use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use intlist::List;
use log::{info, LevelFilter};

/// Insert integers into a linked list and print them back in order.
#[derive(Parser, Debug)]
#[command(name = "clist", version)]
struct Args {
    /// Values to insert, in order.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i32>,

    /// Log list operations to stderr.
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
    env.filter_module("intlist", level);
    env.filter_module("clist", level);
    if let Ok(content) = std::env::var("CLIST_LOG") {
        env.parse_filters(&content);
    }
    env.init();
}

fn run(values: &[i32], out: impl Write) -> anyhow::Result<()> {
    let mut list = List::new();
    for &v in values {
        list.insert(v)
            .with_context(|| format!("inserting {v}"))?;
    }
    info!("list holds {} values", list.len());
    list.print_all_to(out).context("printing list")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logs(args.verbose);
    run(&args.values, io::stdout().lock())
}
