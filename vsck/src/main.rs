// SPDX-License-Identifier: MIT
// vsck/src/main.rs

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use vsfs::vsfs::prelude::*;

#[derive(Parser)]
#[command(name = "vsck", version, about = "VSFS image consistency checker", long_about = None)]
struct Cli {
    /// Path to the filesystem image
    image: PathBuf,

    /// Print the full report, not only the first violation
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let report = match run(&cli) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    if cli.verbose {
        print!(
            "{}",
            report.display_with(ReportDisplayOpts {
                show_summary: true,
                ..Default::default()
            })
        );
    }

    match report.first_error() {
        Some(msg) => {
            eprintln!("ERROR: {msg}");
            ExitCode::FAILURE
        }
        None => ExitCode::SUCCESS,
    }
}

fn run(cli: &Cli) -> anyhow::Result<VerifyReport> {
    let mut buf = fs::read(&cli.image)
        .with_context(|| format!("image not found: {}", cli.image.display()))?;

    let mut io = MemVsIO::new(&mut buf);
    let meta = VsfsMeta::from_io(&mut io).map_err(|e| anyhow::anyhow!(flatten(e)))?;

    let mut checker = VsfsChecker::new(&mut io, &meta);
    checker
        .check_all()
        .map_err(|e| anyhow::anyhow!(flatten(e.into())))
}

/// One diagnostic line per failing run: fold the cause chain into it.
fn flatten(e: FsError) -> String {
    let mut s = String::from(e.msg());
    let mut current = e.source();
    while let Some(src) = current {
        s.push_str(": ");
        s.push_str(src.msg());
        current = src.source();
    }
    s
}
