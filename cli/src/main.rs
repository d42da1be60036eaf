// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fs::File,
    io::Read,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::Parser;
use ohash::{Haystack, PhaseHooks};

#[derive(Parser)]
struct Args {
    /// Pattern to search for (matched as raw bytes)
    pattern: String,
    /// File to search
    file: PathBuf,
    /// Print the zero-based offset of each match, one per line
    #[arg(long)]
    positions: bool,
    /// Print preprocessing and scanning durations to stderr
    #[arg(long)]
    time: bool,
}

/// Captures per-phase wall-clock durations through the search's phase hooks.
#[derive(Default)]
struct PhaseTimer {
    started: Option<Instant>,
    preprocessing: Option<Duration>,
    scanning: Option<Duration>,
}

impl PhaseHooks for PhaseTimer {
    fn preprocessing_started(&mut self) {
        self.started = Some(Instant::now());
    }

    fn preprocessing_finished(&mut self) {
        self.preprocessing = self.started.take().map(|started| started.elapsed());
    }

    fn scanning_started(&mut self) {
        self.started = Some(Instant::now());
    }

    fn scanning_finished(&mut self) {
        self.scanning = self.started.take().map(|started| started.elapsed());
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut file = File::open(&args.file)
        .with_context(|| format!("Failed to open file '{}'", args.file.display()))?;
    let len: usize = file
        .metadata()
        .with_context(|| format!("Failed to read metadata of file '{}'", args.file.display()))?
        .len()
        .try_into()
        .with_context(|| {
            format!(
                "File '{}' is too large to read into memory",
                args.file.display(),
            )
        })?;
    // Reserve extra space for the sentinel scratch region up front
    let mut text = Vec::with_capacity(len + args.pattern.len() + 1);
    file.read_to_end(&mut text)
        .context("Failure occurred while reading file")?;

    let mut haystack = Haystack::new(text);
    let mut timer = PhaseTimer::default();

    let count = if args.positions {
        ohash::search(
            args.pattern.as_bytes(),
            &mut haystack,
            |start| println!("{start}"),
            &mut timer,
        )
    } else {
        ohash::search(args.pattern.as_bytes(), &mut haystack, |_| {}, &mut timer)
    }
    .with_context(|| format!("Failed to search for pattern '{}'", args.pattern))?;

    println!("{count}");

    if args.time {
        if let (Some(preprocessing), Some(scanning)) = (timer.preprocessing, timer.scanning) {
            eprintln!("preprocessing: {preprocessing:?}");
            eprintln!("scanning: {scanning:?}");
        }
    }

    Ok(())
}
