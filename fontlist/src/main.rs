//! List font families.
//!
//! Takes font files and directories, identifies every face in them, and
//! prints the faces grouped by family.

use std::{io::Write, path::PathBuf, process::ExitCode};

use clap::Parser;
use font_ident::{read_file_with, OffsetBase, ReadOptions, TypographicFont};
use fontlist::{files, print, FontFamily};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Font files, or directories to search for .ttf, .otf, .ttc and .otc files
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// List faces one per line instead of grouping them by family
    #[arg(long)]
    flat: bool,

    /// Only list monospaced families
    #[arg(long)]
    monospace: bool,

    /// Log more; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of files to read in parallel (defaults to the number of CPUs)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// What table offsets in font collections are relative to
    #[arg(long, value_enum, default_value_t = Offsets::File)]
    offsets: Offsets,
}

#[derive(clap::ValueEnum, Copy, Clone, Debug)]
enum Offsets {
    /// The start of each font in the collection.
    Stream,
    /// The start of the file.
    File,
}

impl From<Offsets> for OffsetBase {
    fn from(value: Offsets) -> Self {
        match value {
            Offsets::Stream => OffsetBase::Stream,
            Offsets::File => OffsetBase::File,
        }
    }
}

impl Args {
    fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    if let Some(jobs) = args.jobs {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
        {
            log::warn!("could not configure {jobs} threads: {e}");
        }
    }

    let paths = files::collect_font_paths(&args.paths);
    log::info!("reading {} files", paths.len());
    let options = ReadOptions::new().offset_base(args.offsets.into());
    let results: Vec<_> = paths
        .par_iter()
        .map(|path| (path, read_file_with(path, options)))
        .collect();

    let mut failed = false;
    let mut fonts: Vec<TypographicFont> = Vec::new();
    for (path, result) in results {
        match result {
            Ok(found) => {
                log::debug!("{}: {} fonts", path.display(), found.len());
                fonts.extend(found);
            }
            Err(e) => {
                log::error!("{}: {e}", path.display());
                failed = true;
            }
        }
    }

    let mut stdout = std::io::stdout().lock();
    let written = if args.flat {
        if args.monospace {
            fonts.retain(TypographicFont::is_monospaced);
        }
        if args.json {
            print::write_fonts_json(&mut stdout, &fonts)
        } else {
            print::write_fonts(&mut stdout, &fonts)
        }
    } else {
        let mut families = FontFamily::group(fonts);
        if args.monospace {
            families.retain(FontFamily::is_monospaced);
        }
        if args.json {
            print::write_families_json(&mut stdout, &families)
        } else {
            print::write_families(&mut stdout, &families)
        }
    };
    if let Err(e) = written.and_then(|_| stdout.flush()) {
        // a closed pipe is not worth reporting
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            log::error!("failed to write output: {e}");
            return ExitCode::FAILURE;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
