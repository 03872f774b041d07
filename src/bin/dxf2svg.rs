//! Convert a DXF drawing to SVG.
//!
//! ```text
//! dxf2svg <input.dxf> [output.svg] [-v | --verbose] [--max-depth N]
//! ```

use anyhow::{bail, Context, Result};
use dxf_render::{ExpandOptions, Helper, HelperOptions, NotificationType};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

struct Args {
    input: PathBuf,
    output: PathBuf,
    verbose: bool,
    max_depth: Option<usize>,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let mut paths = Vec::new();
    let mut verbose = false;
    let mut max_depth = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "--max-depth" => {
                let Some(value) = args.next() else {
                    bail!("`--max-depth` needs a number of levels");
                };
                max_depth = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid --max-depth value: {value}"))?,
                );
            }
            other if other.starts_with('-') => bail!("unknown argument: {other}"),
            other => paths.push(PathBuf::from(other)),
        }
    }

    let mut paths = paths.into_iter();
    let Some(input) = paths.next() else {
        bail!("usage: dxf2svg <input.dxf> [output.svg] [-v | --verbose] [--max-depth N]");
    };
    let output = paths.next().unwrap_or_else(|| input.with_extension("svg"));
    if let Some(extra) = paths.next() {
        bail!("unexpected argument: {}", extra.display());
    }

    Ok(Args {
        input,
        output,
        verbose,
        max_depth,
    })
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    let args = parse_args()?;
    init_logging(args.verbose);

    let file = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let mut options = HelperOptions {
        expand: ExpandOptions {
            max_depth: args.max_depth,
        },
        ..Default::default()
    };
    options.reader.verbose = args.verbose;
    let helper = Helper::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to read {}", args.input.display()))?
        .with_options(options);

    let document = helper
        .parsed()
        .with_context(|| format!("failed to parse {}", args.input.display()))?;
    info!(
        entities = document.entity_count(),
        blocks = document.blocks.len(),
        "parsed {}",
        args.input.display()
    );

    if args.verbose {
        for (layer, entities) in helper.groups()? {
            println!("[{} : {}]", layer, entities.len());
        }
    }

    let svg = helper.to_svg()?;
    std::fs::write(&args.output, svg)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("wrote {}", args.output.display());

    let notifications = helper.notifications();
    let errors = notifications.of_type(NotificationType::Error).len();
    if errors > 0 {
        warn!(errors, "drawing converted with errors");
    }
    Ok(())
}
