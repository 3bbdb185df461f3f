use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, error::ErrorKind};

use crate::config::PickConfig;
use crate::constants::output::DEFAULT_OUTPUT_DIR;
use crate::data::EventRecord;
use crate::events::ZH_CANDIDATES;
use crate::metrics::channel_shares;
use crate::pick::{PickReport, pick_events};
use crate::source::{DatasetResolver, RunRangeCatalog};

type DynResolver = Box<dyn DatasetResolver>;

#[derive(Debug, Parser)]
#[command(
    name = "pick_zh_events",
    disable_help_subcommand = true,
    about = "Write per-channel ZH -> 2l2tau event lists",
    long_about = "Group the compiled-in ZH candidate events by final state and resolved dataset, then write one JSON event list per final state.",
    after_help = "Dataset names come from the built-in 2011 run-range catalog unless --catalog is given. Set RUST_LOG=debug to trace each lookup."
)]
struct PickEventsCli {
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory that receives the event list files"
    )]
    output_dir: PathBuf,
    #[arg(
        long,
        value_name = "PATH",
        help = "JSON run-range catalog used instead of the built-in one"
    )]
    catalog: Option<PathBuf>,
    #[arg(
        long = "channel",
        value_name = "FINAL_STATE",
        help = "Only write this final state, repeat as needed"
    )]
    channels: Vec<String>,
    #[arg(long = "dry-run", help = "Group and report without writing files")]
    dry_run: bool,
}

impl From<PickEventsCli> for PickConfig {
    fn from(cli: PickEventsCli) -> Self {
        Self {
            output_dir: cli.output_dir,
            catalog_path: cli.catalog,
            channels: cli.channels,
            dry_run: cli.dry_run,
        }
    }
}

/// Run the event picker over the compiled-in table with the catalog resolver.
pub fn run_pick_events<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    run_pick_events_with(args_iter, ZH_CANDIDATES, default_resolver)
}

/// Run the event picker with a caller-provided table and resolver factory.
///
/// `build_resolver` receives the `--catalog` path, if any.
pub fn run_pick_events_with<I, Build>(
    args_iter: I,
    events: &[EventRecord],
    build_resolver: Build,
) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
    Build: FnOnce(Option<&Path>) -> Result<DynResolver, Box<dyn Error>>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<PickEventsCli, _>(
        std::iter::once("pick_zh_events".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let config = PickConfig::from(cli);
    let resolver = build_resolver(config.catalog_path.as_deref())?;
    let report = pick_events(&config, events, resolver.as_ref())?;
    print_report(&config, &report);
    Ok(())
}

fn default_resolver(catalog: Option<&Path>) -> Result<DynResolver, Box<dyn Error>> {
    let catalog = match catalog {
        Some(path) => RunRangeCatalog::load(path)?,
        None => RunRangeCatalog::builtin_2011(),
    };
    Ok(Box::new(catalog))
}

fn print_report(config: &PickConfig, report: &PickReport) {
    if config.dry_run {
        println!(
            "Dry run: {} channels grouped, nothing written to {}",
            report.channels.len(),
            config.output_dir.display()
        );
    } else {
        for path in &report.written {
            println!("wrote {}", path.display());
        }
    }

    let Some(summary) = channel_shares(&report.channels) else {
        println!("No events grouped.");
        return;
    };
    println!("--- events by final state ---");
    for entry in &summary.per_channel {
        println!(
            "{}: events={} datasets={} share={:.2}",
            entry.final_state, entry.events, entry.datasets, entry.share
        );
    }
    println!(
        "total={} channels={} min={} max={} mean={:.2}",
        summary.total, summary.channels, summary.min, summary.max, summary.mean
    );
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
