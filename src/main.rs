use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use asoscreen::enrichment::{enrich_hits, AdvisoryTable, Enricher, WarnOnce};
use asoscreen::io::{read_fasta_path, read_hits, read_queries_path, write_enriched_hits, write_hits};
use asoscreen::screening::{fingerprint, BatchDriver, HitSummary};
use asoscreen::{RegionPolicy, ScreenConfig, DEFAULT_MAX_DISTANCE};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "asoscreen", about = "Substitution-only off-target screening for antisense oligonucleotides")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan ASO sequences against a transcript FASTA.
    Scan {
        /// ASO list (`ASO_ID SEQUENCE` per line).
        queries: PathBuf,
        /// Transcript FASTA.
        targets: PathBuf,
        /// Output hit table.
        #[arg(short, long, default_value = "results.csv")]
        output: PathBuf,
        /// Maximum mismatches for a reported window.
        #[arg(long, default_value_t = DEFAULT_MAX_DISTANCE)]
        max_distance: u32,
        /// Scan query x target pairs on a thread pool.
        #[arg(long)]
        parallel: bool,
        /// Worker threads for --parallel (default: all cores).
        #[arg(long, requires = "parallel")]
        threads: Option<usize>,
        /// Skip transcripts whose type matches no known functional label.
        #[arg(long)]
        functional_only: bool,
    },
    /// Attach allelic status and advisory text to an existing hit table.
    Annotate {
        /// Hit table produced by `scan`.
        input: PathBuf,
        /// Annotated output table.
        output: PathBuf,
        /// Advisory table (`GENE<TAB>ADVISORY` per line).
        #[arg(long)]
        advisories: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Scan {
            queries,
            targets,
            output,
            max_distance,
            parallel,
            threads,
            functional_only,
        } => {
            let mut config = ScreenConfig::default().with_max_distance(max_distance);
            if parallel {
                config = config.parallel();
            }
            if let Some(threads) = threads {
                config = config.with_threads(threads);
            }
            if functional_only {
                config = config.with_region_policy(RegionPolicy::FunctionalOnly);
            }
            run_scan(queries, targets, output, config)?
        }
        Commands::Annotate {
            input,
            output,
            advisories,
        } => run_annotate(input, output, advisories)?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_scan(
    queries_path: PathBuf,
    targets_path: PathBuf,
    output_path: PathBuf,
    config: ScreenConfig,
) -> Result<()> {
    let queries = read_queries_path(&queries_path).with_context(|| {
        format!("failed to read ASO sequences from {}", queries_path.display())
    })?;
    info!("Loaded {} ASO sequences", queries.len());

    let targets = read_fasta_path(&targets_path).with_context(|| {
        format!("failed to read transcripts from {}", targets_path.display())
    })?;
    info!("Loaded {} transcript sequences", targets.len());

    let driver = BatchDriver::new(&config).context("invalid screening configuration")?;
    let outcome = driver
        .run(&queries, &targets)
        .context("scanning failed")?;

    let writer = BufWriter::new(File::create(&output_path).with_context(|| {
        format!("failed to create {}", output_path.display())
    })?);
    write_hits(writer, &outcome.hits)
        .with_context(|| format!("failed to write results to {}", output_path.display()))?;

    print_summary(&HitSummary::from_hits(&outcome.hits), config.max_distance);
    println!("fingerprint\t{}", fingerprint(&outcome.hits).to_hex());
    println!("results\t{}", output_path.display());
    Ok(())
}

fn print_summary(summary: &HitSummary, max_distance: u32) {
    if summary.total == 0 {
        println!("No off-target hits found (substitution-only distance <= {max_distance}).");
        return;
    }

    println!("total_hits\t{}", summary.total);
    for (transcript_type, count) in &summary.by_transcript_type {
        println!("transcript_type\t{transcript_type}\t{count}");
    }
    for (distance, count) in &summary.by_distance {
        println!("mismatches\t{distance}\t{count}");
    }
}

fn run_annotate(
    input_path: PathBuf,
    output_path: PathBuf,
    advisories: Option<PathBuf>,
) -> Result<()> {
    let reader = BufReader::new(File::open(&input_path).with_context(|| {
        format!("failed to open hit table {}", input_path.display())
    })?);
    let hits = read_hits(reader)
        .with_context(|| format!("failed to read hit table {}", input_path.display()))?;
    if hits.is_empty() {
        warn!("Input hit table is empty");
    }
    info!("Loaded {} hits", hits.len());

    let table = match advisories {
        Some(path) => Some(AdvisoryTable::from_path(&path).with_context(|| {
            format!("failed to load advisory table {}", path.display())
        })?),
        None => {
            warn!("No advisory source configured - annotations will be 'NA'");
            None
        }
    };

    let mut warn_once = WarnOnce::new();
    let enricher = table.as_ref().map(|table| table as &dyn Enricher);
    let (enriched, stats) = enrich_hits(hits, enricher, &mut warn_once);

    let writer = BufWriter::new(File::create(&output_path).with_context(|| {
        format!("failed to create {}", output_path.display())
    })?);
    write_enriched_hits(writer, &enriched)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    println!("annotated\t{}", stats.annotated);
    println!("unavailable\t{}", stats.unavailable);
    println!("results\t{}", output_path.display());
    Ok(())
}
