use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use antseq::assembly::colony::Colony;
use antseq::assembly::params::Params;
use antseq::assembly::report::RunReport;

#[derive(Parser)]
#[command(name = "antseq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Ant colony reconstruction of DNA from hybridization spectra", long_about = None)]
struct Cli {
    /// Worker threads for the ant pool (0 = rayon default)
    #[arg(short = 't', long, default_value_t = 0, global = true)]
    threads: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one instance and reconstruct it
    Run(RunArgs),
    /// Run a grid of ant counts and iteration counts
    Sweep(SweepArgs),
}

#[derive(Args)]
struct ColonyArgs {
    /// JSON parameter file; flags below override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Ground-truth sequence length
    #[arg(short = 'n', long)]
    sequence_length: Option<usize>,

    /// Fragment length
    #[arg(short = 'k', long)]
    oligo_size: Option<usize>,

    /// Pheromone deposited per edge
    #[arg(long)]
    alpha: Option<f64>,

    /// Fraction of the trail lost per round
    #[arg(long)]
    evaporation: Option<f64>,

    /// Position range widening as a fraction of the sequence length
    #[arg(long)]
    percent: Option<f64>,

    /// Inject phantom fragments into the spectrum
    #[arg(long)]
    phantoms: bool,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Run ants one after another instead of on the thread pool
    #[arg(long)]
    sequential: bool,
}

#[derive(Args)]
struct RunArgs {
    #[command(flatten)]
    colony: ColonyArgs,

    /// Ants per round
    #[arg(short, long)]
    ants: Option<usize>,

    /// Number of rounds
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Write a JSON run report to this file
    #[arg(short, long, value_name = "FILE")]
    report: Option<String>,
}

#[derive(Args)]
struct SweepArgs {
    #[command(flatten)]
    colony: ColonyArgs,

    /// Ant counts to try
    #[arg(long, value_delimiter = ',', default_value = "1,5,10,20")]
    ants: Vec<usize>,

    /// Iteration counts to try
    #[arg(long, value_delimiter = ',', default_value = "1,3,5,7")]
    iterations: Vec<usize>,
}

impl ColonyArgs {
    fn into_params(self) -> Result<Params> {
        let mut params = match &self.config {
            Some(path) => Params::load_from_file(path)
                .with_context(|| format!("cannot load parameters from '{}'", path))?,
            None => Params::default(),
        };

        if let Some(n) = self.sequence_length {
            params.sequence_length = n;
        }
        if let Some(k) = self.oligo_size {
            params.oligo_size = k;
        }
        if let Some(alpha) = self.alpha {
            params.alpha = alpha;
        }
        if let Some(evaporation) = self.evaporation {
            params.evaporation_coefficient = evaporation;
        }
        if let Some(percent) = self.percent {
            params.percent = percent;
        }
        if self.phantoms {
            params.inject_phantoms = true;
        }
        if self.seed.is_some() {
            params.seed = self.seed;
        }
        if self.sequential {
            params.parallel = false;
        }
        Ok(params)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("cannot configure the thread pool")?;
    }

    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Sweep(args) => sweep(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let mut params = args.colony.into_params()?;
    if let Some(ants) = args.ants {
        params.ant_count = ants;
    }
    if let Some(iterations) = args.iterations {
        params.iterations = iterations;
    }

    let mut colony = Colony::new(params)?;
    let best = colony.run()?;

    println!("original:      {}", colony.instance().sequence);
    println!("reconstructed: {}", best.sequence);
    println!("distance:      {} ({:.2}%)", best.distance, best.error_percent());

    if let Some(path) = args.report {
        RunReport::new(&colony, &best)
            .save_to_file(&path)
            .with_context(|| format!("cannot write report to '{}'", path))?;
        info!("report saved: {}", path);
    }
    Ok(())
}

fn sweep(args: SweepArgs) -> Result<()> {
    let base = args.colony.into_params()?;

    for &ant_count in &args.ants {
        for &iterations in &args.iterations {
            let params = Params {
                ant_count,
                iterations,
                ..base.clone()
            };
            let best = Colony::new(params)?.run()?;
            info!(
                ants = ant_count,
                iterations,
                distance = best.distance,
                "error {:.2}%",
                best.error_percent()
            );
            println!("{}\t{}\t{}\t{:.2}", ant_count, iterations, best.distance, best.error_percent());
        }
    }
    Ok(())
}
