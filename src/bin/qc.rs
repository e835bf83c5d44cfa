use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tinyrand::{Seeded, StdRand};
use tracing::{debug, info};

use qualitycontrol::experiment::{Comparison, Experiment, Metric};
use qualitycontrol::file::FromJsonFile;
use qualitycontrol::hypergeometric::Lot;
use qualitycontrol::mc::DEFAULT_TRIALS;
use qualitycontrol::print::tabulate_report;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the experiment from
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// lot size
    #[clap(short = 'n', long)]
    n: Option<usize>,

    /// number of defectives in the lot
    #[clap(short = 'k', long)]
    k: Option<usize>,

    /// sample size
    #[clap(short = 'r', long)]
    r: Option<usize>,

    /// lot size to simulate (defaults to n)
    #[clap(long)]
    n2: Option<usize>,

    /// number of defectives in the simulated lot (defaults to k)
    #[clap(long)]
    k2: Option<usize>,

    /// simulated sample size (defaults to r)
    #[clap(long)]
    r2: Option<usize>,

    /// number of simulated samples
    #[clap(short = 's', long)]
    trials: Option<u64>,

    /// comparison metric: mse or kl
    #[clap(short = 'm', long)]
    metric: Option<Metric>,

    /// seed for the random number generator
    #[clap(long)]
    seed: Option<u64>,

    /// print the report as JSON
    #[clap(long)]
    json: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        let lot_given = self.n.is_some() || self.k.is_some() || self.r.is_some();
        if self.file.is_none() && !lot_given || self.file.is_some() && lot_given {
            bail!("either the -f flag or the -n, -k and -r flags must be specified");
        }
        if self.file.is_some() && self.compares() {
            bail!("comparison flags cannot be combined with -f");
        }
        Ok(())
    }

    fn compares(&self) -> bool {
        self.trials.is_some()
            || self.metric.is_some()
            || self.n2.is_some()
            || self.k2.is_some()
            || self.r2.is_some()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let experiment = read_experiment(&args)?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    debug!("experiment: {experiment:?}, seed: {seed}");

    let report = experiment.evaluate(&mut StdRand::seed(seed))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let table = tabulate_report(&report);
    info!("P(m defective in a sample of {})\n{}", report.lot.r, Console::default().render(&table));
    if let Some(score) = report.score {
        match score.metric {
            Metric::Mse => info!("MSE: {:.6}%", score.value),
            Metric::Kl => info!("KL divergence: {:.6}", score.value),
        }
    }
    Ok(())
}

fn read_experiment(args: &Args) -> anyhow::Result<Experiment> {
    if let Some(path) = args.file.as_ref() {
        return Experiment::from_json_file(path)
            .with_context(|| format!("reading experiment from {}", path.display()));
    }

    let lot = Lot {
        n: args.n.context("lot size (-n) must be specified")?,
        k: args.k.context("number of defectives (-k) must be specified")?,
        r: args.r.context("sample size (-r) must be specified")?,
    };
    let comparison = args.compares().then(|| {
        let sampled_lot = (args.n2.is_some() || args.k2.is_some() || args.r2.is_some()).then(|| Lot {
            n: args.n2.unwrap_or(lot.n),
            k: args.k2.unwrap_or(lot.k),
            r: args.r2.unwrap_or(lot.r),
        });
        Comparison {
            lot: sampled_lot,
            trials: args.trials.unwrap_or(DEFAULT_TRIALS),
            metric: args.metric.unwrap_or_default(),
        }
    });
    Ok(Experiment { lot, comparison })
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
