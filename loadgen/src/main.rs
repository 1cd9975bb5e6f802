use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use loadgen::client::HttpClient;
use loadgen::scenario::Recorder;
use loadgen::sink::ResultsLog;
use loadgen::{catalog, report, scenario};
use tokio_util::sync::CancellationToken;
use tracing::info;

const RESULTS_PATH: &str = "test_results.csv";

#[derive(Parser, Debug)]
#[command(name = "loadgen")]
#[command(about = "Fires randomized requests at a fixed REST endpoint catalog and records one outcome per request")]
struct Args {
    /// Base URL of the target service
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    base_url: String,

    /// Test duration in seconds
    #[arg(long, default_value_t = 60)]
    duration: u64,

    /// Target requests per second (paced single-threaded mode)
    #[arg(long, default_value_t = 10.0)]
    rate: f64,

    /// Run independent parallel workers instead of one paced loop
    #[arg(long)]
    parallel: bool,

    /// Number of parallel workers
    #[arg(long, default_value_t = 4)]
    workers: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.duration > 0, "--duration must be at least 1 second");
    anyhow::ensure!(args.rate > 0.0, "--rate must be positive");
    anyhow::ensure!(args.workers > 0, "--workers must be at least 1");

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build runtime")?;
    let _guard = rt.enter();
    rt.block_on(run(args))
}

async fn run(args: Args) -> anyhow::Result<()> {
    // The results log is the only fatal I/O: refuse to start without it.
    let sink = ResultsLog::create(Path::new(RESULTS_PATH))?;
    let client = HttpClient::new(&args.base_url)?;
    let recorder = Arc::new(Recorder::new(sink));
    let duration = Duration::from_secs(args.duration);

    let cancel = CancellationToken::new();
    let watcher = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("interrupt received, stopping run");
                cancel.cancel();
            }
        }
    });

    if args.parallel {
        info!(
            base_url = %args.base_url,
            duration_s = args.duration,
            workers = args.workers,
            "starting parallel run"
        );
        scenario::run_parallel(
            client,
            catalog::CATALOG,
            args.workers,
            duration,
            recorder.clone(),
            cancel.clone(),
        )
        .await?;
    } else {
        info!(
            base_url = %args.base_url,
            duration_s = args.duration,
            rate = args.rate,
            "starting paced run"
        );
        scenario::run_paced(
            &client,
            catalog::CATALOG,
            args.rate,
            duration,
            &recorder,
            &cancel,
        )
        .await;
    }
    watcher.abort();

    report::print_summary(&recorder.summary().snapshot(), Path::new(RESULTS_PATH));
    Ok(())
}
