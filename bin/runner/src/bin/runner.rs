use alloy::providers::ProviderBuilder;
use color_eyre::{eyre::Context, Result};
use dotenv::dotenv;
use futures::future::join_all;
use snarkbridge_client::{
    adapter_for, JobConfig, ProofPipeline, RpcContractCaller, RunnerConfig, VerifierClient,
};
use snarkbridge_prover::SnarkjsProver;
use std::env;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Proves every configured job with snarkjs and checks each proof against
/// its deployed verifier contract.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let config_path = env::var("RUNNER_CONFIG").unwrap_or_else(|_| "config.json".to_string());
    let config = RunnerConfig::from_file(&config_path).context("Failed to load config")?;

    // RPC_URL from the environment wins over the config file
    let rpc_url = match env::var("RPC_URL") {
        Ok(url) => Url::from_str(&url).context("Invalid RPC URL")?,
        Err(_) => config.rpc_url().context("Invalid RPC URL")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_max_level(config.log_level()?)
        .init();

    tracing::info!("Setting up RPC provider");
    let rpc_provider = ProviderBuilder::new().on_http(rpc_url);
    let prover = SnarkjsProver::new(config.prover.clone());

    let runs = config.jobs.iter().map(|job| {
        let caller = RpcContractCaller::new(rpc_provider.clone());
        let pipeline = ProofPipeline::new(
            adapter_for(job.system, prover.clone()),
            VerifierClient::new(caller, job.verifier),
        );
        async move { (job, pipeline.run(&job.inputs, &job.wasm, &job.zkey).await) }
    });

    let mut failed = 0;
    for (job, result) in join_all(runs).await {
        match result {
            Ok(report) if report.verified => log_report(job, "verified", &report.public_signals),
            Ok(report) => {
                failed += 1;
                log_report(job, "REJECTED", &report.public_signals);
            }
            Err(e) => {
                failed += 1;
                tracing::error!("{}: {}", job.name, e);
            }
        }
    }

    if failed > 0 {
        color_eyre::eyre::bail!("{failed} of {} jobs did not verify", config.jobs.len());
    }
    Ok(())
}

fn log_report<S: std::fmt::Display>(job: &JobConfig, status: &str, public_signals: &[S]) {
    let signals: Vec<String> = public_signals.iter().map(ToString::to_string).collect();
    tracing::info!(
        "{} ({}): {} with public signals [{}]",
        job.name,
        job.system,
        status,
        signals.join(", ")
    );
}
