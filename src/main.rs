//! SmailCoin chain parameter tool
//!
//! Selects a network the way the node does at startup, then either prints
//! the resulting parameters or re-mines the network's genesis nonce.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use smail_params::chainparams::{select_params, ChainParams, ConfigError, Network};
use smail_params::consensus::{Block, CompactTarget, DeploymentPos};
use smail_params::mining::{partition_nonces, GenesisMiner, MiningResult};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

const PROGRESS_INTERVAL: u64 = 1_000_000;

/// SmailCoin chain parameters
#[derive(Parser, Debug)]
#[command(name = "smail-params")]
#[command(about = "Inspect SmailCoin network parameters")]
struct Args {
    /// Network to select: main, test or regtest
    #[arg(long, env = "SMAIL_CHAIN")]
    chain: Option<String>,

    /// Use the test network (overrides --chain)
    #[arg(long)]
    testnet: bool,

    /// Use the regression test network (overrides --chain)
    #[arg(long)]
    regtest: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize the selected network
    Show {
        /// Also print the full parameter bundle as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search for the genesis nonce of the selected network
    MineGenesis {
        #[arg(long, default_value_t = 0)]
        start_nonce: u32,

        /// Worker count (defaults to available cores)
        #[arg(long)]
        threads: Option<usize>,
    },
}

impl Args {
    fn chain_name(&self) -> Result<String, ConfigError> {
        if self.testnet || self.regtest {
            return Network::from_flags(self.testnet, self.regtest).map(|n| n.as_str().to_string());
        }
        Ok(self
            .chain
            .clone()
            .unwrap_or_else(|| Network::Main.as_str().to_string()))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let name = args.chain_name()?;

    let params = match select_params(&name) {
        Ok(params) => params,
        Err(err) => {
            if err.is_fatal() {
                error!(%err, "chain parameters failed their integrity check");
            }
            return Err(err.into());
        }
    };

    match args.command.unwrap_or(Command::Show { json: false }) {
        Command::Show { json } => show(&params, json)?,
        Command::MineGenesis {
            start_nonce,
            threads,
        } => mine_genesis(&params, start_nonce, threads).await?,
    }

    Ok(())
}

fn show(params: &ChainParams, json: bool) -> anyhow::Result<()> {
    info!(
        network = params.network_id(),
        genesis = %params.genesis_hash(),
        merkle_root = %params.genesis.header.merkle_root,
        port = params.default_port,
        magic = %hex::encode(params.message_start),
        "network selected"
    );
    info!(
        bits = %CompactTarget::new(params.genesis.header.bits),
        spacing = params.consensus.pow_target_spacing,
        timespan = params.consensus.pow_target_timespan,
        halving = params.consensus.subsidy_halving_interval,
        "consensus"
    );
    for pos in DeploymentPos::ALL {
        let deployment = params.consensus.deployment(pos);
        info!(
            deployment = pos.name(),
            bit = deployment.bit,
            start_time = deployment.start_time,
            timeout = deployment.timeout,
            "version bits deployment"
        );
    }
    info!(
        dns_seeds = params.dns_seeds.len(),
        fixed_seeds = params.fixed_seeds.len(),
        checkpoints = params.checkpoints.map.len(),
        "bootstrap"
    );

    if json {
        let out = serde_json::to_string_pretty(params).context("serializing chain parameters")?;
        println!("{}", out);
    }
    Ok(())
}

async fn mine_genesis(params: &ChainParams, start_nonce: u32, threads: Option<usize>) -> anyhow::Result<()> {
    let num_threads = threads.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    });
    let ranges = partition_nonces(start_nonce, u32::try_from(num_threads).unwrap_or(u32::MAX));
    let template = params.genesis.clone();
    let miner = GenesisMiner::new();

    info!(
        network = params.network_id(),
        workers = ranges.len(),
        start_nonce,
        bits = %CompactTarget::new(template.header.bits),
        "mining genesis"
    );

    let (tx, mut rx) = mpsc::channel(ranges.len());
    for range in ranges {
        let m = miner.clone();
        let tx_worker = tx.clone();
        let block = template.clone();

        tokio::task::spawn_blocking(move || {
            let first = *range.start();
            let result = m.mine_with_progress(block, range, PROGRESS_INTERVAL, |hashes| {
                debug!(from = first, hashes, "worker progress");
            });
            let _ = tx_worker.blocking_send(result);
        });
    }

    // rx closes once every worker has reported
    drop(tx);

    let found = tokio::select! {
        found = first_success(&mut rx, &miner) => found?,
        _ = tokio::signal::ctrl_c() => {
            miner.stop();
            warn!("interrupted");
            return Ok(());
        }
    };

    let Some(block) = found else {
        bail!("no nonce at or above {} satisfies the genesis target", start_nonce);
    };

    let hash = block.hash();
    info!(nonce = block.header.nonce, %hash, merkle_root = %block.header.merkle_root, "found genesis");
    if hash == params.genesis_hash() {
        info!("matches the registered genesis block");
    } else {
        warn!(registered = %params.genesis_hash(), "differs from the registered genesis block");
    }
    Ok(())
}

async fn first_success(
    rx: &mut mpsc::Receiver<MiningResult>,
    miner: &GenesisMiner,
) -> anyhow::Result<Option<Block>> {
    while let Some(result) = rx.recv().await {
        match result {
            MiningResult::Success(block) => {
                // Stop all other workers immediately
                miner.stop();
                return Ok(Some(block));
            }
            MiningResult::InvalidTarget => bail!("genesis bits do not encode a valid target"),
            MiningResult::Interrupted | MiningResult::Exhausted => {}
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        let argv = std::iter::once("smail-params").chain(args.iter().copied());
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_to_main() {
        std::env::remove_var("SMAIL_CHAIN");
        let args = parse(&[]);
        assert_eq!(args.chain_name(), Ok("main".to_string()));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_chain_option() {
        assert_eq!(parse(&["--chain", "regtest"]).chain_name(), Ok("regtest".to_string()));
        // validated later by the registry, not by the parser
        assert_eq!(parse(&["--chain", "mainnet"]).chain_name(), Ok("mainnet".to_string()));
    }

    #[test]
    fn test_flags_override_chain() {
        assert_eq!(parse(&["--chain", "main", "--testnet"]).chain_name(), Ok("test".to_string()));
        assert_eq!(parse(&["--chain", "test", "--regtest"]).chain_name(), Ok("regtest".to_string()));
    }

    #[test]
    fn test_both_flags_conflict() {
        assert_eq!(
            parse(&["--testnet", "--regtest"]).chain_name(),
            Err(ConfigError::ConflictingNetworkFlags)
        );
    }

    #[test]
    fn test_mine_genesis_arguments() {
        let args = parse(&["--regtest", "mine-genesis", "--start-nonce", "5", "--threads", "2"]);
        match args.command {
            Some(Command::MineGenesis { start_nonce, threads }) => {
                assert_eq!(start_nonce, 5);
                assert_eq!(threads, Some(2));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
