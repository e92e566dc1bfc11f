//! # Tuna-Chain Chaincode Runtime
//!
//! ```text
//! chaincode-runtime [--state-file PATH] [--timeout-ms N] [--log-level L] init
//! chaincode-runtime [--state-file PATH] [--timeout-ms N] [--log-level L] invoke <function> [args...]
//! ```
//!
//! On success the payload is written to stdout. On a rejected invocation the
//! message goes to stderr and the process exits non-zero.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use chaincode_runtime::{init_logging, open_world_state, ChaincodeHost, RuntimeConfig};

/// Local host for the tuna catch chaincode
#[derive(Parser, Debug)]
#[command(name = "chaincode-runtime")]
#[command(about = "Run tuna chaincode operations against a local world state")]
struct Cli {
    /// Persist the world state to this file (in-memory when omitted)
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Platform call timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Activate the contract (performs no ledger writes)
    Init,
    /// Invoke one operation
    Invoke {
        /// Operation name, e.g. queryRecord, recordNew, seedLedger
        function: String,
        /// Positional operation arguments
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = RuntimeConfig::from_env();
    if let Some(path) = cli.state_file {
        config.state_file = Some(path);
    }
    if let Some(ms) = cli.timeout_ms {
        config.invoke_timeout_ms = ms;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    init_logging(&config.log_level)?;
    config.validate()?;

    info!(
        version = tc_02_tuna_chaincode::VERSION,
        chaincode = tc_02_tuna_chaincode::CHAINCODE_NAME,
        state_file = ?config.state_file,
        timeout_ms = config.invoke_timeout_ms,
        "Starting chaincode runtime"
    );

    let store = open_world_state(&config)?;
    let host = ChaincodeHost::new(&config, store);

    let init = host.init().await;
    if !init.is_ok() {
        bail!("init failed: {}", init.message);
    }

    let response = match cli.command {
        Command::Init => init,
        Command::Invoke { function, args } => host.invoke(&function, args).await,
    };

    if !response.is_ok() {
        bail!("{}", response.message);
    }
    if !response.payload.is_empty() {
        println!("{}", String::from_utf8_lossy(&response.payload));
    }

    Ok(())
}
