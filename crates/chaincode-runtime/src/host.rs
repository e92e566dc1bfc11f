//! # Chaincode Host
//!
//! Stands in for the ledger platform around a single contract:
//!
//! 1. Owns the world state handle and passes it into every call
//! 2. Runs each invocation on a blocking task (the contract is synchronous)
//! 3. Bounds the invocation with the platform call timeout
//!
//! The timeout is enforced inside the world state handed to the contract
//! (`DeadlineWorldState`): past it, reads fail and no new write starts. The
//! blocking task cannot be cancelled, so when it overruns the host logs the
//! overrun and waits for it. The response is always the invocation's real
//! outcome, never a rejection covering a committed write.

use crate::config::RuntimeConfig;
use crate::deadline::DeadlineWorldState;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tc_01_world_state::{FileBackedWorldState, InMemoryWorldState, WorldState};
use tc_02_tuna_chaincode::ports::{Chaincode, Response};
use tc_02_tuna_chaincode::service::TunaChaincode;
use tokio::task::JoinError;
use tracing::{error, info, warn};

/// Open the world state selected by `config`.
pub fn open_world_state(config: &RuntimeConfig) -> Result<Arc<dyn WorldState>> {
    match &config.state_file {
        Some(path) => {
            let store = FileBackedWorldState::open(path)
                .with_context(|| format!("failed to open world state at {}", path.display()))?;
            Ok(Arc::new(store))
        }
        None => {
            info!("No state file configured, using in-memory world state");
            Ok(Arc::new(InMemoryWorldState::new()))
        }
    }
}

/// Hosts one contract against one world state.
pub struct ChaincodeHost {
    chaincode: Arc<dyn Chaincode>,
    store: Arc<dyn WorldState>,
    timeout: Duration,
}

impl ChaincodeHost {
    /// Host a `TunaChaincode` built from `config`.
    pub fn new(config: &RuntimeConfig, store: Arc<dyn WorldState>) -> Self {
        let chaincode = TunaChaincode::new(config.chaincode.clone());
        Self::with_chaincode(Arc::new(chaincode), store, config.invoke_timeout_ms)
    }

    /// Host an arbitrary contract.
    pub fn with_chaincode(
        chaincode: Arc<dyn Chaincode>,
        store: Arc<dyn WorldState>,
        timeout_ms: u64,
    ) -> Self {
        Self {
            chaincode,
            store,
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Shared handle to the hosted world state.
    pub fn store(&self) -> Arc<dyn WorldState> {
        Arc::clone(&self.store)
    }

    /// Activate the contract.
    pub async fn init(&self) -> Response {
        let chaincode = Arc::clone(&self.chaincode);
        let store = self.bounded_store();
        self.run("init", move || chaincode.init(&store)).await
    }

    /// Run one invocation.
    pub async fn invoke(&self, function: &str, args: Vec<String>) -> Response {
        let chaincode = Arc::clone(&self.chaincode);
        let store = self.bounded_store();
        let name = function.to_string();
        self.run(function, move || chaincode.invoke(&store, &name, &args))
            .await
    }

    fn bounded_store(&self) -> DeadlineWorldState {
        DeadlineWorldState::new(Arc::clone(&self.store), self.timeout)
    }

    async fn run<F>(&self, label: &str, call: F) -> Response
    where
        F: FnOnce() -> Response + Send + 'static,
    {
        let mut task = tokio::task::spawn_blocking(call);

        let joined = match tokio::time::timeout(self.timeout, &mut task).await {
            Ok(joined) => joined,
            Err(_) => {
                warn!(
                    function = label,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Invocation overran its call timeout, waiting for its outcome"
                );
                task.await
            }
        };

        Self::outcome(label, joined)
    }

    fn outcome(label: &str, joined: Result<Response, JoinError>) -> Response {
        match joined {
            Ok(response) => response,
            Err(join_err) => {
                error!(function = label, error = %join_err, "Invocation task failed");
                Response::error(format!("invocation {label} aborted: {join_err}"))
            }
        }
    }
}
