//! # Tuna Chaincode Service
//!
//! Binds the router to the `Chaincode` entry points.
//!
//! Each invocation runs inside an `invoke` span carrying a fresh transaction
//! id, the operation name and whether it writes, so every handler log line
//! can be traced back to the call that produced it.

use crate::domain::{ChaincodeConfig, ChaincodeRequest};
use crate::errors::ChaincodeError;
use crate::ports::inbound::{Chaincode, Response};
use crate::router;
use tc_01_world_state::WorldState;
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

/// The tuna catch contract.
#[derive(Debug, Clone, Default)]
pub struct TunaChaincode {
    config: ChaincodeConfig,
}

impl TunaChaincode {
    /// Create a contract with the given configuration.
    pub fn new(config: ChaincodeConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &ChaincodeConfig {
        &self.config
    }

    /// Execute an already decoded request.
    ///
    /// This is the typed entry point; `invoke` is the same path behind string
    /// decoding and `Response` folding.
    pub fn execute(
        &self,
        store: &dyn WorldState,
        request: &ChaincodeRequest,
    ) -> Result<Vec<u8>, ChaincodeError> {
        let tx_id = Uuid::new_v4();
        let operation = request.operation();
        let span = info_span!("invoke", %tx_id, %operation, write = operation.is_write());
        let _enter = span.enter();

        debug!(key = ?request.key(), "Executing request");
        let result = router::route(store, &self.config, request);
        match &result {
            Ok(_) if operation.is_write() => info!("Write committed"),
            Ok(payload) => debug!(bytes = payload.len(), "Request succeeded"),
            Err(err) if err.is_client_error() => warn!(error = %err, "Request rejected"),
            Err(err) => warn!(error = %err, "Request failed"),
        }
        result
    }

    /// Decode `(function, args)` and execute.
    pub fn call<S: AsRef<str>>(
        &self,
        store: &dyn WorldState,
        function: &str,
        args: &[S],
    ) -> Result<Vec<u8>, ChaincodeError> {
        let request = ChaincodeRequest::parse(function, args).map_err(|err| {
            warn!(function, error = %err, "Rejected invocation");
            err
        })?;
        self.execute(store, &request)
    }
}

impl Chaincode for TunaChaincode {
    fn init(&self, _store: &dyn WorldState) -> Response {
        info!(
            range_start = %self.config.range_start,
            range_end = %self.config.range_end,
            "Tuna chaincode initialised"
        );
        Response::success(Vec::new())
    }

    fn invoke(&self, store: &dyn WorldState, function: &str, args: &[String]) -> Response {
        self.call(store, function, args).into()
    }
}
