//! # Typed Requests
//!
//! Positional string arguments are decoded exactly once, here. Handlers only
//! ever see a `ChaincodeRequest`, so argument order and count cannot drift
//! between the boundary and the handler.

use super::entities::TunaRecord;
use super::operation::Operation;
use crate::errors::ChaincodeError;

/// A decoded invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChaincodeRequest {
    /// `queryRecord [key]`
    QueryRecord { key: String },
    /// `queryAllRecords []`
    QueryAllRecords,
    /// `recordNew [key, id, temperature, humidity, location, timestamp, agreement, status]`
    RecordNew { key: String, record: TunaRecord },
    /// `changeStatus [key, status]`
    ChangeStatus { key: String, status: String },
    /// `seedLedger []`
    SeedLedger,
}

impl ChaincodeRequest {
    /// Decode `(function, args)` as received from the platform.
    ///
    /// # Errors
    ///
    /// - `UnknownOperation` if `function` names no operation
    /// - `Arity` if an operation that reads arguments gets the wrong count
    pub fn parse<S: AsRef<str>>(function: &str, args: &[S]) -> Result<Self, ChaincodeError> {
        let operation = Operation::from_name(function)
            .ok_or_else(|| ChaincodeError::UnknownOperation(function.to_string()))?;
        Self::from_args(operation, args)
    }

    /// Decode the arguments of an already resolved operation.
    pub fn from_args<S: AsRef<str>>(
        operation: Operation,
        args: &[S],
    ) -> Result<Self, ChaincodeError> {
        if !operation.accepts_arg_count(args.len()) {
            return Err(ChaincodeError::Arity {
                operation,
                expected: operation.arity(),
                actual: args.len(),
            });
        }

        let arg = |i: usize| args[i].as_ref().to_string();

        let request = match operation {
            Operation::QueryRecord => ChaincodeRequest::QueryRecord { key: arg(0) },
            Operation::QueryAllRecords => ChaincodeRequest::QueryAllRecords,
            Operation::RecordNew => ChaincodeRequest::RecordNew {
                key: arg(0),
                record: TunaRecord {
                    id: arg(1),
                    temperature: arg(2),
                    humidity: arg(3),
                    location: arg(4),
                    timestamp: arg(5),
                    agreement: arg(6),
                    status: arg(7),
                },
            },
            Operation::ChangeStatus => ChaincodeRequest::ChangeStatus {
                key: arg(0),
                status: arg(1),
            },
            Operation::SeedLedger => ChaincodeRequest::SeedLedger,
        };
        Ok(request)
    }

    /// The operation this request invokes.
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            ChaincodeRequest::QueryRecord { .. } => Operation::QueryRecord,
            ChaincodeRequest::QueryAllRecords => Operation::QueryAllRecords,
            ChaincodeRequest::RecordNew { .. } => Operation::RecordNew,
            ChaincodeRequest::ChangeStatus { .. } => Operation::ChangeStatus,
            ChaincodeRequest::SeedLedger => Operation::SeedLedger,
        }
    }

    /// The single key this request addresses, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            ChaincodeRequest::QueryRecord { key }
            | ChaincodeRequest::RecordNew { key, .. }
            | ChaincodeRequest::ChangeStatus { key, .. } => Some(key),
            ChaincodeRequest::QueryAllRecords | ChaincodeRequest::SeedLedger => None,
        }
    }
}
