use std::fmt;

/// The five operations the chaincode exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Read one record by key.
    QueryRecord,
    /// Scan every record in the configured key range.
    QueryAllRecords,
    /// Write a new record (or overwrite an existing key).
    RecordNew,
    /// Replace the custody status of an existing record.
    ChangeStatus,
    /// Write the ten demonstration records.
    SeedLedger,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::QueryRecord,
        Operation::QueryAllRecords,
        Operation::RecordNew,
        Operation::ChangeStatus,
        Operation::SeedLedger,
    ];

    /// Canonical wire name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operation::QueryRecord => "queryRecord",
            Operation::QueryAllRecords => "queryAllRecords",
            Operation::RecordNew => "recordNew",
            Operation::ChangeStatus => "changeStatus",
            Operation::SeedLedger => "seedLedger",
        }
    }

    /// Resolve a wire name. The names deployed clients of the tuna
    /// chaincode already send (`queryTuna`, `recordTuna`, ...) are accepted too.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "queryRecord" | "queryTuna" => Some(Operation::QueryRecord),
            "queryAllRecords" | "queryAllTuna" => Some(Operation::QueryAllRecords),
            "recordNew" | "recordTuna" => Some(Operation::RecordNew),
            "changeStatus" => Some(Operation::ChangeStatus),
            "seedLedger" | "initLedger" => Some(Operation::SeedLedger),
            _ => None,
        }
    }

    /// Argument count the operation reads.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Operation::QueryRecord => 1,
            Operation::QueryAllRecords | Operation::SeedLedger => 0,
            Operation::RecordNew => 8,
            Operation::ChangeStatus => 2,
        }
    }

    /// True if `count` arguments are acceptable.
    ///
    /// Operations that read arguments need exactly `arity()` of them. The
    /// argument-less operations ignore whatever they are given; deployed
    /// clients send `[""]` to `queryAllTuna` and `initLedger`.
    #[must_use]
    pub fn accepts_arg_count(self, count: usize) -> bool {
        match self.arity() {
            0 => true,
            arity => count == arity,
        }
    }

    /// True for operations that write to the world state.
    #[must_use]
    pub fn is_write(self) -> bool {
        matches!(
            self,
            Operation::RecordNew | Operation::ChangeStatus | Operation::SeedLedger
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
