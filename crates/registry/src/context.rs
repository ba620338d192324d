use proofreg_primitives::Identity;

/// Execution context of a mutating registry call.
///
/// The registry never reads identity or time from its surroundings, whoever drives it supplies
/// both.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CallContext {
    caller: Identity,
    timestamp: u64,
}

impl CallContext {
    pub fn new(caller: Identity, timestamp: u64) -> Self {
        Self { caller, timestamp }
    }

    pub fn caller(&self) -> Identity {
        self.caller
    }

    /// Seconds since the unix epoch.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}
