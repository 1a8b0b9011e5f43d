#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Busy,
    Succeeded,
    Failed,
}

/// Per-controller request lifecycle, driven by discrete events and free of
/// any rendering concern.
///
/// Each attempt gets a monotonically increasing sequence number from
/// [`Workflow::begin`]; a completion whose number is not the latest issued is
/// discarded, so a stale in-flight response can never overwrite the outcome
/// of a request started later.
#[derive(Debug)]
pub struct Workflow<T> {
    phase: Phase,
    error: Option<String>,
    result: Option<T>,
    issued: u64,
}

impl<T> Default for Workflow<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            error: None,
            result: None,
            issued: 0,
        }
    }
}

impl<T> Workflow<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn busy(&self) -> bool {
        self.phase == Phase::Busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Start a new attempt: clears both terminal fields, enters `Busy` and
    /// returns the sequence number identifying the attempt.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.phase = Phase::Busy;
        self.error = None;
        self.result = None;
        self.issued
    }

    /// Terminal event for the attempt tagged `seq`. Returns false when the
    /// completion is stale and was discarded. A failed completion stores the
    /// message and leaves the result field untouched.
    pub fn finish(&mut self, seq: u64, outcome: Result<T, String>) -> bool {
        if seq != self.issued {
            return false;
        }
        match outcome {
            Ok(value) => {
                self.phase = Phase::Succeeded;
                self.result = Some(value);
                self.error = None;
            }
            Err(message) => {
                self.phase = Phase::Failed;
                self.error = Some(message);
            }
        }
        true
    }

    /// Failure that never reached the network (missing file, missing base
    /// URL). Resets the attempt like `begin` but never passes through `Busy`,
    /// and invalidates any response still in flight.
    pub fn fail_local(&mut self, message: impl Into<String>) {
        self.issued += 1;
        self.phase = Phase::Failed;
        self.result = None;
        self.error = Some(message.into());
    }
}
