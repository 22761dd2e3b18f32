//! In-flight request bookkeeping
//!
//! Every backend call gets a token from one monotonically increasing sequence.
//! Each [`RequestKind`] remembers only its latest token, so a completion whose
//! token is no longer current is stale and must be dropped.

use serde::Serialize;

/// Identifies one backend call
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(pub u64);

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three backend operations that can be in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Analyze,
    Migrate,
    GenerateTests,
}

impl RequestKind {
    pub fn label(self) -> &'static str {
        match self {
            RequestKind::Analyze => "analyze",
            RequestKind::Migrate => "migrate",
            RequestKind::GenerateTests => "generate-tests",
        }
    }
}

/// Latest in-flight token per request kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestTracker {
    last_issued: u64,
    analyze: Option<RequestToken>,
    migrate: Option<RequestToken>,
    generate_tests: Option<RequestToken>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, kind: RequestKind) -> &mut Option<RequestToken> {
        match kind {
            RequestKind::Analyze => &mut self.analyze,
            RequestKind::Migrate => &mut self.migrate,
            RequestKind::GenerateTests => &mut self.generate_tests,
        }
    }

    /// Issue a new token for `kind`, superseding any earlier one
    pub fn begin(&mut self, kind: RequestKind) -> RequestToken {
        self.last_issued += 1;
        let token = RequestToken(self.last_issued);
        *self.slot(kind) = Some(token);
        token
    }

    /// Whether `token` is the current in-flight token for `kind`
    pub fn is_current(&self, kind: RequestKind, token: RequestToken) -> bool {
        self.current(kind) == Some(token)
    }

    pub fn current(&self, kind: RequestKind) -> Option<RequestToken> {
        match kind {
            RequestKind::Analyze => self.analyze,
            RequestKind::Migrate => self.migrate,
            RequestKind::GenerateTests => self.generate_tests,
        }
    }

    /// Mark `token` as finished
    ///
    /// Returns `false` (and changes nothing) if `token` is stale.
    pub fn finish(&mut self, kind: RequestKind, token: RequestToken) -> bool {
        let slot = self.slot(kind);
        if *slot == Some(token) {
            *slot = None;
            true
        } else {
            false
        }
    }

    /// Forget the in-flight request for `kind`; its completion becomes stale
    pub fn cancel(&mut self, kind: RequestKind) {
        *self.slot(kind) = None;
    }

    pub fn is_pending(&self, kind: RequestKind) -> bool {
        self.current(kind).is_some()
    }

    pub fn any_pending(&self) -> bool {
        self.analyze.is_some() || self.migrate.is_some() || self.generate_tests.is_some()
    }
}
