//! Test utilities for backend consumers
//!
//! [`MockBackend`] replays scripted replies per endpoint and records every call,
//! so reducer and headless tests run without a network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use codemigrate_core::prelude::*;
use codemigrate_core::decode_analysis_str;

use crate::backend::MigrationBackend;
use crate::protocol::{AnalyzeResponse, HealthResponse, MigrateResponse, UploadedFile};

/// A scripted outcome for one call
#[derive(Debug, Clone)]
pub enum Scripted<T> {
    Reply(T),
    /// Non-2xx response with the given status and body
    Status(u16, String),
    /// Connection-level failure
    Transport(String),
}

impl<T> Scripted<T> {
    fn into_result(self) -> Result<T> {
        match self {
            Scripted::Reply(value) => Ok(value),
            Scripted::Status(status, body) => Err(Error::backend_status(status, body)),
            Scripted::Transport(message) => Err(Error::transport(message)),
        }
    }
}

/// A call observed by [`MockBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Analyze { file_name: String, len: usize },
    Migrate { code: String, target_lang: String },
    GenerateTests { migrated_code: String },
    Health,
}

#[derive(Debug, Default)]
struct MockState {
    analyze: VecDeque<Scripted<AnalyzeResponse>>,
    migrate: VecDeque<Scripted<MigrateResponse>>,
    generate_tests: VecDeque<Scripted<String>>,
    health: VecDeque<Scripted<HealthResponse>>,
    calls: Vec<RecordedCall>,
}

/// Scripted in-memory backend
///
/// Clones share the same script and call log. An endpoint with nothing
/// scripted fails with a transport error.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut state)
    }

    pub fn push_analyze(&self, reply: Scripted<AnalyzeResponse>) -> &Self {
        self.with_state(|s| s.analyze.push_back(reply));
        self
    }

    pub fn push_migrate(&self, reply: Scripted<MigrateResponse>) -> &Self {
        self.with_state(|s| s.migrate.push_back(reply));
        self
    }

    pub fn push_generate_tests(&self, reply: Scripted<String>) -> &Self {
        self.with_state(|s| s.generate_tests.push_back(reply));
        self
    }

    pub fn push_health(&self, reply: Scripted<HealthResponse>) -> &Self {
        self.with_state(|s| s.health.push_back(reply));
        self
    }

    /// All calls so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.with_state(|s| s.calls.clone())
    }

    fn next<T>(
        &self,
        call: RecordedCall,
        queue: impl FnOnce(&mut MockState) -> &mut VecDeque<Scripted<T>>,
    ) -> Result<T> {
        let name = format!("{:?}", call);
        self.with_state(|s| {
            s.calls.push(call);
            queue(s).pop_front()
        })
        .unwrap_or_else(|| Scripted::Transport(format!("no scripted reply for {}", name)))
        .into_result()
    }
}

impl MigrationBackend for MockBackend {
    async fn analyze(&self, file: UploadedFile) -> Result<AnalyzeResponse> {
        let call = RecordedCall::Analyze {
            file_name: file.name,
            len: file.bytes.len(),
        };
        self.next(call, |s| &mut s.analyze)
    }

    async fn migrate(&self, code: String, target_lang: String) -> Result<MigrateResponse> {
        self.next(RecordedCall::Migrate { code, target_lang }, |s| &mut s.migrate)
    }

    async fn generate_tests(&self, migrated_code: String) -> Result<String> {
        self.next(RecordedCall::GenerateTests { migrated_code }, |s| {
            &mut s.generate_tests
        })
    }

    async fn health(&self) -> Result<HealthResponse> {
        self.next(RecordedCall::Health, |s| &mut s.health)
    }
}

/// Analyze reply whose `analysis` is the given JSON text
pub fn analyze_reply(analysis_json: &str, source_code: &str) -> AnalyzeResponse {
    AnalyzeResponse {
        analysis: decode_analysis_str(analysis_json),
        source_code: source_code.to_string(),
        filename: None,
        source: None,
    }
}

/// Migrate reply with explicit steps
pub fn migrate_reply(migrated_code: &str, steps: &[&str]) -> MigrateResponse {
    MigrateResponse {
        migrated_code: migrated_code.to_string(),
        migration_steps: Some(steps.iter().map(|s| s.to_string()).collect()),
    }
}

pub fn health_reply(status: &str) -> HealthResponse {
    HealthResponse {
        status: status.to_string(),
        ai_engine: None,
    }
}
