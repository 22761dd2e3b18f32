//! Headless mode - NDJSON event output for scripting and CI
//!
//! Runs one upload → analyze → migrate (→ generate tests) pass without a
//! terminal and reports progress as newline-delimited JSON on stdout. Each
//! line carries an `event` tag and a millisecond `timestamp`.
//!
//! ```json
//! {"event":"started","api_base":"https://code-migrate-api.onrender.com","target":"React (Hooks)","file":"legacy.js","timestamp":1704700001000}
//! {"event":"analyze_completed","language":"jQuery","fallback":false,"raw":false,"timestamp":1704700002000}
//! {"event":"finished","success":true,"timestamp":1704700004000}
//! ```

pub mod runner;

use std::io::{self, Write};
use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use tracing::error;

/// Pipeline stage an event or failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Analyze,
    Migrate,
    GenerateTests,
}

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    Started {
        api_base: String,
        target: String,
        file: String,
        timestamp: i64,
    },

    /// A request was sent to the backend
    StageStarted { stage: Stage, timestamp: i64 },

    AnalyzeCompleted {
        language: String,
        /// Backend answered with its canned analysis
        fallback: bool,
        /// Analysis text was not valid JSON
        raw: bool,
        timestamp: i64,
    },

    MigrateCompleted {
        migrated_code: String,
        migration_steps: Vec<String>,
        timestamp: i64,
    },

    TestsGenerated { test_code: String, timestamp: i64 },

    Error {
        stage: Option<Stage>,
        message: String,
        detail: Option<String>,
        timestamp: i64,
    },

    Finished { success: bool, timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn started(api_base: &str, target: &str, file: &Path) -> Self {
        Self::Started {
            api_base: api_base.to_string(),
            target: target.to_string(),
            file: file.display().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn stage_started(stage: Stage) -> Self {
        Self::StageStarted {
            stage,
            timestamp: Self::now(),
        }
    }

    pub fn analyze_completed(language: &str, fallback: bool, raw: bool) -> Self {
        Self::AnalyzeCompleted {
            language: language.to_string(),
            fallback,
            raw,
            timestamp: Self::now(),
        }
    }

    pub fn migrate_completed(migrated_code: String, migration_steps: Vec<String>) -> Self {
        Self::MigrateCompleted {
            migrated_code,
            migration_steps,
            timestamp: Self::now(),
        }
    }

    pub fn tests_generated(test_code: String) -> Self {
        Self::TestsGenerated {
            test_code,
            timestamp: Self::now(),
        }
    }

    pub fn error(stage: Option<Stage>, message: String, detail: Option<String>) -> Self {
        Self::Error {
            stage,
            message,
            detail,
            timestamp: Self::now(),
        }
    }

    pub fn finished(success: bool) -> Self {
        Self::Finished {
            success,
            timestamp: Self::now(),
        }
    }
}
