//! Core domain types for the migration workflow

use serde::{Deserialize, Serialize};

/// Text shown in the source view before any file has been analyzed
pub const SOURCE_PLACEHOLDER: &str = "// Upload a file to see code...";

/// Step substituted when the backend omits `migration_steps`
pub const DEFAULT_MIGRATION_STEP: &str = "Review code for changes.";

/// Risk shown when the analysis carries no `risks` field at all
pub const DEFAULT_RISK: &str = "High coupling detected";

/// Language shown when the analysis does not name one
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Backend `source` marker for a canned analysis returned when the AI call failed
pub const FALLBACK_ANALYSIS_SOURCE: &str = "MOCK_FALLBACK";

// ─────────────────────────────────────────────────────────────────
// Tabs
// ─────────────────────────────────────────────────────────────────

/// The four read-only views of the main panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    /// Uploaded source text
    #[default]
    Code,
    /// Structured analysis report
    Report,
    /// Side-by-side source vs migrated code
    Diff,
    /// Numbered manual migration steps
    Steps,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Code, Tab::Report, Tab::Diff, Tab::Steps];

    /// Tab title as shown in the tab bar
    pub fn title(self) -> &'static str {
        match self {
            Tab::Code => "Source Code",
            Tab::Report => "Analysis Report",
            Tab::Diff => "Migration Diff",
            Tab::Steps => "Migration Guide",
        }
    }

    /// Whether this tab needs migrated code to be meaningful
    pub fn requires_migration(self) -> bool {
        matches!(self, Tab::Diff | Tab::Steps)
    }

    /// Position in the tab bar (0-based)
    pub fn index(self) -> usize {
        match self {
            Tab::Code => 0,
            Tab::Report => 1,
            Tab::Diff => 2,
            Tab::Steps => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }
}

// ─────────────────────────────────────────────────────────────────
// Language selectors
// ─────────────────────────────────────────────────────────────────

/// Source language choice (display-only, never sent to the backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourceLanguage {
    #[default]
    AutoDetect,
    JQuery,
    Python2,
    AngularJs,
    JavaScriptEs5,
    ReactClassComponents,
}

impl SourceLanguage {
    pub const ALL: [SourceLanguage; 6] = [
        SourceLanguage::AutoDetect,
        SourceLanguage::JQuery,
        SourceLanguage::Python2,
        SourceLanguage::AngularJs,
        SourceLanguage::JavaScriptEs5,
        SourceLanguage::ReactClassComponents,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SourceLanguage::AutoDetect => "Auto-Detect",
            SourceLanguage::JQuery => "jQuery",
            SourceLanguage::Python2 => "Python 2",
            SourceLanguage::AngularJs => "AngularJS",
            SourceLanguage::JavaScriptEs5 => "JavaScript (ES5)",
            SourceLanguage::ReactClassComponents => "React Class Components",
        }
    }

    /// Parse from either the label or the variant name (case-insensitive)
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim();
        Self::ALL.into_iter().find(|lang| {
            lang.label().eq_ignore_ascii_case(needle)
                || format!("{:?}", lang).eq_ignore_ascii_case(needle)
        })
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

/// Target language choice, sent to `/migrate` as `target_lang`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[default]
    ReactHooks,
    Vue3,
    Python3,
    AngularModern,
    JavaScriptEs6,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 5] = [
        TargetLanguage::ReactHooks,
        TargetLanguage::Vue3,
        TargetLanguage::Python3,
        TargetLanguage::AngularModern,
        TargetLanguage::JavaScriptEs6,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TargetLanguage::ReactHooks => "React (Hooks)",
            TargetLanguage::Vue3 => "Vue.js 3",
            TargetLanguage::Python3 => "Python 3",
            TargetLanguage::AngularModern => "Angular (Modern)",
            TargetLanguage::JavaScriptEs6 => "JavaScript (ES6+)",
        }
    }

    /// Value sent verbatim as `target_lang`
    pub fn wire_value(self) -> &'static str {
        match self {
            TargetLanguage::JavaScriptEs6 => "JavaScript ES6+",
            other => other.label(),
        }
    }

    /// Parse from the label, the wire value or the variant name (case-insensitive)
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim();
        Self::ALL.into_iter().find(|lang| {
            lang.label().eq_ignore_ascii_case(needle)
                || lang.wire_value().eq_ignore_ascii_case(needle)
                || format!("{:?}", lang).eq_ignore_ascii_case(needle)
        })
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let pos = all.iter().position(|x| *x == current).unwrap_or(0);
    all[(pos + step) % all.len()]
}

// ─────────────────────────────────────────────────────────────────
// Analysis
// ─────────────────────────────────────────────────────────────────

/// Structured assessment of uploaded source code
///
/// Every field is optional on the wire; the report view applies fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub complexity: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub risks: Option<Vec<String>>,
    #[serde(default)]
    pub modernization_suggestions: Option<Vec<String>>,
}

impl AnalysisResult {
    /// Detected language, or `Unknown`
    pub fn language_or_unknown(&self) -> &str {
        self.language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(UNKNOWN_LANGUAGE)
    }

    /// Risks to display; a missing field falls back to a single default risk,
    /// an explicitly empty list stays empty
    pub fn risks_or_default(&self) -> Vec<String> {
        match &self.risks {
            Some(risks) => risks.clone(),
            None => vec![DEFAULT_RISK.to_string()],
        }
    }

    pub fn suggestions(&self) -> &[String] {
        self.modernization_suggestions.as_deref().unwrap_or(&[])
    }
}

/// Analysis as delivered by the backend, normalized at the boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnalysisPayload {
    /// Parsed JSON analysis
    Structured(AnalysisResult),
    /// Text that could not be parsed; rendered best-effort
    Raw(String),
}

impl AnalysisPayload {
    pub fn structured(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisPayload::Structured(result) => Some(result),
            AnalysisPayload::Raw(_) => None,
        }
    }

    pub fn language(&self) -> &str {
        match self {
            AnalysisPayload::Structured(result) => result.language_or_unknown(),
            AnalysisPayload::Raw(_) => UNKNOWN_LANGUAGE,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, AnalysisPayload::Raw(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_indices_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_index(tab.index()), Some(tab));
        }
        assert_eq!(Tab::from_index(4), None);
    }

    #[test]
    fn test_tab_requires_migration() {
        assert!(!Tab::Code.requires_migration());
        assert!(!Tab::Report.requires_migration());
        assert!(Tab::Diff.requires_migration());
        assert!(Tab::Steps.requires_migration());
    }

    #[test]
    fn test_tab_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tab::Diff).unwrap(), "\"diff\"");
    }

    #[test]
    fn test_target_wire_values() {
        assert_eq!(TargetLanguage::ReactHooks.wire_value(), "React (Hooks)");
        assert_eq!(TargetLanguage::Vue3.wire_value(), "Vue.js 3");
        assert_eq!(TargetLanguage::JavaScriptEs6.label(), "JavaScript (ES6+)");
        assert_eq!(TargetLanguage::JavaScriptEs6.wire_value(), "JavaScript ES6+");
    }

    #[test]
    fn test_target_cycle_wraps() {
        assert_eq!(TargetLanguage::JavaScriptEs6.next(), TargetLanguage::ReactHooks);
        assert_eq!(TargetLanguage::ReactHooks.previous(), TargetLanguage::JavaScriptEs6);
        assert_eq!(TargetLanguage::ReactHooks.next(), TargetLanguage::Vue3);
    }

    #[test]
    fn test_source_cycle_wraps() {
        assert_eq!(
            SourceLanguage::ReactClassComponents.next(),
            SourceLanguage::AutoDetect
        );
        assert_eq!(
            SourceLanguage::AutoDetect.previous(),
            SourceLanguage::ReactClassComponents
        );
    }

    #[test]
    fn test_language_parse() {
        assert_eq!(TargetLanguage::parse("python 3"), Some(TargetLanguage::Python3));
        assert_eq!(
            TargetLanguage::parse("JavaScript ES6+"),
            Some(TargetLanguage::JavaScriptEs6)
        );
        assert_eq!(TargetLanguage::parse("Vue3"), Some(TargetLanguage::Vue3));
        assert_eq!(TargetLanguage::parse("COBOL"), None);
        assert_eq!(SourceLanguage::parse("jquery"), Some(SourceLanguage::JQuery));
    }

    #[test]
    fn test_analysis_fallbacks() {
        let analysis = AnalysisResult::default();
        assert_eq!(analysis.language_or_unknown(), "Unknown");
        assert_eq!(analysis.risks_or_default(), vec![DEFAULT_RISK.to_string()]);
        assert!(analysis.suggestions().is_empty());
    }

    #[test]
    fn test_empty_risks_stay_empty() {
        let analysis = AnalysisResult {
            risks: Some(vec![]),
            ..Default::default()
        };
        assert!(analysis.risks_or_default().is_empty());
    }

    #[test]
    fn test_raw_payload_language_unknown() {
        let payload = AnalysisPayload::Raw("not json".into());
        assert_eq!(payload.language(), "Unknown");
        assert!(payload.structured().is_none());
        assert!(payload.is_raw());
    }
}
