//! Reader for a context home's persisted state
//!
//! my-context keeps one subdirectory per context containing `meta.json`,
//! `notes.log` and `files.log`, plus a home-level `state.json` holding the
//! active context name. Log lines are `RFC3339|text` with pipes, newlines
//! and backslashes escaped in the text part.

use anyhow::{Context as AnyhowContext, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Error for malformed log lines in a context home
#[derive(Debug, thiserror::Error)]
pub enum LogLineError {
    #[error("invalid log line format: {0}")]
    Format(String),
    #[error("invalid timestamp in log line: {0}")]
    Timestamp(String),
}

/// A context record from `meta.json`
#[derive(Debug, Clone, Deserialize)]
pub struct ContextRecord {
    pub name: String,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    pub status: String,
    #[serde(default)]
    pub is_archived: bool,
}

impl ContextRecord {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }

    /// Project name per the `"project: name"` convention; the full name
    /// when there is no colon.
    pub fn project(&self) -> &str {
        match self.name.split_once(':') {
            Some((project, _)) => project.trim(),
            None => self.name.trim(),
        }
    }
}

/// Home-level `state.json`
#[derive(Debug, Deserialize)]
struct AppState {
    #[serde(default)]
    active_context: Option<String>,
}

/// A timestamped note entry
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

/// A timestamped file association
#[derive(Debug, Clone, PartialEq)]
pub struct FileAssociation {
    pub timestamp: DateTime<Utc>,
    pub path: String,
}

/// Replace characters my-context rejects in directory names
pub fn sanitize_context_name(name: &str) -> String {
    name.replace(' ', "_").replace(['/', '\\'], "_")
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('|') => out.push('|'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn parse_log_line(line: &str) -> Result<(DateTime<Utc>, String), LogLineError> {
    let (stamp, text) = line
        .split_once('|')
        .ok_or_else(|| LogLineError::Format(line.to_string()))?;
    let timestamp = DateTime::parse_from_rfc3339(stamp)
        .map_err(|_| LogLineError::Timestamp(stamp.to_string()))?
        .with_timezone(&Utc);
    Ok((timestamp, unescape(text)))
}

/// One context home directory
#[derive(Debug, Clone)]
pub struct ContextHome {
    dir: PathBuf,
}

impl ContextHome {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    fn context_dir(&self, name: &str) -> PathBuf {
        self.dir.join(sanitize_context_name(name))
    }

    /// All context records in this home, sorted by start time.
    ///
    /// Entries without a parseable `meta.json` are skipped - one damaged
    /// context must not break a whole export.
    pub fn all_contexts(&self) -> Result<Vec<ContextRecord>> {
        let mut contexts = Vec::new();

        if !self.dir.is_dir() {
            return Ok(contexts);
        }

        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read: {}", self.dir.display()))?;

        for entry in entries.flatten() {
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let meta_path = entry.path().join("meta.json");
            if !meta_path.exists() {
                continue;
            }
            let content = fs::read_to_string(&meta_path)
                .with_context(|| format!("Failed to read: {}", meta_path.display()))?;
            match serde_json::from_str::<ContextRecord>(&content) {
                Ok(record) => contexts.push(record),
                Err(_) => continue,
            }
        }

        contexts.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        Ok(contexts)
    }

    /// Name of the active context from `state.json`, if any
    pub fn active_context_name(&self) -> Result<Option<String>> {
        let state_path = self.dir.join("state.json");
        if !state_path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&state_path)
            .with_context(|| format!("Failed to read: {}", state_path.display()))?;
        let state: AppState = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse: {}", state_path.display()))?;
        Ok(state.active_context)
    }

    /// Record of the active context, if any
    pub fn active_context(&self) -> Result<Option<ContextRecord>> {
        let Some(name) = self.active_context_name()? else {
            return Ok(None);
        };
        let meta_path = self.context_dir(&name).join("meta.json");
        if !meta_path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&meta_path)
            .with_context(|| format!("Failed to read: {}", meta_path.display()))?;
        let record = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse: {}", meta_path.display()))?;
        Ok(Some(record))
    }

    /// Distinct project names across all contexts, in first-seen order
    pub fn all_projects(&self) -> Result<Vec<String>> {
        let mut projects: Vec<String> = Vec::new();
        for context in self.all_contexts()? {
            let project = context.project().to_string();
            if !projects.contains(&project) {
                projects.push(project);
            }
        }
        Ok(projects)
    }

    /// Notes of a context, in log order
    pub fn notes(&self, context_name: &str) -> Result<Vec<Note>> {
        let log_path = self.context_dir(context_name).join("notes.log");
        Ok(read_log(&log_path)?
            .into_iter()
            .map(|(timestamp, text)| Note { timestamp, text })
            .collect())
    }

    /// File associations of a context, in log order
    pub fn files(&self, context_name: &str) -> Result<Vec<FileAssociation>> {
        let log_path = self.context_dir(context_name).join("files.log");
        Ok(read_log(&log_path)?
            .into_iter()
            .map(|(timestamp, path)| FileAssociation { timestamp, path })
            .collect())
    }
}

/// Read a `timestamp|text` log file; a missing file is an empty log
fn read_log(path: &Path) -> Result<Vec<(DateTime<Utc>, String)>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read: {}", path.display()))?;

    let mut entries = Vec::new();
    for line in content.lines() {
        if line.is_empty() {
            continue;
        }
        // Malformed lines are skipped, matching the tool's own tolerance
        if let Ok(entry) = parse_log_line(line) {
            entries.push(entry);
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_context(home: &Path, dir_name: &str, meta: &str) {
        let dir = home.join(dir_name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("meta.json"), meta).unwrap();
    }

    #[test]
    fn test_sanitize_context_name() {
        assert_eq!(sanitize_context_name("a b/c\\d"), "a_b_c_d");
        assert_eq!(sanitize_context_name("plain-name"), "plain-name");
    }

    #[test]
    fn test_parse_log_line() {
        let (stamp, text) =
            parse_log_line("2025-01-15T14:20:32Z|DECISION: use backoff").unwrap();
        assert_eq!(text, "DECISION: use backoff");
        assert_eq!(stamp.to_rfc3339(), "2025-01-15T14:20:32+00:00");
    }

    #[test]
    fn test_parse_log_line_unescapes() {
        let (_, text) = parse_log_line("2025-01-15T14:20:32Z|a\\|b\\nc\\\\d").unwrap();
        assert_eq!(text, "a|b\nc\\d");
    }

    #[test]
    fn test_parse_log_line_rejects_garbage() {
        assert!(parse_log_line("no pipe here").is_err());
        assert!(parse_log_line("not-a-time|text").is_err());
    }

    #[test]
    fn test_project_extraction() {
        let record = ContextRecord {
            name: "payment-service: payment-retry-logic".to_string(),
            start_time: Utc::now(),
            end_time: None,
            status: "active".to_string(),
            is_archived: false,
        };
        assert_eq!(record.project(), "payment-service");

        let record = ContextRecord {
            name: "standalone".to_string(),
            ..record
        };
        assert_eq!(record.project(), "standalone");
    }

    #[test]
    fn test_all_contexts_and_projects() {
        let tmp = tempfile::tempdir().unwrap();
        let home = tmp.path();
        seed_context(
            home,
            "payment-service:_retry",
            r#"{"name":"payment-service: retry","start_time":"2025-01-15T10:00:00Z","end_time":"2025-01-15T11:00:00Z","status":"stopped"}"#,
        );
        seed_context(
            home,
            "web-app:_checkout",
            r#"{"name":"web-app: checkout","start_time":"2025-01-15T12:00:00Z","status":"active"}"#,
        );
        // Damaged context must be skipped, not fatal
        seed_context(home, "broken", "{not json");

        let store = ContextHome::new(home);
        let contexts = store.all_contexts().unwrap();
        assert_eq!(contexts.len(), 2);
        assert_eq!(contexts[0].name, "payment-service: retry");
        assert!(contexts[1].is_active());

        let projects = store.all_projects().unwrap();
        assert_eq!(projects, vec!["payment-service", "web-app"]);
    }

    #[test]
    fn test_active_context_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let home = tmp.path();
        seed_context(
            home,
            "qa-suite:_testing",
            r#"{"name":"qa-suite: testing","start_time":"2025-01-15T10:00:00Z","status":"active"}"#,
        );
        fs::write(
            home.join("state.json"),
            r#"{"active_context":"qa-suite: testing","last_updated":"2025-01-15T10:00:00Z"}"#,
        )
        .unwrap();

        let store = ContextHome::new(home);
        let active = store.active_context().unwrap().unwrap();
        assert_eq!(active.name, "qa-suite: testing");
    }

    #[test]
    fn test_missing_home_is_empty() {
        let store = ContextHome::new("/nonexistent/context-home");
        assert!(!store.exists());
        assert!(store.all_contexts().unwrap().is_empty());
        assert!(store.active_context_name().unwrap().is_none());
    }

    #[test]
    fn test_notes_and_files() {
        let tmp = tempfile::tempdir().unwrap();
        let home = tmp.path();
        let dir = home.join("ctx");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("notes.log"),
            "2025-01-15T14:20:32Z|first note\n2025-01-15T14:28:15Z|second \\| note\n",
        )
        .unwrap();
        fs::write(dir.join("files.log"), "2025-01-15T14:30:00Z|/src/retry.go\n").unwrap();

        let store = ContextHome::new(home);
        let notes = store.notes("ctx").unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1].text, "second | note");

        let files = store.files("ctx").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "/src/retry.go");

        // Context with no logs at all reads as empty
        assert!(store.notes("missing").unwrap().is_empty());
    }
}
