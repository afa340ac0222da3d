//! Subprocess wrapper over the my-context binary

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Environment variable the tool reads to select its context home
pub const CONTEXT_HOME_ENV: &str = "MY_CONTEXT_HOME";

/// Optional flags for the `start` subcommand
#[derive(Debug, Default, Clone)]
pub struct StartOptions {
    /// Project name prefix (`--project`)
    pub project: Option<String>,
    /// Comma-separated labels (`--labels`)
    pub labels: Option<String>,
    /// Creating user or agent (`--created-by`)
    pub created_by: Option<String>,
}

/// Build the argument list for `start`
pub fn start_args(name: &str, options: &StartOptions) -> Vec<String> {
    let mut args = vec!["start".to_string(), name.to_string()];
    if let Some(ref project) = options.project {
        args.push("--project".to_string());
        args.push(project.clone());
    }
    if let Some(ref labels) = options.labels {
        args.push("--labels".to_string());
        args.push(labels.clone());
    }
    if let Some(ref created_by) = options.created_by {
        args.push("--created-by".to_string());
        args.push(created_by.clone());
    }
    args
}

/// Build the argument list for `note`
pub fn note_args(text: &str) -> Vec<String> {
    vec!["note".to_string(), text.to_string()]
}

/// Build the argument list for `file`
pub fn file_args(path: &str) -> Vec<String> {
    vec!["file".to_string(), path.to_string()]
}

/// Build the argument list for `signal create`
pub fn signal_create_args(name: &str) -> Vec<String> {
    vec!["signal".to_string(), "create".to_string(), name.to_string()]
}

/// Build the argument list for `stop`
pub fn stop_args() -> Vec<String> {
    vec!["stop".to_string()]
}

/// Handle to the external my-context binary
#[derive(Debug, Clone)]
pub struct MyContext {
    bin: PathBuf,
}

impl MyContext {
    pub fn new(bin: PathBuf) -> Self {
        Self { bin }
    }

    pub fn bin(&self) -> &Path {
        &self.bin
    }

    /// Run one subcommand against the given context home.
    ///
    /// The home is passed via the child's environment only. A non-zero
    /// exit prints the tool's stderr and is not propagated - demo-data
    /// generation continues past individual failures. Failing to spawn
    /// the binary at all is an error.
    pub fn run(&self, home: &Path, args: &[String]) -> Result<Output> {
        let output = Command::new(&self.bin)
            .args(args)
            .env(CONTEXT_HOME_ENV, home)
            .output()
            .with_context(|| format!("Failed to run: {}", self.bin.display()))?;

        if !output.status.success() {
            eprintln!(
                "{} {}",
                "Error:".red(),
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }

        Ok(output)
    }

    /// Start a new context
    pub fn start(&self, home: &Path, name: &str, options: &StartOptions) -> Result<Output> {
        println!("  Creating context: {}", name);
        self.run(home, &start_args(name, options))
    }

    /// Add a note to the active context
    pub fn note(&self, home: &Path, text: &str) -> Result<Output> {
        self.run(home, &note_args(text))
    }

    /// Associate a file with the active context
    pub fn file(&self, home: &Path, path: &str) -> Result<Output> {
        self.run(home, &file_args(path))
    }

    /// Create a signal
    pub fn signal_create(&self, home: &Path, name: &str) -> Result<Output> {
        self.run(home, &signal_create_args(name))
    }

    /// Stop the active context
    pub fn stop(&self, home: &Path) -> Result<Output> {
        self.run(home, &stop_args())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_args_name_only() {
        let args = start_args("payment-retry-logic", &StartOptions::default());
        assert_eq!(args, vec!["start", "payment-retry-logic"]);
    }

    #[test]
    fn test_start_args_all_flags() {
        let options = StartOptions {
            project: Some("payment-service".to_string()),
            labels: Some("feature,backend".to_string()),
            created_by: Some("alice".to_string()),
        };
        let args = start_args("oauth-integration", &options);
        assert_eq!(
            args,
            vec![
                "start",
                "oauth-integration",
                "--project",
                "payment-service",
                "--labels",
                "feature,backend",
                "--created-by",
                "alice",
            ]
        );
    }

    #[test]
    fn test_signal_create_args() {
        assert_eq!(
            signal_create_args("api-v2-staging-ready"),
            vec!["signal", "create", "api-v2-staging-ready"]
        );
    }

    #[test]
    fn test_arg_builders_are_deterministic() {
        // Rerunning a scenario must issue the same invocation sequence
        let options = StartOptions {
            project: Some("qa-suite".to_string()),
            labels: None,
            created_by: Some("carol".to_string()),
        };
        assert_eq!(
            start_args("payment-flow-testing", &options),
            start_args("payment-flow-testing", &options)
        );
        assert_eq!(note_args("✅ Test passed"), note_args("✅ Test passed"));
        assert_eq!(file_args("a/b.go"), file_args("a/b.go"));
        assert_eq!(stop_args(), stop_args());
    }
}
