//! Startup checks
//!
//! The descriptor itself never fails. These checks report what the bundler
//! runtime would reject when it reads the descriptor, so problems show up
//! before a dev server or build is started.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::{Config, PluginActivation};

/// A problem the bundler runtime would report at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Problem {
    #[error("no plugins are activated")]
    NoPlugins,

    #[error("plugin '{0}' is activated more than once")]
    DuplicatePlugin(&'static str),

    #[error("coldbox input list is empty")]
    EmptyInput,

    #[error("coldbox input '{0}' is listed more than once")]
    DuplicateInput(String),

    #[error("coldbox input '{entry}' does not exist: {}", .path.display())]
    MissingEntry { entry: String, path: PathBuf },

    #[error("public directory '{0}' must be relative to the project root")]
    AbsolutePublicDirectory(String),

    #[error("public directory '{directory}' does not exist: {}", .path.display())]
    MissingPublicDirectory { directory: String, path: PathBuf },
}

/// Check a descriptor against the project at `root`
pub fn check(config: &Config, root: &Path) -> Vec<Problem> {
    let mut problems = Vec::new();

    if config.plugins().is_empty() {
        problems.push(Problem::NoPlugins);
    }

    let mut seen = HashSet::new();
    for plugin in config.plugins() {
        if !seen.insert(plugin.name()) {
            problems.push(Problem::DuplicatePlugin(plugin.name()));
        }
    }

    for plugin in config.plugins() {
        if let PluginActivation::Coldbox(options) = plugin {
            if options.input.is_empty() {
                problems.push(Problem::EmptyInput);
            }

            let mut entries = HashSet::new();
            for entry in &options.input {
                if !entries.insert(clean_path(entry)) {
                    problems.push(Problem::DuplicateInput(entry.clone()));
                    continue;
                }

                let path = root.join(entry);
                if !path.is_file() {
                    problems.push(Problem::MissingEntry {
                        entry: entry.clone(),
                        path,
                    });
                }
            }

            let directory = &options.public_directory;
            if Path::new(directory).is_absolute() {
                problems.push(Problem::AbsolutePublicDirectory(directory.clone()));
            } else {
                let path = root.join(directory);
                if !path.is_dir() {
                    problems.push(Problem::MissingPublicDirectory {
                        directory: directory.clone(),
                        path,
                    });
                }
            }
        }
    }

    debug!("Startup check found {} problem(s)", problems.len());
    problems
}

/// Drop `.` and resolve `..` so equivalent entry paths compare equal
fn clean_path(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => continue,
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ => parts.push(part),
            },
            _ => parts.push(part),
        }
    }

    if path.starts_with('/') {
        format!("/{}", parts.join("/"))
    } else {
        parts.join("/")
    }
}
