//! File argument resolution
//!
//! Literal paths are checked one by one. Arguments containing glob
//! metacharacters are expanded with `glob`. Each argument resolves on its
//! own so one bad argument does not stop the others.

use crate::error::CliError;
use glob::glob;
use std::collections::HashSet;
use std::path::PathBuf;

/// Outcome of resolving one command-line argument
#[derive(Debug)]
pub enum ResolvedInput {
    /// An existing file to process
    File(PathBuf),
    /// An argument that produced no file
    Failed {
        /// The argument as given
        argument: String,
        /// Why it failed
        error: CliError,
    },
}

fn is_pattern(argument: &str) -> bool {
    argument.contains(['*', '?', '['])
}

/// Resolve arguments to files, keeping argument order and dropping duplicates
pub fn resolve_inputs(arguments: &[String]) -> Vec<ResolvedInput> {
    let mut resolved = Vec::new();
    let mut seen = HashSet::new();

    for argument in arguments {
        if !is_pattern(argument) {
            let path = PathBuf::from(argument);
            if !path.is_file() {
                resolved.push(ResolvedInput::Failed {
                    argument: argument.clone(),
                    error: CliError::FileNotFound(argument.clone()),
                });
            } else if seen.insert(path.clone()) {
                resolved.push(ResolvedInput::File(path));
            }
            continue;
        }

        let paths = match glob(argument) {
            Ok(paths) => paths,
            Err(e) => {
                resolved.push(ResolvedInput::Failed {
                    argument: argument.clone(),
                    error: CliError::InvalidPattern(format!("{argument} ({e})")),
                });
                continue;
            }
        };

        let mut matched: Vec<PathBuf> = paths
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    log::warn!("Error resolving pattern {argument}: {e}");
                    None
                }
            })
            .filter(|path| path.is_file())
            .collect();
        matched.sort();

        if matched.is_empty() {
            resolved.push(ResolvedInput::Failed {
                argument: argument.clone(),
                error: CliError::NoMatches(argument.clone()),
            });
            continue;
        }

        for path in matched {
            if seen.insert(path.clone()) {
                resolved.push(ResolvedInput::File(path));
            }
        }
    }

    resolved
}
