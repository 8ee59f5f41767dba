//! Fixture files with named data sections
//!
//! A fixture is a plain text file divided into sections. A section begins
//! at a line `%% <name>` and runs until the next `%%` line or end of file.
//! Lines before the first delimiter belong to no section.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("fixture not found: {0}")]
    NotFound(PathBuf),

    #[error("section '{name}' not found in {path}")]
    MissingSection { name: String, path: PathBuf },

    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),
}

/// An on-disk fixture file.
#[derive(Debug, Clone)]
pub struct Fixture {
    path: PathBuf,
}

impl Fixture {
    /// Open an existing fixture file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FixtureError> {
        let path = path.into();
        if !path.is_file() {
            return Err(FixtureError::NotFound(path));
        }
        Ok(Fixture { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extract the body of a named section.
    ///
    /// The first matching section wins when a name repeats.
    pub fn section(&self, name: &str) -> Result<String, FixtureError> {
        let contents = fs::read_to_string(&self.path)?;
        extract_section(&contents, name).ok_or_else(|| FixtureError::MissingSection {
            name: name.to_string(),
            path: self.path.clone(),
        })
    }
}

fn extract_section(contents: &str, name: &str) -> Option<String> {
    let mut body: Option<String> = None;

    for line in contents.lines() {
        if let Some(header) = line.strip_prefix("%%") {
            if body.is_some() {
                // Next delimiter ends the section
                break;
            }
            if header.trim() == name {
                body = Some(String::new());
            }
        } else if let Some(body) = body.as_mut() {
            body.push_str(line);
            body.push('\n');
        }
    }

    body
}
