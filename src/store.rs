// Copyright 2026 The Mashq Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use mashq_core::ErrorReport;
use mashq_core::WordDocument;

/// The word store: a `words.json` file updated by reading the whole
/// document, modifying it, and writing it back. Callers that share a
/// store across tasks must hold a lock around each operation.
pub struct WordStore {
    path: PathBuf,
}

/// Which stage of a store operation failed. The serve API maps each
/// stage to its own response message.
#[derive(Debug)]
pub enum StoreError {
    Read(io::Error),
    Parse(serde_json::Error),
    Write(io::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Read(e) => write!(f, "failed to read the words file: {e}"),
            StoreError::Parse(e) => write!(f, "failed to parse the words file: {e}"),
            StoreError::Write(e) => write!(f, "failed to write the words file: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<StoreError> for ErrorReport {
    fn from(value: StoreError) -> Self {
        ErrorReport::new(value.to_string())
    }
}

/// The outcome of a bulk append.
pub struct BulkOutcome {
    /// How many of the submitted words were new.
    pub added: usize,
    /// How many words were submitted, duplicates included.
    pub submitted: usize,
}

impl WordStore {
    pub fn new(path: PathBuf) -> Self {
        WordStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<WordDocument, StoreError> {
        let text = fs::read_to_string(&self.path).map_err(StoreError::Read)?;
        WordDocument::from_json(&text).map_err(StoreError::Parse)
    }

    pub fn write(&self, document: &WordDocument) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(document)
            .map_err(|e| StoreError::Write(io::Error::other(e)))?;
        fs::write(&self.path, json).map_err(StoreError::Write)
    }

    /// Append a word unless it is already stored. Returns whether the
    /// word was added.
    pub fn append(&self, word: &str) -> Result<bool, StoreError> {
        let mut document = self.read()?;
        if !document.push_unique(word) {
            return Ok(false);
        }
        self.write(&document)?;
        Ok(true)
    }

    /// Append every submitted word that is not already stored, in one
    /// read-modify-write pass.
    pub fn append_bulk(&self, words: &[String]) -> Result<BulkOutcome, StoreError> {
        let mut document = self.read()?;
        let mut added = 0;
        for word in words {
            if document.push_unique(word) {
                added += 1;
            }
        }
        self.write(&document)?;
        Ok(BulkOutcome {
            added,
            submitted: words.len(),
        })
    }
}
