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

//! mashq-core: Core library for the mashq worksheet generator.
//!
//! This library provides the pure logic behind spelling worksheets:
//! - Arabic letter and diacritic mark tables
//! - Full-diacritization validation of words
//! - Letter/mark selection state and its preconditions
//! - Worksheet generation (single, pair, and word sections)
//! - Syllable mining from stored words
//! - The word store document and starter word list

pub mod chars;
pub mod error;
pub mod generator;
pub mod rng;
pub mod selection;
pub mod settings;
pub mod syllable;
pub mod validator;
pub mod wordlist;

// Re-exports for convenience
pub use chars::{ALL_MARKS, ALPHABET, Mark, Placement};
pub use error::{ErrorReport, Fallible, fail};
pub use generator::{Worksheet, build_worksheet, filter_words};
pub use selection::{Selection, SelectionError};
pub use settings::WorksheetSettings;
pub use validator::is_fully_diacritized;
pub use wordlist::{STARTER_WORDS, WordDocument, starter_document};
