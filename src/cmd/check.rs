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

use mashq_core::Fallible;
use mashq_core::fail;
use mashq_core::is_fully_diacritized;

use crate::store::WordStore;
use crate::utils::WORDS_FILE;
use crate::utils::resolve_directory;

/// Check that every stored word is fully diacritized.
pub fn check_store(directory: Option<String>) -> Fallible<()> {
    let directory = resolve_directory(directory)?;
    let store = WordStore::new(directory.join(WORDS_FILE));
    let document = store.read()?;
    let bad: Vec<&String> = document
        .words
        .iter()
        .filter(|word| !is_fully_diacritized(word))
        .collect();
    if bad.is_empty() {
        println!(
            "{} words, all fully diacritized.",
            document.words.len()
        );
        Ok(())
    } else {
        for word in &bad {
            eprintln!("not fully diacritized: {word}");
        }
        fail(format!(
            "{} of {} words are not fully diacritized.",
            bad.len(),
            document.words.len()
        ))
    }
}
