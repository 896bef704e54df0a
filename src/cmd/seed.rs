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
use mashq_core::starter_document;

use crate::store::WordStore;
use crate::utils::WORDS_FILE;
use crate::utils::resolve_directory;

/// Create a words file with the built-in starter words. Refuses to
/// overwrite an existing store.
pub fn seed_store(directory: Option<String>) -> Fallible<()> {
    let directory = resolve_directory(directory)?;
    let store = WordStore::new(directory.join(WORDS_FILE));
    if store.path().exists() {
        return fail("words file already exists.");
    }
    let document = starter_document();
    store.write(&document)?;
    println!(
        "Created {} with {} starter words.",
        store.path().display(),
        document.words.len()
    );
    Ok(())
}
