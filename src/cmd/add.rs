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
use mashq_core::WordDocument;
use mashq_core::chars::has_arabic;
use mashq_core::fail;
use mashq_core::is_fully_diacritized;

use crate::store::WordStore;
use crate::utils::WORDS_FILE;
use crate::utils::resolve_directory;

/// Split CLI arguments into individual words. Both the Latin and the
/// Arabic comma are accepted as separators.
fn split_words(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split([',', '،']))
        .map(|word| word.trim().to_string())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Add words to the store, creating the words file if it does not exist.
/// Unlike the serve API, the CLI rejects words that are not fully
/// diacritized.
pub fn add_words(directory: Option<String>, args: &[String]) -> Fallible<()> {
    let directory = resolve_directory(directory)?;
    let words = split_words(args);
    if words.is_empty() {
        return fail("no words given.");
    }
    for word in &words {
        if !has_arabic(word) {
            return fail(format!("not an Arabic word: {word}"));
        }
        if !is_fully_diacritized(word) {
            return fail(format!("word is not fully diacritized: {word}"));
        }
    }
    let store = WordStore::new(directory.join(WORDS_FILE));
    if !store.path().exists() {
        store.write(&WordDocument::default())?;
    }
    let mut added = 0;
    for word in &words {
        if store.append(word)? {
            println!("added: {word}");
            added += 1;
        } else {
            println!("already stored: {word}");
        }
    }
    println!("{added} words added.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_split_words() {
        let args = vec!["كَتَبَ،قَلَمٌ".to_string(), " بَيْتٌ , ".to_string()];
        assert_eq!(
            split_words(&args),
            vec![
                "كَتَبَ".to_string(),
                "قَلَمٌ".to_string(),
                "بَيْتٌ".to_string()
            ]
        );
    }

    #[test]
    fn test_add_creates_store() -> Fallible<()> {
        let dir = tempdir()?;
        add_words(
            Some(dir.path().display().to_string()),
            &["كَتَبَ".to_string()],
        )?;
        let store = WordStore::new(dir.path().join(WORDS_FILE));
        assert_eq!(store.read().unwrap().words, vec!["كَتَبَ".to_string()]);
        Ok(())
    }

    #[test]
    fn test_add_rejects_non_arabic() -> Fallible<()> {
        let dir = tempdir()?;
        let result = add_words(
            Some(dir.path().display().to_string()),
            &["hello".to_string()],
        );
        assert_eq!(
            result.err().unwrap().to_string(),
            "error: not an Arabic word: hello"
        );
        Ok(())
    }

    #[test]
    fn test_add_rejects_bare_word() -> Fallible<()> {
        let dir = tempdir()?;
        let result = add_words(
            Some(dir.path().display().to_string()),
            &["كتب".to_string()],
        );
        assert_eq!(
            result.err().unwrap().to_string(),
            "error: word is not fully diacritized: كتب"
        );
        Ok(())
    }
}
