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

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;

/// The word store document: a single `words` array of diacritized words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordDocument {
    pub words: Vec<String>,
}

impl WordDocument {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serialize in the store's on-disk shape: pretty-printed with
    /// two-space indentation.
    pub fn to_json(&self) -> Fallible<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Append a word unless it is already present. Returns whether the
    /// word was added.
    pub fn push_unique(&mut self, word: &str) -> bool {
        if self.contains(word) {
            false
        } else {
            self.words.push(word.to_string());
            true
        }
    }
}

/// The built-in starter words: common classroom nouns, all fully
/// diacritized. Used to bootstrap a store and as the generation fallback
/// when the store cannot be read.
pub const STARTER_WORDS: [&str; 30] = [
    "بَيْتٌ",
    "قَلَمٌ",
    "كِتَابٌ",
    "طَالِبٌ",
    "مَدْرَسَةٌ",
    "مُعَلِّمٌ",
    "دَرْسٌ",
    "فَصْلٌ",
    "مَجَلَّةٌ",
    "جَرِيدَةٌ",
    "رَسُولٌ",
    "نَبِيٌّ",
    "مَلَكٌ",
    "شَيْطَانٌ",
    "إِنْسَانٌ",
    "حَيَوَانٌ",
    "نَبَاتٌ",
    "شَجَرَةٌ",
    "زَهْرَةٌ",
    "نَهْرٌ",
    "بَحْرٌ",
    "جَبَلٌ",
    "سَمَاءٌ",
    "شَمْسٌ",
    "قَمَرٌ",
    "نُجُومٌ",
    "سَحَابٌ",
    "مَطَرٌ",
    "بَرْدٌ",
    "رِيحٌ",
];

/// The starter list as an owned document.
pub fn starter_document() -> WordDocument {
    WordDocument {
        words: STARTER_WORDS.iter().map(|w| w.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::is_fully_diacritized;

    #[test]
    fn test_json_shape() -> Fallible<()> {
        let doc = WordDocument {
            words: vec!["كَتَبَ".to_string()],
        };
        let json = doc.to_json()?;
        assert!(json.starts_with("{\n  \"words\""));
        let back = WordDocument::from_json(&json)?;
        assert_eq!(doc, back);
        Ok(())
    }

    #[test]
    fn test_push_unique() {
        let mut doc = WordDocument::default();
        assert!(doc.push_unique("كَتَبَ"));
        assert!(!doc.push_unique("كَتَبَ"));
        assert_eq!(doc.words.len(), 1);
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(WordDocument::from_json("[]").is_err());
        assert!(WordDocument::from_json("{\"words\": \"x\"}").is_err());
        assert!(WordDocument::from_json("{\"words\": [1, 2]}").is_err());
    }

    #[test]
    fn test_starter_words_pass_the_validator() {
        for word in STARTER_WORDS {
            assert!(is_fully_diacritized(word), "starter word failed: {word}");
        }
    }
}
