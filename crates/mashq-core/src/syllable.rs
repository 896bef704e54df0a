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

//! Mining authentic letter+mark fragments out of stored words. These seed
//! the two-letter combination cells so worksheets are not purely synthetic.

use crate::chars::SHADDA;
use crate::chars::SUKUN;
use crate::chars::is_base_letter;
use crate::chars::is_madd_letter;
use crate::chars::is_mark_char;
use crate::chars::is_tanween_char;

/// The leading and trailing syllables of a word, when they exist.
#[derive(Debug, PartialEq, Default)]
pub struct Syllables {
    pub leading: Option<String>,
    pub trailing: Option<String>,
}

/// A base letter with its run of combining marks.
struct Span {
    letter: char,
    marks: Vec<char>,
}

impl Span {
    /// A span qualifies as a syllable when its letter is not a madd
    /// letter, its mark run starts with a short vowel rather than sukun,
    /// tanween, or shadda, and a short vowel is present at all.
    fn is_syllable(&self) -> bool {
        if is_madd_letter(self.letter) {
            return false;
        }
        match self.marks.first() {
            Some(first) if is_tanween_char(*first) || *first == SUKUN || *first == SHADDA => false,
            _ => self.marks.iter().any(|m| is_short_vowel(*m)),
        }
    }

    fn render(&self) -> String {
        let mut s = String::new();
        s.push(self.letter);
        s.extend(self.marks.iter());
        s
    }
}

fn is_short_vowel(c: char) -> bool {
    matches!(c, '\u{064E}' | '\u{064F}' | '\u{0650}')
}

fn spans(word: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    for c in word.chars() {
        if is_base_letter(c) {
            spans.push(Span {
                letter: c,
                marks: Vec::new(),
            });
        } else if is_mark_char(c) {
            if let Some(span) = spans.last_mut() {
                span.marks.push(c);
            }
        }
        // Anything else (spaces, punctuation) is skipped.
    }
    spans
}

/// Extract the leading and trailing syllable of a word. Either may be
/// absent; that is not an error, it just means the word contributes
/// nothing to the pool from that end.
pub fn extract_syllables(word: &str) -> Syllables {
    let spans = spans(word);
    let leading = spans
        .first()
        .filter(|s| s.is_syllable())
        .map(Span::render);
    let trailing = spans
        .last()
        .filter(|s| s.is_syllable())
        .map(Span::render);
    Syllables { leading, trailing }
}

/// Collect a deduplicated syllable pool from a list of words.
pub fn syllable_pool<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();
    for word in words {
        let syllables = extract_syllables(word.as_ref());
        for syllable in [syllables.leading, syllables.trailing].into_iter().flatten() {
            if !pool.contains(&syllable) {
                pool.push(syllable);
            }
        }
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_word() {
        // كَتَبَ: leading كَ, trailing بَ.
        let syllables = extract_syllables("كَتَبَ");
        assert_eq!(syllables.leading.as_deref(), Some("كَ"));
        assert_eq!(syllables.trailing.as_deref(), Some("بَ"));
    }

    #[test]
    fn test_leading_madd_letter_skipped() {
        // A word starting with a bare alif has no leading syllable.
        let syllables = extract_syllables("اكَلَ");
        assert_eq!(syllables.leading, None);
        assert_eq!(syllables.trailing.as_deref(), Some("لَ"));
    }

    #[test]
    fn test_sukun_start_skipped() {
        // بْ carries sukun first, so the trailing span of دَرْ-like words
        // does not qualify.
        let syllables = extract_syllables("دَرْ");
        assert_eq!(syllables.leading.as_deref(), Some("دَ"));
        assert_eq!(syllables.trailing, None);
    }

    #[test]
    fn test_tanween_end_skipped() {
        // قَلَمٌ: the trailing span carries only tanween, no short vowel.
        let syllables = extract_syllables("قَلَمٌ");
        assert_eq!(syllables.leading.as_deref(), Some("قَ"));
        assert_eq!(syllables.trailing, None);
    }

    #[test]
    fn test_shadda_then_vowel_skipped() {
        // A span whose marks start with shadda does not qualify even if a
        // vowel follows.
        let syllables = extract_syllables("رَبِّ");
        assert_eq!(syllables.leading.as_deref(), Some("رَ"));
        assert_eq!(syllables.trailing, None);
    }

    #[test]
    fn test_no_syllables_at_all() {
        assert_eq!(extract_syllables("كتب"), Syllables::default());
        assert_eq!(extract_syllables(""), Syllables::default());
    }

    #[test]
    fn test_pool_dedup() {
        let words = ["كَتَبَ".to_string(), "كَرُمَ".to_string()];
        let pool = syllable_pool(&words);
        // كَ appears as the leading syllable of both words, once in the pool.
        assert_eq!(pool.iter().filter(|s| s.as_str() == "كَ").count(), 1);
        assert!(pool.contains(&"بَ".to_string()));
        assert!(pool.contains(&"مَ".to_string()));
    }
}
