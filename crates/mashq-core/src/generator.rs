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

//! Worksheet generation: three cell strategies driven by the selection,
//! assembled into a pure content model that rendering binds to separately.

use crate::chars::Mark;
use crate::chars::Placement;
use crate::chars::base_letters;
use crate::chars::word_marks;
use crate::rng::TinyRng;
use crate::selection::Selection;
use crate::selection::SelectionError;
use crate::settings::WorksheetSettings;
use crate::syllable::syllable_pool;

/// Grid widths of the three sections, matching the printed layout.
pub const SINGLE_COLUMNS: usize = 10;
pub const PAIR_COLUMNS: usize = 8;
pub const WORD_COLUMNS: usize = 4;

/// How often a pair cell prefers mined syllables over synthetic pairs,
/// when the pool has any.
const SYLLABLE_PREFERENCE: u32 = 70;

/// How often a shadda cell combines with tanween when both are selected.
const SHADDA_TANWEEN_CHANCE: u32 = 30;

/// Phonotactically plausible consonant pairs used for two-letter cells
/// when no authentic syllables are available.
const PAIR_TABLE: [(char, char); 24] = [
    ('ب', 'ت'),
    ('ب', 'ر'),
    ('ت', 'م'),
    ('ج', 'د'),
    ('ح', 'س'),
    ('د', 'ر'),
    ('ر', 'س'),
    ('س', 'م'),
    ('ش', 'م'),
    ('ص', 'ب'),
    ('ط', 'ر'),
    ('ع', 'م'),
    ('ف', 'ت'),
    ('ق', 'ل'),
    ('ك', 'ت'),
    ('ل', 'م'),
    ('م', 'ن'),
    ('ن', 'ص'),
    ('ه', 'د'),
    ('خ', 'ب'),
    ('ز', 'ر'),
    ('غ', 'ف'),
    ('ق', 'ر'),
    ('م', 'د'),
];

/// The generated worksheet content, independent of any rendering.
#[derive(Debug, PartialEq)]
pub struct Worksheet {
    /// The selected letters, in selection order, for the header banner.
    pub letters: Vec<char>,
    /// Section 1: single letter+mark cells.
    pub singles: Option<Vec<String>>,
    /// Section 2: two-letter combination cells.
    pub pairs: Option<Vec<String>>,
    /// Section 3: matching words from the store, possibly empty.
    pub words: Option<Vec<String>>,
}

/// Build a worksheet from the selection, the stored words, and the
/// section settings. The selection is validated first; the error carries
/// the reason generation is impossible.
pub fn build_worksheet(
    selection: &Selection,
    words: &[String],
    settings: &WorksheetSettings,
    rng: &mut TinyRng,
) -> Result<Worksheet, SelectionError> {
    selection.validate()?;

    let filtered = filter_words(words, selection);

    let singles = settings.singles.enabled.then(|| {
        (0..settings.singles.rows * SINGLE_COLUMNS)
            .map(|_| letter_cell(selection, rng))
            .collect()
    });

    let pairs = settings.pairs.enabled.then(|| {
        let pool = syllable_pool(&filtered);
        (0..settings.pairs.rows * PAIR_COLUMNS)
            .map(|_| pair_cell(selection, &pool, rng))
            .collect()
    });

    let words = settings.words.enabled.then(|| {
        filtered
            .iter()
            .take(settings.words.rows * WORD_COLUMNS)
            .cloned()
            .collect()
    });

    Ok(Worksheet {
        letters: selection.letters().to_vec(),
        singles,
        pairs,
        words,
    })
}

/// Words whose every base letter and every mark is selected, in store
/// order.
pub fn filter_words(words: &[String], selection: &Selection) -> Vec<String> {
    words
        .iter()
        .filter(|word| word_matches(word, selection))
        .cloned()
        .collect()
}

fn word_matches(word: &str, selection: &Selection) -> bool {
    base_letters(word)
        .into_iter()
        .all(|letter| selection.has_letter(letter))
        && word_marks(word)
            .into_iter()
            .all(|mark| selection.has_mark(mark))
}

/// A single letter+mark cell, placed per the mark's class.
pub fn letter_cell(selection: &Selection, rng: &mut TinyRng) -> String {
    if standalone_only(selection) {
        // Standalone marks cannot stand alone; degrade to a bare letter.
        return rng.choose(selection.letters()).to_string();
    }
    let letter = *rng.choose(selection.letters());
    let mark = *rng.choose(selection.marks());
    match mark.placement() {
        Placement::Direct => attach(letter, mark),
        Placement::Scaffold => scaffold_cell(mark, selection, rng),
        Placement::LongVowel => long_vowel_cell(letter, mark, selection, rng),
    }
}

/// A two-letter combination cell. Prefers authentic syllables mined from
/// the filtered word list, then the pair table, then a uniform pair.
pub fn pair_cell(selection: &Selection, pool: &[String], rng: &mut TinyRng) -> String {
    if standalone_only(selection) {
        let first = rng.choose(selection.letters());
        let second = rng.choose(selection.letters());
        return format!("{first}{second}");
    }

    if pool.len() >= 2 && rng.percent(SYLLABLE_PREFERENCE) {
        let first = rng.choose(pool);
        let second = rng.choose(pool);
        return format!("{first}{second}");
    }

    let table: Vec<(char, char)> = PAIR_TABLE
        .iter()
        .copied()
        .filter(|(a, b)| selection.has_letter(*a) && selection.has_letter(*b))
        .collect();
    let (first, second) = if table.is_empty() {
        (
            *rng.choose(selection.letters()),
            *rng.choose(selection.letters()),
        )
    } else {
        *rng.choose(&table)
    };

    let mut cell = first_fragment(first, selection, rng);
    cell.push_str(&second_fragment(second, selection, rng));
    cell
}

fn standalone_only(selection: &Selection) -> bool {
    selection.marks().iter().all(|m| m.is_standalone())
}

fn attach(letter: char, mark: Mark) -> String {
    format!("{letter}{}", mark.symbol())
}

/// Sukun and shadda cannot sit on a lone letter; build a two-letter frame
/// carrying an accompanying vowel.
fn scaffold_cell(mark: Mark, selection: &Selection, rng: &mut TinyRng) -> String {
    let first = *rng.choose(selection.letters());
    let second = *rng.choose(selection.letters());
    let vowels = selection.vowels();

    if mark == Mark::Shadda {
        if let Some(tanween) = selection.tanween() {
            if !vowels.is_empty() && rng.percent(SHADDA_TANWEEN_CHANCE) {
                // Tanween already carries the vowel sound.
                return format!("{first}{second}{}{}", mark.symbol(), tanween.symbol());
            }
        }
        return match vowels.is_empty() {
            true => format!("{first}{second}"),
            false => {
                let vowel = rng.choose(&vowels).symbol();
                format!("{first}{vowel}{second}{vowel}{}", mark.symbol())
            }
        };
    }

    // Sukun: vowel on the first letter, sukun on the second.
    match vowels.is_empty() {
        true => format!("{first}{second}{}", mark.symbol()),
        false => {
            let vowel = rng.choose(&vowels).symbol();
            format!("{first}{vowel}{second}{}", mark.symbol())
        }
    }
}

/// A madd letter extends a letter bearing its matching short vowel. If
/// that vowel is not selected, fall back to a plain two-letter cell.
fn long_vowel_cell(letter: char, mark: Mark, selection: &Selection, rng: &mut TinyRng) -> String {
    let Some(vowel) = mark.matching_vowel() else {
        return attach(letter, mark);
    };
    if selection.has_mark(vowel) {
        return format!("{letter}{}{}", vowel.symbol(), mark.symbol());
    }
    let second = *rng.choose(selection.letters());
    let vowels = selection.vowels();
    match vowels.is_empty() {
        true => format!("{letter}{second}"),
        false => format!("{letter}{}{second}", rng.choose(&vowels).symbol()),
    }
}

/// The first letter of a synthetic pair never takes a standalone mark.
fn first_fragment(letter: char, selection: &Selection, rng: &mut TinyRng) -> String {
    let candidates: Vec<Mark> = selection
        .marks()
        .iter()
        .copied()
        .filter(|m| !m.is_standalone())
        .collect();
    let mark = *rng.choose(&candidates);
    match mark.matching_vowel() {
        Some(vowel) if selection.has_mark(vowel) => {
            format!("{letter}{}{}", vowel.symbol(), mark.symbol())
        }
        Some(_) => attach(letter, mark),
        None => attach(letter, mark),
    }
}

/// The second letter may take any selected mark; shadda gets an
/// accompanying vowel or a tanween tail.
fn second_fragment(letter: char, selection: &Selection, rng: &mut TinyRng) -> String {
    let mark = *rng.choose(selection.marks());
    if mark == Mark::Shadda {
        let vowels = selection.vowels();
        if let Some(tanween) = selection.tanween() {
            if !vowels.is_empty() && rng.percent(SHADDA_TANWEEN_CHANCE) {
                return format!("{letter}{}{}", mark.symbol(), tanween.symbol());
            }
        }
        return match vowels.is_empty() {
            true => letter.to_string(),
            false => format!(
                "{letter}{}{}",
                rng.choose(&vowels).symbol(),
                mark.symbol()
            ),
        };
    }
    if let Some(vowel) = mark.matching_vowel() {
        return match selection.has_mark(vowel) {
            true => format!("{letter}{}{}", vowel.symbol(), mark.symbol()),
            false => attach(letter, mark),
        };
    }
    attach(letter, mark)
}
