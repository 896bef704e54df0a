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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::chars::ALL_MARKS;
use crate::chars::ALPHABET;
use crate::chars::Mark;

/// The chosen letters and marks for a worksheet. Insertion order is kept
/// for display; membership is what the generator cares about.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    letters: Vec<char>,
    marks: Vec<Mark>,
}

/// Why a selection cannot drive generation.
#[derive(Debug, PartialEq)]
pub enum SelectionError {
    NoLetters,
    NoMarks,
    /// Only tanween, sukun, or shadda are selected; none of these can
    /// carry a cell on its own.
    OnlyStandaloneMarks,
    /// A madd letter is selected without the short vowel it requires.
    MissingMaddVowel { madd: Mark, vowel: Mark },
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionError::NoLetters => write!(f, "no letters are selected."),
            SelectionError::NoMarks => write!(f, "no diacritic marks are selected."),
            SelectionError::OnlyStandaloneMarks => write!(
                f,
                "only standalone marks (tanween, sukun, shadda) are selected; \
                 they cannot be used without a plain vowel or madd letter."
            ),
            SelectionError::MissingMaddVowel { madd, vowel } => write!(
                f,
                "the madd letter {} requires the {} mark ({}) to also be selected.",
                madd.symbol(),
                vowel.arabic_name(),
                vowel.symbol(),
            ),
        }
    }
}

impl Error for SelectionError {}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a letter in or out. Returns true if it is now selected.
    pub fn toggle_letter(&mut self, letter: char) -> bool {
        match self.letters.iter().position(|l| *l == letter) {
            Some(index) => {
                self.letters.remove(index);
                false
            }
            None => {
                self.letters.push(letter);
                true
            }
        }
    }

    /// Toggle a mark in or out. Returns true if it is now selected.
    pub fn toggle_mark(&mut self, mark: Mark) -> bool {
        match self.marks.iter().position(|m| *m == mark) {
            Some(index) => {
                self.marks.remove(index);
                false
            }
            None => {
                self.marks.push(mark);
                true
            }
        }
    }

    pub fn select_all_letters(&mut self) {
        for letter in ALPHABET {
            if !self.has_letter(letter) {
                self.letters.push(letter);
            }
        }
    }

    pub fn select_all_marks(&mut self) {
        for mark in ALL_MARKS {
            if !self.has_mark(mark) {
                self.marks.push(mark);
            }
        }
    }

    pub fn clear_letters(&mut self) {
        self.letters.clear();
    }

    pub fn clear_marks(&mut self) {
        self.marks.clear();
    }

    pub fn reset(&mut self) {
        self.letters.clear();
        self.marks.clear();
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    pub fn has_mark(&self, mark: Mark) -> bool {
        self.marks.contains(&mark)
    }

    /// The selected plain vowels, in selection order.
    pub fn vowels(&self) -> Vec<Mark> {
        self.marks.iter().copied().filter(|m| m.is_vowel()).collect()
    }

    /// The first selected tanween, if any.
    pub fn tanween(&self) -> Option<Mark> {
        self.marks.iter().copied().find(|m| m.is_tanween())
    }

    /// Check the generation preconditions: both sets non-empty, at least
    /// one non-standalone mark, and each selected madd letter accompanied
    /// by its matching vowel.
    pub fn validate(&self) -> Result<(), SelectionError> {
        if self.letters.is_empty() {
            return Err(SelectionError::NoLetters);
        }
        if self.marks.is_empty() {
            return Err(SelectionError::NoMarks);
        }
        if self.marks.iter().all(|m| m.is_standalone()) {
            return Err(SelectionError::OnlyStandaloneMarks);
        }
        for mark in &self.marks {
            if let Some(vowel) = mark.matching_vowel() {
                if !self.has_mark(vowel) {
                    return Err(SelectionError::MissingMaddVowel { madd: *mark, vowel });
                }
            }
        }
        Ok(())
    }
}
