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

//! Arabic character tables: the alphabet, the selectable diacritic marks,
//! and the character-level predicates the validator and generator share.

/// The 28 letters of the Arabic alphabet, in dictionary order.
pub const ALPHABET: [char; 28] = [
    'ا', 'ب', 'ت', 'ث', 'ج', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'س', 'ش', 'ص', 'ض', 'ط', 'ظ', 'ع',
    'غ', 'ف', 'ق', 'ك', 'ل', 'م', 'ن', 'ه', 'و', 'ي',
];

pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
pub const TANWEEN_FATH: char = '\u{064B}';
pub const TANWEEN_DAMM: char = '\u{064C}';
pub const TANWEEN_KASR: char = '\u{064D}';
pub const SUKUN: char = '\u{0652}';
pub const SHADDA: char = '\u{0651}';

pub const ALIF: char = 'ا';
pub const WAW: char = 'و';
pub const YA: char = 'ي';
pub const ALIF_MAQSURA: char = 'ى';
pub const ALIF_MADDA: char = 'آ';

/// How a mark attaches to letters when synthesizing practice cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Placement {
    /// Attaches directly to a single letter (short vowels, tanween).
    Direct,
    /// Needs a two-letter frame with an accompanying vowel (sukun, shadda).
    Scaffold,
    /// A long-vowel letter preceded by a letter bearing its matching short
    /// vowel (the madd letters).
    LongVowel,
}

/// A selectable diacritic mark.
///
/// The madd letters are base letters of the alphabet, but when *selected as
/// marks* they act as long-vowel extensions, so they live in this enum too.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Mark {
    Fatha,
    Damma,
    Kasra,
    TanweenFath,
    TanweenDamm,
    TanweenKasr,
    Sukun,
    Shadda,
    MaddAlif,
    MaddWaw,
    MaddYa,
}

/// All marks, in the order the original picker displays them.
pub const ALL_MARKS: [Mark; 11] = [
    Mark::Fatha,
    Mark::Damma,
    Mark::Kasra,
    Mark::TanweenFath,
    Mark::TanweenDamm,
    Mark::TanweenKasr,
    Mark::Sukun,
    Mark::Shadda,
    Mark::MaddAlif,
    Mark::MaddWaw,
    Mark::MaddYa,
];

impl Mark {
    /// The display symbol. Tanween fath conventionally carries a trailing
    /// alif seat, so its symbol is two characters long.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::Fatha => "\u{064E}",
            Mark::Damma => "\u{064F}",
            Mark::Kasra => "\u{0650}",
            Mark::TanweenFath => "\u{064B}ا",
            Mark::TanweenDamm => "\u{064C}",
            Mark::TanweenKasr => "\u{064D}",
            Mark::Sukun => "\u{0652}",
            Mark::Shadda => "\u{0651}",
            Mark::MaddAlif => "ا",
            Mark::MaddWaw => "و",
            Mark::MaddYa => "ي",
        }
    }

    pub fn arabic_name(self) -> &'static str {
        match self {
            Mark::Fatha => "فتحة",
            Mark::Damma => "ضمة",
            Mark::Kasra => "كسرة",
            Mark::TanweenFath => "تنوين بالفتح",
            Mark::TanweenDamm => "تنوين بالضم",
            Mark::TanweenKasr => "تنوين بالكسر",
            Mark::Sukun => "سكون",
            Mark::Shadda => "شدة",
            Mark::MaddAlif => "مد بالالف",
            Mark::MaddWaw => "مد بالواو",
            Mark::MaddYa => "مد بالياء",
        }
    }

    pub fn placement(self) -> Placement {
        match self {
            Mark::Fatha | Mark::Damma | Mark::Kasra => Placement::Direct,
            Mark::TanweenFath | Mark::TanweenDamm | Mark::TanweenKasr => Placement::Direct,
            Mark::Sukun | Mark::Shadda => Placement::Scaffold,
            Mark::MaddAlif | Mark::MaddWaw | Mark::MaddYa => Placement::LongVowel,
        }
    }

    /// Marks that cannot carry a cell on their own: tanween, sukun, shadda.
    pub fn is_standalone(self) -> bool {
        matches!(
            self,
            Mark::TanweenFath
                | Mark::TanweenDamm
                | Mark::TanweenKasr
                | Mark::Sukun
                | Mark::Shadda
        )
    }

    pub fn is_vowel(self) -> bool {
        matches!(self, Mark::Fatha | Mark::Damma | Mark::Kasra)
    }

    pub fn is_tanween(self) -> bool {
        matches!(self, Mark::TanweenFath | Mark::TanweenDamm | Mark::TanweenKasr)
    }

    pub fn is_madd(self) -> bool {
        matches!(self, Mark::MaddAlif | Mark::MaddWaw | Mark::MaddYa)
    }

    /// The short vowel a madd letter phonetically requires on the letter
    /// before it. `None` for everything that is not a madd letter.
    pub fn matching_vowel(self) -> Option<Mark> {
        match self {
            Mark::MaddAlif => Some(Mark::Fatha),
            Mark::MaddWaw => Some(Mark::Damma),
            Mark::MaddYa => Some(Mark::Kasra),
            _ => None,
        }
    }

    /// Parse a mark from its display symbol.
    pub fn from_symbol(s: &str) -> Option<Mark> {
        ALL_MARKS.into_iter().find(|m| m.symbol() == s)
    }

    /// Map a single character occurring inside a word to the mark it
    /// represents. Tanween fath maps from its combining character alone,
    /// without the alif seat.
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            FATHA => Some(Mark::Fatha),
            DAMMA => Some(Mark::Damma),
            KASRA => Some(Mark::Kasra),
            TANWEEN_FATH => Some(Mark::TanweenFath),
            TANWEEN_DAMM => Some(Mark::TanweenDamm),
            TANWEEN_KASR => Some(Mark::TanweenKasr),
            SUKUN => Some(Mark::Sukun),
            SHADDA => Some(Mark::Shadda),
            ALIF => Some(Mark::MaddAlif),
            WAW => Some(Mark::MaddWaw),
            YA => Some(Mark::MaddYa),
            _ => None,
        }
    }
}

/// Is the character in the Arabic Unicode block?
pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Is the character one of the eight combining diacritics?
pub fn is_mark_char(c: char) -> bool {
    matches!(
        c,
        FATHA | DAMMA | KASRA | TANWEEN_FATH | TANWEEN_DAMM | TANWEEN_KASR | SUKUN | SHADDA
    )
}

/// An Arabic character that is not itself a diacritic.
pub fn is_base_letter(c: char) -> bool {
    is_arabic(c) && !is_mark_char(c)
}

/// The long-vowel letters, including the maqsura and madda forms.
pub fn is_madd_letter(c: char) -> bool {
    matches!(c, ALIF | WAW | YA | ALIF_MAQSURA | ALIF_MADDA)
}

pub fn is_tanween_char(c: char) -> bool {
    matches!(c, TANWEEN_FATH | TANWEEN_DAMM | TANWEEN_KASR)
}

// Combining marks plus the superscript alif and the kashida, which are
// stripped when reducing a word to its base letters.
fn is_stripped(c: char) -> bool {
    ('\u{064B}'..='\u{065F}').contains(&c) || c == '\u{0670}' || c == '\u{0640}'
}

/// The base letters of a word, with diacritics and whitespace removed.
/// Madd letters count as letters here.
pub fn base_letters(word: &str) -> Vec<char> {
    word.chars()
        .filter(|c| !is_stripped(*c) && !c.is_whitespace())
        .collect()
}

/// Every mark a word uses, including madd letters acting as extensions.
pub fn word_marks(word: &str) -> Vec<Mark> {
    word.chars()
        .filter(|c| is_mark_char(*c) || matches!(*c, ALIF | WAW | YA))
        .filter_map(Mark::from_char)
        .collect()
}

pub fn has_arabic(word: &str) -> bool {
    word.chars().any(is_arabic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_roundtrip() {
        for mark in ALL_MARKS {
            assert_eq!(Mark::from_symbol(mark.symbol()), Some(mark));
        }
    }

    #[test]
    fn test_alphabet_letters_are_base_letters() {
        for letter in ALPHABET {
            assert!(is_base_letter(letter));
        }
    }

    #[test]
    fn test_marks_are_not_base_letters() {
        for c in [FATHA, DAMMA, KASRA, SUKUN, SHADDA, TANWEEN_FATH] {
            assert!(is_arabic(c));
            assert!(!is_base_letter(c));
        }
    }

    #[test]
    fn test_base_letters_strips_marks() {
        // كَتَبَ
        assert_eq!(base_letters("كَتَبَ"), vec!['ك', 'ت', 'ب']);
        // madd letters survive: كِتَاب
        assert_eq!(base_letters("كِتَاب"), vec!['ك', 'ت', 'ا', 'ب']);
    }

    #[test]
    fn test_word_marks_includes_madd_letters() {
        let marks = word_marks("كِتَاب");
        assert_eq!(marks, vec![Mark::Kasra, Mark::Fatha, Mark::MaddAlif]);
    }

    #[test]
    fn test_matching_vowel() {
        assert_eq!(Mark::MaddAlif.matching_vowel(), Some(Mark::Fatha));
        assert_eq!(Mark::MaddWaw.matching_vowel(), Some(Mark::Damma));
        assert_eq!(Mark::MaddYa.matching_vowel(), Some(Mark::Kasra));
        assert_eq!(Mark::Fatha.matching_vowel(), None);
    }

    #[test]
    fn test_placement_classes() {
        assert_eq!(Mark::Fatha.placement(), Placement::Direct);
        assert_eq!(Mark::TanweenDamm.placement(), Placement::Direct);
        assert_eq!(Mark::Sukun.placement(), Placement::Scaffold);
        assert_eq!(Mark::Shadda.placement(), Placement::Scaffold);
        assert_eq!(Mark::MaddWaw.placement(), Placement::LongVowel);
    }

    #[test]
    fn test_standalone_marks() {
        assert!(Mark::Sukun.is_standalone());
        assert!(Mark::Shadda.is_standalone());
        assert!(Mark::TanweenKasr.is_standalone());
        assert!(!Mark::Fatha.is_standalone());
        assert!(!Mark::MaddAlif.is_standalone());
    }
}
