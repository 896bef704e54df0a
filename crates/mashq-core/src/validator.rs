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

use crate::chars::has_arabic;
use crate::chars::is_base_letter;
use crate::chars::is_madd_letter;
use crate::chars::is_mark_char;
use crate::chars::is_tanween_char;

/// Classify whether a word is fully diacritized.
///
/// Every base letter must be followed by at least one diacritic before the
/// next base letter or end of string, with two exemptions: madd letters
/// never need a mark, and if the word carries tanween anywhere, the final
/// base letter is covered by it.
pub fn is_fully_diacritized(word: &str) -> bool {
    if word.trim().is_empty() {
        return false;
    }
    if !has_arabic(word) {
        return false;
    }

    let chars: Vec<char> = word.chars().collect();
    let letter_positions: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| is_base_letter(**c))
        .map(|(i, _)| i)
        .collect();
    if letter_positions.is_empty() {
        return false;
    }

    let has_tanween = chars.iter().copied().any(is_tanween_char);
    let letters_to_check = if has_tanween {
        letter_positions.len() - 1
    } else {
        letter_positions.len()
    };

    for &pos in letter_positions.iter().take(letters_to_check) {
        if is_madd_letter(chars[pos]) {
            continue;
        }
        // Scan forward through the mark run. Non-Arabic characters are
        // skipped; the next base letter ends the run.
        let mut has_mark = false;
        for &next in &chars[pos + 1..] {
            if is_mark_char(next) {
                has_mark = true;
                break;
            }
            if is_base_letter(next) {
                break;
            }
        }
        if !has_mark {
            return false;
        }
    }

    true
}
