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

use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use mashq_core::ALPHABET;
use mashq_core::Fallible;
use mashq_core::Mark;
use mashq_core::STARTER_WORDS;
use mashq_core::Selection;
use mashq_core::WorksheetSettings;
use mashq_core::build_worksheet;
use mashq_core::fail;
use mashq_core::rng::TinyRng;

use crate::render::worksheet_page;
use crate::store::WordStore;
use crate::utils::SETTINGS_FILE;
use crate::utils::WORDS_FILE;
use crate::utils::resolve_directory;

/// Generate a printable worksheet and write it to an HTML file.
pub fn generate_worksheet(
    directory: Option<String>,
    letters: &str,
    marks: &str,
    output: Option<String>,
    seed: Option<u64>,
) -> Fallible<()> {
    let directory = resolve_directory(directory)?;
    let selection = parse_selection(letters, marks)?;

    let settings_path = directory.join(SETTINGS_FILE);
    let settings = if settings_path.exists() {
        WorksheetSettings::from_toml(&fs::read_to_string(&settings_path)?)?
    } else {
        WorksheetSettings::default()
    };

    // Fall back to the starter words when there is no store yet.
    let store = WordStore::new(directory.join(WORDS_FILE));
    let words: Vec<String> = if store.path().exists() {
        store.read()?.words
    } else {
        STARTER_WORDS.iter().map(|w| w.to_string()).collect()
    };

    let seed = match seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64,
    };
    let mut rng = TinyRng::from_seed(seed);
    let worksheet = build_worksheet(&selection, &words, &settings, &mut rng)?;
    let page = worksheet_page(&worksheet);

    let output = match output {
        Some(output) => PathBuf::from(output),
        None => directory.join("worksheet.html"),
    };
    fs::write(&output, page.into_string())?;
    println!("Wrote {}", output.display());
    Ok(())
}

/// Parse the `--letters` and `--marks` arguments into a selection.
/// Either may be "all"; both commas are accepted as separators.
fn parse_selection(letters: &str, marks: &str) -> Fallible<Selection> {
    let mut selection = Selection::new();
    if letters == "all" {
        selection.select_all_letters();
    } else {
        for token in letters.split([',', '،']) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) if ALPHABET.contains(&letter) => {
                    if !selection.has_letter(letter) {
                        selection.toggle_letter(letter);
                    }
                }
                _ => return fail(format!("unknown letter: {token}")),
            }
        }
    }
    if marks == "all" {
        selection.select_all_marks();
    } else {
        for token in marks.split([',', '،']) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match mark_from_name(token) {
                Some(mark) => {
                    if !selection.has_mark(mark) {
                        selection.toggle_mark(mark);
                    }
                }
                None => return fail(format!("unknown mark: {token}")),
            }
        }
    }
    Ok(selection)
}

/// Marks are named in ASCII on the command line; the Arabic symbol is
/// accepted too.
fn mark_from_name(name: &str) -> Option<Mark> {
    match name {
        "fatha" => Some(Mark::Fatha),
        "damma" => Some(Mark::Damma),
        "kasra" => Some(Mark::Kasra),
        "tanween-fath" => Some(Mark::TanweenFath),
        "tanween-damm" => Some(Mark::TanweenDamm),
        "tanween-kasr" => Some(Mark::TanweenKasr),
        "sukun" => Some(Mark::Sukun),
        "shadda" => Some(Mark::Shadda),
        "madd-alif" => Some(Mark::MaddAlif),
        "madd-waw" => Some(Mark::MaddWaw),
        "madd-ya" => Some(Mark::MaddYa),
        _ => Mark::from_symbol(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_selection_all() -> Fallible<()> {
        let selection = parse_selection("all", "all")?;
        assert_eq!(selection.letters().len(), 28);
        assert_eq!(selection.marks().len(), 11);
        Ok(())
    }

    #[test]
    fn test_parse_selection_explicit() -> Fallible<()> {
        let selection = parse_selection("ك،ت,ب", "fatha,sukun")?;
        assert_eq!(selection.letters(), &['ك', 'ت', 'ب']);
        assert_eq!(selection.marks(), &[Mark::Fatha, Mark::Sukun]);
        Ok(())
    }

    #[test]
    fn test_parse_selection_rejects_unknown() {
        assert_eq!(
            parse_selection("x", "all").err().unwrap().to_string(),
            "error: unknown letter: x"
        );
        assert_eq!(
            parse_selection("ب", "derp").err().unwrap().to_string(),
            "error: unknown mark: derp"
        );
    }

    #[test]
    fn test_generate_writes_worksheet() -> Fallible<()> {
        let dir = tempdir()?;
        generate_worksheet(
            Some(dir.path().display().to_string()),
            "all",
            "fatha,damma,kasra",
            None,
            Some(42),
        )?;
        let page = fs::read_to_string(dir.path().join("worksheet.html"))?;
        assert!(page.contains("القسم الأول"));
        assert!(page.contains("القسم الثالث"));
        Ok(())
    }

    #[test]
    fn test_generate_surfaces_selection_errors() -> Fallible<()> {
        let dir = tempdir()?;
        let result = generate_worksheet(
            Some(dir.path().display().to_string()),
            "ب",
            "sukun,shadda",
            None,
            Some(1),
        );
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_generate_is_deterministic_under_seed() -> Fallible<()> {
        let dir = tempdir()?;
        let a = dir.path().join("a.html");
        let b = dir.path().join("b.html");
        let directory = dir.path().display().to_string();
        generate_worksheet(
            Some(directory.clone()),
            "ك,ت,ب",
            "fatha",
            Some(a.display().to_string()),
            Some(7),
        )?;
        generate_worksheet(
            Some(directory),
            "ك,ت,ب",
            "fatha",
            Some(b.display().to_string()),
            Some(7),
        )?;
        assert_eq!(fs::read_to_string(a)?, fs::read_to_string(b)?);
        Ok(())
    }
}
