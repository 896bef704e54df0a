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

//! Renders a worksheet content model to a printable right-to-left HTML
//! page. Pure: the same worksheet always produces the same markup.

use maud::DOCTYPE;
use maud::Markup;
use maud::PreEscaped;
use maud::html;
use mashq_core::Worksheet;
use mashq_core::generator::PAIR_COLUMNS;
use mashq_core::generator::SINGLE_COLUMNS;
use mashq_core::generator::WORD_COLUMNS;

const STYLE: &str = "
body {
    font-family: 'Traditional Arabic', 'Amiri', 'Scheherazade', serif;
    font-size: 20pt;
    margin: 2em;
}
h1 {
    text-align: center;
}
.selected-letters {
    border: 1px solid #888;
    border-radius: 4px;
    padding: 0.5em;
    margin-bottom: 1em;
}
.grid {
    display: grid;
    gap: 0.5em;
    margin-bottom: 1.5em;
}
.cell {
    border: 1px dashed #aaa;
    border-radius: 4px;
    text-align: center;
    padding: 0.4em 0;
}
.empty {
    color: #666;
    text-align: center;
}
@media print {
    body { margin: 0; }
}
";

pub fn worksheet_page(sheet: &Worksheet) -> Markup {
    let letters: Vec<String> = sheet.letters.iter().map(|l| l.to_string()).collect();
    let letters = letters.join("، ");
    html! {
        (DOCTYPE)
        html dir="rtl" lang="ar" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "تعليم تهجي الكلمات" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { "ورقة تدريب التهجئة" }
                div.selected-letters {
                    "الحروف المختارة: " (letters)
                }
                @if let Some(cells) = &sheet.singles {
                    (section("القسم الأول: حروف مفردة", cells, SINGLE_COLUMNS))
                }
                @if let Some(cells) = &sheet.pairs {
                    (section("القسم الثاني: مقاطع مركبة", cells, PAIR_COLUMNS))
                }
                @if let Some(words) = &sheet.words {
                    @if words.is_empty() {
                        h2 { "القسم الثالث: كلمات" }
                        p.empty { "لا توجد كلمات تطابق المعايير المحددة" }
                    } @else {
                        (section("القسم الثالث: كلمات", words, WORD_COLUMNS))
                    }
                }
            }
        }
    }
}

fn section(title: &str, cells: &[String], columns: usize) -> Markup {
    let grid_style = format!("grid-template-columns: repeat({columns}, 1fr);");
    html! {
        section {
            h2 { (title) }
            div.grid style=(grid_style) {
                @for cell in cells {
                    div.cell { (cell) }
                }
            }
        }
    }
}
