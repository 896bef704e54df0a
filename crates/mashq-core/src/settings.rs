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

use crate::error::ErrorReport;
use crate::error::Fallible;

/// Which sections a worksheet includes and how many rows each gets.
/// Loaded from `worksheet.toml` when present; every field defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorksheetSettings {
    pub singles: SectionSettings,
    pub pairs: SectionSettings,
    pub words: SectionSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionSettings {
    pub enabled: bool,
    pub rows: usize,
}

impl Default for SectionSettings {
    fn default() -> Self {
        SectionSettings {
            enabled: true,
            rows: 3,
        }
    }
}

impl Default for WorksheetSettings {
    fn default() -> Self {
        WorksheetSettings {
            singles: SectionSettings::default(),
            pairs: SectionSettings::default(),
            words: SectionSettings::default(),
        }
    }
}

impl WorksheetSettings {
    pub fn from_toml(text: &str) -> Fallible<Self> {
        toml::from_str(text)
            .map_err(|e| ErrorReport::new(format!("Failed to parse worksheet settings: {e}")))
    }
}
