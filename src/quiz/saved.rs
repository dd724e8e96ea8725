// Copyright 2025 Fernando Borretti
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

use std::fs::read_to_string;
use std::fs::write;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;

/// The values that survive the main screen being recreated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    pub score: u32,
    pub answered_questions: Vec<bool>,
}

impl SavedState {
    /// Reads the saved state at `path`. A missing file means there is nothing
    /// to restore. A file that cannot be read or parsed is ignored, so the
    /// quiz starts over.
    pub fn load(path: &Path) -> Option<Self> {
        if !path.exists() {
            log::debug!("No saved state at {}.", path.display());
            return None;
        }
        match Self::read(path) {
            Ok(saved) => {
                log::debug!("Restored saved state from {}.", path.display());
                Some(saved)
            }
            Err(e) => {
                log::error!("Ignoring saved state at {}: {e}", path.display());
                None
            }
        }
    }

    fn read(path: &Path) -> Fallible<Self> {
        let content = read_to_string(path)?;
        let saved: SavedState = serde_json::from_str(&content)?;
        Ok(saved)
    }

    pub fn save(&self, path: &Path) -> Fallible<()> {
        let content = serde_json::to_string_pretty(self)?;
        write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_save_and_load() -> Fallible<()> {
        let directory = create_tmp_directory()?;
        let path = directory.join("state.json");
        let saved = SavedState {
            score: 3,
            answered_questions: vec![true, true, false, true, false],
        };
        saved.save(&path)?;
        assert_eq!(SavedState::load(&path), Some(saved));
        Ok(())
    }

    #[test]
    fn test_field_names() -> Fallible<()> {
        let saved = SavedState {
            score: 1,
            answered_questions: vec![true],
        };
        let json = serde_json::to_string(&saved)?;
        assert_eq!(json, r#"{"score":1,"answeredQuestions":[true]}"#);
        Ok(())
    }

    #[test]
    fn test_load_missing() -> Fallible<()> {
        let directory = create_tmp_directory()?;
        assert_eq!(SavedState::load(&directory.join("nope.json")), None);
        Ok(())
    }

    #[test]
    fn test_load_malformed() -> Fallible<()> {
        let directory = create_tmp_directory()?;
        let path = directory.join("state.json");
        write(&path, r#"{"score": "three", "answeredQuestions": [1, 2]}"#)?;
        assert_eq!(SavedState::load(&path), None);
        Ok(())
    }
}
