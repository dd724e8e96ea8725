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

use std::fmt::Display;
use std::fmt::Formatter;
use std::path::Path;

use clap::ValueEnum;

use crate::error::Fallible;
use crate::types::bank::QuestionBank;

#[derive(ValueEnum, Clone, Copy)]
pub enum ExportFormat {
    /// JSON output.
    Json,
    /// TOML output, in the same format bank files are read in.
    Toml,
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Toml => write!(f, "toml"),
        }
    }
}

pub fn export_bank(path: Option<&Path>, format: ExportFormat) -> Fallible<()> {
    let bank = QuestionBank::load(path)?;
    println!("{}", render_bank(&bank, format)?);
    Ok(())
}

fn render_bank(bank: &QuestionBank, format: ExportFormat) -> Fallible<String> {
    let text = match format {
        ExportFormat::Json => serde_json::to_string_pretty(bank)?,
        ExportFormat::Toml => toml::to_string_pretty(bank)?,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::question::Question;

    #[test]
    fn test_render_json() -> Fallible<()> {
        let bank = QuestionBank::new("Tiny", vec![Question::new("Oslo is in Norway.", true)])?;
        let json = render_bank(&bank, ExportFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(value["title"], "Tiny");
        assert_eq!(value["questions"][0]["text"], "Oslo is in Norway.");
        assert_eq!(value["questions"][0]["answer"], true);
        Ok(())
    }

    #[test]
    fn test_toml_reads_back() -> Fallible<()> {
        let bank = QuestionBank::builtin();
        let text = render_bank(&bank, ExportFormat::Toml)?;
        let parsed = QuestionBank::parse(&text)?;
        assert_eq!(parsed.title(), bank.title());
        assert_eq!(parsed.len(), bank.len());
        for i in 0..bank.len() {
            assert_eq!(parsed.get(i), bank.get(i));
        }
        Ok(())
    }

    #[test]
    fn test_export_builtin() {
        assert!(export_bank(None, ExportFormat::Json).is_ok());
    }
}
