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
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::question::Question;

const DEFAULT_TITLE: &str = "GeoQuiz";

/// An ordered, non-empty, immutable sequence of questions.
#[derive(Clone, Debug, Serialize)]
pub struct QuestionBank {
    title: String,
    questions: Vec<Question>,
}

/// The on-disk shape of a bank file, before validation.
#[derive(Deserialize)]
struct RawBank {
    title: Option<String>,
    #[serde(default)]
    questions: Vec<RawQuestion>,
}

#[derive(Deserialize)]
struct RawQuestion {
    text: String,
    answer: bool,
}

impl QuestionBank {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Fallible<Self> {
        if questions.is_empty() {
            return fail("question bank is empty.");
        }
        for (idx, question) in questions.iter().enumerate() {
            if question.text().is_empty() {
                return fail(format!("question {} has no text.", idx + 1));
            }
        }
        Ok(Self {
            title: title.into(),
            questions,
        })
    }

    /// The bank used when no file is given.
    pub fn builtin() -> Self {
        let questions = vec![
            Question::new("Canberra is the capital of Australia.", true),
            Question::new(
                "The Pacific Ocean is larger than the Atlantic Ocean.",
                true,
            ),
            Question::new(
                "The Suez Canal connects the Red Sea and the Indian Ocean.",
                false,
            ),
            Question::new("The source of the Nile River is in Egypt.", false),
            Question::new(
                "The Amazon River is the longest river in the Americas.",
                true,
            ),
            Question::new(
                "Lake Baikal is the world's oldest and deepest freshwater lake.",
                true,
            ),
        ];
        Self {
            title: DEFAULT_TITLE.to_string(),
            questions,
        }
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        let raw: RawBank = toml::from_str(content)?;
        let title = match raw.title {
            Some(title) if !title.trim().is_empty() => title.trim().to_string(),
            _ => DEFAULT_TITLE.to_string(),
        };
        let questions = raw
            .questions
            .into_iter()
            .map(|q| Question::new(q.text, q.answer))
            .collect();
        Self::new(title, questions)
    }

    pub fn from_path(path: &Path) -> Fallible<Self> {
        if !path.exists() {
            return fail(format!("bank file {} does not exist.", path.display()));
        }
        log::debug!("Loading question bank from {}", path.display());
        let content = read_to_string(path)?;
        let bank = Self::parse(&content)?;
        log::debug!("Loaded {} questions.", bank.len());
        Ok(bank)
    }

    /// Load the bank at `path`, or the built-in bank if there is none.
    pub fn load(path: Option<&Path>) -> Fallible<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => {
                log::debug!("Using the built-in question bank.");
                Ok(Self::builtin())
            }
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns the question at `index`. Callers keep indices in `[0, len)`.
    pub fn get(&self, index: usize) -> &Question {
        &self.questions[index]
    }
}
