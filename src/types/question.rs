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

use maud::Markup;
use maud::PreEscaped;
use maud::html;
use serde::Serialize;

use crate::markdown::markdown_to_html_inline;

/// A true/false question.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Question {
    /// The statement shown to the user. May contain inline Markdown.
    text: String,
    /// Whether the statement is true.
    answer: bool,
}

impl Question {
    pub fn new(text: impl Into<String>, answer: bool) -> Self {
        Self {
            text: text.into().trim().to_string(),
            answer,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn answer(&self) -> bool {
        self.answer
    }

    pub fn html_text(&self) -> Markup {
        html! {
            (PreEscaped(markdown_to_html_inline(&self.text)))
        }
    }
}
