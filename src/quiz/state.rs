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

use clap::ValueEnum;

use crate::types::bank::QuestionBank;
use crate::types::question::Question;

/// How far the cheater flag reaches once it is set.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheatScope {
    /// Cheating once marks the whole session.
    Session,
    /// Cheating only marks the question whose answer was revealed.
    Question,
}

impl Display for CheatScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CheatScope::Session => write!(f, "session"),
            CheatScope::Question => write!(f, "question"),
        }
    }
}

/// Holds the position in the bank and the cheater flag. Lives as long as
/// the process, independently of any page.
pub struct QuizState {
    bank: QuestionBank,
    current_index: usize,
    scope: CheatScope,
    session_cheater: bool,
    cheated: Vec<bool>,
}

impl QuizState {
    pub fn new(bank: QuestionBank, scope: CheatScope) -> Self {
        let cheated = vec![false; bank.len()];
        Self {
            bank,
            current_index: 0,
            scope,
            session_cheater: false,
            cheated,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        self.bank.get(self.current_index)
    }

    pub fn current_question_text(&self) -> &str {
        self.current_question().text()
    }

    pub fn current_question_answer(&self) -> bool {
        self.current_question().answer()
    }

    pub fn move_to_next(&mut self) {
        self.current_index = (self.current_index + 1) % self.bank.len();
    }

    pub fn move_to_prev(&mut self) {
        let len = self.bank.len();
        self.current_index = (self.current_index + len - 1) % len;
    }

    pub fn is_cheater(&self) -> bool {
        match self.scope {
            CheatScope::Session => self.session_cheater,
            CheatScope::Question => self.cheated[self.current_index],
        }
    }

    pub fn set_cheater(&mut self, value: bool) {
        match self.scope {
            CheatScope::Session => self.session_cheater = value,
            CheatScope::Question => self.cheated[self.current_index] = value,
        }
    }
}
