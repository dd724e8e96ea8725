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

/// The result of pressing an answer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    /// The answer was given after peeking at it.
    Judgment,
    AlreadyAnswered,
}

impl Outcome {
    /// Classifies a fresh answer. Cheating overrides correctness.
    pub fn classify(is_cheater: bool, given: bool, correct: bool) -> Self {
        if is_cheater {
            Outcome::Judgment
        } else if given == correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Correct => "Correct!",
            Outcome::Incorrect => "Incorrect!",
            Outcome::Judgment => "Cheating is wrong.",
            Outcome::AlreadyAnswered => "You already answered this question.",
        }
    }
}

/// The score once every question has been answered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinalScore {
    pub score: u32,
    pub total: usize,
}

impl FinalScore {
    /// The percentage of correct answers in hundredths of a percent, with
    /// ties rounded up.
    pub fn hundredths(&self) -> u64 {
        let score = self.score as u64;
        let total = self.total as u64;
        (score * 10_000 * 2 + total) / (2 * total)
    }
}

impl Display for FinalScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let hundredths = self.hundredths();
        write!(
            f,
            "You scored {} out of {} ({}.{:02}%).",
            self.score,
            self.total,
            hundredths / 100,
            hundredths % 100
        )
    }
}

/// A message for the user, shown once.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Answer(Outcome),
    Final(FinalScore),
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Answer(outcome) => write!(f, "{}", outcome.message()),
            Notice::Final(score) => write!(f, "{score}"),
        }
    }
}
