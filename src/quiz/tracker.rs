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

/// Records, per question, whether it has been answered during the current
/// visit. Index-aligned with the question bank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerTracker {
    answered: Vec<bool>,
}

impl AnswerTracker {
    /// A tracker with every question unanswered.
    pub fn new(len: usize) -> Self {
        Self {
            answered: vec![false; len],
        }
    }

    /// Rebuilds a tracker from a saved sequence. A sequence of the wrong
    /// length belongs to a different bank, so it is discarded.
    pub fn restore(saved: Option<Vec<bool>>, len: usize) -> Self {
        match saved {
            Some(answered) if answered.len() == len => Self { answered },
            Some(answered) => {
                log::debug!(
                    "Discarding saved answers: expected {len} entries, found {}.",
                    answered.len()
                );
                Self::new(len)
            }
            None => Self::new(len),
        }
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.answered[index]
    }

    pub fn mark_answered(&mut self, index: usize) {
        self.answered[index] = true;
    }

    pub fn reset_answered(&mut self, index: usize) {
        self.answered[index] = false;
    }

    pub fn all_answered(&self) -> bool {
        self.answered.iter().all(|answered| *answered)
    }

    pub fn to_vec(&self) -> Vec<bool> {
        self.answered.clone()
    }
}
