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

use crate::quiz::cheat::CheatScreen;
use crate::quiz::outcome::FinalScore;
use crate::quiz::outcome::Outcome;
use crate::quiz::saved::SavedState;
use crate::quiz::state::QuizState;
use crate::quiz::tracker::AnswerTracker;

/// What happened when an answer button was pressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Answered {
    pub outcome: Outcome,
    /// Present when this answer completed the bank.
    pub final_score: Option<FinalScore>,
}

/// Reacts to the actions on the main screen.
pub struct MainController {
    state: QuizState,
    score: u32,
    tracker: AnswerTracker,
}

impl MainController {
    /// Creates the main screen, restoring whatever was saved when the
    /// previous one went away.
    pub fn new(state: QuizState, saved: Option<SavedState>) -> Self {
        let len = state.bank().len();
        let (score, answered) = match saved {
            Some(saved) => (saved.score, Some(saved.answered_questions)),
            None => (0, None),
        };
        let tracker = AnswerTracker::restore(answered, len);
        let mut controller = Self {
            state,
            score,
            tracker,
        };
        controller.update_question();
        controller
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_current_answered(&self) -> bool {
        self.tracker.is_answered(self.state.current_index())
    }

    pub fn answer(&mut self, given: bool) -> Answered {
        let index = self.state.current_index();
        if self.tracker.is_answered(index) {
            log::debug!("Question {index} was already answered.");
            return Answered {
                outcome: Outcome::AlreadyAnswered,
                final_score: None,
            };
        }
        let outcome = Outcome::classify(
            self.state.is_cheater(),
            given,
            self.state.current_question_answer(),
        );
        if outcome == Outcome::Correct {
            self.score += 1;
        }
        self.tracker.mark_answered(index);
        log::debug!(
            "Question {index} answered {given}: {outcome:?}, score={}",
            self.score
        );
        let final_score = if self.tracker.all_answered() {
            Some(FinalScore {
                score: self.score,
                total: self.state.bank().len(),
            })
        } else {
            None
        };
        Answered {
            outcome,
            final_score,
        }
    }

    pub fn next(&mut self) {
        self.state.move_to_next();
        self.update_question();
    }

    pub fn prev(&mut self) {
        self.state.move_to_prev();
        self.update_question();
    }

    /// Opens the cheat screen for the current question.
    pub fn cheat(&self) -> CheatScreen {
        CheatScreen::new(self.state.current_question_answer())
    }

    /// Consumes the result the cheat screen returned.
    pub fn on_cheat_result(&mut self, answer_shown: Option<bool>) {
        if answer_shown == Some(true) {
            log::debug!("Answer to question {} was shown.", self.state.current_index());
            self.state.set_cheater(true);
        }
    }

    pub fn save(&self) -> SavedState {
        SavedState {
            score: self.score,
            answered_questions: self.tracker.to_vec(),
        }
    }

    /// Displays the current question. Displaying a question makes it
    /// answerable again.
    fn update_question(&mut self) {
        let index = self.state.current_index();
        log::debug!(
            "Displaying question {index}: {}",
            self.state.current_question_text()
        );
        self.tracker.reset_answered(index);
    }
}
