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

/// The screen that reveals the answer to the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheatScreen {
    answer_is_true: bool,
    answer_shown: bool,
}

impl CheatScreen {
    pub fn new(answer_is_true: bool) -> Self {
        Self {
            answer_is_true,
            answer_shown: false,
        }
    }

    pub fn show_answer(&mut self) {
        self.answer_shown = true;
    }

    /// The answer, once the user has asked to see it.
    pub fn revealed_answer(&self) -> Option<bool> {
        if self.answer_shown {
            Some(self.answer_is_true)
        } else {
            None
        }
    }

    /// Closes the screen. Returns `Some(true)` only when the answer was
    /// shown; leaving without revealing carries no result.
    pub fn finish(self) -> Option<bool> {
        if self.answer_shown { Some(true) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_without_reveal() {
        let screen = CheatScreen::new(true);
        assert_eq!(screen.revealed_answer(), None);
        assert_eq!(screen.finish(), None);
    }

    #[test]
    fn test_finish_after_reveal() {
        let mut screen = CheatScreen::new(false);
        screen.show_answer();
        assert_eq!(screen.revealed_answer(), Some(false));
        assert_eq!(screen.finish(), Some(true));
    }

    #[test]
    fn test_show_answer_twice() {
        let mut screen = CheatScreen::new(true);
        screen.show_answer();
        screen.show_answer();
        assert_eq!(screen.revealed_answer(), Some(true));
    }
}
