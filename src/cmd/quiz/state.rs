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

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;

use crate::error::Fallible;
use crate::quiz::cheat::CheatScreen;
use crate::quiz::controller::MainController;
use crate::quiz::outcome::Notice;

#[derive(Clone)]
pub struct ServerState {
    pub title: String,
    pub total_questions: usize,
    /// Where the saved state is written after every action, if anywhere.
    pub state_path: Option<PathBuf>,
    pub mutable: Arc<Mutex<MutableState>>,
}

pub struct MutableState {
    pub controller: MainController,
    /// The cheat screen, while it is open.
    pub cheat: Option<CheatScreen>,
    /// Messages to show on the next page view.
    pub notices: Vec<Notice>,
}

impl ServerState {
    pub fn persist(&self, mutable: &MutableState) -> Fallible<()> {
        if let Some(path) = &self.state_path {
            log::debug!("Saving state to {}", path.display());
            mutable.controller.save().save(path)?;
        }
        Ok(())
    }
}

impl MutableState {
    /// Returns to the main screen, handing the cheat screen's result to the
    /// controller.
    pub fn close_cheat_screen(&mut self) {
        if let Some(screen) = self.cheat.take() {
            self.controller.on_cheat_result(screen.finish());
        }
    }
}
