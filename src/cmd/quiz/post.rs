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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::cmd::quiz::state::ServerState;
use crate::error::Fallible;
use crate::quiz::outcome::Notice;

#[derive(Debug, Deserialize)]
enum Action {
    True,
    False,
    Previous,
    Next,
    Cheat,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    match action_handler(state, form.action) {
        Ok(target) => Redirect::to(target),
        Err(e) => {
            log::error!("{e}");
            Redirect::to("/")
        }
    }
}

/// Applies an action on the main screen. Returns the page to go to next.
fn action_handler(state: ServerState, action: Action) -> Fallible<&'static str> {
    let mut mutable = state.mutable.lock().unwrap();
    log::debug!("Action: {action:?}");
    // Acting on the main screen means the user came back from the cheat
    // screen.
    mutable.close_cheat_screen();
    match action {
        Action::True | Action::False => {
            let given = matches!(action, Action::True);
            let answered = mutable.controller.answer(given);
            mutable.notices.push(Notice::Answer(answered.outcome));
            if let Some(final_score) = answered.final_score {
                log::debug!("All questions answered: {final_score}");
                mutable.notices.push(Notice::Final(final_score));
            }
        }
        Action::Previous => {
            mutable.controller.prev();
        }
        Action::Next => {
            mutable.controller.next();
        }
        Action::Cheat => {
            let screen = mutable.controller.cheat();
            mutable.cheat = Some(screen);
            return Ok("/cheat");
        }
    }
    state.persist(&mutable)?;
    Ok("/")
}
