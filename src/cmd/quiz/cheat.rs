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
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use maud::html;
use serde::Deserialize;

use crate::cmd::quiz::state::ServerState;
use crate::cmd::quiz::template::page_template;

pub async fn get_cheat_handler(State(state): State<ServerState>) -> Response {
    let mutable = state.mutable.lock().unwrap();
    let Some(screen) = &mutable.cheat else {
        return Redirect::to("/").into_response();
    };
    let revealed = screen.revealed_answer().map(|answer| {
        if answer { "True" } else { "False" }
    });
    let body = html! {
        div.root {
            div.card .cheat {
                div.header {
                    h1 { "Cheat" }
                }
                div.content {
                    p.warning { "Are you sure you want to do this?" }
                    @if let Some(answer) = revealed {
                        p #answer { (answer) }
                    }
                }
                div.controls {
                    form action="/cheat" method="post" {
                        input id="back" type="submit" name="action" value="Back" title="Shortcut: b.";
                        @if revealed.is_none() {
                            button id="show-answer" type="submit" name="action" value="ShowAnswer" title="Shortcut: s." {
                                "Show Answer"
                            }
                        }
                    }
                }
            }
        }
    };
    let html = page_template(&state.title, body);
    (StatusCode::OK, Html(html.into_string())).into_response()
}

#[derive(Debug, Deserialize)]
enum CheatAction {
    ShowAnswer,
    Back,
}

#[derive(Deserialize)]
pub struct CheatFormData {
    action: CheatAction,
}

pub async fn post_cheat_handler(
    State(state): State<ServerState>,
    Form(form): Form<CheatFormData>,
) -> Redirect {
    let mut mutable = state.mutable.lock().unwrap();
    log::debug!("Cheat action: {:?}", form.action);
    match form.action {
        CheatAction::ShowAnswer => match mutable.cheat.as_mut() {
            Some(screen) => {
                screen.show_answer();
                Redirect::to("/cheat")
            }
            None => {
                log::error!("Showing an answer without an open cheat screen.");
                Redirect::to("/")
            }
        },
        CheatAction::Back => {
            mutable.close_cheat_screen();
            Redirect::to("/")
        }
    }
}
