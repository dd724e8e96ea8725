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

use std::mem::take;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::html;

use crate::cmd::quiz::state::ServerState;
use crate::cmd::quiz::template::page_template;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mut mutable = state.mutable.lock().unwrap();
    mutable.close_cheat_screen();
    let notices = take(&mut mutable.notices);
    let controller = &mutable.controller;
    let quiz = controller.state();
    let progress = format!(
        "Question {} / {}",
        quiz.current_index() + 1,
        state.total_questions
    );
    let score = format!("Score: {}", controller.score());
    let body = html! {
        div.root {
            div.card {
                div.header {
                    h1 {
                        (state.title)
                    }
                    div.progress {
                        (progress)
                    }
                }
                @if !notices.is_empty() {
                    div.notices {
                        @for notice in &notices {
                            p.notice { (notice.to_string()) }
                        }
                    }
                }
                div.content {
                    @if controller.is_current_answered() {
                        div.question .answered .rich-text {
                            p { (quiz.current_question().html_text()) }
                        }
                    } @else {
                        div.question .rich-text {
                            p { (quiz.current_question().html_text()) }
                        }
                    }
                }
                div.score {
                    (score)
                }
                div.controls {
                    form action="/" method="post" {
                        div.answers {
                            input id="true" type="submit" name="action" value="True" title="Shortcut: t.";
                            input id="false" type="submit" name="action" value="False" title="Shortcut: f.";
                        }
                        div.navigation {
                            input id="previous" type="submit" name="action" value="Previous" title="Shortcut: p.";
                            input id="cheat" type="submit" name="action" value="Cheat" title="Shortcut: c.";
                            input id="next" type="submit" name="action" value="Next" title="Shortcut: n.";
                        }
                    }
                }
            }
        }
    };
    let html = page_template(&state.title, body);
    (StatusCode::OK, Html(html.into_string()))
}
