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
use std::time::Duration;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::signal::ctrl_c;
use tokio::time::sleep;

use crate::cmd::quiz::cheat::get_cheat_handler;
use crate::cmd::quiz::cheat::post_cheat_handler;
use crate::cmd::quiz::get::get_handler;
use crate::cmd::quiz::post::post_handler;
use crate::cmd::quiz::state::MutableState;
use crate::cmd::quiz::state::ServerState;
use crate::error::Fallible;
use crate::quiz::controller::MainController;
use crate::quiz::saved::SavedState;
use crate::quiz::state::CheatScope;
use crate::quiz::state::QuizState;
use crate::types::bank::QuestionBank;

pub struct ServerConfig {
    pub bank: QuestionBank,
    pub port: u16,
    pub state_path: Option<PathBuf>,
    pub cheat_scope: CheatScope,
    pub open_browser: bool,
}

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let ServerConfig {
        bank,
        port,
        state_path,
        cheat_scope,
        open_browser,
    } = config;

    let saved: Option<SavedState> = state_path.as_deref().and_then(SavedState::load);
    let title = bank.title().to_string();
    let total_questions = bank.len();
    log::debug!("Cheat scope: {cheat_scope}");
    let quiz = QuizState::new(bank, cheat_scope);
    let controller = MainController::new(quiz, saved);

    let state = ServerState {
        title,
        total_questions,
        state_path,
        mutable: Arc::new(Mutex::new(MutableState {
            controller,
            cheat: None,
            notices: Vec::new(),
        })),
    };
    let app = Router::new();
    let app = app.route("/", get(get_handler));
    let app = app.route("/", post(post_handler));
    let app = app.route("/cheat", get(get_cheat_handler));
    let app = app.route("/cheat", post(post_cheat_handler));
    let app = app.route("/script.js", get(script));
    let app = app.route("/style.css", get(stylesheet));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("127.0.0.1:{port}");

    if open_browser {
        // Start a separate task to open the browser.
        let url = format!("http://{bind}/");
        let bind = bind.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(&bind).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            let _ = open::that(url);
        });
    }

    // Start the server.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(&bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::debug!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

async fn script() -> (StatusCode, [(HeaderName, &'static str); 1], &'static [u8]) {
    let bytes = include_bytes!("script.js");
    (StatusCode::OK, [(CONTENT_TYPE, "text/javascript")], bytes)
}

async fn stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}
