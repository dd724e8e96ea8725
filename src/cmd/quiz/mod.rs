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

mod cheat;
mod get;
mod post;
pub mod server;
mod state;
mod template;

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;
    use std::fs::write;
    use std::path::PathBuf;
    use std::time::Duration;

    use portpicker::pick_unused_port;
    use reqwest::StatusCode;
    use tokio::net::TcpStream;
    use tokio::spawn;
    use tokio::time::sleep;

    use crate::cmd::quiz::server::ServerConfig;
    use crate::cmd::quiz::server::start_server;
    use crate::error::Fallible;
    use crate::helper::create_tmp_directory;
    use crate::quiz::saved::SavedState;
    use crate::quiz::state::CheatScope;
    use crate::types::bank::QuestionBank;
    use crate::types::question::Question;

    async fn spawn_server(
        bank: QuestionBank,
        state_path: Option<PathBuf>,
        cheat_scope: CheatScope,
    ) -> String {
        let port = pick_unused_port().expect("no free port");
        let config = ServerConfig {
            bank,
            port,
            state_path,
            cheat_scope,
            open_browser: false,
        };
        spawn(async move { start_server(config).await });
        let bind = format!("127.0.0.1:{port}");
        loop {
            if let Ok(stream) = TcpStream::connect(&bind).await {
                drop(stream);
                break;
            }
            sleep(Duration::from_millis(1)).await;
        }
        format!("http://{bind}")
    }

    async fn get(url: String) -> Fallible<String> {
        let response = reqwest::get(url).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        Ok(response.text().await?)
    }

    async fn act(url: String, action: &str) -> Fallible<String> {
        let response = reqwest::Client::new()
            .post(url)
            .form(&[("action", action)])
            .send()
            .await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        Ok(response.text().await?)
    }

    #[tokio::test]
    async fn test_static_endpoints() -> Fallible<()> {
        let base = spawn_server(QuestionBank::builtin(), None, CheatScope::Session).await;

        let response = reqwest::get(format!("{base}/style.css")).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        let response = reqwest::get(format!("{base}/script.js")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/javascript"
        );

        let response = reqwest::get(format!("{base}/herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_e2e() -> Fallible<()> {
        let directory = create_tmp_directory()?;
        let state_path = directory.join("state.json");
        let base = spawn_server(
            QuestionBank::builtin(),
            Some(state_path.clone()),
            CheatScope::Session,
        )
        .await;

        // The first question.
        let html = get(format!("{base}/")).await?;
        assert!(html.contains("Canberra is the capital of Australia."));
        assert!(html.contains("Question 1 / 6"));
        assert!(html.contains("Score: 0"));

        // Answer it.
        let html = act(format!("{base}/"), "True").await?;
        assert!(html.contains("Correct!"));
        assert!(html.contains("Score: 1"));

        // Answer it again.
        let html = act(format!("{base}/"), "False").await?;
        assert!(html.contains("You already answered this question."));
        assert!(html.contains("Score: 1"));

        // Notices are shown once.
        let html = get(format!("{base}/")).await?;
        assert!(!html.contains("You already answered this question."));

        // Move on.
        let html = act(format!("{base}/"), "Next").await?;
        assert!(html.contains("The Pacific Ocean is larger than the Atlantic Ocean."));
        assert!(html.contains("Question 2 / 6"));

        // Open the cheat screen.
        let html = act(format!("{base}/"), "Cheat").await?;
        assert!(html.contains("Are you sure you want to do this?"));
        assert!(!html.contains("id=\"answer\""));

        // Reveal the answer.
        let html = act(format!("{base}/cheat"), "ShowAnswer").await?;
        assert!(html.contains("<p id=\"answer\">True</p>"));

        // Go back and answer.
        let html = act(format!("{base}/cheat"), "Back").await?;
        assert!(html.contains("Question 2 / 6"));
        let html = act(format!("{base}/"), "True").await?;
        assert!(html.contains("Cheating is wrong."));
        assert!(html.contains("Score: 1"));

        // The state file tracks every action.
        let saved: SavedState = serde_json::from_str(&read_to_string(&state_path)?)?;
        assert_eq!(
            saved,
            SavedState {
                score: 1,
                answered_questions: vec![true, true, false, false, false, false],
            }
        );

        // Going back wraps around.
        let html = act(format!("{base}/"), "Previous").await?;
        assert!(html.contains("Question 1 / 6"));
        let html = act(format!("{base}/"), "Previous").await?;
        assert!(html.contains("Question 6 / 6"));
        Ok(())
    }

    #[tokio::test]
    async fn test_cheat_screen_without_reveal() -> Fallible<()> {
        let base = spawn_server(QuestionBank::builtin(), None, CheatScope::Session).await;
        let html = act(format!("{base}/"), "Cheat").await?;
        assert!(html.contains("Are you sure you want to do this?"));
        let html = act(format!("{base}/cheat"), "Back").await?;
        assert!(html.contains("Question 1 / 6"));
        let html = act(format!("{base}/"), "True").await?;
        assert!(html.contains("Correct!"));
        Ok(())
    }

    #[tokio::test]
    async fn test_cheat_screen_closed() -> Fallible<()> {
        let base = spawn_server(QuestionBank::builtin(), None, CheatScope::Session).await;
        // Without an open cheat screen, go back to the main screen.
        let html = get(format!("{base}/cheat")).await?;
        assert!(html.contains("Question 1 / 6"));
        let html = act(format!("{base}/cheat"), "ShowAnswer").await?;
        assert!(html.contains("Question 1 / 6"));
        Ok(())
    }

    #[tokio::test]
    async fn test_leaving_cheat_screen_delivers_result() -> Fallible<()> {
        let base = spawn_server(QuestionBank::builtin(), None, CheatScope::Session).await;
        act(format!("{base}/"), "Cheat").await?;
        act(format!("{base}/cheat"), "ShowAnswer").await?;
        // Visiting the main screen directly also closes the cheat screen.
        get(format!("{base}/")).await?;
        let html = act(format!("{base}/"), "False").await?;
        assert!(html.contains("Cheating is wrong."));
        Ok(())
    }

    #[tokio::test]
    async fn test_final_score() -> Fallible<()> {
        let bank = QuestionBank::new(
            "Capitals",
            vec![
                Question::new("Lima is the capital of Peru.", true),
                Question::new("Sydney is the capital of Australia.", false),
                Question::new("Bern is the capital of Switzerland.", true),
            ],
        )?;
        let base = spawn_server(bank, None, CheatScope::Session).await;
        let html = get(format!("{base}/")).await?;
        assert!(html.contains("<h1>Capitals</h1>"));
        act(format!("{base}/"), "True").await?;
        act(format!("{base}/"), "Next").await?;
        act(format!("{base}/"), "True").await?;
        act(format!("{base}/"), "Next").await?;
        let html = act(format!("{base}/"), "True").await?;
        assert!(html.contains("Correct!"));
        assert!(html.contains("You scored 2 out of 3 (66.67%)."));
        Ok(())
    }

    #[tokio::test]
    async fn test_restore() -> Fallible<()> {
        let directory = create_tmp_directory()?;
        let state_path = directory.join("state.json");
        let saved = SavedState {
            score: 3,
            answered_questions: vec![false, true, true, true, false, false],
        };
        saved.save(&state_path)?;
        let base = spawn_server(
            QuestionBank::builtin(),
            Some(state_path.clone()),
            CheatScope::Session,
        )
        .await;
        let html = get(format!("{base}/")).await?;
        assert!(html.contains("Score: 3"));
        // Showing question 2 makes it answerable again.
        act(format!("{base}/"), "Next").await?;
        let html = act(format!("{base}/"), "True").await?;
        assert!(html.contains("Correct!"));
        assert!(html.contains("Score: 4"));
        Ok(())
    }

    #[tokio::test]
    async fn test_restore_malformed() -> Fallible<()> {
        let directory = create_tmp_directory()?;
        let state_path = directory.join("state.json");
        write(&state_path, "not json")?;
        let base = spawn_server(
            QuestionBank::builtin(),
            Some(state_path.clone()),
            CheatScope::Session,
        )
        .await;
        let html = get(format!("{base}/")).await?;
        assert!(html.contains("Score: 0"));
        Ok(())
    }
}
