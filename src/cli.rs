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

use clap::Parser;

use crate::cmd::check::check_bank;
use crate::cmd::export::ExportFormat;
use crate::cmd::export::export_bank;
use crate::cmd::quiz::server::ServerConfig;
use crate::cmd::quiz::server::start_server;
use crate::error::Fallible;
use crate::quiz::state::CheatScope;
use crate::types::bank::QuestionBank;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Take the quiz in the browser.
    Quiz {
        /// Optional path to a TOML question bank. Defaults to the built-in bank.
        bank: Option<PathBuf>,
        /// The port to serve the quiz on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// File where the score and answered questions are saved and restored.
        #[arg(long)]
        state: Option<PathBuf>,
        /// Whether revealing an answer marks one question or the whole session.
        #[arg(long, default_value_t = CheatScope::Question)]
        cheat_scope: CheatScope,
        /// Don't open the browser.
        #[arg(long)]
        no_open: bool,
    },
    /// Check that a question bank is valid.
    Check {
        /// Path to the TOML question bank.
        bank: PathBuf,
    },
    /// Print a question bank.
    Export {
        /// Optional path to a TOML question bank. Defaults to the built-in bank.
        bank: Option<PathBuf>,
        /// Output format.
        #[arg(long, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Quiz {
            bank,
            port,
            state,
            cheat_scope,
            no_open,
        } => {
            let bank = QuestionBank::load(bank.as_deref())?;
            println!("{}: {} questions.", bank.title(), bank.len());
            println!("Serving on http://127.0.0.1:{port}/");
            let config = ServerConfig {
                bank,
                port,
                state_path: state,
                cheat_scope,
                open_browser: !no_open,
            };
            start_server(config).await
        }
        Command::Check { bank } => check_bank(&bank),
        Command::Export { bank, format } => export_bank(bank.as_deref(), format),
    }
}
