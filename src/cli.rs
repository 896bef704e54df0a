// Copyright 2026 The Mashq Authors
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

use std::process::exit;

use clap::Parser;
use mashq_core::Fallible;
use tokio::spawn;

use crate::cmd::add::add_words;
use crate::cmd::check::check_store;
use crate::cmd::generate::generate_worksheet;
use crate::cmd::seed::seed_store;
use crate::cmd::serve::server::ServerConfig;
use crate::cmd::serve::server::start_server;
use crate::utils::wait_for_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the worksheet builder and word store over HTTP.
    Serve {
        /// Path to the site directory. By default, the current working directory is used.
        directory: Option<String>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 3000.
        #[arg(long, default_value_t = 3000)]
        port: u16,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
    },
    /// Generate a printable worksheet as an HTML file.
    Generate {
        /// Path to the site directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Comma-separated letters to practice, or "all".
        #[arg(long, default_value = "all")]
        letters: String,
        /// Comma-separated mark names (e.g. "fatha,sukun"), or "all".
        #[arg(long, default_value = "all")]
        marks: String,
        /// Path to the output file. Default is worksheet.html in the site directory.
        #[arg(long)]
        output: Option<String>,
        /// Seed for deterministic output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check that every stored word is fully diacritized.
    Check {
        /// Path to the site directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Add fully diacritized words to the store.
    Add {
        /// The words to add. Comma-separated lists are accepted.
        #[arg(required = true)]
        words: Vec<String>,
        /// Path to the site directory. By default, the current working directory is used.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Create a words file with the built-in starter words.
    Seed {
        /// Path to the site directory. By default, the current working directory is used.
        directory: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            directory,
            host,
            port,
            open_browser,
        } => {
            if open_browser.unwrap_or(true) {
                // Start a separate task to open the browser once the server is up.
                let browser_host = host.clone();
                spawn(async move {
                    match wait_for_server(&browser_host, port).await {
                        Ok(_) => {
                            let _ = open::that(format!("http://{browser_host}:{port}/"));
                        }
                        Err(e) => {
                            eprintln!("Failed to connect to server: {e}");
                            exit(-1)
                        }
                    }
                });
            }
            let config = ServerConfig {
                directory,
                host,
                port,
            };
            start_server(config).await
        }
        Command::Generate {
            directory,
            letters,
            marks,
            output,
            seed,
        } => generate_worksheet(directory, &letters, &marks, output, seed),
        Command::Check { directory } => check_store(directory),
        Command::Add { words, directory } => add_words(directory, &words),
        Command::Seed { directory } => seed_store(directory),
    }
}
