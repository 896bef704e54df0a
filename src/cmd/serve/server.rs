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

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;

use axum::Router;
use axum::routing::post;
use mashq_core::Fallible;
use mashq_core::fail;
use tokio::net::TcpListener;
use tokio::select;
use tokio::signal;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;

use crate::cmd::serve::api::add_word_handler;
use crate::cmd::serve::api::add_words_bulk_handler;
use crate::cmd::serve::assets::static_handler;
use crate::store::WordStore;
use crate::utils::WORDS_FILE;
use crate::utils::resolve_directory;

pub struct ServerConfig {
    pub directory: Option<String>,
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct ServerState {
    /// Absolute path to the site directory.
    pub directory: PathBuf,
    /// The word store. The mutex serializes read-modify-write cycles,
    /// so concurrent appends cannot drop each other's words.
    pub store: Arc<Mutex<WordStore>>,
}

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let directory = resolve_directory(config.directory)?;
    let store = WordStore::new(directory.join(WORDS_FILE));
    let state = ServerState {
        directory,
        store: Arc::new(Mutex::new(store)),
    };

    // The front end may be opened from the filesystem too, so the API
    // answers cross-origin requests.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new();
    let app = app.route("/api/words", post(add_word_handler));
    let app = app.route("/api/words/bulk", post(add_words_bulk_handler));
    let app = app.fallback(static_handler);
    let app = app.layer(cors);
    let app = app.with_state(state);
    let bind = format!("{}:{}", config.host, config.port);

    log::debug!("Starting server on {bind}");
    let listener = match TcpListener::bind(&bind).await {
        Ok(listener) => listener,
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            return fail("server is already running.");
        }
        Err(e) => return Err(e.into()),
    };
    println!("Server running at http://{bind}/");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    select! {
        _ = ctrl_c => {
            log::debug!("Received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            log::debug!("Received SIGTERM, shutting down gracefully");
        },
    }
}
