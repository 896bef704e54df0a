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

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use axum::extract::State;
use axum::http::HeaderName;
use axum::http::Method;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::http::header::CONTENT_TYPE;
use percent_encoding::percent_decode_str;

use crate::cmd::serve::server::ServerState;

/// The asset loader takes site-relative request paths and returns the
/// absolute path to the file, if it exists.
///
/// This takes unsafe strings from the client, so we have to ensure there's
/// no possibility of directory traversals.
pub struct AssetLoader {
    /// Absolute path to the site root directory.
    root: PathBuf,
}

/// Errors that can occur when loading a path.
#[derive(Debug, PartialEq)]
pub enum AssetLoaderError {
    /// Path is absolute.
    Absolute,
    /// Path does not exist.
    NotFound,
    /// Path is not a file.
    NotFile,
    /// Path points to a symbolic link.
    SymbolicLink,
    /// Path contains parent (`..`) components.
    ParentComponent,
}

impl AssetLoader {
    /// Construct a new [`AssetLoader`].
    pub fn new(path: PathBuf) -> Self {
        assert!(path.is_absolute());
        Self { root: path }
    }

    /// Given a path string from the client, check that a file exists at
    /// that location within the site root directory.
    ///
    /// Symbolic links and absolute paths are rejected.
    pub fn validate(&self, path: &str) -> Result<PathBuf, AssetLoaderError> {
        let path: PathBuf = PathBuf::from(path);
        if path.components().any(|c| c == Component::ParentDir) {
            return Err(AssetLoaderError::ParentComponent);
        }
        if path.is_absolute() {
            return Err(AssetLoaderError::Absolute);
        }
        let path: PathBuf = self.root.join(path);
        if !path.exists() {
            return Err(AssetLoaderError::NotFound);
        }
        if path.is_symlink() {
            return Err(AssetLoaderError::SymbolicLink);
        }
        if !path.is_file() {
            return Err(AssetLoaderError::NotFile);
        }
        Ok(path)
    }
}

/// The content types the site ships.
fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    match extension.as_str() {
        "html" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

type FileResponse = (StatusCode, [(HeaderName, &'static str); 1], Vec<u8>);

/// Fallback handler: serves static files out of the site directory.
/// Anything that is not a GET gets a 405.
pub async fn static_handler(
    State(state): State<ServerState>,
    method: Method,
    uri: Uri,
) -> FileResponse {
    if method != Method::GET && method != Method::HEAD {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(CONTENT_TYPE, "application/json")],
            b"{\"error\":\"Method not allowed\"}".to_vec(),
        );
    }
    let path = percent_decode_str(uri.path()).decode_utf8_lossy();
    let path = path.trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };
    let loader = AssetLoader::new(state.directory.clone());
    let validated_path: PathBuf = match loader.validate(path) {
        Ok(p) => p,
        Err(_) => return not_found(&loader).await,
    };
    let mime = content_type(&validated_path);
    match tokio::fs::read(validated_path).await {
        Ok(bytes) => (StatusCode::OK, [(CONTENT_TYPE, mime)], bytes),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(CONTENT_TYPE, "text/plain")],
            b"Internal Server Error".to_vec(),
        ),
    }
}

/// Serve the site's `404.html` when it ships one.
async fn not_found(loader: &AssetLoader) -> FileResponse {
    if let Ok(page) = loader.validate("404.html") {
        if let Ok(bytes) = tokio::fs::read(page).await {
            return (StatusCode::NOT_FOUND, [(CONTENT_TYPE, "text/html")], bytes);
        }
    }
    (
        StatusCode::NOT_FOUND,
        [(CONTENT_TYPE, "text/html")],
        b"<h1>404 Not Found</h1>".to_vec(),
    )
}
