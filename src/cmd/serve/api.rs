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

//! The word store API. The endpoints validate request shape only; the
//! front end (and the `add` command) are responsible for making sure
//! submitted words are fully diacritized.

use axum::extract::State;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use serde_json::Value;
use serde_json::json;

use crate::cmd::serve::server::ServerState;
use crate::store::StoreError;

type JsonResponse = (StatusCode, [(HeaderName, &'static str); 1], String);

fn respond(status: StatusCode, body: Value) -> JsonResponse {
    (status, [(CONTENT_TYPE, "application/json")], body.to_string())
}

fn bad_request(message: &str) -> JsonResponse {
    respond(StatusCode::BAD_REQUEST, json!({ "error": message }))
}

fn store_failure(error: &StoreError, save_message: &'static str) -> JsonResponse {
    let message = match error {
        StoreError::Read(_) => "Failed to read words file",
        StoreError::Parse(_) => "Failed to parse words file",
        StoreError::Write(_) => save_message,
    };
    respond(StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
}

/// `POST /api/words`: append a single word to the store.
pub async fn add_word_handler(State(state): State<ServerState>, body: String) -> JsonResponse {
    let Ok(request) = serde_json::from_str::<Value>(&body) else {
        return bad_request("Invalid JSON");
    };
    let word = match request.get("word").and_then(Value::as_str) {
        Some(word) if !word.is_empty() => word.to_string(),
        _ => return bad_request("Invalid word data"),
    };
    let store = state.store.lock().unwrap();
    match store.append(&word) {
        Ok(true) => respond(
            StatusCode::OK,
            json!({ "success": true, "message": "Word added successfully" }),
        ),
        Ok(false) => respond(
            StatusCode::OK,
            json!({ "success": true, "message": "Word already exists" }),
        ),
        Err(e) => {
            log::error!("word store: {e}");
            store_failure(&e, "Failed to save word")
        }
    }
}

/// `POST /api/words/bulk`: append a batch of words in one pass. The
/// reported `totalCount` is the number of submitted words, duplicates
/// included.
pub async fn add_words_bulk_handler(
    State(state): State<ServerState>,
    body: String,
) -> JsonResponse {
    let Ok(request) = serde_json::from_str::<Value>(&body) else {
        return bad_request("Invalid JSON");
    };
    let Some(words) = request.get("words").and_then(Value::as_array) else {
        return bad_request("Words must be an array");
    };
    let mut submitted: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        match word.as_str() {
            Some(word) => submitted.push(word.to_string()),
            None => return bad_request("All words must be strings"),
        }
    }
    let store = state.store.lock().unwrap();
    match store.append_bulk(&submitted) {
        Ok(outcome) => respond(
            StatusCode::OK,
            json!({
                "success": true,
                "message": "Words added successfully",
                "addedCount": outcome.added,
                "totalCount": outcome.submitted,
            }),
        ),
        Err(e) => {
            log::error!("word store: {e}");
            store_failure(&e, "Failed to save words")
        }
    }
}
