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

mod api;
mod assets;
pub mod server;

#[cfg(test)]
mod tests {
    use std::fs;

    use mashq_core::Fallible;
    use portpicker::pick_unused_port;
    use reqwest::StatusCode;
    use serde_json::Value;
    use serde_json::json;
    use tempfile::tempdir;
    use tokio::spawn;

    use crate::cmd::serve::server::ServerConfig;
    use crate::cmd::serve::server::start_server;
    use crate::utils::wait_for_server;

    const TEST_HOST: &str = "127.0.0.1";

    fn create_site_directory() -> Fallible<String> {
        let dir = tempdir()?.keep();
        fs::write(
            dir.join("words.json"),
            "{\n  \"words\": [\n    \"كَتَبَ\"\n  ]\n}",
        )?;
        fs::write(
            dir.join("index.html"),
            "<!doctype html><title>تعليم تهجي الكلمات</title>",
        )?;
        fs::write(dir.join("404.html"), "<h1>مَفْقُود</h1>")?;
        Ok(dir.canonicalize()?.display().to_string())
    }

    async fn spawn_server() -> Fallible<(String, u16)> {
        let port = pick_unused_port().unwrap();
        let directory = create_site_directory()?;
        let config = ServerConfig {
            directory: Some(directory.clone()),
            host: TEST_HOST.to_string(),
            port,
        };
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;
        Ok((directory, port))
    }

    #[tokio::test]
    async fn test_start_server_on_non_existent_directory() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let config = ServerConfig {
            directory: Some("./derpherp".to_string()),
            host: TEST_HOST.to_string(),
            port,
        };
        let result = start_server(config).await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
        Ok(())
    }

    #[tokio::test]
    async fn test_second_instance_refused() -> Fallible<()> {
        let (directory, port) = spawn_server().await?;
        let config = ServerConfig {
            directory: Some(directory),
            host: TEST_HOST.to_string(),
            port,
        };
        let result = start_server(config).await;
        assert_eq!(
            result.err().unwrap().to_string(),
            "error: server is already running."
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_static_files() -> Fallible<()> {
        let (_directory, port) = spawn_server().await?;

        // `index.html` is served at the root.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/")).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/html");
        assert!(response.text().await?.contains("تعليم تهجي الكلمات"));

        // `words.json` is served with the JSON content type.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/words.json")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        // Unknown paths get the site's 404 page.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.text().await?.contains("مَفْقُود"));

        Ok(())
    }

    #[tokio::test]
    async fn test_method_not_allowed() -> Fallible<()> {
        let (_directory, port) = spawn_server().await?;
        let response = reqwest::Client::new()
            .delete(format!("http://{TEST_HOST}:{port}/index.html"))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: Value = response.json().await?;
        assert_eq!(body["error"], "Method not allowed");
        Ok(())
    }

    #[tokio::test]
    async fn test_cors_preflight() -> Fallible<()> {
        let (_directory, port) = spawn_server().await?;
        let response = reqwest::Client::new()
            .request(
                reqwest::Method::OPTIONS,
                format!("http://{TEST_HOST}:{port}/api/words"),
            )
            .header("Origin", "http://example.com")
            .header("Access-Control-Request-Method", "POST")
            .send()
            .await?;
        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_add_word() -> Fallible<()> {
        let (_directory, port) = spawn_server().await?;
        let client = reqwest::Client::new();
        let url = format!("http://{TEST_HOST}:{port}/api/words");

        // A new word.
        let response = client
            .post(&url)
            .json(&json!({ "word": "جَدِيدٌ" }))
            .send()
            .await?;
        assert!(response.status().is_success());
        let body: Value = response.json().await?;
        assert_eq!(body["success"], Value::Bool(true));
        assert_eq!(body["message"], "Word added successfully");

        // The same word again.
        let response = client
            .post(&url)
            .json(&json!({ "word": "جَدِيدٌ" }))
            .send()
            .await?;
        assert!(response.status().is_success());
        let body: Value = response.json().await?;
        assert_eq!(body["message"], "Word already exists");

        Ok(())
    }

    #[tokio::test]
    async fn test_add_word_bad_requests() -> Fallible<()> {
        let (_directory, port) = spawn_server().await?;
        let client = reqwest::Client::new();
        let url = format!("http://{TEST_HOST}:{port}/api/words");

        // A body that is not JSON.
        let response = client.post(&url).body("derp herp").send().await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await?;
        assert_eq!(body["error"], "Invalid JSON");

        // A word that is not a string.
        let response = client.post(&url).json(&json!({ "word": 42 })).send().await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await?;
        assert_eq!(body["error"], "Invalid word data");

        // No word at all.
        let response = client.post(&url).json(&json!({})).send().await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await?;
        assert_eq!(body["error"], "Invalid word data");

        Ok(())
    }

    #[tokio::test]
    async fn test_add_words_bulk() -> Fallible<()> {
        let (directory, port) = spawn_server().await?;
        let client = reqwest::Client::new();
        let url = format!("http://{TEST_HOST}:{port}/api/words/bulk");

        // The store already holds كَتَبَ, so only جَدِيدٌ is new. The
        // reported total counts submitted words, duplicates included.
        let response = client
            .post(&url)
            .json(&json!({ "words": ["كَتَبَ", "كَتَبَ", "جَدِيدٌ"] }))
            .send()
            .await?;
        assert!(response.status().is_success());
        let body: Value = response.json().await?;
        assert_eq!(body["success"], Value::Bool(true));
        assert_eq!(body["message"], "Words added successfully");
        assert_eq!(body["addedCount"], 1);
        assert_eq!(body["totalCount"], 3);

        // The store file on disk reflects the append.
        let text = fs::read_to_string(format!("{directory}/words.json"))?;
        assert!(text.contains("جَدِيدٌ"));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_words_bulk_bad_requests() -> Fallible<()> {
        let (_directory, port) = spawn_server().await?;
        let client = reqwest::Client::new();
        let url = format!("http://{TEST_HOST}:{port}/api/words/bulk");

        // `words` is not an array.
        let response = client
            .post(&url)
            .json(&json!({ "words": "كَتَبَ" }))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await?;
        assert_eq!(body["error"], "Words must be an array");

        // An array with a non-string entry.
        let response = client
            .post(&url)
            .json(&json!({ "words": ["كَتَبَ", 1] }))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await?;
        assert_eq!(body["error"], "All words must be strings");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_words_file() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = tempdir()?.keep();
        fs::write(directory.join("index.html"), "<!doctype html>")?;
        let config = ServerConfig {
            directory: Some(directory.canonicalize()?.display().to_string()),
            host: TEST_HOST.to_string(),
            port,
        };
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        let response = reqwest::Client::new()
            .post(format!("http://{TEST_HOST}:{port}/api/words"))
            .json(&json!({ "word": "جَدِيدٌ" }))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json().await?;
        assert_eq!(body["error"], "Failed to read words file");

        Ok(())
    }
}
