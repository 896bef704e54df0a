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

use std::path::PathBuf;
use std::time::Duration;

use mashq_core::Fallible;
use mashq_core::fail;
use tokio::net::TcpStream;
use tokio::time::sleep;

/// Name of the word store file inside the site directory.
pub const WORDS_FILE: &str = "words.json";

/// Name of the optional worksheet settings file.
pub const SETTINGS_FILE: &str = "worksheet.toml";

/// Resolve the optional directory argument to an absolute path,
/// defaulting to the current working directory.
pub fn resolve_directory(directory: Option<String>) -> Fallible<PathBuf> {
    let path = match directory {
        Some(directory) => PathBuf::from(directory),
        None => std::env::current_dir()?,
    };
    if !path.exists() {
        return fail("directory does not exist.");
    }
    Ok(path.canonicalize()?)
}

pub async fn wait_for_server(host: &str, port: u16) -> Fallible<()> {
    loop {
        if let Ok(stream) = TcpStream::connect(format!("{host}:{port}")).await {
            drop(stream);
            break;
        }
        sleep(Duration::from_millis(1)).await;
    }
    Ok(())
}
