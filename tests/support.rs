//! Common test support utilities and fixtures
//!
//! This module provides a recording mock transport and a temporary workspace
//! shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use sync_settings::commands::CommandContext;
use sync_settings::config::Settings;
use sync_settings::gist::{
    DiagnosticLogger, GistClient, Transport, TransportError, TransportRequest, TransportResponse,
};
use tempfile::TempDir;

/// Scripted outcome of one request
#[derive(Debug, Clone)]
pub enum MockReply {
    Respond(TransportResponse),
    Fail(String),
}

/// Transport that records every request and replays scripted replies
///
/// Once the script is exhausted the last reply is repeated.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    last: Mutex<Option<MockReply>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Always answer with `status` and a JSON body
    pub fn responding(status: u16, body: Value) -> Arc<Self> {
        let transport = Self::default();
        transport.push(MockReply::Respond(TransportResponse::new(
            status,
            body.to_string(),
        )));
        Arc::new(transport)
    }

    /// Always answer with `status` and a raw body
    pub fn responding_raw(status: u16, body: &str) -> Arc<Self> {
        let transport = Self::default();
        transport.push(MockReply::Respond(TransportResponse::new(status, body)));
        Arc::new(transport)
    }

    /// Always fail before any response is obtained
    pub fn failing(cause: &str) -> Arc<Self> {
        let transport = Self::default();
        transport.push(MockReply::Fail(cause.to_string()));
        Arc::new(transport)
    }

    /// Answer each request with the next reply in order
    pub fn scripted(replies: Vec<MockReply>) -> Arc<Self> {
        let transport = Self::default();
        for reply in replies {
            transport.push(reply);
        }
        Arc::new(transport)
    }

    pub fn push(&self, reply: MockReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("No request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);

        let reply = {
            let mut replies = self.replies.lock().unwrap();
            let mut last = self.last.lock().unwrap();
            if let Some(next) = replies.pop_front() {
                *last = Some(next.clone());
                next
            } else {
                last.clone().expect("MockTransport has no scripted reply")
            }
        };

        match reply {
            MockReply::Respond(response) => Ok(response),
            MockReply::Fail(cause) => Err(TransportError(cause)),
        }
    }
}

/// Logger capturing warned bodies
#[derive(Default)]
pub struct RecordingLogger {
    pub warnings: Mutex<Vec<Value>>,
}

impl DiagnosticLogger for RecordingLogger {
    fn warn(&self, body: &Value) {
        self.warnings.lock().unwrap().push(body.clone());
    }

    fn exception(&self, _error: &dyn std::error::Error) {}
}

/// Authenticated client wired to `transport`
pub fn client_with(transport: Arc<MockTransport>) -> GistClient {
    GistClient::new(Some("test-token".to_string()), None, None).with_transport(transport)
}

/// Anonymous client wired to `transport`
pub fn anonymous_client_with(transport: Arc<MockTransport>) -> GistClient {
    GistClient::new(None, None, None).with_transport(transport)
}

/// A gist response as returned by the API
pub fn sample_gist(id: &str, files: &[(&str, &str)]) -> Value {
    let files: serde_json::Map<String, Value> = files
        .iter()
        .map(|(name, content)| {
            (
                name.to_string(),
                json!({"filename": name, "content": content, "truncated": false}),
            )
        })
        .collect();
    json!({
        "id": id,
        "description": "settings",
        "files": files,
        "history": [
            {
                "version": "57a7f021a713b1c5a6a199b54cc514735d2d462f",
                "committed_at": "2010-04-14T02:15:15Z",
                "change_status": {"additions": 1, "deletions": 0, "total": 1}
            }
        ]
    })
}

/// A test workspace with a synced directory and a settings file
pub struct Workspace {
    pub root: TempDir,
    pub settings_path: PathBuf,
    pub directory: PathBuf,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Create a new temporary workspace with an empty synced directory
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        let settings_path = root.path().join("sync-settings.yaml");
        let directory = root.path().join("User");
        fs::create_dir_all(&directory).expect("Failed to create synced directory");
        Self {
            root,
            settings_path,
            directory,
        }
    }

    /// Write a file inside the synced directory
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.directory.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.directory.join(relative)).expect("Failed to read file")
    }

    pub fn settings_str(&self) -> &str {
        self.settings_path.to_str().expect("Settings path not UTF-8")
    }

    /// Settings pointing at the synced directory, with a token and optional gist id
    pub fn settings(&self, gist_id: Option<&str>) -> Settings {
        Settings {
            access_token: Some("test-token".to_string()),
            gist_id: gist_id.map(String::from),
            directory: Some(self.directory.to_string_lossy().to_string()),
            ..Settings::default()
        }
    }

    /// Save settings and build a command context wired to `transport`
    pub fn context(&self, settings: Settings, transport: Arc<MockTransport>) -> CommandContext {
        settings
            .save(self.settings_str())
            .expect("Failed to save settings");
        CommandContext::new(settings, self.settings_str().to_string())
            .with_client(client_with(transport))
    }

    pub fn load_settings(&self) -> Settings {
        Settings::load(self.settings_str()).expect("Failed to load settings")
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }
}
