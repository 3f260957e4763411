//! The external text-generation seam.
//!
//! Advice is produced by a collaborator outside this process. The dashboard
//! only knows the [`TextGenerator`] trait; the binary wires in a
//! [`CommandGenerator`] when one is configured and an
//! [`UnconfiguredGenerator`] otherwise.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use water_core::error::{DashboardError, Result};

// ── Conversation types ────────────────────────────────────────────────────────

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One role-tagged turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// A system instruction followed by the user's prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn new(system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: system.into(),
                },
                ChatMessage {
                    role: Role::User,
                    content: prompt.into(),
                },
            ],
        }
    }

    /// Content of the last user turn.
    pub fn user_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

// ── TextGenerator ─────────────────────────────────────────────────────────────

/// A black-box completion service.
///
/// Implementations block until the text is available. Failures surface as
/// [`DashboardError::ExternalService`].
pub trait TextGenerator {
    fn complete(&self, request: &ChatRequest) -> Result<String>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn complete(&self, request: &ChatRequest) -> Result<String> {
        (**self).complete(request)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn complete(&self, request: &ChatRequest) -> Result<String> {
        (**self).complete(request)
    }
}

// ── CommandGenerator ──────────────────────────────────────────────────────────

/// Runs an external program per request.
///
/// The request is written to the program's stdin as JSON
/// (`{"messages":[{"role":"system","content":..},{"role":"user","content":..}]}`)
/// and its trimmed stdout is the completion. No timeout is applied.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl TextGenerator for CommandGenerator {
    fn complete(&self, request: &ChatRequest) -> Result<String> {
        let payload = serde_json::to_vec(request)?;
        debug!(program = %self.program, bytes = payload.len(), "requesting advice");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                DashboardError::ExternalService(format!("failed to start '{}': {e}", self.program))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(&payload) {
                Ok(()) => {}
                // The command exited without reading; its status and stdout decide.
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!(program = %self.program, "advice command closed stdin early");
                }
                Err(e) => {
                    return Err(DashboardError::ExternalService(format!(
                        "failed to send request: {e}"
                    )));
                }
            }
        }

        let output = child.wait_with_output().map_err(|e| {
            DashboardError::ExternalService(format!("failed to read response: {e}"))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = %output.status, "advice command failed");
            return Err(DashboardError::ExternalService(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8(output.stdout).map_err(|_| {
            DashboardError::ExternalService("response was not valid UTF-8".to_string())
        })?;
        let text = text.trim();
        if text.is_empty() {
            return Err(DashboardError::ExternalService(
                "empty response".to_string(),
            ));
        }

        Ok(text.to_string())
    }
}

// ── UnconfiguredGenerator ─────────────────────────────────────────────────────

/// Stand-in used when no advice command is configured; every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredGenerator;

impl TextGenerator for UnconfiguredGenerator {
    fn complete(&self, _request: &ChatRequest) -> Result<String> {
        Err(DashboardError::ExternalService(
            "no text generator configured (set --advice-command)".to_string(),
        ))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
