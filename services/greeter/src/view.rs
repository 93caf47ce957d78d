//! Presentation of the greeting outcome

use serde::Serialize;

use crate::outcome::Outcome;

pub const LOADING_TEXT: &str = "Contacting backend...";

/// Backend connection indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendStatus {
    Connecting,
    Offline,
    Connected,
}

impl std::fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendStatus::Connecting => write!(f, "Connecting..."),
            BackendStatus::Offline => write!(f, "Offline"),
            BackendStatus::Connected => write!(f, "Connected"),
        }
    }
}

/// The three values the presentation layer renders, derived from an outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub text: String,
    pub loading: bool,
    pub error: bool,
    pub backend_status: BackendStatus,
}

impl From<&Outcome> for DisplayState {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Pending => DisplayState {
                text: LOADING_TEXT.to_string(),
                loading: true,
                error: false,
                backend_status: BackendStatus::Connecting,
            },
            Outcome::Success { greeting } => DisplayState {
                text: format!("Backend says: \"{}\"", greeting.message),
                loading: false,
                error: false,
                backend_status: BackendStatus::Connected,
            },
            Outcome::Failure { cause } => DisplayState {
                text: cause.user_message(),
                loading: false,
                error: true,
                backend_status: BackendStatus::Offline,
            },
        }
    }
}

impl DisplayState {
    /// Plain-text rendering for the terminal
    pub fn render_text(&self) -> String {
        format!("{}\nBackend Status: {}", self.text, self.backend_status)
    }
}

/// Render the welcome page HTML
pub fn render_page(display: &DisplayState) -> String {
    let color = if display.error { "#ffcdd2" } else { "white" };
    let dot_color = match display.backend_status {
        BackendStatus::Connecting => "#ffd54f",
        BackendStatus::Offline => "#e57373",
        BackendStatus::Connected => "#81c784",
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Welcome</title>
</head>
<body style="margin: 0; font-family: system-ui, sans-serif; min-height: 100vh; display: flex; justify-content: center; align-items: center; background-color: #f1f5f9;">
    <main style="padding: 2rem; text-align: center; color: white; border-radius: 1rem; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);">
        <h1>Hi!</h1>
        <h2>Welcome</h2>
        <p id="greeting" style="margin-top: 2rem; font-size: 1.25rem; color: {color};">{text}</p>
        <p>Your full-stack development journey starts here</p>
        <small id="backend-status" style="opacity: 0.7;">Backend Status: <span style="color: {dot_color};">&#9679;</span> {status}</small>
    </main>
</body>
</html>"#,
        color = color,
        text = html_escape::encode_safe(&display.text),
        dot_color = dot_color,
        status = display.backend_status,
    )
}
