//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::auth::session::Session;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Current session, if logged in
    pub session: RwSignal<Option<Session>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Staff position record from the API. Identity is the server-assigned id;
/// it is absent until the server has created the record.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Position {
    #[serde(rename = "position_id", default)]
    pub id: Option<i64>,
    #[serde(rename = "position_code")]
    pub code: String,
    #[serde(rename = "position_name")]
    pub name: String,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        session: create_rw_signal(Session::load()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// End the session: drop the stored token and the session signal.
    /// Single path for both logout and a 401 from any screen.
    pub fn expire_session(&self) {
        Session::clear();
        self.session.set(None);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_wire_field_names() {
        let json = r#"[{"position_id":1,"position_code":"C1","position_name":"N1"}]"#;
        let list: Vec<Position> = serde_json::from_str(json).unwrap();
        assert_eq!(
            list,
            vec![Position {
                id: Some(1),
                code: "C1".to_string(),
                name: "N1".to_string(),
            }]
        );
    }

    #[test]
    fn test_position_without_id() {
        let json = r#"{"position_code":"OPS","position_name":"Operations Lead"}"#;
        let position: Position = serde_json::from_str(json).unwrap();
        assert_eq!(position.id, None);
        assert_eq!(position.code, "OPS");
    }
}
