//! Session State Machine
//!
//! Authentication and navigation for the current browser tab, driven by a
//! pure reducer: `Session::reduce(event)` returns the next state. Events that
//! do not apply to the current phase leave the state unchanged.
//!
//! ```text
//! Anonymous --ShowLogin--> LoginPrompted --SubmitLogin(valid)--> Authenticated
//!     ^                          |                                    |
//!     +-------CancelLogin--------+                                    |
//!     +---------------------------Logout------------------------------+
//! ```

use serde::{Deserialize, Serialize};

use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionPhase {
    /// Landing page only
    #[default]
    Anonymous,
    /// Login overlay shown over the landing page
    LoginPrompted,
    /// Sidebar shell with the current page
    Authenticated,
}

/// Login form contents. Any non-empty pair is accepted.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Everything that can happen to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum SessionEvent {
    ShowLogin,
    CancelLogin,
    SubmitLogin(Credentials),
    Logout,
    Navigate(Page),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    phase: SessionPhase,
    current_page: Page,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    pub fn login_overlay_visible(&self) -> bool {
        self.phase == SessionPhase::LoginPrompted
    }

    /// Apply one event and return the resulting state
    pub fn reduce(self, event: SessionEvent) -> Self {
        use SessionEvent::*;
        use SessionPhase::*;

        let next = match (self.phase, event) {
            (Anonymous, ShowLogin) => Self { phase: LoginPrompted, ..self },
            (LoginPrompted, CancelLogin) => Self { phase: Anonymous, ..self },
            (LoginPrompted, SubmitLogin(credentials)) => {
                if credentials.is_valid() {
                    Self { phase: Authenticated, ..self }
                } else {
                    log::debug!("login submitted with an empty field, staying on the form");
                    self
                }
            }
            (Authenticated, Logout) => Self {
                phase: Anonymous,
                current_page: Page::default(),
            },
            (Authenticated, Navigate(page)) => Self { current_page: page, ..self },
            (phase, event) => {
                log::debug!("ignoring {:?} in phase {:?}", event, phase);
                self
            }
        };

        if next != self {
            log::debug!(
                "session {:?}/{} -> {:?}/{}",
                self.phase,
                self.current_page.id(),
                next.phase,
                next.current_page.id()
            );
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompted() -> Session {
        Session::new().reduce(SessionEvent::ShowLogin)
    }

    fn signed_in() -> Session {
        prompted().reduce(SessionEvent::SubmitLogin(Credentials::new("a@b.com", "x")))
    }

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert_eq!(session.phase(), SessionPhase::Anonymous);
        assert!(!session.is_authenticated());
        assert!(!session.login_overlay_visible());
        assert_eq!(session.current_page(), Page::Dashboard);
    }

    #[test]
    fn test_valid_login() {
        let session = signed_in();
        assert!(session.is_authenticated());
        assert!(!session.login_overlay_visible());
        assert_eq!(session.current_page(), Page::Dashboard);
    }

    #[test]
    fn test_login_with_empty_field_is_noop() {
        let before = prompted();
        let after = before.reduce(SessionEvent::SubmitLogin(Credentials::new("", "x")));
        assert_eq!(after, before);
        assert!(after.login_overlay_visible());

        let after = before.reduce(SessionEvent::SubmitLogin(Credentials::new("a@b.com", "")));
        assert_eq!(after.phase(), SessionPhase::LoginPrompted);
    }

    #[test]
    fn test_cancel_login() {
        let session = prompted().reduce(SessionEvent::CancelLogin);
        assert_eq!(session.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn test_logout_resets_page() {
        let session = signed_in()
            .reduce(SessionEvent::Navigate(Page::Water))
            .reduce(SessionEvent::Logout);
        assert_eq!(session.phase(), SessionPhase::Anonymous);
        assert_eq!(session.current_page(), Page::Dashboard);
    }

    #[test]
    fn test_navigation_only_when_authenticated() {
        let anonymous = Session::new().reduce(SessionEvent::Navigate(Page::Map));
        assert_eq!(anonymous.current_page(), Page::Dashboard);

        let prompted = prompted().reduce(SessionEvent::Navigate(Page::Map));
        assert_eq!(prompted.current_page(), Page::Dashboard);

        let mut session = signed_in();
        for page in Page::ALL {
            session = session.reduce(SessionEvent::Navigate(page));
            assert_eq!(session.current_page(), page);
        }
    }

    #[test]
    fn test_out_of_phase_events_are_ignored() {
        let anonymous = Session::new();
        assert_eq!(anonymous.reduce(SessionEvent::Logout), anonymous);
        assert_eq!(anonymous.reduce(SessionEvent::CancelLogin), anonymous);
        assert_eq!(
            anonymous.reduce(SessionEvent::SubmitLogin(Credentials::new("a@b.com", "x"))),
            anonymous
        );

        let session = signed_in();
        assert_eq!(session.reduce(SessionEvent::ShowLogin), session);
    }

    #[test]
    fn test_machine_cycles() {
        let session = signed_in().reduce(SessionEvent::Logout);
        let again = session
            .reduce(SessionEvent::ShowLogin)
            .reduce(SessionEvent::SubmitLogin(Credentials::new("ops@city.gov", "pw")));
        assert!(again.is_authenticated());
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("a@b.com", "hunter2"));
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_session_serializes() {
        let json = serde_json::to_string(&signed_in()).unwrap();
        assert_eq!(json, r#"{"phase":"authenticated","current_page":"dashboard"}"#);
    }
}
