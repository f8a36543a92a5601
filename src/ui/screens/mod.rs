//! UI screens for the application.

pub mod admin_dashboard;
pub mod auth;
pub mod user_dashboard;

pub use admin_dashboard::AdminDashboardScreen;
pub use auth::AuthScreen;
pub use user_dashboard::UserDashboardScreen;

use egui::{RichText, Ui};

use crate::session::Session;
use crate::ui::theme;

/// Screen navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Login and registration
    #[default]
    Auth,
    /// Regular user dashboard
    UserDashboard,
    /// Administrator dashboard
    AdminDashboard,
}

impl Screen {
    /// The screen a session belongs on.
    pub fn for_session(session: &Session) -> Self {
        match session.user() {
            None => Screen::Auth,
            Some(user) if user.is_admin => Screen::AdminDashboard,
            Some(_) => Screen::UserDashboard,
        }
    }
}

/// Navigation requested by a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    LoggedIn,
    LoggedOut,
}

/// A one-line status message shown under a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
}

impl Feedback {
    pub fn show(&self, ui: &mut Ui) {
        let (text, color) = match self {
            Feedback::Success(text) => (text, theme::success_color(ui)),
            Feedback::Info(text) => (text, ui.visuals().text_color()),
            Feedback::Warning(text) => (text, theme::warning_color(ui)),
            Feedback::Error(text) => (text, theme::error_color(ui)),
        };
        ui.label(RichText::new(text).color(color));
    }
}
