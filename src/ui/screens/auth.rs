//! Login and registration screen.

use chrono::{Datelike, NaiveDate};
use egui::{RichText, Ui};

use super::{Feedback, ScreenAction};
use crate::accounts::types::{earliest_dob, latest_dob, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};
use crate::accounts::{AuthError, Registration};
use crate::session::Session;
use crate::tracker::{Tracker, TrackerError};

/// Which form is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Auth screen state.
pub struct AuthScreen {
    mode: AuthMode,
    username: String,
    password: String,
    dob_year: i32,
    dob_month: u32,
    dob_day: u32,
    height_cm: f64,
    weight_kg: f64,
    feedback: Option<Feedback>,
}

impl Default for AuthScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthScreen {
    pub fn new() -> Self {
        Self {
            mode: AuthMode::Login,
            username: String::new(),
            password: String::new(),
            dob_year: 2000,
            dob_month: 1,
            dob_day: 1,
            height_cm: 170.0,
            weight_kg: 70.0,
            feedback: None,
        }
    }

    /// Forget typed credentials, e.g. after logout.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        tracker: &Tracker,
        session: &mut Session,
        today: NaiveDate,
    ) -> Option<ScreenAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(RichText::new("🏋 Fitness Tracker").size(32.0).strong());
            ui.add_space(24.0);
        });

        ui.horizontal(|ui| {
            let before = self.mode;
            ui.radio_value(&mut self.mode, AuthMode::Login, "Login");
            ui.radio_value(&mut self.mode, AuthMode::Register, "Register");
            if self.mode != before {
                self.feedback = None;
            }
        });

        ui.add_space(12.0);

        egui::Grid::new("auth_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Username");
                ui.text_edit_singleline(&mut self.username);
                ui.end_row();

                ui.label("Password");
                ui.add(egui::TextEdit::singleline(&mut self.password).password(true));
                ui.end_row();

                if self.mode == AuthMode::Register {
                    let earliest = earliest_dob();
                    let latest = latest_dob(today);

                    ui.label("Date of Birth");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::DragValue::new(&mut self.dob_year)
                                .range(earliest.year()..=latest.year())
                                .prefix("Year "),
                        );
                        ui.add(
                            egui::DragValue::new(&mut self.dob_month)
                                .range(1..=12)
                                .prefix("Month "),
                        );
                        ui.add(
                            egui::DragValue::new(&mut self.dob_day)
                                .range(1..=31)
                                .prefix("Day "),
                        );
                    });
                    ui.end_row();

                    ui.label("Height (cm)");
                    ui.add(
                        egui::DragValue::new(&mut self.height_cm)
                            .range(HEIGHT_RANGE_CM)
                            .speed(0.5),
                    );
                    ui.end_row();

                    ui.label("Weight (kg)");
                    ui.add(
                        egui::DragValue::new(&mut self.weight_kg)
                            .range(WEIGHT_RANGE_KG)
                            .speed(0.5),
                    );
                    ui.end_row();
                }
            });

        ui.add_space(12.0);

        match self.mode {
            AuthMode::Login => {
                if ui.button("Login").clicked() {
                    action = self.submit_login(tracker, session);
                }
            }
            AuthMode::Register => {
                if ui.button("Register").clicked() {
                    self.submit_registration(tracker, today);
                }
            }
        }

        if let Some(feedback) = &self.feedback {
            ui.add_space(8.0);
            feedback.show(ui);
        }

        action
    }

    fn submit_login(&mut self, tracker: &Tracker, session: &mut Session) -> Option<ScreenAction> {
        match tracker.login(session, &self.username, &self.password) {
            Ok(()) => {
                self.reset();
                Some(ScreenAction::LoggedIn)
            }
            Err(e) => {
                self.feedback = Some(feedback_for(e));
                None
            }
        }
    }

    fn submit_registration(&mut self, tracker: &Tracker, today: NaiveDate) {
        let form = Registration {
            username: self.username.clone(),
            password: self.password.clone(),
            dob: clamp_dob(self.dob_year, self.dob_month, self.dob_day, today),
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
        };

        self.feedback = Some(match tracker.register(&form, today) {
            Ok(_) => {
                self.mode = AuthMode::Login;
                self.password.clear();
                Feedback::Success("Account created! Please login.".to_string())
            }
            Err(e) => feedback_for(e),
        });
    }
}

fn feedback_for(error: TrackerError) -> Feedback {
    match error {
        TrackerError::Auth(AuthError::UsernameTaken) => Feedback::Error(error.to_string()),
        TrackerError::Auth(AuthError::InvalidCredentials) => Feedback::Error(error.to_string()),
        TrackerError::Auth(AuthError::InvalidRegistration(message)) => Feedback::Warning(message),
        other => {
            tracing::error!("Authentication failed: {}", other);
            Feedback::Error(other.to_string())
        }
    }
}

/// Build a date from the picker, pulling the day back into the month and the
/// result into the selectable range.
pub fn clamp_dob(year: i32, month: u32, day: u32, today: NaiveDate) -> NaiveDate {
    let month = month.clamp(1, 12);
    let date = (1..=day.clamp(1, 31))
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
        .unwrap_or_else(earliest_dob);
    date.clamp(earliest_dob(), latest_dob(today))
}
