//! Administrator dashboard: aggregate metrics and per-user drill-down.

use egui::Ui;

use super::{Feedback, ScreenAction};
use crate::accounts::Account;
use crate::session::Session;
use crate::tracker::{AdminOverview, Tracker};
use crate::ui::widgets::{AccountTable, CalorieChart, MetricDisplay, WorkoutTable};

/// Admin dashboard state.
#[derive(Default)]
pub struct AdminDashboardScreen {
    /// `None` means "All Users"
    selected_user: Option<i64>,
}

impl AdminDashboardScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        tracker: &Tracker,
        session: &mut Session,
    ) -> Option<ScreenAction> {
        let mut action = None;

        egui::SidePanel::left("admin_sidebar")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Admin Dashboard 👨‍💼");
                ui.add_space(16.0);
                if ui.button("Logout").clicked() {
                    tracker.logout(session);
                    *self = Self::new();
                    action = Some(ScreenAction::LoggedOut);
                }
            });

        if action.is_some() {
            return action;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let overview = match tracker.admin_overview(session) {
                Ok(overview) => overview,
                Err(e) => {
                    tracing::error!("Failed to load admin overview: {}", e);
                    Feedback::Error(e.to_string()).show(ui);
                    return;
                }
            };

            show_metrics(ui, &overview);
            ui.separator();

            ui.heading("User Management");
            self.show_user_selector(ui, &overview.accounts);
            ui.add_space(8.0);

            match self.selected_user {
                None => AccountTable::new(&overview.accounts).show(ui),
                Some(user_id) => show_user_workouts(ui, tracker, session, user_id),
            }
        });

        action
    }

    fn show_user_selector(&mut self, ui: &mut Ui, accounts: &[Account]) {
        // Selected account may have been removed since the last frame
        if let Some(id) = self.selected_user {
            if !accounts.iter().any(|a| a.id == id) {
                self.selected_user = None;
            }
        }

        let selected_text = self
            .selected_user
            .and_then(|id| accounts.iter().find(|a| a.id == id))
            .map(user_label)
            .unwrap_or_else(|| "All Users".to_string());

        egui::ComboBox::from_label("Select User")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.selected_user, None, "All Users");
                for account in accounts {
                    ui.selectable_value(&mut self.selected_user, Some(account.id), user_label(account));
                }
            });
    }
}

fn show_metrics(ui: &mut Ui, overview: &AdminOverview) {
    ui.columns(3, |columns| {
        MetricDisplay::new(overview.total_users.to_string(), "", "Total Users").show(&mut columns[0]);
        MetricDisplay::new(overview.total_workouts.to_string(), "", "Total Workouts")
            .show(&mut columns[1]);
        MetricDisplay::new(overview.average_calories_label(), "", "Avg Calories")
            .show(&mut columns[2]);
    });
}

fn show_user_workouts(ui: &mut Ui, tracker: &Tracker, session: &Session, user_id: i64) {
    match tracker.user_history(session, user_id) {
        Ok(records) if records.is_empty() => {
            Feedback::Warning("No workouts found for this user".to_string()).show(ui);
        }
        Ok(records) => {
            CalorieChart::new("admin_user_chart", &records).show(ui);
            ui.add_space(8.0);
            WorkoutTable::new("admin_user_table", &records).show(ui);
        }
        Err(e) => {
            tracing::error!("Failed to load workouts for user {}: {}", user_id, e);
            Feedback::Error(e.to_string()).show(ui);
        }
    }
}

/// Selector entry, e.g. `alice (ID: 3)`.
pub fn user_label(account: &Account) -> String {
    format!("{} (ID: {})", account.username, account.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    #[test]
    fn test_user_label() {
        let account = Account {
            id: 3,
            username: "alice".to_string(),
            password_hash: String::new(),
            dob: NaiveDate::from_ymd_opt(1995, 5, 1).unwrap(),
            height_cm: 165.0,
            weight_kg: 60.0,
            is_admin: false,
            created_at: NaiveDateTime::default(),
        };
        assert_eq!(user_label(&account), "alice (ID: 3)");
    }
}
