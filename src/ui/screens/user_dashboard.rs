//! Regular user dashboard: sidebar, daily goal, workout form and history.

use chrono::NaiveDateTime;
use egui::{RichText, Ui};

use super::{Feedback, ScreenAction};
use crate::accounts::types::{HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};
use crate::ml::ModelState;
use crate::session::Session;
use crate::tracker::{Tracker, TrackerError};
use crate::ui::theme;
use crate::ui::widgets::{CalorieChart, MetricDisplay, MetricSize, WorkoutTable};
use crate::workouts::{
    DailyProgress, WorkoutEntry, BODY_TEMP_RANGE_C, DEFAULT_DAILY_GOAL, DURATION_RANGE_MIN,
    GOAL_RANGE_KCAL, HEART_RATE_RANGE_BPM,
};

const BADGE_MESSAGE: &str =
    "Congratulations! You've reached your daily goal and earned a badge 🏆!";

/// History view tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryTab {
    #[default]
    Chart,
    Data,
}

/// User dashboard state.
#[derive(Default)]
pub struct UserDashboardScreen {
    goal_input: Option<u32>,
    goal_feedback: Option<Feedback>,
    /// Workout form, filled from the profile on first render
    entry: Option<WorkoutEntry>,
    workout_feedback: Option<Feedback>,
    history_tab: HistoryTab,
}

impl UserDashboardScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        tracker: &Tracker,
        session: &mut Session,
        now: NaiveDateTime,
    ) -> Option<ScreenAction> {
        let today = now.date();
        let progress = match tracker.daily_progress(session, today) {
            Ok(progress) => progress,
            Err(e) => {
                tracing::error!("Failed to load daily progress: {}", e);
                self.workout_feedback = Some(Feedback::Error(e.to_string()));
                DailyProgress::new(session.daily_goal(), 0.0)
            }
        };

        let mut action = None;

        egui::SidePanel::left("user_sidebar")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                action = self.show_sidebar(ui, tracker, session, &progress, today);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_goal_setter(ui, tracker, session, &progress);
                ui.separator();
                self.show_workout_form(ui, tracker, session, now);
                ui.separator();
                self.show_history(ui, tracker, session);
            });
        });

        action
    }

    fn show_sidebar(
        &mut self,
        ui: &mut Ui,
        tracker: &Tracker,
        session: &mut Session,
        progress: &DailyProgress,
        today: chrono::NaiveDate,
    ) -> Option<ScreenAction> {
        let user = session.user()?;

        ui.add_space(8.0);
        ui.heading(format!("Welcome, {}!", user.username));
        ui.add_space(8.0);

        MetricDisplay::age(user.age_on(today))
            .with_size(MetricSize::Small)
            .show(ui);
        MetricDisplay::bmi(user.bmi())
            .with_size(MetricSize::Small)
            .show(ui);

        ui.separator();
        ui.label(RichText::new("Today's Progress 🔥").strong());

        MetricDisplay::daily_goal(progress)
            .with_size(MetricSize::Small)
            .show(ui);
        MetricDisplay::burned_today(progress)
            .with_size(MetricSize::Small)
            .with_color(theme::accent_color(ui))
            .show(ui);
        MetricDisplay::calories_left(progress)
            .with_size(MetricSize::Small)
            .show(ui);

        if let Some(fraction) = progress.fraction() {
            ui.add(egui::ProgressBar::new(fraction).show_percentage());
        }

        ui.add_space(16.0);
        if ui.button("Logout").clicked() {
            tracker.logout(session);
            *self = Self::new();
            return Some(ScreenAction::LoggedOut);
        }

        None
    }

    fn show_goal_setter(
        &mut self,
        ui: &mut Ui,
        tracker: &Tracker,
        session: &mut Session,
        progress: &DailyProgress,
    ) {
        ui.heading("Set Your Daily Goal 🎯");

        let goal = self
            .goal_input
            .get_or_insert(session.daily_goal().unwrap_or(DEFAULT_DAILY_GOAL));

        ui.horizontal(|ui| {
            ui.label("Set your daily calorie burn goal (kcal)");
            ui.add(
                egui::DragValue::new(goal)
                    .range(GOAL_RANGE_KCAL)
                    .speed(50.0),
            );
            if ui.button("Save Goal").clicked() {
                let kcal = *goal;
                self.goal_feedback = Some(match tracker.set_daily_goal(session, kcal) {
                    Ok(()) => {
                        tracing::debug!("Daily goal set to {} kcal", kcal);
                        Feedback::Success(format!("Goal set to {} kcal for today!", kcal))
                    }
                    Err(e) => Feedback::Error(e.to_string()),
                });
            }
        });

        if let Some(feedback) = &self.goal_feedback {
            feedback.show(ui);
        }

        if progress.goal_met() {
            ui.add_space(4.0);
            Feedback::Success(BADGE_MESSAGE.to_string()).show(ui);
        }
    }

    fn show_workout_form(
        &mut self,
        ui: &mut Ui,
        tracker: &Tracker,
        session: &mut Session,
        now: NaiveDateTime,
    ) {
        let Some(user) = session.user() else {
            return;
        };
        let entry = self
            .entry
            .get_or_insert_with(|| WorkoutEntry::for_profile(user.height_cm, user.weight_kg));

        ui.heading("Log a Workout");
        ui.add_space(4.0);

        ui.columns(2, |columns| {
            egui::Grid::new("workout_body")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(&mut columns[0], |ui| {
                    ui.label("Height (cm)");
                    ui.add(
                        egui::DragValue::new(&mut entry.height_cm)
                            .range(HEIGHT_RANGE_CM)
                            .speed(0.5),
                    );
                    ui.end_row();

                    ui.label("Weight (kg)");
                    ui.add(
                        egui::DragValue::new(&mut entry.weight_kg)
                            .range(WEIGHT_RANGE_KG)
                            .speed(0.5),
                    );
                    ui.end_row();
                });

            let ui = &mut columns[1];
            ui.add(
                egui::Slider::new(&mut entry.duration_minutes, DURATION_RANGE_MIN)
                    .text("Duration (min)"),
            );
            ui.add(
                egui::Slider::new(&mut entry.heart_rate_bpm, HEART_RATE_RANGE_BPM)
                    .text("Heart Rate (bpm)"),
            );
            ui.add(
                egui::Slider::new(&mut entry.body_temp_c, BODY_TEMP_RANGE_C)
                    .step_by(0.1)
                    .text("Body Temp (°C)"),
            );
        });

        ui.add_space(8.0);

        let (label, enabled) = save_button(&tracker.predictor().state());
        if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
            let entry = entry.clone();
            self.workout_feedback = Some(match tracker.log_workout(session, &entry, now) {
                Ok(record) => Feedback::Success(format!(
                    "Saved workout! {:.2} calories burned",
                    record.calories
                )),
                Err(TrackerError::InvalidInput(message)) => Feedback::Warning(message),
                Err(e) => {
                    tracing::error!("Failed to save workout: {}", e);
                    Feedback::Error(e.to_string())
                }
            });
        }

        if let Some(feedback) = &self.workout_feedback {
            feedback.show(ui);
        }
    }

    fn show_history(&mut self, ui: &mut Ui, tracker: &Tracker, session: &Session) {
        ui.heading("Workout History");

        let records = match tracker.history(session) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Failed to load workout history: {}", e);
                Feedback::Error(e.to_string()).show(ui);
                return;
            }
        };

        if records.is_empty() {
            Feedback::Info("No workouts recorded yet".to_string()).show(ui);
            return;
        }

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.history_tab, HistoryTab::Chart, "Chart");
            ui.selectable_value(&mut self.history_tab, HistoryTab::Data, "Data");
        });

        match self.history_tab {
            HistoryTab::Chart => {
                CalorieChart::new("user_history_chart", &records).show(ui);
            }
            HistoryTab::Data => {
                WorkoutTable::new("user_history_table", &records).show(ui);
            }
        }
    }
}

/// Save button label and whether it accepts clicks.
///
/// A failed model stays clickable; the next save retries training.
fn save_button(state: &ModelState) -> (&'static str, bool) {
    match state {
        ModelState::Training => ("Save Workout ⏳", false),
        ModelState::Ready | ModelState::Failed(_) => ("Save Workout", true),
    }
}
