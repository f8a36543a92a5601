//! Main application state and egui integration.

use chrono::Local;
use eframe::egui;

use fittrack::ml::ModelState;
use fittrack::session::Session;
use fittrack::storage::config::{self, AppConfig};
use fittrack::tracker::Tracker;
use fittrack::ui::screens::{
    AdminDashboardScreen, AuthScreen, Screen, ScreenAction, UserDashboardScreen,
};
use fittrack::ui::theme;

/// Main application state.
pub struct FitTrackApp {
    /// Current screen
    current_screen: Screen,
    /// Application configuration
    config: AppConfig,
    /// Store and model controller
    tracker: Tracker,
    /// This client's session
    session: Session,
    /// Login/registration screen state
    auth_screen: AuthScreen,
    /// User dashboard state
    user_screen: UserDashboardScreen,
    /// Admin dashboard state
    admin_screen: AdminDashboardScreen,
}

impl FitTrackApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, tracker: Tracker) -> Self {
        cc.egui_ctx.set_visuals(theme::visuals(config.ui.theme));
        cc.egui_ctx.set_zoom_factor(config.ui.font_scale);

        Self {
            current_screen: Screen::Auth,
            config,
            tracker,
            session: Session::new(),
            auth_screen: AuthScreen::new(),
            user_screen: UserDashboardScreen::new(),
            admin_screen: AdminDashboardScreen::new(),
        }
    }

    /// Navigate to a different screen.
    fn navigate(&mut self, screen: Screen) {
        tracing::debug!("Navigating from {:?} to {:?}", self.current_screen, screen);
        self.current_screen = screen;
    }

    fn handle_action(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::LoggedIn => {
                self.user_screen = UserDashboardScreen::new();
                self.admin_screen = AdminDashboardScreen::new();
            }
            ScreenAction::LoggedOut => self.auth_screen.reset(),
        }
        self.navigate(Screen::for_session(&self.session));
    }

    /// Toggle the theme between dark and light and persist the choice.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.config.ui.theme = theme::toggled(self.config.ui.theme);
        ctx.set_visuals(theme::visuals(self.config.ui.theme));

        if let Err(e) = config::save_config(&self.config) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    }
}

impl eframe::App for FitTrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let model_state = self.tracker.predictor().state();

        // Keep repainting while the model trains so the save button updates
        if model_state == ModelState::Training {
            ctx.request_repaint_after(std::time::Duration::from_millis(500));
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("FitTrack");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(theme::toggle_icon(self.config.ui.theme)).clicked() {
                        self.toggle_theme(ctx);
                    }
                    if let Some(user) = self.session.user() {
                        ui.label(&user.username);
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                match &model_state {
                    ModelState::Ready => {
                        ui.label("Calorie model ready");
                    }
                    ModelState::Training => {
                        ui.label("Training calorie model...");
                    }
                    ModelState::Failed(message) => {
                        let color = theme::error_color(ui);
                        ui.colored_label(color, format!("Calorie model unavailable: {}", message));
                    }
                }
            });
        });

        let now = Local::now().naive_local();

        let action = match self.current_screen {
            Screen::Auth => {
                let mut action = None;
                egui::CentralPanel::default().show(ctx, |ui| {
                    action = self.auth_screen.show(
                        ui,
                        &self.tracker,
                        &mut self.session,
                        now.date(),
                    );
                });
                action
            }
            Screen::UserDashboard => {
                self.user_screen
                    .show(ctx, &self.tracker, &mut self.session, now)
            }
            Screen::AdminDashboard => {
                self.admin_screen.show(ctx, &self.tracker, &mut self.session)
            }
        };

        if let Some(action) = action {
            self.handle_action(action);
        }
    }
}
