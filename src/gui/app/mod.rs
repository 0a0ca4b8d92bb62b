mod modals;

use eframe::egui;
use modals::Modals;
use tracing::{
    debug,
    error,
    info,
    warn,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    flip_card::CardDeck,
    image_modal::{
        ImageModal,
        ImageModalAction,
    },
    message_overlay::MessageOverlay,
    notifications::Notifications,
    progress_panel::progress_panel,
    settings::{
        data::SETTINGS_FILE,
        SettingsData,
    },
    theme::{
        set_theme,
        Theme,
    },
    tips_panel::tips_panel,
    top_bar::{
        Tab,
        TopBar,
    },
    verb_grid::verb_grid,
};
use crate::{
    api::VerbApi,
    core::{
        study_state::StateEvent,
        tasks::{
            TaskManager,
            TaskResult,
        },
        StudyState,
        VerbDeckError,
    },
    persistence::save_json,
};

pub struct VerbDeckApp {
    // Verb data
    pub state: StudyState,
    pub deck: CardDeck,

    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub tab: Tab,
    pub theme: Theme,
    pub message_overlay: MessageOverlay,
    pub notifications: Notifications,

    // Modals
    pub modals: Modals,

    task_manager: TaskManager,
}

impl VerbDeckApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_data: SettingsData,
    ) -> Result<Self, VerbDeckError> {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let api = VerbApi::new(settings_data.api_url.clone(), settings_data.request_timeout())?;
        let task_manager = TaskManager::new(api)?.with_repaint(cc.egui_ctx.clone());

        let mut app = Self {
            // Verb data
            state: StudyState::new(),
            deck: CardDeck::new(),

            // Configuration
            settings_data,

            // UI State
            tab: Tab::default(),
            theme: Theme::dracula(),
            message_overlay: MessageOverlay::new(),
            notifications: Notifications::new(),

            // Modals
            modals: Modals::default(),

            task_manager,
        };

        app.setup_theme(cc);
        app.load_verbs();

        Ok(app)
    }

    fn setup_theme(&self, cc: &eframe::CreationContext<'_>) {
        set_theme(&cc.egui_ctx, &self.theme);

        let (theme, preference) = if self.settings_data.dark_mode {
            (egui::Theme::Dark, egui::ThemePreference::Dark)
        } else {
            (egui::Theme::Light, egui::ThemePreference::Light)
        };
        cc.egui_ctx.set_theme(theme);
        cc.egui_ctx.options_mut(|o| o.theme_preference = preference);
    }

    fn load_verbs(&mut self) {
        if self.state.begin_load() {
            info!(url = %self.settings_data.api_url, "loading verbs");
            self.message_overlay.set_message("Loading verbs...");
            self.task_manager.load_verbs();
        }
    }
}

impl eframe::App for VerbDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.sync_dark_mode(ctx);

        let mut actions = ActionQueue::new();

        TopBar::show(
            ctx,
            &mut self.tab,
            self.state.sync_queue_len(),
            self.state.has_pending_writes(),
            &mut actions,
        );

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Verbs => verb_grid(
                ui,
                &mut self.state,
                &mut self.deck,
                &self.theme,
                self.settings_data.study_count_policy,
                &mut actions,
            ),
            Tab::Tips => {
                self.deck.sync_mounted(&[]);
                tips_panel(ui, &self.theme);
            }
            Tab::Progress => {
                self.deck.sync_mounted(&[]);
                progress_panel(ui, self.state.verbs(), &self.theme);
            }
        });

        match ImageModal::show(ctx, &mut self.state) {
            Some(ImageModalAction::Save) => actions.push(UiAction::SaveImage),
            Some(ImageModalAction::Close) => actions.push(UiAction::CloseImageDialog),
            None => {}
        }

        if let Some(settings) = self.modals.settings.show(ctx) {
            self.apply_settings(settings);
        }

        self.message_overlay.show(ctx, &self.theme);
        self.notifications.show(ctx, &self.theme);

        for action in actions.drain() {
            self.handle_action(action);
        }
    }
}

impl VerbDeckApp {
    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::MarkStudied(verb_id) => match self.state.mark_studied(verb_id) {
                Ok(request) => self.task_manager.submit_write(request),
                Err(e) => warn!(error = %e, "could not mark verb studied"),
            },
            UiAction::OpenImageDialog(verb_id) => self.state.open_image_dialog(verb_id),
            UiAction::SaveImage => {
                if let Some(request) = self.state.submit_image() {
                    self.task_manager.submit_write(request);
                }
            }
            UiAction::CloseImageDialog => self.state.close_image_dialog(),
            UiAction::SyncStudyEvents => {
                let requests = self.state.retry_failed_study_events();
                info!(count = requests.len(), "re-sending study events");
                self.task_manager.submit_writes(requests);
            }
            UiAction::OpenSettings => {
                self.modals.settings.open_settings(self.settings_data.clone());
            }
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        debug!(task = result.task_type(), "task result");

        match result {
            TaskResult::LoadingMessage(message) => {
                self.message_overlay.set_message(message);
            }
            TaskResult::VerbsLoaded(result) => {
                self.message_overlay.clear_message();
                let event = self.state.finish_load(result);
                self.report_event(event);
            }
            TaskResult::WriteCompleted { request_id, result } => {
                if let Some(event) = self.state.complete_write(request_id, result) {
                    self.report_event(event);
                }
            }
        }
    }

    fn report_event(&mut self, event: StateEvent) {
        match event {
            StateEvent::Loaded { count } => info!(count, "verb deck ready"),
            StateEvent::LoadFailed { error } => {
                error!(error = %error, "failed to load verbs");
                self.notifications.error("Error", format!("Failed to load verbs: {error}"));
            }
            StateEvent::StudyConfirmed { verb_id } => debug!(%verb_id, "study event saved"),
            StateEvent::StudyQueued { verb_id, error } => {
                warn!(%verb_id, error = %error, "study event not saved, queued for sync");
            }
            StateEvent::ImageSaved { verb_id } => {
                info!(%verb_id, "image saved");
                self.notifications.success("Success!", "Image added to verb");
            }
            StateEvent::ImageFailed { verb_id, error } => {
                warn!(%verb_id, error = %error, "failed to save image");
                self.notifications.error("Error", "Failed to save image");
            }
        }
    }

    fn apply_settings(&mut self, settings: SettingsData) {
        if self.settings_data.endpoint_changed(&settings) {
            match VerbApi::new(settings.api_url.clone(), settings.request_timeout()) {
                Ok(api) => self.task_manager.set_api(api),
                Err(e) => {
                    error!(error = %e, "failed to rebuild HTTP client");
                    self.notifications.error("Error", format!("Settings not applied: {e}"));
                    return;
                }
            }
        }

        self.settings_data = settings;
        self.save_settings();
    }

    fn sync_dark_mode(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.save_settings();
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            warn!(error = %e, "failed to save settings");
        }
    }
}
