use eframe::egui;

use super::data::{
    SettingsData,
    StudyCountPolicy,
};

pub struct SettingsModal {
    open: bool,
    temp_settings: SettingsData,
    original_settings: SettingsData,
    timeout_input: String,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self {
            open: false,
            temp_settings: SettingsData::default(),
            original_settings: SettingsData::default(),
            timeout_input: String::new(),
        }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.timeout_input = current_settings.request_timeout_secs.to_string();
        self.temp_settings = current_settings.clone();
        self.original_settings = current_settings;
        self.open = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.temp_settings != self.original_settings
    }

    /// Returns the edited settings once the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.heading("Settings");
            ui.add_space(10.0);

            egui::Grid::new("settings_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.label("Verbs endpoint");
                ui.add(
                    egui::TextEdit::singleline(&mut self.temp_settings.api_url)
                        .desired_width(260.0),
                );
                ui.end_row();

                ui.label("Request timeout (s)");
                if ui
                    .add(egui::TextEdit::singleline(&mut self.timeout_input).desired_width(60.0))
                    .changed()
                {
                    if let Ok(secs) = self.timeout_input.trim().parse::<u64>() {
                        self.temp_settings.request_timeout_secs = secs.max(1);
                    }
                }
                ui.end_row();

                ui.label("Count a study");
                egui::ComboBox::from_id_salt("study_count_policy")
                    .selected_text(self.temp_settings.study_count_policy.label())
                    .show_ui(ui, |ui| {
                        for policy in [StudyCountPolicy::OncePerMount, StudyCountPolicy::EveryReveal]
                        {
                            ui.selectable_value(
                                &mut self.temp_settings.study_count_policy,
                                policy,
                                policy.label(),
                            );
                        }
                    });
                ui.end_row();
            });

            ui.add_space(10.0);

            if self.is_dirty() {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::YELLOW, "⚠");
                    ui.label("Settings have been modified");
                });
                ui.add_space(5.0);
            }

            ui.horizontal(|ui| {
                if ui.add_enabled(self.is_dirty(), egui::Button::new("Save")).clicked() {
                    result = Some(self.temp_settings.clone());
                    ui.close();
                }
                if ui.button("Close").clicked() {
                    ui.close();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Restore Default").clicked() {
                        let dark_mode = self.temp_settings.dark_mode;
                        self.temp_settings = SettingsData { dark_mode, ..SettingsData::new() };
                        self.timeout_input = self.temp_settings.request_timeout_secs.to_string();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
