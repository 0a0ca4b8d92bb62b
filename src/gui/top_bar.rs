use eframe::egui::{
    self,
    containers,
};

use super::actions::{
    ActionQueue,
    UiAction,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Verbs,
    Tips,
    Progress,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Verbs, Tab::Tips, Tab::Progress];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Verbs => "📚 Verbs",
            Tab::Tips => "💡 Tips",
            Tab::Progress => "📈 Progress",
        }
    }
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        tab: &mut Tab,
        queued_study_events: usize,
        syncing: bool,
        actions: &mut ActionQueue,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Settings").clicked() {
                        actions.push(UiAction::OpenSettings);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.separator();
                for candidate in Tab::ALL {
                    ui.selectable_value(tab, candidate, candidate.label());
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_sync_status(ui, queued_study_events, syncing, actions);
                });
            });
        });
    }

    fn show_sync_status(
        ui: &mut egui::Ui,
        queued_study_events: usize,
        syncing: bool,
        actions: &mut ActionQueue,
    ) {
        if syncing {
            ui.add(egui::Spinner::new().size(12.0));
            return;
        }

        let (color, tooltip) = if queued_study_events == 0 {
            (egui::Color32::from_rgb(0, 200, 0), "All study events saved".to_string())
        } else {
            (
                egui::Color32::from_rgb(200, 80, 80),
                format!("{queued_study_events} study events not saved"),
            )
        };

        if queued_study_events > 0 && ui.small_button("Sync").on_hover_text(&tooltip).clicked() {
            actions.push(UiAction::SyncStudyEvents);
        }

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(&tooltip);
            ui.small("Server").on_hover_text(&tooltip);
        });
    }
}
