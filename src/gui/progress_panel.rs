use eframe::egui;

use super::theme::Theme;
use crate::core::{
    progress::studied_ranking,
    StudyProgress,
    Verb,
};

pub fn progress_panel(ui: &mut egui::Ui, verbs: &[Verb], theme: &Theme) {
    let ctx = ui.ctx().clone();
    let progress = StudyProgress::from_verbs(verbs);

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.set_max_width(560.0);

            egui::Frame::group(ui.style()).inner_margin(16.0).show(ui, |ui| {
                ui.label(egui::RichText::new("📈 Your progress").size(22.0).strong());
                ui.add_space(12.0);

                ui.columns(3, |columns| {
                    stat(&mut columns[0], progress.total, "Total verbs", theme.purple(&ctx));
                    stat(&mut columns[1], progress.studied_count, "Studied", theme.cyan(&ctx));
                    stat(&mut columns[2], progress.mastered_count, "Mastered", theme.orange(&ctx));
                });

                ui.add_space(16.0);
                progress_bar(ui, "Study progress", progress.studied_percentage(), theme.cyan(&ctx));
                ui.add_space(8.0);
                progress_bar(
                    ui,
                    "Mastery level",
                    progress.mastered_percentage(),
                    theme.orange(&ctx),
                );
            });

            ui.add_space(16.0);

            for verb in studied_ranking(verbs) {
                egui::Frame::group(ui.style()).inner_margin(10.0).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.strong(&verb.infinitive);
                            ui.weak(&verb.translation);
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.strong(verb.studied_count.to_string());
                            ui.label(egui::RichText::new("🔄").color(theme.purple(&ctx)));
                            if verb.is_mastered() {
                                ui.label(egui::RichText::new("★").color(theme.orange(&ctx)));
                            }
                        });
                    });
                });
            }
        });
    });
}

fn stat(ui: &mut egui::Ui, value: usize, label: &str, color: egui::Color32) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(value.to_string()).size(28.0).strong().color(color));
        ui.weak(label);
    });
}

fn progress_bar(ui: &mut egui::Ui, label: &str, percentage: f32, color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("{:.0}%", percentage));
        });
    });
    ui.add(egui::ProgressBar::new(percentage / 100.0).fill(color).desired_height(10.0));
}
