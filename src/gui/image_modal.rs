use eframe::egui;

use crate::core::StudyState;

pub enum ImageModalAction {
    Save,
    Close,
}

/// Dialog for attaching an image url to the selected verb. Open while the
/// state has a selected verb; the url being edited lives in the state.
pub struct ImageModal;

impl ImageModal {
    pub fn show(ctx: &egui::Context, state: &mut StudyState) -> Option<ImageModalAction> {
        let (title, saving) = match state.selected_verb() {
            Some(verb) => (format!("Add image: {}", verb.infinitive), state.is_saving_image()),
            None => return None,
        };

        let mut action = None;

        let modal = egui::Modal::new(egui::Id::new("image_modal")).show(ctx, |ui| {
            ui.set_width(380.0);
            ui.heading(title);
            ui.add_space(10.0);

            let response = ui.add_enabled(
                !saving,
                egui::TextEdit::singleline(&mut state.pending_image_url)
                    .hint_text("Image URL")
                    .desired_width(f32::INFINITY),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                let can_save = !saving && !state.pending_image_url.trim().is_empty();
                if ui.add_enabled(can_save, egui::Button::new("Save")).clicked()
                    || (submitted && can_save)
                {
                    action = Some(ImageModalAction::Save);
                }
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
                if saving {
                    ui.add(egui::Spinner::new());
                    ui.weak("Saving...");
                }
            });
        });

        if modal.should_close() && action.is_none() {
            action = Some(ImageModalAction::Close);
        }

        action
    }
}
