use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    flip_card::{
        show_flip_card,
        CardDeck,
        CardEvent,
        CARD_SIZE,
    },
    settings::StudyCountPolicy,
    theme::Theme,
};
use crate::core::{
    StudyState,
    VerbId,
};

const GRID_SPACING: f32 = 16.0;

pub fn verb_grid(
    ui: &mut egui::Ui,
    state: &mut StudyState,
    deck: &mut CardDeck,
    theme: &Theme,
    policy: StudyCountPolicy,
    actions: &mut ActionQueue,
) {
    let ctx = ui.ctx().clone();

    ui.vertical_centered(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.search_query)
                .hint_text("🔍 Search verbs...")
                .desired_width(360.0),
        );
    });
    ui.add_space(GRID_SPACING);

    let visible = state.filtered_verbs();
    let visible_ids: Vec<VerbId> = visible.iter().map(|v| v.id).collect();
    deck.sync_mounted(&visible_ids);

    if visible.is_empty() {
        if !state.is_loading() {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.label(egui::RichText::new("🔍").size(40.0).color(theme.comment(&ctx)));
                ui.label(egui::RichText::new("No verbs found").color(theme.comment(&ctx)));
            });
        }
        return;
    }

    let columns = ((ui.available_width() + GRID_SPACING) / (CARD_SIZE.x + GRID_SPACING))
        .floor()
        .max(1.0) as usize;

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        for row in visible.chunks(columns) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = GRID_SPACING;
                for verb in row {
                    let card = deck.card_mut(verb.id);
                    match show_flip_card(ui, card, verb, theme, policy) {
                        Some(CardEvent::Studied(id)) => actions.push(UiAction::MarkStudied(id)),
                        Some(CardEvent::OpenImageDialog(id)) => {
                            actions.push(UiAction::OpenImageDialog(id))
                        }
                        None => {}
                    }
                }
            });
            ui.add_space(GRID_SPACING);
        }
    });
}
