use std::{
    collections::HashMap,
    f32::consts::PI,
};

use eframe::egui::{
    self,
    Align,
    Layout,
    Rect,
    RichText,
    Stroke,
    Vec2,
};

use super::{
    settings::StudyCountPolicy,
    theme::Theme,
};
use crate::core::{
    Verb,
    VerbId,
};

pub const CARD_SIZE: Vec2 = Vec2::new(240.0, 300.0);
const FLIP_SECONDS: f32 = 0.35;
const IMAGE_SIZE: f32 = 96.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardInput {
    /// Click on the card body.
    Activate,
    /// Click on the upload control. Never flips the card.
    UploadImage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    Studied(VerbId),
    OpenImageDialog(VerbId),
}

#[derive(Debug, Clone)]
pub struct FlipCard {
    verb_id: VerbId,
    face: CardFace,
    revealed_once: bool,
}

impl FlipCard {
    pub fn new(verb_id: VerbId) -> Self {
        Self { verb_id, face: CardFace::Front, revealed_once: false }
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn handle(&mut self, input: CardInput, policy: StudyCountPolicy) -> Option<CardEvent> {
        match input {
            CardInput::UploadImage => Some(CardEvent::OpenImageDialog(self.verb_id)),
            CardInput::Activate => match self.face {
                CardFace::Back => {
                    self.face = CardFace::Front;
                    None
                }
                CardFace::Front => {
                    self.face = CardFace::Back;
                    let counts = match policy {
                        StudyCountPolicy::OncePerMount => !self.revealed_once,
                        StudyCountPolicy::EveryReveal => true,
                    };
                    self.revealed_once = true;
                    counts.then_some(CardEvent::Studied(self.verb_id))
                }
            },
        }
    }
}

/// Flip state for the cards currently in the grid. A card that leaves the
/// grid loses its state and comes back face up as a fresh mount.
#[derive(Debug, Default)]
pub struct CardDeck {
    cards: HashMap<VerbId, FlipCard>,
}

impl CardDeck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync_mounted(&mut self, visible: &[VerbId]) {
        self.cards.retain(|id, _| visible.contains(id));
        for id in visible {
            self.cards.entry(*id).or_insert_with(|| FlipCard::new(*id));
        }
    }

    pub fn card_mut(&mut self, verb_id: VerbId) -> &mut FlipCard {
        self.cards.entry(verb_id).or_insert_with(|| FlipCard::new(verb_id))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

pub fn show_flip_card(
    ui: &mut egui::Ui,
    card: &mut FlipCard,
    verb: &Verb,
    theme: &Theme,
    policy: StudyCountPolicy,
) -> Option<CardEvent> {
    let (rect, response) = ui.allocate_exact_size(CARD_SIZE, egui::Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

    let t = ui.ctx().animate_bool_with_time(
        egui::Id::new(("flip_card", verb.id.0)),
        card.face() == CardFace::Back,
        FLIP_SECONDS,
    );
    let squeeze = (t * PI).cos().abs().max(0.02);
    let card_rect =
        Rect::from_center_size(rect.center(), Vec2::new(rect.width() * squeeze, rect.height()));
    let showing_back = t >= 0.5;

    let ctx = ui.ctx().clone();
    let visuals = ui.visuals();
    let fill = if showing_back { visuals.faint_bg_color } else { visuals.extreme_bg_color };
    let border = if response.hovered() { theme.cyan(&ctx) } else { visuals.window_stroke.color };

    let painter = ui.painter_at(rect);
    painter.rect_filled(card_rect, 12.0, fill);
    painter.rect_stroke(card_rect, 12.0, Stroke::new(2.0, border), egui::StrokeKind::Inside);

    // Content only renders while the card is wide enough to read
    if squeeze < 0.6 {
        return card_input(&response, false).and_then(|input| card.handle(input, policy));
    }

    let mut content = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(card_rect.shrink(14.0))
            .layout(Layout::top_down(Align::Center)),
    );
    content.set_clip_rect(card_rect);

    let mut upload_clicked = false;
    if showing_back {
        show_back(&mut content, verb, theme);
    } else {
        show_front(&mut content, verb, theme);

        let button_rect = Rect::from_min_size(
            card_rect.right_top() + Vec2::new(-36.0, 8.0),
            Vec2::splat(28.0),
        );
        upload_clicked = upload_button(ui, button_rect, verb.id, theme).clicked();
    }

    card_input(&response, upload_clicked).and_then(|input| card.handle(input, policy))
}

/// Upload control drawn over the card. Interacts without allocating layout
/// space so the grid row advances the same on both faces.
fn upload_button(
    ui: &mut egui::Ui,
    rect: Rect,
    verb_id: VerbId,
    theme: &Theme,
) -> egui::Response {
    let response = ui
        .interact(rect, egui::Id::new(("upload_image", verb_id.0)), egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text("Add image");

    let color = if response.hovered() { theme.cyan(ui.ctx()) } else { theme.comment(ui.ctx()) };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "⬆",
        egui::FontId::proportional(20.0),
        color,
    );

    response
}

fn card_input(response: &egui::Response, upload_clicked: bool) -> Option<CardInput> {
    if upload_clicked {
        Some(CardInput::UploadImage)
    } else if response.clicked() {
        Some(CardInput::Activate)
    } else {
        None
    }
}

fn show_front(ui: &mut egui::Ui, verb: &Verb, theme: &Theme) {
    let ctx = ui.ctx().clone();
    ui.add_space(8.0);

    match &verb.image_url {
        Some(url) => {
            ui.add(
                egui::Image::from_uri(url.as_str())
                    .fit_to_exact_size(Vec2::splat(IMAGE_SIZE))
                    .show_loading_spinner(true),
            );
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(IMAGE_SIZE), egui::Sense::hover());
            ui.painter().rect_filled(rect, 8.0, ui.visuals().faint_bg_color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "🖼",
                egui::FontId::proportional(36.0),
                theme.comment(&ctx),
            );
        }
    }

    ui.add_space(16.0);
    ui.label(RichText::new(&verb.infinitive).size(32.0).strong().color(theme.purple(&ctx)));
    ui.add_space(4.0);
    ui.label(RichText::new(&verb.translation).size(16.0).color(theme.comment(&ctx)));
}

fn show_back(ui: &mut egui::Ui, verb: &Verb, theme: &Theme) {
    let ctx = ui.ctx().clone();
    ui.add_space(24.0);

    ui.label(RichText::new("Past Simple").size(12.0).color(theme.comment(&ctx)));
    ui.label(RichText::new(&verb.past_simple).size(26.0).strong().color(theme.cyan(&ctx)));

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    ui.label(RichText::new("Past Participle").size(12.0).color(theme.comment(&ctx)));
    ui.label(RichText::new(&verb.past_participle).size(26.0).strong().color(theme.orange(&ctx)));

    ui.add_space(16.0);
    ui.label(RichText::new(&verb.translation).size(16.0).color(theme.comment(&ctx)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_reveal_counts_once_per_mount() {
        let mut card = FlipCard::new(VerbId(1));
        let policy = StudyCountPolicy::OncePerMount;

        assert_eq!(card.face(), CardFace::Front);
        assert_eq!(card.handle(CardInput::Activate, policy), Some(CardEvent::Studied(VerbId(1))));
        assert_eq!(card.face(), CardFace::Back);

        assert_eq!(card.handle(CardInput::Activate, policy), None);
        assert_eq!(card.face(), CardFace::Front);

        assert_eq!(card.handle(CardInput::Activate, policy), None);
        assert_eq!(card.face(), CardFace::Back);
    }

    #[test]
    fn test_every_reveal_policy() {
        let mut card = FlipCard::new(VerbId(2));
        let policy = StudyCountPolicy::EveryReveal;

        let events: Vec<_> = (0..4).filter_map(|_| card.handle(CardInput::Activate, policy)).collect();
        assert_eq!(events, vec![CardEvent::Studied(VerbId(2)), CardEvent::Studied(VerbId(2))]);
    }

    #[test]
    fn test_upload_never_flips() {
        let mut card = FlipCard::new(VerbId(3));
        let event = card.handle(CardInput::UploadImage, StudyCountPolicy::OncePerMount);

        assert_eq!(event, Some(CardEvent::OpenImageDialog(VerbId(3))));
        assert_eq!(card.face(), CardFace::Front);

        // The first real reveal still counts
        assert_eq!(
            card.handle(CardInput::Activate, StudyCountPolicy::OncePerMount),
            Some(CardEvent::Studied(VerbId(3)))
        );
    }

    #[test]
    fn test_card_input_prefers_upload() {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = ui.allocate_response(Vec2::splat(10.0), egui::Sense::click());
                assert_eq!(card_input(&response, true), Some(CardInput::UploadImage));
                assert_eq!(card_input(&response, false), None);
            });
        });
    }

    #[test]
    fn test_card_width_same_on_both_faces() {
        let verb = crate::core::models::test_verb(1, "go", "идти", 0);
        let theme = Theme::dracula();
        let policy = StudyCountPolicy::OncePerMount;

        let advance = |face: CardFace| {
            let ctx = egui::Context::default();
            let mut card = FlipCard::new(verb.id);
            card.face = face;
            let mut width = 0.0;
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        let start = ui.cursor().min.x;
                        show_flip_card(ui, &mut card, &verb, &theme, policy);
                        width = ui.cursor().min.x - start;
                    });
                });
            });
            width
        };

        let front = advance(CardFace::Front);
        assert_eq!(front, advance(CardFace::Back));
        assert_eq!(front, CARD_SIZE.x + egui::Context::default().style().spacing.item_spacing.x);
    }

    #[test]
    fn test_remount_resets_card() {
        let mut deck = CardDeck::new();
        let policy = StudyCountPolicy::OncePerMount;
        deck.sync_mounted(&[VerbId(1), VerbId(2)]);
        assert_eq!(deck.len(), 2);

        deck.card_mut(VerbId(1)).handle(CardInput::Activate, policy);
        assert_eq!(deck.card_mut(VerbId(1)).face(), CardFace::Back);

        // Filtered out, then back
        deck.sync_mounted(&[VerbId(2)]);
        assert_eq!(deck.len(), 1);
        deck.sync_mounted(&[VerbId(1), VerbId(2)]);

        let card = deck.card_mut(VerbId(1));
        assert_eq!(card.face(), CardFace::Front);
        assert_eq!(card.handle(CardInput::Activate, policy), Some(CardEvent::Studied(VerbId(1))));
    }
}
