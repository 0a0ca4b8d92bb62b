use eframe::egui;

use super::theme::Theme;

pub struct GrammarTip {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

pub const GRAMMAR_TIPS: [GrammarTip; 6] = [
    GrammarTip {
        icon: "🕑",
        title: "Present Perfect",
        description: "Used for actions connected to the present. Formula: have/has + V3.",
        example: "I have been to London three times.",
    },
    GrammarTip {
        icon: "📅",
        title: "Past Simple vs Past Perfect",
        description: "Past Simple is a finished action. Past Perfect is an action before another one in the past.",
        example: "She had left before I arrived.",
    },
    GrammarTip {
        icon: "⚡",
        title: "Articles a/an/the",
        description: "a/an are indefinite (first mention). the is definite (already known).",
        example: "I saw a dog. The dog was friendly.",
    },
    GrammarTip {
        icon: "💬",
        title: "Word order",
        description: "English word order is strict: Subject → Verb → Object.",
        example: "She reads books every day.",
    },
    GrammarTip {
        icon: "📖",
        title: "Modal verbs",
        description: "Can, must, should, may do not change with the person and are followed by an infinitive.",
        example: "You should study irregular verbs.",
    },
    GrammarTip {
        icon: "🌐",
        title: "Prepositions of time",
        description: "in for months/years/seasons, on for days/dates, at for exact time.",
        example: "at 5 pm, on Monday, in July",
    },
];

const TIP_WIDTH: f32 = 300.0;

pub fn tips_panel(ui: &mut egui::Ui, theme: &Theme) {
    let ctx = ui.ctx().clone();

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("Grammar tips").size(28.0).strong().color(theme.purple(&ctx)));
        ui.weak("Useful hints for learning English");
    });
    ui.add_space(16.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::Vec2::splat(12.0);
            for tip in &GRAMMAR_TIPS {
                egui::Frame::group(ui.style()).inner_margin(12.0).show(ui, |ui| {
                    ui.set_width(TIP_WIDTH);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(tip.icon).size(20.0));
                        ui.label(theme.heading(&ctx, tip.title));
                    });
                    ui.add_space(4.0);
                    ui.label(tip.description);
                    ui.add_space(4.0);
                    egui::Frame::NONE
                        .fill(ui.visuals().faint_bg_color)
                        .inner_margin(8.0)
                        .corner_radius(4.0)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(egui::RichText::new(tip.example).italics());
                        });
                });
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tip_has_an_example() {
        assert_eq!(GRAMMAR_TIPS.len(), 6);
        assert!(GRAMMAR_TIPS.iter().all(|tip| !tip.title.is_empty() && !tip.example.is_empty()));
    }
}
