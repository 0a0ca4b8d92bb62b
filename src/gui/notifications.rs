use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::gui::theme::Theme;

const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(5);
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    created: Instant,
}

/// Toast stack in the bottom right corner.
#[derive(Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationKind::Success, title.into(), message.into());
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationKind::Error, title.into(), message.into());
    }

    fn push(&mut self, kind: NotificationKind, title: String, message: String) {
        self.items.push(Notification { kind, title, message, created: Instant::now() });
        if self.items.len() > MAX_VISIBLE {
            self.items.remove(0);
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|n| now.duration_since(n.created) < NOTIFICATION_LIFETIME);
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        self.prune(Instant::now());
        if self.items.is_empty() {
            return;
        }

        let mut dismissed = None;

        egui::Area::new(egui::Id::new("notifications"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::Vec2::new(-16.0, -16.0))
            .show(ctx, |ui| {
                ui.set_max_width(320.0);
                for (index, notification) in self.items.iter().enumerate() {
                    let accent = match notification.kind {
                        NotificationKind::Success => theme.green(ctx),
                        NotificationKind::Error => theme.red(ctx),
                    };

                    egui::Frame::popup(ui.style())
                        .stroke(egui::Stroke::new(1.5, accent))
                        .show(ui, |ui| {
                            ui.set_width(300.0);
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(&notification.title).strong().color(accent));
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.small_button("✕").clicked() {
                                            dismissed = Some(index);
                                        }
                                    },
                                );
                            });
                            ui.label(&notification.message);
                        });
                    ui.add_space(6.0);
                }
            });

        if let Some(index) = dismissed {
            self.items.remove(index);
        }

        // Keep repainting so expired toasts disappear without input
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
