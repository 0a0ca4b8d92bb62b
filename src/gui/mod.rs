pub mod actions;
pub mod app;
pub mod flip_card;
pub mod image_modal;
pub mod message_overlay;
pub mod notifications;
pub mod progress_panel;
pub mod settings;
pub mod theme;
pub mod tips_panel;
pub mod top_bar;
pub mod verb_grid;

pub use actions::{
    ActionQueue,
    UiAction,
};
pub use app::VerbDeckApp;
