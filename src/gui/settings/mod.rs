pub mod data;
pub mod modal;

pub use data::{
    SettingsData,
    StudyCountPolicy,
};
pub use modal::SettingsModal;
