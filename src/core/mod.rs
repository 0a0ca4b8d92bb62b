pub mod errors;
pub mod http;
pub mod models;
pub mod progress;
pub mod study_state;
pub mod tasks;
pub mod utils;

pub use errors::VerbDeckError;
pub use models::{
    Verb,
    VerbId,
    MASTERY_THRESHOLD,
};
pub use progress::StudyProgress;
pub use study_state::StudyState;
