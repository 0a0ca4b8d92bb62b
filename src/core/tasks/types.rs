use crate::core::{
    study_state::RequestId,
    Verb,
};

#[derive(Debug, Clone)]
pub enum TaskResult {
    VerbsLoaded(Result<Vec<Verb>, String>),
    WriteCompleted { request_id: RequestId, result: Result<(), String> },
    LoadingMessage(String),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::VerbsLoaded(_) => "verbs_loaded",
            TaskResult::WriteCompleted { .. } => "write_completed",
            TaskResult::LoadingMessage(_) => "loading_message",
        }
    }
}
