use std::sync::{
    mpsc,
    Arc,
};

use eframe::egui;
use futures::future::join_all;
use tokio::runtime::Runtime;
use tracing::{
    info,
    warn,
};

use super::TaskResult;
use crate::{
    api::VerbApi,
    core::{
        study_state::{
            WriteCall,
            WriteRequest,
        },
        VerbDeckError,
    },
};

/// Runs repository calls off the UI thread. Every call reports back through
/// the channel drained by [`TaskManager::poll_results`]; writes carry the
/// request id they were issued with.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    api: VerbApi,
    repaint: Option<egui::Context>,
}

impl TaskManager {
    pub fn new(api: VerbApi) -> Result<Self, VerbDeckError> {
        let runtime = Arc::new(Runtime::new()?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender, api, repaint: None })
    }

    /// Wakes the UI whenever a result is sent.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn set_api(&mut self, api: VerbApi) {
        info!(url = api.url(), "verb endpoint changed");
        self.api = api;
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (ResultSender, VerbApi) {
        (ResultSender { sender: self.sender.clone(), repaint: self.repaint.clone() }, self.api.clone())
    }

    pub fn load_verbs(&self) {
        let (sender, api) = self.task_context();

        self.runtime.spawn(async move {
            sender.send(TaskResult::LoadingMessage("Loading verbs...".to_string()));

            let result = api.fetch_verbs().await.map_err(|e| e.to_string());
            match &result {
                Ok(verbs) => info!(count = verbs.len(), "verbs loaded"),
                Err(e) => warn!(error = %e, "failed to load verbs"),
            }

            sender.send(TaskResult::VerbsLoaded(result));
        });
    }

    pub fn submit_write(&self, request: WriteRequest) {
        self.submit_writes(vec![request]);
    }

    /// Sends a batch of writes concurrently. Results are reported one by one
    /// in completion order.
    pub fn submit_writes(&self, requests: Vec<WriteRequest>) {
        if requests.is_empty() {
            return;
        }

        let (sender, api) = self.task_context();

        self.runtime.spawn(async move {
            let writes = requests.into_iter().map(|request| {
                let api = api.clone();
                let sender = sender.clone();
                async move {
                    let result = run_write(&api, &request.call).await.map_err(|e| e.to_string());
                    if let Err(e) = &result {
                        warn!(request = request.request_id.0, error = %e, "write failed");
                    }
                    sender.send(TaskResult::WriteCompleted { request_id: request.request_id, result });
                }
            });

            join_all(writes).await;
        });
    }
}

async fn run_write(api: &VerbApi, call: &WriteCall) -> Result<(), VerbDeckError> {
    match call {
        WriteCall::RecordStudy { verb_id } => api.record_study(*verb_id).await,
        WriteCall::SetImage { verb_id, image_url } => api.set_image_url(*verb_id, image_url).await,
    }
}

#[derive(Clone)]
struct ResultSender {
    sender: mpsc::Sender<TaskResult>,
    repaint: Option<egui::Context>,
}

impl ResultSender {
    fn send(&self, result: TaskResult) {
        // The receiver only goes away when the app is closing
        let _ = self.sender.send(result);
        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
    }
}
