use std::collections::HashMap;

use tracing::{
    debug,
    warn,
};

use super::{
    progress::StudyProgress,
    utils::filter_verbs,
    Verb,
    VerbDeckError,
    VerbId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

/// A network write the controller wants issued. The result must come back
/// through [`StudyState::complete_write`] with the same `request_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    pub request_id: RequestId,
    pub call: WriteCall,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteCall {
    RecordStudy { verb_id: VerbId },
    SetImage { verb_id: VerbId, image_url: String },
}

#[derive(Debug, Clone)]
enum PendingWrite {
    Study { verb_id: VerbId },
    Image { verb_id: VerbId, image_url: String, previous: Option<String> },
}

/// What happened when a task result was applied, for the UI to report.
#[derive(Debug, Clone, PartialEq)]
pub enum StateEvent {
    Loaded { count: usize },
    LoadFailed { error: String },
    StudyConfirmed { verb_id: VerbId },
    StudyQueued { verb_id: VerbId, error: String },
    ImageSaved { verb_id: VerbId },
    ImageFailed { verb_id: VerbId, error: String },
}

/// Controller state for the verb deck.
///
/// Writes are applied to the local collection as soon as they are issued and
/// reconciled when their result arrives:
/// - a failed study event keeps its increment and waits in the sync queue
/// - a failed image write restores the previous image url
#[derive(Debug, Default)]
pub struct StudyState {
    verbs: Vec<Verb>,
    pub search_query: String,
    selected_verb: Option<VerbId>,
    pub pending_image_url: String,
    loading: bool,
    loaded_once: bool,
    next_request: u64,
    pending: HashMap<RequestId, PendingWrite>,
    sync_queue: Vec<VerbId>,
}

impl StudyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn verb(&self, verb_id: VerbId) -> Option<&Verb> {
        self.verbs.iter().find(|v| v.id == verb_id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn progress(&self) -> StudyProgress {
        StudyProgress::from_verbs(&self.verbs)
    }

    pub fn filtered_verbs(&self) -> Vec<&Verb> {
        filter_verbs(&self.verbs, &self.search_query)
    }

    /// Returns false if a load was already started; the collection is only
    /// fetched once per run.
    pub fn begin_load(&mut self) -> bool {
        if self.loaded_once || self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn finish_load(&mut self, result: Result<Vec<Verb>, String>) -> StateEvent {
        self.loading = false;
        self.loaded_once = true;

        match result {
            Ok(verbs) => {
                let count = verbs.len();
                self.verbs = verbs;
                StateEvent::Loaded { count }
            }
            Err(error) => {
                self.verbs.clear();
                StateEvent::LoadFailed { error }
            }
        }
    }

    /// Bumps the local count immediately and returns the study event to send.
    pub fn mark_studied(&mut self, verb_id: VerbId) -> Result<WriteRequest, VerbDeckError> {
        let verb = self
            .verbs
            .iter_mut()
            .find(|v| v.id == verb_id)
            .ok_or(VerbDeckError::VerbNotFound(verb_id.0))?;

        verb.studied_count = verb.studied_count.saturating_add(1);
        debug!(verb = %verb.infinitive, count = verb.studied_count, "marked studied");

        Ok(self.track(PendingWrite::Study { verb_id }))
    }

    pub fn selected_verb(&self) -> Option<&Verb> {
        self.selected_verb.and_then(|id| self.verb(id))
    }

    pub fn open_image_dialog(&mut self, verb_id: VerbId) {
        if self.selected_verb != Some(verb_id) {
            self.pending_image_url.clear();
        }
        self.selected_verb = Some(verb_id);
    }

    pub fn close_image_dialog(&mut self) {
        self.selected_verb = None;
        self.pending_image_url.clear();
    }

    pub fn is_saving_image(&self) -> bool {
        let Some(selected) = self.selected_verb else {
            return false;
        };
        self.pending
            .values()
            .any(|p| matches!(p, PendingWrite::Image { verb_id, .. } if *verb_id == selected))
    }

    /// Applies the pending image url to the selected verb. Returns `None` when
    /// no verb is selected, the url is blank, or a save is already in flight.
    pub fn submit_image(&mut self) -> Option<WriteRequest> {
        let verb_id = self.selected_verb?;
        let image_url = self.pending_image_url.trim().to_string();
        if image_url.is_empty() || self.is_saving_image() {
            return None;
        }

        let verb = self.verbs.iter_mut().find(|v| v.id == verb_id)?;
        let previous = verb.image_url.replace(image_url.clone());

        Some(self.track(PendingWrite::Image { verb_id, image_url, previous }))
    }

    pub fn sync_queue_len(&self) -> usize {
        self.sync_queue.len()
    }

    /// Re-sends study events whose first attempt failed. Their increments are
    /// already in the local counts, so nothing is bumped again.
    pub fn retry_failed_study_events(&mut self) -> Vec<WriteRequest> {
        let queued: Vec<VerbId> = self.sync_queue.drain(..).collect();
        queued.into_iter().map(|verb_id| self.track(PendingWrite::Study { verb_id })).collect()
    }

    pub fn has_pending_writes(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn complete_write(
        &mut self,
        request_id: RequestId,
        result: Result<(), String>,
    ) -> Option<StateEvent> {
        let Some(pending) = self.pending.remove(&request_id) else {
            warn!(request = request_id.0, "result for unknown request");
            return None;
        };

        let event = match (pending, result) {
            (PendingWrite::Study { verb_id }, Ok(())) => StateEvent::StudyConfirmed { verb_id },
            (PendingWrite::Study { verb_id }, Err(error)) => {
                self.sync_queue.push(verb_id);
                StateEvent::StudyQueued { verb_id, error }
            }
            (PendingWrite::Image { verb_id, .. }, Ok(())) => {
                if self.selected_verb == Some(verb_id) {
                    self.close_image_dialog();
                }
                StateEvent::ImageSaved { verb_id }
            }
            (PendingWrite::Image { verb_id, image_url, previous }, Err(error)) => {
                if let Some(verb) = self.verbs.iter_mut().find(|v| v.id == verb_id) {
                    // A later save may already have replaced the url
                    if verb.image_url.as_deref() == Some(image_url.as_str()) {
                        verb.image_url = previous;
                    }
                }
                // Only reopen if the user has not moved on to another verb
                if self.selected_verb.is_none_or(|selected| selected == verb_id) {
                    self.selected_verb = Some(verb_id);
                    self.pending_image_url = image_url;
                }
                StateEvent::ImageFailed { verb_id, error }
            }
        };

        Some(event)
    }

    fn track(&mut self, pending: PendingWrite) -> WriteRequest {
        self.next_request += 1;
        let request_id = RequestId(self.next_request);

        let call = match &pending {
            PendingWrite::Study { verb_id } => WriteCall::RecordStudy { verb_id: *verb_id },
            PendingWrite::Image { verb_id, image_url, .. } => {
                WriteCall::SetImage { verb_id: *verb_id, image_url: image_url.clone() }
            }
        };

        self.pending.insert(request_id, pending);
        WriteRequest { request_id, call }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::test_verb;

    fn loaded(verbs: Vec<Verb>) -> StudyState {
        let mut state = StudyState::new();
        assert!(state.begin_load());
        state.finish_load(Ok(verbs));
        state
    }

    #[test]
    fn test_load_only_once() {
        let mut state = loaded(vec![test_verb(1, "go", "идти", 0)]);
        assert!(!state.is_loading());
        assert!(!state.begin_load());
        assert_eq!(state.verbs().len(), 1);
    }

    #[test]
    fn test_load_failure_leaves_collection_empty() {
        let mut state = StudyState::new();
        state.begin_load();
        let event = state.finish_load(Err("connection refused".to_string()));

        assert_eq!(event, StateEvent::LoadFailed { error: "connection refused".to_string() });
        assert!(state.verbs().is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.progress().studied_percentage(), 0.0);
    }

    #[test]
    fn test_mark_studied_increments_before_result() {
        let mut state = loaded(vec![test_verb(1, "go", "идти", 0), test_verb(2, "be", "быть", 5)]);

        let request = state.mark_studied(VerbId(1)).unwrap();
        assert_eq!(request.call, WriteCall::RecordStudy { verb_id: VerbId(1) });
        assert_eq!(state.verb(VerbId(1)).unwrap().studied_count, 1);
        assert_eq!(state.verb(VerbId(2)).unwrap().studied_count, 5);
        assert!(state.has_pending_writes());

        let event = state.complete_write(request.request_id, Ok(()));
        assert_eq!(event, Some(StateEvent::StudyConfirmed { verb_id: VerbId(1) }));
        assert_eq!(state.verb(VerbId(1)).unwrap().studied_count, 1);
        assert!(!state.has_pending_writes());
    }

    #[test]
    fn test_failed_study_keeps_increment_and_queues_sync() {
        let mut state = loaded(vec![test_verb(1, "go", "идти", 2)]);

        let request = state.mark_studied(VerbId(1)).unwrap();
        let event = state.complete_write(request.request_id, Err("timeout".to_string()));

        assert_eq!(
            event,
            Some(StateEvent::StudyQueued { verb_id: VerbId(1), error: "timeout".to_string() })
        );
        assert_eq!(state.verb(VerbId(1)).unwrap().studied_count, 3);
        assert!(state.verb(VerbId(1)).unwrap().is_mastered());
        assert_eq!(state.sync_queue_len(), 1);

        let retries = state.retry_failed_study_events();
        assert_eq!(retries.len(), 1);
        assert_eq!(retries[0].call, WriteCall::RecordStudy { verb_id: VerbId(1) });
        assert_eq!(state.sync_queue_len(), 0);
        // Retrying never bumps the count a second time
        assert_eq!(state.verb(VerbId(1)).unwrap().studied_count, 3);

        state.complete_write(retries[0].request_id, Ok(()));
        assert!(!state.has_pending_writes());
    }

    #[test]
    fn test_mark_studied_unknown_verb() {
        let mut state = loaded(vec![test_verb(1, "go", "идти", 0)]);
        assert!(matches!(state.mark_studied(VerbId(9)), Err(VerbDeckError::VerbNotFound(9))));
    }

    #[test]
    fn test_submit_image_requires_selection_and_url() {
        let mut state = loaded(vec![test_verb(1, "go", "идти", 0)]);
        state.pending_image_url = "https://example.com/go.png".to_string();
        assert!(state.submit_image().is_none());

        state.open_image_dialog(VerbId(1));
        state.pending_image_url = "   ".to_string();
        assert!(state.submit_image().is_none());
        assert_eq!(state.verb(VerbId(1)).unwrap().image_url, None);
    }

    #[test]
    fn test_set_image_does_not_touch_other_verbs() {
        let mut state = loaded(vec![test_verb(1, "go", "идти", 0), test_verb(2, "be", "быть", 5)]);
        let before = state.verb(VerbId(2)).unwrap().clone();

        state.open_image_dialog(VerbId(1));
        state.pending_image_url = "https://example.com/go.png".to_string();
        let request = state.submit_image().unwrap();
        assert_eq!(
            request.call,
            WriteCall::SetImage {
                verb_id: VerbId(1),
                image_url: "https://example.com/go.png".to_string()
            }
        );

        let event = state.complete_write(request.request_id, Ok(()));
        assert_eq!(event, Some(StateEvent::ImageSaved { verb_id: VerbId(1) }));
        assert_eq!(
            state.verb(VerbId(1)).unwrap().image_url.as_deref(),
            Some("https://example.com/go.png")
        );
        assert_eq!(state.verb(VerbId(2)).unwrap(), &before);
        assert!(state.selected_verb().is_none());
        assert!(state.pending_image_url.is_empty());
    }

    #[test]
    fn test_failed_image_restores_previous_and_keeps_dialog() {
        let mut verb = test_verb(1, "go", "идти", 0);
        verb.image_url = Some("https://example.com/old.png".to_string());
        let mut state = loaded(vec![verb]);

        state.open_image_dialog(VerbId(1));
        state.pending_image_url = "https://example.com/new.png".to_string();
        let request = state.submit_image().unwrap();
        assert!(state.is_saving_image());
        assert!(state.submit_image().is_none());

        let event = state.complete_write(request.request_id, Err("500".to_string()));
        assert!(matches!(event, Some(StateEvent::ImageFailed { verb_id: VerbId(1), .. })));
        assert_eq!(
            state.verb(VerbId(1)).unwrap().image_url.as_deref(),
            Some("https://example.com/old.png")
        );
        assert_eq!(state.selected_verb().map(|v| v.id), Some(VerbId(1)));
        assert_eq!(state.pending_image_url, "https://example.com/new.png");
        assert!(!state.is_saving_image());
    }

    #[test]
    fn test_failed_image_leaves_other_dialog_alone() {
        let mut state = loaded(vec![test_verb(1, "go", "идти", 0), test_verb(2, "be", "быть", 0)]);

        state.open_image_dialog(VerbId(1));
        state.pending_image_url = "https://example.com/go.png".to_string();
        let request = state.submit_image().unwrap();
        state.close_image_dialog();

        state.open_image_dialog(VerbId(2));
        state.pending_image_url = "be-typing.png".to_string();

        let event = state.complete_write(request.request_id, Err("500".to_string()));
        assert!(matches!(event, Some(StateEvent::ImageFailed { verb_id: VerbId(1), .. })));
        assert_eq!(state.verb(VerbId(1)).unwrap().image_url, None);
        assert_eq!(state.selected_verb().map(|v| v.id), Some(VerbId(2)));
        assert_eq!(state.pending_image_url, "be-typing.png");
    }

    #[test]
    fn test_failed_image_reopens_closed_dialog() {
        let mut state = loaded(vec![test_verb(1, "go", "идти", 0)]);

        state.open_image_dialog(VerbId(1));
        state.pending_image_url = "https://example.com/go.png".to_string();
        let request = state.submit_image().unwrap();
        state.close_image_dialog();

        state.complete_write(request.request_id, Err("timeout".to_string()));
        assert_eq!(state.selected_verb().map(|v| v.id), Some(VerbId(1)));
        assert_eq!(state.pending_image_url, "https://example.com/go.png");
    }

    #[test]
    fn test_search_query_drives_filter() {
        let mut state = loaded(vec![test_verb(1, "go", "идти", 0), test_verb(2, "be", "быть", 0)]);
        assert_eq!(state.filtered_verbs().len(), 2);

        state.search_query = "БЫТ".to_string();
        let ids: Vec<VerbId> = state.filtered_verbs().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![VerbId(2)]);
    }

    #[test]
    fn test_unknown_request_is_ignored() {
        let mut state = loaded(vec![test_verb(1, "go", "идти", 0)]);
        assert_eq!(state.complete_write(RequestId(42), Ok(())), None);
    }

    #[test]
    fn test_switching_dialog_verb_clears_url() {
        let mut state = loaded(vec![test_verb(1, "go", "идти", 0), test_verb(2, "be", "быть", 0)]);
        state.open_image_dialog(VerbId(1));
        state.pending_image_url = "https://example.com/a.png".to_string();

        state.open_image_dialog(VerbId(1));
        assert_eq!(state.pending_image_url, "https://example.com/a.png");

        state.open_image_dialog(VerbId(2));
        assert!(state.pending_image_url.is_empty());
    }
}
