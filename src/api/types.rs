use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    Verb,
    VerbId,
};

#[derive(Debug, Deserialize)]
pub struct VerbListResponse {
    pub verbs: Vec<Verb>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyRequest {
    pub action: &'static str,
    pub verb_id: VerbId,
}

impl StudyRequest {
    pub fn new(verb_id: VerbId) -> Self {
        Self { action: "study", verb_id }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest<'a> {
    pub verb_id: VerbId,
    pub image_url: &'a str,
}
