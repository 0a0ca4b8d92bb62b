pub mod types;

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::core::{
    http::{
        http_client,
        send,
    },
    Verb,
    VerbDeckError,
    VerbId,
};
use types::{
    ImageRequest,
    StudyRequest,
    VerbListResponse,
};

/// Client for the verbs function. All three operations hit the same url and
/// are told apart by HTTP method.
#[derive(Debug, Clone)]
pub struct VerbApi {
    client: Client,
    url: String,
}

impl VerbApi {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, VerbDeckError> {
        Ok(Self { client: http_client(timeout)?, url: url.into() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch_verbs(&self) -> Result<Vec<Verb>, VerbDeckError> {
        let response: VerbListResponse = send(self.client.get(&self.url)).await?.json().await?;
        debug!(count = response.verbs.len(), "fetched verbs");
        Ok(response.verbs)
    }

    /// The response body is not inspected; any 2xx counts as recorded.
    pub async fn record_study(&self, verb_id: VerbId) -> Result<(), VerbDeckError> {
        send(self.client.post(&self.url).json(&StudyRequest::new(verb_id))).await?;
        Ok(())
    }

    pub async fn set_image_url(&self, verb_id: VerbId, image_url: &str) -> Result<(), VerbDeckError> {
        send(self.client.put(&self.url).json(&ImageRequest { verb_id, image_url })).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{
            body_json,
            header,
            method,
            path,
        },
        Mock,
        MockServer,
        ResponseTemplate,
    };

    use super::*;

    fn api(server: &MockServer) -> VerbApi {
        VerbApi::new(server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_verbs() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "verbs": [
                    {
                        "id": 1,
                        "infinitive": "go",
                        "pastSimple": "went",
                        "pastParticiple": "gone",
                        "translation": "идти",
                        "imageUrl": null,
                        "studiedCount": 0,
                        "isMastered": false
                    },
                    {
                        "id": 2,
                        "infinitive": "see",
                        "pastSimple": "saw",
                        "pastParticiple": "seen",
                        "translation": "видеть",
                        "imageUrl": "https://example.com/see.png",
                        "studiedCount": 4,
                        "isMastered": false
                    }
                ]
            })))
            .mount(&server)
            .await;

        let verbs = api(&server).fetch_verbs().await.unwrap();
        assert_eq!(verbs.len(), 2);
        assert_eq!(verbs[0].infinitive, "go");
        assert_eq!(verbs[1].image_url.as_deref(), Some("https://example.com/see.png"));
        assert!(verbs[1].is_mastered());
    }

    #[tokio::test]
    async fn test_record_study_sends_action() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "action": "study", "verbId": 3 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;

        api(&server).record_study(VerbId(3)).await.unwrap();
    }

    #[tokio::test]
    async fn test_set_image_url_sends_put() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/"))
            .and(body_json(json!({ "verbId": 5, "imageUrl": "https://example.com/x.png" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        api(&server).set_image_url(VerbId(5), "https://example.com/x.png").await.unwrap();
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = api(&server).record_study(VerbId(1)).await;
        assert!(matches!(result, Err(VerbDeckError::Status { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_malformed_list_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        assert!(api(&server).fetch_verbs().await.is_err());
    }
}
