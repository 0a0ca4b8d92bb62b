use std::time::Duration;

use reqwest::{
    header::USER_AGENT,
    Client,
    RequestBuilder,
    Response,
};

use crate::core::VerbDeckError;

pub fn http_client(timeout: Duration) -> Result<Client, VerbDeckError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| VerbDeckError::Custom(format!("HTTP client build failed: {e}")))
}

pub async fn send(request: RequestBuilder) -> Result<Response, VerbDeckError> {
    let resp = request.header(USER_AGENT, "verbdeck/0.1 (+reqwest)").send().await?;
    ensure_success(resp)
}

fn ensure_success(resp: Response) -> Result<Response, VerbDeckError> {
    if !resp.status().is_success() {
        return Err(VerbDeckError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp)
}
