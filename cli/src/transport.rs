//! Executes core-built requests over real HTTP.
//!
//! Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
//! responses come back as data rather than `Err`, letting the core client
//! handle status interpretation. Only transport-level failures become
//! errors here.

use mastermind_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
        };
        let mut response = result.map_err(classify)?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn classify(err: ureq::Error) -> ApiError {
    match &err {
        ureq::Error::BadUri(_) => ApiError::InvalidRequest(err.to_string()),
        _ => ApiError::Network(err.to_string()),
    }
}
