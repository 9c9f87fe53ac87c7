//! Stateless HTTP request builder and response parser for the game API.
//!
//! # Design
//! `MastermindClient` holds only a `base_url` and carries no mutable state
//! between calls. Each remote operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.
//!
//! The two endpoints classify failures differently: `/guess` responses may
//! carry a domain error body that maps to `ApiError::Api`, while any non-200
//! from `/game` is an `InvalidResponse`.

use crate::error::ApiError;
use crate::guess::Guess;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ErrorResponse, Feedback, GuessRequest, NewGameResponse};

/// Stateless client for the Mastermind API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct MastermindClient {
    base_url: String,
}

impl MastermindClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_start_game(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/game", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Extract the server-issued game id from a `POST /game` response.
    pub fn parse_start_game(&self, response: HttpResponse) -> Result<String, ApiError> {
        if response.status != 200 {
            return Err(ApiError::InvalidResponse {
                status: response.status,
                body: response.body,
            });
        }
        let parsed: NewGameResponse = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Decoding(e.to_string()))?;
        if parsed.game_id.is_empty() {
            return Err(ApiError::Decoding("game_id is empty".to_string()));
        }
        Ok(parsed.game_id)
    }

    /// The guess is pre-validated by construction; digit rules are not
    /// re-checked here.
    pub fn build_submit_guess(&self, game_id: &str, guess: &Guess) -> Result<HttpRequest, ApiError> {
        let payload = GuessRequest {
            game_id: game_id.to_string(),
            guess: guess.as_str().to_string(),
        };
        let body =
            serde_json::to_string(&payload).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/guess", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Extract peg feedback from a `POST /guess` response.
    ///
    /// A non-200 whose body parses as `{"error": ...}` becomes `ApiError::Api`
    /// with that message; any other non-200 keeps its raw status and body.
    pub fn parse_submit_guess(&self, response: HttpResponse) -> Result<Feedback, ApiError> {
        if response.status != 200 {
            if let Ok(err) = serde_json::from_str::<ErrorResponse>(&response.body) {
                return Err(ApiError::Api(err.error));
            }
            return Err(ApiError::InvalidResponse {
                status: response.status,
                body: response.body,
            });
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decoding(e.to_string()))
    }
}
