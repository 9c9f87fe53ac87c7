//! Wire DTOs for the Mastermind API.
//!
//! # Design
//! These types mirror the game server's schema but are defined independently
//! of the mock-server crate; integration tests catch any drift between the
//! two. Peg counts are `u8` so a body carrying negative or absurd values
//! fails deserialization instead of flowing into the game loop.

use serde::{Deserialize, Serialize};

use crate::guess::CODE_LENGTH;

/// Response body of `POST /game`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameResponse {
    pub game_id: String,
}

/// Request body of `POST /guess`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRequest {
    pub game_id: String,
    pub guess: String,
}

/// Per-guess feedback: `black` digits match value and position, `white`
/// digits match value at a different position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feedback {
    pub black: u8,
    pub white: u8,
}

impl Feedback {
    /// The whole code was matched in place.
    pub fn is_win(&self) -> bool {
        usize::from(self.black) == CODE_LENGTH
    }
}

/// Error body the server attaches to non-200 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
