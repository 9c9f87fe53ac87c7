//! API client core and game rules for the remote Mastermind service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `MastermindClient` is stateless — it holds only `base_url`.
//! - Each remote operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Every failure mode lands in the closed `ApiError` taxonomy; the core
//!   never logs and never prints.
//! - Local game rules — guess validation and the attempt budget — live in
//!   `guess` and `session`, so the terminal front end stays a thin I/O shell.

pub mod client;
pub mod error;
pub mod guess;
pub mod http;
pub mod session;
pub mod types;

pub use client::MastermindClient;
pub use error::ApiError;
pub use guess::{Guess, InvalidGuess, CODE_LENGTH};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::{GameSession, TurnOutcome, MAX_ATTEMPTS};
pub use types::{ErrorResponse, Feedback, GuessRequest, NewGameResponse};
