//! Interactive turn loop for one game session.
//!
//! # Design
//! `run` drives the whole session over an injected reader, writer, and
//! transport, so scenarios execute against scripted responses and in-memory
//! buffers the same way the real binary executes against stdin, stdout, and
//! ureq. This is the only place errors become user-facing text; the core
//! returns them untouched.

use std::io::{self, BufRead, Write};

use mastermind_core::{
    ApiError, Feedback, GameSession, Guess, HttpRequest, HttpResponse, MastermindClient,
    TurnOutcome,
};

/// Play one session end to end. Returns once the game is won, lost, quit,
/// or dead on startup. All failure paths end with a normal return; the
/// process exits 0 either way.
pub fn run<R, W, T>(
    mut input: R,
    mut out: W,
    client: &MastermindClient,
    mut transport: T,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    T: FnMut(HttpRequest) -> Result<HttpResponse, ApiError>,
{
    writeln!(out, "--- Welcome to Mastermind ---")?;
    writeln!(out, "Guess the 4-digit code. Each digit is between 1 and 6.")?;
    writeln!(out, "Type 'exit' at any time to quit the game.")?;
    writeln!(out, "-----------------------------")?;

    writeln!(out, "Starting a new game...")?;
    let game_id = match start_game(client, &mut transport) {
        Ok(id) => id,
        Err(err) => {
            report_error(&mut out, &err)?;
            return Ok(());
        }
    };
    writeln!(out, "Success! A new game has started. Game ID: {game_id}")?;

    let mut session = GameSession::new(game_id);
    loop {
        writeln!(out)?;
        writeln!(
            out,
            "Enter your 4-digit guess (Attempts remaining: {}):",
            session.attempts_left()
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        if line.eq_ignore_ascii_case("exit") {
            writeln!(out, "Thanks for playing!")?;
            break;
        }

        let guess: Guess = match line.parse() {
            Ok(guess) => guess,
            Err(_) => {
                writeln!(
                    out,
                    "Invalid input. Please enter exactly 4 digits, each between 1 and 6."
                )?;
                continue;
            }
        };

        let feedback = match submit_guess(client, &mut transport, session.game_id(), &guess) {
            Ok(feedback) => feedback,
            Err(err) => {
                report_error(&mut out, &err)?;
                continue;
            }
        };

        writeln!(out)?;
        writeln!(out, "--- Feedback ---")?;
        writeln!(out, "Correct value and position (B): {}", feedback.black)?;
        writeln!(out, "Correct value, wrong position (W): {}", feedback.white)?;
        writeln!(out, "----------------")?;

        match session.score(feedback) {
            TurnOutcome::Won => {
                writeln!(out)?;
                writeln!(out, "Congratulations! You guessed the code!")?;
                break;
            }
            TurnOutcome::Lost => {
                writeln!(out)?;
                writeln!(out, "Game over! You've run out of attempts.")?;
                break;
            }
            TurnOutcome::Continue => {}
        }
    }
    Ok(())
}

fn start_game<T>(client: &MastermindClient, transport: &mut T) -> Result<String, ApiError>
where
    T: FnMut(HttpRequest) -> Result<HttpResponse, ApiError>,
{
    let response = transport(client.build_start_game())?;
    client.parse_start_game(response)
}

fn submit_guess<T>(
    client: &MastermindClient,
    transport: &mut T,
    game_id: &str,
    guess: &Guess,
) -> Result<Feedback, ApiError>
where
    T: FnMut(HttpRequest) -> Result<HttpResponse, ApiError>,
{
    let request = client.build_submit_guess(game_id, guess)?;
    let response = transport(request)?;
    client.parse_submit_guess(response)
}

/// The one place `ApiError` becomes user-facing text.
fn report_error<W: Write>(out: &mut W, err: &ApiError) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- An Error Occurred ---")?;
    match err {
        ApiError::InvalidRequest(msg) => {
            writeln!(out, "Error: The request could not be built.")?;
            writeln!(out, "Details: {msg}")?;
        }
        ApiError::Network(msg) => {
            writeln!(
                out,
                "Network Error: Could not connect to the server. Please check your internet connection."
            )?;
            writeln!(out, "Details: {msg}")?;
        }
        ApiError::Decoding(msg) => {
            writeln!(out, "Error: Failed to process the response from the server.")?;
            writeln!(out, "Details: {msg}")?;
        }
        ApiError::Api(msg) => {
            writeln!(out, "API Error: {msg}")?;
        }
        ApiError::InvalidResponse { status, body } => {
            writeln!(out, "Error: Received an unexpected response from the server.")?;
            writeln!(out, "Status Code: {status}")?;
            writeln!(out, "Response Body: {body}")?;
        }
    }
    writeln!(out, "-------------------------")
}
