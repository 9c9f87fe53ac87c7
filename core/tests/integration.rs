//! Full game lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port with an injected secret code,
//! then exercises every core client operation over real HTTP using ureq.
//! Validates that request building and response parsing work end-to-end
//! with the actual server, including the session's attempt accounting.

use mastermind_core::{
    ApiError, GameSession, Guess, HttpMethod, HttpResponse, MastermindClient, TurnOutcome,
    MAX_ATTEMPTS,
};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: mastermind_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

/// Start a mock server with the given secret code on a random port and
/// return its base URL.
fn spawn_server(code: &'static str) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::serve(listener, mock_server::app_with_code(code)).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn game_lifecycle() {
    let client = MastermindClient::new(&spawn_server("1234"));

    // Step 1: create a game.
    let req = client.build_start_game();
    let game_id = client.parse_start_game(execute(req)).unwrap();
    assert!(!game_id.is_empty());

    let mut session = GameSession::new(game_id);
    assert_eq!(session.attempts_left(), MAX_ATTEMPTS);

    // Step 2: a guess sharing no digits with the code scores nothing.
    let guess: Guess = "5555".parse().unwrap();
    let req = client.build_submit_guess(session.game_id(), &guess).unwrap();
    let feedback = client.parse_submit_guess(execute(req)).unwrap();
    assert_eq!((feedback.black, feedback.white), (0, 0));
    assert_eq!(session.score(feedback), TurnOutcome::Continue);
    assert_eq!(session.attempts_left(), MAX_ATTEMPTS - 1);

    // Step 3: every digit right, every position wrong.
    let guess: Guess = "4321".parse().unwrap();
    let req = client.build_submit_guess(session.game_id(), &guess).unwrap();
    let feedback = client.parse_submit_guess(execute(req)).unwrap();
    assert_eq!((feedback.black, feedback.white), (0, 4));
    assert_eq!(session.score(feedback), TurnOutcome::Continue);

    // Step 4: the winning guess ends the session without touching the budget.
    let guess: Guess = "1234".parse().unwrap();
    let req = client.build_submit_guess(session.game_id(), &guess).unwrap();
    let feedback = client.parse_submit_guess(execute(req)).unwrap();
    assert_eq!((feedback.black, feedback.white), (4, 0));
    assert_eq!(session.score(feedback), TurnOutcome::Won);
    assert_eq!(session.attempts_left(), MAX_ATTEMPTS - 2);
}

#[test]
fn unknown_game_id_surfaces_the_server_message() {
    let client = MastermindClient::new(&spawn_server("1234"));

    let guess: Guess = "1234".parse().unwrap();
    let req = client
        .build_submit_guess("00000000-0000-0000-0000-000000000000", &guess)
        .unwrap();
    let err = client.parse_submit_guess(execute(req)).unwrap_err();

    match err {
        ApiError::Api(msg) => assert_eq!(msg, "game not found"),
        other => panic!("expected Api, got {other:?}"),
    }
}
