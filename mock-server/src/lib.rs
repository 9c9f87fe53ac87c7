use std::{collections::HashMap, sync::Arc};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const CODE_LENGTH: usize = 4;

#[derive(Serialize, Deserialize)]
pub struct NewGame {
    pub game_id: String,
}

#[derive(Serialize, Deserialize)]
pub struct GuessInput {
    pub game_id: String,
    pub guess: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type Games = Arc<RwLock<HashMap<Uuid, String>>>;

#[derive(Clone)]
struct AppState {
    games: Games,
    fixed_code: Option<String>,
}

/// Game service with randomly generated secret codes.
pub fn app() -> Router {
    build_app(None)
}

/// Game service where every created game uses `code` as its secret.
/// Secret codes cannot be read back over the API, so deterministic tests
/// inject one here.
pub fn app_with_code(code: &str) -> Router {
    build_app(Some(code.to_string()))
}

fn build_app(fixed_code: Option<String>) -> Router {
    let state = AppState {
        games: Arc::new(RwLock::new(HashMap::new())),
        fixed_code,
    };
    Router::new()
        .route("/game", post(create_game))
        .route("/guess", post(submit_guess))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn create_game(State(state): State<AppState>) -> Json<NewGame> {
    let id = Uuid::new_v4();
    let code = state.fixed_code.clone().unwrap_or_else(random_code);
    state.games.write().await.insert(id, code);
    log::debug!("created game {id}");
    Json(NewGame {
        game_id: id.to_string(),
    })
}

async fn submit_guess(
    State(state): State<AppState>,
    Json(input): Json<GuessInput>,
) -> Result<Json<Score>, (StatusCode, Json<ErrorBody>)> {
    if !is_valid_guess(&input.guess) {
        return Err(error_response(StatusCode::BAD_REQUEST, "invalid guess"));
    }
    let id = Uuid::parse_str(&input.game_id)
        .map_err(|_| error_response(StatusCode::NOT_FOUND, "game not found"))?;
    let games = state.games.read().await;
    let code = games
        .get(&id)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "game not found"))?;
    let score = score_guess(code, &input.guess);
    log::debug!(
        "game {id}: guess {} scored {}B {}W",
        input.guess,
        score.black,
        score.white
    );
    Ok(Json(score))
}

fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

fn is_valid_guess(guess: &str) -> bool {
    guess.chars().count() == CODE_LENGTH && guess.chars().all(|c| ('1'..='6').contains(&c))
}

fn random_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LENGTH)
        .map(|_| char::from(b'0' + rng.random_range(1..=6u8)))
        .collect()
}

/// Standard Mastermind scoring: `black` counts positions that match exactly;
/// `white` counts remaining value matches, with duplicates limited by how
/// often the digit appears in the code.
pub fn score_guess(code: &str, guess: &str) -> Score {
    let code: Vec<char> = code.chars().collect();
    let guess: Vec<char> = guess.chars().collect();

    let black = code.iter().zip(guess.iter()).filter(|(c, g)| c == g).count();

    let mut code_counts = [0usize; 6];
    let mut guess_counts = [0usize; 6];
    for &c in &code {
        code_counts[digit_index(c)] += 1;
    }
    for &g in &guess {
        guess_counts[digit_index(g)] += 1;
    }
    let matched: usize = (0..6).map(|d| code_counts[d].min(guess_counts[d])).sum();

    Score {
        black: black as u8,
        white: (matched - black) as u8,
    }
}

fn digit_index(c: char) -> usize {
    (c as usize) - ('1' as usize)
}
