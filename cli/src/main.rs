mod game;
mod transport;

use std::io;

use mastermind_core::MastermindClient;

use crate::transport::UreqTransport;

const BASE_URL: &str = "https://mastermind.darkube.app";

fn main() -> io::Result<()> {
    let client = MastermindClient::new(BASE_URL);
    let transport = UreqTransport::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    game::run(stdin.lock(), stdout.lock(), &client, |req| {
        transport.execute(req)
    })
}
