//! Offline joke pool
//!
//! Backs `--offline` mode: refreshes draw from the built-in rows
//! instead of the network, so the header flight is demonstrable
//! without the (long dead) upstream endpoint.

use std::time::Duration;

use rand::Rng;

use punchline_core::{seed_jokes, Joke};

/// Pause before answering, so the flight animation reads
const OFFLINE_DELAY: Duration = Duration::from_millis(800);

/// Pick a random joke from the built-in pool
pub fn random_offline_joke<R: Rng>(rng: &mut R) -> Joke {
    let pool = seed_jokes();
    let index = rng.gen_range(0..pool.len());
    pool[index].clone()
}

/// Offline stand-in for [`crate::JokeClient::fetch`]
pub async fn fetch_offline() -> Option<Joke> {
    tokio::time::sleep(OFFLINE_DELAY).await;
    let mut rng = rand::thread_rng();
    Some(random_offline_joke(&mut rng))
}
