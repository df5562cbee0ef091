//! # punchline-fetch - Joke Fetching
//!
//! HTTP client for the joke endpoint plus the offline pool. The update
//! loop spawns at most one fetch task at a time; aborting that task is
//! how a refresh cancellation stops the request.
//!
//! ## Public API
//!
//! - [`JokeClient`] - Validated endpoint + `fetch() -> Option<Joke>`
//! - [`DEFAULT_JOKE_URL`] - The stock endpoint
//! - [`random_offline_joke()`] - `--offline` mode source

pub mod client;
pub mod pool;

pub use client::{JokeClient, DEFAULT_JOKE_URL};
pub use pool::{fetch_offline, random_offline_joke};
