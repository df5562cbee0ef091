//! Joke endpoint client
//!
//! One GET against a single configurable endpoint. The response is a
//! JSON object with one string field, `joke`, which is split into
//! question + punchline by [`Joke::parse`]. Every failure mode
//! (transport, status, body, parse) collapses to `None`: the caller
//! finishes the refresh animation either way and only shows a notice.

use serde::Deserialize;
use url::Url;

use punchline_core::prelude::*;
use punchline_core::Joke;

/// Default endpoint queried for new jokes
pub const DEFAULT_JOKE_URL: &str = "http://tambal.azurewebsites.net/joke/random";

/// Wire shape of the endpoint's response
#[derive(Debug, Deserialize)]
struct JokeEnvelope {
    joke: String,
}

#[derive(Debug, Clone)]
pub struct JokeClient {
    http: reqwest::Client,
    url: Url,
}

impl JokeClient {
    /// Build a client for `url`. The endpoint is validated here so a
    /// bad `--url` or config value fails at startup, not mid-flight.
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| Error::invalid_endpoint(url, e.to_string()))?;
        Ok(Self {
            http: reqwest::Client::new(),
            url,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.url
    }

    /// Fetch one joke. `None` on any failure.
    pub async fn fetch(&self) -> Option<Joke> {
        match self.request().await {
            Ok(joke) => {
                debug!(question = %joke.question, "fetched joke");
                Some(joke)
            }
            Err(err) => {
                warn!("joke fetch failed: {}", err);
                None
            }
        }
    }

    async fn request(&self) -> Result<Joke> {
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| Error::fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::fetch(e.to_string()))?;

        let envelope: JokeEnvelope = response
            .json()
            .await
            .map_err(|e| Error::fetch(e.to_string()))?;

        Joke::parse(&envelope.joke)
            .ok_or_else(|| Error::fetch(format!("unsplittable joke: {:?}", envelope.joke)))
    }
}
