//! The joke feed: an ordered list of rows, newest first.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use rand::Rng;

use punchline_core::{seed_jokes, Easing, Joke, Tween, EMOTICONS};

/// How long a freshly inserted row takes to grow to full width.
pub const INSERT_GROW_DURATION: Duration = Duration::from_millis(300);

const INSERT_SCALE_FROM: f32 = 0.5;

/// One joke in the feed plus its presentation state.
#[derive(Debug, Clone)]
pub struct JokeRow {
    pub joke: Joke,
    pub emoticon: &'static str,
    pub received_at: DateTime<Local>,
    grow: Option<Tween>,
}

impl JokeRow {
    fn seeded(joke: Joke) -> Self {
        Self {
            joke,
            emoticon: random_emoticon(),
            received_at: Local::now(),
            grow: None,
        }
    }

    fn fresh(joke: Joke, now: Instant) -> Self {
        Self {
            joke,
            emoticon: random_emoticon(),
            received_at: Local::now(),
            grow: Some(Tween::new(INSERT_GROW_DURATION, Easing::EaseOut, now)),
        }
    }

    /// Current scale of the row. 1.0 once the grow-in has settled.
    pub fn scale(&self, now: Instant) -> f32 {
        match self.grow {
            Some(tween) => {
                INSERT_SCALE_FROM + (1.0 - INSERT_SCALE_FROM) * tween.progress(now)
            }
            None => 1.0,
        }
    }

    pub fn is_growing(&self, now: Instant) -> bool {
        self.grow.map(|tween| !tween.is_complete(now)).unwrap_or(false)
    }
}

fn random_emoticon() -> &'static str {
    let mut rng = rand::thread_rng();
    EMOTICONS[rng.gen_range(0..EMOTICONS.len())]
}

/// All jokes currently on screen, newest first.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    rows: Vec<JokeRow>,
}

impl Feed {
    /// A feed pre-populated with the bundled jokes.
    pub fn with_seeds() -> Self {
        Self {
            rows: seed_jokes().into_iter().map(JokeRow::seeded).collect(),
        }
    }

    /// Insert a fresh joke at the top with the grow-in animation armed.
    pub fn insert_front(&mut self, joke: Joke, now: Instant) {
        self.rows.insert(0, JokeRow::fresh(joke, now));
    }

    pub fn rows(&self) -> &[JokeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
