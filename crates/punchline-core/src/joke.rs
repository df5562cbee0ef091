//! Joke model and delimiter parsing
//!
//! Upstream jokes arrive as one flat string; the feed wants a question
//! line and a punchline. The split rules are deliberately strict: a
//! question mark wins, a sentence break is the fallback, anything
//! ambiguous is rejected so the feed never shows a mangled row.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub question: String,
    pub answer: String,
}

impl Joke {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Split a raw joke string into question + answer.
    ///
    /// Rules, in order:
    /// 1. Exactly one `?` splits there; the `?` stays on the question.
    /// 2. No `?` at all: exactly one `". "` splits there; the `.` stays
    ///    on the question.
    /// 3. Everything else (no delimiter, or more than one of either) is
    ///    rejected.
    ///
    /// No whitespace trimming is applied to either half.
    pub fn parse(text: &str) -> Option<Joke> {
        let by_question_mark: Vec<&str> = text.split('?').collect();

        match by_question_mark.len() {
            2 => Some(Joke::new(
                format!("{}?", by_question_mark[0]),
                by_question_mark[1],
            )),
            1 => {
                let by_sentence: Vec<&str> = text.split(". ").collect();
                if by_sentence.len() == 2 {
                    Some(Joke::new(format!("{}.", by_sentence[0]), by_sentence[1]))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// The rows the feed starts with.
pub fn seed_jokes() -> Vec<Joke> {
    vec![
        Joke::new("What's red and bad for your teeth?", "A Brick."),
        Joke::new(
            "What do you call a chicken crossing the road?",
            "Poultry in moton.",
        ),
        Joke::new(
            "Why did the fireman wear red, white, and blue suspenders?",
            "To hold his pants up.",
        ),
        Joke::new(
            "How did Darth Vader know what Luke was getting for Christmas?",
            "He felt his presents.",
        ),
        Joke::new(
            "My friend's bakery burned down last night.",
            "Now his business is toast.",
        ),
        Joke::new(
            "What's funnier than a monkey dancing with an elephant?",
            "Two monkeys dancing with an elephant.",
        ),
    ]
}

/// Decorations for feed rows, picked at random per row.
pub const EMOTICONS: [&str; 7] = ["😂", "😅", "😆", "😊", "😬", "🙃", "🙂"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_question_mark() {
        let joke = Joke::parse("Why?Because.").unwrap();
        assert_eq!(joke.question, "Why?");
        assert_eq!(joke.answer, "Because.");
    }

    #[test]
    fn test_parse_keeps_answer_whitespace() {
        let joke = Joke::parse("What's red and bad for your teeth? A Brick.").unwrap();
        assert_eq!(joke.question, "What's red and bad for your teeth?");
        assert_eq!(joke.answer, " A Brick.");
    }

    #[test]
    fn test_parse_falls_back_to_sentence_break() {
        let joke = Joke::parse("Just a statement. Nothing else").unwrap();
        assert_eq!(joke.question, "Just a statement.");
        assert_eq!(joke.answer, "Nothing else");
    }

    #[test]
    fn test_parse_rejects_undelimited_text() {
        assert_eq!(Joke::parse("no delimiter here"), None);
    }

    #[test]
    fn test_parse_rejects_multiple_question_marks() {
        assert_eq!(Joke::parse("Really? Are you sure? Yes."), None);
    }

    #[test]
    fn test_parse_rejects_multiple_sentence_breaks() {
        assert_eq!(Joke::parse("One. Two. Three"), None);
    }

    #[test]
    fn test_parse_question_mark_wins_over_sentence_break() {
        let joke = Joke::parse("Ready? Set. Go").unwrap();
        assert_eq!(joke.question, "Ready?");
        assert_eq!(joke.answer, " Set. Go");
    }

    #[test]
    fn test_seed_jokes_all_have_both_halves() {
        let seeds = seed_jokes();
        assert_eq!(seeds.len(), 6);
        for joke in seeds {
            assert!(!joke.question.is_empty());
            assert!(!joke.answer.is_empty());
        }
    }

    #[test]
    fn test_joke_serde_round_trip() {
        let joke = Joke::new("Q?", "A.");
        let json = serde_json::to_string(&joke).unwrap();
        let back: Joke = serde_json::from_str(&json).unwrap();
        assert_eq!(back, joke);
    }
}
