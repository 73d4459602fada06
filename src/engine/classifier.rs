use crate::engine::config::Identity;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tokens sorted into numbers and single-letter alphabets.
///
/// Tokens matching neither category are dropped; `dropped` only counts them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub highest_alphabet: Vec<String>,
    pub dropped: usize,
}

/// Full response for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub is_success: bool,
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
    pub numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub highest_alphabet: Vec<String>,
}

impl ClassificationResult {
    /// Assemble a response from a classification and the configured identity.
    pub fn assemble(identity: &Identity, classification: Classification) -> Self {
        Self {
            is_success: true,
            user_id: identity.user_id.clone(),
            email: identity.email.clone(),
            roll_number: identity.roll_number.clone(),
            numbers: classification.numbers,
            alphabets: classification.alphabets,
            highest_alphabet: classification.highest_alphabet,
        }
    }
}

/// Classifier bound to the identity stamped on every response.
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
    identity: Identity,
}

impl Classifier {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn classify<S: AsRef<str>>(&self, tokens: &[S]) -> ClassificationResult {
        ClassificationResult::assemble(&self.identity, classify_tokens(tokens))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Identity::default())
    }
}

/// True for non-empty tokens without surrounding whitespace that parse as a
/// finite decimal number.
pub fn is_number(token: &str) -> bool {
    if token.is_empty() || token.trim() != token {
        return false;
    }
    token.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

/// True for exactly one ASCII letter.
pub fn is_alphabet(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

/// Greatest alphabet by lowercase comparison; the leftmost wins ties.
pub fn highest_alphabet<S: AsRef<str>>(alphabets: &[S]) -> Option<&str> {
    alphabets
        .iter()
        .map(|alphabet| alphabet.as_ref())
        .fold(None::<&str>, |best, candidate| match best {
            Some(current) if candidate.to_ascii_lowercase() <= current.to_ascii_lowercase() => {
                Some(current)
            }
            _ => Some(candidate),
        })
}

pub fn classify_tokens<S: AsRef<str>>(tokens: &[S]) -> Classification {
    let mut classification = Classification::default();

    for token in tokens.iter().map(|token| token.as_ref()) {
        if is_number(token) {
            classification.numbers.push(token.to_string());
        } else if is_alphabet(token) {
            classification.alphabets.push(token.to_string());
        } else {
            classification.dropped += 1;
        }
    }

    classification.highest_alphabet = highest_alphabet(&classification.alphabets)
        .map(|highest| vec![highest.to_string()])
        .unwrap_or_default();

    debug!(
        numbers = classification.numbers.len(),
        alphabets = classification.alphabets.len(),
        dropped = classification.dropped,
        "classified tokens"
    );

    classification
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_classify_mixed_tokens() {
        let result = classify_tokens(&["M", "1", "334", "4", "B"]);
        assert_eq!(result.numbers, strings(&["1", "334", "4"]));
        assert_eq!(result.alphabets, strings(&["M", "B"]));
        assert_eq!(result.highest_alphabet, strings(&["M"]));
        assert_eq!(result.dropped, 0);
    }

    #[test]
    fn test_highest_alphabet_tie_keeps_leftmost() {
        let result = classify_tokens(&["a", "A", "z", "Z"]);
        assert_eq!(result.alphabets, strings(&["a", "A", "z", "Z"]));
        assert_eq!(result.highest_alphabet, strings(&["z"]));
    }

    #[test]
    fn test_highest_alphabet_uppercase_first() {
        let result = classify_tokens(&["Z", "b", "z"]);
        assert_eq!(result.highest_alphabet, strings(&["Z"]));
    }

    #[test]
    fn test_classify_empty_input() {
        let tokens: Vec<String> = vec![];
        let result = classify_tokens(&tokens);
        assert_eq!(result, Classification::default());
    }

    #[test]
    fn test_classify_drops_words_and_symbols() {
        let result = classify_tokens(&["-3.5", "word", "$"]);
        assert_eq!(result.numbers, strings(&["-3.5"]));
        assert!(result.alphabets.is_empty());
        assert!(result.highest_alphabet.is_empty());
        assert_eq!(result.dropped, 2);
    }

    #[test]
    fn test_is_number_accepts_signed_and_decimal() {
        for token in ["0", "42", "-7", "+7", "3.14", ".5", "5.", "1e3", "-2.5E-3"] {
            assert!(is_number(token), "{token} should be a number");
        }
    }

    #[test]
    fn test_is_number_rejects_non_finite_and_padded() {
        for token in ["", " ", " 1", "1 ", "NaN", "inf", "-infinity", "1e999", "0x1F", "1,000", "--1"] {
            assert!(!is_number(token), "{token:?} should not be a number");
        }
    }

    #[test]
    fn test_is_alphabet_single_ascii_letter_only() {
        assert!(is_alphabet("a"));
        assert!(is_alphabet("Q"));
        assert!(!is_alphabet(""));
        assert!(!is_alphabet("ab"));
        assert!(!is_alphabet("1"));
        assert!(!is_alphabet("é"));
        assert!(!is_alphabet("$"));
    }

    #[test]
    fn test_single_letter_never_a_number() {
        for c in ('a'..='z').chain('A'..='Z') {
            assert!(!is_number(&c.to_string()));
        }
    }

    #[test]
    fn test_classifier_stamps_identity() {
        let identity = Identity {
            user_id: "jane_doe_01011990".to_string(),
            email: "jane@example.com".to_string(),
            roll_number: "XYZ789".to_string(),
        };
        let classifier = Classifier::new(identity.clone());
        let result = classifier.classify(&["q", "9"]);
        assert!(result.is_success);
        assert_eq!(result.user_id, identity.user_id);
        assert_eq!(result.email, identity.email);
        assert_eq!(result.roll_number, identity.roll_number);
        assert_eq!(result.numbers, strings(&["9"]));
        assert_eq!(result.highest_alphabet, strings(&["q"]));
    }

    #[test]
    fn test_result_serializes_snake_case() {
        let result = Classifier::default().classify(&["a"]);
        let json = serde_json::to_value(&result).unwrap();
        for key in [
            "is_success",
            "user_id",
            "email",
            "roll_number",
            "numbers",
            "alphabets",
            "highest_alphabet",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
