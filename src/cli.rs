//! Command-line surface: the interactive form plus a scriptable `classify`.

use crate::engine::{filter_response, Classifier, Config, Field, TallyError};
use crate::input::{self, Request};
use clap::{Args, Parser, Subcommand};
use std::collections::BTreeSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(version, about = "Classify JSON token lists into numbers and letters", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive form (default)
    Tui,

    /// Classify a request and print the response JSON
    Classify(ClassifyArgs),
}

#[derive(Args, Debug, Default)]
pub struct ClassifyArgs {
    /// Request file; `-` or omitted reads stdin
    #[arg(short, long, value_name = "FILE", conflicts_with = "json")]
    pub input: Option<PathBuf>,

    /// Request given inline
    #[arg(long, value_name = "TEXT")]
    pub json: Option<String>,

    /// Only include these fields (repeatable); omit for the full response
    #[arg(short, long = "field", value_name = "FIELD")]
    pub fields: Vec<Field>,

    /// Pretty-print the output
    #[arg(short, long)]
    pub pretty: bool,
}

impl ClassifyArgs {
    /// Request text from `--json`, a file, or stdin.
    pub fn read_request(&self) -> Result<String, TallyError> {
        if let Some(json) = &self.json {
            return Ok(json.clone());
        }

        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                Ok(input::file::load(&path.to_string_lossy())?.text)
            }
            _ => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}

/// Classify `text` and serialize the response, filtered when fields are given.
pub fn classify_to_json(
    classifier: &Classifier,
    text: &str,
    fields: &[Field],
    pretty: bool,
) -> Result<String, TallyError> {
    let request = Request::parse(text)?;
    let result = classifier.classify(&request.data);
    info!(tokens = request.data.len(), "Classified request");

    let json = if fields.is_empty() {
        serde_json::to_value(&result)?
    } else {
        let selected: BTreeSet<Field> = fields.iter().copied().collect();
        serde_json::to_value(filter_response(&result, &selected))?
    };

    let output = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    Ok(output)
}

/// Load config, read the request and classify it; the one-shot `classify` path.
pub fn run_classify(config_path: Option<&Path>, args: &ClassifyArgs) -> Result<String, TallyError> {
    let config = Config::load(config_path)?;
    let classifier = Classifier::new(config.identity);
    let text = args.read_request()?;
    classify_to_json(&classifier, &text, &args.fields, args.pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputError, LoadError};
    use serde_json::Value;
    use std::io::Write;

    #[test]
    fn test_cli_defaults_to_tui() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_parses_classify_fields() {
        let cli = Cli::try_parse_from([
            "tally",
            "classify",
            "--json",
            r#"{"data": []}"#,
            "--field",
            "numbers",
            "-f",
            "highest_alphabet",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Classify(args)) => {
                assert_eq!(args.fields, vec![Field::Numbers, Field::HighestAlphabet]);
                assert_eq!(args.json.as_deref(), Some(r#"{"data": []}"#));
            }
            other => panic!("expected classify, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_field() {
        let result = Cli::try_parse_from(["tally", "classify", "--field", "email"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_input_conflicts_with_json() {
        let result = Cli::try_parse_from(["tally", "classify", "-i", "a.json", "--json", "{}"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_classify_to_json_full_response() {
        let out = classify_to_json(
            &Classifier::default(),
            r#"{"data": ["M","1","334","4","B"]}"#,
            &[],
            false,
        )
        .unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["is_success"], true);
        assert_eq!(json["numbers"], serde_json::json!(["1", "334", "4"]));
        assert_eq!(json["alphabets"], serde_json::json!(["M", "B"]));
        assert_eq!(json["highest_alphabet"], serde_json::json!(["M"]));
        assert!(json.get("email").is_some());
    }

    #[test]
    fn test_classify_to_json_filtered() {
        let out = classify_to_json(
            &Classifier::default(),
            r#"{"data": ["a","2"]}"#,
            &[Field::Alphabets],
            true,
        )
        .unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("alphabets"));
        assert!(!object.contains_key("numbers"));
        assert!(out.contains('\n'));
    }

    #[test]
    fn test_classify_to_json_invalid_input() {
        let err = classify_to_json(&Classifier::default(), "not json", &[], false).unwrap_err();
        assert!(matches!(err, TallyError::Input(InputError::InvalidJson(_))));
    }

    #[test]
    fn test_read_request_prefers_inline_json() {
        let args = ClassifyArgs {
            json: Some(r#"{"data": ["x"]}"#.to_string()),
            ..ClassifyArgs::default()
        };
        assert_eq!(args.read_request().unwrap(), r#"{"data": ["x"]}"#);
    }

    #[test]
    fn test_run_classify_missing_input_file_is_load_error() {
        let args = ClassifyArgs {
            input: Some(PathBuf::from("/nonexistent/tally/request.json")),
            ..ClassifyArgs::default()
        };
        let err = run_classify(None, &args).unwrap_err();
        assert!(matches!(err, TallyError::Load(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_run_classify_missing_config_is_config_error() {
        let args = ClassifyArgs {
            json: Some(r#"{"data": []}"#.to_string()),
            ..ClassifyArgs::default()
        };
        let err = run_classify(Some(Path::new("/nonexistent/tally/config.toml")), &args).unwrap_err();
        assert!(matches!(err, TallyError::Config(_)));
    }

    #[test]
    fn test_run_classify_uses_configured_identity() {
        let mut config = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(config, "[identity]").unwrap();
        writeln!(config, "user_id = \"jane_doe_01011990\"").unwrap();

        let mut request = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        writeln!(request, r#"{{"data": ["b", "2"]}}"#).unwrap();

        let args = ClassifyArgs {
            input: Some(request.path().to_path_buf()),
            fields: vec![Field::HighestAlphabet],
            ..ClassifyArgs::default()
        };
        let out = run_classify(Some(config.path()), &args).unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["user_id"], "jane_doe_01011990");
        assert_eq!(json["highest_alphabet"], serde_json::json!(["b"]));
        assert!(json.get("numbers").is_none());
    }
}
