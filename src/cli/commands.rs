//! Command implementations for the Verity CLI.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::analysis::token_filter::stem::{PorterStemmer, Stemmer};
use crate::classifier::TextClassifier;
use crate::cli::args::*;
use crate::error::Result;
use crate::model::ModelBundle;

/// Execute a CLI command.
pub fn execute_command(args: VerityArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Analyze(analyze_args) => analyze(analyze_args.clone(), &args),
        Command::Stem(stem_args) => stem(stem_args.clone(), &args),
    }
}

/// Read input text from an argument, a file, or stdin.
fn read_text(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return Ok(fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Serialize a value as JSON, pretty-printed on request.
fn to_json<T: serde::Serialize>(value: &T, cli_args: &VerityArgs) -> Result<String> {
    let output = if cli_args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}

/// Classify text with a trained model.
fn classify(args: ClassifyArgs, cli_args: &VerityArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading model from: {}", args.model.display());
    }

    let bundle = Arc::new(ModelBundle::from_file(&args.model)?);
    let classifier = TextClassifier::new(bundle)?;

    let text = read_text(args.text, args.file.as_deref())?;
    let prediction = classifier.classify(&text)?;

    match cli_args.output_format {
        OutputFormat::Json => println!("{}", to_json(&prediction, cli_args)?),
        OutputFormat::Human => {
            let verdict = if prediction.label == 1 {
                "likely fabricated"
            } else {
                "likely reliable"
            };
            println!(
                "{verdict} (probability {:.4}, confidence {:.4})",
                prediction.probability, prediction.confidence
            );
        }
    }

    Ok(())
}

/// Print the normalized token stream for text.
fn analyze(args: AnalyzeArgs, cli_args: &VerityArgs) -> Result<()> {
    let analyzer = EnglishAnalyzer::new()?;
    let text = read_text(args.text, args.file.as_deref())?;
    let tokens = analyzer.token_texts(&text)?;

    match cli_args.output_format {
        OutputFormat::Json => println!("{}", to_json(&tokens, cli_args)?),
        OutputFormat::Human => {
            if cli_args.verbosity() > 1 {
                println!("{} tokens", tokens.len());
            }
            for token in tokens {
                println!("{token}");
            }
        }
    }

    Ok(())
}

/// Stem words, optionally showing the rewrite steps.
fn stem(args: StemArgs, cli_args: &VerityArgs) -> Result<()> {
    let stemmer = PorterStemmer::new();

    for word in &args.words {
        if args.trace {
            let (stem, trace) = stemmer.stem_traced(word);
            match cli_args.output_format {
                OutputFormat::Json => {
                    let record = json!({ "word": word, "stem": stem, "steps": trace });
                    println!("{}", to_json(&record, cli_args)?);
                }
                OutputFormat::Human => {
                    println!("{word} -> {stem}");
                    for step in trace {
                        println!("  {}: {}", step.step, step.output);
                    }
                }
            }
        } else {
            let stem = stemmer.stem(word);
            match cli_args.output_format {
                OutputFormat::Json => {
                    let record = json!({ "word": word, "stem": stem });
                    println!("{}", to_json(&record, cli_args)?);
                }
                OutputFormat::Human => println!("{word} -> {stem}"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_text_prefers_argument() {
        let text = read_text(Some("inline".to_string()), None).unwrap();
        assert_eq!(text, "inline");
    }

    #[test]
    fn test_read_text_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("article.txt");
        fs::write(&path, "file text").unwrap();

        let text = read_text(None, Some(&path)).unwrap();
        assert_eq!(text, "file text");
    }

    #[test]
    fn test_read_text_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        assert!(read_text(None, Some(&path)).is_err());
    }
}
