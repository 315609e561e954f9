//! Integration tests for the end-to-end classification pipeline.

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;
use verity::prelude::*;

fn terms(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn sample_bundle() -> Arc<ModelBundle> {
    Arc::new(
        ModelBundle::new(
            terms(&["report", "fake", "breaking"]),
            vec![1.0, 2.0, 1.5],
            vec![0.5, -1.2, 0.3],
            0.1,
        )
        .unwrap(),
    )
}

#[test]
fn test_end_to_end_scenario() -> Result<()> {
    let classifier = TextClassifier::new(sample_bundle())?;
    let text = "Breaking: this report is fake fake fake.";

    // Stopwords drop, survivors stem, order and multiplicity hold.
    let tokens = classifier.normalize(text)?;
    assert_eq!(tokens, terms(&["break", "report", "fake", "fake", "fake"]));

    // "break" != vocabulary term "breaking", so only report and fake load:
    // raw vector [1*1.0, 3*2.0, 0.0], norm sqrt(37).
    let features = classifier.vectorizer().vectorize(text)?;
    let norm = 37.0_f64.sqrt();
    assert!((features[0] - 1.0 / norm).abs() < 1e-12);
    assert!((features[1] - 6.0 / norm).abs() < 1e-12);
    assert_eq!(features[2], 0.0);

    // score = 0.1 + 0.5/norm - 1.2 * 6/norm ~= -1.00147
    let prediction = classifier.classify(text)?;
    assert_eq!(prediction.label, 0);
    assert!((prediction.probability - 0.268652).abs() < 1e-4);
    assert!((prediction.confidence - 0.731348).abs() < 1e-4);

    Ok(())
}

#[test]
fn test_empty_input_scores_intercept() -> Result<()> {
    let classifier = TextClassifier::new(sample_bundle())?;

    let prediction = classifier.classify("")?;
    let expected = 1.0 / (1.0 + (-0.1_f64).exp());
    assert!((prediction.probability - expected).abs() < 1e-12);

    // Fully out-of-vocabulary input behaves the same way.
    let oov = classifier.classify("zebra zebra zebra")?;
    assert_eq!(oov.probability, prediction.probability);

    Ok(())
}

#[test]
fn test_feature_norm_is_zero_or_one() -> Result<()> {
    let vectorizer = TfIdfVectorizer::new(sample_bundle())?;

    for text in [
        "Breaking: this report is fake fake fake.",
        "a fake report about breaking news",
        "fake",
    ] {
        let features = vectorizer.vectorize(text)?;
        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12, "norm for {text:?} was {norm}");
    }

    for text in ["", "no overlap at all", "12345 !!!"] {
        let features = vectorizer.vectorize(text)?;
        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert_eq!(norm, 0.0, "norm for {text:?} was {norm}");
    }

    Ok(())
}

#[test]
fn test_bundle_loads_from_file() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.json");
    fs::write(
        &path,
        serde_json::to_string(sample_bundle().as_ref()).unwrap(),
    )?;

    let bundle = Arc::new(ModelBundle::from_file(&path)?);
    let classifier = TextClassifier::new(Arc::clone(&bundle))?;

    let prediction = classifier.classify("Breaking: this report is fake fake fake.")?;
    assert_eq!(prediction.label, 0);

    Ok(())
}

#[test]
fn test_invalid_bundle_rejected_before_inference() {
    let json = r#"{
        "vocabulary": ["report", "fake"],
        "idf": [1.0, 2.0, 3.0],
        "coefficients": [0.5, -1.2],
        "intercept": 0.1
    }"#;

    match ModelBundle::from_json(json) {
        Err(VerityError::Model(msg)) => assert!(msg.contains("idf length")),
        other => panic!("expected model error, got {other:?}"),
    }

    let empty = ModelBundle {
        vocabulary: vec![],
        idf: vec![],
        coefficients: vec![],
        intercept: 0.0,
    };
    assert!(TextClassifier::new(Arc::new(empty)).is_err());
}

#[test]
fn test_batch_matches_sequential_and_runs_shared() -> Result<()> {
    let classifier = Arc::new(TextClassifier::new(sample_bundle())?);

    let texts: Vec<String> = (0..64)
        .map(|i| format!("report number {i} is fake fake breaking news"))
        .collect();

    let batch = classifier.classify_batch(&texts)?;
    assert_eq!(batch.len(), texts.len());
    for (text, prediction) in texts.iter().zip(&batch) {
        assert_eq!(classifier.classify(text)?, *prediction);
    }

    // The classifier is shared read-only across threads.
    let from_thread = {
        let classifier = Arc::clone(&classifier);
        std::thread::spawn(move || classifier.classify("fake fake fake").unwrap())
            .join()
            .unwrap()
    };
    assert_eq!(from_thread, classifier.classify("fake fake fake")?);

    Ok(())
}

#[test]
fn test_normalize_surface_matches_analyzer() -> Result<()> {
    let classifier = TextClassifier::new(sample_bundle())?;
    let analyzer = EnglishAnalyzer::new()?;
    let text = "The dying newspapers were reporting the news.";

    assert_eq!(classifier.normalize(text)?, analyzer.token_texts(text)?);
    assert_eq!(
        classifier.normalize(text)?,
        terms(&["die", "newspap", "report", "news"])
    );

    Ok(())
}
