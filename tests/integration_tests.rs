use anyhow::Result;
use serde_json::json;
use std::io::Write;
use tempfile::{Builder, TempDir};
use term_extract::{
    extract_terms, extract_terms_from_json, CategoryMap, CategoryValue, ExtractError,
    ExtractorConfig, FileSource, OutputFormat, StaticSource, TermEngine, WriterSink,
};

#[test]
fn test_end_to_end_with_sample_categories() -> Result<()> {
    let source = StaticSource::new(CategoryMap::sample());
    let sink = WriterSink::new(Vec::new(), OutputFormat::Debug);

    let mut engine = TermEngine::new(source, sink);
    let terms = engine.run()?;

    assert_eq!(
        terms,
        vec![
            "ipo",
            "job postings",
            "fsi sandbox, kaffeine",
            "fsi sandbox, kaffeine"
        ]
    );

    let output = String::from_utf8(engine.into_sink().into_inner())?;
    assert_eq!(
        output,
        "[\"ipo\", \"job postings\", \"fsi sandbox, kaffeine\", \"fsi sandbox, kaffeine\"]\n"
    );
    Ok(())
}

#[test]
fn test_end_to_end_from_json_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("categories.json");
    std::fs::write(
        &input_path,
        serde_json::to_string(&json!({
            "press/release": [],
            "earnings.call": {},
            "hiring": ["backend", "sre"]
        }))?,
    )?;

    let sink = WriterSink::new(Vec::new(), OutputFormat::Json);
    let mut engine = TermEngine::new(FileSource::new(&input_path), sink);
    let terms = engine.run()?;

    assert_eq!(terms, vec!["press release", "earnings call", "backend, sre"]);

    let output = String::from_utf8(engine.into_sink().into_inner())?;
    let parsed: Vec<String> = serde_json::from_str(output.trim_end())?;
    assert_eq!(parsed, terms);
    Ok(())
}

#[test]
fn test_malformed_file_emits_nothing() -> Result<()> {
    let mut file = Builder::new().suffix(".json").tempfile()?;
    file.write_all(br#"{"ipo": [], "launch": {"nested": ["x"]}}"#)?;

    let sink = WriterSink::new(Vec::new(), OutputFormat::Lines);
    let mut engine = TermEngine::new(FileSource::new(file.path()), sink);

    let err = engine.run().unwrap_err();
    assert!(matches!(
        err,
        ExtractError::InvalidValueShape { ref category, .. } if category == "launch"
    ));
    assert!(engine.into_sink().into_inner().is_empty());
    Ok(())
}

#[test]
fn test_config_driven_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("term-extract.toml");
    std::fs::write(
        &config_path,
        r#"
[extractor]
name = "integration"

[output]
format = "lines"

[categories]
"job_postings" = []
"product_launch" = ["fsi sandbox", "kaffeine"]
"#,
    )?;

    let config = ExtractorConfig::from_file(&config_path)?;
    let categories = config.categories()?.expect("categories table present");
    let sink = WriterSink::new(Vec::new(), config.output_format()?);

    let mut engine = TermEngine::new(StaticSource::new(categories), sink);
    engine.run()?;

    let output = String::from_utf8(engine.into_sink().into_inner())?;
    assert_eq!(output, "job postings\nfsi sandbox, kaffeine\n");
    Ok(())
}

#[test]
fn test_reference_scenarios_via_json() -> Result<()> {
    let cases = [
        (
            json!({
                "ipo": [],
                "job_postings": [],
                "mergers_and_acquisitions": ["fsi sandbox", "kaffeine"],
                "product_launch": ["fsi sandbox", "kaffeine"]
            }),
            vec![
                "ipo",
                "job postings",
                "fsi sandbox, kaffeine",
                "fsi sandbox, kaffeine",
            ],
        ),
        (json!({"a/b": []}), vec!["a b"]),
        (json!({"tags": ["x"]}), vec!["x"]),
        (json!({}), vec![]),
    ];

    for (input, expected) in cases {
        assert_eq!(extract_terms_from_json(&input)?, expected, "input: {}", input);
    }
    Ok(())
}

#[test]
fn test_extraction_leaves_input_untouched() {
    let categories: CategoryMap = [
        ("b_side", CategoryValue::tags(Vec::<String>::new())),
        ("a", CategoryValue::tags(["one", "two", "three"])),
    ]
    .into_iter()
    .collect();
    let before = categories.clone();

    let first = extract_terms(&categories);
    let second = extract_terms(&categories);

    assert_eq!(first, vec!["b side", "one, two, three"]);
    assert_eq!(first, second);
    assert_eq!(categories, before);
}

#[test]
fn test_blank_category_name_still_gets_a_line() -> Result<()> {
    let categories: CategoryMap = [("", CategoryValue::EmptyMapping)].into_iter().collect();
    let sink = WriterSink::new(Vec::new(), OutputFormat::Lines);

    let mut engine = TermEngine::new(StaticSource::new(categories), sink);
    let terms = engine.run()?;

    assert_eq!(terms, vec![""]);
    assert_eq!(engine.into_sink().into_inner(), b"\n");
    Ok(())
}
