use abacus_cli::app::App;
use abacus_cli::cli::{Command, InputArgs};
use abacus_cli::config::{AbacusConfig, OutputFormat};
use abacus_calculator::{Category, InputValue};

fn run(app: &App, command: Command) -> (bool, String) {
    let mut out = Vec::new();
    let ok = app.run(&command, &mut out).unwrap();
    (ok, String::from_utf8(out).unwrap())
}

fn inputs(fields: &[(&str, InputValue)]) -> InputArgs {
    InputArgs {
        fields: fields.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
        json: None,
    }
}

#[test]
fn list_filters_by_category() {
    let app = App::new(&AbacusConfig::default(), None);
    let (ok, text) = run(
        &app,
        Command::List {
            category: Some(Category::Health),
            search: None,
        },
    );
    assert!(ok);
    assert!(text.contains("bmi"));
    assert!(text.contains("daily-calorie-needs"));
    assert!(!text.contains("roi"));
    assert!(text.ends_with("2 calculator(s)\n"));
}

#[test]
fn calc_prints_result_and_risk() {
    let app = App::new(&AbacusConfig::default(), None);
    let (ok, text) = run(
        &app,
        Command::Calc {
            id: "debt-to-equity-ratio".into(),
            inputs: inputs(&[
                ("totalDebt", InputValue::from(500_000)),
                ("totalEquity", InputValue::from(250_000)),
            ]),
        },
    );
    assert!(ok);
    assert!(text.starts_with("debt-to-equity-ratio: 2.00\n"));
    assert!(text.contains("Risk: High"));
}

#[test]
fn calc_json_output_is_parseable() {
    let app = App::new(&AbacusConfig::default(), Some(OutputFormat::Json));
    let (ok, text) = run(
        &app,
        Command::Calc {
            id: "garden-cost".into(),
            inputs: InputArgs {
                fields: Vec::new(),
                json: Some(
                    r#"{"length": 10, "width": 10, "soilDepth": 6, "fenceHeight": 4,
                        "soilCostPerCubicYard": 30, "fenceCostPerSquareFoot": 5}"#
                        .into(),
                ),
            },
        },
    );
    assert!(ok);
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["result"], 855.56);
    assert_eq!(json["analysis"]["riskLevel"], "Low");
}

#[test]
fn invalid_inputs_fail_without_a_result() {
    let app = App::new(&AbacusConfig::default(), Some(OutputFormat::Json));
    let (ok, text) = run(
        &app,
        Command::Calc {
            id: "roi".into(),
            inputs: inputs(&[
                ("investment", InputValue::from(-100)),
                ("revenue", InputValue::from(1)),
                ("costs", InputValue::from(1)),
            ]),
        },
    );
    assert!(!ok);
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["type"], "ValidationFailure");
    assert!(json.get("result").is_none());
}

#[test]
fn validate_reports_each_field() {
    let app = App::new(&AbacusConfig::default(), None);
    let (ok, text) = run(
        &app,
        Command::Validate {
            id: "bmi".into(),
            inputs: inputs(&[
                ("weight", InputValue::from(5)),
                ("height", InputValue::from(10)),
            ]),
        },
    );
    assert!(!ok);
    assert!(text.contains("weight: Weight must be between 20 and 500"));
    assert!(text.contains("height: Height must be between 50 and 300"));
}

#[test]
fn unknown_id_is_an_error() {
    let app = App::new(&AbacusConfig::default(), None);
    let mut out = Vec::new();
    let err = app
        .run(&Command::Show { id: "nope".into() }, &mut out)
        .unwrap_err();
    assert!(err.to_string().contains("Unknown calculator 'nope'"));
}

#[test]
fn strict_audit_passes_for_builtins() {
    let app = App::new(&AbacusConfig::default(), None);
    let (ok, text) = run(&app, Command::Audit { strict: true });
    assert!(ok);
    assert!(text.contains("0 failed"));
}

#[test]
fn show_includes_form_fields() {
    let app = App::new(&AbacusConfig::default(), None);
    let (ok, text) = run(
        &app,
        Command::Show {
            id: "bond-yield-to-maturity".into(),
        },
    );
    assert!(ok);
    assert!(text.contains("Category: finance"));
    assert!(text.contains("paymentsPerYear"));
    assert!(text.contains("Worked examples: 2"));
}
