use abacus_calculator::{
    Calculation, CalculatorError, CalculatorInputs, Catalog, InputRecord, InputValue, RiskLevel,
};

fn record(pairs: &[(&str, InputValue)]) -> InputRecord {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

fn calculate(id: &str, pairs: &[(&str, InputValue)]) -> Result<Calculation, CalculatorError> {
    let catalog = Catalog::builtin();
    let calculator = catalog.get(id).unwrap_or_else(|| panic!("missing calculator {id}"));
    let data = record(pairs);
    calculator.calculate(&CalculatorInputs::new(&data))
}

#[test]
fn bond_bought_at_discount_yields_more_than_coupon() {
    let calc = calculate(
        "bond-yield-to-maturity",
        &[
            ("parValue", InputValue::from(1000)),
            ("couponRate", InputValue::from(5)),
            ("yearsToMaturity", InputValue::from(10)),
            ("currentPrice", InputValue::from(950)),
        ],
    )
    .unwrap();

    assert!(calc.result > 5.0);
    assert!((calc.result - 5.66).abs() < 0.01);
    assert_eq!(calc.risk_level(), Some(RiskLevel::Medium));
}

#[test]
fn debt_to_equity_of_two_is_high_risk() {
    let calc = calculate(
        "debt-to-equity-ratio",
        &[
            ("totalDebt", InputValue::from(500_000)),
            ("totalEquity", InputValue::from(250_000)),
        ],
    )
    .unwrap();

    assert_eq!(calc.result, 2.0);
    assert_eq!(calc.risk_level(), Some(RiskLevel::High));
}

#[test]
fn garden_cost_combines_soil_and_fence() {
    let calc = calculate(
        "garden-cost",
        &[
            ("length", InputValue::from(10)),
            ("width", InputValue::from(10)),
            ("soilDepth", InputValue::from(6)),
            ("fenceHeight", InputValue::from(4)),
            ("soilCostPerCubicYard", InputValue::from(30)),
            ("fenceCostPerSquareFoot", InputValue::from(5)),
        ],
    )
    .unwrap();

    // 100 sq ft at 0.5 ft deep is 50/27 cubic yards of soil, plus 160 sq ft of fence
    assert_eq!(calc.result, 855.56);
}

#[test]
fn negative_amounts_surface_validation_failure() {
    let err = calculate(
        "roi",
        &[
            ("investment", InputValue::from(-100)),
            ("revenue", InputValue::from(80_000)),
            ("costs", InputValue::from(30_000)),
        ],
    )
    .unwrap_err();

    assert_eq!(err.error_code(), "VALIDATION_FAILURE");
    assert_eq!(err.calculator(), "roi");
    assert_eq!(err.messages(), vec!["Investment must be greater than 0"]);
    assert_eq!(
        err.to_string(),
        "Validation failed for 'roi': Investment must be greater than 0"
    );
}

#[test]
fn every_message_is_reported_in_order() {
    let err = calculate(
        "debt-to-equity-ratio",
        &[
            ("totalDebt", InputValue::from(-1)),
            ("totalEquity", InputValue::from(0)),
        ],
    )
    .unwrap_err();

    assert_eq!(
        err.messages(),
        vec![
            "Total debt cannot be negative",
            "Total equity must be greater than 0",
        ]
    );
}

#[test]
fn missing_and_mistyped_fields_are_reported() {
    let err = calculate(
        "mortgage-payment",
        &[
            ("loanAmount", InputValue::from("a lot")),
            ("interestRate", InputValue::from(6.5)),
        ],
    )
    .unwrap_err();

    assert_eq!(
        err.messages(),
        vec![
            "Loan amount must be a number, got string",
            "Loan term is required",
        ]
    );
}

#[test]
fn statistics_accepts_a_list() {
    let calc = calculate(
        "descriptive-statistics",
        &[("values", InputValue::from(vec![1.0, 2.0, 3.0, 10.0]))],
    )
    .unwrap();

    assert_eq!(calc.result, 4.0);
    assert_eq!(calc.metric("median"), Some(2.5));
    assert_eq!(calc.metric("range"), Some(9.0));
}

#[test]
fn valuation_method_must_be_known() {
    let err = calculate(
        "business-valuation",
        &[
            ("valuationMethod", InputValue::from("vibes")),
            ("annualRevenue", InputValue::from(1_000_000)),
        ],
    )
    .unwrap_err();

    assert_eq!(
        err.messages(),
        vec!["Valuation method must be one of asset, earnings, market, got 'vibes'"]
    );
}

#[test]
fn builtin_worked_examples_all_pass() {
    let report = abacus_calculator::audit(&Catalog::builtin());
    let failures: Vec<_> = report.failures().collect();
    assert!(failures.is_empty(), "failing examples: {failures:?}");
    assert!(report.passed() > 0);
}
