//! Basic usage example for verity-validator

use serde_json::json;
use verity_validator::prelude::*;

fn main() -> Result<(), ValidatorError> {
    // Show rule failures as they happen
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    // Rules built in code
    let rules = rule_set! {
        "email" => [required("Email is required"), email("Must be a valid email")],
        "firstName" => [max(10, "Too long, must be :max characters or less")],
        "age" => [between(18, 99, "Must be between :min and :max")],
    };

    let data = json!({ "firstName": "abcdefghijk", "age": 42 });
    match validate(&data, &rules)?.into_result() {
        Ok(()) => println!("✓ signup is valid"),
        Err(report) => {
            for (field, message) in &report.errors {
                println!("✗ {field}: {message}");
            }
        }
    }

    // The same rules as data
    let schema = RuleSchema::from_json(
        r#"{
            "email": ["required", "email"],
            "postcode": [{ "rule": "postcodeUK", "message": "Enter a UK postcode" }]
        }"#,
    )?;

    let validator = Validator::default();
    let report = validator.validate_schema(&json!({ "email": "ada@example.com", "postcode": "SW1A 1AA" }), &schema)?;
    println!("\nschema report: {}", serde_json::to_string(&report).unwrap_or_default());

    Ok(())
}
