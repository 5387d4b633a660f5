//! End-to-end validation scenarios.
//!
//! Each test drives the public API the way an application would: build a
//! validator, declare rules, bind a record and inspect the result.

use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vetting::messages::Messages;
use vetting::parser::RuleToken;
use vetting::{record, Record, Rule, RuleSpec, SpecError, ValidationFailed, Validator};

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vetting=debug,validator_feature_tests=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

struct Uppercase;

impl Rule for Uppercase {
    fn name(&self) -> &str {
        "uppercase"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        match value.and_then(Value::as_str) {
            Some(s) if s == s.to_uppercase() => None,
            _ => Some("The :attribute must be uppercase.".to_string()),
        }
    }
}

/// A presence check that behaves like `required`: it runs on missing
/// values and stops the field when it fails.
struct Present;

impl Rule for Present {
    fn name(&self) -> &str {
        "present_value"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        match value {
            None | Some(Value::Null) => Some("The :attribute field must be present.".to_string()),
            Some(_) => None,
        }
    }

    fn is_implicit(&self) -> bool {
        true
    }

    fn short_circuits(&self) -> bool {
        true
    }
}

fn credentials() -> RuleSpec {
    RuleSpec::new()
        .field("username", "required")
        .field("password", "required")
}

fn account() -> RuleSpec {
    RuleSpec::new()
        .field("username", "required|email|max:100")
        .field("password", ["required", "min:6", "max:20"])
}

#[test]
fn present_required_fields_pass() {
    init_tracing();
    let validator = Validator::new();
    let evaluation = validator
        .make(
            record(json!({ "username": "haris", "password": "password" })),
            &credentials(),
            Messages::new(),
        )
        .unwrap();

    assert!(evaluation.passes());
    assert!(!evaluation.fails());
    assert!(evaluation.errors().is_empty());
}

#[test]
fn blank_required_fields_fail() {
    init_tracing();
    let validator = Validator::new();
    let evaluation = validator
        .make(
            record(json!({ "username": "", "password": "" })),
            &credentials(),
            Messages::new(),
        )
        .unwrap();

    assert!(!evaluation.passes());
    assert!(evaluation.fails());

    let errors = evaluation.errors();
    tracing::info!("{}", errors.to_json_pretty().unwrap());
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({
            "username": ["The username field is required."],
            "password": ["The password field is required."],
        })
    );
}

#[test]
fn validated_raises_with_full_failure_set() {
    init_tracing();
    let validator = Validator::new();
    let evaluation = validator
        .make(
            record(json!({ "username": "", "password": "" })),
            &credentials(),
            Messages::new(),
        )
        .unwrap();

    let failure: ValidationFailed = evaluation.validated().unwrap_err();
    tracing::error!("{}", failure.errors().to_json_pretty().unwrap());

    assert_eq!(failure.errors(), &evaluation.errors());
    assert_eq!(
        failure.to_string(),
        "The username field is required. (and 1 more error)"
    );
}

#[test]
fn compact_and_list_forms_pass_together() {
    init_tracing();
    let validator = Validator::new();
    let evaluation = validator
        .make(
            record(json!({ "username": "haris@gmail.com", "password": "password" })),
            &account(),
            Messages::new(),
        )
        .unwrap();

    assert!(evaluation.passes());
    tracing::info!("{}", evaluation.errors().to_json_pretty().unwrap());
}

#[test]
fn multiple_rules_report_each_field() {
    init_tracing();
    let validator = Validator::new();
    let evaluation = validator
        .make(
            record(json!({ "username": "haris", "password": "pas" })),
            &account(),
            Messages::new(),
        )
        .unwrap();

    assert!(evaluation.fails());
    let errors = evaluation.errors();
    tracing::info!("{}", errors.to_json_pretty().unwrap());
    assert_eq!(errors.get("username"), ["The username field must be a valid email address."]);
    assert_eq!(errors.get("password"), ["The password field must be at least 6 characters."]);
}

#[test]
fn validated_data_excludes_undeclared_fields() {
    init_tracing();
    let validator = Validator::new();
    let spec = RuleSpec::new()
        .field("username", "required|email|max:100")
        .field("password", "required|min:6|max:20");
    let evaluation = validator
        .make(
            record(json!({ "username": "haris@gmail.com", "password": "password", "admin": true })),
            &spec,
            Messages::new(),
        )
        .unwrap();

    let data = evaluation.validated().unwrap();
    tracing::info!("{}", serde_json::to_string_pretty(&data).unwrap());
    assert_eq!(
        Value::Object(data),
        json!({ "username": "haris@gmail.com", "password": "password" })
    );
}

#[test]
fn inline_messages_replace_defaults() {
    init_tracing();
    let validator = Validator::new();
    let spec = RuleSpec::new()
        .field("username", "required|email|max:100")
        .field("password", "required|min:6|max:10");
    let evaluation = validator
        .make(
            record(json!({ "username": "asd", "password": "asd" })),
            &spec,
            [
                ("required", ":attribute harus diisi atuh"),
                ("min", ":attribute minimal password kamu harus 6 karakter kak"),
            ],
        )
        .unwrap();

    let errors = evaluation.errors();
    tracing::info!("{}", errors.to_json_pretty().unwrap());
    assert_eq!(errors.get("username"), ["The username field must be a valid email address."]);
    assert_eq!(
        errors.get("password"),
        ["password minimal password kamu harus 6 karakter kak"]
    );
}

#[test]
fn after_hook_adds_cross_field_failure() {
    init_tracing();
    let validator = Validator::new();
    let mut evaluation = validator
        .make(
            record(json!({ "username": "haris@gmail.com", "password": "haris@gmail.com" })),
            &account(),
            Messages::new(),
        )
        .unwrap();
    evaluation.after(|data, errors| {
        if data.get("username") == data.get("password") {
            errors.add("password", "Password Ga Boleh Sama dengan Username KAK");
        }
    });

    assert!(!evaluation.passes());
    assert!(evaluation.fails());
    let errors = evaluation.errors();
    tracing::info!("{}", errors.to_json_pretty().unwrap());
    assert_eq!(errors.get("password"), ["Password Ga Boleh Sama dengan Username KAK"]);
    assert!(!errors.has("username"));
}

#[test]
fn custom_rule_object_joins_the_list() {
    init_tracing();
    let validator = Validator::new();
    let spec = RuleSpec::new()
        .field(
            "username",
            vec![
                RuleToken::from("required"),
                RuleToken::from("email"),
                RuleToken::from("max:100"),
                RuleToken::from(Uppercase),
            ],
        )
        .field("password", ["required", "min:6", "max:20"]);
    let evaluation = validator
        .make(
            record(json!({ "username": "haris@gmail.com", "password": "haris@gmail.com" })),
            &spec,
            Messages::new(),
        )
        .unwrap();

    assert!(evaluation.fails());
    let errors = evaluation.errors();
    tracing::info!("{}", errors.to_json_pretty().unwrap());
    assert_eq!(errors.get("username"), ["The username must be uppercase."]);
    assert!(!errors.has("password"));
}

#[test]
fn registered_custom_rule_is_usable_by_name() {
    let validator = Validator::builder()
        .rule("uppercase", Uppercase)
        .build()
        .unwrap();
    let spec = RuleSpec::new().field("code", "required|uppercase|max:4");

    let evaluation = validator
        .make(record(json!({ "code": "abcde" })), &spec, Messages::new())
        .unwrap();
    assert_eq!(
        evaluation.errors().get("code"),
        [
            "The code must be uppercase.",
            "The code field must not be greater than 4 characters.",
        ]
    );
}

#[test]
fn unknown_rule_is_a_specification_error() {
    let validator = Validator::new();
    let spec = RuleSpec::new().field("username", "required|shouting");

    let err = validator
        .make(record(json!({ "username": "x" })), &spec, Messages::new())
        .err()
        .unwrap();
    assert_eq!(
        err,
        SpecError::UnknownRule {
            field: "username".to_string(),
            rule: "shouting".to_string(),
        }
    );
}

#[test]
fn display_names_and_field_messages_combine() {
    let validator = Validator::builder()
        .attribute("pw", "password")
        .message("pw.min", "Your :attribute needs :min characters.")
        .build()
        .unwrap();
    let spec = RuleSpec::new()
        .field("pw", "required|min:8")
        .field("email", "required|email");

    let evaluation = validator
        .make(record(json!({ "pw": "short", "email": "nope" })), &spec, Messages::new())
        .unwrap();
    let errors = evaluation.errors();
    assert_eq!(errors.first("pw"), Some("Your password needs 8 characters."));
    assert_eq!(errors.first("email"), Some("The email field must be a valid email address."));
}

#[test]
fn spec_loaded_from_json_behaves_like_built_spec() {
    let spec = RuleSpec::from_json(
        r#"{
            "username": "required|email|max:100",
            "password": ["required", "min:6", "max:20"]
        }"#,
    )
    .unwrap();

    let validator = Validator::new();
    let from_json = validator
        .make(record(json!({ "username": "haris", "password": "pas" })), &spec, Messages::new())
        .unwrap()
        .errors();
    let built = validator
        .make(record(json!({ "username": "haris", "password": "pas" })), &account(), Messages::new())
        .unwrap()
        .errors();
    assert_eq!(from_json, built);
}

#[test]
fn numeric_fields_are_measured_by_value() {
    let validator = Validator::new();
    let spec = RuleSpec::new()
        .field("age", "required|integer|between:18,65")
        .field("code", "required|string|min:3");

    let evaluation = validator
        .make(record(json!({ "age": "17", "code": "12" })), &spec, Messages::new())
        .unwrap();
    let errors = evaluation.errors();
    assert_eq!(errors.get("age"), ["The age field must be between 18 and 65."]);
    assert_eq!(errors.get("code"), ["The code field must be at least 3 characters."]);
}

#[test]
fn confirmation_and_comparison_rules() {
    let validator = Validator::new();
    let spec = RuleSpec::new()
        .field("password", "required|confirmed")
        .field("role", "required|in:admin,editor")
        .field("nickname", "different:username");

    let evaluation = validator
        .make(
            record(json!({
                "username": "haris",
                "nickname": "haris",
                "password": "secret",
                "password_confirmation": "secrets",
                "role": "root",
            })),
            &spec,
            Messages::new(),
        )
        .unwrap();
    let errors = evaluation.errors();
    assert_eq!(errors.get("password"), ["The password field confirmation does not match."]);
    assert_eq!(errors.get("role"), ["The selected role is invalid."]);
    assert_eq!(errors.get("nickname"), ["The nickname field and username must be different."]);
}

#[test]
fn outcome_converts_into_stillwater_validation() {
    let validator = Validator::new();
    let rules = validator.compile(&credentials()).unwrap();

    let outcome = validator.evaluate(&record(json!({ "username": "a" })), &rules, &Messages::new());
    let validation = outcome.into_validation();
    assert!(validation.is_failure());
}

#[test]
fn implicit_custom_rule_short_circuits_like_required() {
    let validator = Validator::new();
    let custom = RuleSpec::new().field(
        "username",
        vec![RuleToken::from(Present), RuleToken::from("email"), RuleToken::from("min:10")],
    );
    let builtin = RuleSpec::new().field("username", "required|email|min:10");

    let missing = validator
        .make(record(json!({})), &custom, Messages::new())
        .unwrap()
        .errors();
    assert_eq!(missing.get("username"), ["The username field must be present."]);

    let builtin_missing = validator
        .make(record(json!({})), &builtin, Messages::new())
        .unwrap()
        .errors();
    assert_eq!(missing.get("username").len(), builtin_missing.get("username").len());

    let present = validator
        .make(record(json!({ "username": "haris" })), &custom, Messages::new())
        .unwrap()
        .errors();
    assert_eq!(
        present.get("username"),
        [
            "The username field must be a valid email address.",
            "The username field must be at least 10 characters.",
        ]
    );
}

#[test]
fn registered_implicit_rule_runs_on_missing_value() {
    let validator = Validator::builder()
        .rule("present_value", Present)
        .build()
        .unwrap();
    let spec = RuleSpec::new().field("token", "present_value|uuid|max:5");

    let errors = validator
        .make(record(json!({ "other": 1 })), &spec, Messages::new())
        .unwrap()
        .errors();
    assert_eq!(errors.get("token"), ["The token field must be present."]);
}
