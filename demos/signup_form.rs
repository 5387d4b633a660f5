//! Signup Form
//!
//! This example validates a signup payload the way a web handler would.
//!
//! Key concepts:
//! - Validator-wide messages and display names from JSON configuration
//! - A custom rule registered by name
//! - Compact and list rule forms via the `rules!` macro
//! - A post-validation hook for a cross-field check
//! - Both access modes: inspecting errors and requesting validated data
//!
//! Run with: cargo run --example signup_form

use serde_json::{json, Value};
use vetting::messages::{MessageFormat, Messages};
use vetting::{record, rules, Record, Rule, Validator, ValidatorConfig};

// Rejects handles that are on the reserved list
struct NotReserved;

impl Rule for NotReserved {
    fn name(&self) -> &str {
        "not_reserved"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        const RESERVED: &[&str] = &["admin", "root", "support"];
        match value.and_then(Value::as_str) {
            Some(handle) if RESERVED.contains(&handle.to_lowercase().as_str()) => {
                Some("The :attribute is reserved.".to_string())
            }
            _ => None,
        }
    }
}

const CONFIG: &str = r#"{
    "messages": {
        "password.min": "Pick a :attribute with at least :min characters."
    },
    "attributes": {
        "handle": "username",
        "terms": "terms of service"
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Signup Form ===\n");

    let validator = Validator::builder()
        .config(ValidatorConfig::from_json(CONFIG)?)
        .rule("not_reserved", NotReserved)
        .build()?;

    let spec = rules! {
        "handle" => "required|alpha_num|between:3,16|not_reserved",
        "email" => "required|email|max:100",
        "password" => ["required", "min:8", "confirmed"],
        "age" => "nullable|integer|min:13",
        "terms" => "accepted",
    };

    let submissions = [
        json!({
            "handle": "Admin",
            "email": "not-an-email",
            "password": "hunter2",
            "password_confirmation": "hunter3",
            "age": "12",
        }),
        json!({
            "handle": "haris",
            "email": "haris@example.com",
            "password": "haris@example.com",
            "password_confirmation": "haris@example.com",
            "age": null,
            "terms": "yes",
        }),
        json!({
            "handle": "haris",
            "email": "haris@example.com",
            "password": "correct horse battery",
            "password_confirmation": "correct horse battery",
            "age": 30,
            "terms": true,
            "is_admin": true,
        }),
    ];

    for (index, submission) in submissions.into_iter().enumerate() {
        println!("Submission #{}", index + 1);

        let mut evaluation = validator.make(record(submission), &spec, Messages::new())?;
        evaluation.after(|data, errors| {
            if data.get("password") == data.get("email") {
                errors.add("password", "The password must not be your email address.");
            }
        });

        if evaluation.fails() {
            println!("  Rejected:");
            println!("{}", evaluation.errors().render(MessageFormat::Plain)?);
        }

        match evaluation.validated() {
            Ok(data) => println!("  Accepted: {}", serde_json::to_string_pretty(&data)?),
            Err(failure) => println!("  Summary: {failure}"),
        }
        println!();
    }

    Ok(())
}
