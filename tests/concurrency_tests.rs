//! A built validator and compiled rule set shared across tasks.

use serde_json::json;
use std::sync::Arc;
use vetting::messages::Messages;
use vetting::{record, RuleSpec, Validator};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_validator_serves_concurrent_evaluations() {
    let validator = Arc::new(Validator::new());
    let rules = Arc::new(
        validator
            .compile(
                &RuleSpec::new()
                    .field("username", "required|email|max:100")
                    .field("password", "required|min:6|max:20"),
            )
            .unwrap(),
    );

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let validator = Arc::clone(&validator);
            let rules = Arc::clone(&rules);
            tokio::spawn(async move {
                let data = if i % 2 == 0 {
                    record(json!({ "username": format!("user{i}@example.com"), "password": "password" }))
                } else {
                    record(json!({ "username": format!("user{i}"), "password": "pw" }))
                };
                (i, validator.evaluate(&data, &rules, &Messages::new()))
            })
        })
        .collect();

    for handle in handles {
        let (i, outcome) = handle.await.unwrap();
        if i % 2 == 0 {
            assert!(outcome.passes(), "record {i} should pass");
        } else {
            assert_eq!(outcome.errors().len(), 2, "record {i} should fail twice");
        }
    }
}

#[tokio::test]
async fn hooks_are_shared_between_tasks() {
    let validator = Arc::new(Validator::new());
    let rules = Arc::new(
        validator
            .compile(&RuleSpec::new().field("username", "required").field("password", "required"))
            .unwrap()
            .after(|data, errors| {
                if data.get("username") == data.get("password") {
                    errors.add("password", "Password must differ from username.");
                }
            }),
    );

    let same = {
        let (validator, rules) = (Arc::clone(&validator), Arc::clone(&rules));
        tokio::spawn(async move {
            validator.evaluate(&record(json!({ "username": "a", "password": "a" })), &rules, &Messages::new())
        })
    };
    let different = {
        let (validator, rules) = (Arc::clone(&validator), Arc::clone(&rules));
        tokio::spawn(async move {
            validator.evaluate(&record(json!({ "username": "a", "password": "b" })), &rules, &Messages::new())
        })
    };

    assert!(same.await.unwrap().fails());
    assert!(different.await.unwrap().passes());
}
