//! Integration tests for the algebraic properties of outcomes

use outcome::domain::{Error, ErrorKind, Metadata};
use outcome::outcome::{Outcome, OutcomeExt, OutcomeStatus, TypedOutcome, UnitOutcome};
use serde_json::json;
use std::cell::Cell;
use std::collections::VecDeque;
use test_case::test_case;

fn err(message: &str, code: &str) -> Error {
    Error::builder(message).code(code).build().unwrap()
}

fn tagged_metadata() -> Metadata {
    Metadata::builder()
        .insert("request_id", "req-17")
        .insert("attempt", 2)
        .build()
}

/// One instance of every reachable state, all carrying a message and metadata
fn samples() -> Vec<Outcome<i32>> {
    vec![
        Outcome::success(42)
            .with_message("ok")
            .with_metadata(tagged_metadata()),
        Outcome::failure(vec![err("bad", "BAD"), err("worse", "WORSE")])
            .unwrap()
            .with_message("failed")
            .with_metadata(tagged_metadata()),
        Outcome::default()
            .with_message("pending")
            .with_metadata(tagged_metadata()),
    ]
}

#[test]
fn test_exclusivity() {
    for outcome in samples() {
        match outcome.status() {
            OutcomeStatus::Uninitialized => {
                assert!(!outcome.is_success());
                assert!(!outcome.is_failure());
            }
            _ => assert!(outcome.is_success() ^ outcome.is_failure()),
        }
    }
}

#[test]
fn test_non_empty_failure_for_every_input_shape() {
    let empty_array: [Error; 0] = [];
    let empty_vec: Vec<Error> = Vec::new();
    let empty_deque: VecDeque<Error> = VecDeque::new();

    let results = [
        Outcome::<i32>::failure_from_slice(&empty_array),
        Outcome::<i32>::failure_from_slice(&empty_vec),
        Outcome::<i32>::failure(empty_array),
        Outcome::<i32>::failure(empty_vec),
        Outcome::<i32>::failure(empty_deque),
        Outcome::<i32>::failure((0..3).filter(|_| false).map(|_| err("never", "NEVER"))),
    ];

    for result in results {
        assert!(result.unwrap_err().is_argument_invalid());
    }
    assert!(UnitOutcome::failure(Vec::new()).is_err());
    assert!(TypedOutcome::<i32, Error>::failure(Vec::new()).is_err());
}

#[test]
fn test_failure_shapes_agree() {
    let errors = vec![err("a", "A"), err("b", "B")];
    let from_slice = Outcome::<i32>::failure_from_slice(&errors).unwrap();
    let from_vec = Outcome::<i32>::failure(errors.clone()).unwrap();
    let from_lazy = Outcome::<i32>::failure(errors.iter().cloned()).unwrap();

    assert_eq!(from_slice, from_vec);
    assert_eq!(from_vec, from_lazy);
}

#[test]
fn test_map_identity_law() {
    for outcome in samples() {
        let expected = outcome.clone();
        assert_eq!(outcome.map(|x| x), expected);
    }
}

#[test_case(|x| x + 1, |x| x * 3 ; "add then multiply")]
#[test_case(|x| x * 0, |x| x - 7 ; "zero then subtract")]
#[test_case(|x| -x, |x| x / 2 ; "negate then halve")]
fn test_map_composition_law(f: fn(i32) -> i32, g: fn(i32) -> i32) {
    for outcome in samples() {
        let stepwise = outcome.clone().map(f).map(g);
        let composed = outcome.map(|x| g(f(x)));
        assert_eq!(stepwise, composed);
    }
}

#[test]
fn test_bind_short_circuit() {
    let calls = Cell::new(0);
    let failed = Outcome::<i32>::failure(vec![err("a", "A"), err("b", "B")]).unwrap();
    let original: Vec<Error> = failed.errors().to_vec();
    let before = failed.errors().as_ptr();

    let result = failed
        .bind(|x| {
            calls.set(calls.get() + 1);
            Outcome::success(x + 1)
        })
        .bind(|x| {
            calls.set(calls.get() + 1);
            Outcome::success(x.to_string())
        });

    assert_eq!(calls.get(), 0);
    assert!(result.is_failure());
    assert_eq!(result.errors(), original.as_slice());
    assert_eq!(result.errors().as_ptr(), before);
}

#[test]
fn test_bind_stops_at_first_failing_stage() {
    let calls = Cell::new(0);
    let result = Outcome::success(1)
        .bind(|x| {
            calls.set(calls.get() + 1);
            Outcome::success(x + 1)
        })
        .bind(|_| -> Outcome<i32> {
            calls.set(calls.get() + 1);
            err("stage two rejected", "STAGE_TWO").into()
        })
        .bind(|x| {
            calls.set(calls.get() + 1);
            Outcome::success(x * 10)
        });

    assert_eq!(calls.get(), 2);
    assert_eq!(result.first_error().unwrap().code(), "STAGE_TWO");
}

#[test]
fn test_map_preserves_message_and_metadata() {
    for outcome in samples() {
        let message = outcome.message().map(str::to_string);
        let metadata = outcome.metadata().clone();

        let mapped = outcome.map(|x| x.to_string());
        assert_eq!(mapped.message().map(str::to_string), message);
        assert!(mapped.metadata().ptr_eq(&metadata));
    }
}

#[test]
fn test_bind_failure_preserves_message_and_metadata() {
    let failed = Outcome::<i32>::from_error(err("bad", "BAD"))
        .with_message("failed")
        .with_metadata(tagged_metadata());
    let metadata = failed.metadata().clone();

    let bound = failed.bind(|x| Outcome::success(x + 1));
    assert_eq!(bound.message(), Some("failed"));
    assert!(bound.metadata().ptr_eq(&metadata));
    assert_eq!(bound.metadata().get("request_id"), Some(&json!("req-17")));
}

#[test]
fn test_first_error_contract() {
    let single = err("only", "ONLY");
    let failed = Outcome::<i32>::from_error(single.clone());
    assert_eq!(failed.first_error().unwrap(), &single);

    let on_success = Outcome::success(1).first_error().unwrap_err();
    let on_uninit = Outcome::<i32>::default().first_error().unwrap_err();
    assert!(on_success.is_invalid_state());
    assert!(on_uninit.is_invalid_state());
    assert_ne!(on_success.to_string(), on_uninit.to_string());
}

#[test]
fn test_errors_are_shared_not_copied_across_pipeline() {
    let failed = Outcome::<i32>::failure(vec![err("a", "A")]).unwrap();
    let before = failed.errors().as_ptr();

    let after = failed
        .map(|x| x + 1)
        .bind(|x| Outcome::success(x.to_string()))
        .map(|s| s.len())
        .as_failure::<bool>()
        .unwrap();
    assert_eq!(after.errors().as_ptr(), before);
}

// Concrete scenarios

#[test]
fn test_scenario_success_with_message() {
    let outcome = Outcome::success(42).with_message("ok");
    assert!(outcome.is_success());
    assert_eq!(outcome.value(), Some(&42));
    assert_eq!(outcome.message(), Some("ok"));
    assert!(!outcome.is_failure());
}

#[test]
fn test_scenario_failure_with_code() {
    let outcome: Outcome<i32> = Outcome::from_error(err("bad", "BAD")).with_message("failed");
    assert!(outcome.is_failure());
    assert_eq!(outcome.errors().len(), 1);
    assert_eq!(outcome.errors()[0].code(), "BAD");
    assert_eq!(outcome.message(), Some("failed"));
    assert!(!outcome.is_success());
    assert_eq!(outcome.value(), None);
}

#[test]
fn test_scenario_unexpected_survives_map() {
    let outcome: Outcome<i32> = Error::unexpected("boom").unwrap().into();
    let mapped = outcome.map(|x| x.to_string());
    assert!(mapped.is_failure());
    assert_eq!(mapped.errors().len(), 1);
    assert_eq!(mapped.errors()[0].message(), "boom");
    assert_eq!(mapped.errors()[0].kind(), &ErrorKind::unexpected());
}

#[test]
fn test_scenario_typed_success_deconstructs() {
    let outcome: TypedOutcome<i32, Error> = TypedOutcome::success(9);
    assert_eq!(outcome.deconstruct(), (true, Some(&9), None));
}

#[test]
fn test_scenario_first_error_on_success() {
    let outcome = Outcome::success("abc");
    assert!(outcome.first_error().unwrap_err().is_invalid_state());
}

#[test]
fn test_scenario_bind_on_failure_is_unchanged() {
    let original = Error::create("fail").unwrap();
    let outcome: Outcome<i32> = original.clone().into();
    let bound = outcome.bind(|_| Outcome::success("unreachable"));
    assert!(bound.is_failure());
    assert_eq!(bound.errors(), &[original]);
}

#[test]
fn test_outcomes_are_shareable_across_threads() {
    let outcome = Outcome::<i32>::failure(vec![err("a", "A")]).unwrap();
    let shared = std::sync::Arc::new(outcome);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || shared.errors_by_code("A").unwrap().len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
}
