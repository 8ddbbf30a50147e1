//! Language-basics demo computations.
//!
//! Backing logic for the `/api/basics/*` endpoints. Each function is
//! pure and returns the JSON payload the endpoint serves, so the
//! demos can be unit-tested without an HTTP round trip.

use std::any::type_name_of_val;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde_json::{Value, json};

/// Sample values of the primitive types, plus their Rust type names.
pub fn variables_and_types() -> Value {
    let name = "Alice";
    let age: i64 = 30;
    let height: f64 = 175.5;
    let is_student = true;

    json!({
        "name": name,
        "age": age,
        "height": height,
        "is_student": is_student,
        "types": {
            "name_type": type_name_of_val(&name),
            "age_type": type_name_of_val(&age),
        },
    })
}

/// Arithmetic operator results for a fixed pair of operands.
pub fn operator_results() -> Value {
    let a: i64 = 10;
    let b: i64 = 3;

    json!({
        "a": a,
        "b": b,
        "addition": a + b,
        "subtraction": a - b,
        "multiplication": a * b,
        "division": a as f64 / b as f64,
        "floor_division": a / b,
        "modulo": a % b,
        "exponentiation": a.pow(b as u32),
    })
}

/// Grade a score with an if/else chain.
pub fn conditional_result(score: i64) -> Value {
    let grade = if score >= 90 {
        "A"
    } else if score >= 80 {
        "B"
    } else {
        "C or below"
    };

    json!({ "score": score, "grade": grade })
}

/// Iterate a list with `for` and count with `while`-style looping.
pub fn loop_results() -> Value {
    let fruits = ["apple", "banana", "cherry"];

    let mut while_loop_count = Vec::new();
    let mut count = 0;
    while count < 5 {
        while_loop_count.push(format!("count: {count}"));
        count += 1;
    }

    json!({
        "for_loop_fruits": fruits,
        "while_loop_count": while_loop_count,
    })
}

/// Call helper functions: a greeting and an addition.
pub fn function_results(name: &str, x: i64, y: i64) -> Value {
    fn greet(name: &str) -> String {
        format!("Hello, {name}!")
    }

    fn add(x: i64, y: i64) -> i64 {
        x + y
    }

    json!({
        "greeting_message": greet(name),
        "addition_result": add(x, y),
    })
}

/// Manipulate a heterogeneous list: append, then remove.
pub fn list_results() -> Value {
    let initial = json!([1, 2, 3, "hello", true]);

    let mut list = initial.as_array().cloned().unwrap_or_default();
    list.push(json!(4));
    let after_append = list.clone();
    list.retain(|v| v != "hello");
    let after_remove = list;

    let first_element = initial[0].clone();
    json!({
        "initial_list": initial,
        "first_element": first_element,
        "list_after_append": after_append,
        "list_after_remove": after_remove,
    })
}

/// A fixed-arity tuple and positional access into it.
pub fn tuple_results() -> Value {
    let tuple = (1, 2, "three");

    json!({
        "tuple": [json!(tuple.0), json!(tuple.1), json!(tuple.2)],
        "first_element": tuple.0,
    })
}

/// Mutate a map: change a value, then insert a new key.
pub fn dictionary_results() -> Value {
    let mut person = BTreeMap::from([
        ("name".to_string(), json!("Charlie")),
        ("age".to_string(), json!(25)),
        ("city".to_string(), json!("Seoul")),
    ]);

    let initial = person.clone();
    person.insert("age".into(), json!(26));
    let after_age_change = person.clone();
    person.insert("job".into(), json!("Engineer"));
    let after_job_add = person;

    let name = initial["name"].clone();
    json!({
        "initial_dictionary": initial,
        "name": name,
        "dictionary_after_age_change": after_age_change,
        "dictionary_after_job_add": after_job_add,
    })
}

/// Mutate a set: duplicates collapse, add, then remove.
pub fn set_results() -> Value {
    // Duplicate inserts are dropped on construction.
    let mut set = BTreeSet::from([1, 2, 3, 2, 1]);

    let initial: Vec<_> = set.iter().copied().collect();
    set.insert(4);
    let after_add: Vec<_> = set.iter().copied().collect();
    set.remove(&1);
    let after_remove: Vec<_> = set.iter().copied().collect();

    json!({
        "initial_set": initial,
        "set_after_add": after_add,
        "set_after_remove": after_remove,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_use_integer_and_float_division() {
        let data = operator_results();
        assert_eq!(data["addition"], 13);
        assert_eq!(data["floor_division"], 3);
        assert_eq!(data["modulo"], 1);
        assert_eq!(data["exponentiation"], 1000);
        let division = data["division"].as_f64().unwrap();
        assert!((division - 10.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn conditional_grades_across_boundaries() {
        assert_eq!(conditional_result(95)["grade"], "A");
        assert_eq!(conditional_result(90)["grade"], "A");
        assert_eq!(conditional_result(85)["grade"], "B");
        assert_eq!(conditional_result(79)["grade"], "C or below");
    }

    #[test]
    fn loops_count_to_five() {
        let data = loop_results();
        let counts = data["while_loop_count"].as_array().unwrap();
        assert_eq!(counts.len(), 5);
        assert_eq!(counts[0], "count: 0");
        assert_eq!(counts[4], "count: 4");
    }

    #[test]
    fn functions_greet_and_add() {
        let data = function_results("Bobs", 5, 3);
        assert_eq!(data["greeting_message"], "Hello, Bobs!");
        assert_eq!(data["addition_result"], 8);
    }

    #[test]
    fn list_append_and_remove_snapshots() {
        let data = list_results();
        assert_eq!(data["initial_list"].as_array().unwrap().len(), 5);
        assert_eq!(data["list_after_append"].as_array().unwrap().len(), 6);
        let after_remove = data["list_after_remove"].as_array().unwrap();
        assert_eq!(after_remove.len(), 5);
        assert!(!after_remove.iter().any(|v| v == "hello"));
    }

    #[test]
    fn sets_drop_duplicates() {
        let data = set_results();
        assert_eq!(data["initial_set"], json!([1, 2, 3]));
        assert_eq!(data["set_after_add"], json!([1, 2, 3, 4]));
        assert_eq!(data["set_after_remove"], json!([2, 3, 4]));
    }

    #[test]
    fn dictionary_updates_do_not_touch_earlier_snapshots() {
        let data = dictionary_results();
        assert_eq!(data["initial_dictionary"]["age"], 25);
        assert_eq!(data["dictionary_after_age_change"]["age"], 26);
        assert_eq!(data["dictionary_after_job_add"]["job"], "Engineer");
        assert!(data["initial_dictionary"].get("job").is_none());
    }
}
