// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Data driven conformance tests. The cases live in `fixtures/padding_cases.json`:
//! - One group per function name (`left_pad`, `right_pad`, `center_pad`, `pad`,
//!   `zero_pad`).
//! - A `unicode` group keyed by function name.
//! - An `errors` group keyed by function name, whose cases have no `expected` value and
//!   must fail.
//!
//! Each case's `input` is the positional argument list. Trailing arguments that are
//! left out take the function's default (`" "` fill, `"left"` position).

use std::collections::BTreeMap;

use padlib::{DEFAULT_FILL, IntoPadText, PadError, PadPosition, center_pad, left_pad,
             pad, right_pad, zero_pad};
use serde::Deserialize;
use serde_json::Value;

const FIXTURES: &str = include_str!("fixtures/padding_cases.json");

#[derive(Debug, Deserialize)]
struct Case {
    description: String,
    input: Vec<Value>,
    #[serde(default)]
    expected: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Fixtures {
    left_pad: Vec<Case>,
    right_pad: Vec<Case>,
    center_pad: Vec<Case>,
    pad: Vec<Case>,
    zero_pad: Vec<Case>,
    #[serde(default)]
    unicode: BTreeMap<String, Vec<Case>>,
    #[serde(default)]
    errors: BTreeMap<String, Vec<Case>>,
}

/// A JSON value in the text (first) argument slot.
#[derive(Debug)]
enum TextArg {
    Absent,
    Text(String),
    Int(i64),
    Uint(u64),
    Float(f64),
}

impl From<Option<&Value>> for TextArg {
    fn from(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => TextArg::Absent,
            Some(Value::String(text)) => TextArg::Text(text.clone()),
            Some(Value::Number(number)) => {
                if let Some(it) = number.as_i64() {
                    TextArg::Int(it)
                } else if let Some(it) = number.as_u64() {
                    TextArg::Uint(it)
                } else {
                    TextArg::Float(number.as_f64().unwrap_or(f64::NAN))
                }
            }
            Some(other) => panic!("unsupported text argument in fixtures: {other}"),
        }
    }
}

impl IntoPadText for TextArg {
    fn into_pad_text(self) -> String {
        match self {
            TextArg::Absent => None::<&str>.into_pad_text(),
            TextArg::Text(it) => it.into_pad_text(),
            TextArg::Int(it) => it.into_pad_text(),
            TextArg::Uint(it) => it.into_pad_text(),
            TextArg::Float(it) => it.into_pad_text(),
        }
    }
}

fn load_fixtures() -> Fixtures {
    serde_json::from_str(FIXTURES).expect("fixtures/padding_cases.json is valid")
}

fn invoke(func_name: &str, args: &[Value]) -> Result<String, PadError> {
    let input = TextArg::from(args.first());
    let width = args
        .get(1)
        .and_then(Value::as_i64)
        .unwrap_or_else(|| panic!("{func_name}: width must be an integer: {args:?}"));
    let fill = args.get(2).and_then(Value::as_str).unwrap_or(DEFAULT_FILL);

    match func_name {
        "left_pad" => Ok(left_pad(input, width, fill)),
        "right_pad" => Ok(right_pad(input, width, fill)),
        "center_pad" => Ok(center_pad(input, width, fill)),
        "pad" => {
            let position = args
                .get(3)
                .and_then(Value::as_str)
                .unwrap_or(PadPosition::default().into());
            pad(input, width, fill, position)
        }
        // zero_pad takes (number, width), there is no fill slot.
        "zero_pad" => Ok(zero_pad(input, width)),
        other => panic!("unknown function in fixtures: {other}"),
    }
}

fn check_expected(group: &str, func_name: &str, cases: &[Case], failures: &mut Vec<String>) {
    for case in cases {
        let id = format!("{group}{func_name} - {}", case.description);
        let Some(expected) = &case.expected else {
            failures.push(format!("{id}: missing `expected`"));
            continue;
        };
        match invoke(func_name, &case.input) {
            Ok(actual) if &actual == expected => {}
            Ok(actual) => {
                failures.push(format!("{id}: expected {expected:?}, got {actual:?}"));
            }
            Err(error) => failures.push(format!("{id}: unexpected error: {error}")),
        }
    }
}

fn report(failures: &[String]) {
    assert!(
        failures.is_empty(),
        "{} conformance case(s) failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn test_function_groups() {
    let fixtures = load_fixtures();
    let groups: [(&str, &[Case]); 5] = [
        ("left_pad", fixtures.left_pad.as_slice()),
        ("right_pad", fixtures.right_pad.as_slice()),
        ("center_pad", fixtures.center_pad.as_slice()),
        ("pad", fixtures.pad.as_slice()),
        ("zero_pad", fixtures.zero_pad.as_slice()),
    ];

    let mut failures = vec![];
    for (func_name, cases) in groups {
        assert!(!cases.is_empty(), "{func_name} group is empty");
        check_expected("", func_name, cases, &mut failures);
    }
    report(&failures);
}

#[test]
fn test_unicode_group() {
    let fixtures = load_fixtures();
    assert!(!fixtures.unicode.is_empty());

    let mut failures = vec![];
    for (func_name, cases) in &fixtures.unicode {
        check_expected("unicode/", func_name, cases, &mut failures);
    }
    report(&failures);
}

#[test]
fn test_errors_group() {
    let fixtures = load_fixtures();
    assert!(!fixtures.errors.is_empty());

    let mut failures = vec![];
    for (func_name, cases) in &fixtures.errors {
        for case in cases {
            let id = format!("error/{func_name} - {}", case.description);
            match invoke(func_name, &case.input) {
                Err(PadError::InvalidArgument { value }) => {
                    let position = case.input.get(3).and_then(Value::as_str);
                    if position != Some(value.as_str()) {
                        failures.push(format!("{id}: error names {value:?}"));
                    }
                }
                Ok(actual) => failures.push(format!("{id}: expected error, got {actual:?}")),
            }
        }
    }
    report(&failures);
}
