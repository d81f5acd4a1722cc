use serde_json::json;

use condo_advocate::application::services::{
    BracketMode, into_elements, strip_newlines, strip_trailing_commas, try_parse_json,
};

#[test]
fn given_clean_array_when_parsing_then_returns_array() {
    let raw = r#"[{"category":"Dues","amount":100}]"#;

    let parsed = try_parse_json(raw, BracketMode::ArrayOnly);

    assert_eq!(parsed, Some(json!([{ "category": "Dues", "amount": 100 }])));
}

#[test]
fn given_prose_around_array_when_parsing_then_extracts_bracketed_payload() {
    let raw = "Here are the charges you asked for:\n```json\n[{\"amount\": 5}]\n```\nLet me know!";

    let parsed = try_parse_json(raw, BracketMode::ArrayOnly);

    assert_eq!(parsed, Some(json!([{ "amount": 5 }])));
}

#[test]
fn given_trailing_commas_when_parsing_then_repairs_them() {
    let raw = "[{\"a\": 1, \"b\": 2,}, {\"a\": 3,},]";

    let parsed = try_parse_json(raw, BracketMode::ArrayOnly);

    assert_eq!(parsed, Some(json!([{ "a": 1, "b": 2 }, { "a": 3 }])));
}

#[test]
fn given_raw_newline_inside_string_when_parsing_then_repairs_it() {
    let raw = "[{\"description\": \"Roof\nrepairs\", \"amount\": 10,}]";

    let parsed = try_parse_json(raw, BracketMode::ArrayOnly);

    assert_eq!(
        parsed,
        Some(json!([{ "description": "Roofrepairs", "amount": 10 }]))
    );
}

#[test]
fn given_no_brackets_when_parsing_then_returns_none() {
    assert_eq!(
        try_parse_json("I could not find any charges.", BracketMode::ArrayOnly),
        None
    );
}

#[test]
fn given_closing_before_opening_when_parsing_then_returns_none() {
    assert_eq!(try_parse_json("] nothing [", BracketMode::ArrayOnly), None);
}

#[test]
fn given_broken_json_when_parsing_then_returns_none() {
    assert_eq!(
        try_parse_json("[{\"amount\": }]", BracketMode::ArrayOnly),
        None
    );
}

#[test]
fn given_object_payload_when_parsing_array_only_then_returns_none() {
    assert_eq!(
        try_parse_json("{\"amount\": 5}", BracketMode::ArrayOnly),
        None
    );
}

#[test]
fn given_object_payload_when_parsing_array_or_object_then_returns_object() {
    let raw = "Result: {\"suggestions\": [{\"suggestion\": \"x\"}]} done";

    let parsed = try_parse_json(raw, BracketMode::ArrayOrObject);

    assert_eq!(parsed, Some(json!({ "suggestions": [{ "suggestion": "x" }] })));
}

#[test]
fn given_valid_json_when_reparsing_its_serialization_then_result_is_identical() {
    let value = json!([{ "category": "Legal", "amount": 1.5, "questionable": true }]);
    let serialized = value.to_string();

    let once = try_parse_json(&serialized, BracketMode::ArrayOnly).unwrap();
    let twice = try_parse_json(&once.to_string(), BracketMode::ArrayOnly).unwrap();

    assert_eq!(once, value);
    assert_eq!(twice, once);
}

#[test]
fn given_trailing_comma_with_whitespace_when_stripping_then_keeps_whitespace() {
    assert_eq!(
        strip_trailing_commas("[{\"a\": 1, \"b\": 2,} ,]"),
        "[{\"a\": 1, \"b\": 2} ]"
    );
}

#[test]
fn given_commas_inside_values_when_stripping_then_leaves_them() {
    let raw = "[{\"description\": \"pool, gym\"}]";
    assert_eq!(strip_trailing_commas(raw), raw);
}

#[test]
fn given_carriage_returns_when_stripping_newlines_then_removes_both() {
    assert_eq!(strip_newlines("a\r\nb\nc"), "abc");
}

#[test]
fn given_wrapping_object_when_flattening_then_yields_inner_array() {
    let elements = into_elements(json!({ "suggestions": [{ "a": 1 }, { "a": 2 }] }));

    assert_eq!(elements, vec![json!({ "a": 1 }), json!({ "a": 2 })]);
}

#[test]
fn given_plain_object_when_flattening_then_yields_single_element() {
    let elements = into_elements(json!({ "suggestion": "x" }));

    assert_eq!(elements, vec![json!({ "suggestion": "x" })]);
}

#[test]
fn given_several_array_fields_when_flattening_then_prefers_known_wrapper_key() {
    let elements = into_elements(json!({
        "assumptions": ["prices from 2024"],
        "suggestions": [{ "suggestion": "Audit legal fees" }]
    }));

    assert_eq!(elements, vec![json!({ "suggestion": "Audit legal fees" })]);
}

#[test]
fn given_unknown_array_fields_when_flattening_then_picks_array_of_objects() {
    let elements = into_elements(json!({
        "notes": ["a", "b", "c"],
        "results": [{ "category": "Legal Fees" }]
    }));

    assert_eq!(elements, vec![json!({ "category": "Legal Fees" })]);
}

mod properties {
    use condo_advocate::application::services::{BracketMode, try_parse_json};
    use proptest::prelude::*;
    use serde_json::{Value, json};

    fn charge_array() -> impl Strategy<Value = Value> {
        prop::collection::vec(("\\PC{0,20}", 0i64..1_000_000, any::<bool>()), 0..8).prop_map(
            |items| {
                Value::Array(
                    items
                        .into_iter()
                        .map(|(category, amount, questionable)| {
                            json!({ "category": category, "amount": amount, "questionable": questionable })
                        })
                        .collect(),
                )
            },
        )
    }

    proptest! {
        #[test]
        fn given_any_array_wrapped_in_prose_when_parsing_then_returns_it(
            value in charge_array(),
            prefix in "[a-zA-Z :]{0,20}",
            suffix in "[a-zA-Z .]{0,20}",
        ) {
            let raw = format!("{prefix}{value}{suffix}");

            let parsed = try_parse_json(&raw, BracketMode::ArrayOnly);

            prop_assert_eq!(parsed.as_ref(), Some(&value));
            let reparsed = try_parse_json(&value.to_string(), BracketMode::ArrayOnly);
            prop_assert_eq!(reparsed, parsed);
        }
    }
}
