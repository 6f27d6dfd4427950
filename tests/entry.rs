use error_kind::entry::{
    dict, field, hint, redacted, restricted_field, user_scope, validation, Dict, Entry, EntrySet,
    Field, ReverseTrace, StackTrace, Visibility, REDACTION_PLACEHOLDER,
};
use serde_json::json;

fn public_json(set: &EntrySet) -> serde_json::Value {
    serde_json::Value::Object(set.public_values())
}

#[test]
fn field_latest_wins() {
    let mut entry = field("x", 1);
    entry.insert(field("x", 2));

    assert_eq!(entry.public_value(), Some(json!(2)));
}

#[test]
fn field_override_can_change_visibility() {
    let mut entry = field("token", "abc");
    entry.insert(restricted_field("token", "abc"));

    assert_eq!(entry.visibility(), Visibility::Restrict);
    assert_eq!(entry.public_value(), None);
}

#[test]
fn stack_trace_first_wins() {
    let first = StackTrace::capture();
    let mut entry = Entry::from(first.clone());
    entry.insert(StackTrace::capture().into());

    match entry {
        Entry::StackTrace(kept) => assert_eq!(kept, first),
        other => panic!("unexpected entry {other:?}"),
    }
}

#[test]
fn reverse_trace_appends_deepest_first() {
    let mut entry = Entry::from(ReverseTrace::from_hops(["[db.rs:10] db::query"]));
    entry.insert(ReverseTrace::from_hops(["[svc.rs:20] svc::load"]).into());
    entry.insert(ReverseTrace::from_hops(["[api.rs:30] api::handle"]).into());

    assert_eq!(
        entry.log_value(),
        json!(["[db.rs:10] db::query", "[svc.rs:20] svc::load", "[api.rs:30] api::handle"])
    );
}

#[test]
fn dict_union_is_recursive() {
    let mut entry = dict("request", [field("id", "r-1"), dict("client", [field("ip", "10.0.0.1")])]);
    entry.insert(dict(
        "request",
        [field("id", "r-2"), field("path", "/users"), dict("client", [field("agent", "curl")])],
    ));

    assert_eq!(
        entry.public_value(),
        Some(json!({
            "id": "r-2",
            "client": { "ip": "10.0.0.1", "agent": "curl" },
            "path": "/users",
        }))
    );
}

#[test]
fn dict_merge_keeps_existing_visibility() {
    let mut entry: Entry = Dict::new("audit", [field("actor", "ada")]).restricted().into();
    entry.insert(dict("audit", [field("action", "delete")]));

    assert_eq!(entry.visibility(), Visibility::Restrict);
    assert_eq!(entry.log_value(), json!({ "actor": "ada", "action": "delete" }));
}

#[test]
fn restricted_dict_merged_into_public_dict_stays_hidden() {
    let mut entry = user_scope([field("id", 1)]);
    let incoming = Dict::new(
        "user",
        [field("session_secret", "s3cr3t"), dict("device", [field("ip", "10.0.0.1")])],
    );
    entry.insert(incoming.restricted().into());

    assert_eq!(entry.visibility(), Visibility::Public);
    assert_eq!(entry.public_value(), Some(json!({ "id": 1 })));
    assert_eq!(
        entry.log_value(),
        json!({ "id": 1, "session_secret": "s3cr3t", "device": { "ip": "10.0.0.1" } })
    );
}

#[test]
fn restricted_dict_hides_overlapping_public_children() {
    let mut entry = user_scope([field("id", 1), dict("device", [field("os", "linux")])]);
    entry.insert(
        Dict::new("user", [field("id", 2), dict("device", [field("ip", "10.0.0.1")])])
            .restricted()
            .into(),
    );

    assert_eq!(entry.public_value(), Some(json!({ "device": { "os": "linux" } })));
}

#[test]
fn into_restricted_keeps_value() {
    let entry = field("k", 1).into_restricted();

    assert_eq!(entry.visibility(), Visibility::Restrict);
    assert_eq!(entry.log_value(), json!(1));
    assert!(!entry.is_received());
}

#[test]
#[should_panic(expected = "trying to insert unmatching entry")]
fn mismatched_variants_panic() {
    let mut entry = field("user", "ada");
    entry.insert(user_scope([field("id", 1)]));
}

#[test]
#[should_panic(expected = "trying to insert unmatching entry")]
fn mismatched_nested_variants_panic() {
    let mut set: EntrySet = [dict("a", [field("b", 1)])].into_iter().collect();
    set.add(dict("a", [dict("b", [])]));
}

#[test]
fn entry_set_keeps_one_entry_per_key_in_order() {
    let mut set = EntrySet::new();
    set.add(field("b", 1));
    set.add(field("a", 1));
    set.add(field("b", 2));

    let keys: Vec<_> = set.iter().map(Entry::key).collect();
    assert_eq!(keys, ["b", "a"]);
    assert_eq!(set.len(), 2);
    assert!(set.contains_key("a"));
    assert_eq!(set.get("b").and_then(Entry::public_value), Some(json!(2)));
}

#[test]
fn restricted_entries_stay_out_of_public_view() {
    let set: EntrySet = [
        field("visible", true),
        restricted_field("secret", "s3cr3t"),
        Entry::from(StackTrace::capture()),
        ReverseTrace::from_hops(["[a.rs:1] a"]).into(),
    ]
    .into_iter()
    .collect();

    assert_eq!(public_json(&set), json!({ "visible": true }));

    let logged = set.log_values();
    assert_eq!(logged["secret"], "s3cr3t");
    assert!(logged.contains_key("stacktrace"));
    assert_eq!(logged["reverse_trace"], json!(["[a.rs:1] a"]));
}

#[test]
fn visibility_is_enforced_top_down() {
    let hidden: Entry = Dict::new("internal", [field("public_child", 1)]).restricted().into();
    let mixed = dict("mixed", [field("shown", 1), restricted_field("hidden", 2)]);
    let empty = dict("empty", [restricted_field("only", 3)]);
    let set: EntrySet = [hidden, mixed, empty].into_iter().collect();

    assert_eq!(public_json(&set), json!({ "mixed": { "shown": 1 } }));
    assert_eq!(set.log_values()["internal"], json!({ "public_child": 1 }));
}

#[test]
fn hint_and_validation_helpers() {
    let set: EntrySet = [
        hint("use a company address"),
        validation([("email", "must be a company address"), ("age", "must be positive")]),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        public_json(&set),
        json!({
            "hint": "use a company address",
            "validation": {
                "email": "must be a company address",
                "age": "must be positive",
            },
        })
    );
}

#[test]
fn redacted_shows_value_ends() {
    assert_eq!(redacted("k", "abcdefghijkl").public_value(), Some(json!("ab****kl")));
    assert_eq!(redacted("k", "abcdef").public_value(), Some(json!("a****f")));
    assert_eq!(redacted("k", "abcd").public_value(), Some(json!(REDACTION_PLACEHOLDER)));
    assert_eq!(redacted("k", "").public_value(), Some(json!(REDACTION_PLACEHOLDER)));
}

#[test]
fn redacted_counts_characters_not_bytes() {
    assert_eq!(redacted("name", "éééééé").public_value(), Some(json!("é****é")));
}

#[test]
fn field_accessors() {
    let field = Field::new("attempt", 3).restricted();

    assert_eq!(field.key(), "attempt");
    assert_eq!(field.value(), &json!(3));
    assert_eq!(field.visibility(), Visibility::Restrict);

    let entry = Entry::from(field);
    assert_eq!(entry.variant(), "field");
    assert_eq!(entry.log_pair(), ("attempt", json!(3)));
}

#[test]
fn visibility_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Visibility::Public).unwrap(), r#""PUBLIC""#);
    assert_eq!(serde_json::from_str::<Visibility>(r#""RESTRICT""#).unwrap(), Visibility::Restrict);
    assert_eq!(Visibility::default(), Visibility::Public);
}
