//! Serde roundtrip tests for the contract model.

use goku_core::{ImportRef, MethodInfo, ReceiverKind, StructContract, TypeInfo};
use pretty_assertions::assert_eq;

fn sample_contract() -> StructContract {
    StructContract {
        package_name: "store".to_string(),
        imports: vec![
            ImportRef::new("", "context"),
            ImportRef::new("pb", "example.com/gen/store/v1"),
        ],
        qualified_imports: vec![
            ImportRef::new("", "context"),
            ImportRef::new("pb", "example.com/gen/store/v1"),
        ],
        struct_name: "Cache".to_string(),
        struct_generic_params: vec![
            TypeInfo::named("K", "comparable"),
            TypeInfo::named("V", "any"),
        ],
        generic_qualifiers: Vec::new(),
        methods: vec![MethodInfo {
            name: "Get".to_string(),
            receiver: ReceiverKind::Pointer,
            generic_params: vec!["K".to_string(), "V".to_string()],
            arguments: vec![
                TypeInfo::named("ctx", "context.Context"),
                TypeInfo::named("key", "K"),
            ],
            returns: vec!["*pb.Entry".to_string(), "error".to_string()],
            qualifiers: vec!["context".to_string(), "pb".to_string()],
        }],
    }
}

#[test]
fn contract_survives_json_roundtrip() {
    let contract = sample_contract();
    let json = serde_json::to_string_pretty(&contract).expect("serialize contract");
    let recovered: StructContract = serde_json::from_str(&json).expect("deserialize contract");
    assert_eq!(recovered, contract);
}

#[test]
fn receiver_kind_is_snake_case_in_json() {
    let value = serde_json::to_value(sample_contract()).expect("serialize contract");
    assert_eq!(value["methods"][0]["receiver"], "pointer");
    assert_eq!(value["struct_generic_params"][0]["name"], "K");
}

#[test]
fn missing_collections_default_to_empty() {
    let json = r#"{"package_name":"x","struct_name":"X"}"#;
    let contract: StructContract = serde_json::from_str(json).expect("deserialize minimal");
    assert!(contract.imports.is_empty());
    assert!(contract.qualified_imports.is_empty());
    assert!(contract.methods.is_empty());
    assert!(!contract.is_generic());
}

#[test]
fn import_lookup_uses_qualifier() {
    let contract = sample_contract();
    assert_eq!(
        contract.import_for("pb").map(|i| i.path.as_str()),
        Some("example.com/gen/store/v1")
    );
    assert_eq!(
        contract.import_for("context").map(|i| i.path.as_str()),
        Some("context")
    );
    assert!(contract.import_for("v1").is_none());
    assert!(contract.method("Get").is_some());
}

#[test]
fn import_lookup_sees_every_qualifier_of_a_path() {
    let mut contract = sample_contract();
    contract.imports = vec![ImportRef::new("", "time")];
    contract.qualified_imports = vec![ImportRef::new("", "time"), ImportRef::new("tm", "time")];
    assert_eq!(contract.import_for("tm"), Some(&ImportRef::new("tm", "time")));
    assert_eq!(contract.import_for("time"), Some(&ImportRef::new("", "time")));
}
