use goku_core::{ImportRef, MethodInfo, ReceiverKind, StructContract, TypeInfo};

use super::*;


fn unit_of(sources: &[&str]) -> SourceUnit {
    let mut unit = SourceUnit::new();
    for source in sources {
        unit.ingest(source).expect("source should parse");
    }
    unit
}

fn contract(source: &str, target: &str) -> StructContract {
    extract(&unit_of(&[source]), target).expect("extraction should succeed")
}

fn find_method<'a>(contract: &'a StructContract, name: &str) -> &'a MethodInfo {
    contract
        .method(name)
        .unwrap_or_else(|| panic!("should find method named '{name}'"))
}

fn arg(name: &str, rendered: &str) -> TypeInfo {
    TypeInfo::named(name, rendered)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

// ── Fixture smoke test ─────────────────────────────────────────

#[test]
fn fixture_methods_in_source_order() {
    let c = contract(include_str!("../../../tests/fixtures/target.go"), "Target");
    let names: Vec<&str> = c.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Noop", "OneArg", "Return", "ManyArg", "ArgReturn", "Generic", "Maps", "Complex",
            "Import", "Ellipses", "Render", "reset",
        ]
    );
    assert_eq!(c.package_name, "goku");
    assert_eq!(c.struct_name, "Target");
}

#[test]
fn fixture_imports_in_first_touch_order() {
    let c = contract(include_str!("../../../tests/fixtures/target.go"), "Target");
    assert_eq!(
        c.imports,
        vec![
            ImportRef::new("", "golang.org/x/exp/constraints"),
            ImportRef::new("", "context"),
            ImportRef::new("", "io"),
            ImportRef::new("tmpl", "text/template"),
        ]
    );
}

#[test]
fn other_receivers_are_ignored() {
    let c = contract(include_str!("../../../tests/fixtures/target.go"), "Other");
    assert_eq!(c.methods.len(), 1);
    assert_eq!(find_method(&c, "Noop").receiver, ReceiverKind::Value);
    assert!(c.imports.is_empty());
}
