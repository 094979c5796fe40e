//! Behaviour of repeated renders over one contract.

use goku_core::{MethodVisibility, StructContract};
use goku_gen::{GenError, GenOptions, GeneratorView, Generator, GoFormatter, TemplateRenderer};
use goku_parser::SourceUnit;
use rstest::rstest;

fn store() -> StructContract {
    let mut unit = SourceUnit::new();
    unit.ingest(include_str!("fixtures/store.go"))
        .expect("fixture should parse");
    unit.extract("Store").expect("extraction should succeed")
}

fn interface_lines(text: &str) -> Vec<String> {
    let start = text
        .find("interface {\n")
        .expect("interface declaration present");
    text[start..]
        .lines()
        .skip(1)
        .take_while(|line| *line != "}")
        .map(|line| line.trim().to_string())
        .collect()
}

#[rstest]
#[case(GenOptions::new())]
#[case(GenOptions::new().with_mock("StoreMock"))]
#[case(GenOptions::new().with_mock("StoreMock").with_private(true).with_package("mocks"))]
fn rendering_is_idempotent(#[case] options: GenOptions) {
    let c = store();
    let generator = Generator::new();
    let first = generator
        .render_to_string(&c, "StoreInterface", &options)
        .expect("first render");
    let second = generator
        .render_to_string(&c, "StoreInterface", &options)
        .expect("second render");
    assert_eq!(first, second);
}

#[test]
fn include_private_only_adds_methods() {
    let c = store();
    let generator = Generator::new();
    let public = interface_lines(
        &generator
            .render_to_string(&c, "StoreInterface", &GenOptions::new())
            .expect("public render"),
    );
    let all = interface_lines(
        &generator
            .render_to_string(&c, "StoreInterface", &GenOptions::new().with_private(true))
            .expect("private render"),
    );

    assert!(all.len() > public.len());
    assert_eq!(&all[..public.len()], public.as_slice());
    for line in &all[public.len()..] {
        let first = line.chars().next().expect("non-empty line");
        assert!(first.is_lowercase(), "unexpected public line {line}");
    }
}

#[test]
fn default_render_excludes_private_methods() {
    let c = store();
    let text = Generator::new()
        .render_to_string(&c, "StoreInterface", &GenOptions::new())
        .expect("render");
    for line in interface_lines(&text) {
        let name: String = line.chars().take_while(|c| c.is_alphanumeric()).collect();
        assert_eq!(MethodVisibility::of(&name), MethodVisibility::Public);
    }
    assert!(!text.contains("lock"));
    assert!(!text.contains("\"sync\""));
}

#[test]
fn private_methods_bring_their_imports() {
    let c = store();
    let text = Generator::new()
        .render_to_string(
            &c,
            "StoreInterface",
            &GenOptions::new().with_mock("StoreMock").with_private(true),
        )
        .expect("render");
    assert!(text.contains("\t\"sync\"\n"));
    assert!(text.contains("\tlock() *sync.Mutex\n"));
    assert!(text.contains("\tlockFn func() *sync.Mutex\n"));
    assert!(text.contains("return mockImplementation.lockFn()"));
}

#[test]
fn import_reached_under_two_names_follows_the_rendered_name() {
    let mut unit = SourceUnit::new();
    unit.ingest("package x\n\nimport \"time\"\n\ntype X struct{}\n\nfunc (x X) a(d time.Duration) {}\n")
        .expect("first file");
    unit.ingest("package x\n\nimport tm \"time\"\n\nfunc (x X) B(d tm.Duration) {}\n")
        .expect("second file");
    let c = unit.extract("X").expect("extraction should succeed");
    let generator = Generator::new();

    let public = generator
        .render_to_string(&c, "I", &GenOptions::new())
        .expect("public render");
    assert!(public.contains("import (\n\ttm \"time\"\n)\n"));
    assert!(public.contains("\tB(d tm.Duration)\n"));

    let all = generator
        .render_to_string(&c, "I", &GenOptions::new().with_private(true))
        .expect("private render");
    assert!(all.contains("import (\n\t\"time\"\n\ttm \"time\"\n)\n"));
}

#[test]
fn without_mock_only_the_interface_is_emitted() {
    let c = store();
    let text = Generator::new()
        .render_to_string(&c, "StoreInterface", &GenOptions::new())
        .expect("render");
    assert!(text.contains("type StoreInterface interface {"));
    assert!(!text.contains("mockImplementation"));
    assert!(!text.contains("struct {"));
}

/// Emits text that is not Go.
struct Broken;

impl TemplateRenderer for Broken {
    fn render(&self, _name: &str, view: &GeneratorView) -> Result<String, GenError> {
        Ok(format!("package {}\n\ntype {} interface {{\n", view.package_name, view.name))
    }
}

#[test]
fn formatting_failure_leaves_contract_reusable() {
    let c = store();
    let err = Generator::with_collaborators(Broken, GoFormatter)
        .render_to_string(&c, "StoreInterface", &GenOptions::new())
        .expect_err("malformed output");
    assert!(matches!(err, GenError::Formatting { .. }));

    Generator::new()
        .render_to_string(&c, "StoreInterface", &GenOptions::new())
        .expect("contract still renders");
}

#[test]
fn failed_render_writes_nothing() {
    let c = store();
    let mut buf = Vec::new();
    let result = Generator::with_collaborators(Broken, GoFormatter).render(
        &mut buf,
        &c,
        "StoreInterface",
        &GenOptions::new(),
    );
    assert!(result.is_err());
    assert!(buf.is_empty());
}
