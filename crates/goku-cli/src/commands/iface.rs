use anyhow::Context;
use goku_config::{GenerateConfig, GokuConfig};
use goku_gen::{GenOptions, Generator};
use goku_parser::SourceUnit;

use crate::cli::IfaceArgs;
use crate::output;
use crate::scan;

/// Handle `goku iface STRUCT`.
pub fn handle(args: &IfaceArgs, config: &GokuConfig) -> anyhow::Result<()> {
    let text = generate(args, config)?;
    output::write(args.output.as_deref(), &text)
}

/// Scan, extract, then render Go source or the contract as JSON.
pub fn generate(args: &IfaceArgs, config: &GokuConfig) -> anyhow::Result<String> {
    let sources = scan::read_sources(&args.dir, &config.scan)?;
    tracing::debug!(
        dir = %args.dir.display(),
        files = sources.len(),
        "collected go sources"
    );

    let mut unit = SourceUnit::new();
    for source in &sources {
        unit.ingest_named(source.path.display().to_string(), &source.text)
            .with_context(|| format!("failed to ingest {}", source.path.display()))?;
    }

    let contract = unit
        .extract(&args.struct_name)
        .with_context(|| format!("failed to extract struct '{}'", args.struct_name))?;

    if args.json {
        let mut json = serde_json::to_string_pretty(&contract)?;
        json.push('\n');
        return Ok(json);
    }

    let name = args
        .name
        .clone()
        .unwrap_or_else(|| config.generate.interface_name(&args.struct_name));

    Generator::new()
        .render_to_string(&contract, &name, &options(args, &config.generate))
        .with_context(|| format!("failed to generate interface '{name}'"))
}

/// Flags win over configured defaults.
fn options(args: &IfaceArgs, config: &GenerateConfig) -> GenOptions {
    GenOptions::new()
        .with_mock(args.mock.as_deref().unwrap_or(&config.mock_name))
        .with_private(args.private || config.include_private)
        .with_package(args.package.as_deref().unwrap_or(&config.package_override))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    const STORE: &str = "package store\n\nimport \"context\"\n\ntype Store struct{}\n\nfunc (s *Store) Get(ctx context.Context, key string) (string, error) {\n\treturn \"\", nil\n}\n\nfunc (s *Store) flush() {}\n";

    fn args(dir: &Path) -> IfaceArgs {
        IfaceArgs {
            struct_name: "Store".to_string(),
            dir: dir.to_path_buf(),
            mock: None,
            name: None,
            package: None,
            private: false,
            output: None,
            json: false,
        }
    }

    fn package_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("store.go"), STORE).expect("write source");
        dir
    }

    #[test]
    fn generates_interface_with_default_name() {
        let dir = package_dir();
        let text = generate(&args(dir.path()), &GokuConfig::default()).expect("generate");
        assert!(text.starts_with("// Code generated by goku. DO NOT EDIT.\n"));
        assert!(text.contains("type StoreInterface interface {\n\tGet(ctx context.Context, key string) (string, error)\n}\n"));
        assert!(!text.contains("flush"));
    }

    #[test]
    fn flags_override_config() {
        let dir = package_dir();
        let mut config = GokuConfig::default();
        config.generate.mock_name = "ConfiguredMock".to_string();
        config.generate.package_override = "configured".to_string();

        let mut a = args(dir.path());
        a.mock = Some("FlagMock".to_string());
        a.name = Some("Storer".to_string());
        a.private = true;

        let text = generate(&a, &config).expect("generate");
        assert!(text.contains("package configured\n"));
        assert!(text.contains("type Storer interface {"));
        assert!(text.contains("type FlagMock struct {"));
        assert!(text.contains("\tflush()\n"));
        assert!(!text.contains("ConfiguredMock"));
    }

    #[test]
    fn json_output_is_the_contract() {
        let dir = package_dir();
        let mut a = args(dir.path());
        a.json = true;
        let text = generate(&a, &GokuConfig::default()).expect("generate");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["struct_name"], "Store");
        assert_eq!(value["package_name"], "store");
        assert_eq!(value["methods"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["imports"][0]["path"], "context");
    }

    #[test]
    fn empty_directory_reports_missing_source() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = generate(&args(dir.path()), &GokuConfig::default()).expect_err("no sources");
        assert!(format!("{err:#}").contains("no source provided"));
    }

    #[test]
    fn handle_writes_output_file() {
        let dir = package_dir();
        let out = dir.path().join("gen").join("store_iface.go");
        let mut a = args(dir.path());
        a.output = Some(out.clone());

        handle(&a, &GokuConfig::default()).expect("handle");

        let written = fs::read_to_string(&out).expect("output written");
        assert!(written.contains("type StoreInterface interface {"));
    }
}
