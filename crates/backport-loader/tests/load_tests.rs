use backport_chain::{ChainError, ConverterComposer};
use backport_loader::{load_chain, load_steps, LoadError, LoaderConfig};
use backport_test_utils::{label, MappingDir};
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample_dir() -> MappingDir {
    let dir = MappingDir::new();
    dir.write_mapping(
        "1.17",
        "1.18",
        &[
            ("minecraft:deepslate", "minecraft:stone["),
            ("minecraft:candle[lit=true]", "minecraft:torch"),
        ],
    );
    dir.write_mapping("1.16.2", "1.17", &[("minecraft:stone", "minecraft:rock[")]);
    dir.write_json("mapping-1.16to1.16.2.json", &json!({ "items": {} }));
    dir.write_raw("README.md", "not a mapping");
    dir
}

#[test]
fn loads_contiguous_chain() {
    let dir = sample_dir();
    let ordering = load_chain(dir.path(), &LoaderConfig::default()).unwrap();

    let labels: Vec<String> = ordering
        .all_versions_descending()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(labels, vec!["1.18", "1.17", "1.16.2", "1.16"]);

    let identity_steps = ordering.steps().filter(|s| s.is_identity()).count();
    assert_eq!(identity_steps, 1);
}

#[test]
fn composes_across_loaded_steps() {
    let dir = sample_dir();
    let ordering = load_chain(dir.path(), &LoaderConfig::default()).unwrap();
    let composer = ConverterComposer::new(&ordering);

    let converter = composer
        .compose_labels(&label("1.18"), &label("1.16"))
        .unwrap();
    assert_eq!(converter.hops(), 3);
    assert_eq!(
        converter.apply("minecraft:deepslate[axis=y]"),
        "minecraft:rock[axis=y]"
    );
    assert_eq!(converter.apply("minecraft:candle[lit=true]"), "minecraft:torch");
    assert_eq!(converter.apply("minecraft:candle[lit=false]"), "minecraft:candle[lit=false]");
}

#[test]
fn gap_between_files_is_fatal() {
    let dir = MappingDir::new();
    dir.write_mapping("1.17", "1.18", &[]);
    dir.write_mapping("1.15", "1.16", &[]);

    let err = load_chain(dir.path(), &LoaderConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Chain(ChainError::Gap { ref expected, ref found })
            if *expected == label("1.17") && *found == label("1.16")
    ));
}

#[test]
fn empty_directory_is_empty_chain() {
    let dir = MappingDir::new();
    let err = load_chain(dir.path(), &LoaderConfig::default()).unwrap_err();
    assert!(matches!(err, LoadError::Chain(ChainError::Empty)));
}

#[test]
fn bad_file_aborts_load() {
    let dir = sample_dir();
    dir.write_raw("mapping-1.15to1.16.json", "{ not json");

    let err = load_steps(dir.path(), &LoaderConfig::default()).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
}

#[test]
fn sentinel_keys_are_skipped() {
    let dir = MappingDir::new();
    dir.write_mapping(
        "1.17",
        "1.18",
        &[("minecraft:bad[", "minecraft:x"), ("minecraft:good", "minecraft:fine")],
    );

    let steps = load_steps(dir.path(), &LoaderConfig::default()).unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].exact_len(), 1);
    assert_eq!(steps[0].apply("minecraft:bad["), "minecraft:bad[");
}
