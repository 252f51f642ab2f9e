#![allow(non_snake_case)]

use super::*;

fn valid_manifest() -> String {
    r#"
[debug]
version = "0.8.0"

[metadata]
title = "SuperGame"
author = "Jane"
description = "A test game"

[metadata.icons]
ctr = "icons/icon-48.png"
hac = "icons/icon-256.jpg"

[build]
source = "game"
app_version = 2
targets = ["ctr", "hac", "cafe"]
"#
    .to_string()
}

#[test]
fn BuildConfig___parse___accepts_valid_manifest() {
    let config = BuildConfig::parse(&valid_manifest()).unwrap();

    assert_eq!(config.title, "SuperGame");
    assert_eq!(config.author, "Jane");
    assert_eq!(config.description, "A test game");
    assert_eq!(config.app_version, 2);
    assert_eq!(config.source, "game");
    assert_eq!(
        config.targets,
        vec![Platform::Ctr, Platform::Hac, Platform::Cafe]
    );
    assert_eq!(
        config.icons.get(&Platform::Ctr).map(String::as_str),
        Some("icons/icon-48.png")
    );
    assert!(!config.icons.contains_key(&Platform::Cafe));
}

#[test]
fn BuildConfig___parse___preserves_target_order() {
    let text = valid_manifest().replace(
        r#"targets = ["ctr", "hac", "cafe"]"#,
        r#"targets = ["cafe", "ctr"]"#,
    );

    let config = BuildConfig::parse(&text).unwrap();

    assert_eq!(config.targets, vec![Platform::Cafe, Platform::Ctr]);
}

#[test]
fn BuildConfig___parse___malformed_toml___invalid_config_data() {
    let err = BuildConfig::parse("this is [not toml").unwrap_err();

    assert_eq!(err.code(), "INVALID_CONFIG_DATA");
}

#[test]
fn BuildConfig___parse___missing_section___invalid_config_data() {
    let err = BuildConfig::parse("[debug]\nversion = \"0.8.0\"\n").unwrap_err();

    assert_eq!(err.code(), "INVALID_CONFIG_DATA");
}

#[test]
fn BuildConfig___parse___older_schema___outdated_config() {
    let text = valid_manifest().replace("0.8.0", "0.7.2");

    let err = BuildConfig::parse(&text).unwrap_err();

    assert_eq!(err.code(), "OUTDATED_CONFIG");
}

#[test]
fn BuildConfig___parse___newer_schema___version_mismatch() {
    let text = valid_manifest().replace("0.8.0", "0.9.0");

    let err = BuildConfig::parse(&text).unwrap_err();

    assert_eq!(err.code(), "CONFIG_VERSION_MISMATCH");
}

#[test]
fn BuildConfig___parse___garbage_schema___version_mismatch() {
    let text = valid_manifest().replace("0.8.0", "latest");

    let err = BuildConfig::parse(&text).unwrap_err();

    assert_eq!(err.code(), "CONFIG_VERSION_MISMATCH");
}

#[test]
fn BuildConfig___parse___unknown_target___target_not_valid() {
    let text = valid_manifest().replace(
        r#"targets = ["ctr", "hac", "cafe"]"#,
        r#"targets = ["ctr", "wii"]"#,
    );

    let err = BuildConfig::parse(&text).unwrap_err();

    assert_eq!(err.code(), "TARGET_NOT_VALID");
    assert!(err.to_string().contains("wii"));
}

#[test]
fn BuildConfig___parse___app_version_as_string___accepted() {
    let text = valid_manifest().replace("app_version = 2", r#"app_version = "2""#);

    let config = BuildConfig::parse(&text).unwrap();

    assert_eq!(config.app_version, 2);
}

#[test]
fn BuildConfig___parse___empty_icon_path___skipped() {
    let text = valid_manifest().replace(r#"ctr = "icons/icon-48.png""#, r#"ctr = """#);

    let config = BuildConfig::parse(&text).unwrap();

    assert!(!config.icons.contains_key(&Platform::Ctr));
}

#[test]
fn BuildConfig___parse___unknown_icon_key___skipped() {
    let text = valid_manifest().replace(
        r#"ctr = "icons/icon-48.png""#,
        r#"gamecube = "icons/icon.png""#,
    );

    let config = BuildConfig::parse(&text).unwrap();

    assert!(!config.icons.contains_key(&Platform::Ctr));
    assert_eq!(config.icons.len(), 1);
}

#[test]
fn BuildConfig___parse_with___disallowed_pair___platform_disallowed() {
    let options = ValidationOptions {
        disallow: vec![(Platform::Cafe, 2)],
    };

    let err = BuildConfig::parse_with(&valid_manifest(), &options).unwrap_err();

    assert_eq!(err.code(), "PLATFORM_DISALLOWED");
}

#[test]
fn BuildConfig___parse_with___disallow_list_not_matching___accepted() {
    let options = ValidationOptions {
        disallow: vec![(Platform::Cafe, 3)],
    };

    let config = BuildConfig::parse_with(&valid_manifest(), &options).unwrap();

    assert_eq!(config.targets.len(), 3);
}

#[test]
fn BuildConfig___game_archive_name___appends_zip() {
    let config = BuildConfig::parse(&valid_manifest()).unwrap();

    assert_eq!(config.game_archive_name(), "game.zip");
}

#[test]
fn BuildConfig___parse___empty_targets___accepted() {
    let text = valid_manifest().replace(r#"targets = ["ctr", "hac", "cafe"]"#, "targets = []");

    let config = BuildConfig::parse(&text).unwrap();

    assert!(config.targets.is_empty());
}
