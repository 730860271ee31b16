use std::path::Path;

use tempfile::tempdir;

use page_theme_switch::{CliArgs, Event, SystemSource};

fn read_to_string(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn load_applies_the_system_preference() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("page.html");
    let store = tmp.path().join("prefs.json");

    let args = CliArgs {
        input: None,
        builtin_page: true,
        out: Some(out.clone()),
        store: store.clone(),
        event: Event::Load,
        system: SystemSource::Dark,
    };
    page_theme_switch::run(args).unwrap();

    let html = read_to_string(&out);
    assert!(html.contains(r#"data-theme="dark""#));
    assert!(html.contains(r#"data-bs-theme="dark""#));
    assert!(html.contains(r#"src="/static/img/logo-dark.svg""#));
    assert!(html.contains("starter-container-dark"));

    // Loading never persists anything; only an explicit toggle does.
    assert!(!store.exists());
}

#[test]
fn toggle_persists_and_round_trips() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("input.html");
    let out = tmp.path().join("page.html");
    let store = tmp.path().join("prefs.json");
    std::fs::write(&input, page_theme_switch::sample_page()).unwrap();

    // Unset preference with a light system lands on dark first.
    let args = CliArgs {
        input: Some(input.clone()),
        builtin_page: false,
        out: Some(out.clone()),
        store: store.clone(),
        event: Event::Toggle,
        system: SystemSource::Light,
    };
    page_theme_switch::run(args).unwrap();

    let html = read_to_string(&out);
    assert!(html.contains(r#"data-theme="dark""#));

    let prefs: serde_json::Value = serde_json::from_str(&read_to_string(&store)).unwrap();
    assert_eq!(prefs["theme"], "dark");

    // Toggling the themed page again returns to light and persists it.
    let args = CliArgs {
        input: Some(out.clone()),
        builtin_page: false,
        out: Some(out.clone()),
        store: store.clone(),
        event: Event::Toggle,
        system: SystemSource::Light,
    };
    page_theme_switch::run(args).unwrap();

    let html = read_to_string(&out);
    assert!(html.contains(r#"data-theme="light""#));
    assert!(html.contains(r#"data-bs-theme="auto""#));
    assert!(html.contains(r#"src="/static/img/logo-light.svg""#));
    assert!(html.contains("starter-container-light"));

    let prefs: serde_json::Value = serde_json::from_str(&read_to_string(&store)).unwrap();
    assert_eq!(prefs["theme"], "light");
}

#[test]
fn system_change_defers_to_an_explicit_choice() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("page.html");
    let store = tmp.path().join("prefs.json");
    std::fs::write(&store, r#"{"theme":"light"}"#).unwrap();

    let args = CliArgs {
        input: None,
        builtin_page: true,
        out: Some(out.clone()),
        store,
        event: Event::SystemChange,
        system: SystemSource::Dark,
    };
    page_theme_switch::run(args).unwrap();

    // The stored choice wins: nothing is applied at all.
    let html = read_to_string(&out);
    assert!(!html.contains("data-theme"));
    assert!(!html.contains("data-bs-theme"));
}

#[test]
fn system_change_reapplies_when_no_choice_is_stored() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("page.html");
    let store = tmp.path().join("prefs.json");

    let args = CliArgs {
        input: None,
        builtin_page: true,
        out: Some(out.clone()),
        store: store.clone(),
        event: Event::SystemChange,
        system: SystemSource::Dark,
    };
    page_theme_switch::run(args).unwrap();

    let html = read_to_string(&out);
    assert!(html.contains(r#"data-theme="dark""#));
    assert!(!store.exists());
}

#[test]
fn pages_missing_contract_elements_are_rejected() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("input.html");
    std::fs::write(&input, "<html><body><p>no contract</p></body></html>").unwrap();

    let args = CliArgs {
        input: Some(input),
        builtin_page: false,
        out: None,
        store: tmp.path().join("prefs.json"),
        event: Event::Load,
        system: SystemSource::Light,
    };
    let err = page_theme_switch::run(args).unwrap_err();
    assert!(err.to_string().contains("#theme-toggler"));
}
