use gram_config::Config;
use serde_json::{Value, json};
use tempfile::TempDir;

use crate::cli::Command;
use crate::commands::handle_command;
use crate::state::AppState;

fn state_in(dir: &TempDir) -> AppState {
    AppState::new(Config::default(), Some(dir.path()))
}

fn run(state: &AppState, command: Command, input: &str) -> String {
    let mut out = Vec::new();
    handle_command(state, command, input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn translate(text: &str) -> Command {
    Command::Translate {
        text: text.to_string(),
        from: None,
        to: None,
    }
}

#[test]
fn test_translate_uses_configured_pair() {
    let dir = TempDir::new().unwrap();
    let state = state_in(&dir);

    assert_eq!(run(&state, translate("गाव आणि शाळा"), ""), "Village and School\n");

    let same = Command::Translate {
        text: "गाव".to_string(),
        from: Some("mr".to_string()),
        to: Some("mr".to_string()),
    };
    assert_eq!(run(&state, same, ""), "गाव\n");
}

#[test]
fn test_batch_keeps_line_order() {
    let dir = TempDir::new().unwrap();
    let state = state_in(&dir);

    let out = run(
        &state,
        Command::Batch { from: None, to: None },
        "नमस्कार\nझुळूक\nधन्यवाद\n",
    );
    assert_eq!(out, "Hello\nझुळूक\nThank You\n");
}

#[test]
fn test_learn_persists_across_states() {
    let dir = TempDir::new().unwrap();
    let state = state_in(&dir);

    let learn = Command::Learn {
        source: " झुळूक ".to_string(),
        target: "Breeze".to_string(),
    };
    assert_eq!(run(&state, learn.clone(), ""), "learned: झुळूक -> Breeze\n");
    assert!(run(&state, learn, "").starts_with("not learned"));
    drop(state);

    let restarted = state_in(&dir);
    assert_eq!(run(&restarted, translate("झुळूक"), ""), "Breeze\n");
    assert!(dir.path().join("gram_panchayat_learned_words.json").exists());
}

#[test]
fn test_dump_learned_only() {
    let dir = TempDir::new().unwrap();
    let state = state_in(&dir);
    run(
        &state,
        Command::Learn {
            source: "दवाखाना".to_string(),
            target: "Dispensary".to_string(),
        },
        "",
    );

    let learned: Value =
        serde_json::from_str(&run(&state, Command::Dump { learned: true }, "")).unwrap();
    assert_eq!(learned, json!({ "दवाखाना": "Dispensary" }));

    let all: Value =
        serde_json::from_str(&run(&state, Command::Dump { learned: false }, "")).unwrap();
    assert_eq!(all["दवाखाना"], "Dispensary");
    assert_eq!(all["ग्रामपंचायत"], "Gram Panchayat");
}

#[test]
fn test_request_round_trip() {
    let dir = TempDir::new().unwrap();
    let state = state_in(&dir);

    let body = json!({
        "text": "क्षमस्व",
        "sourceLanguage": "mr",
        "targetLanguage": "en",
    })
    .to_string();
    let response: Value = serde_json::from_str(&run(&state, Command::Request, &body)).unwrap();
    assert_eq!(
        response,
        json!({
            "translatedText": "Sorry",
            "sourceLanguage": "mr",
            "targetLanguage": "en",
        })
    );
}

#[test]
fn test_request_errors_are_objects() {
    let dir = TempDir::new().unwrap();
    let state = state_in(&dir);

    let missing: Value = serde_json::from_str(&run(
        &state,
        Command::Request,
        r#"{ "sourceLanguage": "mr", "targetLanguage": "en" }"#,
    ))
    .unwrap();
    assert_eq!(missing["error"], "Missing required field: text");

    let malformed: Value =
        serde_json::from_str(&run(&state, Command::Request, "not json")).unwrap();
    assert!(
        malformed["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body")
    );
}

#[test]
fn test_disabled_store_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.store.enabled = false;
    let state = AppState::new(config, Some(dir.path()));

    run(
        &state,
        Command::Learn {
            source: "झुळूक".to_string(),
            target: "Breeze".to_string(),
        },
        "",
    );
    assert_eq!(run(&state, translate("झुळूक"), ""), "Breeze\n");
    assert!(!dir.path().join("gram_panchayat_learned_words.json").exists());
}
