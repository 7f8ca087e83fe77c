//! End-to-end dispatch through the binary's modules.

use serde_json::json;
use tempfile::tempdir;

use oai_server::config::NotesConfig;
use oai_server::registry::ToolRegistry;
use oai_server::resources::{self, ResourceRegistry};
use oai_server::tools::{Adder, NoteAppender};

fn notes_config(notes_dir: &std::path::Path, fallback_dir: &std::path::Path) -> NotesConfig {
    NotesConfig {
        notes_dir: notes_dir.to_string_lossy().to_string(),
        fallback_dir: fallback_dir.to_string_lossy().to_string(),
        note_file: "oai.md".to_string(),
    }
}

#[tokio::test]
async fn add_note_through_registry_writes_both_files() {
    let notes = tempdir().unwrap();
    let fallback = tempdir().unwrap();

    let mut tools = ToolRegistry::new();
    tools.register(Box::new(NoteAppender::new(&notes_config(
        notes.path(),
        fallback.path(),
    ))));

    let result = tools
        .dispatch("add_note", json!({ "message": "test" }))
        .await
        .unwrap();
    assert_eq!(result, json!("Added note: test"));

    let header = std::fs::read_to_string(fallback.path().join("oai.md")).unwrap();
    assert_eq!(header, "# OAI\n");
    let body = std::fs::read_to_string(notes.path().join("oai.md")).unwrap();
    assert_eq!(body, "- test\n");
}

#[tokio::test]
async fn repeated_dispatch_appends_in_order() {
    let notes = tempdir().unwrap();
    let fallback = tempdir().unwrap();

    let mut tools = ToolRegistry::new();
    tools.register(Box::new(NoteAppender::new(&notes_config(
        notes.path(),
        fallback.path(),
    ))));

    for message in ["first", "second", "third"] {
        tools
            .dispatch("add_note", json!({ "message": message }))
            .await
            .unwrap();
    }

    let body = std::fs::read_to_string(notes.path().join("oai.md")).unwrap();
    assert_eq!(body, "- first\n- second\n- third\n");
}

#[tokio::test]
async fn registry_lists_tools_and_resources() {
    let notes = tempdir().unwrap();
    let fallback = tempdir().unwrap();

    let mut tools = ToolRegistry::new();
    tools.register(Box::new(NoteAppender::new(&notes_config(
        notes.path(),
        fallback.path(),
    ))));
    tools.register(Box::new(Adder));

    let names: Vec<String> = tools.list().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["add", "add_note"]);

    let mut res = ResourceRegistry::new();
    resources::register_defaults(&mut res).unwrap();
    assert_eq!(res.read("greeting://integration").unwrap(), "Hello, integration!");
}
