use std::fs;

use tempfile::tempdir;
use vocamuse_types::{EntryDraft, LegacyLevel, WordType};

use super::*;
use crate::cli::QuoteCommand;

fn seed(config: &Config) -> Vec<String> {
    let mut vocab = commands::open_vocabulary(config);
    let mut ids = Vec::new();
    for (word, translation, word_type) in [
        ("perro", "dog", WordType::Noun),
        ("ladrar", "to bark", WordType::Verb),
    ] {
        let draft = EntryDraft {
            word: word.to_string(),
            translation: translation.to_string(),
            word_type: Some(word_type),
            semantic_field: "animals".to_string(),
            ..Default::default()
        };
        let applied = vocab.add_entry(draft).unwrap();
        assert!(applied.is_persisted());
        ids.push(applied.value.id);
    }
    ids
}

fn list_all() -> Commands {
    Commands::List {
        word_type: None,
        favorites: false,
        field: None,
        level: None,
    }
}

#[test]
fn test_list_by_type_shows_ids() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    let ids = seed(&config);

    let printed = run(
        &config,
        Commands::List {
            word_type: Some("verb".to_string()),
            favorites: false,
            field: None,
            level: None,
        },
        "",
    )
    .unwrap();

    assert!(printed.contains(&format!("[{}] ladrar (to bark)", ids[1])));
    assert!(!printed.contains("perro"));
    assert!(printed.starts_with("Filters: type = verb (1 of 2)"));
}

fn add(word: &str, word_type: &str, level: Option<&str>) -> Commands {
    Commands::Add {
        word: word.to_string(),
        translation: "cat".to_string(),
        word_type: word_type.to_string(),
        field: "animals".to_string(),
        example: Some("El gato duerme".to_string()),
        level: level.map(String::from),
        favorite: false,
    }
}

fn edit(id: &str) -> Commands {
    Commands::Edit {
        id: id.to_string(),
        word: None,
        translation: None,
        word_type: None,
        field: None,
        example: None,
        clear_example: false,
        level: None,
        favorite: None,
    }
}

#[test]
fn test_add_defaults_to_general_level() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let printed = run(&config, add("gato", "noun", None), "").unwrap();
    let vocab = commands::open_vocabulary(&config);
    let entry = &vocab.entries()[0];
    assert_eq!(printed, format!("Word 'gato' added with id {}.\n", entry.id));
    assert_eq!(entry.word_type, WordType::Noun);
    assert_eq!(entry.legacy_level(), LegacyLevel::General);
    assert_eq!(entry.example.as_deref(), Some("El gato duerme"));

    run(&config, add("gatito", "sustantivo", Some("1")), "").unwrap();
    let vocab = commands::open_vocabulary(&config);
    assert_eq!(vocab.entries()[1].legacy_level(), LegacyLevel::Deep);
}

#[test]
fn test_add_rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let err = run(&config, add("gato", "article", None), "").unwrap_err();
    assert!(err.to_string().starts_with("Invalid word type: 'article'"));
    assert!(run(&config, add("gato", "noun", Some("4")), "").is_err());
    assert!(run(&config, add(" ", "noun", None), "").is_err());
    assert!(commands::open_vocabulary(&config).entries().is_empty());
}

#[test]
fn test_edit_changes_given_fields_and_keeps_id() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    let ids = seed(&config);

    let mut command = edit(&ids[0]);
    if let Commands::Edit { translation, example, level, favorite, .. } = &mut command {
        *translation = Some("hound".to_string());
        *example = Some("El perro ladra".to_string());
        *level = Some("3".to_string());
        *favorite = Some(true);
    }
    let printed = run(&config, command, "").unwrap();
    assert_eq!(printed, "Word 'perro' updated.\n");

    let vocab = commands::open_vocabulary(&config);
    let entry = vocab.get(&ids[0]).unwrap();
    assert_eq!(entry.translation, "hound");
    assert_eq!(entry.semantic_field, "animals");
    assert_eq!(entry.example.as_deref(), Some("El perro ladra"));
    assert_eq!(entry.legacy_level(), LegacyLevel::VerbalBrand);
    assert!(entry.favorite);
    assert_eq!(vocab.entries().len(), 2);
}

#[test]
fn test_edit_clears_example_and_rejects_unknown_id() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    let ids = seed(&config);

    let mut with_example = edit(&ids[1]);
    if let Commands::Edit { example, .. } = &mut with_example {
        *example = Some("Los perros ladran".to_string());
    }
    run(&config, with_example, "").unwrap();
    let vocab = commands::open_vocabulary(&config);
    assert!(vocab.get(&ids[1]).unwrap().example.is_some());

    let mut cleared = edit(&ids[1]);
    if let Commands::Edit { clear_example, .. } = &mut cleared {
        *clear_example = true;
    }
    run(&config, cleared, "").unwrap();
    let vocab = commands::open_vocabulary(&config);
    assert_eq!(vocab.get(&ids[1]).unwrap().example, None);

    let err = run(&config, edit("nope"), "").unwrap_err();
    assert_eq!(err.to_string(), "no entry with id 'nope'");
}

#[test]
fn test_list_rejects_bad_level() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let result = run(
        &config,
        Commands::List {
            word_type: None,
            favorites: false,
            field: None,
            level: Some("9".to_string()),
        },
        "",
    );
    assert!(result.is_err());
}

#[test]
fn test_favorite_by_id_survives_reopen() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    let ids = seed(&config);

    let printed = run(&config, Commands::Favorite { id: ids[0].clone() }, "").unwrap();
    assert_eq!(printed, "'perro' marked as favorite.\n");

    let vocab = commands::open_vocabulary(&config);
    assert!(vocab.get(&ids[0]).unwrap().favorite);
    assert!(!vocab.get(&ids[1]).unwrap().favorite);
}

#[test]
fn test_favorite_unknown_id_fails() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    seed(&config);

    let err = run(&config, Commands::Favorite { id: "nope".to_string() }, "").unwrap_err();
    assert_eq!(err.to_string(), "No entry found for id 'nope'");
}

#[test]
fn test_delete_asks_unless_yes() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    let ids = seed(&config);

    let printed = run(&config, Commands::Delete { id: ids[0].clone(), yes: false }, "n\n").unwrap();
    assert!(printed.ends_with("Deletion cancelled.\n"));
    assert_eq!(commands::open_vocabulary(&config).entries().len(), 2);

    let printed = run(&config, Commands::Delete { id: ids[0].clone(), yes: false }, "y\n").unwrap();
    assert!(printed.starts_with("Delete 'perro'? (y/n)"));
    assert_eq!(commands::open_vocabulary(&config).entries().len(), 1);

    run(&config, Commands::Delete { id: ids[1].clone(), yes: true }, "").unwrap();
    assert!(commands::open_vocabulary(&config).entries().is_empty());
}

#[test]
fn test_export_then_import_replaces_words() {
    let source_dir = tempdir().unwrap();
    let source = config_in(source_dir.path());
    seed(&source);

    let file = source_dir.path().join("words.json");
    run(&source, Commands::Export { file: Some(file.clone()) }, "").unwrap();

    let target_dir = tempdir().unwrap();
    let target = config_in(target_dir.path());
    let printed = run(&target, Commands::Import { file: file.clone() }, "").unwrap();
    assert!(printed.starts_with("Imported 2 entries"));

    assert_eq!(
        commands::open_vocabulary(&target).entries(),
        commands::open_vocabulary(&source).entries()
    );
}

#[test]
fn test_import_single_object_changes_nothing() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    seed(&config);

    let file = dir.path().join("one.json");
    fs::write(
        &file,
        r#"{"id":"1","word":"gato","translation":"cat","type":"noun","semanticField":"animals"}"#,
    )
    .unwrap();

    let err = run(&config, Commands::Import { file }, "").unwrap_err();
    assert!(err.to_string().starts_with("Import rejected"));
    assert_eq!(commands::open_vocabulary(&config).entries().len(), 2);
}

#[test]
fn test_quote_commands() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let add = |text: &str, author: Option<&str>| Commands::Quotes {
        action: QuoteCommand::Add {
            text: text.to_string(),
            author: author.map(String::from),
        },
    };
    run(&config, add("Carpe diem", None), "").unwrap();
    run(&config, add("Veni, vidi, vici", Some("Caesar")), "").unwrap();

    let listed = run(&config, Commands::Quotes { action: QuoteCommand::List }, "").unwrap();
    assert_eq!(listed, "1. \"Carpe diem\"\n2. \"Veni, vidi, vici - Caesar\"\n");

    let delete = |index| Commands::Quotes {
        action: QuoteCommand::Delete { index },
    };
    assert!(run(&config, delete(0), "").is_err());
    assert!(run(&config, delete(3), "").is_err());

    let printed = run(&config, delete(1), "").unwrap();
    assert_eq!(printed, "Deleted \"Carpe diem\".\n");
}

#[test]
fn test_empty_store_lists_nothing() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    assert_eq!(run(&config, list_all(), "").unwrap(), "No words saved yet.\n");
    assert!(!dir.path().join("vocaMuseWords.json").exists());
}
