use vocamuse_types::{LexiconLevel, SurfaceSubtype, WordType};

use super::*;
use crate::{Screen, Step};

#[test]
fn test_perro_is_added_and_listed_as_general() {
    let mut terminal = terminal();
    add_word(&mut terminal, ["perro", "dog", "noun", "animals", "", "2", "n"]);
    assert_eq!(terminal.screen(), Screen::Main);

    let entries = terminal.vocabulary().entries();
    assert_eq!(entries.len(), 1);
    let perro = &entries[0];
    assert!(!perro.id.is_empty());
    assert_eq!(perro.word_type, WordType::Noun);
    assert_eq!(perro.lexicon.level(), LexiconLevel::Surface);
    assert_eq!(perro.lexicon.subtype(), Some(SurfaceSubtype::General));
    assert_eq!(perro.example, None);

    terminal.submit("2");
    assert_eq!(terminal.screen(), Screen::ViewWords);
    assert!(shows(&terminal, "perro - dog [noun]"));
    assert!(shows(&terminal, "  Level: 2 - General"));
}

#[test]
fn test_confirmation_visible_before_transition() {
    let mut terminal = terminal();
    terminal.submit("1");
    let outcome = submit_all(&mut terminal, &["gato", "cat", "noun", "animals", "", "", "y"]);

    assert_eq!(outcome, Outcome::Pending);
    assert!(terminal.has_pending_transition());
    assert_eq!(terminal.screen(), Screen::AddWord);
    assert_eq!(terminal.take_unread().last().map(String::as_str), Some("Word 'gato' added."));

    assert!(terminal.advance());
    assert_eq!(terminal.screen(), Screen::Main);
    assert!(!terminal.advance());
    assert!(terminal.vocabulary().entries()[0].favorite);
}

#[test]
fn test_next_submit_applies_pending_transition() {
    let mut terminal = terminal();
    terminal.submit("1");
    submit_all(&mut terminal, &["gato", "cat", "noun", "animals", "", "", "n"]);

    // handled on the main menu once the transition lands
    terminal.submit("2");
    assert!(!terminal.has_pending_transition());
    assert_eq!(terminal.screen(), Screen::ViewWords);
}

#[test]
fn test_wizard_steps_advance_one_at_a_time() {
    let mut terminal = terminal();
    terminal.submit("1");

    let answers = ["correr", "to run", "verb", "movement", "Me gusta correr", "1"];
    for (i, answer) in answers.iter().enumerate() {
        assert_eq!(terminal.wizard().map(|w| w.step()), Some(Step::ALL[i]));
        assert_eq!(terminal.submit(answer), Outcome::Stay);
    }
    assert_eq!(terminal.wizard().map(|w| w.step()), Some(Step::Favorite));
    assert!(shows(&terminal, "Favorite? (y/n)"));
}

#[test]
fn test_invalid_type_reprompts_same_step() {
    let mut terminal = terminal();
    submit_all(&mut terminal, &["1", "perro", "dog"]);
    terminal.take_unread();

    terminal.submit("article");
    assert_eq!(terminal.wizard().map(|w| w.step()), Some(Step::Type));
    let unread = terminal.take_unread();
    assert_eq!(unread.len(), 2);
    assert!(unread[0].starts_with("Error: Invalid word type: 'article'"));
    assert_eq!(unread[1], "Type (noun, verb, adjective, adverb):");
}

#[test]
fn test_invalid_level_reprompts_same_step() {
    let mut terminal = terminal();
    submit_all(&mut terminal, &["1", "perro", "dog", "noun", "animals", ""]);

    terminal.submit("4");
    assert_eq!(terminal.wizard().map(|w| w.step()), Some(Step::Level));
    assert!(shows_containing(&terminal, "Error: Invalid level: '4'"));

    terminal.submit("3");
    assert_eq!(terminal.wizard().map(|w| w.step()), Some(Step::Favorite));
    terminal.submit("no");
    terminal.advance();

    let entry = &terminal.vocabulary().entries()[0];
    assert_eq!(entry.lexicon.subtype(), Some(SurfaceSubtype::VerbalBrand));
}

#[test]
fn test_blank_word_is_rejected() {
    let mut terminal = terminal();
    submit_all(&mut terminal, &["1", "  "]);

    assert_eq!(terminal.wizard().map(|w| w.step()), Some(Step::Word));
    assert!(shows(&terminal, "Error: Missing required field: word"));
}

#[test]
fn test_back_cancels_add_without_commit() {
    let mut terminal = terminal();
    let outcome = submit_all(&mut terminal, &["1", "perro", "dog", ":back"]);

    assert_eq!(outcome, Outcome::Stay);
    assert_eq!(terminal.screen(), Screen::Main);
    assert!(terminal.wizard().is_none());
    assert!(terminal.vocabulary().entries().is_empty());
}

#[test]
fn test_edit_keeps_blank_answers_and_returns_to_words() {
    let mut terminal = terminal();
    add_word(&mut terminal, ["perro", "dog", "noun", "animals", "El perro ladra", "3", "y"]);
    let before = terminal.vocabulary().entries()[0].clone();

    submit_all(&mut terminal, &["2", "e perro"]);
    assert_eq!(terminal.screen(), Screen::EditWord);
    assert!(shows(&terminal, "=== Edit 'perro' ==="));
    assert!(shows(&terminal, "Word [perro]:"));

    let outcome = submit_all(&mut terminal, &["", "hound", "", "", "-", "", ""]);
    assert_eq!(outcome, Outcome::Pending);
    assert!(shows(&terminal, "Word 'perro' updated."));
    terminal.advance();
    assert_eq!(terminal.screen(), Screen::ViewWords);

    let after = &terminal.vocabulary().entries()[0];
    assert_eq!(after.id, before.id);
    assert_eq!(after.translation, "hound");
    assert_eq!(after.example, None);
    assert_eq!(after.lexicon, before.lexicon);
    assert!(after.favorite);
}

#[test]
fn test_back_cancels_edit_to_word_list() {
    let mut terminal = terminal();
    add_word(&mut terminal, ["perro", "dog", "noun", "animals", "", "", "n"]);

    submit_all(&mut terminal, &["2", "edit perro", "gato", ":back"]);
    assert_eq!(terminal.screen(), Screen::ViewWords);
    assert_eq!(terminal.vocabulary().entries()[0].word, "perro");
}

#[test]
fn test_history_recalls_submitted_lines() {
    let mut terminal = terminal();
    submit_all(&mut terminal, &["1", "perro"]);

    terminal.history_previous();
    assert_eq!(terminal.input(), "perro");
    terminal.history_previous();
    assert_eq!(terminal.input(), "1");
    terminal.history_next();
    assert_eq!(terminal.input(), "perro");
    terminal.history_next();
    assert_eq!(terminal.input(), "");

    // recalled input is submitted like a typed line
    terminal.history_previous();
    terminal.submit_input();
    assert_eq!(terminal.wizard().map(|w| w.step()), Some(Step::Type));
    assert_eq!(terminal.wizard().map(|w| w.draft().translation.as_str()), Some("perro"));
}

#[test]
fn test_history_ignored_while_transition_pending() {
    let mut terminal = terminal();
    terminal.submit("1");
    submit_all(&mut terminal, &["gato", "cat", "noun", "animals", "", "", "n"]);
    assert!(terminal.has_pending_transition());

    terminal.history_previous();
    assert_eq!(terminal.input(), "");

    terminal.advance();
    terminal.history_previous();
    assert_eq!(terminal.input(), "n");
}

#[test]
fn test_unknown_main_option() {
    let mut terminal = terminal();
    assert_eq!(terminal.submit("9"), Outcome::Stay);
    assert_eq!(terminal.screen(), Screen::Main);
    assert!(shows(&terminal, "Error: Unknown option '9'. Choose 1-5."));

    assert_eq!(terminal.submit("exit"), Outcome::Exit);
    assert!(shows_containing(&terminal, "Goodbye"));
}

#[test]
fn test_edit_stored_entry_with_empty_field_keeps_answers() {
    let stored =
        r#"[{"id":"1","word":"perro","translation":"dog","type":"noun","semanticField":""}]"#;
    let mut terminal = terminal_with(MemoryBlobStore::new().with_blob(WORDS, stored));

    let outcome = submit_all(&mut terminal, &["2", "e perro", "", "hound", "", ""]);
    assert_eq!(outcome, Outcome::Stay);
    assert_eq!(terminal.wizard().map(|w| w.step()), Some(Step::SemanticField));
    assert!(shows(&terminal, "Error: Missing required field: semantic field"));

    let outcome = submit_all(&mut terminal, &["animals", "", "", ""]);
    assert_eq!(outcome, Outcome::Pending);
    terminal.advance();

    let entry = &terminal.vocabulary().entries()[0];
    assert_eq!(terminal.screen(), Screen::ViewWords);
    assert_eq!(entry.id, "1");
    assert_eq!(entry.translation, "hound");
    assert_eq!(entry.semantic_field, "animals");
}

#[test]
fn test_failed_commit_stays_on_last_step() {
    let mut terminal = terminal();
    add_word(&mut terminal, ["perro", "dog", "noun", "animals", "", "", "n"]);
    submit_all(&mut terminal, &["2", "e perro", "", "hound", "", "", "", ""]);

    // entry vanishes while the wizard is open
    let id = terminal.vocabulary().entries()[0].id.clone();
    terminal.vocabulary_mut().delete_entry(&id).unwrap();

    assert_eq!(terminal.submit("y"), Outcome::Stay);
    assert_eq!(terminal.screen(), Screen::EditWord);
    assert!(!terminal.has_pending_transition());
    assert_eq!(terminal.wizard().map(|w| w.step()), Some(Step::Favorite));
    assert_eq!(terminal.wizard().map(|w| w.draft().translation.as_str()), Some("hound"));
    assert!(shows_containing(&terminal, "Error: No entry found for id"));
}
