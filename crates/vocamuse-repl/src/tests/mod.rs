use vocamuse_config::terminal::TerminalConfig;
use vocamuse_core::{MemoryBlobStore, Vocabulary};

use crate::{Outcome, Terminal};

mod wizard_flow_tests;

const WORDS: &str = "vocaMuseWords";
const QUOTES: &str = "vocaMuseQuotes";

fn terminal() -> Terminal<MemoryBlobStore> {
    terminal_with(MemoryBlobStore::new())
}

fn terminal_with(store: MemoryBlobStore) -> Terminal<MemoryBlobStore> {
    let vocab = Vocabulary::with_keys(store, WORDS, QUOTES);
    Terminal::new(vocab, &TerminalConfig::default())
}

/// Submit each line in order, returning the last outcome
fn submit_all(terminal: &mut Terminal<MemoryBlobStore>, lines: &[&str]) -> Outcome {
    let mut outcome = Outcome::Stay;
    for line in lines {
        outcome = terminal.submit(line);
    }
    outcome
}

/// Run the add-word flow from the main menu and apply the transition
fn add_word(terminal: &mut Terminal<MemoryBlobStore>, answers: [&str; 7]) {
    terminal.submit("1");
    let outcome = submit_all(terminal, &answers);
    assert_eq!(outcome, Outcome::Pending);
    assert!(terminal.advance());
}

fn shows(terminal: &Terminal<MemoryBlobStore>, line: &str) -> bool {
    terminal.output().iter().any(|l| l == line)
}

fn shows_containing(terminal: &Terminal<MemoryBlobStore>, text: &str) -> bool {
    terminal.output().iter().any(|l| l.contains(text))
}
