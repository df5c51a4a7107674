//! Line-driven interpreter behind the `vocamuse` prompt.
//!
//! The terminal owns the vocabulary, the current screen and the lines shown
//! for it. Callers feed it one submitted line at a time and print whatever
//! `take_unread` hands back.

use std::mem;

use vocamuse_config::terminal::TerminalConfig;
use vocamuse_core::{BlobStore, Criteria, Predicate, VocabError, Vocabulary, render};
use vocamuse_types::{EntryDraft, LegacyLevel, ValidationError, WordType};

use crate::history::InputHistory;
use crate::screen::Screen;
use crate::wizard::{Advance, Wizard, WizardMode};

/// Cancels any wizard step
pub const BACK_COMMAND: &str = ":back";

const CONFIRM_TOKENS: [&str; 2] = ["y", "yes"];

const QUOTE_PROMPT: &str = "Quote:";
const AUTHOR_PROMPT: &str = "Author (optional):";

/// What the caller should do after a submitted line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading input
    Stay,
    /// A confirmation is showing and a screen change is scheduled. Call
    /// `advance` when ready, or the next submit applies it.
    Pending,
    /// The exit option was chosen
    Exit,
}

pub struct Terminal<S: BlobStore> {
    vocab: Vocabulary<S>,
    screen: Screen,
    output: Vec<String>,
    printed: usize,
    input: String,
    history: InputHistory,
    wizard: Option<Wizard>,
    /// Quote text waiting for its author line
    quote_text: Option<String>,
    /// Entry id awaiting a y/n answer
    pending_delete: Option<String>,
    pending_screen: Option<Screen>,
    criteria: Criteria,
}

impl<S: BlobStore> Terminal<S> {
    pub fn new(vocab: Vocabulary<S>, config: &TerminalConfig) -> Self {
        let mut terminal = Self {
            vocab,
            screen: Screen::Main,
            output: Vec::new(),
            printed: 0,
            input: String::new(),
            history: InputHistory::new(config.history_limit),
            wizard: None,
            quote_text: None,
            pending_delete: None,
            pending_screen: None,
            criteria: Criteria::new(),
        };
        terminal.enter(Screen::Main);
        terminal
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Every line shown for the current screen
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Lines added since the last call. A screen change starts a fresh page.
    pub fn take_unread(&mut self) -> Vec<String> {
        let lines = self.output[self.printed..].to_vec();
        self.printed = self.output.len();
        lines
    }

    pub fn vocabulary(&self) -> &Vocabulary<S> {
        &self.vocab
    }

    pub fn vocabulary_mut(&mut self) -> &mut Vocabulary<S> {
        &mut self.vocab
    }

    pub fn wizard(&self) -> Option<&Wizard> {
        self.wizard.as_ref()
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn has_pending_transition(&self) -> bool {
        self.pending_screen.is_some()
    }

    /// Line being composed, filled by history navigation
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Recall the previous submitted line into the input
    pub fn history_previous(&mut self) {
        if self.has_pending_transition() {
            return;
        }
        if let Some(line) = self.history.previous() {
            self.input = line.to_string();
        }
    }

    /// Recall the next submitted line, clearing the input past the newest
    pub fn history_next(&mut self) {
        if self.has_pending_transition() {
            return;
        }
        let browsing = self.history.is_browsing();
        match self.history.next() {
            Some(line) => self.input = line.to_string(),
            None if browsing => self.input.clear(),
            None => {}
        }
    }

    /// Submit whatever is in the input buffer
    pub fn submit_input(&mut self) -> Outcome {
        let line = mem::take(&mut self.input);
        self.submit(&line)
    }

    /// Handle one line on the current screen
    pub fn submit(&mut self, line: &str) -> Outcome {
        self.advance();
        self.history.push(line);
        self.input.clear();

        tracing::debug!("[{}] input: {:?}", self.screen, line);
        match self.screen {
            Screen::Main => self.on_main(line.trim()),
            Screen::AddWord | Screen::EditWord => self.on_wizard(line),
            Screen::AddQuote => self.on_add_quote(line.trim()),
            Screen::ViewWords => self.on_view_words(line.trim()),
            Screen::ViewQuotes => {
                self.enter(Screen::Main);
                Outcome::Stay
            }
        }
    }

    /// Apply a scheduled screen change. Returns whether there was one.
    pub fn advance(&mut self) -> bool {
        match self.pending_screen.take() {
            Some(screen) => {
                self.enter(screen);
                true
            }
            None => false,
        }
    }

    fn enter(&mut self, screen: Screen) {
        tracing::debug!("Screen {} -> {}", self.screen, screen);
        self.screen = screen;
        self.output.clear();
        self.printed = 0;

        let lines = match screen {
            Screen::Main => {
                let mut lines = render::main_menu();
                lines.push("Choose an option:".to_string());
                lines
            }
            Screen::AddWord | Screen::EditWord => self.wizard_page(),
            Screen::AddQuote => vec![
                "=== Add quote ===".to_string(),
                format!("(type {BACK_COMMAND} to cancel)"),
                QUOTE_PROMPT.to_string(),
            ],
            Screen::ViewWords => self.words_page(),
            Screen::ViewQuotes => render::quote_list(self.vocab.quotes()),
        };
        self.output.extend(lines);
    }

    fn wizard_page(&self) -> Vec<String> {
        let Some(wizard) = &self.wizard else {
            return Vec::new();
        };
        let title = match wizard.mode() {
            WizardMode::Create => "=== Add word ===".to_string(),
            WizardMode::Edit { .. } => format!("=== Edit '{}' ===", wizard.draft().word),
        };
        vec![
            title,
            format!("(type {BACK_COMMAND} to cancel)"),
            wizard.prompt(),
        ]
    }

    fn words_page(&self) -> Vec<String> {
        let shown = self.vocab.select(&self.criteria);
        let mut lines = render::word_list(&shown, self.vocab.entries().len(), &self.criteria);
        lines.extend(render::words_help());
        lines
    }

    fn schedule(&mut self, screen: Screen) -> Outcome {
        tracing::debug!("Scheduled transition to {}", screen);
        self.pending_screen = Some(screen);
        Outcome::Pending
    }

    fn error(&mut self, error: impl std::fmt::Display) {
        self.output.push(format!("Error: {error}"));
    }

    fn on_main(&mut self, input: &str) -> Outcome {
        match input.to_lowercase().as_str() {
            "" => {}
            "1" | "add" => {
                self.wizard = Some(Wizard::create());
                self.enter(Screen::AddWord);
            }
            "2" | "words" => {
                self.criteria.clear();
                self.enter(Screen::ViewWords);
            }
            "3" | "quote" => {
                self.quote_text = None;
                self.enter(Screen::AddQuote);
            }
            "4" | "quotes" => self.enter(Screen::ViewQuotes),
            "5" | "exit" => {
                self.output.push("Goodbye! Keep collecting words.".to_string());
                return Outcome::Exit;
            }
            _ => self
                .output
                .push(format!("Error: Unknown option '{input}'. Choose 1-5.")),
        }
        Outcome::Stay
    }

    fn on_wizard(&mut self, line: &str) -> Outcome {
        let back_to = match self.screen {
            Screen::EditWord => Screen::ViewWords,
            _ => Screen::Main,
        };

        if line.trim() == BACK_COMMAND {
            self.wizard = None;
            self.enter(back_to);
            return Outcome::Stay;
        }

        let Some(wizard) = self.wizard.as_mut() else {
            self.enter(back_to);
            return Outcome::Stay;
        };

        match wizard.accept(line) {
            Advance::Next(_) => {
                let prompt = wizard.prompt();
                self.output.push(prompt);
                Outcome::Stay
            }
            Advance::Rejected(e) => {
                let prompt = wizard.prompt();
                self.error(e);
                self.output.push(prompt);
                Outcome::Stay
            }
            Advance::Complete(draft) => {
                let mode = wizard.mode().clone();
                let prompt = wizard.prompt();
                if !self.commit_entry(mode, draft) {
                    // wizard stays on the last step with every answer intact
                    self.output.push(prompt);
                    return Outcome::Stay;
                }
                self.wizard = None;
                self.schedule(back_to)
            }
        }
    }

    /// Returns whether the entry was accepted
    fn commit_entry(&mut self, mode: WizardMode, draft: EntryDraft) -> bool {
        let (result, verb) = match &mode {
            WizardMode::Create => (self.vocab.add_entry(draft), "added"),
            WizardMode::Edit { id } => (self.vocab.update_entry(id, draft), "updated"),
        };

        match result {
            Ok(applied) => {
                self.output
                    .push(format!("Word '{}' {verb}.", applied.value.word));
                self.output.extend(applied.storage_warning());
                true
            }
            Err(e) => {
                self.error(e);
                false
            }
        }
    }

    fn on_add_quote(&mut self, input: &str) -> Outcome {
        if input == BACK_COMMAND {
            self.quote_text = None;
            self.enter(Screen::Main);
            return Outcome::Stay;
        }

        let Some(text) = self.quote_text.take() else {
            if input.is_empty() {
                self.error(ValidationError::EmptyQuote);
                self.output.push(QUOTE_PROMPT.to_string());
            } else {
                self.quote_text = Some(input.to_string());
                self.output.push(AUTHOR_PROMPT.to_string());
            }
            return Outcome::Stay;
        };

        let author = Some(input).filter(|a| !a.is_empty());
        match self.vocab.add_quote(&text, author) {
            Ok(applied) => {
                self.output.push("Quote saved.".to_string());
                self.output.extend(applied.storage_warning());
            }
            Err(e) => self.error(e),
        }
        self.schedule(Screen::Main)
    }

    fn on_view_words(&mut self, input: &str) -> Outcome {
        if let Some(id) = self.pending_delete.take() {
            self.confirm_delete(&id, input);
            return Outcome::Stay;
        }

        let (command, param) = split_command(input);
        match command.to_lowercase().as_str() {
            "" => {}
            "f" | "favorite" => {
                if let Some(word) = self.require(command, "word", param) {
                    self.toggle_favorite(word);
                }
            }
            "d" | "delete" => {
                if let Some(word) = self.require(command, "word", param) {
                    self.request_delete(word);
                }
            }
            "e" | "edit" => {
                if let Some(word) = self.require(command, "word", param) {
                    self.start_edit(word);
                }
            }
            "t" | "type" => {
                if let Some(raw) = self.require(command, "type", param) {
                    match raw.parse::<WordType>() {
                        Ok(word_type) => self.apply_filter(Predicate::Type(word_type)),
                        Err(e) => self.error(e),
                    }
                }
            }
            "s" | "field" => {
                if let Some(text) = self.require(command, "text", param) {
                    self.apply_filter(Predicate::SemanticField(text.to_string()));
                }
            }
            "l" | "level" => {
                if let Some(raw) = self.require(command, "level", param) {
                    match raw.parse::<LegacyLevel>() {
                        Ok(level) => self.apply_filter(Predicate::Level(level)),
                        Err(e) => self.error(e),
                    }
                }
            }
            "starred" => {
                let active = self.criteria.toggle_favorites();
                self.enter(Screen::ViewWords);
                let state = if active { "on" } else { "off" };
                self.output.push(format!("Favorites-only filter {state}."));
            }
            "c" | "clear" => {
                self.criteria.clear();
                self.enter(Screen::ViewWords);
            }
            "h" | "help" => self.enter(Screen::ViewWords),
            "b" | "back" => self.enter(Screen::Main),
            _ => self.output.push(format!(
                "Error: Unknown command '{command}'. Type 'help' to see the commands."
            )),
        }
        Outcome::Stay
    }

    fn require<'a>(
        &mut self,
        command: &str,
        what: &str,
        param: Option<&'a str>,
    ) -> Option<&'a str> {
        if param.is_none() {
            self.output
                .push(format!("Error: Missing parameter: '{command}' needs a {what}."));
        }
        param
    }

    fn apply_filter(&mut self, predicate: Predicate) {
        self.criteria.set(predicate);
        self.enter(Screen::ViewWords);
    }

    fn toggle_favorite(&mut self, word: &str) {
        match self.vocab.toggle_favorite_by_word(word) {
            Ok(applied) => {
                let entry = &applied.value;
                let state = if entry.favorite {
                    "marked as favorite"
                } else {
                    "removed from favorites"
                };
                let message = format!("'{}' {state}.", entry.word);

                self.enter(Screen::ViewWords);
                self.output.push(message);
                self.output.extend(applied.storage_warning());
            }
            Err(e) => self.error(e),
        }
    }

    fn request_delete(&mut self, word: &str) {
        let Some(entry) = self.vocab.find_by_word(word) else {
            self.error(not_found(word));
            return;
        };
        let prompt = format!("Delete '{}'? (y/n)", entry.word);
        self.pending_delete = Some(entry.id.clone());
        self.output.push(prompt);
    }

    fn confirm_delete(&mut self, id: &str, answer: &str) {
        if !CONFIRM_TOKENS.contains(&answer.to_lowercase().as_str()) {
            self.output.push("Deletion cancelled.".to_string());
            return;
        }

        match self.vocab.delete_entry(id) {
            Ok(applied) => {
                let message = format!("Word '{}' deleted.", applied.value.word);
                self.enter(Screen::ViewWords);
                self.output.push(message);
                self.output.extend(applied.storage_warning());
            }
            Err(e) => self.error(e),
        }
    }

    fn start_edit(&mut self, word: &str) {
        let Some(entry) = self.vocab.find_by_word(word) else {
            self.error(not_found(word));
            return;
        };
        self.wizard = Some(Wizard::edit(entry));
        self.enter(Screen::EditWord);
    }
}

fn not_found(word: &str) -> VocabError {
    VocabError::NotFound(format!("word '{word}'"))
}

/// Split `"favorite el perro"` into `("favorite", Some("el perro"))`
fn split_command(input: &str) -> (&str, Option<&str>) {
    match input.split_once(char::is_whitespace) {
        Some((command, rest)) => {
            let rest = rest.trim();
            (command, (!rest.is_empty()).then_some(rest))
        }
        None => (input, None),
    }
}
