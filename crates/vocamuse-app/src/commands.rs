//! One-shot subcommands over the file-backed collections.

use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use vocamuse_config::Config;
use vocamuse_core::{Applied, Criteria, EXPORT_FILE_NAME, FileBlobStore, Vocabulary, render};
use vocamuse_types::{EntryDraft, LegacyLevel, WordType};

use crate::cli::{Commands, QuoteCommand};

pub fn open_vocabulary(config: &Config) -> Vocabulary<FileBlobStore> {
    let store = FileBlobStore::new(&config.storage.data_dir);
    Vocabulary::open(store, &config.storage)
}

/// Run a non-interactive command. `input` answers confirmation questions.
pub fn run(
    command: Commands,
    config: &Config,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut vocab = open_vocabulary(config);

    match command {
        Commands::Repl => bail!("the interactive menu is not a one-shot command"),
        Commands::List {
            word_type,
            favorites,
            field,
            level,
        } => {
            let criteria = list_criteria(word_type, favorites, field, level)?;
            let shown = vocab.select(&criteria);
            for line in render::entry_page(&shown, vocab.entries().len(), &criteria) {
                writeln!(out, "{line}")?;
            }
        }
        Commands::Add {
            word,
            translation,
            word_type,
            field,
            example,
            level,
            favorite,
        } => {
            let mut draft = EntryDraft {
                word,
                translation,
                word_type: Some(word_type.parse()?),
                semantic_field: field,
                example,
                favorite,
                ..Default::default()
            };
            if let Some(raw) = level {
                draft.lexicon.set_legacy_level(&raw)?;
            }
            let entry = saved(vocab.add_entry(draft)?, "words")?;
            writeln!(out, "Word '{}' added with id {}.", entry.word, entry.id)?;
        }
        Commands::Edit {
            id,
            word,
            translation,
            word_type,
            field,
            example,
            clear_example,
            level,
            favorite,
        } => {
            let Some(entry) = vocab.get(&id) else {
                bail!("no entry with id '{id}'");
            };
            let mut draft = EntryDraft::from(entry);
            if let Some(word) = word {
                draft.word = word;
            }
            if let Some(translation) = translation {
                draft.translation = translation;
            }
            if let Some(raw) = word_type {
                draft.word_type = Some(raw.parse()?);
            }
            if let Some(field) = field {
                draft.semantic_field = field;
            }
            if clear_example {
                draft.example = None;
            } else if example.is_some() {
                draft.example = example;
            }
            if let Some(raw) = level {
                draft.lexicon.set_legacy_level(&raw)?;
            }
            if let Some(favorite) = favorite {
                draft.favorite = favorite;
            }

            let entry = saved(vocab.update_entry(&id, draft)?, "words")?;
            writeln!(out, "Word '{}' updated.", entry.word)?;
        }
        Commands::Favorite { id } => {
            let applied = vocab.toggle_favorite(&id)?;
            let entry = saved(applied, "words")?;
            let state = if entry.favorite {
                "marked as favorite"
            } else {
                "removed from favorites"
            };
            writeln!(out, "'{}' {state}.", entry.word)?;
        }
        Commands::Delete { id, yes } => {
            let Some(entry) = vocab.get(&id) else {
                bail!("no entry with id '{id}'");
            };
            if !yes && !confirm(&format!("Delete '{}'? (y/n)", entry.word), input, out)? {
                writeln!(out, "Deletion cancelled.")?;
                return Ok(());
            }
            let entry = saved(vocab.delete_entry(&id)?, "words")?;
            writeln!(out, "Word '{}' deleted.", entry.word)?;
        }
        Commands::Import { file } => {
            let payload = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let count = saved(vocab.import_entries(&payload)?, "words")?;
            writeln!(out, "Imported {count} entries from {}.", file.display())?;
        }
        Commands::Export { file } => {
            let path = file.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
            let document = vocab.export_entries()?;
            fs::write(&path, document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(out, "Exported {} entries to {}.", vocab.entries().len(), path.display())?;
        }
        Commands::Quotes { action } => match action {
            QuoteCommand::List => {
                for line in render::numbered_quotes(vocab.quotes()) {
                    writeln!(out, "{line}")?;
                }
            }
            QuoteCommand::Add { text, author } => {
                saved(vocab.add_quote(&text, author.as_deref())?, "quotes")?;
                writeln!(out, "Quote saved.")?;
            }
            QuoteCommand::Delete { index } => {
                if index == 0 {
                    bail!("quote numbers start at 1");
                }
                let quote = saved(vocab.delete_quote(index - 1)?, "quotes")?;
                writeln!(out, "Deleted \"{quote}\".")?;
            }
        },
    }

    Ok(())
}

fn list_criteria(
    word_type: Option<String>,
    favorites: bool,
    field: Option<String>,
    level: Option<String>,
) -> anyhow::Result<Criteria> {
    let mut criteria = Criteria::new();
    if let Some(raw) = word_type {
        criteria = criteria.with_type(raw.parse::<WordType>()?);
    }
    if favorites {
        criteria = criteria.favorites_only();
    }
    if let Some(text) = field {
        criteria = criteria.field_contains(&text);
    }
    if let Some(raw) = level {
        criteria = criteria.with_level(raw.parse::<LegacyLevel>()?);
    }
    Ok(criteria)
}

/// One-shot commands fail when the change could not be written
fn saved<T>(applied: Applied<T>, collection: &str) -> anyhow::Result<T> {
    applied
        .persisted
        .with_context(|| format!("failed to save {collection}"))?;
    Ok(applied.value)
}

fn confirm(question: &str, input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<bool> {
    writeln!(out, "{question}")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer).context("failed to read confirmation")?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
