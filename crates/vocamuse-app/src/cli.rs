use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use vocamuse_config::log::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "vocamuse")]
#[command(version)]
#[command(about = "Personal vocabulary and quote tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON config file, applied over environment defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the words and quotes files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log output format on stderr
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormatArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Interactive menu (default)
    Repl,

    /// List saved words with their ids
    List {
        /// noun, verb, adjective or adverb
        #[arg(long = "type")]
        word_type: Option<String>,

        /// Only favorites
        #[arg(long)]
        favorites: bool,

        /// Semantic field substring
        #[arg(long)]
        field: Option<String>,

        /// 1 (deep), 2 (general) or 3 (verbal brand)
        #[arg(long)]
        level: Option<String>,
    },

    /// Save a new word
    Add {
        word: String,

        translation: String,

        /// noun, verb, adjective or adverb
        #[arg(long = "type")]
        word_type: String,

        /// Semantic field
        #[arg(long)]
        field: String,

        #[arg(long)]
        example: Option<String>,

        /// 1 (deep), 2 (general) or 3 (verbal brand); defaults to 2
        #[arg(long)]
        level: Option<String>,

        #[arg(long)]
        favorite: bool,
    },

    /// Change the fields of a word, keeping its id
    Edit {
        id: String,

        #[arg(long)]
        word: Option<String>,

        #[arg(long)]
        translation: Option<String>,

        #[arg(long = "type")]
        word_type: Option<String>,

        #[arg(long)]
        field: Option<String>,

        #[arg(long, conflicts_with = "clear_example")]
        example: Option<String>,

        /// Remove the usage example
        #[arg(long)]
        clear_example: bool,

        #[arg(long)]
        level: Option<String>,

        /// true or false
        #[arg(long)]
        favorite: Option<bool>,
    },

    /// Toggle the favorite flag of a word
    Favorite { id: String },

    /// Delete a word
    Delete {
        id: String,

        /// Skip the confirmation question
        #[arg(long, short)]
        yes: bool,
    },

    /// Replace all words with the entries of a JSON file
    Import { file: PathBuf },

    /// Write all words to a JSON file
    Export { file: Option<PathBuf> },

    /// Manage saved quotes
    Quotes {
        #[command(subcommand)]
        action: QuoteCommand,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum QuoteCommand {
    List,

    Add {
        text: String,

        #[arg(long, short)]
        author: Option<String>,
    },

    /// Delete by the number shown in `quotes list`
    Delete { index: usize },
}
