use std::fmt;

/// Named states of the terminal interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Main,
    AddWord,
    AddQuote,
    ViewWords,
    ViewQuotes,
    EditWord,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Main => "main",
            Screen::AddWord => "add-word",
            Screen::AddQuote => "add-quote",
            Screen::ViewWords => "view-words",
            Screen::ViewQuotes => "view-quotes",
            Screen::EditWord => "edit-word",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
