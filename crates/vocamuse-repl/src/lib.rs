pub mod history;
pub mod screen;
pub mod terminal;
pub mod wizard;

pub use history::InputHistory;
pub use screen::Screen;
pub use terminal::{Outcome, Terminal};
pub use wizard::{Advance, Step, Wizard, WizardMode};

#[cfg(test)]
mod tests;
