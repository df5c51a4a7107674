//! Seven-step entry wizard shared by the add and edit screens.
//!
//! Both flows walk the same step table. Edit mode starts from the entry's
//! current values and treats a blank line as "keep".

use vocamuse_types::{Entry, EntryDraft, ValidationError, WordType};

const YES_TOKENS: [&str; 5] = ["y", "yes", "s", "si", "sí"];
const NO_TOKENS: [&str; 2] = ["n", "no"];

/// Clears the example while editing
const CLEAR_TOKEN: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardMode {
    Create,
    Edit { id: String },
}

impl WizardMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, WizardMode::Edit { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Word,
    Translation,
    Type,
    SemanticField,
    Example,
    Level,
    Favorite,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::Word,
        Step::Translation,
        Step::Type,
        Step::SemanticField,
        Step::Example,
        Step::Level,
        Step::Favorite,
    ];

    /// Position in the flow, 0 to 6
    pub fn index(self) -> usize {
        self as usize
    }

    fn following(self) -> Option<Step> {
        Step::ALL.get(self.index() + 1).copied()
    }

    fn is_required(self) -> bool {
        matches!(
            self,
            Step::Word | Step::Translation | Step::Type | Step::SemanticField
        )
    }

    fn def(self) -> &'static StepDef {
        &STEPS[self.index()]
    }
}

type Setter = fn(&mut EntryDraft, &str, &WizardMode) -> Result<(), ValidationError>;

struct StepDef {
    label: &'static str,
    apply: Setter,
}

static STEPS: [StepDef; 7] = [
    StepDef {
        label: "Word",
        apply: set_word,
    },
    StepDef {
        label: "Translation",
        apply: set_translation,
    },
    StepDef {
        label: "Type (noun, verb, adjective, adverb)",
        apply: set_type,
    },
    StepDef {
        label: "Semantic field",
        apply: set_semantic_field,
    },
    StepDef {
        label: "Example (optional)",
        apply: set_example,
    },
    StepDef {
        label: "Level (1 - Deep, 2 - General, 3 - Verbal Brand)",
        apply: set_level,
    },
    StepDef {
        label: "Favorite? (y/n)",
        apply: set_favorite,
    },
];

fn required(input: &str, field: &'static str) -> Result<String, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(input.to_string())
}

fn set_word(draft: &mut EntryDraft, input: &str, _: &WizardMode) -> Result<(), ValidationError> {
    draft.word = required(input, "word")?;
    Ok(())
}

fn set_translation(
    draft: &mut EntryDraft,
    input: &str,
    _: &WizardMode,
) -> Result<(), ValidationError> {
    draft.translation = required(input, "translation")?;
    Ok(())
}

fn set_type(draft: &mut EntryDraft, input: &str, _: &WizardMode) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::MissingField("type"));
    }
    draft.word_type = Some(input.parse::<WordType>()?);
    Ok(())
}

fn set_semantic_field(
    draft: &mut EntryDraft,
    input: &str,
    _: &WizardMode,
) -> Result<(), ValidationError> {
    draft.semantic_field = required(input, "semantic field")?;
    Ok(())
}

fn set_example(
    draft: &mut EntryDraft,
    input: &str,
    mode: &WizardMode,
) -> Result<(), ValidationError> {
    draft.example = match input {
        "" => None,
        CLEAR_TOKEN if mode.is_edit() => None,
        text => Some(text.to_string()),
    };
    Ok(())
}

fn set_level(draft: &mut EntryDraft, input: &str, _: &WizardMode) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Ok(());
    }
    draft.lexicon.set_legacy_level(input)
}

fn set_favorite(
    draft: &mut EntryDraft,
    input: &str,
    mode: &WizardMode,
) -> Result<(), ValidationError> {
    let token = input.to_lowercase();
    if YES_TOKENS.contains(&token.as_str()) {
        draft.favorite = true;
    } else if NO_TOKENS.contains(&token.as_str()) || !mode.is_edit() {
        draft.favorite = false;
    }
    Ok(())
}

/// Result of feeding one line to the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Accepted, now waiting at this step
    Next(Step),
    /// Not accepted, still at the same step
    Rejected(ValidationError),
    /// Final answer given, draft ready to commit
    Complete(EntryDraft),
}

#[derive(Debug, Clone)]
pub struct Wizard {
    mode: WizardMode,
    step: Step,
    draft: EntryDraft,
}

impl Wizard {
    pub fn create() -> Self {
        Self {
            mode: WizardMode::Create,
            step: Step::Word,
            draft: EntryDraft::default(),
        }
    }

    /// Start an edit seeded with the entry's current values
    pub fn edit(entry: &Entry) -> Self {
        Self {
            mode: WizardMode::Edit {
                id: entry.id.clone(),
            },
            step: Step::Word,
            draft: EntryDraft::from(entry),
        }
    }

    pub fn mode(&self) -> &WizardMode {
        &self.mode
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &EntryDraft {
        &self.draft
    }

    /// Prompt for the current step. Edit mode shows the value a blank line keeps.
    pub fn prompt(&self) -> String {
        let label = self.step.def().label;
        if !self.mode.is_edit() {
            return format!("{label}:");
        }

        let current = self.current_value();
        match self.step {
            Step::Example => format!("{label} [{current}] ('-' clears):"),
            _ => format!("{label} [{current}]:"),
        }
    }

    fn current_value(&self) -> String {
        let draft = &self.draft;
        match self.step {
            Step::Word => draft.word.clone(),
            Step::Translation => draft.translation.clone(),
            Step::Type => draft
                .word_type
                .map(|t| t.to_string())
                .unwrap_or_default(),
            Step::SemanticField => draft.semantic_field.clone(),
            Step::Example => draft.example.clone().unwrap_or_default(),
            Step::Level => draft.lexicon.legacy_level().as_u8().to_string(),
            Step::Favorite => (if draft.favorite { "y" } else { "n" }).to_string(),
        }
    }

    /// Feed one input line. Advances exactly one step on success.
    pub fn accept(&mut self, line: &str) -> Advance {
        let input = line.trim();

        let kept;
        let input = if input.is_empty() && self.mode.is_edit() {
            if !self.step.is_required() {
                return self.forward();
            }
            // a kept value must still be a valid one
            kept = self.current_value();
            kept.as_str()
        } else {
            input
        };

        if let Err(e) = (self.step.def().apply)(&mut self.draft, input, &self.mode) {
            return Advance::Rejected(e);
        }
        self.forward()
    }

    fn forward(&mut self) -> Advance {
        match self.step.following() {
            Some(next) => {
                self.step = next;
                Advance::Next(next)
            }
            None => Advance::Complete(self.draft.clone()),
        }
    }
}
