//! Directives: ordered trigger/action rules applied during a scan.

use crate::line::LineClass;
use crate::section::{Section, SectionContext};

/// Placeholder substituted by [`Action::Rewrite`].
pub const VALUE_PLACEHOLDER: &str = "{value}";

/// Condition over the current line and section context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Trimmed line starts with the prefix.
    Key(String),
    /// Trimmed line starts with `key` while `section` is active.
    KeyInSection { key: String, section: Section },
    /// Blank or indented line while `section` is active with a pending
    /// insertion. Consume-once: firing clears the pending flag.
    Pending(Section),
    /// Blank line.
    Blank,
}

impl Trigger {
    #[must_use]
    pub fn key(prefix: impl Into<String>) -> Self {
        Self::Key(prefix.into())
    }

    #[must_use]
    pub fn key_in(key: impl Into<String>, section: Section) -> Self {
        Self::KeyInSection {
            key: key.into(),
            section,
        }
    }

    #[must_use]
    pub fn matches(&self, class: &LineClass<'_>, ctx: &SectionContext) -> bool {
        match self {
            Self::Key(prefix) => class.trimmed.starts_with(prefix.as_str()),
            Self::KeyInSection { key, section } => {
                ctx.is_active(*section) && class.trimmed.starts_with(key.as_str())
            }
            Self::Pending(section) => {
                class.blank_or_indented && ctx.is_active(*section) && ctx.is_pending(*section)
            }
            Self::Blank => class.is_blank(),
        }
    }

    /// Section whose pending flag is consumed when this trigger fires.
    #[must_use]
    pub const fn consumes(&self) -> Option<Section> {
        match self {
            Self::Pending(section) => Some(*section),
            _ => None,
        }
    }
}

/// What a firing directive emits in place of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Emit the line unchanged.
    Keep,
    /// Replace the line's text.
    ReplaceLine(String),
    /// Replace the line with `template`, `{value}` bound to `value`.
    Rewrite { template: String, value: String },
    /// Emit new lines, then the anchor line.
    InsertBefore(Vec<String>),
    /// Emit the anchor line, then new lines.
    InsertAfter(Vec<String>),
}

impl Action {
    #[must_use]
    pub fn rewrite(template: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Rewrite {
            template: template.into(),
            value: value.into(),
        }
    }

    /// Lines added on top of the anchor's own slot.
    #[must_use]
    pub fn inserted_count(&self) -> usize {
        match self {
            Self::InsertBefore(lines) | Self::InsertAfter(lines) => lines.len(),
            _ => 0,
        }
    }
}

/// Tracker side effect applied after the action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Effect {
    #[default]
    None,
    /// Schedule a consume-once insertion for the section.
    Arm(Section),
    /// Deactivate all sections.
    ResetSections,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub trigger: Trigger,
    pub action: Action,
    pub effect: Effect,
}

impl Directive {
    #[must_use]
    pub fn new(name: impl Into<String>, trigger: Trigger, action: Action) -> Self {
        Self {
            name: name.into(),
            trigger,
            action,
            effect: Effect::None,
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }
}

/// Ordered directives; the first match for a line wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveSet {
    directives: Vec<Directive>,
}

impl DirectiveSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            directives: Vec::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    #[must_use]
    pub fn first_match(&self, class: &LineClass<'_>, ctx: &SectionContext) -> Option<&Directive> {
        self.directives
            .iter()
            .find(|d| d.trigger.matches(class, ctx))
    }
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
