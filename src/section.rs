//! Section tracking for the anchor-based scan.
//!
//! Sections are mutually exclusive top-level blocks. There is no indentation
//! counting: any blank or indented line counts as "still inside".

use std::fmt;

use indexmap::IndexMap;

use crate::line::LineClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    SystemLog,
    Security,
    Net,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::SystemLog, Self::Security, Self::Net];

    /// Header prefixes that enter this section.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::SystemLog => &["systemLog:"],
            Self::Security => &["security:", "#security:"],
            Self::Net => &["net:"],
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SystemLog => "systemLog",
            Self::Security => "security",
            Self::Net => "net",
        }
    }

    /// Section whose header keyword starts the trimmed line, if any.
    #[must_use]
    pub fn match_header(trimmed: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.keywords().iter().any(|k| trimmed.starts_with(k)))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionState {
    pub active: bool,
    /// Indentation of the header line that activated the section.
    pub indent: usize,
    /// A consume-once insertion is waiting for its anchor.
    pub pending: bool,
    /// The section lost focus while an insertion was still pending.
    pub expired: bool,
}

/// Per-scan section state. Starts with nothing active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionContext {
    states: IndexMap<Section, SectionState>,
}

impl Default for SectionContext {
    fn default() -> Self {
        Self {
            states: Section::ALL
                .into_iter()
                .map(|s| (s, SectionState::default()))
                .collect(),
        }
    }
}

impl SectionContext {
    #[must_use]
    pub fn state(&self, section: Section) -> SectionState {
        self.states.get(&section).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_active(&self, section: Section) -> bool {
        self.state(section).active
    }

    #[must_use]
    pub fn is_pending(&self, section: Section) -> bool {
        self.state(section).pending
    }

    /// Sections currently active, in declaration order.
    pub fn active_sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.states
            .iter()
            .filter(|(_, st)| st.active)
            .map(|(s, _)| *s)
    }

    /// Sections whose insertion never found an anchor, either still pending
    /// or expired when the section ended.
    pub fn unfired_pending(&self) -> impl Iterator<Item = Section> + '_ {
        self.states
            .iter()
            .filter(|(_, st)| st.pending || st.expired)
            .map(|(s, _)| *s)
    }
}

/// Drives [`SectionContext`] one line at a time.
#[derive(Debug, Default)]
pub struct SectionTracker {
    context: SectionContext,
}

impl SectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn context(&self) -> &SectionContext {
        &self.context
    }

    /// Update the context for the next line.
    ///
    /// Precedence: a header keyword enters its section and leaves all others;
    /// a blank or indented line keeps the current state; anything else ends
    /// every section.
    pub fn advance(&mut self, class: &LineClass<'_>) {
        if let Some(section) = Section::match_header(class.trimmed) {
            self.enter(section, class.indent);
        } else if !class.blank_or_indented {
            self.reset();
        }
    }

    /// Activate `section` and leave every other one.
    pub fn enter(&mut self, section: Section, indent: usize) {
        for (s, st) in &mut self.context.states {
            if *s == section {
                st.active = true;
                st.indent = indent;
            } else {
                Self::leave(*s, st);
            }
        }
    }

    /// Deactivate every section.
    pub fn reset(&mut self) {
        for (s, st) in &mut self.context.states {
            Self::leave(*s, st);
        }
    }

    /// A pending insertion does not follow its section into another block.
    fn leave(section: Section, st: &mut SectionState) {
        if st.active && st.pending {
            tracing::trace!(%section, "pending insertion expired with its section");
            st.pending = false;
            st.expired = true;
        }
        st.active = false;
    }

    pub fn arm(&mut self, section: Section) {
        if let Some(st) = self.context.states.get_mut(&section) {
            st.pending = true;
        }
    }

    /// Clear the pending flag, returning whether it was set.
    pub fn take_pending(&mut self, section: Section) -> bool {
        self.context
            .states
            .get_mut(&section)
            .is_some_and(|st| std::mem::take(&mut st.pending))
    }
}

#[cfg(test)]
#[path = "section_tests.rs"]
mod tests;
