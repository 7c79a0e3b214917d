//! Single-pass scan-and-rewrite engine.
//!
//! The engine is profile-agnostic: it walks the lines once, advances the
//! section tracker, and applies the first matching directive. It never
//! touches the filesystem and never fails; unknown content passes through.

use indexmap::IndexMap;

use crate::directive::{Action, DirectiveSet, Effect, VALUE_PLACEHOLDER};
use crate::line::{ConfigLine, LineEnding, classify, document_newline, render_lines};
use crate::section::{Section, SectionTracker};

/// Output of one transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    pub lines: Vec<ConfigLine>,
    /// Firing count per directive name, in first-fired order.
    pub fired: IndexMap<String, usize>,
    /// Lines added by insertion actions.
    pub inserted: usize,
    /// Sections whose scheduled insertion never found an anchor.
    pub unfired_pending: Vec<Section>,
}

impl TransformResult {
    #[must_use]
    pub fn text(&self) -> String {
        render_lines(&self.lines)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn fired(&self, name: &str) -> usize {
        self.fired.get(name).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_fired(&self) -> usize {
        self.fired.values().sum()
    }
}

/// Apply `directives` to `lines` in one left-to-right pass.
#[must_use]
pub fn transform(lines: &[ConfigLine], directives: &DirectiveSet) -> TransformResult {
    let newline = document_newline(lines);
    let mut tracker = SectionTracker::new();
    let mut out = Vec::with_capacity(lines.len());
    let mut fired: IndexMap<String, usize> = IndexMap::new();
    let mut inserted = 0;

    for line in lines {
        let class = classify(line);
        tracker.advance(&class);

        let Some(directive) = directives.first_match(&class, tracker.context()) else {
            out.push(line.clone());
            continue;
        };

        tracing::debug!(directive = %directive.name, line = %line.text, "directive fired");
        *fired.entry(directive.name.clone()).or_default() += 1;
        inserted += directive.action.inserted_count();

        emit(&directive.action, line, newline, &mut out);

        if let Some(section) = directive.trigger.consumes() {
            tracker.take_pending(section);
        }
        match directive.effect {
            Effect::None => {}
            Effect::Arm(section) => tracker.arm(section),
            Effect::ResetSections => tracker.reset(),
        }
    }

    let unfired_pending: Vec<_> = tracker.context().unfired_pending().collect();
    for section in &unfired_pending {
        tracing::debug!(%section, "pending insertion found no anchor");
    }

    TransformResult {
        lines: out,
        fired,
        inserted,
        unfired_pending,
    }
}

/// Convenience wrapper over [`transform`] for whole documents.
#[must_use]
pub fn transform_str(source: &str, directives: &DirectiveSet) -> TransformResult {
    transform(&ConfigLine::parse_all(source), directives)
}

/// Append what `action` produces for `line` to `out`.
pub(crate) fn emit(
    action: &Action,
    line: &ConfigLine,
    newline: LineEnding,
    out: &mut Vec<ConfigLine>,
) {
    match action {
        Action::Keep => out.push(line.clone()),
        Action::InsertBefore(new_lines) | Action::InsertAfter(new_lines) if new_lines.is_empty() => {
            out.push(line.clone());
        }
        Action::ReplaceLine(text) => out.push(ConfigLine::new(text.as_str(), line.ending)),
        Action::Rewrite { template, value } => {
            let text = template.replace(VALUE_PLACEHOLDER, value);
            out.push(ConfigLine::new(text, line.ending));
        }
        Action::InsertBefore(new_lines) => {
            out.extend(
                new_lines
                    .iter()
                    .map(|text| ConfigLine::new(text.as_str(), newline)),
            );
            out.push(line.clone());
        }
        Action::InsertAfter(new_lines) => {
            // The anchor may be the unterminated last line.
            let mut anchor = line.clone();
            if anchor.ending == LineEnding::None {
                anchor.ending = newline;
            }
            out.push(anchor);
            let last = new_lines.len().saturating_sub(1);
            out.extend(new_lines.iter().enumerate().map(|(i, text)| {
                let ending = if i == last { line.ending } else { newline };
                ConfigLine::new(text.as_str(), ending)
            }));
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
