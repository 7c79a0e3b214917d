//! Config upgrade for newer server releases.
//!
//! Unlike the anchor profiles this pass is indentation-aware: it needs to know
//! where the `journal:` block ends so it can drop the `enabled` entry that
//! newer servers reject, and it may append a `setParameter:` block.

use crate::directive::Action;
use crate::engine::emit;
use crate::line::{
    ConfigLine, LineEnding, document_newline, render_lines, split_key_value,
    strip_trailing_comment,
};

const JOURNAL_KEY: &str = "journal";
const JOURNAL_ENABLED_KEY: &str = "enabled";
const SET_PARAMETER_KEY: &str = "setParameter";
const TLS_SYSTEM_CA_KEY: &str = "tlsUseSystemCA";

/// State of `setParameter.tlsUseSystemCA` after the upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsSystemCa {
    /// The key was missing and has been added as `true`.
    Added,
    /// The key was already present and not `false`.
    Present,
    /// The key is explicitly `false`; left as is.
    Denied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeResult {
    pub lines: Vec<ConfigLine>,
    pub journal_entries_removed: usize,
    pub journal_header_removed: bool,
    pub tls_system_ca: TlsSystemCa,
}

impl UpgradeResult {
    #[must_use]
    pub fn text(&self) -> String {
        render_lines(&self.lines)
    }

    #[must_use]
    pub fn changed(&self) -> bool {
        self.journal_entries_removed > 0 || self.tls_system_ca == TlsSystemCa::Added
    }
}

fn key_of(line: &ConfigLine) -> Option<&str> {
    split_key_value(strip_trailing_comment(&line.text)).map(|(k, _)| k)
}

/// `key:` with nothing after the colon, i.e. the header of a nested block.
fn is_block_header(line: &ConfigLine, key: &str) -> bool {
    split_key_value(strip_trailing_comment(&line.text)) == Some((key, ""))
}

fn is_meaningful(line: &ConfigLine) -> bool {
    !strip_trailing_comment(&line.text).trim().is_empty()
}

/// Upgrade `lines`, using `indent` for any lines added.
#[must_use]
pub fn upgrade(lines: &[ConfigLine], indent: &str) -> UpgradeResult {
    let (mut out, journal_entries_removed, journal_header_removed) = clean_journal(lines);
    let tls_system_ca = ensure_tls_system_ca(&mut out, indent);

    UpgradeResult {
        lines: out,
        journal_entries_removed,
        journal_header_removed,
        tls_system_ca,
    }
}

#[must_use]
pub fn upgrade_str(source: &str, indent: &str) -> UpgradeResult {
    upgrade(&ConfigLine::parse_all(source), indent)
}

/// End (exclusive) of the block whose header sits at `header`. Blank lines
/// do not end a block, but trailing blank lines are not part of it.
fn block_end(lines: &[ConfigLine], header: usize) -> usize {
    let header_indent = lines[header].indent();
    let mut end = header + 1;
    let mut last_child = header + 1;
    while end < lines.len() {
        let line = &lines[end];
        if line.trimmed().is_empty() {
            end += 1;
            continue;
        }
        if line.indent() <= header_indent {
            break;
        }
        end += 1;
        last_child = end;
    }
    last_child
}

fn clean_journal(lines: &[ConfigLine]) -> (Vec<ConfigLine>, usize, bool) {
    let mut out = Vec::with_capacity(lines.len());
    let mut removed = 0;
    let mut header_removed = false;
    let mut i = 0;

    while i < lines.len() {
        let line = &lines[i];
        if !is_block_header(line, JOURNAL_KEY) {
            out.push(line.clone());
            i += 1;
            continue;
        }

        let end = block_end(lines, i);
        let children = &lines[i + 1..end];
        let kept: Vec<&ConfigLine> = children
            .iter()
            .filter(|c| key_of(c) != Some(JOURNAL_ENABLED_KEY))
            .collect();
        removed += children.len() - kept.len();

        if kept.iter().any(|c| is_meaningful(c)) {
            out.push(line.clone());
            out.extend(kept.into_iter().cloned());
        } else {
            tracing::debug!(line = i + 1, "journal block left empty, removing header");
            header_removed = true;
        }
        i = end;
    }

    (out, removed, header_removed)
}

fn ensure_tls_system_ca(lines: &mut Vec<ConfigLine>, indent: &str) -> TlsSystemCa {
    let existing = lines.iter().find_map(|line| {
        let (key, value) = split_key_value(strip_trailing_comment(&line.text))?;
        (key == TLS_SYSTEM_CA_KEY).then(|| value.to_string())
    });

    if let Some(value) = existing {
        if value == "false" {
            tracing::warn!(
                "{TLS_SYSTEM_CA_KEY} is set to false; the server may fail to verify certificates"
            );
            return TlsSystemCa::Denied;
        }
        return TlsSystemCa::Present;
    }

    let newline = document_newline(lines);
    let entry = format!("{indent}{TLS_SYSTEM_CA_KEY}: true");

    if let Some(pos) = lines
        .iter()
        .position(|l| l.indent() == 0 && is_block_header(l, SET_PARAMETER_KEY))
    {
        let rest = lines.split_off(pos + 1);
        if let Some(header) = lines.pop() {
            emit(&Action::InsertAfter(vec![entry]), &header, newline, lines);
        }
        lines.extend(rest);
    } else {
        if let Some(last) = lines.last_mut()
            && last.ending == LineEnding::None
        {
            last.ending = newline;
        }
        lines.push(ConfigLine::new(format!("{SET_PARAMETER_KEY}:"), newline));
        lines.push(ConfigLine::new(entry, newline));
    }

    TlsSystemCa::Added
}

#[cfg(test)]
#[path = "upgrade_tests.rs"]
mod tests;
