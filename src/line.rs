//! Line model and classification for anchor-based config scanning.
//!
//! A config file is split into [`ConfigLine`]s that keep their original
//! terminator, so rendering the lines back yields the input byte for byte.

/// Line terminator as found in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    /// Final line of a file without a trailing newline.
    None,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::None => "",
        }
    }
}

/// One line of config text. Never mutated once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLine {
    pub text: String,
    pub ending: LineEnding,
}

impl ConfigLine {
    #[must_use]
    pub fn new(text: impl Into<String>, ending: LineEnding) -> Self {
        Self {
            text: text.into(),
            ending,
        }
    }

    /// Split source text into lines, keeping every byte.
    #[must_use]
    pub fn parse_all(source: &str) -> Vec<Self> {
        source
            .split_inclusive('\n')
            .map(|chunk| {
                if let Some(text) = chunk.strip_suffix("\r\n") {
                    Self::new(text, LineEnding::CrLf)
                } else if let Some(text) = chunk.strip_suffix('\n') {
                    Self::new(text, LineEnding::Lf)
                } else {
                    Self::new(chunk, LineEnding::None)
                }
            })
            .collect()
    }

    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Number of leading space or tab characters.
    #[must_use]
    pub fn indent(&self) -> usize {
        self.text
            .chars()
            .take_while(|c| *c == ' ' || *c == '\t')
            .count()
    }
}

/// Render lines back into text.
#[must_use]
pub fn render_lines(lines: &[ConfigLine]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.text.len() + 2).sum());
    for line in lines {
        out.push_str(&line.text);
        out.push_str(line.ending.as_str());
    }
    out
}

/// Newline convention of a document: the first terminator seen, `\n` otherwise.
#[must_use]
pub fn document_newline(lines: &[ConfigLine]) -> LineEnding {
    lines
        .iter()
        .map(|l| l.ending)
        .find(|e| *e != LineEnding::None)
        .unwrap_or_default()
}

/// Decision-relevant view of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    pub trimmed: &'a str,
    pub indent: usize,
    /// Blank, or starting with whitespace: the generic "still inside the
    /// previous block" signal, since the format has no block terminators.
    pub blank_or_indented: bool,
}

impl LineClass<'_> {
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.trimmed.is_empty()
    }
}

#[must_use]
pub fn classify(line: &ConfigLine) -> LineClass<'_> {
    let trimmed = line.trimmed();
    let starts_indented = line.text.starts_with([' ', '\t']);
    LineClass {
        trimmed,
        indent: line.indent(),
        blank_or_indented: trimmed.is_empty() || starts_indented,
    }
}

/// Drop a trailing `# comment`. A `#` in the first column empties the line.
#[must_use]
pub fn strip_trailing_comment(text: &str) -> &str {
    match text.find('#') {
        Some(0) => "",
        Some(pos) => text[..pos].trim_end(),
        None => text,
    }
}

/// Split `key: value` on the first colon, trimming both sides.
#[must_use]
pub fn split_key_value(text: &str) -> Option<(&str, &str)> {
    let (key, value) = text.split_once(':')?;
    Some((key.trim(), value.trim()))
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
