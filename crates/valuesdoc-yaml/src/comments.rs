//! Head-comment lookup.
//!
//! yaml-rust2's scanner discards comments, so comments are recovered from the
//! source text: the head comment of a node is the run of comment lines
//! directly above the line the node starts on, and only a node that opens
//! its line has one. Lines inside block or multi-line quoted scalars are
//! never comments, even when they start with `#`.

pub(crate) struct CommentIndex<'a> {
    lines: Vec<&'a str>,
    in_scalar: Vec<bool>,
}

impl<'a> CommentIndex<'a> {
    pub(crate) fn new(content: &'a str) -> Self {
        let lines: Vec<&str> = content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        let in_scalar = vec![false; lines.len()];
        Self {
            lines,
            in_scalar,
        }
    }

    /// Mark the body of a literal or folded scalar whose indicator sits on
    /// `header_line` (1-based).
    pub(crate) fn mark_block_scalar(&mut self, header_line: usize) {
        let Some(header) = self.lines.get(header_line.saturating_sub(1)) else {
            return;
        };
        let parent_indent = indentation(header);
        let mut body_indent = None;

        for idx in header_line..self.lines.len() {
            let line = self.lines[idx];
            if line.trim().is_empty() {
                self.in_scalar[idx] = true;
                continue;
            }
            let indent = indentation(line);
            let required = *body_indent.get_or_insert(indent);
            if indent <= parent_indent || indent < required {
                break;
            }
            self.in_scalar[idx] = true;
        }
    }

    /// Mark the continuation lines of a quoted scalar whose opening quote
    /// sits at `line`, `col` (both 1-based).
    pub(crate) fn mark_quoted_scalar(&mut self, line: usize, col: usize, quote: char) {
        let start = line.saturating_sub(1);
        let Some(first) = self.lines.get(start) else {
            return;
        };

        let mut chars = first.chars().skip(col.saturating_sub(1)).peekable();
        if chars.peek() == Some(&quote) {
            chars.next();
        }
        let mut rest: Vec<char> = chars.collect();
        let mut idx = start;

        loop {
            if closes_quote(&rest, quote) {
                return;
            }
            idx += 1;
            let Some(next) = self.lines.get(idx) else {
                return;
            };
            self.in_scalar[idx] = true;
            rest = next.chars().collect();
        }
    }

    /// Whether the node at `line`, `col` is the first token on its line,
    /// ignoring block sequence and explicit key indicators.
    pub(crate) fn opens_line(&self, line: usize, col: usize) -> bool {
        let Some(text) = self.lines.get(line.saturating_sub(1)) else {
            return false;
        };
        let prefix: String = text.chars().take(col.saturating_sub(1)).collect();
        let mut rest = prefix.trim_start();
        while let Some(after) = rest.strip_prefix("- ").or_else(|| rest.strip_prefix("? ")) {
            rest = after.trim_start();
        }
        rest.is_empty()
    }

    /// Comment lines directly above `line` (1-based), indentation removed.
    pub(crate) fn head_comment(&self, line: usize) -> String {
        let mut collected = Vec::new();
        let mut idx = line.saturating_sub(1);

        while idx > 0 {
            idx -= 1;
            if self.in_scalar[idx] {
                break;
            }
            let trimmed = self.lines[idx].trim_start();
            if !trimmed.starts_with('#') {
                break;
            }
            collected.push(trimmed.trim_end());
        }

        collected.reverse();
        collected.join("\n")
    }
}

/// Whether `text` holds the closing quote of a quoted scalar.
fn closes_quote(text: &[char], quote: char) -> bool {
    let mut idx = 0;
    while idx < text.len() {
        match text[idx] {
            '\\' if quote == '"' => idx += 2,
            c if c == quote => {
                // `''` is an escaped quote inside single quotes.
                if quote == '\'' && text.get(idx + 1) == Some(&'\'') {
                    idx += 2;
                } else {
                    return true;
                }
            }
            _ => idx += 1,
        }
    }
    false
}

fn indentation(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}
