use std::{
  borrow::Cow,
  fmt,
};

use serde::{
  Deserialize,
  Serialize,
};
use the_text_core::{
  chars::{
    char_is_indent,
    char_is_whitespace,
  },
  line_ending::{
    LINE_SEPARATOR,
    split_lines,
  },
};

use crate::error::{
  Error,
  Result,
};

/// Number of spaces a single indentation char expands to when normalizing.
pub const INDENT_WIDTH: usize = 4;

const INDENT_SPACES: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct IndentOptions {
  /// Indent with tabs instead of spaces.
  pub use_tabs: bool,
}

impl IndentOptions {
  #[inline]
  pub const fn indent_char(&self) -> char {
    if self.use_tabs { '\t' } else { ' ' }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndentStyle {
  WhiteSpace,
  Tab,
  Unknown,
}

impl IndentStyle {
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::WhiteSpace => "white-space",
      Self::Tab => "tab",
      Self::Unknown => "unknown",
    }
  }
}

impl fmt::Display for IndentStyle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// The prefix of `text` made of spaces and tabs.
fn leading_run(text: &str) -> &str {
  let end = text
    .find(|ch: char| !char_is_indent(ch))
    .unwrap_or(text.len());
  &text[..end]
}

/// True if the leading indentation run has no tabs (or there is none).
pub fn is_white_space_indention(text: &str) -> bool {
  !leading_run(text).contains('\t')
}

/// True if the leading indentation run has no spaces (or there is none).
pub fn is_tab_space_indention(text: &str) -> bool {
  !leading_run(text).contains(' ')
}

/// Classifies the leading indentation of `text`.
///
/// Unindented text counts as [`IndentStyle::WhiteSpace`]. A run mixing
/// spaces and tabs is [`IndentStyle::Unknown`].
pub fn detect_indention_style(text: &str) -> IndentStyle {
  let style = if is_white_space_indention(text) {
    IndentStyle::WhiteSpace
  } else if is_tab_space_indention(text) {
    IndentStyle::Tab
  } else {
    IndentStyle::Unknown
  };
  tracing::trace!(%style, "detected indentation style");
  style
}

/// Expands every leading space or tab into [`INDENT_WIDTH`] spaces.
pub fn normalize_indentation_to_white_space(text: &str) -> String {
  let run = leading_run(text);
  let rest = &text[run.len()..];

  let mut res = String::with_capacity(run.len() * INDENT_WIDTH + rest.len());
  for _ in run.chars() {
    res.push_str(INDENT_SPACES);
  }
  res.push_str(rest);
  res
}

/// Collapses each group of [`INDENT_WIDTH`] leading spaces into a tab.
///
/// Existing tabs are kept. Spaces that do not fill a whole group stay as
/// spaces.
pub fn normalize_indentation_to_tab(text: &str) -> String {
  let run = leading_run(text);
  let rest = &text[run.len()..];

  let mut res = String::with_capacity(text.len());
  let mut pending = 0;
  for ch in run.chars() {
    if ch == '\t' {
      res.push_str(&INDENT_SPACES[..pending]);
      res.push('\t');
      pending = 0;
      continue;
    }
    pending += 1;
    if pending == INDENT_WIDTH {
      res.push('\t');
      pending = 0;
    }
  }
  res.push_str(&INDENT_SPACES[..pending]);
  res.push_str(rest);
  res
}

/// Number of leading spaces and tabs.
pub fn get_indent_level(text: &str) -> usize {
  leading_run(text).len()
}

/// Prepends `count` indentation chars to `text`.
///
/// Fails with [`Error::InvalidIndentCount`] when `count` is negative.
pub fn indent(text: &str, count: isize, options: IndentOptions) -> Result<String> {
  let Ok(count) = usize::try_from(count) else {
    tracing::debug!(count, "rejecting negative indent count");
    return Err(Error::InvalidIndentCount { count });
  };

  let mut res = String::with_capacity(count + text.len());
  res.extend(std::iter::repeat_n(options.indent_char(), count));
  res.push_str(text);
  Ok(res)
}

/// Removes leading indentation.
///
/// With a positive `count`, at most `count` leading spaces, tabs or `\r`
/// are removed. Otherwise the entire leading [`char_is_whitespace`] run is
/// stripped, newlines included.
pub fn remove_indention(text: &str, count: Option<usize>) -> &str {
  match count {
    Some(count) if count > 0 => {
      let end: usize = text
        .chars()
        .take(count)
        .take_while(|&ch| char_is_indent(ch) || ch == '\r')
        .map(char::len_utf8)
        .sum();
      &text[end..]
    },
    _ => text.trim_start_matches(char_is_whitespace),
  }
}

/// Strips leading spaces and tabs from every line.
pub fn trim_leading_indentation(text: &str) -> String {
  split_lines(text)
    .map(|line| line.trim_start_matches(char_is_indent))
    .collect::<Vec<_>>()
    .join(LINE_SEPARATOR.as_str())
}

/// Shifts every line by `count` indentation chars.
///
/// A positive count indents non-empty lines; a negative count outdents
/// each line by at most `-count` chars.
pub fn indent_lines(text: &str, count: isize, options: IndentOptions) -> String {
  let amount = count.unsigned_abs();
  let indentation: String = std::iter::repeat_n(options.indent_char(), amount).collect();

  split_lines(text)
    .map(|line| match count {
      0 => Cow::Borrowed(line),
      _ if count < 0 => Cow::Borrowed(remove_indention(line, Some(amount))),
      _ if line.is_empty() => Cow::Borrowed(line),
      _ => Cow::Owned(format!("{indentation}{line}")),
    })
    .collect::<Vec<Cow<'_, str>>>()
    .join(LINE_SEPARATOR.as_str())
}
