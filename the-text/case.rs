use the_text_core::chars::{
  char_is_lower,
  char_is_whitespace,
  char_is_word_delimiter,
  char_to_byte_idx,
  trim_whitespace,
};

use crate::Tendril;

/// Returns the word starting at char `position`, ending before the next
/// space, tab, `\n` or `\r` (or at the end of `text`).
///
/// An out-of-range `position`, or one that sits on a delimiter, yields an
/// empty string.
pub fn get_word(text: &str, position: usize) -> &str {
  word_at(text, char_to_byte_idx(text, position))
}

fn word_at(text: &str, byte_idx: usize) -> &str {
  let rest = &text[byte_idx..];
  let end = rest.find(char_is_word_delimiter).unwrap_or(rest.len());
  &rest[..end]
}

/// Upper-cases the first non-whitespace char of `text` and appends
/// everything after the first char of the original string.
///
/// Returns an empty string if `text` is empty or whitespace only. Leading
/// whitespace is not preserved: `" ab"` becomes `"Aab"`.
pub fn cap_first_letter(text: &str) -> String {
  let Some(first) = trim_whitespace(text).chars().next() else {
    return String::new();
  };

  let mut res = String::with_capacity(text.len());
  res.extend(first.to_uppercase());
  res.push_str(&text[char_to_byte_idx(text, 1)..]);
  res
}

#[inline]
pub fn is_lower(ch: char) -> bool {
  char_is_lower(ch)
}

/// True when every char of `text` is [`is_lower`].
pub fn is_lower_case(text: &str) -> bool {
  text.chars().all(char_is_lower)
}

pub fn to_camel_case(text: &str) -> Tendril {
  let mut res = Tendril::new();
  to_camel_case_with(text, &mut res);
  res
}

pub fn to_camel_case_with(text: &str, buf: &mut Tendril) {
  to_capitalized_case_with(text, buf, false);
}

pub fn to_pascal_case(text: &str) -> Tendril {
  let mut res = Tendril::new();
  to_pascal_case_with(text, &mut res);
  res
}

pub fn to_pascal_case_with(text: &str, buf: &mut Tendril) {
  to_capitalized_case_with(text, buf, true);
}

/// Shared scanner for camelCase and PascalCase.
///
/// Walks `text` word by word. Every word is lower-cased; all words but the
/// first (or all of them, with `cap_first_word`) then get their first letter
/// upper-cased.
fn to_capitalized_case_with(text: &str, buf: &mut Tendril, cap_first_word: bool) {
  let mut pos = 0;
  let mut first_word = true;

  while pos < text.len() {
    let word = word_at(text, pos);
    if word.is_empty() {
      // On a delimiter.
      pos += text[pos..].chars().next().map_or(1, char::len_utf8);
      continue;
    }

    let lower = word.to_lowercase();
    if first_word && !cap_first_word {
      buf.push_str(&lower);
    } else {
      buf.push_str(&cap_first_letter(&lower));
    }
    first_word = false;
    pos += word.len();
  }
}

/// Checks the camelCase shape of `text` after trimming.
///
/// The first char must be lower. After that, a char that is not lower may
/// not be directly followed by another char that is not lower, so
/// `"helloWorld"` passes and `"helloWORLD"` does not.
pub fn is_camel_case(text: &str) -> bool {
  if text.is_empty() {
    return false;
  }

  let trimmed = trim_whitespace(text);
  match trimmed.chars().next() {
    Some(first) if !char_is_lower(first) => false,
    Some(first) => no_adjacent_upper(&trimmed[first.len_utf8()..]),
    None => true,
  }
}

/// Checks the PascalCase shape of `text` after trimming: an upper-case
/// first char, no word delimiters, and no two adjacent non-lower chars.
pub fn is_pascal_case(text: &str) -> bool {
  let trimmed = trim_whitespace(text);
  let Some(first) = trimmed.chars().next() else {
    return false;
  };
  let rest = &trimmed[first.len_utf8()..];

  first.is_uppercase()
    && !rest.contains(char_is_word_delimiter)
    && rest.chars().next().is_none_or(char_is_lower)
    && no_adjacent_upper(rest)
}

fn no_adjacent_upper(text: &str) -> bool {
  let mut chars = text.chars().peekable();
  while let Some(ch) = chars.next() {
    if !char_is_lower(ch) && chars.peek().is_some_and(|&next| !char_is_lower(next)) {
      return false;
    }
  }
  true
}

pub fn to_snake_case(text: &str) -> Tendril {
  let mut res = Tendril::new();
  to_snake_case_with(text, &mut res);
  res
}

pub fn to_snake_case_with(text: &str, buf: &mut Tendril) {
  to_separated_case_with(text, buf, '_');
}

pub fn to_kebab_case(text: &str) -> Tendril {
  let mut res = Tendril::new();
  to_kebab_case_with(text, &mut res);
  res
}

pub fn to_kebab_case_with(text: &str, buf: &mut Tendril) {
  to_separated_case_with(text, buf, '-');
}

/// Shared implementation for snake_case and kebab-case: lower-cased
/// whitespace-separated words joined by `sep`.
fn to_separated_case_with(text: &str, buf: &mut Tendril, sep: char) {
  let words = text
    .split(char_is_whitespace)
    .filter(|word| !word.is_empty());
  for (i, word) in words.enumerate() {
    if i > 0 {
      buf.push(sep);
    }
    buf.push_str(&word.to_lowercase());
  }
}

/// Checks `text` (trimmed) for snake_case: it may not start with `_`, and
/// every following char must be [`is_lower`].
///
/// `_` is itself lower, so `"hello_world"` passes. An empty string passes
/// vacuously.
pub fn is_snake_case(text: &str) -> bool {
  let mut chars = trim_whitespace(text).chars();
  match chars.next() {
    Some('_') => false,
    _ => chars.all(char_is_lower),
  }
}

/// Checks `text` (trimmed) for kebab-case: non-empty lower-case words
/// joined by single dashes.
pub fn is_kebab_case(text: &str) -> bool {
  let trimmed = trim_whitespace(text);
  !trimmed.is_empty()
    && trimmed.split('-').all(|word| {
      !word.is_empty()
        && word
          .chars()
          .all(|ch| char_is_lower(ch) && !char_is_word_delimiter(ch) && ch != '_')
    })
}
