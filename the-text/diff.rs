//! Positional character diff.
//!
//! The two strings are aligned by char index only. There is no
//! insert/delete realignment, so an insertion near the start of a string
//! shows up as a cascade of [`DiffKind::Modified`] entries rather than a
//! single [`DiffKind::Added`] one. The comparison is a single linear pass.

use serde::{
  Deserialize,
  Serialize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
  /// Both strings have a char at this index and they differ.
  Modified,
  /// Only the new string has a char at this index.
  Added,
  /// Only the original string has a char at this index.
  Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
  /// The new char for `Modified`/`Added`, the original char for `Removed`.
  pub content: char,
  pub index:   usize,
  #[serde(rename = "type")]
  pub kind:    DiffKind,
}

/// Compares `new` against `org` index by index. Entries are returned in
/// ascending `index` order.
///
/// ```
/// use the_text::{diff, DiffEntry, DiffKind};
///
/// assert_eq!(diff("abc", "abx"), vec![DiffEntry {
///   content: 'c',
///   index:   2,
///   kind:    DiffKind::Modified,
/// }]);
/// ```
pub fn diff(new: &str, org: &str) -> Vec<DiffEntry> {
  let mut new_chars = new.chars();
  let mut org_chars = org.chars();
  let mut entries = Vec::new();
  let mut index = 0;

  loop {
    let entry = match (new_chars.next(), org_chars.next()) {
      (Some(a), Some(b)) if a == b => None,
      (Some(a), Some(_)) => Some((a, DiffKind::Modified)),
      (Some(a), None) => Some((a, DiffKind::Added)),
      (None, Some(b)) => Some((b, DiffKind::Removed)),
      (None, None) => break,
    };
    if let Some((content, kind)) = entry {
      entries.push(DiffEntry {
        content,
        index,
        kind,
      });
    }
    index += 1;
  }

  tracing::trace!(
    entries = entries.len(),
    compared = index,
    "positional diff"
  );
  entries
}
