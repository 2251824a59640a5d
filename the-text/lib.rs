use smartstring::{LazyCompact, SmartString};

pub mod case;
pub mod diff;
pub mod error;
pub mod indent;
pub mod line;
pub mod pad;
pub mod trim;

pub type Tendril = SmartString<LazyCompact>;

pub use case::{
  cap_first_letter,
  get_word,
  is_camel_case,
  is_kebab_case,
  is_lower,
  is_lower_case,
  is_pascal_case,
  is_snake_case,
  to_camel_case,
  to_kebab_case,
  to_pascal_case,
  to_snake_case,
};
pub use diff::{
  DiffEntry,
  DiffKind,
  diff,
};
pub use error::{
  Error,
  Result,
};
pub use indent::{
  IndentOptions,
  IndentStyle,
  detect_indention_style,
  get_indent_level,
  indent,
  indent_lines,
  is_tab_space_indention,
  is_white_space_indention,
  normalize_indentation_to_tab,
  normalize_indentation_to_white_space,
  remove_indention,
  trim_leading_indentation,
};
pub use line::{
  DEFAULT_LINE_NUMBER_SEPARATOR,
  LineOrder,
  add_line_numbers,
  count_words_per_line,
  extract_line_range,
  extract_lines,
  get_new_line_index,
  sort_lines,
  visualize_new_line,
  visualize_tab,
  visualize_whitespace,
  wrap_text,
};
pub use pad::{
  DEFAULT_PAD,
  DEFAULT_PAD_COUNT,
  pad_left,
  pad_right,
};
pub use trim::{
  ellipsize,
  trim_and_normalize,
  trim_blank_lines,
  trim_to_sentence,
};
