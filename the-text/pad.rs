pub const DEFAULT_PAD: &str = " ";
pub const DEFAULT_PAD_COUNT: usize = 1;

/// Prepends `count` repetitions of `pad`. This pads by a repeat count, not
/// to a target width.
pub fn pad_left(text: &str, pad: &str, count: usize) -> String {
  let mut res = String::with_capacity(pad.len() * count + text.len());
  res.push_str(&pad.repeat(count));
  res.push_str(text);
  res
}

/// Appends `count` repetitions of `pad`.
pub fn pad_right(text: &str, pad: &str, count: usize) -> String {
  let mut res = String::with_capacity(text.len() + pad.len() * count);
  res.push_str(text);
  res.push_str(&pad.repeat(count));
  res
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn pad() {
    assert_eq!(pad_left("x", "-", 3), "---x");
    assert_eq!(pad_right("x", "-", 3), "x---");
    assert_eq!(pad_left("x", DEFAULT_PAD, DEFAULT_PAD_COUNT), " x");
    assert_eq!(pad_right("x", DEFAULT_PAD, DEFAULT_PAD_COUNT), "x ");
    assert_eq!(pad_left("x", "ab", 2), "ababx");
    assert_eq!(pad_left("x", "-", 0), "x");
    assert_eq!(pad_right("", "", 5), "");
  }

  quickcheck::quickcheck! {
    fn padded_length(text: String, pad: String, count: u8) -> bool {
      let count = usize::from(count);
      let expected = text.len() + pad.len() * count;
      pad_left(&text, &pad, count).len() == expected
        && pad_right(&text, &pad, count).len() == expected
    }
  }
}
