use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("indent count must be a non-negative integer, got {count}")]
  InvalidIndentCount { count: isize },
}
