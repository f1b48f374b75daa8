use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Statistic {
  Count(u64),
  Unavailable,
}

impl Display for Statistic {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Count(count) => write!(f, "{count}"),
      Self::Unavailable => write!(f, "N/A"),
    }
  }
}

impl From<Option<String>> for Statistic {
  fn from(value: Option<String>) -> Self {
    value
      .and_then(|value| value.trim().parse::<u64>().ok())
      .map_or(Self::Unavailable, Self::Count)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_counts_sent_as_strings() {
    assert_eq!(
      Statistic::from(Some("1048576".to_string())),
      Statistic::Count(1_048_576)
    );
  }

  #[test]
  fn missing_or_garbled_counts_are_unavailable() {
    assert_eq!(Statistic::from(None), Statistic::Unavailable);
    assert_eq!(
      Statistic::from(Some("hidden".to_string())),
      Statistic::Unavailable
    );
    assert_eq!(Statistic::from(Some("-1".to_string())), Statistic::Unavailable);
  }

  #[test]
  fn displays_unavailable_as_not_applicable() {
    assert_eq!(Statistic::Count(12).to_string(), "12");
    assert_eq!(Statistic::Unavailable.to_string(), "N/A");
  }
}
