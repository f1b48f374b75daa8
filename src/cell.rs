#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Cell<'a> {
  Number(u64),
  Text(&'a str),
}
