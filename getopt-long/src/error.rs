/// Errors raised while configuring a [`Getopt`](crate::Getopt).
///
/// Scanning itself never fails.  Malformed command lines are reported
/// through [`Opt::Unknown`](crate::Opt::Unknown) and friends together with
/// a [`Diagnostic`](crate::Diagnostic).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An argument mode code outside of `0..=2` was given.
    #[error("invalid argument mode {0} (expected 0, 1 or 2)")]
    InvalidHasArg(i32),
    /// A long option was declared with an empty name.
    #[error("long option at index {0} has an empty name")]
    EmptyLongName(usize),
}
