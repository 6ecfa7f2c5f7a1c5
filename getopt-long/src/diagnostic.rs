/// A warning about a malformed command line.
///
/// The scanner records one of these whenever it returns
/// [`Opt::Unknown`](crate::Opt::Unknown) or
/// [`Opt::MissingArgument`](crate::Opt::MissingArgument).  The `Display`
/// output follows the wording of GNU getopt, minus the program name which
/// is passed to the sink separately.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// A long option prefix matched more than one declared option.
    #[error("option '{option}' is ambiguous")]
    Ambiguous { option: String },
    /// A long option (or long-only option) matched nothing.
    #[error("unrecognized option '{option}'")]
    Unrecognized { option: String },
    /// A short option character that is not in the optstring.
    #[error("{} option -- '{ch}'", invalid_word(.posix))]
    Invalid { ch: char, posix: bool },
    /// An inline `=value` was given to a long option without arguments.
    #[error("option '{option}' doesn't allow an argument")]
    NotAllowed { option: String },
    /// A long option ran out of tokens while looking for its argument.
    #[error("option '{option}' requires an argument")]
    RequiresArgument { option: String },
    /// A short option ran out of tokens while looking for its argument.
    #[error("option requires an argument -- '{ch}'")]
    ShortRequiresArgument { ch: char },
}

fn invalid_word(posix: &bool) -> &'static str {
    if *posix {
        "illegal"
    } else {
        "invalid"
    }
}

/// Receives the program name and every emitted diagnostic.
pub type DiagnosticSink = Box<dyn FnMut(&str, &Diagnostic) + 'static>;

/// The sink used when none was configured.
pub(crate) fn log_diagnostic(prog: &str, diagnostic: &Diagnostic) {
    tracing::warn!(prog = %prog, "{}", diagnostic);
}
