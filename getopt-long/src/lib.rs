//! This crate implements a command line scanner with the semantics of GNU
//! `getopt_long`.  It classifies one token after another as a short option,
//! a long option or an operand, and it can reorder the command line so that
//! all options come before all operands.
//!
//! The goal is to behave exactly like the C function family people already
//! know: the same abbreviation rules for long options, the same `--`
//! handling, the same ordering modes and the same error classification.
//!
//! # Example
//!
//! Scanning happens via the [`Getopt`] type:
//!
//! ```
//! use getopt_long::{Getopt, HasArg, LongOpt, Opt};
//!
//! let args = ["-v", "input.txt", "--output=out.txt", "-n3"];
//! let mut getopt = Getopt::builder(args)
//!     .prog("demo")
//!     .optstring("vn:")
//!     .long_options(vec![LongOpt::new("output", HasArg::Required).val('o' as i32)])
//!     .build()
//!     .unwrap();
//!
//! let mut verbose = false;
//! let mut output = None;
//! let mut number = None;
//! while let Some(opt) = getopt.next_opt() {
//!     match opt {
//!         Opt::Short('v') => verbose = true,
//!         Opt::Short('n') => number = getopt.optarg().map(str::to_string),
//!         Opt::Long(v) if v == 'o' as i32 => output = getopt.optarg().map(str::to_string),
//!         other => panic!("unexpected {:?}", other),
//!     }
//! }
//!
//! assert!(verbose);
//! assert_eq!(output.as_deref(), Some("out.txt"));
//! assert_eq!(number.as_deref(), Some("3"));
//! assert_eq!(getopt.operands(), ["input.txt"]);
//! ```
//!
//! Here is what's happening:
//!
//! * [`Getopt::builder`] takes the tokens (without the program name) and
//!   collects the configuration.  [`Getopt::new`] and [`Getopt::from_env`]
//!   are shortcuts for the short-option-only case.
//! * [`Getopt::next_opt`] decodes the next option and returns `None` once
//!   the options are exhausted.  The argument of the option, if any, is
//!   available through [`Getopt::optarg`].
//! * After the scan [`Getopt::optind`] points at the first operand and
//!   [`Getopt::operands`] returns all of them.
//!
//! # Optstring
//!
//! The short options are declared with the classic optstring syntax: `c`
//! declares a flag, `c:` an option with a required argument and `c::` an
//! option with an optional argument (which must be attached, as in `-cvalue`).
//! `W;` makes `-W name` an alias for `--name`.
//!
//! The first character selects the [`Ordering`]: `+` stops at the first
//! operand, `-` reports operands in place as [`Opt::Operand`], anything else
//! permutes (unless POSIX compliance is requested, which also stops at the
//! first operand).  After that prefix a `:` makes missing arguments report
//! [`Opt::MissingArgument`] instead of [`Opt::Unknown`].
//!
//! # Long Options
//!
//! Long options are declared with [`LongOpt`].  A long option can be given
//! by any unambiguous prefix of its name, and an exact match always wins.
//! In `long_only` mode a single dash introduces long options too, unless the
//! token is a plain `-c` for a declared short option `c`.
//!
//! # Permutation
//!
//! In the default [`Ordering::Permute`] mode the scanner moves operands
//! behind options in the token vector it owns.  Get the reordered vector back
//! with [`Getopt::args`] or [`Getopt::into_args`].
//!
//! # Errors and Diagnostics
//!
//! Nothing that happens during a scan is fatal.  Unknown options, ambiguous
//! abbreviations and missing arguments are reported as [`Opt::Unknown`] or
//! [`Opt::MissingArgument`], [`Getopt::optopt`] tells which option was at
//! fault and a [`Diagnostic`] is emitted.  By default diagnostics are logged
//! with `tracing`; install your own sink with
//! [`GetoptBuilder::on_diagnostic`] or silence them with
//! [`GetoptBuilder::opterr`].  The scanner keeps going after an error.
use std::fmt;
use std::path::Path;

mod diagnostic;
mod error;
mod long_opt;
mod permute;

pub use self::diagnostic::{Diagnostic, DiagnosticSink};
pub use self::error::Error;
pub use self::long_opt::{Flag, HasArg, LongOpt};
pub use self::permute::exchange;

/// How operands interleaved with options are treated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Ordering {
    /// Stop scanning at the first operand.
    RequireOrder,
    /// Move operands behind all options.
    Permute,
    /// Report every operand in place as [`Opt::Operand`].
    ReturnInOrder,
}

/// The classification of one scanning step.
///
/// [`Opt::code`] maps every variant to the integer a C `getopt_long` would
/// have returned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Opt {
    /// A declared short option.
    Short(char),
    /// A long option without a flag cell; carries its declared value.
    Long(i32),
    /// A long option wrote its value into its [`Flag`].
    Flag,
    /// An operand in [`Ordering::ReturnInOrder`] mode; the token is the
    /// [`optarg`](Getopt::optarg).
    Operand,
    /// An unknown, ambiguous or malformed option.
    Unknown,
    /// A required argument is missing and the optstring starts with `:`.
    MissingArgument,
    /// `-W name` where `name` is not a declared long option.  The name is
    /// the [`optarg`](Getopt::optarg).
    W,
}

impl Opt {
    /// Returns the classic integer return code.
    pub fn code(self) -> i32 {
        match self {
            Opt::Short(c) => c as i32,
            Opt::Long(val) => val,
            Opt::Flag => 0,
            Opt::Operand => 1,
            Opt::Unknown => '?' as i32,
            Opt::MissingArgument => ':' as i32,
            Opt::W => 'W' as i32,
        }
    }

    /// Is this a specific short option?
    pub fn is_short(self, c: char) -> bool {
        self == Opt::Short(c)
    }

    /// Is this a long option with the given value?
    pub fn is_long(self, val: i32) -> bool {
        self == Opt::Long(val)
    }

    /// Is this a problem the scanner diagnosed?
    pub fn is_error(self) -> bool {
        matches!(self, Opt::Unknown | Opt::MissingArgument)
    }
}

/// What a short option character expects.
#[derive(Copy, Clone, PartialEq, Eq)]
enum ShortArg {
    None,
    Required,
    Optional,
    LongName,
}

/// Mutable scan state carried from one call to the next.
#[derive(Debug)]
struct ScanState {
    optind: usize,
    /// Undecoded characters of a bundled short option token.
    nextchar: Option<String>,
    optarg: Option<String>,
    first_nonopt: usize,
    last_nonopt: usize,
    ended: bool,
    optopt: i32,
    longind: Option<usize>,
    diagnostic: Option<Diagnostic>,
}

impl ScanState {
    fn new() -> ScanState {
        ScanState {
            optind: 0,
            nextchar: None,
            optarg: None,
            first_nonopt: 0,
            last_nonopt: 0,
            ended: false,
            optopt: '?' as i32,
            longind: None,
            diagnostic: None,
        }
    }

    /// Moves the skipped operands behind the options scanned since.
    fn exchange(&mut self, args: &mut [String]) {
        tracing::trace!(
            operands = ?(self.first_nonopt..self.last_nonopt),
            options = ?(self.last_nonopt..self.optind),
            "permuting arguments"
        );
        exchange(args, self.first_nonopt, self.last_nonopt, self.optind);
        self.first_nonopt += self.optind - self.last_nonopt;
        self.last_nonopt = self.optind;
    }
}

/// A `getopt_long` style scanner over an owned token vector.
///
/// The scanner keeps its position between calls, so one instance scans one
/// command line once.  Call [`next_opt`](Self::next_opt) (or iterate) until
/// it returns `None`.  For basic instructions consult the crate
/// documentation.
pub struct Getopt {
    prog: String,
    args: Vec<String>,
    optstring: String,
    long_options: Option<Vec<LongOpt>>,
    long_only: bool,
    posixly_correct: bool,
    opterr: bool,
    ordering: Ordering,
    sink: Option<DiagnosticSink>,
    state: ScanState,
}

impl fmt::Debug for Getopt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Getopt")
            .field("prog", &self.prog)
            .field("args", &self.args)
            .field("optstring", &self.optstring)
            .field("ordering", &self.ordering)
            .field("optind", &self.state.optind)
            .field("ended", &self.state.ended)
            .finish()
    }
}

impl Getopt {
    /// Creates a scanner for short options only.
    ///
    /// `args` must not include the program name; `prog` is only used in
    /// diagnostics.
    pub fn new<I, S>(prog: &str, args: I, optstring: &str) -> Getopt
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Getopt::builder(args)
            .prog(prog)
            .optstring(optstring)
            .finish()
    }

    /// Creates a short-option-only scanner from the environment.
    ///
    /// See [`env_builder`](Self::env_builder).
    pub fn from_env(optstring: &str) -> Getopt {
        Getopt::env_builder().optstring(optstring).finish()
    }

    /// Starts configuring a scanner over `args`.
    pub fn builder<I, S>(args: I) -> GetoptBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GetoptBuilder {
            prog: String::new(),
            args: args.into_iter().map(Into::into).collect(),
            optstring: String::new(),
            long_options: None,
            long_only: false,
            posixly_correct: false,
            opterr: true,
            sink: None,
        }
    }

    /// Starts configuring a scanner over the process arguments.
    ///
    /// The first argument becomes the program name (only its file name
    /// portion), and POSIX compliance is switched on if `POSIXLY_CORRECT`
    /// is set in the environment.  Arguments that are not valid unicode are
    /// converted lossily.
    pub fn env_builder() -> GetoptBuilder {
        let mut args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
        let prog = args
            .next()
            .as_deref()
            .map(Path::new)
            .and_then(|x| x.file_name())
            .and_then(|x| x.to_str())
            .unwrap_or_default()
            .to_string();
        Getopt::builder(args)
            .prog(&prog)
            .posixly_correct(std::env::var_os("POSIXLY_CORRECT").is_some())
    }

    /// Decodes the next option.
    ///
    /// Returns `None` once the options are exhausted.  At that point
    /// [`optind`](Self::optind) points at the first operand.  In
    /// [`Ordering::Permute`] mode the tokens may have been reordered in the
    /// process; in [`Ordering::RequireOrder`] mode the scan stops at the
    /// first operand.
    ///
    /// After a `--` token or the end of the tokens was reached, this keeps
    /// returning `None` without touching any state.
    pub fn next_opt(&mut self) -> Option<Opt> {
        self.state.optarg = None;
        self.state.diagnostic = None;
        if self.state.ended {
            return None;
        }

        if self.state.nextchar.as_deref().map_or(true, str::is_empty) {
            if let Some(opt) = self.advance() {
                return opt;
            }
        }

        let arg = &self.args[self.state.optind];
        let dashdash = arg.starts_with("--");
        let long_only_candidate = self.long_only
            && (arg.len() > 2 || !arg[1..].starts_with(|c: char| self.optstring.contains(c)));
        if self.long_options.is_some() && (dashdash || long_only_candidate) {
            let text = self.state.nextchar.clone().unwrap_or_default();
            let prefix = if dashdash { "--" } else { "-" };
            if let Some(opt) = self.check_long_option(&text, prefix, true) {
                return Some(opt);
            }

            // Not a long option.  Unless this is long-only mode and the text
            // starts with a short option, that's an error.
            let short_follows = text.starts_with(|c: char| self.optstring.contains(c));
            if !self.long_only || dashdash || !short_follows {
                self.report(Diagnostic::Unrecognized {
                    option: format!("{}{}", prefix, text),
                });
                self.state.nextchar = None;
                self.state.optind += 1;
                self.state.optopt = 0;
                return Some(Opt::Unknown);
            }
        }

        self.decode_short()
    }

    /// Moves to the next option token, handling operands on the way.
    ///
    /// Returns `Some` when the step is already decided; otherwise the token
    /// at `optind` is an option and `nextchar` holds its text.
    fn advance(&mut self) -> Option<Option<Opt>> {
        let st = &mut self.state;
        let args = &mut self.args;

        st.last_nonopt = st.last_nonopt.min(st.optind);
        st.first_nonopt = st.first_nonopt.min(st.optind);

        if self.ordering == Ordering::Permute {
            if st.first_nonopt != st.last_nonopt && st.last_nonopt != st.optind {
                st.exchange(args);
            } else if st.last_nonopt != st.optind {
                st.first_nonopt = st.optind;
            }
            while st.optind < args.len() && is_operand(&args[st.optind]) {
                st.optind += 1;
            }
            st.last_nonopt = st.optind;
        }

        // `--` ends the options.  It is swapped in front of the skipped
        // operands like an option and everything after it is an operand.
        if st.optind != args.len() && args[st.optind] == "--" {
            st.optind += 1;
            if st.first_nonopt != st.last_nonopt && st.last_nonopt != st.optind {
                st.exchange(args);
            } else if st.first_nonopt == st.last_nonopt {
                st.first_nonopt = st.optind;
            }
            st.last_nonopt = args.len();
            st.optind = args.len();
            st.ended = true;
            tracing::trace!("end of options marker");
        }

        if st.optind == args.len() {
            // back up so the caller gets to the skipped operands
            if st.first_nonopt != st.last_nonopt {
                st.optind = st.first_nonopt;
            }
            st.ended = true;
            return Some(None);
        }

        let arg = &args[st.optind];
        if is_operand(arg) {
            if self.ordering == Ordering::RequireOrder {
                return Some(None);
            }
            st.optarg = Some(arg.clone());
            st.optind += 1;
            return Some(Some(Opt::Operand));
        }

        let skip = if arg.starts_with("--") { 2 } else { 1 };
        st.nextchar = Some(arg[skip..].to_string());
        None
    }

    /// Decodes the first character of `nextchar` as a short option.
    fn decode_short(&mut self) -> Option<Opt> {
        let text = self.state.nextchar.take().unwrap_or_default();
        let mut chars = text.chars();
        let Some(c) = chars.next() else {
            // nothing left to decode in this token
            self.state.optind += 1;
            return self.next_opt();
        };
        let rest = chars.as_str();
        if rest.is_empty() {
            self.state.optind += 1;
        } else {
            self.state.nextchar = Some(rest.to_string());
        }

        let kind = match self.short_arg(c) {
            Some(kind) if c != ':' => kind,
            _ => {
                self.report(Diagnostic::Invalid {
                    ch: c,
                    posix: self.posixly_correct,
                });
                self.state.optopt = c as i32;
                return Some(Opt::Unknown);
            }
        };

        match kind {
            ShortArg::None => {}
            ShortArg::LongName => return Some(self.decode_w()),
            ShortArg::Optional => {
                if let Some(rest) = self.state.nextchar.take() {
                    self.state.optarg = Some(rest);
                    self.state.optind += 1;
                }
            }
            ShortArg::Required => {
                if let Some(rest) = self.state.nextchar.take() {
                    self.state.optarg = Some(rest);
                    self.state.optind += 1;
                } else if self.state.optind == self.args.len() {
                    return Some(self.missing_short_argument(c));
                } else {
                    let value = self.args[self.state.optind].clone();
                    self.state.optind += 1;
                    // POSIX: `-o -- foo` gives `foo` to `-o` and ends the
                    // options right there.
                    if self.posixly_correct && value == "--" {
                        if self.state.optind == self.args.len() {
                            self.state.optarg = Some(value);
                            return Some(self.missing_short_argument(c));
                        }
                        self.state.optarg = Some(self.args[self.state.optind].clone());
                        self.state.optind += 1;
                        self.state.first_nonopt = self.state.optind;
                        self.state.last_nonopt = self.args.len();
                        self.state.ended = true;
                    } else {
                        self.state.optarg = Some(value);
                    }
                }
            }
        }

        Some(Opt::Short(c))
    }

    /// Handles `-W name` (and `-Wname`) as `--name`.
    fn decode_w(&mut self) -> Opt {
        let name = match self.state.nextchar.take() {
            Some(rest) => {
                self.state.optind += 1;
                rest
            }
            None if self.state.optind == self.args.len() => {
                return self.missing_short_argument('W');
            }
            None => {
                let name = self.args[self.state.optind].clone();
                self.state.optind += 1;
                name
            }
        };

        match self.check_long_option(&name, "-W ", false) {
            Some(opt) => opt,
            None => {
                self.state.optarg = Some(name);
                Opt::W
            }
        }
    }

    /// Resolves `text` (`name` or `name=value`) against the long options.
    ///
    /// Returns `None` if no long option matches, leaving all state alone.
    /// With `consume` the token at `optind` is consumed on a match.
    fn check_long_option(&mut self, text: &str, prefix: &str, consume: bool) -> Option<Opt> {
        let (name, inline) = match text.find('=') {
            Some(idx) => (&text[..idx], Some(&text[idx + 1..])),
            None => (text, None),
        };

        self.state.longind = None;
        let long_options = self.long_options.as_deref().unwrap_or_default();
        let mut found: Option<(usize, &LongOpt)> = None;
        let mut exact = false;
        let mut ambiguous = false;
        for (idx, opt) in long_options.iter().enumerate() {
            if !opt.name().starts_with(name) {
                continue;
            }
            if opt.name() == name {
                found = Some((idx, opt));
                exact = true;
                break;
            }
            match found {
                None => found = Some((idx, opt)),
                // duplicates that behave the same are not ambiguous
                Some((_, first)) if !first.same_effect(opt) => ambiguous = true,
                Some(_) => {}
            }
        }
        let found = found.map(|(idx, _)| idx);

        if ambiguous && !exact {
            self.report(Diagnostic::Ambiguous {
                option: format!("{}{}", prefix, text),
            });
            self.state.nextchar = None;
            self.state.optopt = 0;
            if consume {
                self.state.optind += 1;
            }
            return Some(Opt::Unknown);
        }

        let idx = found?;
        let opt = self.long_options.as_ref()?.get(idx)?.clone();
        self.state.longind = Some(idx);
        self.state.nextchar = None;
        if consume {
            self.state.optind += 1;
        }

        match inline {
            Some(value) if opt.has_arg() != HasArg::No => {
                self.state.optarg = Some(value.to_string());
            }
            Some(_) => {
                self.report(Diagnostic::NotAllowed {
                    option: format!("{}{}", prefix, opt.name()),
                });
                self.state.optopt = opt.value();
                return Some(Opt::Unknown);
            }
            None if opt.has_arg() == HasArg::Required => {
                if self.state.optind < self.args.len() {
                    self.state.optarg = Some(self.args[self.state.optind].clone());
                    self.state.optind += 1;
                } else {
                    self.report(Diagnostic::RequiresArgument {
                        option: format!("{}{}", prefix, text),
                    });
                    self.state.optopt = opt.value();
                    return Some(self.missing_argument());
                }
            }
            None => {}
        }

        Some(match opt.flag_cell() {
            Some(flag) => {
                flag.set(opt.value());
                Opt::Flag
            }
            None => Opt::Long(opt.value()),
        })
    }

    fn missing_short_argument(&mut self, c: char) -> Opt {
        self.report(Diagnostic::ShortRequiresArgument { ch: c });
        self.state.optopt = c as i32;
        self.missing_argument()
    }

    fn missing_argument(&self) -> Opt {
        if self.optstring.starts_with(':') {
            Opt::MissingArgument
        } else {
            Opt::Unknown
        }
    }

    /// Looks up a short option character in the optstring.
    fn short_arg(&self, c: char) -> Option<ShortArg> {
        let idx = self.optstring.find(c)?;
        let decl = &self.optstring[idx + c.len_utf8()..];
        Some(if c == 'W' && decl.starts_with(';') {
            ShortArg::LongName
        } else if decl.starts_with("::") {
            ShortArg::Optional
        } else if decl.starts_with(':') {
            ShortArg::Required
        } else {
            ShortArg::None
        })
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        if self.opterr {
            match self.sink.as_mut() {
                Some(sink) => sink(&self.prog, &diagnostic),
                None => diagnostic::log_diagnostic(&self.prog, &diagnostic),
            }
        }
        self.state.diagnostic = Some(diagnostic);
    }

    /// The argument of the last option, or the operand in
    /// [`Ordering::ReturnInOrder`] mode.
    pub fn optarg(&self) -> Option<&str> {
        self.state.optarg.as_deref()
    }

    /// Index of the next token to scan.
    ///
    /// Once [`next_opt`](Self::next_opt) returned `None` this is the index
    /// of the first operand.
    pub fn optind(&self) -> usize {
        self.state.optind
    }

    /// The option at fault after an error.
    ///
    /// This is the character code for short options, the declared value for
    /// long options that got or missed an argument wrongly and `0` for
    /// unrecognized or ambiguous long options.
    pub fn optopt(&self) -> i32 {
        self.state.optopt
    }

    /// Index into the long options of the last matched long option.
    pub fn longind(&self) -> Option<usize> {
        self.state.longind
    }

    /// The diagnostic raised by the last call, if any.
    ///
    /// This is recorded even when diagnostics are disabled.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.state.diagnostic.as_ref()
    }

    /// Returns the normalized program name used in diagnostics.
    pub fn prog(&self) -> &str {
        &self.prog
    }

    /// The ordering mode picked from the optstring.
    pub fn ordering(&self) -> Ordering {
        self.ordering
    }

    /// The declared long options, empty if none were given.
    pub fn long_options(&self) -> &[LongOpt] {
        self.long_options.as_deref().unwrap_or_default()
    }

    /// The tokens in their current, possibly permuted, order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The tokens from [`optind`](Self::optind) on.
    pub fn operands(&self) -> &[String] {
        &self.args[self.state.optind.min(self.args.len())..]
    }

    /// Returns the tokens in their current order.
    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    /// Enables or disables diagnostics.
    #[inline]
    pub fn set_opterr(&mut self, yes: bool) {
        self.opterr = yes;
    }

    /// Moves the cursor to `optind` and resumes scanning from there.
    ///
    /// Any half-decoded short option bundle is dropped and a terminated
    /// scan becomes live again.  This is how a subcommand's options are
    /// scanned after the main options stopped at the subcommand name.
    pub fn set_optind(&mut self, optind: usize) {
        let optind = optind.min(self.args.len());
        self.state.optind = optind;
        self.state.first_nonopt = optind;
        self.state.last_nonopt = optind;
        self.state.nextchar = None;
        self.state.ended = false;
    }
}

impl Iterator for Getopt {
    type Item = Opt;

    fn next(&mut self) -> Option<Opt> {
        self.next_opt()
    }
}

/// Configures a [`Getopt`].
///
/// Created by [`Getopt::builder`] and [`Getopt::env_builder`].
pub struct GetoptBuilder {
    prog: String,
    args: Vec<String>,
    optstring: String,
    long_options: Option<Vec<LongOpt>>,
    long_only: bool,
    posixly_correct: bool,
    opterr: bool,
    sink: Option<DiagnosticSink>,
}

impl fmt::Debug for GetoptBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetoptBuilder")
            .field("prog", &self.prog)
            .field("args", &self.args)
            .field("optstring", &self.optstring)
            .field("long_options", &self.long_options)
            .field("long_only", &self.long_only)
            .field("posixly_correct", &self.posixly_correct)
            .field("opterr", &self.opterr)
            .finish()
    }
}

impl GetoptBuilder {
    /// Sets the program name used in diagnostics.
    pub fn prog(mut self, prog: &str) -> GetoptBuilder {
        self.prog = prog.to_string();
        self
    }

    /// Sets the short option declaration.
    pub fn optstring(mut self, optstring: &str) -> GetoptBuilder {
        self.optstring = optstring.to_string();
        self
    }

    /// Declares the long options.
    ///
    /// Without this call `--name` tokens are not treated as long options.
    pub fn long_options(mut self, long_options: Vec<LongOpt>) -> GetoptBuilder {
        self.long_options = Some(long_options);
        self
    }

    /// Also accepts long options with a single dash.
    ///
    /// **Default:** off
    pub fn long_only(mut self, yes: bool) -> GetoptBuilder {
        self.long_only = yes;
        self
    }

    /// Stops at the first operand unless the optstring says otherwise, says
    /// "illegal" instead of "invalid" and treats `-o --` specially.
    ///
    /// **Default:** off
    pub fn posixly_correct(mut self, yes: bool) -> GetoptBuilder {
        self.posixly_correct = yes;
        self
    }

    /// Enables emitting diagnostics.
    ///
    /// **Default:** on
    pub fn opterr(mut self, yes: bool) -> GetoptBuilder {
        self.opterr = yes;
        self
    }

    /// Sends diagnostics to `sink` instead of the `tracing` log.
    pub fn on_diagnostic<F>(mut self, sink: F) -> GetoptBuilder
    where
        F: FnMut(&str, &Diagnostic) + 'static,
    {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Validates the configuration and creates the scanner.
    pub fn build(self) -> Result<Getopt, Error> {
        for (idx, opt) in self.long_options.iter().flatten().enumerate() {
            if opt.name().is_empty() {
                return Err(Error::EmptyLongName(idx));
            }
        }
        Ok(self.finish())
    }

    fn finish(self) -> Getopt {
        let mut optstring = self.optstring;
        if optstring.is_empty() {
            optstring = " ".to_string();
        }
        let ordering = if let Some(rest) = optstring.strip_prefix('-') {
            optstring = rest.to_string();
            Ordering::ReturnInOrder
        } else if let Some(rest) = optstring.strip_prefix('+') {
            optstring = rest.to_string();
            Ordering::RequireOrder
        } else if self.posixly_correct {
            Ordering::RequireOrder
        } else {
            Ordering::Permute
        };

        Getopt {
            prog: self.prog,
            args: self.args,
            optstring,
            long_options: self.long_options,
            long_only: self.long_only,
            posixly_correct: self.posixly_correct,
            opterr: self.opterr,
            ordering,
            sink: self.sink,
            state: ScanState::new(),
        }
    }
}

/// Is this token an operand rather than an option?
fn is_operand(arg: &str) -> bool {
    !arg.starts_with('-') || arg == "-"
}
