use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::Error;

/// Whether a long option takes an argument.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum HasArg {
    /// `--name` only.  An inline `--name=value` is an error.
    #[default]
    No,
    /// `--name value` or `--name=value`.
    Required,
    /// Only `--name=value` carries an argument.
    Optional,
}

impl HasArg {
    /// Returns the classic `no_argument`/`required_argument`/`optional_argument` code.
    pub fn code(self) -> i32 {
        match self {
            HasArg::No => 0,
            HasArg::Required => 1,
            HasArg::Optional => 2,
        }
    }
}

impl TryFrom<i32> for HasArg {
    type Error = Error;

    fn try_from(code: i32) -> Result<HasArg, Error> {
        match code {
            0 => Ok(HasArg::No),
            1 => Ok(HasArg::Required),
            2 => Ok(HasArg::Optional),
            other => Err(Error::InvalidHasArg(other)),
        }
    }
}

/// A shared cell a long option writes its value into when matched.
///
/// Clones share the same cell, so the caller keeps one handle and hands
/// another to [`LongOpt::flag`].  A match replaces whatever the cell held
/// before.
#[derive(Clone, Default)]
pub struct Flag(Rc<Cell<Option<i32>>>);

impl Flag {
    /// Creates an empty flag cell.
    pub fn new() -> Flag {
        Flag::default()
    }

    /// Returns the value written by the last match, if any.
    pub fn get(&self) -> Option<i32> {
        self.0.get()
    }

    /// Clears the cell.
    pub fn clear(&self) {
        self.0.set(None);
    }

    pub(crate) fn set(&self, value: i32) {
        self.0.set(Some(value));
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Flag").field(&self.get()).finish()
    }
}

/// Declares one long option.
///
/// ```
/// use getopt_long::{Flag, HasArg, LongOpt};
///
/// let verbose = Flag::new();
/// let opts = vec![
///     LongOpt::new("output", HasArg::Required).val('o' as i32),
///     LongOpt::new("verbose", HasArg::No).val(1).flag(verbose.clone()),
/// ];
/// assert_eq!(opts[0].name(), "output");
/// ```
#[derive(Debug, Clone)]
pub struct LongOpt {
    name: String,
    has_arg: HasArg,
    flag: Option<Flag>,
    val: i32,
}

impl LongOpt {
    /// Creates a long option returning `0` when matched.
    pub fn new(name: impl Into<String>, has_arg: HasArg) -> LongOpt {
        LongOpt {
            name: name.into(),
            has_arg,
            flag: None,
            val: 0,
        }
    }

    /// Creates a long option from a raw argument mode code.
    ///
    /// Fails with [`Error::InvalidHasArg`] unless `has_arg` is `0`, `1` or `2`.
    pub fn from_raw(name: impl Into<String>, has_arg: i32, val: i32) -> Result<LongOpt, Error> {
        Ok(LongOpt::new(name, HasArg::try_from(has_arg)?).val(val))
    }

    /// Sets the value returned (or written into the flag) on a match.
    ///
    /// Using the character code of a short option (`'o' as i32`) makes
    /// `--output` and `-o` indistinguishable to the caller.
    pub fn val(mut self, val: i32) -> LongOpt {
        self.val = val;
        self
    }

    /// Makes a match write [`val`](Self::val) into `flag` and report
    /// [`Opt::Flag`](crate::Opt::Flag) instead.
    pub fn flag(mut self, flag: Flag) -> LongOpt {
        self.flag = Some(flag);
        self
    }

    /// The option name without leading dashes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the option takes an argument.
    pub fn has_arg(&self) -> HasArg {
        self.has_arg
    }

    /// The cell a match writes into, if any.
    pub fn flag_cell(&self) -> Option<&Flag> {
        self.flag.as_ref()
    }

    /// The value returned (or written into the flag cell) on a match.
    pub fn value(&self) -> i32 {
        self.val
    }

    /// Would a match on `other` be reported exactly like a match on this one?
    pub(crate) fn same_effect(&self, other: &LongOpt) -> bool {
        let same_cell = match (&self.flag, &other.flag) {
            (Some(a), Some(b)) => Rc::ptr_eq(&a.0, &b.0),
            (None, None) => true,
            _ => false,
        };
        self.has_arg == other.has_arg && self.val == other.val && same_cell
    }
}
