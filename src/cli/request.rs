//! Translation of the parsed operation flags into backend arguments.
//!
//! The front-end understands nine operations and forwards each of them to the
//! lxpkg backend. Flag-only operations forward their short token; operations
//! that take a value forward the short token, the long token and the literal
//! value, in that order:
//!
//! | Operation | Forwarded tokens |
//! |---|---|
//! | sync | `-s` |
//! | build | `-b` |
//! | list | `-l` |
//! | auto-resolve | `--auto-resolve` |
//! | install | `-i --install <pkg>` |
//! | remove | `-r --remove <pkg>` |
//! | upgrade | `-u --upgrade <pkg>` |
//! | clean | `-c --clean <pkg>` |
//! | query | `-q --query <term>` |
//!
//! Tokens are always emitted in the table's order, regardless of the order
//! the flags appeared on the command line.

use clap::Args;
use std::fmt;

use crate::core::LxpkgError;

/// The operations requested on the command line.
///
/// Parsed by clap and consumed once by [`translate`].
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLineRequest {
    /// Install a package
    #[arg(short = 'i', long, value_name = "PKG")]
    pub install: Option<String>,

    /// Remove a package
    #[arg(short = 'r', long, value_name = "PKG")]
    pub remove: Option<String>,

    /// Sync repositories
    #[arg(short = 's', long)]
    pub sync: bool,

    /// Build a package
    #[arg(short = 'b', long)]
    pub build: bool,

    /// Upgrade a package or the whole system
    #[arg(short = 'u', long, value_name = "PKG")]
    pub upgrade: Option<String>,

    /// Clean a package's build directory
    #[arg(short = 'c', long, value_name = "PKG")]
    pub clean: Option<String>,

    /// List installed packages
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Search packages
    #[arg(short = 'q', long, value_name = "TERM")]
    pub query: Option<String>,

    /// Resolve file conflicts automatically
    #[arg(long)]
    pub auto_resolve: bool,
}

/// A single recognized operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `-s`
    Sync,
    /// `-b`
    Build,
    /// `-l`
    List,
    /// `--auto-resolve`
    AutoResolve,
    /// `-i --install <pkg>`
    Install(String),
    /// `-r --remove <pkg>`
    Remove(String),
    /// `-u --upgrade <pkg>`
    Upgrade(String),
    /// `-c --clean <pkg>`
    Clean(String),
    /// `-q --query <term>`
    Query(String),
}

impl Operation {
    /// Flag tokens forwarded for this operation, without the value.
    pub const fn flags(&self) -> &'static [&'static str] {
        match self {
            Self::Sync => &["-s"],
            Self::Build => &["-b"],
            Self::List => &["-l"],
            Self::AutoResolve => &["--auto-resolve"],
            Self::Install(_) => &["-i", "--install"],
            Self::Remove(_) => &["-r", "--remove"],
            Self::Upgrade(_) => &["-u", "--upgrade"],
            Self::Clean(_) => &["-c", "--clean"],
            Self::Query(_) => &["-q", "--query"],
        }
    }

    /// The literal value of a value-bearing operation.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Install(v)
            | Self::Remove(v)
            | Self::Upgrade(v)
            | Self::Clean(v)
            | Self::Query(v) => Some(v),
            Self::Sync | Self::Build | Self::List | Self::AutoResolve => None,
        }
    }

    fn push_tokens(&self, out: &mut Vec<String>) {
        out.extend(self.flags().iter().map(|flag| (*flag).to_string()));
        if let Some(value) = self.value() {
            out.push(value.to_string());
        }
    }
}

impl CommandLineRequest {
    /// Requested operations in forwarding order.
    ///
    /// A value-bearing flag with an empty value counts as not requested.
    pub fn operations(&self) -> Vec<Operation> {
        let given = |value: &Option<String>| value.as_ref().filter(|v| !v.is_empty()).cloned();

        let mut ops = Vec::new();
        if self.sync {
            ops.push(Operation::Sync);
        }
        if self.build {
            ops.push(Operation::Build);
        }
        if self.list {
            ops.push(Operation::List);
        }
        if self.auto_resolve {
            ops.push(Operation::AutoResolve);
        }
        ops.extend(given(&self.install).map(Operation::Install));
        ops.extend(given(&self.remove).map(Operation::Remove));
        ops.extend(given(&self.upgrade).map(Operation::Upgrade));
        ops.extend(given(&self.clean).map(Operation::Clean));
        ops.extend(given(&self.query).map(Operation::Query));
        ops
    }

    /// Whether no operation at all was requested.
    pub fn is_empty(&self) -> bool {
        self.operations().is_empty()
    }
}

/// Ordered argument list for one backend invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatedArgs(Vec<String>);

impl TranslatedArgs {
    /// The arguments as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the list, returning the tokens.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for TranslatedArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl IntoIterator for TranslatedArgs {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TranslatedArgs {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds the backend argument list for `request`.
///
/// # Errors
///
/// Returns [`LxpkgError::EmptyRequest`] when no operation was requested.
///
/// ```rust
/// use lxpkg_cli::cli::request::{translate, CommandLineRequest};
///
/// let request = CommandLineRequest {
///     install: Some("firefox".to_string()),
///     ..Default::default()
/// };
/// let args = translate(&request).unwrap();
/// assert_eq!(args.as_slice(), ["-i", "--install", "firefox"]);
/// ```
pub fn translate(request: &CommandLineRequest) -> Result<TranslatedArgs, LxpkgError> {
    let operations = request.operations();
    if operations.is_empty() {
        return Err(LxpkgError::EmptyRequest);
    }

    let mut tokens = Vec::new();
    for operation in &operations {
        operation.push_tokens(&mut tokens);
    }
    Ok(TranslatedArgs(tokens))
}
