//! Compile Errors
//!
//! Every failure the core can raise. All of them abort the compile of the
//! component they occur in; none is retried.

use std::fmt;
use thiserror::Error;

/// Shape of the class member a classifier rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Class,
    Field,
    Method,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MemberKind::Class => "class",
            MemberKind::Field => "field",
            MemberKind::Method => "method",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("No script tag found")]
    NoScript,

    #[error("No class found")]
    EmptySymbolTable,

    #[error("{kind} `{name}` with more than 1 decorator: {}", decorators.join(", "))]
    MultipleDecorators {
        kind: MemberKind,
        name: String,
        decorators: Vec<String>,
    },

    /// The class decorator is not the component marker.
    #[error("{kind} `{name}` with unknown decorator: {decorator}")]
    UnknownDecorator {
        kind: MemberKind,
        name: String,
        decorator: String,
    },

    #[error("class `{class}` with unknown heritage clause: {}", heritage.join(", "))]
    UnknownHeritage { class: String, heritage: Vec<String> },

    /// A member decorator outside the family its member shape accepts.
    #[error("{kind} `{name}` with unsupported decorator: {decorator}")]
    UnsupportedDecorator {
        kind: MemberKind,
        name: String,
        decorator: String,
    },

    #[error("more than one component class in module: `{first}` and `{second}`")]
    MultipleComponents { first: String, second: String },

    #[error("invalid options for watcher `{handler}`: {reason}")]
    InvalidWatchOptions { handler: String, reason: String },

    #[error("failed to parse script: {message}")]
    Parse { message: String },
}

pub type Result<T> = std::result::Result<T, CompileError>;
