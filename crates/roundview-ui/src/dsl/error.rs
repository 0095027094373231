use std::error::Error;
use std::fmt;

use roundview_mkml::ParseError;

/// Why a `.mkml` document could not be turned into widgets.
#[derive(Debug)]
pub enum BuildError {
    /// The source did not parse.
    Parse(ParseError),
    /// No widget is registered under this view name.
    UnknownView { name: String, line: usize },
    /// An attribute value has the wrong type or is not one of the accepted words.
    InvalidValue {
        view: String,
        key: String,
        expected: &'static str,
        found: String,
        line: usize,
    },
    /// The image source could not be loaded.
    Asset { name: String, line: usize, source: anyhow::Error },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Parse(e) => write!(f, "{e}"),
            BuildError::UnknownView { name, line } => {
                write!(f, "line {line}: unknown view `{name}`")
            }
            BuildError::InvalidValue { view, key, expected, found, line } => {
                write!(f, "line {line}: {view}.{key} expects {expected}, found {found}")
            }
            BuildError::Asset { name, line, .. } => {
                write!(f, "line {line}: cannot load image {name:?}")
            }
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BuildError::Parse(e) => Some(e),
            BuildError::Asset { source, .. } => Some(&**source),
            _ => None,
        }
    }
}

impl From<ParseError> for BuildError {
    fn from(e: ParseError) -> Self {
        BuildError::Parse(e)
    }
}
