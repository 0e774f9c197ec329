// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

use crate::value::Tag;

fn tail(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

/// Errors raised when a [`GenericValue`](crate::GenericValue) cannot be
/// viewed as the requested representation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("[VALUE] Type Error: expected {expected}, found {found}{}", tail(.hint, .code))]
    TypeMismatch {
        expected: Tag,
        found: Tag,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// The value exists but does not fit the target representation.
    #[error("[VALUE] Out of range: {message}{}", tail(.hint, .code))]
    OutOfRange {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a String payload cannot be read as a scalar.
    #[error("[VALUE] Parse Error: {message}{}", tail(.hint, .code))]
    Parse {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[VALUE] Index {index} out of bounds for array of length {len}{}", tail(&None, .code))]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        code: Option<u32>,
    },
    #[error("[VALUE] Missing key '{key}'{}", tail(&None, .code))]
    MissingKey { key: String, code: Option<u32> },
    #[error("[VALUE] At element {index}: {source}")]
    Element {
        index: usize,
        source: Box<ValueError>,
    },
    #[error("[VALUE] At field '{key}': {source}")]
    Field {
        key: String,
        source: Box<ValueError>,
    },
}

impl ValueError {
    pub fn type_mismatch(expected: Tag, found: Tag) -> Self {
        let code = match expected {
            Tag::String => 401,
            Tag::Char | Tag::Signed | Tag::Unsigned | Tag::Double => 402,
            Tag::Bool => 404,
            Tag::Array => 405,
            Tag::Object | Tag::Null => 403,
        };
        ValueError::TypeMismatch {
            expected,
            found,
            hint: Some(format!("Store a {} value before reading it as one", expected)),
            code: Some(code),
        }
    }

    pub fn out_of_range(message: impl Into<String>, target: &str) -> Self {
        ValueError::OutOfRange {
            message: message.into(),
            hint: Some(format!("Use a value that fits in {}", target)),
            code: Some(406),
        }
    }

    pub fn parse(text: &str, target: &str) -> Self {
        ValueError::Parse {
            message: format!("cannot read {:?} as {}", text, target),
            hint: None,
            code: Some(410),
        }
    }

    /// Numeric code of the innermost error.
    pub fn code(&self) -> Option<u32> {
        match self {
            ValueError::TypeMismatch { code, .. }
            | ValueError::OutOfRange { code, .. }
            | ValueError::Parse { code, .. }
            | ValueError::IndexOutOfBounds { code, .. }
            | ValueError::MissingKey { code, .. } => *code,
            ValueError::Element { source, .. } | ValueError::Field { source, .. } => source.code(),
        }
    }

    pub(crate) fn at_element(self, index: usize) -> Self {
        ValueError::Element {
            index,
            source: Box::new(self),
        }
    }

    pub(crate) fn at_field(self, key: &str) -> Self {
        ValueError::Field {
            key: key.to_string(),
            source: Box::new(self),
        }
    }
}

/// Errors raised at the format boundary.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("[FORMAT] I/O Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("[FORMAT] Syntax Error at {line}:{column}: {message}{}", tail(&None, .code))]
    Syntax {
        message: String,
        line: usize,
        column: usize,
        code: Option<u32>,
    },
    #[error("[FORMAT] Decode Error: {0}")]
    Value(#[from] ValueError),
    /// The value has no representation in this wire syntax.
    #[error("[FORMAT] Unsupported: {message}{}", tail(&None, .code))]
    Unsupported { message: String, code: Option<u32> },
}

impl FormatError {
    pub fn unsupported(message: impl Into<String>) -> Self {
        FormatError::Unsupported {
            message: message.into(),
            code: Some(520),
        }
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Io => FormatError::Io(err.into()),
            Category::Syntax | Category::Eof => FormatError::Syntax {
                line: err.line(),
                column: err.column(),
                message: err.to_string(),
                code: Some(500),
            },
            // Well-formed JSON of the wrong shape, e.g. `{"pretty": 5}`.
            Category::Data => FormatError::Syntax {
                line: err.line(),
                column: err.column(),
                message: err.to_string(),
                code: Some(503),
            },
        }
    }
}
