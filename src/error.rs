/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and validating an
/// input line. Parse errors include rejected operand or operator tokens and
/// structurally incomplete expressions.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while folding a validated
/// expression into a result, such as division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Represents any error produced while evaluating an expression.
///
/// This is the error type returned by [`crate::evaluate`]. It wraps the
/// phase-specific errors so callers can handle all failures through one type
/// while still matching on the phase and kind.
pub enum EvalError {
    /// The input line failed tokenizing or validation.
    Parse(ParseError),
    /// The validated expression failed during evaluation.
    Runtime(RuntimeError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
