#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing and validation.
pub enum ParseError {
    /// A token in an operand position was not a valid operand.
    InvalidOperand {
        /// The rejected token.
        token: String,
    },
    /// A token in an operator position was not a valid operator.
    InvalidOperator {
        /// The rejected token.
        token: String,
    },
    /// The expression ended without a final operand, or was empty.
    MissingFinalOperand,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperand { token } => {
                write!(f, "Invalid operand: {token}")
            },

            Self::InvalidOperator { token } => {
                write!(f, "Invalid operator: {token}")
            },

            Self::MissingFinalOperand => write!(f, "Missing final operand"),
        }
    }
}

impl std::error::Error for ParseError {}
