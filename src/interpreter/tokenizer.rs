use crate::error::ParseError;

/// Result type used by the tokenizer.
pub type TokenizeResult<T> = Result<T, ParseError>;

/// Represents one of the four supported binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Returns the operator for a single-character token, or `None` if the
    /// character is not one of `+ - * /`.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}

/// A tokenized and validated expression.
///
/// Operands and operators are kept in input order, positionally aligned so
/// that `operators[i]` sits between `operands[i]` and `operands[i + 1]`.
/// Both sequences live only for the duration of one evaluation call.
#[derive(Debug, PartialEq)]
pub struct Expression {
    /// Parsed operand values, one per operand token.
    pub operands:  Vec<f64>,
    /// Operator tags, one per operator token.
    pub operators: Vec<Operator>,
}

/// Splits an input line into tokens and validates each one.
///
/// Tokens are whitespace-delimited, so runs of separators collapse and
/// leading or trailing whitespace is tolerated. Tokens must alternate
/// strictly between operands and operators, starting with an operand. The
/// first token that fails its position's validity check aborts the scan.
///
/// # Parameters
/// - `line`: The input line, without its trailing newline.
///
/// # Returns
/// An [`Expression`] holding the parsed operands and operators.
///
/// # Errors
/// - `InvalidOperand` if a token in an operand position is rejected.
/// - `InvalidOperator` if a token in an operator position is rejected.
/// - `MissingFinalOperand` if the expression is empty or does not end with
///   an operand.
///
/// # Example
/// ```
/// use summa::interpreter::tokenizer::{tokenize, Operator};
///
/// let expression = tokenize("1.5 + 2").unwrap();
///
/// assert_eq!(expression.operands, vec![1.5, 2.0]);
/// assert_eq!(expression.operators, vec![Operator::Add]);
/// ```
pub fn tokenize(line: &str) -> TokenizeResult<Expression> {
    let mut operands = Vec::new();
    let mut operators = Vec::new();

    let mut parse_operand = true;

    for token in line.split_whitespace() {
        if parse_operand {
            if !valid_operand(token) {
                return Err(ParseError::InvalidOperand { token: token.to_string() });
            }

            // A bare "." passes validation but carries no digits; it parses
            // to 0.0, matching atof semantics.
            operands.push(token.parse().unwrap_or(0.0));
        } else {
            let Some(operator) = valid_operator(token) else {
                return Err(ParseError::InvalidOperator { token: token.to_string() });
            };

            operators.push(operator);
        }

        parse_operand = !parse_operand;
    }

    // Catches empty input, a trailing operator, and any other count
    // mismatch that survived the alternation above.
    if operands.len() != operators.len() + 1 {
        return Err(ParseError::MissingFinalOperand);
    }

    Ok(Expression { operands, operators })
}

/// Checks that a token contains only ASCII digits and at most one `.`.
///
/// A token with no digits at all (a bare `.`) is accepted; tightening this
/// would reject input the original program allowed.
fn valid_operand(token: &str) -> bool {
    let mut num_dec = 0;

    for c in token.chars() {
        if c == '.' {
            num_dec += 1;
        } else if !c.is_ascii_digit() {
            return false;
        }
    }

    num_dec <= 1
}

/// Checks that a token is exactly one of `+ - * /`, returning its tag.
fn valid_operator(token: &str) -> Option<Operator> {
    let mut chars = token.chars();
    let first = chars.next()?;

    if chars.next().is_some() {
        return None;
    }

    Operator::from_symbol(first)
}
