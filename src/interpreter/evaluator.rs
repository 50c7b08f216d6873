use crate::{
    error::RuntimeError,
    interpreter::tokenizer::{Expression, Operator},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The order in which operator symbols are applied.
///
/// Each symbol gets its own left-to-right pass, so multiplication and
/// division resolve before addition and subtraction.
const ORDER_OF_OPS: [Operator; 4] = [Operator::Mul, Operator::Div, Operator::Add, Operator::Sub];

/// One operand position during evaluation.
///
/// `merged` marks a slot whose value has been consumed into a fold result
/// and must track that result for the rest of the evaluation.
#[derive(Debug)]
struct Slot {
    value:  f64,
    merged: bool,
}

/// Folds a validated expression into a single value.
///
/// The operator list is scanned once per symbol in the order-of-operations
/// table. Each
/// pass repeatedly locates the leftmost pending operator for that symbol,
/// applies it to the two adjacent operand slots, propagates the sub-result to
/// every merged slot, and consumes the operator so it is never revisited.
/// Once all passes complete, the first slot holds the fully folded result.
///
/// # Parameters
/// - `expression`: A tokenized expression whose operand count exceeds its
///   operator count by exactly one.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// `DivisionByZero` if any division's divisor is zero. The evaluation aborts
/// immediately and no partial result is returned.
///
/// # Example
/// ```
/// use summa::interpreter::{evaluator::fold, tokenizer::tokenize};
///
/// let expression = tokenize("10 - 3 - 2").unwrap();
///
/// assert_eq!(fold(expression).unwrap(), 5.0);
/// ```
pub fn fold(expression: Expression) -> EvalResult<f64> {
    let Expression { operands, operators } = expression;

    let mut slots: Vec<Slot> = operands.into_iter()
                                       .map(|value| Slot { value, merged: false })
                                       .collect();

    // An operator slot becomes None once applied.
    let mut pending: Vec<Option<Operator>> = operators.into_iter().map(Some).collect();

    for symbol in ORDER_OF_OPS {
        while let Some(i) = pending.iter().position(|op| *op == Some(symbol)) {
            let result = apply(symbol, slots[i].value, slots[i + 1].value)?;

            slots[i].merged = true;
            slots[i + 1].merged = true;

            for slot in slots.iter_mut().filter(|slot| slot.merged) {
                slot.value = result;
            }

            pending[i] = None;
        }
    }

    // The tokenizer guarantees at least one operand.
    Ok(slots[0].value)
}

/// Applies one binary operation.
///
/// Division checks the divisor against machine epsilon rather than comparing
/// to literal zero, so values that underflow to an effective zero are also
/// rejected.
fn apply(op: Operator, a: f64, b: f64) -> EvalResult<f64> {
    use Operator::{Add, Div, Mul, Sub};

    Ok(match op {
           Add => a + b,
           Sub => a - b,
           Mul => a * b,
           Div => {
               if b.abs() < f64::EPSILON {
                   return Err(RuntimeError::DivisionByZero);
               }

               a / b
           },
       })
}
