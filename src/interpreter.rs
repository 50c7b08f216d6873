/// The evaluator module folds a validated expression into one result.
///
/// The evaluator walks the operator list one precedence symbol at a time,
/// applying each operation to its adjacent operands and propagating the
/// sub-result to every operand position that has been consumed into it. It is
/// the core execution engine of the evaluator.
///
/// # Responsibilities
/// - Applies the four arithmetic operations in precedence order.
/// - Propagates fold results across merged operand slots.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The tokenizer module splits and validates an input line.
///
/// The tokenizer reads the raw input text and produces the operand and
/// operator sequences consumed by the evaluator. Validation happens here as
/// well: every token must match the lexical class its position demands, and
/// the expression must end with an operand. This is the first stage of
/// evaluation.
///
/// # Responsibilities
/// - Splits the input line into whitespace-delimited tokens.
/// - Classifies tokens positionally as operands or operators.
/// - Reports the first token that fails validation.
pub mod tokenizer;
