use crate::{
    error::{EvalError, EvalResult},
    loader::value_parser::is_integer_literal,
    value::{Environment, Value},
};

/// Evaluates a constant prefix expression over previously bound variables.
///
/// The first token is the operator or function name; every remaining token
/// is an operand, resolved in order onto a stack. The expression has fixed
/// arity: binary operators `+ - * /` consume exactly two operands and the
/// unary functions `ord` and `abs` exactly one. Anything left on the stack
/// after the application makes the expression invalid.
///
/// Division is integer division truncating toward zero, and all arithmetic
/// is checked, so a zero divisor or an out-of-range result fails instead of
/// wrapping.
///
/// # Parameters
/// - `tokens`: Whitespace-separated tokens of the expression interior.
/// - `env`: Bindings visible to operand resolution.
///
/// # Returns
/// The single value the expression collapses into.
///
/// # Errors
/// Returns an `EvalError` if:
/// - an operand is neither a literal nor a bound variable,
/// - the leading token is not a known operator or function,
/// - the operand count does not match the operator's arity,
/// - an operand has the wrong kind for the operator,
/// - the arithmetic divides by zero or overflows.
///
/// # Example
/// ```
/// use trn::{loader::expression::evaluate, value::{Environment, Value}};
///
/// let mut env = Environment::new();
/// env.insert("num".to_string(), Value::Integer(42));
///
/// assert_eq!(evaluate(&["+", "2", "3"], &env).unwrap(), Value::Integer(5));
/// assert_eq!(evaluate(&["ord", "\"A\""], &env).unwrap(), Value::Integer(65));
/// assert_eq!(evaluate(&["+", "num", "1"], &env).unwrap(), Value::Integer(43));
/// ```
pub fn evaluate(tokens: &[&str], env: &Environment) -> EvalResult<Value> {
    let Some((&operator, operands)) = tokens.split_first() else {
        return Err(EvalError::InvalidExpression);
    };

    let mut stack = Vec::with_capacity(operands.len());
    for &token in operands {
        stack.push(resolve_operand(token, env)?);
    }

    match operator {
        "+" | "-" | "*" | "/" => apply_operator(operator, &mut stack)?,
        "ord" => apply_ord(&mut stack)?,
        "abs" => apply_abs(&mut stack)?,
        _ => {
            return Err(EvalError::UnknownToken { token: operator.to_string(), });
        },
    }

    if stack.len() != 1 {
        return Err(EvalError::InvalidExpression);
    }
    stack.pop().ok_or(EvalError::InvalidExpression)
}

/// Resolves one operand token to a value.
///
/// Numeric tokens parse as integers, double-quoted tokens as strings, and
/// any other token must name a bound variable, whose value is copied.
///
/// # Errors
/// Returns `EvalError::UnknownToken` if the token is none of those, and
/// `EvalError::Overflow` if an integer literal does not fit in an `i64`.
fn resolve_operand(token: &str, env: &Environment) -> EvalResult<Value> {
    if is_integer_literal(token) {
        return token.parse::<i64>()
                    .map(Value::Integer)
                    .map_err(|_| EvalError::Overflow);
    }
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        return Ok(Value::String(token[1..token.len() - 1].to_string()));
    }
    env.get(token)
       .cloned()
       .ok_or_else(|| EvalError::UnknownToken { token: token.to_string(), })
}

/// Applies a binary arithmetic operator to the top two stack values.
///
/// Both operands must be integers. The arithmetic is checked `i64`
/// arithmetic; division truncates toward zero.
fn apply_operator(operator: &str, stack: &mut Vec<Value>) -> EvalResult<()> {
    if stack.len() < 2 {
        return Err(EvalError::InsufficientOperands { operator: operator.to_string(), });
    }

    let b = pop_integer(stack, operator)?;
    let a = pop_integer(stack, operator)?;

    let result = match operator {
        "+" => a.checked_add(b),
        "-" => a.checked_sub(b),
        "*" => a.checked_mul(b),
        "/" => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            a.checked_div(b)
        },
        _ => unreachable!(),
    };

    stack.push(Value::Integer(result.ok_or(EvalError::Overflow)?));
    Ok(())
}

/// Applies `ord` to the top stack value.
///
/// The operand must be a single-character string; the result is its code
/// point.
fn apply_ord(stack: &mut Vec<Value>) -> EvalResult<()> {
    let value = stack.pop()
                     .ok_or(EvalError::InsufficientOperands { operator: "ord".to_string(), })?;
    let text = value.as_text()?;

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            stack.push(Value::Integer(i64::from(u32::from(c))));
            Ok(())
        },
        _ => Err(EvalError::TypeMismatch { details: format!("'ord' expects a single character, \
                                                             found \"{text}\""), }),
    }
}

/// Applies `abs` to the top stack value.
///
/// The operand must be an integer. `abs` of `i64::MIN` overflows and fails
/// accordingly.
fn apply_abs(stack: &mut Vec<Value>) -> EvalResult<()> {
    let value = stack.pop()
                     .ok_or(EvalError::InsufficientOperands { operator: "abs".to_string(), })?;
    let n = value.as_integer()?;

    stack.push(Value::Integer(n.checked_abs().ok_or(EvalError::Overflow)?));
    Ok(())
}

/// Pops the top stack value as an integer.
fn pop_integer(stack: &mut Vec<Value>, operator: &str) -> EvalResult<i64> {
    stack.pop()
         .ok_or(EvalError::InsufficientOperands { operator: operator.to_string(), })?
         .as_integer()
}
