use crate::parser::{AddOperator, Expression, Factor, MulOperator, Payload, Sign, Term};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("You cannot divide by zero")]
    DivisionByZero,
    #[error("Integer overflow while evaluating {0}")]
    Overflow(&'static str),
    #[error("Number literal {0} does not fit in a 64-bit integer")]
    NumberTooLarge(String),
}

pub fn evaluate(expression: &Expression) -> Result<i64, EvalError> {
    let value = evaluate_expr(expression)?;
    tracing::debug!("{} evaluated to {}", expression, value);
    Ok(value)
}

// Chains are folded along their left spine, innermost operand first, so
// evaluation order matches the source and depth stays constant.
fn evaluate_expr(expression: &Expression) -> Result<i64, EvalError> {
    let (first, rest) = expression.spine();
    let mut value = evaluate_term(first)?;
    for (op, right) in rest {
        let right = evaluate_expr(right)?;
        value = match op {
            AddOperator::Plus => value.checked_add(right).ok_or(EvalError::Overflow("addition")),
            AddOperator::Minus => value
                .checked_sub(right)
                .ok_or(EvalError::Overflow("subtraction")),
        }?;
    }
    Ok(value)
}

fn evaluate_term(term: &Term) -> Result<i64, EvalError> {
    let (first, rest) = term.spine();
    let mut value = evaluate_factor(first)?;
    for (op, right) in rest {
        let right = evaluate_factor(right)?;
        value = match op {
            MulOperator::Multiply => value
                .checked_mul(right)
                .ok_or(EvalError::Overflow("multiplication")),
            MulOperator::Divide => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                // Integer division already truncates toward zero.
                value.checked_div(right).ok_or(EvalError::Overflow("division"))
            }
        }?;
    }
    Ok(value)
}

fn evaluate_factor(factor: &Factor) -> Result<i64, EvalError> {
    match &factor.payload {
        Payload::Nested(expression) => {
            let value = evaluate_expr(expression)?;
            match factor.sign {
                Sign::Positive => Ok(value),
                Sign::Negative => value.checked_neg().ok_or(EvalError::Overflow("negation")),
            }
        }
        Payload::Number(digits) => {
            // The sign is applied before narrowing so that i64::MIN is reachable.
            let too_large = || EvalError::NumberTooLarge(digits.clone());
            let magnitude = i128::from(digits.parse::<u64>().map_err(|_| too_large())?);
            let signed = match factor.sign {
                Sign::Positive => magnitude,
                Sign::Negative => -magnitude,
            };
            i64::try_from(signed).map_err(|_| too_large())
        }
    }
}
