pub mod error;

pub mod prelude {
    pub use super::error::*;
    pub use super::{eval, eval_assignment, eval_expression};
}


use crate::{
    parser::prelude::{Assignment, Expression, Infix, Prefix, Primitive, Program},
    environment::prelude::Environment,
    lexer::prelude::Token,
    utils::prelude::SrcSpan
};
use error::{EvalError, EvalErrorType};

pub fn eval(program: &Program, env: &mut Environment) -> Result<(), EvalError> {
    for statement in &program.statements {
        eval_assignment(statement, env)?;
    }

    Ok(())
}

/// Evaluates the right-hand side and stores it. Returns the stored value.
pub fn eval_assignment(assignment: &Assignment, env: &mut Environment) -> Result<i64, EvalError> {
    let value = eval_expression(&assignment.value, env)?;

    env.set(assignment.identifier.value.clone(), value);

    Ok(value)
}

pub fn eval_expression(expression: &Expression, env: &Environment) -> Result<i64, EvalError> {
    match expression {
        Expression::Identifier(ident) => env.get(&ident.value)
            .ok_or_else(|| EvalError {
                error: EvalErrorType::UndefinedVariable { name: ident.value.clone() },
                location: ident.location
            }),
        Expression::Primitive(Primitive::Int { value, .. }) => Ok(*value),
        Expression::Infix(infix) => eval_infix(infix, env),
        Expression::Prefix(prefix) => eval_prefix(prefix, env),
        Expression::Nested { expression, .. } => eval_expression(expression, env)
    }
}

fn eval_prefix(prefix: &Prefix, env: &Environment) -> Result<i64, EvalError> {
    let value = eval_expression(&prefix.expression, env)?;

    match prefix.operator {
        Token::Minus => checked(value.checked_neg(), prefix.location),
        _ => Ok(value)
    }
}

// Left operand first, so the leftmost undefined variable is the one reported.
fn eval_infix(infix: &Infix, env: &Environment) -> Result<i64, EvalError> {
    let left = eval_expression(&infix.left, env)?;
    let right = eval_expression(&infix.right, env)?;

    let value = match infix.operator {
        Token::Plus => left.checked_add(right),
        Token::Minus => left.checked_sub(right),
        Token::Star => left.checked_mul(right),
        _ => unreachable!("`{}` is not a binary operator", infix.operator.as_literal())
    };

    checked(value, infix.location)
}

fn checked(value: Option<i64>, location: SrcSpan) -> Result<i64, EvalError> {
    value.ok_or(EvalError {
        error: EvalErrorType::Overflow,
        location
    })
}
