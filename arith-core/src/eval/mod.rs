pub mod error;
pub mod value;

pub mod prelude {
    pub use super::{
        error::*,
        value::*,
        evaluate
    };
}


use crate::parser::prelude::{BinaryExpression, BinaryOperator, Expression};
use self::{error::EvalError, value::{Value, NULL}};

enum Step<'a> {
    Visit(&'a Expression),
    Apply(&'a BinaryExpression),
}

/// Reduces a tree to a single value. Pure: the same tree always yields the
/// same result. Walks with an explicit stack, left operand first, so long
/// operator chains cannot exhaust the call stack.
pub fn evaluate(expression: &Expression) -> Result<Value, EvalError> {
    let mut steps = vec![Step::Visit(expression)];
    let mut values: Vec<Value> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Expression::Binary(binary)) => {
                steps.push(Step::Apply(binary));
                steps.push(Step::Visit(&binary.right));
                steps.push(Step::Visit(&binary.left));
            },
            Step::Visit(Expression::NumericLiteral { value, .. }) => values.push(Value::from(*value)),
            Step::Visit(Expression::NullLiteral { .. }) => values.push(NULL),
            Step::Visit(node @ Expression::Identifier(_)) => {
                return Err(EvalError::UnsupportedConstruct {
                    kind: node.kind(),
                    location: node.location()
                })
            },
            Step::Apply(binary) => {
                let right = values.pop();
                let left = values.pop();

                match left.zip(right) {
                    Some((left, right)) => values.push(eval_infix(binary, left, right)?),
                    None => unreachable!("operands are evaluated before their operator"),
                }
            },
        }
    }

    match values.pop() {
        Some(value) => Ok(value),
        None => unreachable!("a tree always reduces to one value"),
    }
}

fn eval_infix(infix: &BinaryExpression, left: Value, right: Value) -> Result<Value, EvalError> {
    match (left, right) {
        (
            Value::Number { value: left_value },
            Value::Number { value: right_value }
        ) => eval_numeric_infix(infix, left_value, right_value),
        // Operators are only defined over numbers.
        _ => Ok(NULL)
    }
}

fn eval_numeric_infix(infix: &BinaryExpression, left: f64, right: f64) -> Result<Value, EvalError> {
    let value = match infix.operator {
        BinaryOperator::Plus => Value::from(left + right),
        BinaryOperator::Minus => Value::from(left - right),
        BinaryOperator::Mult => Value::from(left * right),
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero { location: infix.right.location() });
            }

            Value::from(left / right)
        },
        BinaryOperator::Mod => Value::from(left % right),
        BinaryOperator::LessThan => Value::from(left < right),
        BinaryOperator::GreaterThan => Value::from(left > right),
        BinaryOperator::LessThanOrEqual => Value::from(left <= right),
        BinaryOperator::GreaterThanOrEqual => Value::from(left >= right),
        BinaryOperator::Equal => Value::from(left == right),
        BinaryOperator::NotEqual => Value::from(left != right),
    };

    Ok(value)
}
