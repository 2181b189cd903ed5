//! Arithmetic. Everything coerces through decimals and produces a Decimal;
//! division and remainder follow IEEE 754, so dividing by zero yields an
//! infinity or NaN rather than an error.

use sprig_diagnostic::ErrorCode;

use crate::registry::{AlgorithmSpec, ModuleDef, Native, Session};
use crate::value::Value;

pub static MODULE: ModuleDef = ModuleDef {
    name: "maths",
    algorithms: &[
        AlgorithmSpec {
            names: &["add", "+"],
            native: Native::Rich(add),
            help: "The sum of its arguments.",
        },
        AlgorithmSpec {
            names: &["subtract", "-"],
            native: Native::Rich(subtract),
            help: "The first argument minus the second.",
        },
        AlgorithmSpec {
            names: &["multiply", "mult", "*"],
            native: Native::Rich(multiply),
            help: "The product of its arguments.",
        },
        AlgorithmSpec {
            names: &["divide", "quotient", "/"],
            native: Native::Rich(divide),
            help: "The first argument divided by the second.",
        },
        AlgorithmSpec {
            names: &["remainder", "modulo", "%"],
            native: Native::Rich(remainder),
            help: "The remainder of dividing the first argument by the second.",
        },
        AlgorithmSpec {
            names: &["power", "**", "^"],
            native: Native::Rich(power),
            help: "The first argument raised to the second.",
        },
        AlgorithmSpec {
            names: &["negate", "~"],
            native: Native::Rich(negate),
            help: "The negated decimal value of one argument.",
        },
    ],
    structures: &[],
};

fn add(_session: &Session<'_>, args: &[Value]) -> Option<Value> {
    Some(Value::Decimal(args.iter().map(Value::to_decimal).sum()))
}

fn multiply(_session: &Session<'_>, args: &[Value]) -> Option<Value> {
    Some(Value::Decimal(
        args.iter().map(Value::to_decimal).product(),
    ))
}

fn negate(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    match args {
        [] => Some(Value::Decimal(0.0)),
        [value] => Some(Value::Decimal(-value.to_decimal())),
        _ => {
            session
                .reporter
                .error(ErrorCode::E3002, "only one value can be negated");
            None
        }
    }
}

fn subtract(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    let (a, b) = operands(
        session,
        args,
        "require a subtrahend",
        "cannot have more than one subtrahend at a time",
    )?;
    Some(Value::Decimal(a - b))
}

fn divide(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    let (a, b) = operands(
        session,
        args,
        "require a divisor",
        "cannot have more than one divisor at a time",
    )?;
    Some(Value::Decimal(a / b))
}

fn remainder(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    let (a, b) = operands(
        session,
        args,
        "require a divisor",
        "cannot have more than one divisor at a time",
    )?;
    Some(Value::Decimal(a % b))
}

fn power(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    let (a, b) = operands(
        session,
        args,
        "require an exponent",
        "cannot have more than one exponent at a time",
    )?;
    Some(Value::Decimal(a.powf(b)))
}

/// Exactly-two-argument check shared by the non-commutative operations.
fn operands(
    session: &Session<'_>,
    args: &[Value],
    missing: &str,
    overflow: &str,
) -> Option<(f64, f64)> {
    match args {
        [] => {
            session
                .reporter
                .error(ErrorCode::E3001, "minimum two objects required");
            None
        }
        [_] => {
            session.reporter.error(ErrorCode::E3001, missing);
            None
        }
        [a, b] => Some((a.to_decimal(), b.to_decimal())),
        _ => {
            session.reporter.error(ErrorCode::E3002, overflow);
            None
        }
    }
}
