//! Conditionals and comparisons.
//!
//! Equality is polymorphic: when every argument's text round-trips through
//! its numeric coercion, the arguments compare as decimals, so `5`, `5.0`,
//! and `'5'` are all equal. One non-numeric argument switches the whole
//! comparison to text. The ordering comparisons always compare decimals.

use sprig_diagnostic::ErrorCode;
use sprig_ir::Chunk;

use crate::engine::Engine;
use crate::flow::Flow;
use crate::registry::{AlgorithmSpec, ModuleDef, Native, Session, StructureSpec};
use crate::value::{format_decimal, Value};

pub static MODULE: ModuleDef = ModuleDef {
    name: "logic",
    algorithms: &[
        AlgorithmSpec {
            names: &["all", "and", "&&"],
            native: Native::Rich(all),
            help: "True when every argument is true; false with no arguments.",
        },
        AlgorithmSpec {
            names: &["any", "or", "||"],
            native: Native::Rich(any),
            help: "True when at least one argument is true.",
        },
        AlgorithmSpec {
            names: &["equal", "=="],
            native: Native::Rich(equal),
            help: "True when all arguments are equal.",
        },
        AlgorithmSpec {
            names: &["unequal", "!="],
            native: Native::Rich(unequal),
            help: "False when all arguments are equal.",
        },
        AlgorithmSpec {
            names: &["lesser", "<"],
            native: Native::Rich(lesser),
            help: "True when the first argument is less than the second.",
        },
        AlgorithmSpec {
            names: &["greater", ">"],
            native: Native::Rich(greater),
            help: "True when the first argument is greater than the second.",
        },
        AlgorithmSpec {
            names: &["notgreater", "lesser-or-equal", "<=", "!>"],
            native: Native::Rich(notgreater),
            help: "True when the first argument is at most the second.",
        },
        AlgorithmSpec {
            names: &["notlesser", "greater-or-equal", ">=", "!<"],
            native: Native::Rich(notlesser),
            help: "True when the first argument is at least the second.",
        },
    ],
    structures: &[StructureSpec {
        names: &["if", "condition"],
        handler: condition,
        help: "Runs its body when every head argument is true.",
    }],
};

fn condition(engine: &mut Engine, body: &[Chunk], tokens: &[String]) -> Flow {
    if tokens.is_empty() {
        engine
            .reporter()
            .error(ErrorCode::E3001, "conditional binary required");
        return Flow::Continue;
    }
    let (values, flow) = engine.evaluate_tokens(tokens, false);
    if !flow.is_continue() {
        return flow;
    }
    if !values.is_empty() && values.iter().all(Value::to_binary) {
        return engine.run(body);
    }
    Flow::Continue
}

fn all(_session: &Session<'_>, args: &[Value]) -> Option<Value> {
    Some(Value::Binary(
        !args.is_empty() && args.iter().all(Value::to_binary),
    ))
}

fn any(_session: &Session<'_>, args: &[Value]) -> Option<Value> {
    Some(Value::Binary(args.iter().any(Value::to_binary)))
}

fn equal(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    equality(session, args).map(Value::Binary)
}

fn unequal(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    equality(session, args).map(|eq| Value::Binary(!eq))
}

fn equality(session: &Session<'_>, args: &[Value]) -> Option<bool> {
    if args.len() < 2 {
        session
            .reporter
            .error(ErrorCode::E3001, "minimum two objects required");
        return None;
    }
    let numeric = args.iter().all(|arg| {
        let text = arg.to_text();
        text == arg.to_number().to_string() || text == format_decimal(arg.to_decimal())
    });
    Some(if numeric {
        let first = args[0].to_decimal();
        args.iter().all(|arg| arg.to_decimal() == first)
    } else {
        let first = args[0].to_text();
        args.iter().all(|arg| arg.to_text() == first)
    })
}

fn lesser(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    let (a, b) = comparands(session, args)?;
    Some(Value::Binary(a < b))
}

fn greater(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    let (a, b) = comparands(session, args)?;
    Some(Value::Binary(a > b))
}

fn notgreater(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    let (a, b) = comparands(session, args)?;
    Some(Value::Binary(a <= b))
}

fn notlesser(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    let (a, b) = comparands(session, args)?;
    Some(Value::Binary(a >= b))
}

fn comparands(session: &Session<'_>, args: &[Value]) -> Option<(f64, f64)> {
    match args {
        [] => {
            session
                .reporter
                .error(ErrorCode::E3001, "minimum two objects required");
            None
        }
        [_] => {
            session
                .reporter
                .error(ErrorCode::E3001, "require an object to compare from");
            None
        }
        [a, b] => Some((a.to_decimal(), b.to_decimal())),
        _ => {
            session.reporter.error(
                ErrorCode::E3002,
                "cannot compare from more than one object at a time",
            );
            None
        }
    }
}
