//! General value operations: concatenation, length, reversal, inversion,
//! and keyed lookup.

use sprig_diagnostic::ErrorCode;

use crate::registry::{AlgorithmSpec, ModuleDef, Native, Session};
use crate::value::{CollectionValue, Value};

pub static MODULE: ModuleDef = ModuleDef {
    name: "operations",
    algorithms: &[
        AlgorithmSpec {
            names: &["concatenate", "concat", ".."],
            native: Native::Rich(concatenate),
            help: "Joins the texts of its arguments.",
        },
        AlgorithmSpec {
            names: &["length", "len", "#"],
            native: Native::Rich(length),
            help: "The character count of one value's text.",
        },
        AlgorithmSpec {
            names: &["reverse"],
            native: Native::Rich(reverse),
            help: "Reverses a text, or a collection's entries.",
        },
        AlgorithmSpec {
            names: &["invert", "not"],
            native: Native::Rich(invert),
            help: "The inverted binary value of one argument.",
        },
        AlgorithmSpec {
            names: &["item", "[]", "@"],
            native: Native::Rich(item),
            help: "Looks an item up by key; texts index their characters.",
        },
    ],
    structures: &[],
};

fn concatenate(_session: &Session<'_>, args: &[Value]) -> Option<Value> {
    Some(Value::Text(args.iter().map(Value::to_text).collect()))
}

fn length(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    match args {
        [] => Some(Value::Number(0)),
        [value] => Some(Value::Number(value.to_text().chars().count() as i64)),
        _ => {
            session
                .reporter
                .error(ErrorCode::E3002, "length can be used for one value only");
            None
        }
    }
}

fn reverse(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    match args {
        [] => Some(Value::Text(String::new())),
        [Value::Collection(collection)] => Some(Value::Collection(collection.reversed())),
        [value] => Some(Value::Text(value.to_text().chars().rev().collect())),
        _ => {
            session
                .reporter
                .error(ErrorCode::E3002, "only one value can be reversed");
            None
        }
    }
}

fn invert(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    match args {
        [] => Some(Value::Binary(true)),
        [value] => Some(Value::Binary(!value.to_binary())),
        _ => {
            session
                .reporter
                .error(ErrorCode::E3002, "only one value can be inverted");
            None
        }
    }
}

fn item(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    let (target, key) = match args {
        [] => {
            session
                .reporter
                .error(ErrorCode::E3001, "object required to get item");
            return None;
        }
        [_] => {
            session
                .reporter
                .error(ErrorCode::E3001, "index required to get item");
            return None;
        }
        [target, key] => (target, key),
        _ => {
            session
                .reporter
                .error(ErrorCode::E3002, "only one index can be passed");
            return None;
        }
    };
    if matches!(key, Value::Collection(_)) {
        session
            .reporter
            .error(ErrorCode::E3003, "index can not be a collection");
        return None;
    }
    let found = match target {
        Value::Collection(collection) => collection.get(key).cloned(),
        other => CollectionValue::from_chars(&other.to_text()).get(key).cloned(),
    };
    if found.is_none() {
        session.reporter.error(ErrorCode::E4001, "invalid index");
    }
    found
}
