//! Variable and algorithm definition.
//!
//! `var` is engine-flagged because the destination name lives on the current
//! call-stack frame, not in the argument list. The type shorthands combine
//! their arguments with the type's natural fold (concatenation, sum,
//! conjunction) and rely on the generic store step for the actual binding.
//!
//! `alg` captures its body as re-parseable source text via the chunker's
//! inverse transform, so every later call re-chunks it fresh.

use std::rc::Rc;

use sprig_chunk::encode;
use sprig_diagnostic::ErrorCode;
use sprig_ir::Chunk;

use crate::engine::Engine;
use crate::flow::Flow;
use crate::registry::{AlgorithmSpec, ModuleDef, Native, Session, StructureSpec};
use crate::value::{AlgorithmBody, AlgorithmValue, CollectionValue, PacketValue, Value};

pub static MODULE: ModuleDef = ModuleDef {
    name: "variables",
    algorithms: &[
        AlgorithmSpec {
            names: &["var"],
            native: Native::Engine(var),
            help: "Creates a variable of the given type, optionally initialized.",
        },
        AlgorithmSpec {
            names: &["text", "string", "str"],
            native: Native::Rich(text),
            help: "Creates a Text value by concatenating its arguments.",
        },
        AlgorithmSpec {
            names: &["number", "num", "int"],
            native: Native::Rich(number),
            help: "Creates a Number value by summing its arguments.",
        },
        AlgorithmSpec {
            names: &["decimal", "float"],
            native: Native::Rich(decimal),
            help: "Creates a Decimal value by summing its arguments.",
        },
        AlgorithmSpec {
            names: &["binary", "boolean", "bool", "bin"],
            native: Native::Rich(binary),
            help: "Creates a Binary value from the conjunction of its arguments.",
        },
        AlgorithmSpec {
            names: &["void"],
            native: Native::Rich(void),
            help: "Creates a Void value.",
        },
        AlgorithmSpec {
            names: &["collection"],
            native: Native::Rich(collection),
            help: "Creates a Collection; kv packets provide keys, other items auto-index.",
        },
        AlgorithmSpec {
            names: &["kv", "kvp"],
            native: Native::Rich(kv),
            help: "Creates a key/value packet from its first two arguments.",
        },
    ],
    structures: &[
        StructureSpec {
            names: &["alg", "algorithm", "def", "define", "func", "function"],
            handler: algorithm,
            help: "Defines an algorithm with the body as its code.",
        },
        StructureSpec {
            names: &["result", "return"],
            handler: result,
            help: "Ends the enclosing algorithm call with an optional value.",
        },
    ],
};

fn var(engine: &mut Engine, args: &[Value]) -> Option<Value> {
    if engine.stack().current_store().is_none() {
        engine
            .reporter()
            .error(ErrorCode::E3001, "name required to create a variable");
        return None;
    }
    let Some(kind) = args.first() else {
        engine
            .reporter()
            .error(ErrorCode::E3001, "type required to create a variable");
        return None;
    };
    let initial = args.get(1);
    let kind = kind.to_text();
    let value = match kind.as_str() {
        "TEXT" | "Text" | "text" => Value::Text(initial.map(Value::to_text).unwrap_or_default()),
        "NUMBER" | "Number" | "number" => Value::Number(initial.map_or(0, Value::to_number)),
        "DECIMAL" | "Decimal" | "decimal" => {
            Value::Decimal(initial.map_or(0.0, Value::to_decimal))
        }
        "BINARY" | "Binary" | "binary" => Value::Binary(initial.is_some_and(Value::to_binary)),
        "VOID" | "Void" | "void" | "NONE" | "NOTHING" | "EMPTY" => Value::Void,
        unknown => {
            engine
                .reporter()
                .error(ErrorCode::E3003, format!("unknown type: {unknown}"));
            return None;
        }
    };
    Some(value)
}

fn text(_session: &Session<'_>, args: &[Value]) -> Option<Value> {
    Some(Value::Text(args.iter().map(Value::to_text).collect()))
}

fn number(_session: &Session<'_>, args: &[Value]) -> Option<Value> {
    Some(Value::Number(args.iter().map(Value::to_number).sum()))
}

fn decimal(_session: &Session<'_>, args: &[Value]) -> Option<Value> {
    Some(Value::Decimal(args.iter().map(Value::to_decimal).sum()))
}

fn binary(_session: &Session<'_>, args: &[Value]) -> Option<Value> {
    Some(Value::Binary(
        !args.is_empty() && args.iter().all(Value::to_binary),
    ))
}

fn void(_session: &Session<'_>, _args: &[Value]) -> Option<Value> {
    Some(Value::Void)
}

/// Keyed entries first, then positional items filling the unused integer
/// keys. A packet keyed `connector` sets the text-join separator instead of
/// becoming an entry.
fn collection(_session: &Session<'_>, args: &[Value]) -> Option<Value> {
    let mut built = CollectionValue::default();
    let mut positional = Vec::new();
    for arg in args {
        match arg {
            Value::Packet(packet) if packet.key.to_text() == "connector" => {
                built.set_connector(packet.value.to_text());
            }
            Value::Packet(packet) => built.push_keyed(packet.key.clone(), packet.value.clone()),
            other => positional.push(other.clone()),
        }
    }
    for item in positional {
        built.push_auto(item);
    }
    Some(Value::Collection(built))
}

fn kv(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    if args.is_empty() {
        session
            .reporter
            .error(ErrorCode::E3001, "name required for kv packet");
        return None;
    }
    let Some(value) = args.get(1) else {
        session
            .reporter
            .error(ErrorCode::E3001, "value required for kv packet");
        return None;
    };
    Some(Value::Packet(Box::new(PacketValue {
        key: args[0].clone(),
        value: value.clone(),
    })))
}

fn algorithm(engine: &mut Engine, body: &[Chunk], tokens: &[String]) -> Flow {
    if tokens.is_empty() {
        engine
            .reporter()
            .error(ErrorCode::E3001, "algorithm name required");
        return Flow::Continue;
    }
    let (values, flow) = engine.evaluate_tokens(tokens, true);
    if !flow.is_continue() {
        return flow;
    }
    let Some(first) = values.first() else {
        return Flow::Continue;
    };
    let name = first.to_text();
    let args_collection = values.get(1).map(Value::to_text);
    let source = encode(body, "\t", "\n");
    engine.memory_mut().set(
        name.clone(),
        Value::Algorithm(Rc::new(AlgorithmValue {
            name,
            body: AlgorithmBody::Source(source),
            help: String::new(),
            args_collection,
        })),
    );
    Flow::Continue
}

fn result(engine: &mut Engine, body: &[Chunk], _tokens: &[String]) -> Flow {
    let (mut values, flow) = engine.evaluate_values(body, false);
    if !flow.is_continue() {
        return flow;
    }
    if !engine.stack().has_algorithm_frame() {
        engine
            .reporter()
            .error(ErrorCode::E3004, "cannot result out of an algorithm");
        return Flow::Continue;
    }
    if values.len() > 1 {
        engine
            .reporter()
            .error(ErrorCode::E3002, "can result at most one value only");
        return Flow::Continue;
    }
    Flow::Return(values.pop().unwrap_or(Value::Void))
}
