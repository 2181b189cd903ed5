//! Interpreter introspection and process control.

use sprig_diagnostic::ErrorCode;

use crate::engine::Engine;
use crate::registry::{AlgorithmSpec, ModuleDef, Native, Session};
use crate::value::{AlgorithmBody, CollectionValue, Primitive, Value};

pub static MODULE: ModuleDef = ModuleDef {
    name: "system",
    algorithms: &[
        AlgorithmSpec {
            names: &["version", "ver"],
            native: Native::Engine(version),
            help: "The interpreter version as a dot-joined collection.",
        },
        AlgorithmSpec {
            names: &["info", "help"],
            native: Native::Rich(info),
            help: "Describes a value: name, type, help text, and value.",
        },
        AlgorithmSpec {
            names: &["end", "exit", "quit"],
            native: Native::Simple(end),
            help: "Ends the program.",
        },
    ],
    structures: &[],
};

fn version(engine: &mut Engine, _args: &[Value]) -> Option<Value> {
    let entries = engine
        .meta()
        .version
        .iter()
        .map(|(label, part)| (Value::Text(label.clone()), Value::Text(part.clone())))
        .collect();
    Some(Value::Collection(CollectionValue::new(entries, ".")))
}

fn info(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    let Some(value) = args.first() else {
        session
            .reporter
            .error(ErrorCode::E3001, "need an object to get data");
        return None;
    };
    let (name, help) = match value {
        Value::Algorithm(alg) => (alg.name.clone(), alg.help.clone()),
        Value::Structure(st) => (st.name.clone(), st.help.clone()),
        _ => (String::new(), String::new()),
    };
    // User-defined algorithms show their captured source; built-ins have
    // their help text instead.
    let shown = match value {
        Value::Algorithm(alg) => match &alg.body {
            AlgorithmBody::Source(source) => source.clone(),
            AlgorithmBody::Native(_) => String::new(),
        },
        Value::Structure(_) => String::new(),
        other => other.to_text(),
    };
    let fields = [
        ("name", name),
        ("type", value.type_name().to_string()),
        ("help", help),
        ("value", shown),
    ];
    let entries = fields
        .into_iter()
        .filter(|(_, text)| !text.is_empty())
        .map(|(key, text)| (Value::Text(key.to_string()), Value::Text(text)))
        .collect();
    Some(Value::Collection(CollectionValue::new(entries, "\n")))
}

fn end(_args: &[Primitive]) -> Option<Primitive> {
    std::process::exit(0)
}
