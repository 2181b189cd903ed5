//! Loop structures and the multi-level early exit.
//!
//! Head tokens are evaluated with `no_var` so a bare `i` names the index
//! variable instead of reading it. The index variable shadows any prior
//! binding for the loop's duration and is restored (or removed, if it was
//! unbound before) afterwards, including when the loop ends on an early
//! exit or a result.

use sprig_diagnostic::ErrorCode;
use sprig_ir::Chunk;

use crate::engine::Engine;
use crate::flow::Flow;
use crate::registry::{ModuleDef, StructureSpec};
use crate::value::Value;

pub static MODULE: ModuleDef = ModuleDef {
    name: "loops",
    algorithms: &[],
    structures: &[
        StructureSpec {
            names: &["withdraw"],
            handler: withdraw,
            help: "Exits the given number of enclosing processes (default 1).",
        },
        StructureSpec {
            names: &["repeat"],
            handler: repeat,
            help: "Runs its body N times, optionally binding an index variable.",
        },
        StructureSpec {
            names: &["forever"],
            handler: forever,
            help: "Runs its body until exited, optionally binding an index variable.",
        },
    ],
};

/// `withdraw(n)` exits `n` processes beyond its own call: `withdraw(1)`
/// inside a loop body ends the loop itself, `withdraw(0)` only the current
/// iteration's remaining siblings.
fn withdraw(engine: &mut Engine, _body: &[Chunk], tokens: &[String]) -> Flow {
    let mut count: i64 = 1;
    if !tokens.is_empty() {
        let (values, flow) = engine.evaluate_tokens(tokens, true);
        if !flow.is_continue() {
            return flow;
        }
        if let Some(first) = values.first() {
            count = first.to_number();
        }
    }
    if count < 0 {
        engine
            .reporter()
            .error(ErrorCode::E3004, "process level can not be negative");
        return Flow::Continue;
    }
    // The stack currently includes this withdraw call's own frame.
    if engine.stack().depth() - 1 < count as usize {
        engine
            .reporter()
            .error(ErrorCode::E3004, "can not exit from non existent process");
        return Flow::Continue;
    }
    Flow::Exit(count as usize)
}

fn repeat(engine: &mut Engine, body: &[Chunk], tokens: &[String]) -> Flow {
    if tokens.is_empty() {
        loop {
            let flow = engine.run(body);
            if !flow.is_continue() {
                return flow;
            }
        }
    }
    let (values, flow) = engine.evaluate_tokens(tokens, true);
    if !flow.is_continue() {
        return flow;
    }
    let amount = values.first().map_or(0, Value::to_number);
    let index_var = values.get(1).map(Value::to_text);
    let prior = index_var
        .as_ref()
        .map(|name| engine.memory().get(name).cloned());

    let mut flow = Flow::Continue;
    for index in 0..amount.max(0) {
        if let Some(name) = &index_var {
            engine.memory_mut().set(name.clone(), Value::Number(index));
        }
        flow = engine.run(body);
        if !flow.is_continue() {
            break;
        }
    }
    if let Some(name) = &index_var {
        engine.memory_mut().restore(name, prior.flatten());
    }
    flow
}

fn forever(engine: &mut Engine, body: &[Chunk], tokens: &[String]) -> Flow {
    if tokens.is_empty() {
        loop {
            let flow = engine.run(body);
            if !flow.is_continue() {
                return flow;
            }
        }
    }
    let (values, flow) = engine.evaluate_tokens(tokens, true);
    if !flow.is_continue() {
        return flow;
    }
    let index_var = values.first().map(Value::to_text);
    let prior = index_var
        .as_ref()
        .map(|name| engine.memory().get(name).cloned());

    let mut index: i64 = 0;
    let flow = loop {
        if let Some(name) = &index_var {
            engine.memory_mut().set(name.clone(), Value::Number(index));
        }
        let flow = engine.run(body);
        if !flow.is_continue() {
            break flow;
        }
        index += 1;
    };
    if let Some(name) = &index_var {
        engine.memory_mut().restore(name, prior.flatten());
    }
    flow
}
