//! Console input and output.

use crate::registry::{AlgorithmSpec, ModuleDef, Native, Session};
use crate::value::Value;

pub static MODULE: ModuleDef = ModuleDef {
    name: "io",
    algorithms: &[
        AlgorithmSpec {
            names: &["out"],
            native: Native::Rich(out),
            help: "Prints its arguments to the console.",
        },
        AlgorithmSpec {
            names: &["input"],
            native: Native::Rich(input),
            help: "Prints its arguments as a prompt and reads one console line.",
        },
    ],
    structures: &[],
};

// Arguments are joined with no separator, like every other text
// concatenation in the language.
fn out(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    let text: String = args.iter().map(Value::to_text).collect();
    session.console.println(&text);
    None
}

fn input(session: &Session<'_>, args: &[Value]) -> Option<Value> {
    let prompt: String = args.iter().map(Value::to_text).collect();
    session.console.print(&prompt);
    Some(Value::Text(session.console.read_line()))
}
