//! The execution engine.
//!
//! One [`Engine`] owns the symbol table, the call stack, the diagnostic
//! reporter, the console sink, and the interpreter metadata, and is threaded
//! mutably through every operation.
//!
//! # Dispatch contract
//!
//! A head line splits on its first `(`: the name before it resolves through
//! the symbol table, the text inside the parentheses is the destination
//! variable for algorithms and the raw argument text for structures.
//!
//! - **Algorithms** get their body chunks eagerly evaluated to values
//!   before their native or source body runs. A lazy `callee(...)` token is
//!   the one deferral: it is forced at dispatch, not at evaluation.
//! - **Structures** get the raw token list and the raw body chunks and
//!   decide themselves what to evaluate and how often.
//!
//! Every invocation pushes a frame and, on the way out, pops it and applies
//! [`Flow::unwind`], which is what makes `withdraw(n)` unwind exactly `n`
//! further boundaries. Algorithm boundaries additionally consume
//! [`Flow::Return`] as the call's result.
//!
//! A bare line with no parenthesis and no body is an inspection request: a
//! known name prints a short description through the console, an unknown
//! one is an undefined-object error.

use std::rc::Rc;

use sprig_chunk::Chunker;
use sprig_diagnostic::{ErrorCode, Reporter};
use sprig_ir::Chunk;
use sprig_stack::ensure_headroom;

use crate::builtins;
use crate::console::Console;
use crate::flow::Flow;
use crate::frames::{CallStack, Frame, FrameKind};
use crate::memory::Memory;
use crate::registry::{self, ModuleDef, Native, Session};
use crate::value::{AlgorithmBody, AlgorithmValue, CollectionValue, StructureValue, Value};

mod literal;
use literal::{parse_literal, split_head, split_tokens};

/// Interpreter identity, surfaced by the `version` built-in.
pub struct EngineMeta {
    pub name: String,
    /// Labeled version components, joined by `.` in display order.
    pub version: Vec<(String, String)>,
}

impl Default for EngineMeta {
    fn default() -> Self {
        let version = ["major", "minor", "patch"]
            .iter()
            .zip(env!("CARGO_PKG_VERSION").split('.'))
            .map(|(label, part)| ((*label).to_string(), part.to_string()))
            .collect();
        EngineMeta {
            name: "Sprig".to_string(),
            version,
        }
    }
}

/// An evaluated argument: a value, or a deferred `callee(...)` token the
/// callee forces at dispatch.
enum EvalArg {
    Value(Value),
    Lazy(String),
}

/// A resolved head line.
struct Invocation {
    name: String,
    paren: Option<String>,
    callee: Callee,
}

enum Callee {
    Algorithm(Rc<AlgorithmValue>),
    Structure(Rc<StructureValue>),
}

pub struct Engine {
    memory: Memory,
    stack: CallStack,
    reporter: Rc<Reporter>,
    console: Console,
    meta: EngineMeta,
}

impl Engine {
    /// An engine with an empty symbol table.
    pub fn new(reporter: Rc<Reporter>, console: Console) -> Self {
        Engine {
            memory: Memory::new(),
            stack: CallStack::new(),
            reporter,
            console,
            meta: EngineMeta::default(),
        }
    }

    /// An engine with the standard library installed.
    pub fn with_builtins(reporter: Rc<Reporter>, console: Console) -> Self {
        let mut engine = Engine::new(reporter, console);
        builtins::install_all(&mut engine);
        engine
    }

    /// Install a collaborator module's callables under every alias.
    pub fn install(&mut self, module: &ModuleDef) {
        registry::install(module, &mut self.memory);
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn stack(&self) -> &CallStack {
        &self.stack
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn meta(&self) -> &EngineMeta {
        &self.meta
    }

    pub fn set_meta(&mut self, meta: EngineMeta) {
        self.meta = meta;
    }

    fn session(&self) -> Session<'_> {
        Session {
            reporter: &self.reporter,
            console: &self.console,
        }
    }

    /// Execute a chunk list in order, stopping at the first non-continue
    /// flow.
    pub fn run(&mut self, chunks: &[Chunk]) -> Flow {
        for chunk in chunks {
            let flow = match chunk {
                Chunk::Block { head, body } => self.run_chunk(head, body).0,
                Chunk::Line(line) if line.contains('(') => self.run_chunk(line, &[]).0,
                Chunk::Line(line) => {
                    self.inspect(line);
                    Flow::Continue
                }
            };
            if !flow.is_continue() {
                return flow;
            }
        }
        Flow::Continue
    }

    /// Resolve and invoke one head/body pair. An algorithm's result is
    /// stored under the head's destination variable when one was named;
    /// structures never produce a storable value.
    pub fn run_chunk(&mut self, head: &str, body: &[Chunk]) -> (Flow, Option<Value>) {
        let Some(invocation) = self.resolve_head(head) else {
            return (Flow::Continue, None);
        };
        match &invocation.callee {
            Callee::Algorithm(alg) => {
                let alg = Rc::clone(alg);
                let (flow, result) = self.invoke_algorithm(&invocation, &alg, body);
                if let (Some(store), Some(value)) = (&invocation.paren, &result) {
                    self.memory.set(store.clone(), value.clone());
                }
                (flow, result)
            }
            Callee::Structure(st) => {
                let st = Rc::clone(st);
                (self.invoke_structure(&invocation, &st, body), None)
            }
        }
    }

    /// Evaluate body chunks to values, forcing any lazy tokens. The
    /// entry point for structures that evaluate their body.
    pub fn evaluate_values(&mut self, args: &[Chunk], no_var: bool) -> (Vec<Value>, Flow) {
        let (raw, flow) = self.evaluate_args(args, no_var);
        if !flow.is_continue() {
            let values = raw
                .into_iter()
                .filter_map(|arg| match arg {
                    EvalArg::Value(value) => Some(value),
                    EvalArg::Lazy(_) => None,
                })
                .collect();
            return (values, flow);
        }
        self.force_args(raw)
    }

    /// Evaluate raw head tokens to values. The entry point for structures
    /// that evaluate their parenthesis text.
    pub fn evaluate_tokens(&mut self, tokens: &[String], no_var: bool) -> (Vec<Value>, Flow) {
        let chunks: Vec<Chunk> = tokens.iter().map(|t| Chunk::line(t.as_str())).collect();
        self.evaluate_values(&chunks, no_var)
    }

    /// Convert raw argument chunks into values and deferred lazy tokens.
    ///
    /// - A nested chunk whose head resolves is invoked recursively; an
    ///   unresolved head is an undefined-algorithm error and contributes
    ///   nothing.
    /// - A bare token resolves in order: symbol table name (unless
    ///   `no_var`), literal, lazy `callee(...)` token, and otherwise an
    ///   undefined-value error, or a force-wrapped text literal when
    ///   `no_var`.
    fn evaluate_args(&mut self, args: &[Chunk], no_var: bool) -> (Vec<EvalArg>, Flow) {
        let mut evaluated = Vec::new();
        for arg in args {
            match arg {
                Chunk::Block { head, body } => {
                    let (flow, value) = self.run_chunk(head, body);
                    if let Some(value) = value {
                        evaluated.push(EvalArg::Value(value));
                    }
                    if !flow.is_continue() {
                        return (evaluated, flow);
                    }
                }
                Chunk::Line(token) => {
                    if !no_var {
                        if let Some(value) = self.memory.get(token) {
                            evaluated.push(EvalArg::Value(value.clone()));
                            continue;
                        }
                    }
                    if let Some(value) = parse_literal(token) {
                        evaluated.push(EvalArg::Value(value));
                        continue;
                    }
                    if token.contains('(') && self.is_callable(split_head(token).0) {
                        evaluated.push(EvalArg::Lazy(token.clone()));
                        continue;
                    }
                    if no_var {
                        evaluated.push(EvalArg::Value(Value::Text(token.clone())));
                    } else {
                        self.reporter
                            .error(ErrorCode::E2003, format!("undefined value: {token}"));
                    }
                }
            }
        }
        (evaluated, Flow::Continue)
    }

    /// Force deferred lazy tokens, in order.
    fn force_args(&mut self, raw: Vec<EvalArg>) -> (Vec<Value>, Flow) {
        let mut values = Vec::new();
        for arg in raw {
            match arg {
                EvalArg::Value(value) => values.push(value),
                EvalArg::Lazy(token) => {
                    let (flow, value) = self.run_chunk(&token, &[]);
                    if let Some(value) = value {
                        values.push(value);
                    }
                    if !flow.is_continue() {
                        return (values, flow);
                    }
                }
            }
        }
        (values, Flow::Continue)
    }

    fn is_callable(&self, name: &str) -> bool {
        matches!(
            self.memory.get(name),
            Some(Value::Algorithm(_) | Value::Structure(_))
        )
    }

    /// Resolve a head line to an invocable, reporting why when it is not
    /// one.
    fn resolve_head(&self, head: &str) -> Option<Invocation> {
        let (name, paren) = split_head(head);
        if name.is_empty() {
            self.reporter
                .error(ErrorCode::E0001, "instruction with no name");
            return None;
        }
        let callee = match self.memory.get(name) {
            Some(Value::Algorithm(alg)) => Callee::Algorithm(Rc::clone(alg)),
            Some(Value::Structure(st)) => Callee::Structure(Rc::clone(st)),
            Some(other) => {
                self.reporter.error(
                    ErrorCode::E2002,
                    format!("`{name}` is not an algorithm, but {}", other.type_name()),
                );
                return None;
            }
            None => {
                self.reporter
                    .error(ErrorCode::E2002, format!("undefined algorithm: {name}"));
                return None;
            }
        };
        Some(Invocation {
            name: name.to_string(),
            paren: paren.map(str::to_string),
            callee,
        })
    }

    fn invoke_algorithm(
        &mut self,
        invocation: &Invocation,
        alg: &AlgorithmValue,
        body: &[Chunk],
    ) -> (Flow, Option<Value>) {
        self.stack.push(Frame {
            kind: FrameKind::Algorithm,
            name: invocation.name.clone(),
            store: invocation.paren.clone(),
        });
        let (flow, result) = ensure_headroom(|| self.algorithm_dispatch(alg, body));
        self.stack.pop();
        match flow {
            // A return surfacing here came out of argument evaluation; the
            // nearest algorithm boundary consumes it either way.
            Flow::Return(value) => (Flow::Continue, Some(value)),
            other => (other.unwind(), result),
        }
    }

    fn algorithm_dispatch(
        &mut self,
        alg: &AlgorithmValue,
        body: &[Chunk],
    ) -> (Flow, Option<Value>) {
        let (raw, flow) = self.evaluate_args(body, false);
        if !flow.is_continue() {
            return (flow, None);
        }
        let (args, flow) = self.force_args(raw);
        if !flow.is_continue() {
            return (flow, None);
        }
        match &alg.body {
            AlgorithmBody::Native(native) => {
                let result = match native {
                    Native::Simple(f) => {
                        let primitives: Vec<_> =
                            args.iter().map(Value::to_primitive).collect();
                        f(&primitives).map(Value::from_primitive)
                    }
                    Native::Rich(f) => f(&self.session(), &args),
                    Native::Engine(f) => f(self, &args),
                };
                (Flow::Continue, Some(result.unwrap_or(Value::Void)))
            }
            AlgorithmBody::Source(source) => self.run_source_body(alg, source, args),
        }
    }

    /// Run a user-defined body: re-chunk the stored source, bind the forced
    /// arguments as a collection under the recorded name for the call's
    /// duration, and consume the body's return as the result.
    fn run_source_body(
        &mut self,
        alg: &AlgorithmValue,
        source: &str,
        args: Vec<Value>,
    ) -> (Flow, Option<Value>) {
        if source.trim().is_empty() {
            return (Flow::Continue, Some(Value::Void));
        }
        let reporter = Rc::clone(&self.reporter);
        let chunks = Chunker::new(&reporter).decode(source);
        let shadowed = alg.args_collection.as_ref().map(|name| {
            let collection = Value::Collection(CollectionValue::auto_indexed(args));
            (name.clone(), self.memory.shadow(name.clone(), collection))
        });
        let flow = self.run(&chunks);
        if let Some((name, prior)) = shadowed {
            self.memory.restore(&name, prior);
        }
        match flow {
            Flow::Return(value) => (Flow::Continue, Some(value)),
            other => (other, Some(Value::Void)),
        }
    }

    fn invoke_structure(
        &mut self,
        invocation: &Invocation,
        st: &StructureValue,
        body: &[Chunk],
    ) -> Flow {
        self.stack.push(Frame {
            kind: FrameKind::Structure,
            name: invocation.name.clone(),
            store: invocation.paren.clone(),
        });
        let tokens = invocation
            .paren
            .as_deref()
            .map(split_tokens)
            .unwrap_or_default();
        let flow = ensure_headroom(|| (st.handler)(self, body, &tokens));
        self.stack.pop();
        flow.unwind()
    }

    /// Describe a known name through the console, or report an
    /// undefined-object error.
    fn inspect(&self, name: &str) {
        match self.memory.get(name) {
            Some(value) => {
                let detail = match value {
                    Value::Algorithm(alg) => format!("DESCRIPTION: {}", alg.help),
                    Value::Structure(st) => format!("DESCRIPTION: {}", st.help),
                    other => format!("VALUE: {}", other.to_text()),
                };
                self.console.println(&format!(
                    "--- {name} ---\nTYPE: {}\n{detail}",
                    value.type_name()
                ));
            }
            None => {
                self.reporter.error(
                    ErrorCode::E2001,
                    format!("unknown object/algorithm: {name}"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests;
