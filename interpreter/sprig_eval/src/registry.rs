//! Registration contracts for built-in algorithms and structures.
//!
//! Collaborator modules describe their callables in static tables and the
//! engine installs them into the symbol table under every alias. Three
//! native calling conventions exist:
//!
//! - **Simple**: already-coerced primitive payloads in, optional primitive
//!   out. No engine access.
//! - **Rich**: full values plus a [`Session`] handle for diagnostics and
//!   console output.
//! - **Engine**: full values plus the mutable engine, for callables that
//!   need the call stack or engine metadata.
//!
//! Structures get a fourth shape: the mutable engine, the raw body chunks,
//! and the raw head tokens, returning a [`Flow`].

use std::rc::Rc;

use sprig_diagnostic::Reporter;
use sprig_ir::Chunk;

use crate::console::Console;
use crate::engine::Engine;
use crate::flow::Flow;
use crate::memory::Memory;
use crate::value::{AlgorithmBody, AlgorithmValue, Primitive, StructureValue, Value};

/// Diagnostics and console access handed to rich natives.
pub struct Session<'a> {
    pub reporter: &'a Reporter,
    pub console: &'a Console,
}

pub type SimpleFn = fn(&[Primitive]) -> Option<Primitive>;
pub type RichFn = fn(&Session<'_>, &[Value]) -> Option<Value>;
pub type EngineFn = fn(&mut Engine, &[Value]) -> Option<Value>;
pub type StructureFn = fn(&mut Engine, &[Chunk], &[String]) -> Flow;

/// A native algorithm body and its calling convention.
#[derive(Copy, Clone, Debug)]
pub enum Native {
    Simple(SimpleFn),
    Rich(RichFn),
    Engine(EngineFn),
}

/// One built-in algorithm: primary name first, then aliases.
pub struct AlgorithmSpec {
    pub names: &'static [&'static str],
    pub native: Native,
    pub help: &'static str,
}

/// One built-in structure: primary name first, then aliases.
pub struct StructureSpec {
    pub names: &'static [&'static str],
    pub handler: StructureFn,
    pub help: &'static str,
}

/// A group of related built-ins, installed as a unit.
pub struct ModuleDef {
    pub name: &'static str,
    pub algorithms: &'static [AlgorithmSpec],
    pub structures: &'static [StructureSpec],
}

/// Install a module's callables under every alias.
pub(crate) fn install(module: &ModuleDef, memory: &mut Memory) {
    for spec in module.algorithms {
        let value = Value::Algorithm(Rc::new(AlgorithmValue {
            name: spec.names[0].to_string(),
            body: AlgorithmBody::Native(spec.native),
            help: spec.help.to_string(),
            args_collection: None,
        }));
        for alias in spec.names {
            memory.set(*alias, value.clone());
        }
    }
    for spec in module.structures {
        let value = Value::Structure(Rc::new(StructureValue {
            name: spec.names[0].to_string(),
            handler: spec.handler,
            help: spec.help.to_string(),
        }));
        for alias in spec.names {
            memory.set(*alias, value.clone());
        }
    }
}
