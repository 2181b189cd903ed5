//! The Sprig execution engine.
//!
//! Walks the chunk trees produced by `sprig_chunk` and executes them
//! directly. The pieces:
//!
//! - [`Value`]: the closed set of runtime values and their total coercions.
//! - [`Memory`]: the process-wide symbol table, one name to one value.
//! - [`CallStack`]: the ordered record of active invocations.
//! - [`Flow`]: the control signal threaded back from every run, carrying
//!   returns and multi-level early exits.
//! - [`Engine`]: owns all of the above plus the reporter and console, and
//!   implements name resolution, argument evaluation and dispatch.
//! - [`builtins`]: the standard library, registered through the public
//!   [`ModuleDef`] contract.
//!
//! Algorithms receive eagerly evaluated values; structures receive their raw
//! head tokens and raw body chunks and drive evaluation themselves. See the
//! module docs on `engine` for the full dispatch contract.

pub mod builtins;
mod console;
mod engine;
mod flow;
mod frames;
mod memory;
mod registry;
mod value;

pub use console::{BufferConsole, Console};
pub use engine::{Engine, EngineMeta};
pub use flow::Flow;
pub use frames::{CallStack, Frame, FrameKind};
pub use memory::Memory;
pub use registry::{
    AlgorithmSpec, EngineFn, ModuleDef, Native, RichFn, Session, SimpleFn, StructureFn,
    StructureSpec,
};
pub use value::{
    AlgorithmBody, AlgorithmValue, CollectionValue, PacketValue, Primitive, StructureValue, Value,
};
