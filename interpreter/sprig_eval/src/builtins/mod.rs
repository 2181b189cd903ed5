//! The standard library: the callables every engine starts with.
//!
//! Each module describes its algorithms and structures in a static
//! [`ModuleDef`] table and the engine installs them under every alias.
//! The calling conventions are documented in [`crate::registry`].

use crate::engine::Engine;
use crate::registry::ModuleDef;

pub mod comments;
pub mod io;
pub mod logic;
pub mod loops;
pub mod maths;
pub mod operations;
pub mod system;
pub mod variables;

/// Every standard module, in installation order. Later modules win alias
/// collisions, of which there are currently none.
pub fn modules() -> [&'static ModuleDef; 8] {
    [
        &comments::MODULE,
        &io::MODULE,
        &variables::MODULE,
        &system::MODULE,
        &operations::MODULE,
        &maths::MODULE,
        &loops::MODULE,
        &logic::MODULE,
    ]
}

pub fn install_all(engine: &mut Engine) {
    for module in modules() {
        engine.install(module);
    }
}
