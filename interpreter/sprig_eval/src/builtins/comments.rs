//! Comments: a structure that swallows its body unevaluated.

use sprig_ir::Chunk;

use crate::engine::Engine;
use crate::flow::Flow;
use crate::registry::{ModuleDef, StructureSpec};

pub static MODULE: ModuleDef = ModuleDef {
    name: "comments",
    algorithms: &[],
    structures: &[StructureSpec {
        names: &["ignore", "?", "...", "$", ">>>", "comment"],
        handler: ignore,
        help: "Ignores its body entirely.",
    }],
};

fn ignore(_engine: &mut Engine, _body: &[Chunk], _tokens: &[String]) -> Flow {
    Flow::Continue
}
