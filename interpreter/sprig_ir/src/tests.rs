use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_line_head_and_body() {
    let chunk = Chunk::line("out");
    assert_eq!(chunk.head(), "out");
    assert!(chunk.body().is_empty());
    assert!(!chunk.is_block());
}

#[test]
fn test_block_head_and_body() {
    let chunk = Chunk::block("repeat(3)", vec![Chunk::line("out")]);
    assert_eq!(chunk.head(), "repeat(3)");
    assert_eq!(chunk.body(), &[Chunk::line("out")]);
    assert!(chunk.is_block());
}

#[test]
fn test_display_shows_head() {
    let chunk = Chunk::block("if(flag)", vec![Chunk::line("end")]);
    assert_eq!(chunk.to_string(), "if(flag)");
}
