use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sprig_diagnostic::Reporter;

fn decode(source: &str) -> Vec<Chunk> {
    let reporter = Reporter::silent();
    Chunker::new(&reporter).decode(source)
}

#[test]
fn test_flat_lines() {
    assert_eq!(
        decode("out('hi')\nout('bye')"),
        vec![Chunk::line("out('hi')"), Chunk::line("out('bye')")]
    );
}

#[test]
fn test_head_with_body() {
    assert_eq!(
        decode("out\n\t'hello'\n\t'world'"),
        vec![Chunk::block(
            "out",
            vec![Chunk::line("'hello'"), Chunk::line("'world'")]
        )]
    );
}

#[test]
fn test_four_spaces_count_as_indent() {
    assert_eq!(
        decode("out\n    'hello'"),
        vec![Chunk::block("out", vec![Chunk::line("'hello'")])]
    );
}

#[test]
fn test_terminator_variants_normalize() {
    assert_eq!(
        decode("out\r\n\t'a'\rout\n\t'b'"),
        vec![
            Chunk::block("out", vec![Chunk::line("'a'")]),
            Chunk::block("out", vec![Chunk::line("'b'")]),
        ]
    );
}

#[test]
fn test_blank_lines_discarded() {
    assert_eq!(
        decode("\nout\n\n\t'hi'\n   \nout\n"),
        vec![
            Chunk::block("out", vec![Chunk::line("'hi'")]),
            Chunk::line("out"),
        ]
    );
}

#[test]
fn test_nested_blocks_of_arbitrary_depth() {
    let source = "repeat(3)\n\tif(flag)\n\t\tout\n\t\t\t'deep'";
    assert_eq!(
        decode(source),
        vec![Chunk::block(
            "repeat(3)",
            vec![Chunk::block(
                "if(flag)",
                vec![Chunk::block("out", vec![Chunk::line("'deep'")])]
            )]
        )]
    );
}

#[test]
fn test_unexpected_indentation_reports_line_number_and_skips() {
    let reporter = Reporter::silent();
    let chunks = Chunker::new(&reporter).decode("\t'stray'\nout\n\t'hi'");
    assert_eq!(
        chunks,
        vec![Chunk::block("out", vec![Chunk::line("'hi'")])]
    );
    assert_eq!(reporter.errors_with(ErrorCode::E1001), 1);
    assert!(reporter.history()[0].message.contains("line 1"));
}

#[test]
fn test_unexpected_indentation_in_nested_body_offsets_line_number() {
    // Line 2 jumps two indent units at once; the body's re-chunking sees it
    // with no preceding head and must report the absolute line number.
    let reporter = Reporter::silent();
    let chunks = Chunker::new(&reporter).decode("out\n\t\t'stray'\n\t'hi'\nout");
    assert_eq!(
        chunks,
        vec![
            Chunk::block("out", vec![Chunk::line("'hi'")]),
            Chunk::line("out"),
        ]
    );
    assert_eq!(reporter.errors_with(ErrorCode::E1001), 1);
    assert!(reporter.history()[0].message.contains("line 2"));
}

#[test]
fn test_empty_source_warns_and_yields_nothing() {
    let reporter = Reporter::silent();
    let chunks = Chunker::new(&reporter).decode("  \n \n");
    assert!(chunks.is_empty());
    assert_eq!(reporter.error_count(), 0);
    assert_eq!(reporter.history().len(), 1);
}

#[test]
fn test_encode_reindents_bodies() {
    let chunks = vec![
        Chunk::block(
            "repeat(3)",
            vec![Chunk::block("out", vec![Chunk::line("'hi'")])],
        ),
        Chunk::line("out"),
    ];
    assert_eq!(
        encode(&chunks, "\t", "\n"),
        "repeat(3)\n\tout\n\t\t'hi'\nout"
    );
}

#[test]
fn test_encode_with_custom_markers() {
    let chunks = vec![Chunk::block("out", vec![Chunk::line("'hi'")])];
    assert_eq!(encode(&chunks, "    ", "\r\n"), "out\r\n    'hi'");
}

fn chunk_strategy() -> impl Strategy<Value = Chunk> {
    let line = "[a-z][a-z0-9_]{0,8}".prop_map(Chunk::line);
    line.prop_recursive(3, 24, 4, |inner| {
        ("[a-z][a-z0-9_]{0,8}", prop::collection::vec(inner, 1..4))
            .prop_map(|(head, body)| Chunk::block(head, body))
    })
}

proptest! {
    #[test]
    fn test_decode_inverts_encode(chunks in prop::collection::vec(chunk_strategy(), 1..6)) {
        let source = encode(&chunks, "\t", "\n");
        let reporter = Reporter::silent();
        let decoded = Chunker::new(&reporter).decode(&source);
        prop_assert_eq!(decoded, chunks);
        prop_assert_eq!(reporter.error_count(), 0);
    }
}
