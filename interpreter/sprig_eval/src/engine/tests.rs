use std::rc::Rc;

use pretty_assertions::assert_eq;
use sprig_chunk::Chunker;
use sprig_diagnostic::{ErrorCode, Reporter};

use crate::console::Console;
use crate::engine::Engine;
use crate::flow::Flow;
use crate::value::Value;

fn run(source: &str) -> Engine {
    let (engine, _) = run_with_flow(source);
    engine
}

fn run_with_flow(source: &str) -> (Engine, Flow) {
    let reporter = Rc::new(Reporter::silent());
    let mut engine = Engine::with_builtins(Rc::clone(&reporter), Console::buffer());
    let chunks = Chunker::new(&reporter).decode(source);
    let flow = engine.run(&chunks);
    (engine, flow)
}

#[test]
fn test_out_prints_joined_texts() {
    let engine = run("out\n\t'hello '\n\t42");
    assert_eq!(engine.console().output(), "hello 42\n");
    assert_eq!(engine.reporter().error_count(), 0);
}

#[test]
fn test_store_variable_receives_result() {
    let engine = run("text(greeting)\n\t'hi'");
    assert_eq!(
        engine.memory().get("greeting"),
        Some(&Value::Text("hi".to_string()))
    );
}

#[test]
fn test_bare_known_name_is_inspection_not_a_call() {
    let engine = run("out");
    let output = engine.console().output();
    assert!(output.contains("--- out ---"));
    assert!(output.contains("TYPE: Algorithm"));
    assert_eq!(engine.reporter().error_count(), 0);
}

#[test]
fn test_bare_unknown_name_is_undefined_object() {
    let engine = run("mystery");
    assert_eq!(engine.reporter().errors_with(ErrorCode::E2001), 1);
    assert_eq!(engine.reporter().error_count(), 1);
}

#[test]
fn test_unknown_callable_reports_once_and_is_a_noop() {
    let engine = run("frobnicate(x)\n\t1\nout\n\t'after'");
    assert_eq!(engine.reporter().errors_with(ErrorCode::E2002), 1);
    assert_eq!(engine.reporter().error_count(), 1);
    assert!(!engine.memory().contains("x"));
    assert_eq!(engine.console().output(), "after\n");
}

#[test]
fn test_calling_a_plain_value_is_undefined_algorithm() {
    let engine = run("number(n)\n\t1\nn(x)\n\t2");
    assert_eq!(engine.reporter().errors_with(ErrorCode::E2002), 1);
    assert!(!engine.memory().contains("x"));
}

#[test]
fn test_undefined_value_reports_once_and_stores_nothing() {
    let engine = run("text(t)\n\tmystery");
    assert_eq!(engine.reporter().errors_with(ErrorCode::E2003), 1);
    assert_eq!(engine.reporter().error_count(), 1);
    // The call still ran, with the bad argument dropped.
    assert_eq!(engine.memory().get("t"), Some(&Value::Text(String::new())));
}

#[test]
fn test_nested_block_argument_is_invoked() {
    let engine = run("text(t)\n\tadd\n\t\t1\n\t\t2");
    assert_eq!(engine.memory().get("t"), Some(&Value::Text("3.0".to_string())));
}

#[test]
fn test_lazy_call_token_argument_is_forced_at_dispatch() {
    let engine = run("text(t)\n\tversion()");
    assert_eq!(
        engine.memory().get("t"),
        Some(&Value::Text(env!("CARGO_PKG_VERSION").to_string()))
    );
}

#[test]
fn test_recursive_factorial() {
    let engine = run(concat!(
        "alg(fact, args)\n",
        "\titem(n)\n",
        "\t\targs\n",
        "\t\t0\n",
        "\tequal(base)\n",
        "\t\tn\n",
        "\t\t0\n",
        "\tif(base)\n",
        "\t\tresult\n",
        "\t\t\t1\n",
        "\tsubtract(m)\n",
        "\t\tn\n",
        "\t\t1\n",
        "\tfact(sub)\n",
        "\t\tm\n",
        "\titem(n)\n",
        "\t\targs\n",
        "\t\t0\n",
        "\tmultiply(res)\n",
        "\t\tn\n",
        "\t\tsub\n",
        "\tresult\n",
        "\t\tres\n",
        "fact(answer)\n",
        "\t5\n",
    ));
    assert_eq!(engine.reporter().error_count(), 0);
    let answer = engine.memory().get("answer").cloned();
    assert_eq!(answer.map(|v| v.to_number()), Some(120));
}

#[test]
fn test_withdraw_one_ends_the_loop_itself() {
    let engine = run(concat!(
        "number(hits)\n",
        "\t0\n",
        "repeat(10, i)\n",
        "\tadd(hits)\n",
        "\t\thits\n",
        "\t\t1\n",
        "\twithdraw(1)\n",
        "out\n",
        "\t'after'\n",
    ));
    assert_eq!(engine.reporter().error_count(), 0);
    assert_eq!(engine.memory().get("hits").map(Value::to_number), Some(1));
    assert_eq!(engine.console().output(), "after\n");
    assert!(!engine.memory().contains("i"));
}

#[test]
fn test_withdraw_two_exits_through_the_conditional() {
    let engine = run(concat!(
        "number(hits)\n",
        "\t0\n",
        "repeat(10, i)\n",
        "\tadd(hits)\n",
        "\t\thits\n",
        "\t\t1\n",
        "\tequal(third)\n",
        "\t\ti\n",
        "\t\t2\n",
        "\tif(third)\n",
        "\t\twithdraw(2)\n",
    ));
    assert_eq!(engine.reporter().error_count(), 0);
    assert_eq!(engine.memory().get("hits").map(Value::to_number), Some(3));
}

#[test]
fn test_loop_index_shadowing_restores_prior_value() {
    let engine = run("text(i)\n\t'old'\nrepeat(3, i)\n\tout\n\t\ti");
    assert_eq!(engine.console().output(), "0\n1\n2\n");
    assert_eq!(engine.memory().get("i"), Some(&Value::Text("old".to_string())));
}

#[test]
fn test_withdraw_beyond_the_stack_is_reported_and_skipped() {
    let (engine, flow) = run_with_flow("withdraw(5)\nout\n\t'still here'");
    assert_eq!(flow, Flow::Continue);
    assert_eq!(engine.reporter().errors_with(ErrorCode::E3004), 1);
    assert_eq!(engine.console().output(), "still here\n");
}

#[test]
fn test_result_outside_an_algorithm_is_reported_and_skipped() {
    let engine = run("result\n\t5\nout\n\t'after'");
    assert_eq!(engine.reporter().errors_with(ErrorCode::E3004), 1);
    assert_eq!(engine.console().output(), "after\n");
}

#[test]
fn test_result_with_two_values_is_an_overflow() {
    let engine = run("alg(pair)\n\tresult\n\t\t1\n\t\t2\npair(p)");
    assert_eq!(engine.reporter().errors_with(ErrorCode::E3002), 1);
    assert_eq!(engine.memory().get("p"), Some(&Value::Void));
}

#[test]
fn test_input_reads_a_scripted_line() {
    let reporter = Rc::new(Reporter::silent());
    let mut engine = Engine::with_builtins(Rc::clone(&reporter), Console::buffer());
    engine.console().push_input("Ada");
    let chunks = Chunker::new(&reporter).decode("input(name)\n\t'who? '");
    engine.run(&chunks);
    assert_eq!(engine.console().output(), "who? ");
    assert_eq!(
        engine.memory().get("name"),
        Some(&Value::Text("Ada".to_string()))
    );
}

#[test]
fn test_empty_head_name_is_an_engine_error() {
    let engine = run("(x)\n\t1");
    assert_eq!(engine.reporter().errors_with(ErrorCode::E0001), 1);
}

#[test]
fn test_user_algorithm_restores_shadowed_args_collection() {
    // `args` pre-exists; the call shadows it and puts it back.
    let engine = run(concat!(
        "text(args)\n",
        "\t'outer'\n",
        "alg(first, args)\n",
        "\titem(x)\n",
        "\t\targs\n",
        "\t\t0\n",
        "\tresult\n",
        "\t\tx\n",
        "first(y)\n",
        "\t'inner'\n",
    ));
    assert_eq!(engine.memory().get("y"), Some(&Value::Text("inner".to_string())));
    assert_eq!(
        engine.memory().get("args"),
        Some(&Value::Text("outer".to_string()))
    );
}
