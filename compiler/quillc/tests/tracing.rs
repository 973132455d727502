//! Tracing is an observer: installing a subscriber must not change results.

use pretty_assertions::assert_eq;
use quillc::{buffer_handler, run, Session};
use tracing::Level;

const PROGRAM: &str = "
    var total = 0;
    fun add(n) { total = total + n; return total; }
    for (var i = 1; i <= 4; i = i + 1) { add(i); }
    { var inner = \"scoped\"; print inner; }
    print total;
";

fn run_program() -> String {
    let handler = buffer_handler();
    if let Err(err) = run(PROGRAM, handler.clone()) {
        panic!("program should run: {err}");
    }
    handler.get_output()
}

#[test]
fn test_output_is_identical_with_subscriber() {
    let without = run_program();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .finish();
    let with = tracing::subscriber::with_default(subscriber, run_program);

    assert_eq!(without, "scoped\n10\n");
    assert_eq!(with, without);
}

#[test]
fn test_errors_are_identical_with_subscriber() {
    let failing = "var x = 1; { print x / 0; }";
    let without = run(failing, buffer_handler()).err();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .finish();
    let with = tracing::subscriber::with_default(subscriber, || {
        let mut session = Session::with_handler(buffer_handler());
        session.run(failing).err()
    });

    assert!(without.is_some());
    assert_eq!(with, without);
}

#[test]
fn test_init_tracing_is_idempotent() {
    quillc::init_tracing();
    quillc::init_tracing();
    assert_eq!(run_program(), "scoped\n10\n");
}
