//! Quill pipeline driver.
//!
//! Ties the phases together: source text is scanned into tokens, parsed
//! into statements, type-checked against a type environment, then executed
//! against a value environment with a print sink. Each phase stops at its
//! first error; `Error` carries whichever phase failed.
//!
//! One-shot use goes through [`run`]. Hosts that feed input piecewise and
//! keep bindings between inputs (a REPL) use [`Session`].

mod error;
mod session;

use std::sync::Once;

use quill_eval::{Environment, EvalError, SharedPrintHandler};
use quill_ir::{Stmt, Token};
use quill_lexer::LexError;
use quill_parse::ParseError;
use quill_types::{TypeEnv, TypeError};

pub use error::{Error, Phase};
pub use quill_eval::{
    buffer_handler, new_environment, silent_handler, stdout_handler, Value,
    DEFAULT_MAX_CALL_DEPTH,
};
pub use quill_lexer::LexOptions;
pub use quill_types::new_type_env;
pub use session::Session;

/// Turn source text into tokens, ending with `Eof`.
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    quill_lexer::lex(source)
}

/// Like [`scan`], with lexer options (e.g. keeping comments).
pub fn scan_with(source: &str, options: LexOptions) -> Result<Vec<Token>, LexError> {
    quill_lexer::lex_with(source, options)
}

/// Turn tokens into top-level statements.
pub fn parse(tokens: &[Token]) -> Result<Vec<Stmt>, ParseError> {
    quill_parse::parse(tokens)
}

/// Check `program` against `env`, recording its top-level bindings there.
pub fn type_check(program: &[Stmt], env: &mut TypeEnv) -> Result<(), TypeError> {
    quill_types::check_program(program, env)
}

/// Execute a checked program against `env`, printing to `print`.
pub fn execute(
    program: &[Stmt],
    env: &mut Environment,
    print: SharedPrintHandler,
) -> Result<(), EvalError> {
    quill_eval::execute(program, env, print)
}

/// Run `source` start to finish in fresh environments.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn run(source: &str, print: SharedPrintHandler) -> Result<(), Error> {
    let tokens = scan(source)?;
    let program = parse(&tokens)?;
    type_check(&program, &mut new_type_env())?;
    execute(&program, &mut new_environment(), print)?;
    Ok(())
}

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set; safe to call more than once.
/// Enable with `RUST_LOG=quill_eval=trace` or `RUST_LOG=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another global subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .try_init();
        }
    });
}
