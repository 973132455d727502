//! Tree-walking evaluator for Quill.
//!
//! Executes a type-checked program against an `Environment`, writing `print`
//! output to a pluggable sink. Operators dispatch on runtime value tags;
//! user function calls push a frame in the environment arena and unwind
//! `return` through ordinary results.

mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::{new_environment, Environment, GLOBAL_SCOPE};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{execute, ExecOutcome, Interpreter, DEFAULT_MAX_CALL_DEPTH};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{UserFunction, Value};
