//! Persistent interpreter state across inputs.

use std::slice;
use std::sync::Arc;

use quill_eval::{
    Environment, ExecOutcome, Interpreter, SharedPrintHandler, DEFAULT_MAX_CALL_DEPTH,
};
use quill_types::TypeEnv;

use crate::{
    new_environment, new_type_env, parse, scan, stdout_handler, type_check, Error, Value,
};

/// Root type and value environments plus a print sink, kept between
/// inputs so later inputs see earlier declarations.
pub struct Session {
    types: TypeEnv,
    values: Environment,
    print: SharedPrintHandler,
    max_call_depth: Option<usize>,
}

impl Session {
    /// A session printing to stdout.
    pub fn new() -> Self {
        Session::with_handler(stdout_handler())
    }

    pub fn with_handler(print: SharedPrintHandler) -> Self {
        Session {
            types: new_type_env(),
            values: new_environment(),
            print,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Limit nested calls; `None` relies on stack growth alone.
    #[must_use]
    pub fn with_max_call_depth(mut self, max_call_depth: Option<usize>) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    /// Scan, parse, check and execute one input.
    ///
    /// The whole input is checked before anything runs, so a type error
    /// executes nothing and commits no bindings. Each statement is committed
    /// to the type environment once it has executed, so after a runtime
    /// error the checker knows exactly the statements that completed.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn run(&mut self, source: &str) -> Result<(), Error> {
        let tokens = scan(source)?;
        let program = parse(&tokens)?;

        let mut staged = self.types.clone();
        if let Err(err) = type_check(&program, &mut staged) {
            tracing::debug!(%err, "type error; nothing committed");
            return Err(err.into());
        }

        let mut interpreter = Interpreter::new(&mut self.values, Arc::clone(&self.print))
            .with_max_call_depth(self.max_call_depth);
        for (done, stmt) in program.iter().enumerate() {
            let outcome = interpreter.exec_stmt(stmt);
            if let Err(err) = &outcome {
                tracing::debug!(%err, completed = done, "runtime error; rest not committed");
            }
            let outcome = outcome?;
            type_check(slice::from_ref(stmt), &mut self.types)?;
            if let ExecOutcome::Return(_) = outcome {
                break;
            }
        }
        Ok(())
    }

    /// Current value of a global binding.
    pub fn global(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
