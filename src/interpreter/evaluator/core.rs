use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            function::core::call_builtin,
            utils::{constant, is_reserved_identifier, negate},
        },
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the `let` bindings made while running a script.
///
/// ## Usage
///
/// `Context` is created once per script and reused for every statement, so a
/// binding made on one line is visible on the following lines.
#[derive(Debug, Default)]
pub struct Context {
    /// Values bound with `let`, by name.
    pub variables: HashMap<String, Value>,
}

impl Context {
    /// Creates a new evaluation context with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a statement.
    ///
    /// A `let` statement binds its value and yields `None`; an expression
    /// statement yields its value.
    ///
    /// # Errors
    /// - `VariableShadowing` if a `let` rebinds an existing variable, a
    ///   builtin, or a constant.
    /// - Any error raised while evaluating the expression.
    ///
    /// # Example
    /// ```
    /// use numlib::{
    ///     ast::{Expr, Statement},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut ctx = Context::new();
    /// let bind = Statement::Let { name:  "x".to_string(),
    ///                             value: Expr::Literal { value: 4.into(),
    ///                                                    line:  1, },
    ///                             line:  1, };
    ///
    /// assert_eq!(ctx.eval_statement(&bind).unwrap(), None);
    /// assert_eq!(ctx.variables["x"], Value::Integer(4));
    /// ```
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Let { name, value, line } => {
                if self.variables.contains_key(name) || is_reserved_identifier(name) {
                    return Err(RuntimeError::VariableShadowing { name: name.clone(),
                                                                 line: *line, });
                }
                let value = self.eval(value)?;
                debug!(name = name.as_str(), line, "binding variable");
                self.variables.insert(name.clone(), value);
                Ok(None)
            },
            Statement::Expression { expr, .. } => self.eval(expr).map(Some),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Names resolve to `let` bindings first and to named constants second.
    /// Call arguments are evaluated left to right before the builtin runs.
    ///
    /// # Errors
    /// - `UnknownVariable` for unbound names.
    /// - Any error raised by negation or by a builtin.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, line } => {
                self.variables
                    .get(name)
                    .cloned()
                    .or_else(|| constant(name))
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line: *line, })
            },
            Expr::Negate { expr, line } => negate(&self.eval(expr)?, *line),
            Expr::FunctionCall { name, args, line } => {
                let args = args.iter()
                               .map(|arg| self.eval(arg))
                               .collect::<EvalResult<Vec<_>>>()?;
                call_builtin(name, &args, *line)
            },
            Expr::ArrayLiteral { elements, .. } => {
                let elements = elements.iter()
                                       .map(|element| self.eval(element))
                                       .collect::<EvalResult<Vec<_>>>()?;
                Ok(elements.into())
            },
        }
    }
}
