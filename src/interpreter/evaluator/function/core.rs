use std::{collections::HashMap, sync::Arc};

use crate::{
    error::{FunctionError, RuntimeError},
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::builtin,
        },
        value::core::Value,
    },
};

const LOG_TARGET: &str = "functions";

/// A function callable from expressions.
///
/// Receives the prepared argument list and returns a value or an error. Host
/// functions must be thread-safe because an expression may be evaluated from
/// several threads at once.
pub type HostFunction = Arc<dyn Fn(&[Value]) -> Result<Value, FunctionError> + Send + Sync>;

/// Type alias for builtin function handlers.
///
/// A builtin receives the prepared argument list and checks its length itself.
type BuiltinFn = fn(&[Value]) -> Result<Value, FunctionError>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name and a function pointer implementing the
/// builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table used to populate registries),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of the functions registered by
        /// [`FunctionRegistry::with_builtins`].
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "contains" => builtin::contains,
    "len"      => builtin::len,
}

/// Maps function names to host functions.
///
/// A registry is built once, populated during setup and then shared read-only
/// by every evaluation. There is no global registry: each evaluation is handed
/// the registry it may call into.
///
/// # Example
/// ```
/// use ruleval::{
///     error::FunctionError,
///     interpreter::{evaluator::function::core::FunctionRegistry, value::core::Value},
/// };
///
/// let mut registry = FunctionRegistry::with_builtins();
/// registry.register("double", |args: &[Value]| match args {
///             [Value::Integer(n)] => Ok(Value::Integer(n * 2)),
///             _ => Err(FunctionError::InvalidArgument("expected one integer".into())),
///         });
///
/// assert!(registry.contains_function("double"));
/// assert!(registry.contains_function("len"));
///
/// let double = registry.lookup("double").unwrap();
/// assert_eq!(double(&[Value::Integer(21)]).unwrap(), Value::Integer(42));
/// ```
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, HostFunction>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the builtin functions listed in
    /// [`BUILTIN_FUNCTIONS`].
    ///
    /// Each builtin reports a wrong argument count as
    /// [`FunctionError::ArgumentCount`].
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for def in BUILTIN_TABLE {
            registry.register(def.name, def.func);
        }
        registry
    }

    /// Registers a function under `name`, replacing any previous binding.
    ///
    /// # Returns
    /// `true` if a function with that name was already registered.
    pub fn register<F>(&mut self, name: impl Into<String>, function: F) -> bool
        where F: Fn(&[Value]) -> Result<Value, FunctionError> + Send + Sync + 'static
    {
        let name = name.into();
        log::debug!(target: LOG_TARGET, "registering function '{name}'");
        self.functions.insert(name, Arc::new(function)).is_some()
    }

    /// Returns the function registered under `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&HostFunction> {
        self.functions.get(name)
    }

    /// Returns `true` if a function is registered under `name`.
    #[must_use]
    pub fn contains_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Returns the registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("FunctionRegistry")
         .field("functions", &names)
         .finish()
    }
}

impl Evaluator<'_> {
    /// Calls a registered function.
    ///
    /// The function is looked up by name and invoked exactly once with the
    /// prepared arguments.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Prepared argument values.
    /// - `position`: Source offset for error reporting.
    ///
    /// # Returns
    /// - `Ok(Value)`: The function's result.
    /// - `Err(RuntimeError::UnknownFunction)`: If no function has that name.
    /// - `Err(RuntimeError::Function)`: If the function returned an error.
    pub(crate) fn eval_function(&self,
                                name: &str,
                                args: &[Value],
                                position: usize)
                                -> EvalResult<Value> {
        let Some(function) = self.functions.lookup(name) else {
            return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                       position });
        };

        log::trace!(target: LOG_TARGET, "calling '{name}' with {} argument(s)", args.len());

        function(args).map_err(|source| RuntimeError::Function { name: name.to_string(),
                                                                 source,
                                                                 position })
    }
}
