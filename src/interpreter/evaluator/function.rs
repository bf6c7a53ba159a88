/// Built-in function implementations.
///
/// Contains the functions registered by
/// [`FunctionRegistry::with_builtins`](core::FunctionRegistry::with_builtins).
pub mod builtin;

/// The function registry and call dispatch.
pub mod core;
