use std::{fs, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use ruleval::{
    Context, EvalOptions, Expression, FunctionRegistry, LiteralArguments, Value,
    util::num::f64_to_i64,
};

/// ruleval evaluates a rule expression against a JSON context and prints the
/// result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate, e.g. 'a.b > 5 && c[0] == 1'.
    expression: String,

    /// The context as an inline JSON object.
    #[arg(short, long, value_name = "JSON", conflicts_with = "file")]
    context: Option<String>,

    /// Read the JSON context from a file instead.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Require the result to have this type.
    #[arg(long = "as", value_name = "TYPE", default_value = "value")]
    output: Output,

    /// Evaluate literal call arguments instead of passing their source text.
    #[arg(long)]
    typed_literal_args: bool,

    /// Set the logging level for diagnostic output.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

/// Result type requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// Print the value as it is.
    Value,
    /// Require a boolean.
    Bool,
    /// Require a number, truncated to an integer.
    Int,
    /// Require a number, as a float.
    Float,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env).format_timestamp(None)
                                      .format_module_path(false)
                                      .format_target(matches!(log_level,
                                                              LogLevel::Debug | LogLevel::Trace))
                                      .init();
}

fn load_context(args: &Args) -> Result<Context, String> {
    let text = match (&args.context, &args.file) {
        (Some(json), _) => json.clone(),
        (None, Some(path)) => fs::read_to_string(path).map_err(|e| {
                                  format!("Failed to read the context file '{}': {e}",
                                          path.display())
                              })?,
        (None, None) => return Ok(Context::new()),
    };

    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(serde_json::Value::Object(fields)) => {
            Ok(fields.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
        },
        Ok(_) => Err("The context must be a JSON object.".to_string()),
        Err(e) => Err(format!("Invalid JSON context: {e}")),
    }
}

fn run(args: &Args) -> Result<String, String> {
    let context = load_context(args)?;
    let expression = Expression::parse(&args.expression).map_err(|e| e.to_string())?;
    let functions = FunctionRegistry::with_builtins();

    let literal_arguments = if args.typed_literal_args {
        LiteralArguments::Typed
    } else {
        LiteralArguments::Raw
    };
    let options = EvalOptions { literal_arguments };

    let value = expression.evaluate_with(&context, &functions, options)
                          .map_err(|e| e.to_string())?;

    let position = expression.root().position();
    let rendered = match args.output {
        Output::Value => value.to_string(),
        Output::Bool => value.as_bool(position).map_err(|e| e.to_string())?.to_string(),
        Output::Int => match value {
            Value::Integer(n) => n.to_string(),
            Value::Real(r) => {
                f64_to_i64(r).ok_or_else(|| format!("Result {r} does not fit in an int."))?
                             .to_string()
            },
            other => return Err(format!("Expected int result, found {}.", other.type_name())),
        },
        Output::Float => value.as_real(position).map_err(|e| e.to_string())?.to_string(),
    };

    Ok(rendered)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level);

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
