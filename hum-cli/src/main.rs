//! Hum CLI - command line interface

mod logging;

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use hum_api::{HumError, RunConfig, EXIT_OK};
use hum_config::{CompilerConfig, LimitConfig};
use hum_core::{Chunk, OpCode};
use hum_log::Logger;

#[derive(Parser)]
#[command(
    name = "hum",
    about = "Compiler & related tools for the Hum language",
    version
)]
struct Cli {
    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Execute a source file
    Run {
        /// Source file to execute
        file: PathBuf,
        /// Trace tokens while compiling
        #[arg(long)]
        trace_tokens: bool,
        /// Dump compiled bytecode as JSON before executing
        #[arg(long)]
        dump_bytecode: bool,
    },
    /// Start interactive interpreter
    #[command(visible_alias = "r")]
    Repl,
    /// Compile program from entry point
    #[command(visible_alias = "b")]
    Build,
    /// Run project tests
    #[command(visible_alias = "t")]
    Test,
    /// Install dependencies
    #[command(visible_alias = "i")]
    Install,
    /// Print the compiler version
    #[command(visible_alias = "v")]
    Version,
}

fn main() {
    let cli = Cli::parse();

    let level = cli.log_level.as_deref().and_then(logging::parse_log_level);
    let logger = logging::build_logger(level);

    let code = match cli.command {
        Command::Run {
            file,
            trace_tokens,
            dump_bytecode,
        } => run_file(&file, trace_tokens, dump_bytecode, logger),
        Command::Repl => run_repl(&make_config(false, false, logger)),
        Command::Build => {
            println!("'build' not yet implemented.");
            1
        }
        Command::Test => {
            println!("'test' not yet implemented.");
            1
        }
        Command::Install => {
            println!("'install' not yet implemented.");
            1
        }
        Command::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            EXIT_OK
        }
    };

    process::exit(code);
}

fn make_config(trace_tokens: bool, dump_bytecode: bool, logger: Arc<Logger>) -> RunConfig {
    RunConfig {
        dump_bytecode,
        compiler: CompilerConfig { trace_tokens },
        limits: LimitConfig::default(),
        logger,
    }
}

/// One-shot file execution, mapped to the process exit code
fn run_file(file: &PathBuf, trace_tokens: bool, dump_bytecode: bool, logger: Arc<Logger>) -> i32 {
    let source = match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: Cannot read '{}': {}", file.display(), e);
            return 1;
        }
    };

    let config = make_config(trace_tokens, dump_bytecode, logger);

    if config.dump_bytecode {
        match hum_api::compile_with_config(&source, &config) {
            Ok(output) => dump_bytecode_to_stdout(&output.chunk, "main"),
            Err(e) => return report(&e),
        }
    }

    match hum_api::run(&source, &config) {
        Ok(output) => {
            for value in output.emitted {
                println!("{value}");
            }
            EXIT_OK
        }
        Err(e) => report(&e),
    }
}

/// Interactive interpreter: one interpretation per input line
///
/// A broken line reports its error and the session continues; EOF ends the
/// session cleanly.
fn run_repl(config: &RunConfig) -> i32 {
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => {
                println!();
                break;
            }
            Ok(_) => {}
        }

        let line = bounded_line(&input, config.limits.max_repl_line);

        match hum_api::run(line, config) {
            Ok(output) => {
                for value in output.emitted {
                    println!("{value}");
                }
            }
            Err(e) => {
                eprintln!("{e}");
            }
        }
    }

    EXIT_OK
}

fn report(error: &HumError) -> i32 {
    eprintln!("{error}");
    error.exit_code()
}

/// Truncate an input line to the REPL bound, respecting char boundaries
fn bounded_line(line: &str, max: usize) -> &str {
    if line.len() <= max {
        return line;
    }
    let mut end = max;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}

/// Dump the compiled chunk to stdout in JSON form
fn dump_bytecode_to_stdout(chunk: &Chunk, name: &str) {
    let output = build_json_output(chunk, name);
    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error: cannot serialize bytecode: {e}"),
    }
}

fn build_json_output(chunk: &Chunk, name: &str) -> serde_json::Value {
    use serde_json::json;

    let constants_json: Vec<serde_json::Value> = chunk
        .constants()
        .iter()
        .map(|value| json!(format!("{value}")))
        .collect();

    json!({
        "name": name,
        "constants": constants_json,
        "bytecode": build_bytecode_json(chunk),
    })
}

fn build_bytecode_json(chunk: &Chunk) -> Vec<serde_json::Value> {
    use serde_json::json;

    let mut bytecode_json = Vec::new();
    let mut offset = 0;

    while offset < chunk.code().len() {
        let byte = chunk.code()[offset];
        match OpCode::decode(byte) {
            Some(op) if op.operand_size() == 1 => {
                let operand = chunk.code().get(offset + 1).copied();
                bytecode_json.push(json!({
                    "opcode": op.name(),
                    "operand": operand,
                }));
                offset += 2;
            }
            Some(op) => {
                bytecode_json.push(json!({ "opcode": op.name() }));
                offset += 1;
            }
            None => {
                bytecode_json.push(json!({
                    "opcode": "UNKNOWN",
                    "byte": byte,
                }));
                offset += 1;
            }
        }
    }

    bytecode_json
}
