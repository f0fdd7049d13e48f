mod cli;
mod logger;
mod repl;
mod rlpl;
mod rppl;

use std::{process::ExitCode, sync::Arc, time::Instant};

use clap::{Parser, Subcommand};
use cli::{print_evaluated, print_evaluating, print_exiting};
use arith_core::utils::prelude::{Error, Warning, WarningEmitter, WarningEmitterIO};

#[derive(Parser)]
#[command(version, about = "Evaluates arithmetic expressions")]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluates a single expression
    Eval {
        /// Expression to evaluate, e.g. "(3 + 2) * 4"
        expression: String,
        /// Print the syntax tree before the result
        #[arg(long, default_value_t = false)]
        print_ast: bool,
    },
    /// Runs the interactive evaluation loop
    Repl {
        /// Print the syntax tree of every line before its result
        #[arg(long, default_value_t = false)]
        print_ast: bool,
    },
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Parse Print Loop
    Rppl
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logger::init(cli.verbose) {
        eprintln!("failed to set up logging: {err}");
    }

    let warnings = WarningEmitter::new(Arc::new(ConsoleWarningEmitter));

    let outcome = match cli.command {
        Command::Eval { expression, print_ast } => return eval_once(&expression, &warnings, print_ast),
        Command::Repl { print_ast } => {
            install_interrupt_handler();
            repl::start(&warnings, print_ast)
        },
        Command::Rlpl => {
            install_interrupt_handler();
            rlpl::start(&warnings)
        },
        Command::Rppl => {
            install_interrupt_handler();
            rppl::start(&warnings)
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&Error::from(err));
            ExitCode::FAILURE
        }
    }
}

fn eval_once(expression: &str, warnings: &WarningEmitter, print_ast: bool) -> ExitCode {
    print_evaluating(expression);
    let start = Instant::now();

    let result = repl::evaluate_line(expression, warnings, print_ast);

    print_evaluated(start.elapsed());

    match result {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(err) => {
            print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        print_exiting();
        std::process::exit(0);
    });

    if let Err(err) = installed {
        log::warn!("Ctrl-C handler not installed: {err}");
    }
}

pub(crate) fn print_error(err: &Error) {
    let buf_writer = cli::stderr_buffer_writer();
    let mut buf = buf_writer.buffer();

    err.pretty(&mut buf);
    buf_writer
        .print(&buf)
        .expect("Writing error to stderr");
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleWarningEmitter;

impl WarningEmitterIO for ConsoleWarningEmitter {
    fn emit_warning(&self, warning: Warning) {
        log::debug!("{warning}");

        let buffer_writer = cli::stderr_buffer_writer();
        let mut buffer = buffer_writer.buffer();
        warning.pretty(&mut buffer);
        buffer_writer
            .print(&buffer)
            .expect("Writing warning to stderr");
    }
}
