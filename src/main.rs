//! Vintage - modal editing core
//! Command-line front end for checking run-control files and ex command lines

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use vintage::config::Config;
use vintage::ex::{ExExecutor, Token, COMMANDS};
use vintage::host::{CommandArgs, MessageSink, Window};
use vintage::rc::RunControl;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a run-control file and print the commands it would run
    Rc {
        /// Run-control file; defaults to the configured one
        #[arg(short, long, env = "VINTAGE_RC")]
        file: Option<PathBuf>,
    },
    /// List the ex commands and their abbreviations
    Commands,
    /// Print the token stream of an ex command line
    Ex {
        /// Command line, with or without the leading `:`
        line: String,
    },
}

/// Prints the host commands it is asked to run
struct PrintWindow;

impl Window for PrintWindow {
    fn run_command(&mut self, command: &str, args: &CommandArgs) {
        let bang = if args.forced { "!" } else { "" };
        if args.args.is_empty() {
            println!("{command}{bang}");
        } else {
            println!("{command}{bang} {}", args.args);
        }
    }

    fn open_file(&mut self, path: &Path) {
        println!("open {}", path.display());
    }
}

/// Writes messages to stderr
struct StderrSink;

impl MessageSink for StderrSink {
    fn status_message(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn console_message(&mut self, _msg: &str) {}
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("invalid configuration")?;
    vintage::logging::init(config.debug || cli.debug);

    match cli.command {
        Command::Rc { file } => {
            let rc = RunControl::new(file.unwrap_or(config.rc_path));
            let report = rc
                .load(&ExExecutor::default(), &mut PrintWindow, &mut StderrSink)
                .with_context(|| format!("failed to read {}", rc.path().display()))?;
            eprintln!("{} executed, {} failed", report.executed, report.failed);
            if report.failed > 0 {
                std::process::exit(1);
            }
        }
        Command::Commands => {
            for desc in COMMANDS {
                println!("{}", desc.summary());
            }
        }
        Command::Ex { line } => {
            let executor = ExExecutor::default();
            for token in executor.parser().tokenize(&line) {
                match token {
                    Token::Command(cmd) => {
                        let bang = if cmd.forced { "!" } else { "" };
                        println!("command {}{bang} -> {} {:?}", cmd.name, cmd.target, cmd.args);
                    }
                    Token::Error(failure) => println!("error {}", failure.to_error().message),
                    Token::Eof => println!("eof"),
                }
            }
        }
    }

    Ok(())
}
