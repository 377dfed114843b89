use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{debug, LevelFilter};
use pl0_frontend::{
    display_error,
    errors::errors::Error,
    lexer::lexer::Lexer,
    parser::parser::parse,
    scope_checker::scope_checker::scope_check,
};

#[derive(Debug, Parser)]
#[clap(author, version, about = "Parses and scope checks a PL/0 program")]
struct App {
    /// Print the token stream instead of parsing
    #[clap(short = 'l', long = "lex")]
    lex: bool,

    #[clap(long = "log-level", env = "RUST_LOG")]
    log: Option<LevelFilter>,

    #[clap(required = true, value_name = "source file", value_hint = clap::ValueHint::FilePath)]
    file: PathBuf,
}

fn main() -> ExitCode {
    let app = App::parse();
    init_logging(app.log.unwrap_or(LevelFilter::Warn));
    debug!("starting pl0c with args {app:?}");

    // Read up front so diagnostics can quote the offending line
    let source = fs::read_to_string(&app.file).ok();

    match run(&app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error, source.as_deref());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level_filter: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level_filter)
        .format_timestamp(None)
        .init();
}

fn run(app: &App) -> Result<(), Error> {
    let lexer = Lexer::open(&app.file)?;

    if app.lex {
        return list_tokens(lexer);
    }

    let program = parse(lexer)?;
    let symbol_table = scope_check(&program)?;
    debug!("declared names: {:?}", symbol_table.names());

    print!("{}", program);
    Ok(())
}

// Tokens are printed as they are read, so a lexical error follows the
// tokens before it
fn list_tokens(lexer: Lexer) -> Result<(), Error> {
    for token in lexer {
        println!("{}", token?);
    }

    Ok(())
}
