use std::{
    borrow::Cow,
    io::{self, BufRead},
};

use clap::Parser as ClapParser;
use kaleido::{
    ast::declarations::Item, errors::errors::Error, lexer::lexer::tokenize, parser::parser::parse,
    render_diagnostic,
};

#[cfg(feature = "codegen")]
use inkwell::context::Context;
#[cfg(feature = "codegen")]
use kaleido::compiler::compiler::Compiler;

/// Reads one construct per line from standard input and prints its syntax tree.
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the token stream of each line instead of parsing it
    #[arg(long)]
    tokens: bool,

    /// Show the offending line with a caret under syntax errors
    #[arg(long)]
    pretty_errors: bool,

    /// Lower each parsed item to LLVM IR (requires the `codegen` feature)
    #[arg(long)]
    emit_ir: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    #[cfg(feature = "codegen")]
    let context = Context::create();
    #[cfg(feature = "codegen")]
    let mut compiler = Compiler::new(&context, "kaleido");

    #[cfg(not(feature = "codegen"))]
    if args.emit_ir {
        log::warn!("--emit-ir ignored: built without the `codegen` feature");
    }

    let mut stdin = io::stdin().lock();
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        match stdin.read_until(b'\n', &mut buffer) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                log::error!("failed to read input: {}", error);
                break;
            }
        }

        let line = decode_line(&buffer);

        if args.tokens {
            for token in tokenize(&line) {
                println!("{}", token);
            }
            continue;
        }

        println!("read: {}", line);

        match parse(&line) {
            Ok(None) => println!("empty input!"),
            Ok(Some(item)) => {
                log::debug!("{} spanning {:?}", describe(&item), item.get_span());
                println!("{}", item);

                #[cfg(feature = "codegen")]
                if args.emit_ir {
                    emit_ir(&mut compiler, &item);
                }
            }
            Err(error) => {
                display_error(&error, &line, args.pretty_errors);
                println!("empty expr!");
            }
        }
    }
}

/// Strips the line terminator and replaces invalid UTF-8 so one bad line
/// cannot end the session.
fn decode_line(bytes: &[u8]) -> String {
    let line = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = line {
        log::warn!("line contains invalid UTF-8, decoding lossily");
    }

    line.trim_end_matches(&['\n', '\r'][..]).to_string()
}

fn display_error(error: &Error, line: &str, pretty: bool) {
    if pretty {
        eprintln!("{}", render_diagnostic(error, line));
    } else {
        eprintln!("{}", error);
    }
}

#[cfg(feature = "codegen")]
fn emit_ir(compiler: &mut Compiler<'_>, item: &Item) {
    match compiler.compile_item(item) {
        Ok(function) => print!("{}", function.print_to_string().to_string()),
        Err(error) => eprintln!("error {}", error),
    }
}

fn describe(item: &Item) -> &'static str {
    match item {
        Item::Function(function) if function.is_anonymous() => "top-level expression",
        Item::Function(_) => "function definition",
        Item::Extern(_) => "extern declaration",
    }
}
