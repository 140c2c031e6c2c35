use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    process,
};

use exprlang::{
    ast::ast::Program,
    errors::errors::Error,
    lexer::lexer::Lexer,
    parser::parser::{parse, Parser},
};

const PROMPT: &str = ">> ";

fn main() {
    let args: Vec<String> = env::args().collect();

    let result = match args.len() {
        1 => start_repl(io::stdin().lock(), io::stdout()),
        2 => parse_file(&args[1]),
        _ => {
            eprintln!("Usage: {} [file]", args[0]);
            process::exit(2);
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Parses a whole file once. Returns `Ok(false)` if the parse had errors.
fn parse_file(path: &str) -> io::Result<bool> {
    let source = read_to_string(path)?;
    let (parser, program) = parse(&source);

    let mut out = io::stdout();
    if !parser.errors().is_empty() {
        print_errors(&mut out, parser.errors())?;
        return Ok(false);
    }

    for stmt in program.iter() {
        writeln!(out, "{}", stmt)?;
    }

    Ok(true)
}

/// Reads lines until end of input, parsing each one independently.
fn start_repl(input: impl BufRead, mut out: impl Write) -> io::Result<bool> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;

        let mut parser = Parser::new(Lexer::new(line));
        let program = parser.parse_program();

        if parser.errors().is_empty() {
            print_program(&mut out, &program)?;
        } else {
            print_errors(&mut out, parser.errors())?;
        }

        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(true)
}

fn print_program(out: &mut impl Write, program: &Program) -> io::Result<()> {
    if !program.is_empty() {
        writeln!(out, "{}", program)?;
    }
    Ok(())
}

fn print_errors(out: &mut impl Write, errors: &[Error]) -> io::Result<()> {
    writeln!(out, "parser errors:")?;
    for error in errors {
        writeln!(out, "\t{}", error)?;
    }
    Ok(())
}
