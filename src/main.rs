use std::{env, fs::read_to_string, process};

use letter_parser::parser::parser::Parser;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: letter-parser <file>");
        process::exit(1);
    }

    let source = read_to_string(&args[1]).expect("Failed to read file!");

    let mut parser = Parser::new();

    match parser.parse(&source) {
        Ok(program) => {
            println!("{}", serde_json::to_string_pretty(&program).expect("Failed to serialize AST"));
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}
