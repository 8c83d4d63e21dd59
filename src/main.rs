use std::env;
use std::io::{self, Write};

use expr_parser::errors::errors::SyntaxError;
use expr_parser::parser::parser::parse;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        run(&args[1..].join(" "));
        return;
    }

    println!("Expression parser");
    println!("Type an expression to parse or 'exit' to quit.");
    println!("----------------------------------------------");

    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).unwrap() == 0 {
            break;
        }

        let input = input.trim();

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        if input.is_empty() {
            continue;
        }

        run(input);
    }
}

fn run(source: &str) {
    match parse(source) {
        Ok(expression) => println!("{}", expression),
        Err(error) => display_error(source, &error),
    }
}

fn display_error(source: &str, error: &SyntaxError) {
    /*
        Error: syntax error at offset 6: expected `)` to close the group
        -> (1 + 2
                 ^
    */

    println!("Error: {}", error);
    println!("-> {}", source);
    println!("   {}^", " ".repeat(error.position()));
}
