use std::{
    env,
    io::{self, Read},
    process::ExitCode,
    time::Instant,
};

use exprtree::{
    display_error,
    interpreter::interpreter::evaluate,
    lexer::lexer::tokenize,
    parser::parser::parse,
    printer::printer::{format_number, print_tree, visualize_tree},
};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let source = if args.is_empty() {
        let mut input = String::new();
        if let Err(error) = io::stdin().read_to_string(&mut input) {
            println!("Failed to read expression from stdin: {}", error);
            return ExitCode::FAILURE;
        }
        input
    } else {
        args.join(" ")
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone()) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            return ExitCode::FAILURE;
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let tree = match parse(&tokens) {
        Ok(tree) => tree,
        Err(error) => {
            display_error(&error, &source);
            return ExitCode::FAILURE;
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!();

    if let Err(error) = print_tree(&tree).and_then(|_| visualize_tree(&tree)) {
        println!("Failed to write parse tree: {}", error);
        return ExitCode::FAILURE;
    }

    println!();
    println!("Result: {}", format_number(evaluate(&tree)));
    println!("Total time: {:?}", start.elapsed());

    ExitCode::SUCCESS
}
