use std::env::args_os;

use huffman_coding::{huffman_coding, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match huffman_coding(&arguments) {
        Ok(report) => println!("{}", report),
        Err(e) => eprintln!("Encoding failed because of: {}", e),
    }
}
