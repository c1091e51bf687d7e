use std::env;
use std::process;

use lis::{longest_increasing_subsequence, parse_sequence, Result};

fn run(args: &[String]) -> Result<()> {
    let values: Vec<i64> = if args.is_empty() {
        vec![10, 9, 2, 5, 3, 7, 101, 18]
    } else {
        parse_sequence(&args.join(" "))?
    };

    let result = longest_increasing_subsequence(&values);
    println!("Length of Longest Subsequence: {}", result.length);
    println!("Longest Subsequence: {:?}", result.sequence);
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
