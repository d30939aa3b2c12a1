use std::{collections::BTreeMap, io};

use clap::{Parser, ValueEnum};
use huffman::{parse_digits, to_digit_string, Codec};

/// Build a Huffman code for some text, then encode and decode it.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to build the code from
    #[arg(default_value = "ABCDFGABD")]
    text: String,

    /// How to decode
    #[arg(long, value_enum, default_value_t = Strategy::Table)]
    strategy: Strategy,

    /// Also print the tree
    #[arg(long)]
    tree: bool,

    /// Decode these '0'/'1' digits with the code built from TEXT, instead of
    /// encoding TEXT itself
    #[arg(long, value_name = "DIGITS")]
    decode: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    /// Look codes up in the inverted table
    Table,
    /// Walk the tree
    Tree,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("input: {}", args.text);

    let codec = Codec::new(args.text.chars());
    if args.tree {
        match codec.tree() {
            Some(root) => print!("tree:\n{root}"),
            None => println!("tree: (none)"),
        }
    }

    let table: BTreeMap<String, String> = codec
        .table()
        .iter()
        .map(|(symbol, code)| (symbol.to_string(), to_digit_string(code)))
        .collect();
    println!("huffman_table:\n{}", serde_json::to_string_pretty(&table)?);

    let bits = match &args.decode {
        Some(digits) => parse_digits(digits)?,
        None => {
            let bits = codec.encode(args.text.chars())?;
            println!("encoded: {}", to_digit_string(&bits));
            bits
        }
    };

    let decoded: String = match args.strategy {
        Strategy::Table => codec.decode(&bits),
        Strategy::Tree => codec.decode_with_tree(&bits),
    }
    .into_iter()
    .collect();
    println!("decoded: {decoded}");

    Ok(())
}
