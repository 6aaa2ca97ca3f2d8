//! Compare two JSON files structurally.
//!
//! Object member order is irrelevant to equality, so documents that differ
//! only in formatting or key order compare as identical.

use std::env;
use std::error::Error;
use std::fs::File;
use std::process::ExitCode;

use ujson::Value;

fn load(path: &str) -> Result<Value, Box<dyn Error>> {
    println!("Opening '{path}'..");
    let file = File::open(path)?;
    Ok(ujson::from_reader(file)?)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("compare json files:");
        eprintln!("usage: {} <json-file-1> <json-file-2>", args[0]);
        return ExitCode::FAILURE;
    }

    let (json1, json2) = match (load(&args[1]), load(&args[2])) {
        (Ok(json1), Ok(json2)) => (json1, json2),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if json1 == json2 {
        println!("'{}' and '{}' are identical.", args[1], args[2]);
    } else {
        println!("'{}' and '{}' are NOT identical.", args[1], args[2]);
    }
    ExitCode::SUCCESS
}
