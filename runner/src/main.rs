use std::{env, process::exit};

use eval::eval;
use log::info;
use parser::parse;

fn main() {
    env_logger::init();
    match env::args().collect::<Vec<_>>().get(1) {
        Some(path) => {
            info!("Trying to open {}.", path);
            match std::fs::read_to_string(path) {
                Ok(source) => {
                    let program = match parse(&source) {
                        Ok(program) => program,
                        Err(err) => {
                            eprintln!("{}", err);
                            exit(1)
                        }
                    };
                    match eval(&program) {
                        Ok(Some(value)) => info!("Program returned {}", value),
                        Ok(None) => {}
                        Err(err) => {
                            eprintln!("Runtime Error: {}", err);
                            exit(1)
                        }
                    }
                }
                Err(err) => {
                    eprintln!("Ran into error while trying to open the file.");
                    eprintln!("{}", err);
                    exit(1)
                }
            }
        }
        None => {
            println!("Please provide the path to a file.");
            exit(1);
        }
    };
}
