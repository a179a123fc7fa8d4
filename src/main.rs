#![allow(non_snake_case)]
use log::{error, info};
use std::path::Path;

use RustedPoly::Examples::poly_examples::{NUM_EXAMPLES, poly_examples};
use RustedPoly::Utils::logger::{delete_old_logs, init_logger};
use RustedPoly::Utils::task_parser::DriverConfig;

/// usage: RustedPoly [task_file]
/// without a task file every example runs at X = 4 with loglevel info
fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match DriverConfig::from_file(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        },
        None => DriverConfig::default(),
    };
    if config.clean_logs {
        if let Err(e) = delete_old_logs(".") {
            eprintln!("cannot clean up old log files: {}", e);
        }
    }
    let log_file = config.log_file.as_ref().map(|file| file.resolve(Path::new(".")));
    if let Err(e) = init_logger(config.loglevel, log_file.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(2);
    }
    info!("Program started with loglevel: {}", config.loglevel);

    let examples = config
        .examples
        .clone()
        .unwrap_or_else(|| (0..NUM_EXAMPLES).collect());
    let mut failed = 0;
    for example in examples {
        match poly_examples(example, &config.x_values) {
            Ok(outcomes) => {
                failed += outcomes.iter().filter(|o| !o.succeeded()).count();
            }
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
    }
    info!("Program ended, {} tree(s) failed to evaluate", failed);
}
