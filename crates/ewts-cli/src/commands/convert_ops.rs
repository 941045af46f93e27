use std::fs;
use std::io::Read;
use std::process;

use ewts_core::sanitize::sanitize;
use ewts_core::{table, Transducer};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn convert_cmd(input: &str, table_file: Option<&str>, json: bool, no_sanitize: bool) {
    let raw = if input == "-" {
        let mut buf = String::new();
        die!(
            std::io::stdin().read_to_string(&mut buf),
            "Error reading stdin: {}"
        );
        buf
    } else {
        die!(fs::read_to_string(input), "Error reading {input}: {}")
    };

    let transducer = match table_file {
        Some(path) => {
            let toml_str = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(Transducer::from_toml(&toml_str), "Error: {}")
        }
        None => die!(Transducer::from_toml(table::default_toml()), "Error: {}"),
    };

    let text = if no_sanitize { raw } else { sanitize(&raw) };
    let result = transducer.convert(&text);

    if json {
        let out = die!(
            serde_json::to_string_pretty(&result),
            "Error serializing result: {}"
        );
        println!("{out}");
    } else {
        print!("{}", result.ewts);
        if !result.ewts.ends_with('\n') {
            println!();
        }
        for warning in &result.warnings {
            eprintln!("warning: {warning}");
        }
    }
}
