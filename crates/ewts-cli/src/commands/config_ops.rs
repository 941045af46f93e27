use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn table_export() {
    print!("{}", ewts_core::table::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(ewts_core::parse_table_toml(&content), "Error: {}");
    println!(
        "OK: {} consonants, {} vowels, {} marks, {} prefix consonants",
        table.consonants.len(),
        table.vowels.len(),
        table.marks.len(),
        table.convention.prefix_consonants.len()
    );
}
