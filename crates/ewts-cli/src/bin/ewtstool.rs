use clap::{Parser, Subcommand};

use ewts_cli::commands::{config_ops, convert_ops};

#[derive(Parser)]
#[command(name = "ewtstool", about = "ACIP to EWTS conversion utility")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an ACIP text file (or stdin) to EWTS
    Convert {
        /// Path to the input file, or "-" for stdin
        input: String,
        /// Path to a custom mapping table TOML (defaults to the embedded table)
        #[arg(long)]
        table: Option<String>,
        /// Output the result and warnings as JSON
        #[arg(long)]
        json: bool,
        /// Skip the archival-text cleanup pass
        #[arg(long)]
        no_sanitize: bool,
    },

    /// Print the embedded default mapping table TOML
    TableExport,

    /// Validate a mapping table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Convert {
            input,
            table,
            json,
            no_sanitize,
        } => convert_ops::convert_cmd(&input, table.as_deref(), json, no_sanitize),
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
    }
}
