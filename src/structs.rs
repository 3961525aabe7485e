use clap::{Parser, Subcommand};
use crate::database::structs::column_value_pair::ColumnValuePair;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist.
    #[arg(long)]
    pub create_config: bool,
    /// Backend identifier, overrides the one in the config file.
    #[arg(long)]
    pub backend: Option<String>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Insert one row, given as column=value pairs.
    Create {
        table: String,
        #[arg(required = true)]
        pairs: Vec<ColumnValuePair>,
    },
    /// Print matching rows as JSON.
    Read {
        table: String,
        #[arg(long = "where")]
        condition: Option<String>,
    },
    /// Apply a SET clause to matching rows.
    Update {
        table: String,
        #[arg(long = "set")]
        set_clause: String,
        #[arg(long = "where")]
        condition: String,
    },
    /// Delete matching rows.
    Delete {
        table: String,
        #[arg(long = "where")]
        condition: String,
    },
}
