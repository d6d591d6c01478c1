use boxshelf::library::SortBy;
use boxshelf_common::MediaType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "boxshelf")]
#[command(author, version, about = "Parse and group debrid release names")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse release names and display the extracted fields
    Parse {
        /// Release names to parse
        #[arg(required = true)]
        names: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the grouping key of each release name
    Key {
        /// Release names to key
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Group a JSON torrent listing by title
    Group {
        /// Listing file (JSON array of torrents), or "-" for stdin
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Only keep entries of this type
        #[arg(long = "type", value_name = "TYPE")]
        media_type: Option<MediaType>,

        /// Only keep entries whose title contains this text
        #[arg(long)]
        search: Option<String>,

        /// Sort order for entries within the listing
        #[arg(long, value_enum)]
        sort: Option<SortBy>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },
}
