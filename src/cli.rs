use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fancylists")]
#[command(author, version)]
#[command(about = "Render Markdown ordered lists with letter and Roman numeral markers")]
#[command(
    long_about = "fancylists renders Markdown lists whose markers may be numbers, letters or \
    Roman numerals (1., a., A., iv., IV.). The first marker of each list decides its numbering \
    style and the value it starts counting from."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a file to HTML
    fancylists render notes.md

    # Render from stdin
    printf 'c. first\\nd. second\\n' | fancylists render

    # Show how markers are classified
    fancylists classify i l C 9

    # Inspect the parsed tree
    fancylists parse notes.md

CONFIGURATION:

fancylists looks for configuration files in this order:
  1. Explicit --config path
  2. fancylists.toml or .fancylists.toml in current/parent directories
  3. ~/.config/fancylists/config.toml (XDG)
  4. Built-in defaults

Example .fancylists.toml:

    tab_width = 4

    [extensions]
    roman_numerals = true
    startnum = true")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, fancylists will \
        search for .fancylists.toml or fancylists.toml in the current directory and its \
        parents, then fall back to ~/.config/fancylists/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a Markdown document to HTML
    #[command(
        long_about = "Render a Markdown document to HTML on stdout. Ordered lists get a start \
        attribute when they do not begin at 1 and a type attribute when their first marker is \
        a letter or a Roman numeral."
    )]
    Render {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
    /// Parse and display the list tree for debugging
    #[command(
        long_about = "Parse a document and print the tree built from it, including the \
        LIST_START and LIST_TYPE tokens that carry each ordered list's numbering."
    )]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
    /// Classify list markers and print their numbering as JSON
    #[command(
        long_about = "Classify each marker token (without the trailing period) and print one \
        JSON object per line with the numbering style and start index it implies. Markers \
        that cannot be classified print null for both."
    )]
    Classify {
        /// Marker tokens such as 1, b, iv or IV
        #[arg(required = true)]
        markers: Vec<String>,
    },
}
