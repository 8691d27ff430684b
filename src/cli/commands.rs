use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = "Hill cipher over Z/26Z")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    Encrypt {
        /// Key text, e.g. GYBNQKURP for a 3x3 key.
        #[arg(short, long)]
        key: String,

        /// Plaintext given inline.
        #[arg(short, long, conflicts_with = "input")]
        text: Option<String>,

        /// Plaintext read from a file.
        #[arg(short, long, required_unless_present = "text")]
        input: Option<PathBuf>,

        /// Write the ciphertext here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    Decrypt {
        /// Key text, e.g. GYBNQKURP for a 3x3 key.
        #[arg(short, long)]
        key: String,

        /// Ciphertext given inline.
        #[arg(short, long, conflicts_with = "input")]
        text: Option<String>,

        /// Ciphertext read from a file.
        #[arg(short, long, required_unless_present = "text")]
        input: Option<PathBuf>,

        /// Write the plaintext here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the parsed key matrix, its determinant mod 26, and its inverse.
    Inspect {
        #[arg(short, long)]
        key: String,
    },
}
