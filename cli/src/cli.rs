use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Render exam paper requests (JSON) to Word documents.
#[derive(Parser, Debug)]
#[command(name = "exam-paper", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a DOCX paper from a request JSON file.
    Generate(GenerateArgs),

    /// Print the subject catalog as JSON.
    Subjects(SubjectsArgs),

    /// Print the text content of a generated DOCX file.
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Request JSON file.
    pub input: PathBuf,

    /// Output file, or a directory to place the default file name in.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Layout settings JSON file.
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SubjectsArgs {
    /// Only print the subject with this name.
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// DOCX file to read.
    pub file: PathBuf,
}
