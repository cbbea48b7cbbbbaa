use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "retree")]
#[command(
    about = "Create directories and empty files from an ASCII tree diagram",
    long_about = "Create directories and empty files from an ASCII tree diagram.\n\n\
Reads a tree diagram (the kind printed by `tree`, with box-drawing \
connectors or plain indentation) and creates the directories and empty files it \
describes under ROOT. Already-existing directories are left alone; on the first \
filesystem failure the run aborts, leaving anything already created in place."
)]
pub struct Cli {
    /// Root directory to create the tree under (defaults to current directory)
    pub root: Option<PathBuf>,

    /// Read the tree diagram from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Decoration/space characters per nesting level
    #[arg(long, value_name = "N", default_value_t = 2)]
    pub indent: usize,

    /// Only a trailing '/' marks a directory; dot-free names become files
    #[arg(long)]
    pub strict: bool,
}
