use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use retree::cli::Cli;
use retree::{ParseOptions, RealFileSystem, materialize};

fn read_tree_text(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| anyhow::anyhow!("{}: {err}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let tree = match read_tree_text(cli.file.as_ref()) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("retree: {err}");
            return ExitCode::from(1);
        }
    };

    let root = cli.root.unwrap_or_else(|| PathBuf::from("."));
    let options = ParseOptions {
        indent_width: cli.indent,
        dotless_is_dir: !cli.strict,
    };

    match materialize(&RealFileSystem, &tree, &root, &options).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("retree: {err:#}");
            ExitCode::from(1)
        }
    }
}
