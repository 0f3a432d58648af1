use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use std::path::{Path, PathBuf};

use crate::config::load_convert_config;
use staple_core::{SourceFile, collect_markdown_files, convert};

pub fn add_convert_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .num_args(0..)
                .help("Markdown files to combine"),
        )
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_name("DIR")
                .help("Directory to scan for markdown files"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path of the combined Word document")
                .default_value("./combined_markdown.docx"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file")
                .default_value("./staple.toml"),
        )
}

pub fn make_subcommand() -> Command {
    add_convert_args(Command::new("convert"))
        .about("Combine markdown files into a single Word document")
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    // Load cascading configuration
    let staple_config = load_convert_config(args)?;
    let convert_config = staple_config.convert_config();

    // Explicit file arguments win; otherwise scan the configured directory.
    let mut paths: Vec<PathBuf> = args
        .get_many::<String>("files")
        .map(|files| files.map(PathBuf::from).collect())
        .unwrap_or_default();

    if paths.is_empty() {
        if let Some(source) = &convert_config.source {
            paths = collect_markdown_files(source);
        }
    }

    // Only markdown files are admitted, same allow-list as the upload form
    // this tool replaced.
    let mut files = Vec::new();
    for path in &paths {
        if !is_markdown(path) {
            println!("Skipping {}: not a markdown file", path.display());
            continue;
        }
        files.push(SourceFile::from_path(path)?);
    }

    if files.is_empty() {
        anyhow::bail!("no markdown files to convert");
    }

    let count = files.len();
    let styles = staple_config.doc.styles.clone().unwrap_or_default();
    let output = Path::new(&convert_config.output);
    convert(files, output, &styles)?;

    println!(
        "Combined {} file{} into {}",
        count,
        if count == 1 { "" } else { "s" },
        output.display()
    );

    Ok(())
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_extension_check_is_case_insensitive() {
        assert!(is_markdown(Path::new("notes.md")));
        assert!(is_markdown(Path::new("NOTES.MD")));
        assert!(!is_markdown(Path::new("notes.txt")));
        assert!(!is_markdown(Path::new("README")));
    }
}
