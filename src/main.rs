use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use clap::Parser;
use mdpostfix::{
    FormatOptions, PipelineResult, full_format, transform_with_options,
};
use rayon::prelude::*;

#[derive(Parser)]
#[command(about = "Normalise and validate Markdown blog posts", version)]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    #[command(flatten)]
    opts: FormatOpts,
    /// Markdown files to process
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone, Copy)]
struct FormatOpts {
    /// Apply only the semantic fixes, skipping table and spacing normalisation
    #[arg(long = "quick")]
    quick: bool,
    /// Report each document's issues and warnings on standard error
    #[arg(long = "check")]
    check: bool,
}

fn process_text(text: &str, opts: FormatOpts) -> PipelineResult {
    if opts.quick {
        transform_with_options(
            text,
            FormatOptions {
                tables: false,
                spacing: false,
            },
        )
    } else {
        full_format(text)
    }
}

fn report(label: &str, result: &PipelineResult) {
    for issue in &result.issues {
        eprintln!("{label}: issue: {}", issue.message);
    }
    for warning in &result.warnings {
        eprintln!("{label}: warning: {} ({})", warning.message, warning.suggestion);
    }
}

fn emit(text: &str) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

fn process_path(path: &Path, opts: FormatOpts, in_place: bool) -> anyhow::Result<PipelineResult> {
    let text = fs::read_to_string(path)?;
    let result = process_text(&text, opts);
    if in_place {
        fs::write(path, &result.transformed_text)?;
    }
    Ok(result)
}

/// Entry point for the blog post normaliser.
///
/// Reads Markdown from standard input or the given files, applies the
/// pipeline and prints the normalised text to standard output (or back
/// to the file with `--in-place`). Multiple files are processed in
/// parallel; output stays in argument order. With `--check`, issues and
/// warnings go to standard error and any blocking issue fails the run.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let result = process_text(&input, cli.opts);
        if cli.opts.check {
            report("<stdin>", &result);
            if !result.is_valid {
                anyhow::bail!("document failed validation");
            }
        }
        emit(&result.transformed_text);
        return Ok(());
    }

    let outcomes: Vec<anyhow::Result<PipelineResult>> = cli
        .files
        .par_iter()
        .map(|path| process_path(path, cli.opts, cli.in_place))
        .collect();

    let mut all_valid = true;
    for (path, outcome) in cli.files.iter().zip(outcomes) {
        let result = outcome?;
        if cli.opts.check {
            report(&path.display().to_string(), &result);
            all_valid &= result.is_valid;
        }
        if !cli.in_place {
            emit(&result.transformed_text);
        }
    }

    if cli.opts.check && !all_valid {
        anyhow::bail!("one or more documents failed validation");
    }

    Ok(())
}
