use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "lawcite",
    version,
    about = "Legal citation parsing and structural identifier tooling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Parse(ParseArgs),
    Identify(IdentifyArgs),
    Decode(DecodeArgs),
    Annotate(AnnotateArgs),
    Scan(ScanArgs),
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct TextSource {
    #[arg(long)]
    pub text: Option<String>,

    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    #[command(flatten)]
    pub source: TextSource,

    #[arg(long, default_value_t = false)]
    pub no_bare_numeric: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct IdentifyArgs {
    #[arg(long)]
    pub citation: String,

    #[arg(long, default_value_t = false)]
    pub no_bare_numeric: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DecodeArgs {
    #[arg(long)]
    pub identifier: String,

    #[arg(long, default_value_t = false)]
    pub roman_subparagraphs: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AnnotateArgs {
    #[command(flatten)]
    pub source: TextSource,

    #[arg(long, default_value = "")]
    pub anchor_prefix: String,

    #[arg(long, default_value_t = false)]
    pub no_bare_numeric: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    #[arg(long)]
    pub source_dir: PathBuf,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    #[arg(long, default_value_t = false)]
    pub no_bare_numeric: bool,
}
