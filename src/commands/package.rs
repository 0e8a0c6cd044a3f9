use std::path::PathBuf;

use clap::Args;

use extpack::args::parse_key_value_options;
use extpack::package::{self, PackageConfig, PackageOutput};
use extpack::Toolchain;

use crate::commands::CmdResult;

#[derive(Args)]
pub struct PackageArgs {
    /// Repository root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Package root override (defaults to <root>/_package)
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Trailing key=value options; supported: publisher=<name>
    #[arg(value_name = "KEY=VALUE")]
    pub options: Vec<String>,
}

pub fn run(args: PackageArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<PackageOutput> {
    let options = parse_key_value_options(&args.options)?;

    let repo_root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().map_err(|e| {
            extpack::Error::internal_io(e.to_string(), Some("resolve current directory".to_string()))
        })?,
    };

    let config = PackageConfig {
        repo_root,
        package_root: args.out,
        publisher: options.publisher,
        toolchain: Toolchain::default(),
    };

    let output = package::run(&config)?;
    Ok((output, 0))
}
