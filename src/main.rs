use clap::Parser;
use std::path::PathBuf;

use anyhow::Context;
use avmfeatures::config;
use avmfeatures::features::{feature_defines, render_defines, FEATURES};
use avmfeatures::options::OptionMap;

#[derive(Parser)]
#[command(name = "avmfeatures")]
#[command(about = "Translate AVM build options into compiler feature defines", long_about = None)]
struct Cli {
    /// Feature configuration file (a [features] table of name = bool entries)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable an option (repeatable, applied after the config file)
    #[arg(long, value_name = "NAME")]
    enable: Vec<String>,

    /// Disable an option (repeatable, applied after the config file)
    #[arg(long, value_name = "NAME")]
    disable: Vec<String>,

    /// Emit the resolved defines as JSON instead of a flag string
    #[arg(long)]
    json: bool,

    /// List known options and the tokens they emit
    #[arg(long)]
    list: bool,

    /// Resolve the configuration and report, without emitting flags
    #[arg(long)]
    check: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list {
        for feature in FEATURES {
            println!("{:24} {}", feature.option, render_defines(feature.defines));
        }
        return Ok(());
    }

    let mut options = match &cli.config {
        Some(path) => {
            if cli.verbose {
                eprintln!("Loading feature configuration: {}", path.display());
            }
            config::load(path).with_context(|| format!("failed to load {}", path.display()))?
        }
        None => OptionMap::new(),
    };

    for name in &cli.enable {
        options
            .set(name, true)
            .with_context(|| format!("--enable {}", name))?;
    }
    for name in &cli.disable {
        options
            .set(name, false)
            .with_context(|| format!("--disable {}", name))?;
    }

    let defines = feature_defines(&options)?;
    if cli.verbose {
        eprintln!(
            "Resolved {} define(s) from {} known option(s)",
            defines.len(),
            FEATURES.len()
        );
    }

    if cli.check {
        let enabled = FEATURES
            .iter()
            .filter(|f| options.is_enabled(f.option))
            .count();
        println!(
            "✓ configuration OK - {} option(s) enabled, {} define(s)",
            enabled,
            defines.len()
        );
        return Ok(());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&defines)?);
    } else {
        // stdout carries only the product, for CXXFLAGS="$(avmfeatures ...)"
        println!("{}", render_defines(&defines));
    }

    Ok(())
}
