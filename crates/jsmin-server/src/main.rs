use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use jsmin_compiler::{build, BuildOptions};
use jsmin_server::config::{JsminConfig, DEFAULT_CONFIG_PATH};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jsmin", version, about = "Minify JavaScript resources and serve them")]
struct Cli {
    /// Configuration file to use.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Only print error messages. Overrides --verbose and --debug.
    #[arg(long, global = true)]
    quiet: bool,

    /// Be more verbose.
    #[arg(long, global = true)]
    verbose: bool,

    /// Be extremely verbose.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the development server.
    Run {
        /// Directory to serve resources from.
        root: Option<PathBuf>,
        /// Port to listen on.
        #[arg(long)]
        port: Option<u16>,
        /// Routing rule, formatted as '<remote>=<local>'.
        #[arg(long = "route", value_parser = parse_route)]
        routes: Vec<(String, String)>,
    },
    /// Compile files and directories into an output directory.
    Build {
        inputs: Vec<PathBuf>,
        #[arg(long, short, default_value = "./jsmin.out")]
        output: PathBuf,
        /// Copy resources that are not compiled.
        #[arg(long)]
        copy: bool,
    },
    /// Minify one file, or stdin, to stdout.
    Minify { file: Option<PathBuf> },
    /// Write a default configuration file.
    Init,
}

fn parse_route(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((k, v)) if !k.trim().is_empty() => Ok((k.trim().to_string(), v.trim().to_string())),
        _ => Err("Routes must be formatted as '<remote>=<local>'".into()),
    }
}

fn init_tracing(config: &JsminConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn minify_file(file: Option<&Path>) -> anyhow::Result<()> {
    let source = match file {
        Some(path) => std::fs::read(path).with_context(|| format!("Could not read {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    let minified = jsmin::minify_bytes(&source)?;
    io::stdout().write_all(&minified)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Init = cli.command {
        let path = cli.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        JsminConfig::init(&path)?;
        println!("Default configuration created at: {}", path.display());
        return Ok(());
    }

    let mut config = JsminConfig::load(cli.config.as_deref())?;
    config.apply_flags(cli.quiet, cli.verbose, cli.debug);
    init_tracing(&config);

    match cli.command {
        Command::Run { root, port, routes } => {
            if let Some(root) = root {
                config.server.root = root;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if !routes.is_empty() {
                config.routes = routes.into_iter().collect();
            }
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(jsmin_server::serve(config))
        }
        Command::Build { inputs, output, copy } => {
            let inputs = if inputs.is_empty() { vec![PathBuf::from(".")] } else { inputs };
            let options = BuildOptions::new(output)
                .with_copy_unmanaged(copy || config.unmanaged.copy)
                .with_verbose(config.verbose || config.debug);
            let report = build(&inputs, &options)?;
            if !config.quiet {
                println!(
                    "{} resources: {} compiled, {} copied, {} skipped",
                    report.total(),
                    report.compiled.len(),
                    report.copied.len(),
                    report.skipped.len()
                );
            }
            Ok(())
        }
        Command::Minify { file } => minify_file(file.as_deref()),
        Command::Init => Ok(()),
    }
}
