use std::process::ExitCode;

use clap::Parser;
use snowurl::Params;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snowurl")]
#[command(version, about = "Build a path from a :param template", long_about = None)]
struct Cli {
    /// Template containing `:name` placeholders
    template: String,

    /// Placeholder values as KEY=VALUE
    #[arg(value_parser = parse_binding)]
    bindings: Vec<(String, String)>,

    /// Print the template's parameter names instead of building
    #[arg(long, conflicts_with = "bindings")]
    list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_binding(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{arg}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{arg}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn collect_params(bindings: Vec<(String, String)>) -> Result<Params, String> {
    let mut params = Params::new();
    for (key, value) in bindings {
        if params.contains(&key) {
            return Err(format!("param `{key}` given more than once"));
        }
        params.insert(key, value);
    }
    Ok(params)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "snowurl=debug" } else { "snowurl=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list {
        return match snowurl::parse(&cli.template) {
            Ok(template) => {
                for name in template.params() {
                    println!("{name}");
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error[{}]: {e}", e.code());
                ExitCode::FAILURE
            }
        };
    }

    let params = match collect_params(cli.bindings) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    match snowurl::build(&cli.template, &params) {
        Ok(url) => {
            println!("{url}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error[{}]: {e}", e.code());
            ExitCode::FAILURE
        }
    }
}
