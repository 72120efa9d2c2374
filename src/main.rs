use anyhow::Result;
use clap::{Parser, Subcommand};
use gsh::config::{find_config, sort_hosts_by_name, sort_operations_by_name};
use gsh::{Config, ConfigLoader, GshError, ParseMode};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Inspect the gsh host and operation profiles in your home directory
#[derive(Parser, Debug)]
#[command(name = "gsh")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to search for gsh-*.json instead of the home directory
    #[arg(long)]
    home: Option<PathBuf>,

    /// Fail on malformed config files instead of loading them as empty
    #[arg(long)]
    strict: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Log to file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded configs with their default suffix
    List,

    /// List the hosts of a config, sorted by name
    Hosts {
        /// Config name
        config: String,
    },

    /// List the operations of a config, sorted by name
    Ops {
        /// Config name
        config: String,
    },

    /// Check whether a host supports an operation
    Check {
        /// Config name
        config: String,
        /// Host name
        host: String,
        /// Operation name
        op: String,
    },
}

fn setup_logging(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if let Some(log_path) = log_file {
        let file = std::fs::File::create(log_path)?;
        subscriber.with_writer(file).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    Ok(())
}

fn select_config<'a>(configs: &'a [Config], name: &str) -> Result<&'a Config> {
    let config = find_config(configs, name)
        .ok_or_else(|| GshError::ConfigNotFound(name.to_string()))?;
    debug!("Active config: {}", config.name);
    Ok(config)
}

fn run(command: Command, configs: &[Config]) -> Result<ExitCode> {
    match command {
        Command::List => {
            for config in configs {
                println!("{}\t{}", config.name, config.default_suffix);
            }
        }
        Command::Hosts { config } => {
            let config = select_config(configs, &config)?;
            let mut hosts = config.hosts.clone();
            sort_hosts_by_name(&mut hosts);

            for host in &hosts {
                println!(
                    "{}\t{}:{}\t{}",
                    host.name,
                    host.host,
                    host.port,
                    host.supported_operations.join(",")
                );
            }
        }
        Command::Ops { config } => {
            let config = select_config(configs, &config)?;
            let mut operations = config.operations.clone();
            sort_operations_by_name(&mut operations);

            for op in &operations {
                let kind = if op.is_streaming { "streaming" } else { "oneshot" };
                println!("{}\t{}\t{}", op.name, kind, op.shell_command);
            }
        }
        Command::Check { config, host, op } => {
            let config = select_config(configs, &config)?;
            let host = config
                .get_host(&host)
                .ok_or_else(|| GshError::HostNotFound(host.clone()))?;

            if host.supports_op(&op) {
                println!("supported");
            } else {
                println!("unsupported");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    setup_logging(&args.log_level, args.log_file)?;

    info!("Starting gsh v{}", env!("CARGO_PKG_VERSION"));

    let mut loader = ConfigLoader::new();
    if let Some(home) = args.home {
        loader = loader.with_home_dir(home);
    }
    if args.strict {
        loader = loader.with_parse_mode(ParseMode::Strict);
    }

    let configs = loader.load()?;

    run(args.command, &configs)
}
