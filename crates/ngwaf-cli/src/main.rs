//! NGWAF Terraform import CLI
//!
//! Inventories an NGWAF corp and writes Terraform `import` blocks for every
//! object that is not yet under management.

mod commands;

use clap::{Parser, Subcommand};
use commands::{GenerateCommand, ScaffoldCommand};
use tracing_subscriber::{layer::SubscriberExt, Layer};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "NGWAF_LOG_LEVEL", global = true)]
    log_level: String,

    /// Log format: compact, full
    #[arg(
        long,
        default_value = "compact",
        env = "NGWAF_LOG_FORMAT",
        global = true
    )]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append import blocks for every unmanaged NGWAF object
    Generate(GenerateCommand),
    /// Write provider, version and variable files for the sigsci provider
    Scaffold(ScaffoldCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = cli.log_level.clone();

    // If RUST_LOG is set, use it directly; otherwise use our default filter
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .expect("Invalid RUST_LOG environment variable")
    } else {
        tracing_subscriber::EnvFilter::new(format!(
            "ngwaf_cli={level},\
             ngwaf_import={level},\
             ngwaf_import_sigsci={level},\
             ngwaf_import_types={level},\
             h2=warn,\
             hyper=warn,\
             reqwest=warn,\
             rustls=warn",
            level = log_level
        ))
    };

    let fmt_layer = match cli.log_format.as_str() {
        "full" => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .boxed(),
        _ => tracing_subscriber::fmt::layer() // "compact" or any other value
            .compact()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default subscriber");

    match cli.command {
        Commands::Generate(generate_cmd) => generate_cmd.execute(),
        Commands::Scaffold(scaffold_cmd) => scaffold_cmd.execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "ngwaf-import",
            "generate",
            "--email",
            "ops@example.com",
            "--token",
            "t0k3n",
            "--corp",
            "acme",
            "--site",
            "www",
            "--output",
            "imports.tf",
            "--scaffold",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.connection.corp, "acme");
                assert_eq!(cmd.connection.site.as_deref(), Some("www"));
                assert_eq!(cmd.output, std::path::PathBuf::from("imports.tf"));
                assert_eq!(
                    cmd.state_file,
                    std::path::PathBuf::from("terraform.tfstate")
                );
                assert!(cmd.scaffold);
            }
            Commands::Scaffold(_) => panic!("Expected generate command"),
        }
    }
}
