//! `generate`: inventory the corp and append import blocks

use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;
use ngwaf_import::{write_scaffold, FilePlanSink, Orchestrator, RunReport, RunScope, StateIds};
use ngwaf_import_sigsci::{SigSciClient, SigSciCredentials, DEFAULT_API_URL};
use ngwaf_import_types::ResourceKind;
use tracing::info;

/// NGWAF API connection and scope
#[derive(Args)]
pub struct ConnectionArgs {
    /// Email address associated with the API token
    #[arg(long, env = "NGWAF_EMAIL")]
    pub email: String,

    /// API access token
    #[arg(long, env = "NGWAF_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Corp short name
    #[arg(long, env = "NGWAF_CORP")]
    pub corp: String,

    /// Restrict the run to a single site
    #[arg(long, env = "TF_VAR_NGWAF_SITE")]
    pub site: Option<String>,

    /// Dashboard API base URL
    #[arg(long, env = "NGWAF_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Terraform working directory (defaults to the current directory)
    #[arg(long, env = "NGWAF_WORKING_DIR")]
    pub working_dir: Option<PathBuf>,

    /// Terraform state snapshot used to skip already-imported objects
    #[arg(long, default_value = "terraform.tfstate")]
    pub state_file: PathBuf,

    /// Import plan file to append to
    #[arg(long, default_value = "import.tf")]
    pub output: PathBuf,

    /// Write providers.tf, versions.tf and variables.tf first
    #[arg(long)]
    pub scaffold: bool,
}

impl GenerateCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        // Listing calls are awaited one at a time on a single thread
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        rt.block_on(self.run())
    }

    async fn run(self) -> anyhow::Result<()> {
        let dir = super::working_dir(self.working_dir.as_deref())?;
        let state_path = super::resolve(&dir, &self.state_file);
        let output_path = super::resolve(&dir, &self.output);
        info!("Working directory: {}", dir.display());

        let ConnectionArgs {
            email,
            token,
            corp,
            site,
            api_url,
        } = self.connection;

        let mut scope = RunScope::corp(corp);
        if let Some(site) = site {
            scope = scope.with_site(site);
        }
        scope.validate()?;

        if self.scaffold {
            write_scaffold(&dir)?;
        }

        let already_imported = StateIds::load_or_empty(&state_path);
        let client = SigSciClient::with_base_url(SigSciCredentials::new(email, token), api_url)?;

        let mut sink = FilePlanSink::new(&output_path);
        let report = Orchestrator::new(&client, scope)
            .run(&already_imported, &mut sink)
            .await?;

        print_report(&report, &output_path);
        Ok(())
    }
}

fn print_report(report: &RunReport, output: &Path) {
    println!();
    println!("{}", "Import plan summary".bright_white().bold());
    println!(
        "  {:<28} {:>7} {:>8} {:>9} {:>9}",
        "kind", "listed", "emitted", "existing", "filtered"
    );
    for kind in ResourceKind::ALL {
        let summary = report.summary(kind);
        let line = format!(
            "  {:<28} {:>7} {:>8} {:>9} {:>9}",
            kind.terraform_type(),
            summary.listed,
            summary.emitted,
            summary.already_imported,
            summary.filtered
        );
        if summary.listing_failures > 0 {
            println!(
                "{} {}",
                line.yellow(),
                format!("({} listing failures)", summary.listing_failures).yellow()
            );
        } else {
            println!("{}", line);
        }
    }
    println!();

    for collision in &report.collisions {
        println!(
            "{} {} is claimed by both {} and {}",
            "warning:".yellow().bold(),
            collision.address.bright_cyan(),
            collision.existing_id,
            collision.colliding_id
        );
    }

    let emitted = report.total_emitted();
    if emitted == 0 {
        println!("{}", "Nothing new to import.".bright_green());
        return;
    }

    println!(
        "{} {} import blocks appended to {}",
        "✓".bright_green(),
        emitted.to_string().bright_white().bold(),
        output.display().to_string().bright_cyan()
    );
    println!(
        "Next: {}",
        "terraform plan -generate-config-out=generated.tf".bright_yellow()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(dir: &Path, corp: &str, site: Option<&str>) -> GenerateCommand {
        GenerateCommand {
            connection: ConnectionArgs {
                email: "ops@example.com".to_string(),
                token: "test_token_12345".to_string(),
                corp: corp.to_string(),
                site: site.map(str::to_string),
                api_url: "http://127.0.0.1:9".to_string(),
            },
            working_dir: Some(dir.to_path_buf()),
            state_file: PathBuf::from("terraform.tfstate"),
            output: PathBuf::from("import.tf"),
            scaffold: true,
        }
    }

    #[test]
    fn test_blank_corp_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let err = command(dir.path(), "", None).execute().unwrap_err();

        assert!(err.to_string().contains("corp name is empty"));
        assert!(!dir.path().join("providers.tf").exists());
        assert!(!dir.path().join("import.tf").exists());
    }

    #[test]
    fn test_blank_site_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let err = command(dir.path(), "acme", Some("")).execute().unwrap_err();

        assert!(err.to_string().contains("site name is empty"));
        assert!(!dir.path().join("import.tf").exists());
    }
}
