use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use ngwaf_import::write_scaffold;

#[derive(Args)]
pub struct ScaffoldCommand {
    /// Terraform working directory (defaults to the current directory)
    #[arg(long, env = "NGWAF_WORKING_DIR")]
    pub working_dir: Option<PathBuf>,
}

impl ScaffoldCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let dir = super::working_dir(self.working_dir.as_deref())?;
        for path in write_scaffold(&dir)? {
            println!("{} {}", "wrote".bright_green(), path.display());
        }
        Ok(())
    }
}
