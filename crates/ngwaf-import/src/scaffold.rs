//! Terraform bootstrap files for an import workspace

use std::path::{Path, PathBuf};

use ngwaf_import_types::{ImportError, ImportResult};
use tracing::info;

const PROVIDERS_TF: &str = r#"provider "sigsci" {
  corp       = var.NGWAF_CORP
  email      = var.NGWAF_EMAIL
  auth_token = var.NGWAF_TOKEN
}
"#;

const VERSIONS_TF: &str = r#"# Terraform 0.13+ requires providers to be declared in a "required_providers" block
terraform {
  required_providers {
    sigsci = {
      source  = "signalsciences/sigsci"
      version = ">= 2.1.0"
    }
  }
}
"#;

const VARIABLES_TF: &str = r#"#### NGWAF variables - Start

variable "NGWAF_CORP" {
  type        = string
  description = "Corp name for NGWAF"
}

variable "NGWAF_SITE" {
  type        = string
  description = "Site name for NGWAF"
}

variable "NGWAF_EMAIL" {
  type        = string
  description = "Email address associated with the token for the NGWAF API."
}

variable "NGWAF_TOKEN" {
  type        = string
  description = "Secret token for the NGWAF API."
  sensitive   = true
}

#### NGWAF variables - End
"#;

/// File name and contents of every scaffold file
pub const SCAFFOLD_FILES: [(&str, &str); 3] = [
    ("providers.tf", PROVIDERS_TF),
    ("versions.tf", VERSIONS_TF),
    ("variables.tf", VARIABLES_TF),
];

/// Write provider, version and variable declarations into `dir`
///
/// Existing files are overwritten. Returns the paths written.
pub fn write_scaffold(dir: &Path) -> ImportResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(SCAFFOLD_FILES.len());
    for (name, contents) in SCAFFOLD_FILES {
        let path = dir.join(name);
        std::fs::write(&path, contents).map_err(|source| ImportError::WriteFailure {
            path: path.clone(),
            source,
        })?;
        info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
