//! Import plan types
//!
//! An import plan is an ordered list of Terraform `import` blocks, each binding
//! a local resource address to a pre-existing remote object.

use serde::{Deserialize, Serialize};

/// One `import { to = ..., id = ... }` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportPlanEntry {
    /// Local address, `<terraform_type>.<local_name>`
    pub to: String,
    /// Key the provider's importer understands (`id` or `site:id`)
    pub id: String,
}

impl ImportPlanEntry {
    pub fn new(terraform_type: &str, local_name: &str, import_key: impl Into<String>) -> Self {
        Self {
            to: format!("{}.{}", terraform_type, local_name),
            id: import_key.into(),
        }
    }

    /// Render as an HCL `import` block, including the trailing newline
    pub fn to_hcl(&self) -> String {
        format!(
            "import {{\n  to = {}\n  id = {}\n}}\n",
            self.to,
            hcl_quote(&self.id)
        )
    }
}

impl std::fmt::Display for ImportPlanEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <- {}", self.to, self.id)
    }
}

/// Ordered, append-only sequence of import blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportPlanDocument {
    pub entries: Vec<ImportPlanEntry>,
}

impl ImportPlanDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = ImportPlanEntry>) {
        self.entries.extend(entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render entries as HCL; blocks are separated by a blank line
    pub fn render(entries: &[ImportPlanEntry]) -> String {
        entries
            .iter()
            .map(|e| format!("{}\n", e.to_hcl()))
            .collect()
    }
}

/// Quote a string as an HCL string literal
fn hcl_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // `${` and `%{` open template sequences unless doubled
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_address() {
        let entry = ImportPlanEntry::new("sigsci_site_rule", "wwwxyzB", "www:xyz1");
        assert_eq!(entry.to, "sigsci_site_rule.wwwxyzB");
        assert_eq!(entry.id, "www:xyz1");
    }

    #[test]
    fn test_entry_to_hcl() {
        let entry = ImportPlanEntry::new("sigsci_corp_list", "corpdotbad-ips", "corp.bad-ips");
        assert_eq!(
            entry.to_hcl(),
            "import {\n  to = sigsci_corp_list.corpdotbad-ips\n  id = \"corp.bad-ips\"\n}\n"
        );
    }

    #[test]
    fn test_hcl_quote_escapes() {
        assert_eq!(hcl_quote("plain"), "\"plain\"");
        assert_eq!(hcl_quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(hcl_quote("${var}"), "\"$${var}\"");
        assert_eq!(hcl_quote("%{if}"), "\"%%{if}\"");
        assert_eq!(hcl_quote("cost$5"), "\"cost$5\"");
    }

    #[test]
    fn test_document_render_separates_blocks() {
        let mut doc = ImportPlanDocument::new();
        assert!(doc.is_empty());
        doc.extend([
            ImportPlanEntry::new("sigsci_site", "www", "www"),
            ImportPlanEntry::new("sigsci_site", "api", "api"),
        ]);
        assert_eq!(doc.len(), 2);

        let rendered = ImportPlanDocument::render(&doc.entries);
        assert_eq!(
            rendered,
            "import {\n  to = sigsci_site.www\n  id = \"www\"\n}\n\n\
             import {\n  to = sigsci_site.api\n  id = \"api\"\n}\n\n"
        );
    }
}
