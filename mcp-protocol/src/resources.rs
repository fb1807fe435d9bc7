//! Static resource catalog served alongside the task tools.
//!
//! Three fixed URIs are backed by files under the assets directory, and a
//! `file://documents/{name}` template answers for arbitrary document
//! names. A missing or unreadable asset degrades to a short diagnostic
//! string returned as the resource body rather than a protocol error;
//! only a URI outside the catalog is an error.

use std::path::{Path, PathBuf};

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, Resource, ResourceTemplate};
use rmcp::ErrorData;
use serde_json::json;
use tracing::debug;

/// Productivity statistics and work patterns, as JSON.
pub const STATS_URI: &str = "stats://productivity_stats";
/// The bapple knowledgebase document.
pub const KNOWLEDGEBASE_URI: &str = "knowledgebase://bapple_knowledgebase";
/// Cheatsheet for the Todoist filter query language.
pub const FILTER_CHEATSHEET_URI: &str = "knowledgebase://filter_cheatsheet";

const DOCUMENTS_PREFIX: &str = "file://documents/";

/// Resolves resource URIs to file contents under an assets directory.
#[derive(Debug)]
pub struct ResourceCatalog {
    assets_dir: PathBuf,
}

impl ResourceCatalog {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }

    /// The fixed resources advertised to clients.
    pub fn list(&self) -> Vec<Resource> {
        vec![
            describe(
                STATS_URI,
                "productivity_stats",
                "Productivity statistics and work patterns",
                "application/json",
            ),
            describe(
                KNOWLEDGEBASE_URI,
                "bapple_knowledgebase",
                "Bapple knowledgebase",
                "text/markdown",
            ),
            describe(
                FILTER_CHEATSHEET_URI,
                "filter_cheatsheet",
                "Filter cheatsheet",
                "text/csv",
            ),
        ]
    }

    /// URI templates advertised to clients.
    pub fn templates(&self) -> Vec<ResourceTemplate> {
        vec![RawResourceTemplate {
            uri_template: "file://documents/{name}".to_string(),
            name: "document".to_string(),
            description: Some("Read a document by name".to_string()),
            mime_type: Some("text/plain".to_string()),
        }
        .no_annotation()]
    }

    /// Resolve a URI to its text content.
    pub async fn read(&self, uri: &str) -> Result<String, ErrorData> {
        debug!(uri = %uri, "reading resource");
        match uri {
            STATS_URI => Ok(self.read_asset("resources/productivity_stats.json").await),
            KNOWLEDGEBASE_URI => Ok(self.read_asset("resources/bapple_knowledgebase.md").await),
            FILTER_CHEATSHEET_URI => Ok(self.read_asset("resources/filters.csv").await),
            other => match other.strip_prefix(DOCUMENTS_PREFIX) {
                // Named documents are placeholders, not backed by files
                Some(name) if !name.is_empty() => Ok(format!("Content of {name}")),
                _ => Err(ErrorData::resource_not_found(
                    format!("Unknown resource URI: {other}"),
                    Some(json!({ "uri": other })),
                )),
            },
        }
    }

    async fn read_asset(&self, relative: &str) -> String {
        read_file(&self.assets_dir, relative).await
    }
}

/// Read a file under `base`, degrading any failure to a diagnostic string.
pub(crate) async fn read_file(base: &Path, relative: &str) -> String {
    match tokio::fs::read_to_string(base.join(relative)).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            format!("Error: file '{relative}' not found.")
        }
        Err(err) => format!("Error reading file '{relative}': {err}"),
    }
}

fn describe(uri: &str, name: &str, description: &str, mime_type: &str) -> Resource {
    let mut resource = RawResource::new(uri, name);
    resource.description = Some(description.to_string());
    resource.mime_type = Some(mime_type.to_string());
    resource.no_annotation()
}
