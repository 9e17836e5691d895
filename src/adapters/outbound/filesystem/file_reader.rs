use crate::adapters::outbound::templating::builtin;
use crate::application::dto::TemplateRef;
use crate::ports::outbound::{
    EscapeMode, SourceReader, TemplateLoader, TemplateSet, TemplateSource,
};
use crate::shared::error::ReportError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use futures::future::join_all;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::warn;

/// Extension shared by templates and partials
const TEMPLATE_EXTENSION: &str = "hbs";

/// FileSystemReader adapter for reading files and standard input
///
/// Implements both the SourceReader and TemplateLoader ports: scan results
/// and template fragments go through the same read path.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Reads a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    async fn safe_read_file(&self, path: &Path, file_description: &str) -> Result<String> {
        let metadata = tokio::fs::symlink_metadata(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

        validate_regular_file(&metadata, path, file_description)?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
    }

    /// Reads a stream to its end, keeping chunks in arrival order.
    ///
    /// Reading stops with an error once more than `max_size` bytes arrive.
    pub async fn read_stream<R>(reader: R, max_size: u64) -> Result<String>
    where
        R: AsyncRead + Unpin,
    {
        let mut buffer = Vec::new();
        reader
            .take(max_size + 1)
            .read_to_end(&mut buffer)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read standard input: {}", e))?;

        if buffer.len() as u64 > max_size {
            anyhow::bail!(
                "Security: standard input exceeds the maximum allowed size of {} bytes.",
                max_size
            );
        }

        String::from_utf8(buffer)
            .map_err(|e| anyhow::anyhow!("Standard input is not valid UTF-8: {}", e))
    }

    async fn read_template(&self, path: PathBuf) -> Result<TemplateSource> {
        let content = self
            .safe_read_file(&path, "template")
            .await
            .map_err(|e| ReportError::TemplateReadError {
                path: path.clone(),
                details: e.to_string(),
            })?;
        Ok(TemplateSource::new(template_name(&path), content))
    }

    /// Lists the `*.hbs` files next to the main template, excluding it
    ///
    /// When two files share a partial name the first in path order wins.
    async fn sibling_partials(&self, main: &Path) -> Result<Vec<PathBuf>> {
        let directory = match main.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let map_err = |e: std::io::Error| ReportError::TemplateReadError {
            path: directory.clone(),
            details: format!("Failed to list template directory: {}", e),
        };

        let mut entries = tokio::fs::read_dir(&directory).await.map_err(map_err)?;
        let mut partials = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(map_err)? {
            let path = entry.path();
            let is_template = path
                .extension()
                .is_some_and(|ext| ext == TEMPLATE_EXTENSION);
            if is_template && path.file_name() != main.file_name() {
                partials.push(path);
            }
        }

        // read_dir order is platform dependent
        partials.sort();

        let mut seen = HashSet::new();
        partials.retain(|path| {
            let name = template_name(path);
            let first = seen.insert(name.clone());
            if !first {
                warn!(
                    partial = %name,
                    path = %path.display(),
                    "partial name already taken by another template file; ignoring"
                );
            }
            first
        });
        Ok(partials)
    }
}

/// Template name: the file name up to its first dot ("vuln_card.md.hbs" -> "vuln_card")
fn template_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.split('.').next().map(str::to_string))
        .unwrap_or_default()
}

/// HTML escaping for `*.html.hbs` / `*.htm.hbs` templates, none otherwise
fn escape_mode_for(path: &Path) -> EscapeMode {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if name.contains(".html") || name.contains(".htm.") {
        EscapeMode::Html
    } else {
        EscapeMode::None
    }
}

#[async_trait]
impl SourceReader for FileSystemReader {
    async fn read_all(&self, source: Option<&Path>) -> Result<String> {
        match source {
            Some(path) => self
                .safe_read_file(path, "scan results")
                .await
                .map_err(|e| {
                    ReportError::SourceReadError {
                        source_name: path.display().to_string(),
                        details: e.to_string(),
                    }
                    .into()
                }),
            None => Self::read_stream(tokio::io::stdin(), MAX_FILE_SIZE)
                .await
                .map_err(|e| {
                    ReportError::SourceReadError {
                        source_name: "<stdin>".to_string(),
                        details: e.to_string(),
                    }
                    .into()
                }),
        }
    }
}

#[async_trait]
impl TemplateLoader for FileSystemReader {
    async fn load(&self, template: &TemplateRef) -> Result<TemplateSet> {
        let main_path = match template {
            TemplateRef::BuiltIn => return Ok(builtin::markdown_templates()),
            TemplateRef::File(path) => path,
        };

        let partial_paths = self.sibling_partials(main_path).await?;
        let main = self.read_template(main_path.clone()).await?;

        // An unreadable sibling only fails the render if the template uses it
        let partials = join_all(partial_paths.into_iter().map(|p| self.read_template(p)))
            .await
            .into_iter()
            .filter_map(|partial| match partial {
                Ok(partial) => Some(partial),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable partial");
                    None
                }
            })
            .collect();

        Ok(TemplateSet {
            main,
            partials,
            escape: escape_mode_for(main_path),
        })
    }
}
