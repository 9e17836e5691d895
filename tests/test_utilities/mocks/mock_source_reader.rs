use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use vuln_digest::prelude::*;

/// Mock SourceReader serving fixed content, recording which sources were asked for
#[derive(Clone)]
pub struct MockSourceReader {
    content: String,
    should_fail: bool,
    pub requested: Arc<Mutex<Vec<Option<PathBuf>>>>,
}

impl MockSourceReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
            requested: Arc::default(),
        }
    }

    pub fn from_fixture(name: &str) -> Self {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name);
        Self::new(std::fs::read_to_string(path).unwrap())
    }

    pub fn failing() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
            requested: Arc::default(),
        }
    }
}

#[async_trait]
impl SourceReader for MockSourceReader {
    async fn read_all(&self, source: Option<&Path>) -> Result<String> {
        self.requested
            .lock()
            .unwrap()
            .push(source.map(Path::to_path_buf));
        if self.should_fail {
            anyhow::bail!("Mock source read failure");
        }
        Ok(self.content.clone())
    }
}
