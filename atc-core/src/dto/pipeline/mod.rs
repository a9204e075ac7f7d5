//! Pipeline request DTOs

use serde::{Deserialize, Serialize};

/// Body of `PUT /api/v1/pipelines/{name}/rename`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePipeline {
    /// The name the pipeline should have after the rename
    pub name: String,
}

impl RenamePipeline {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_body_is_exact() {
        let body = serde_json::to_string(&RenamePipeline::new("newpipelinename")).unwrap();
        assert_eq!(body, r#"{"name":"newpipelinename"}"#);
    }
}
