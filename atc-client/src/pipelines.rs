//! Pipeline-related API endpoints

use crate::AtcClient;
use crate::error::Result;
use async_trait::async_trait;
use atc_core::domain::pipeline::Pipeline;
use atc_core::dto::pipeline::RenamePipeline;
use tracing::debug;

/// Pipeline management operations against an ATC
///
/// Operations on a single named pipeline report a missing pipeline as
/// `Ok(false)` / `Ok(None)`; `Err` is reserved for failures.
#[async_trait]
pub trait PipelineApi: Send + Sync {
    /// Pause a pipeline. `Ok(false)` if it does not exist.
    async fn pause_pipeline(&self, name: &str) -> Result<bool>;

    /// Unpause a pipeline. `Ok(false)` if it does not exist.
    async fn unpause_pipeline(&self, name: &str) -> Result<bool>;

    /// Fetch a single pipeline. `Ok(None)` if it does not exist.
    async fn pipeline(&self, name: &str) -> Result<Option<Pipeline>>;

    /// List every pipeline in the order the ATC returns them.
    async fn list_pipelines(&self) -> Result<Vec<Pipeline>>;

    /// Delete a pipeline. `Ok(false)` if it does not exist.
    async fn delete_pipeline(&self, name: &str) -> Result<bool>;

    /// Rename a pipeline. `Ok(false)` if `old_name` does not exist.
    async fn rename_pipeline(&self, old_name: &str, new_name: &str) -> Result<bool>;

    /// Set the display order of pipelines.
    async fn order_pipelines(&self, names: &[String]) -> Result<()>;
}

impl AtcClient {
    // =============================================================================
    // Pipeline State
    // =============================================================================

    /// Pause a pipeline
    ///
    /// # Arguments
    /// * `name` - The pipeline name
    ///
    /// # Returns
    /// `true` if the pipeline was paused, `false` if the ATC has no such pipeline
    ///
    /// # Example
    /// ```no_run
    /// # use atc_client::AtcClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = AtcClient::new("http://localhost:8080");
    /// if !client.pause_pipeline("main").await? {
    ///     eprintln!("pipeline 'main' not found");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn pause_pipeline(&self, name: &str) -> Result<bool> {
        let url = self.pipelines_url(&[name, "pause"])?;
        debug!(pipeline = name, "pausing pipeline");
        let response = self.client.put(url).send().await?;

        self.handle_found_response(response).await
    }

    /// Unpause a pipeline
    ///
    /// # Returns
    /// `true` if the pipeline was unpaused, `false` if the ATC has no such pipeline
    pub async fn unpause_pipeline(&self, name: &str) -> Result<bool> {
        let url = self.pipelines_url(&[name, "unpause"])?;
        debug!(pipeline = name, "unpausing pipeline");
        let response = self.client.put(url).send().await?;

        self.handle_found_response(response).await
    }

    // =============================================================================
    // Pipeline Query
    // =============================================================================

    /// Get a pipeline by name
    ///
    /// # Returns
    /// The pipeline, or `None` if the ATC has no such pipeline
    pub async fn pipeline(&self, name: &str) -> Result<Option<Pipeline>> {
        let url = self.pipelines_url(&[name])?;
        debug!(pipeline = name, "fetching pipeline");
        let response = self.client.get(url).send().await?;

        self.handle_optional_response(response).await
    }

    /// List all pipelines
    ///
    /// # Returns
    /// Every pipeline, in the order the ATC returned them
    pub async fn list_pipelines(&self) -> Result<Vec<Pipeline>> {
        let url = self.pipelines_url(&[])?;
        debug!("listing pipelines");
        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // Pipeline Management
    // =============================================================================

    /// Delete a pipeline
    ///
    /// # Returns
    /// `true` if the pipeline was deleted, `false` if the ATC has no such pipeline
    pub async fn delete_pipeline(&self, name: &str) -> Result<bool> {
        let url = self.pipelines_url(&[name])?;
        debug!(pipeline = name, "deleting pipeline");
        let response = self.client.delete(url).send().await?;

        self.handle_found_response(response).await
    }

    /// Rename a pipeline
    ///
    /// # Arguments
    /// * `old_name` - The current pipeline name
    /// * `new_name` - The name to give it
    ///
    /// # Returns
    /// `true` if the pipeline was renamed, `false` if `old_name` does not exist
    pub async fn rename_pipeline(&self, old_name: &str, new_name: &str) -> Result<bool> {
        let url = self.pipelines_url(&[old_name, "rename"])?;
        debug!(pipeline = old_name, new_name, "renaming pipeline");
        let response = self
            .client
            .put(url)
            .json(&RenamePipeline::new(new_name))
            .send()
            .await?;

        self.handle_found_response(response).await
    }

    /// Set the display order of pipelines
    ///
    /// # Arguments
    /// * `names` - Pipeline names, first to last
    pub async fn order_pipelines(&self, names: &[String]) -> Result<()> {
        let url = self.pipelines_url(&["ordering"])?;
        debug!(count = names.len(), "ordering pipelines");
        let response = self.client.put(url).json(names).send().await?;

        self.handle_empty_response(response).await
    }
}

#[async_trait]
impl PipelineApi for AtcClient {
    async fn pause_pipeline(&self, name: &str) -> Result<bool> {
        AtcClient::pause_pipeline(self, name).await
    }

    async fn unpause_pipeline(&self, name: &str) -> Result<bool> {
        AtcClient::unpause_pipeline(self, name).await
    }

    async fn pipeline(&self, name: &str) -> Result<Option<Pipeline>> {
        AtcClient::pipeline(self, name).await
    }

    async fn list_pipelines(&self) -> Result<Vec<Pipeline>> {
        AtcClient::list_pipelines(self).await
    }

    async fn delete_pipeline(&self, name: &str) -> Result<bool> {
        AtcClient::delete_pipeline(self, name).await
    }

    async fn rename_pipeline(&self, old_name: &str, new_name: &str) -> Result<bool> {
        AtcClient::rename_pipeline(self, old_name, new_name).await
    }

    async fn order_pipelines(&self, names: &[String]) -> Result<()> {
        AtcClient::order_pipelines(self, names).await
    }
}
