//! Pipeline command handlers
//!
//! Handles all pipeline-related CLI commands: pausing, unpausing, viewing,
//! listing, deleting, renaming and ordering.

use anyhow::{Context, Result};
use atc_client::PipelineApi;
use atc_core::domain::pipeline::Pipeline;
use clap::Subcommand;
use colored::*;

/// Pipeline subcommands
#[derive(Subcommand)]
pub enum PipelineCommands {
    /// Pause a pipeline
    Pause {
        /// Pipeline name
        name: String,
    },
    /// Unpause a pipeline
    Unpause {
        /// Pipeline name
        name: String,
    },
    /// Get pipeline details
    Get {
        /// Pipeline name
        name: String,
    },
    /// List all pipelines
    List,
    /// Delete a pipeline
    Delete {
        /// Pipeline name
        name: String,
    },
    /// Rename a pipeline
    Rename {
        /// Current pipeline name
        old_name: String,
        /// New pipeline name
        new_name: String,
    },
    /// Set the display order of pipelines
    Order {
        /// Pipeline names, first to last
        #[arg(required = true)]
        names: Vec<String>,
    },
}

/// Handle pipeline commands
///
/// Routes pipeline subcommands to their respective handlers.
pub async fn handle_pipeline_command(command: PipelineCommands, api: &dyn PipelineApi) -> Result<()> {
    match command {
        PipelineCommands::Pause { name } => pause_pipeline(api, &name).await,
        PipelineCommands::Unpause { name } => unpause_pipeline(api, &name).await,
        PipelineCommands::Get { name } => get_pipeline(api, &name).await,
        PipelineCommands::List => list_pipelines(api).await,
        PipelineCommands::Delete { name } => delete_pipeline(api, &name).await,
        PipelineCommands::Rename { old_name, new_name } => {
            rename_pipeline(api, &old_name, &new_name).await
        }
        PipelineCommands::Order { names } => order_pipelines(api, &names).await,
    }
}

fn not_found(name: &str) -> anyhow::Error {
    anyhow::anyhow!("pipeline '{}' not found", name)
}

async fn pause_pipeline(api: &dyn PipelineApi, name: &str) -> Result<()> {
    let found = api
        .pause_pipeline(name)
        .await
        .with_context(|| format!("Failed to pause pipeline '{}'", name))?;
    if !found {
        return Err(not_found(name));
    }

    println!("{}", format!("✓ Paused '{}'", name).green().bold());
    Ok(())
}

async fn unpause_pipeline(api: &dyn PipelineApi, name: &str) -> Result<()> {
    let found = api
        .unpause_pipeline(name)
        .await
        .with_context(|| format!("Failed to unpause pipeline '{}'", name))?;
    if !found {
        return Err(not_found(name));
    }

    println!("{}", format!("✓ Unpaused '{}'", name).green().bold());
    Ok(())
}

/// Get and display a single pipeline
async fn get_pipeline(api: &dyn PipelineApi, name: &str) -> Result<()> {
    let pipeline = api
        .pipeline(name)
        .await
        .with_context(|| format!("Failed to get pipeline '{}'", name))?
        .ok_or_else(|| not_found(name))?;

    print!("{}", format_pipeline_details(&pipeline));
    Ok(())
}

/// List all pipelines
async fn list_pipelines(api: &dyn PipelineApi) -> Result<()> {
    let pipelines = api
        .list_pipelines()
        .await
        .context("Failed to list pipelines")?;

    print!("{}", format_pipeline_list(&pipelines));
    Ok(())
}

async fn delete_pipeline(api: &dyn PipelineApi, name: &str) -> Result<()> {
    let found = api
        .delete_pipeline(name)
        .await
        .with_context(|| format!("Failed to delete pipeline '{}'", name))?;
    if !found {
        return Err(not_found(name));
    }

    println!(
        "{}",
        format!("✓ Pipeline '{}' deleted successfully!", name)
            .green()
            .bold()
    );
    Ok(())
}

async fn rename_pipeline(api: &dyn PipelineApi, old_name: &str, new_name: &str) -> Result<()> {
    let found = api
        .rename_pipeline(old_name, new_name)
        .await
        .with_context(|| format!("Failed to rename pipeline '{}'", old_name))?;
    if !found {
        return Err(not_found(old_name));
    }

    println!(
        "{}",
        format!("✓ Pipeline '{}' renamed to '{}'", old_name, new_name)
            .green()
            .bold()
    );
    Ok(())
}

async fn order_pipelines(api: &dyn PipelineApi, names: &[String]) -> Result<()> {
    api.order_pipelines(names)
        .await
        .context("Failed to order pipelines")?;

    println!("{}", format!("✓ Ordered {} pipeline(s)", names.len()).green().bold());
    Ok(())
}

/// Render the pipeline listing, one line per pipeline in server order
fn format_pipeline_list(pipelines: &[Pipeline]) -> String {
    if pipelines.is_empty() {
        return format!("{}\n", "No pipelines found.".yellow());
    }

    let mut out = format!(
        "{}\n\n",
        format!("Found {} pipeline(s):", pipelines.len()).bold()
    );
    for pipeline in pipelines {
        let paused = if pipeline.paused {
            format!(" {}", "(paused)".yellow())
        } else {
            String::new()
        };
        out.push_str(&format!(
            "  {} {}{}\n",
            "▸".cyan(),
            pipeline.name.bold(),
            paused
        ));
    }
    out
}

/// Render detailed pipeline information
fn format_pipeline_details(pipeline: &Pipeline) -> String {
    let mut out = format!("{}\n", "Pipeline Details:".bold());
    out.push_str(&format!("  Name:   {}\n", pipeline.name.cyan()));
    out.push_str(&format!(
        "  Paused: {}\n",
        if pipeline.paused {
            "yes".yellow()
        } else {
            "no".normal()
        }
    ));

    if pipeline.groups.is_empty() {
        return out;
    }

    out.push_str(&format!("\n{}\n", "Groups:".bold()));
    for group in &pipeline.groups {
        out.push_str(&format!("  {} {}\n", "▸".cyan(), group.name.bold()));
        out.push_str(&format!(
            "    Jobs:      {}\n",
            group.jobs.join(", ").dimmed()
        ));
        out.push_str(&format!(
            "    Resources: {}\n",
            group.resources.join(", ").dimmed()
        ));
    }
    out
}
