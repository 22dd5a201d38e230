//! Serve command: MCP server on stdio.

use anyhow::Context;
use camino::Utf8Path;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use lexdiv_core::config::{Config, ConfigSources};
use lexdiv_core::{BuiltinTagger, DocumentAnalyzer};

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // Transport is always stdio; settings come from configuration.
}

/// Run the MCP server until the client disconnects.
///
/// Window sizes, academic words, category prefixes, and the input limit
/// are taken from configuration and serve as defaults for every tool call.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let windows = config.window_sizes().context("invalid window size")?;
    let base_dir = sources.primary_dir().unwrap_or_else(|| Utf8Path::new("."));
    let academic = config
        .academic_word_list(base_dir)
        .context("failed to load academic word list")?;
    let analyzer = DocumentAnalyzer::new(BuiltinTagger::new())
        .with_academic_words(academic)
        .with_categories(config.category_map());

    info!(
        win_all = windows.all(),
        win_pos = windows.pos(),
        "starting MCP server on stdio"
    );
    let service = ProjectServer::with_settings(analyzer, windows, config.input_limit())
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server terminated")?;
    info!("MCP server stopped");
    Ok(())
}
