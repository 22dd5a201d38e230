//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes document analysis over the MCP protocol on stdio. The server is a
//! presentation layer: every tool delegates to `lexdiv-core`, using the same
//! analyzer settings the CLI derives from configuration.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use lexdiv_core::{
    BuiltinTagger, DEFAULT_MAX_INPUT_BYTES, Document, DocumentAnalyzer, WindowSizes, run_batch,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The document text.
    pub text: String,
    /// Name to report in the result row (default: "document").
    pub filename: Option<String>,
    /// Treat the text as Markdown and analyze only its readable words.
    #[serde(default)]
    pub markdown: bool,
    /// All-words MATTR window (5-500). Defaults to the server setting.
    pub win_all: Option<usize>,
    /// Part-of-speech MATTR window (5-200). Defaults to the server setting.
    pub win_pos: Option<usize>,
}

/// Parameters for the `analyze_batch` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeBatchParams {
    /// Documents to analyze, each with a filename and text.
    pub documents: Vec<Document>,
    /// All-words MATTR window (5-500). Defaults to the server setting.
    pub win_all: Option<usize>,
    /// Part-of-speech MATTR window (5-200). Defaults to the server setting.
    pub win_pos: Option<usize>,
}

/// MCP server exposing lexdiv analysis.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    analyzer: Arc<DocumentAnalyzer<BuiltinTagger>>,
    windows: WindowSizes,
    max_input: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ProjectServer {
    /// Server with built-in resources, default windows, and the default input limit.
    pub fn new() -> Self {
        Self::with_settings(
            DocumentAnalyzer::new(BuiltinTagger::new()),
            WindowSizes::default(),
            Some(DEFAULT_MAX_INPUT_BYTES),
        )
    }

    /// Server with an explicit analyzer, default windows, and input limit.
    pub fn with_settings(
        analyzer: DocumentAnalyzer<BuiltinTagger>,
        windows: WindowSizes,
        max_input: Option<usize>,
    ) -> Self {
        Self {
            tool_router: Self::tool_router(),
            analyzer: Arc::new(analyzer),
            windows,
            max_input,
        }
    }

    fn resolve_windows(
        &self,
        win_all: Option<usize>,
        win_pos: Option<usize>,
    ) -> Result<WindowSizes, McpError> {
        WindowSizes::new(
            win_all.unwrap_or(self.windows.all()),
            win_pos.unwrap_or(self.windows.pos()),
        )
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    fn check_size(&self, len: usize) -> Result<(), McpError> {
        match self.max_input {
            Some(max) if len > max => Err(McpError::invalid_params(
                format!("input too large: {len} bytes (limit: {max} bytes)"),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "win_all": self.windows.all(),
            "win_pos": self.windows.pos(),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Analyze a single document.
    #[tool(
        description = "Compute lexical diversity (MATTR over all words, verbs, nouns, adjectives, adverbs) and lexical sophistication (academic-word, bigram, trigram ratios) for one text. Returns one result row as JSON."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_text",
            markdown = params.markdown,
            "executing MCP tool"
        );
        self.check_size(params.text.len())?;
        let windows = self.resolve_windows(params.win_all, params.win_pos)?;

        let filename = params.filename.unwrap_or_else(|| "document".to_string());
        let document = if params.markdown {
            Document::from_markdown(filename, &params.text)
        } else {
            Document::new(filename, params.text)
        };

        let row = self
            .analyzer
            .analyze(&document.filename, &document.text, windows)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let json = serde_json::to_string_pretty(&row)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "analyze_text", filename = %row.filename, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Analyze several documents at once.
    #[tool(
        description = "Analyze several documents in one call. Returns result rows in input order plus a list of documents that failed and why."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_batch(
        &self,
        Parameters(params): Parameters<AnalyzeBatchParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_batch",
            documents = params.documents.len(),
            "executing MCP tool"
        );
        let total: usize = params.documents.iter().map(|d| d.text.len()).sum();
        self.check_size(total)?;
        let windows = self.resolve_windows(params.win_all, params.win_pos)?;

        let report = run_batch(&*self.analyzer, &params.documents, windows, |_| {});

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "analyze_batch",
            analyzed = report.rows.len(),
            failed = report.failures.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text or analyze_batch to score documents for lexical diversity and sophistication.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        serde_json::from_str(extract_text(result).expect("text content")).expect("valid JSON")
    }

    fn text_params(text: &str) -> AnalyzeTextParams {
        AnalyzeTextParams {
            text: text.to_string(),
            filename: Some("essay.txt".to_string()),
            markdown: false,
            win_all: None,
            win_pos: None,
        }
    }

    #[test]
    fn server_info_has_correct_name() {
        let info = ServerHandler::get_info(&ProjectServer::new());
        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("analyze_text"));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ProjectServer::new();
        let result = server
            .get_info(Parameters(GetInfoParams {
                format: "json".to_string(),
            }))
            .unwrap();
        let json = json_of(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["win_all"], 50);
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = ProjectServer::new();
        let result = server
            .get_info(Parameters(GetInfoParams {
                format: default_format(),
            }))
            .unwrap();
        assert!(extract_text(&result).unwrap().contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn analyze_text_returns_a_row() {
        let server = ProjectServer::new();
        let result = server
            .analyze_text(Parameters(text_params(
                "The researchers analyze the data. The data show a significant trend.",
            )))
            .unwrap();
        assert!(!result.is_error.unwrap_or(false));

        let json = json_of(&result);
        assert_eq!(json["Filename"], "essay.txt");
        for column in lexdiv_core::COLUMNS.iter().skip(1) {
            let value = json[column].as_f64().expect("numeric metric");
            assert!((0.0..=1.0).contains(&value), "{column} = {value}");
        }
        assert!(json["LexSoph_AWLratio"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn analyze_text_rejects_bad_windows() {
        let server = ProjectServer::new();
        let mut params = text_params("Some words here.");
        params.win_all = Some(4);
        assert!(server.analyze_text(Parameters(params)).is_err());
    }

    #[test]
    fn analyze_text_enforces_input_limit() {
        let server = ProjectServer::with_settings(
            DocumentAnalyzer::new(BuiltinTagger::new()),
            WindowSizes::default(),
            Some(8),
        );
        assert!(server.analyze_text(Parameters(text_params("far too long for the limit"))).is_err());
    }

    #[test]
    fn analyze_text_strips_markdown() {
        let server = ProjectServer::new();
        let mut params = text_params("# Title\n\n```\ncode code code\n```\n\nword");
        params.markdown = true;
        let json = json_of(&server.analyze_text(Parameters(params)).unwrap());
        // Title, word: two distinct words out of two
        assert_eq!(json["All_words_MATTR"], 1.0);
    }

    #[test]
    fn analyze_batch_keeps_order() {
        let server = ProjectServer::new();
        let params = AnalyzeBatchParams {
            documents: vec![
                Document::new("one.txt", "First document text."),
                Document::new("two.txt", "Second document text."),
            ],
            win_all: Some(5),
            win_pos: Some(5),
        };
        let json = json_of(&server.analyze_batch(Parameters(params)).unwrap());
        assert_eq!(json["rows"][0]["Filename"], "one.txt");
        assert_eq!(json["rows"][1]["Filename"], "two.txt");
        assert_eq!(json["failures"].as_array().unwrap().len(), 0);
    }
}
