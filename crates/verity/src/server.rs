//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the scoring engine and comparator over the MCP protocol via stdio
//! transport, so editors and assistants can score text without shelling out.
//!
//! Each `#[tool]` method delegates to `verity-core`; no scoring logic lives
//! here.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use verity_core::{
    Config, DEFAULT_MAX_INPUT_BYTES, Engine, InputLimits, PatternCategory, PatternDefinition,
    PatternResult, compare, markdown,
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
    /// The text to score.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Skip the minimum/maximum length check.
    #[serde(default)]
    pub skip_length_check: bool,
}

/// Parameters for the `compare_texts` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CompareTextsParams {
    /// First text.
    pub text_a: String,
    /// Second text.
    pub text_b: String,
}

/// Parameters for the `list_patterns` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct ListPatternsParams {
    /// Only list families in this category ("ai-pattern" or "cliche").
    pub category: Option<PatternCategory>,
}

/// MCP server exposing scoring and comparison to AI assistants.
#[derive(Clone)]
pub struct VerityServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    engine: Arc<Engine>,
    limits: Option<InputLimits>,
    max_input_bytes: Option<usize>,
}

impl Default for VerityServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl VerityServer {
    /// Create a server with the built-in patterns and default limits.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            engine: Arc::new(Engine::default()),
            limits: Some(InputLimits::default()),
            max_input_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
        }
    }

    /// Create a server that scores with the configured patterns, weights,
    /// and length envelope.
    pub fn from_config(config: &Config, max_input_bytes: Option<usize>) -> PatternResult<Self> {
        Ok(Self {
            tool_router: Self::tool_router(),
            engine: Arc::new(config.engine()?),
            limits: config.enforce_length.then(|| config.input_limits()),
            max_input_bytes,
        })
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
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

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score text for originality and machine-authorship.
    #[tool(
        description = "Score text for originality (0-100, higher is more original) and AI-generation likelihood (0-100). Returns located pattern matches, signals, and suggestions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_text",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let prose = if params.strip_markdown {
            markdown::strip_to_prose(&params.text)
        } else {
            params.text
        };
        if let Some(limits) = self.limits
            && !params.skip_length_check
        {
            limits
                .check(&prose)
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        }

        let report = self.engine.analyze(&prose);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "analyze_text",
            overall = report.overall_score,
            ai_generated = report.ai_generated_score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Compare two texts for shared wording.
    #[tool(
        description = "Compare two texts. Returns similarity (0-100, Jaccard index over longer words) and up to 10 shared four-word phrases."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn compare_texts(
        &self,
        Parameters(params): Parameters<CompareTextsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "compare_texts", "executing MCP tool");
        self.check_size(&params.text_a)?;
        self.check_size(&params.text_b)?;

        let report = compare(&params.text_a, &params.text_b);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "compare_texts",
            similarity = report.similarity,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// List the pattern families the engine scores against.
    #[tool(description = "List the pattern families in effect, optionally filtered by category.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn list_patterns(
        &self,
        Parameters(params): Parameters<ListPatternsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "list_patterns", category = ?params.category, "executing MCP tool");

        let definitions: Vec<PatternDefinition> = self
            .engine
            .library()
            .definitions()
            .into_iter()
            .filter(|d| params.category.is_none_or(|c| d.category == c))
            .collect();
        let json = to_json(&definitions)?;

        tracing::info!(
            tool = "list_patterns",
            count = definitions.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_handler]
impl ServerHandler for VerityServer {
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
                "{} MCP server. Use analyze_text to score prose for originality and AI-generation likelihood, compare_texts to check two submissions for overlap.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    const TEMPLATED: &str = "In conclusion, this essay will explore many reasons. \
                             In conclusion, this essay will explore many reasons. \
                             In conclusion, this essay will explore many reasons.";

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("output should be valid JSON")
    }

    #[test]
    fn server_info_has_correct_name() {
        let server = VerityServer::new();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let server = VerityServer::new();
        let info = ServerHandler::get_info(&server);

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains(env!("CARGO_PKG_NAME")));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = VerityServer::new();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let json = json_of(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = VerityServer::new();
        let params = Parameters(GetInfoParams {
            format: default_format(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn analyze_text_tool_scores_templated_prose() {
        let server = VerityServer::new();
        let params = Parameters(AnalyzeTextParams {
            text: TEMPLATED.to_string(),
            strip_markdown: false,
            skip_length_check: false,
        });

        let result = server
            .analyze_text(params)
            .expect("analyze_text should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let json = json_of(&result);
        assert!(json["ai_generated_score"].as_u64().unwrap() >= 60);
        assert_eq!(json["matches"].as_array().unwrap().len(), 6);
        assert_eq!(json["matches"][0]["match_type"], "ai-pattern");
    }

    #[test]
    fn analyze_text_tool_rejects_short_input() {
        let server = VerityServer::new();
        let params = Parameters(AnalyzeTextParams {
            text: "Too short.".to_string(),
            strip_markdown: false,
            skip_length_check: false,
        });

        let err = server.analyze_text(params).unwrap_err();
        assert!(err.message.contains("too short"));
    }

    #[test]
    fn analyze_text_tool_can_skip_length_check() {
        let server = VerityServer::new();
        let params = Parameters(AnalyzeTextParams {
            text: "Too short.".to_string(),
            strip_markdown: false,
            skip_length_check: true,
        });

        assert!(server.analyze_text(params).is_ok());
    }

    #[test]
    fn analyze_text_tool_enforces_byte_limit() {
        let server =
            VerityServer::from_config(&Config::default(), Some(16)).expect("default config builds");
        let params = Parameters(AnalyzeTextParams {
            text: TEMPLATED.to_string(),
            strip_markdown: false,
            skip_length_check: true,
        });

        let err = server.analyze_text(params).unwrap_err();
        assert!(err.message.contains("input too large"));
    }

    #[test]
    fn compare_texts_tool_works() {
        let server = VerityServer::new();
        let params = Parameters(CompareTextsParams {
            text_a: "The tide came in.".to_string(),
            text_b: "The tide came back.".to_string(),
        });

        let result = server
            .compare_texts(params)
            .expect("compare_texts should succeed");
        let json = json_of(&result);
        assert_eq!(json["similarity"], 67);
        assert!(json["common_phrases"].as_array().unwrap().is_empty());
    }

    #[test]
    fn list_patterns_tool_filters_by_category() {
        let server = VerityServer::new();
        let all = json_of(
            &server
                .list_patterns(Parameters(ListPatternsParams::default()))
                .expect("list_patterns should succeed"),
        );
        let cliches = json_of(
            &server
                .list_patterns(Parameters(ListPatternsParams {
                    category: Some(PatternCategory::Cliche),
                }))
                .expect("list_patterns should succeed"),
        );

        let all = all.as_array().unwrap();
        let cliches = cliches.as_array().unwrap();
        assert!(cliches.len() < all.len());
        assert!(cliches.iter().all(|d| d["category"] == "cliche"));
    }
}
