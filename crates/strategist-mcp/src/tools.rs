// Rust guideline compliant 2026-02-13

use rmcp::{
    handler::server::{
        router::tool::ToolRouter,
        wrapper::{Json, Parameters},
    },
    schemars,
    service::RequestContext,
    RoleServer,
};
use serde::{Deserialize, Serialize};
use strategist::{OutlineAdapter, OutlineError, OutlineRequest, OutlineResponse};
use tokio_util::sync::CancellationToken;

/// Registered name of the outline tool.
pub const TOOL_NAME: &str = "generate_outline";

/// Input for generating an outline.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateOutlineInput {
    #[schemars(description = "Topic to build a content outline for")]
    pub topic: String,
}

/// Structured result of the outline tool.
///
/// This is the tool's wire schema (`outputSchema` / `structuredContent`).
/// It mirrors [`OutlineResponse`] so the library stays free of MCP and
/// schemars types.
#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct GenerateOutlineOutput {
    #[schemars(description = "Hierarchical outline generated for the topic")]
    pub outline: String,
}

impl From<OutlineResponse> for GenerateOutlineOutput {
    fn from(response: OutlineResponse) -> Self {
        Self {
            outline: response.outline,
        }
    }
}

/// MCP server that exposes the content strategist outline tool.
#[derive(Debug, Clone)]
pub struct OutlineServer {
    adapter: OutlineAdapter,
    pub tool_router: ToolRouter<Self>,
}

#[rmcp::tool_router]
impl OutlineServer {
    /// Construct a server around an already-configured adapter.
    pub fn new(adapter: OutlineAdapter) -> Self {
        Self {
            adapter,
            tool_router: Self::tool_router(),
        }
    }

    /// Generate a hierarchical content outline for a topic.
    #[rmcp::tool(
        description = "Act as a content strategist and return a hierarchical outline (Roman numerals, lettered sub-points) for the given topic"
    )]
    async fn generate_outline(
        &self,
        Parameters(input): Parameters<GenerateOutlineInput>,
        context: RequestContext<RoleServer>,
    ) -> Result<Json<GenerateOutlineOutput>, String> {
        self.generate_outline_impl(input, context.ct)
            .await
            .map(Json)
            .map_err(|err| err.to_string())
    }
}

impl OutlineServer {
    /// Run the adapter for one tool call. `cancel` is the request's
    /// cancellation token; once it fires the backend call is dropped.
    async fn generate_outline_impl(
        &self,
        input: GenerateOutlineInput,
        cancel: CancellationToken,
    ) -> Result<GenerateOutlineOutput, OutlineError> {
        let request = OutlineRequest::new(input.topic);
        self.adapter
            .generate_outline_with_cancel(&request, cancel)
            .await
            .map(GenerateOutlineOutput::from)
    }
}
