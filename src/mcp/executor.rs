//! Runs a turn's resolved tool calls and tracks their responses.

use std::sync::Arc;

use futures::future::join_all;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::invoke::call_mcp_tool;
use super::response::{upsert_mcp_tool_response, ToolResponseSink};
use super::transport::McpToolTransport;
use super::types::{McpToolResponse, ToolInvocation, ToolResponseStatus};

/// Executes tool invocations for one conversation turn.
///
/// A failing tool becomes an `Error` entry in the response list; the other
/// calls and the turn carry on.
pub struct ToolExecutor {
    transport: Arc<dyn McpToolTransport>,
}

impl ToolExecutor {
    pub fn new(transport: Arc<dyn McpToolTransport>) -> Self {
        Self { transport }
    }

    /// Run every invocation concurrently and return the final response list.
    ///
    /// Entries appear in invocation order. `sink` is notified once per
    /// status change.
    pub async fn execute(
        &self,
        invocations: Vec<ToolInvocation>,
        sink: &dyn ToolResponseSink,
    ) -> Vec<McpToolResponse> {
        let responses = Mutex::new(Vec::with_capacity(invocations.len()));

        for invocation in &invocations {
            let entry = McpToolResponse::new(
                invocation.call_id.clone(),
                invocation.tool.clone(),
                ToolResponseStatus::Invoking,
            );
            merge(&responses, entry, sink).await;
        }

        join_all(
            invocations
                .iter()
                .map(|invocation| self.run_one(invocation, &responses, sink)),
        )
        .await;

        responses.into_inner()
    }

    async fn run_one(
        &self,
        invocation: &ToolInvocation,
        responses: &Mutex<Vec<McpToolResponse>>,
        sink: &dyn ToolResponseSink,
    ) {
        let entry = McpToolResponse::new(
            invocation.call_id.clone(),
            invocation.tool.clone(),
            ToolResponseStatus::Done,
        );
        let entry = match call_mcp_tool(self.transport.as_ref(), invocation).await {
            Ok(payload) => {
                debug!(call_id = %invocation.call_id, tool = %invocation.tool.id, "tool call finished");
                entry.with_response(payload)
            }
            Err(e) => {
                warn!(
                    call_id = %invocation.call_id,
                    tool = %invocation.tool.id,
                    error = %e,
                    "tool call failed"
                );
                McpToolResponse {
                    status: ToolResponseStatus::Error,
                    ..entry
                }
                .with_response(error_payload(&e.to_string()))
            }
        };
        merge(responses, entry, sink).await;
    }
}

async fn merge(
    responses: &Mutex<Vec<McpToolResponse>>,
    entry: McpToolResponse,
    sink: &dyn ToolResponseSink,
) {
    let mut responses = responses.lock().await;
    if let Err(e) = upsert_mcp_tool_response(&mut responses, entry, |update| {
        sink.on_update(update)
    }) {
        warn!(error = %e, "failed to record tool response");
    }
}

/// MCP-shaped error result carrying `message` as text content.
pub fn error_payload(message: &str) -> Value {
    json!({
        "isError": true,
        "content": [{ "type": "text", "text": message }],
    })
}
