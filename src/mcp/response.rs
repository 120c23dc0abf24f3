//! Per-turn tool response bookkeeping.

use tracing::debug;

use crate::error::Result;

use super::types::{McpToolResponse, ToolResponseUpdate};

/// Text emitted alongside every response update.
pub const UPDATE_TEXT: &str = "\n";

/// Receives the turn's response list each time it changes.
pub trait ToolResponseSink: Send + Sync {
    fn on_update(&self, update: ToolResponseUpdate);
}

impl<F> ToolResponseSink for F
where
    F: Fn(ToolResponseUpdate) + Send + Sync,
{
    fn on_update(&self, update: ToolResponseUpdate) {
        self(update)
    }
}

/// Fires the update callback when dropped, whether the merge succeeded,
/// returned an error, or panicked.
struct NotifyOnDrop<'a, F>
where
    F: FnOnce(ToolResponseUpdate),
{
    responses: &'a mut Vec<McpToolResponse>,
    on_update: Option<F>,
}

impl<F> Drop for NotifyOnDrop<'_, F>
where
    F: FnOnce(ToolResponseUpdate),
{
    fn drop(&mut self) {
        if let Some(on_update) = self.on_update.take() {
            on_update(ToolResponseUpdate {
                text: UPDATE_TEXT.to_string(),
                tool_responses: self.responses.clone(),
            });
        }
    }
}

/// Merge `response` into `responses` and notify `on_update` exactly once.
///
/// An existing entry with the same `id` has its `status` and `response`
/// replaced in place; otherwise the response is appended, whatever its `id`
/// (including an empty one). The callback runs after the mutation, and also
/// while unwinding if the merge panics.
pub fn upsert_mcp_tool_response<F>(
    responses: &mut Vec<McpToolResponse>,
    response: McpToolResponse,
    on_update: F,
) -> Result<()>
where
    F: FnOnce(ToolResponseUpdate),
{
    let guard = NotifyOnDrop {
        responses,
        on_update: Some(on_update),
    };
    merge_response(&mut *guard.responses, response);
    drop(guard);
    Ok(())
}

fn merge_response(responses: &mut Vec<McpToolResponse>, response: McpToolResponse) {
    match responses.iter_mut().find(|existing| existing.id == response.id) {
        Some(existing) => {
            debug!(id = %response.id, status = %response.status, "updating tool response");
            existing.status = response.status;
            existing.response = response.response;
        }
        None => {
            debug!(id = %response.id, status = %response.status, "appending tool response");
            responses.push(response);
        }
    }
}
