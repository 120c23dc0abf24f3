//! Provider-specific tool schemas and the conversions to and from them.

pub mod anthropic;
pub mod format;
pub mod gemini;
pub mod openai;
pub mod schema;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

use crate::error::Result;
use crate::mcp::types::McpTool;

pub use format::tool_response_text;
pub use schema::{filter_properties, parse_tool_arguments, ParsedArguments, SUPPORTED_SCHEMA_KEYS};

/// The tool-calling dialects this crate speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProviderFamily {
    #[strum(serialize = "openai")]
    OpenAi,
    Anthropic,
    #[strum(to_string = "gemini", serialize = "google")]
    Gemini,
}

/// Project `tools` into the given family's tool list as JSON.
///
/// OpenAI and Anthropic get an empty array for no tools, matching Gemini.
pub fn project_tools(family: ProviderFamily, tools: Option<&[McpTool]>) -> Result<Value> {
    let tools_or_empty = tools.unwrap_or_default();
    let projected = match family {
        ProviderFamily::OpenAi => {
            serde_json::to_value(openai::mcp_tools_to_openai_tools(tools_or_empty))?
        }
        ProviderFamily::Anthropic => {
            serde_json::to_value(anthropic::mcp_tools_to_anthropic_tools(tools_or_empty))?
        }
        ProviderFamily::Gemini => serde_json::to_value(gemini::mcp_tools_to_gemini_tools(tools))?,
    };
    Ok(projected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn family_parses_names_and_aliases() {
        assert_eq!("openai".parse::<ProviderFamily>().unwrap(), ProviderFamily::OpenAi);
        assert_eq!("Anthropic".parse::<ProviderFamily>().unwrap(), ProviderFamily::Anthropic);
        assert_eq!("google".parse::<ProviderFamily>().unwrap(), ProviderFamily::Gemini);
        assert!("mistral".parse::<ProviderFamily>().is_err());
        assert_eq!(ProviderFamily::Gemini.to_string(), "gemini");
    }

    #[test]
    fn project_tools_dispatches_by_family() {
        let tools = vec![McpTool::new("t1", "s1", "search", json!({"properties": {}}))];

        let openai = project_tools(ProviderFamily::OpenAi, Some(&tools)).unwrap();
        assert_eq!(openai[0]["type"], "function");

        let anthropic = project_tools(ProviderFamily::Anthropic, Some(&tools)).unwrap();
        assert_eq!(anthropic[0]["input_schema"], json!({"properties": {}}));

        let gemini = project_tools(ProviderFamily::Gemini, None).unwrap();
        assert_eq!(gemini, json!([]));
    }
}
