//! Tests for projecting MCP tools into provider tool schemas.

use pretty_assertions::assert_eq;
use serde_json::json;
use toolcast::prelude::*;

fn search_tool() -> McpTool {
    McpTool::new(
        "t1",
        "s1",
        "search",
        json!({"properties": {"q": {"type": "string", "format": "uri"}}}),
    )
    .with_description("d")
}

fn rich_tool() -> McpTool {
    McpTool::new(
        "fs__read",
        "filesystem",
        "read_file",
        json!({
            "type": "object",
            "required": ["path"],
            "additionalProperties": false,
            "properties": {
                "path": {"type": "string", "description": "File path", "minLength": 1},
                "encoding": {"type": "string", "enum": ["utf8", "base64"], "default": "utf8"},
                "lines": {
                    "type": "array",
                    "items": {"type": "integer", "minimum": 0},
                    "maxItems": 2
                },
                "mode": {"anyOf": [{"type": "string"}, {"type": "null"}], "nullable": true, "title": "Mode"}
            }
        }),
    )
    .with_description("Read a file")
}

#[test]
fn openai_drops_format_anthropic_keeps_it() {
    let tools = vec![search_tool()];

    let openai = serde_json::to_value(mcp_tools_to_openai_tools(&tools)).unwrap();
    assert_eq!(
        openai[0]["function"]["parameters"]["properties"],
        json!({"q": {"type": "string"}})
    );

    let anthropic = serde_json::to_value(mcp_tools_to_anthropic_tools(&tools)).unwrap();
    assert_eq!(
        anthropic[0]["input_schema"]["properties"],
        json!({"q": {"type": "string", "format": "uri"}})
    );
}

#[test]
fn openai_and_gemini_filter_identically() {
    let tools = vec![rich_tool()];

    let openai = serde_json::to_value(mcp_tools_to_openai_tools(&tools)).unwrap();
    let gemini = serde_json::to_value(mcp_tools_to_gemini_tools(Some(&tools))).unwrap();

    let expected = json!({
        "path": {"type": "string", "description": "File path"},
        "encoding": {"type": "string", "enum": ["utf8", "base64"]},
        "lines": {"type": "array", "items": {"type": "integer", "minimum": 0}},
        "mode": {"anyOf": [{"type": "string"}, {"type": "null"}], "nullable": true}
    });
    assert_eq!(openai[0]["function"]["parameters"]["properties"], expected);
    assert_eq!(
        gemini[0]["functionDeclarations"][0]["parameters"]["properties"],
        expected
    );
    assert_eq!(gemini[0]["functionDeclarations"][0]["parameters"]["type"], "OBJECT");
}

#[test]
fn top_level_schema_keys_are_not_forwarded_to_openai() {
    let tools = vec![rich_tool()];
    let openai = serde_json::to_value(mcp_tools_to_openai_tools(&tools)).unwrap();
    let parameters = openai[0]["function"]["parameters"].as_object().unwrap();

    let mut keys: Vec<&str> = parameters.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["properties", "type"]);
}

#[test]
fn anthropic_gets_schema_verbatim() {
    let tools = vec![rich_tool()];
    let anthropic = mcp_tools_to_anthropic_tools(&tools);
    assert_eq!(anthropic[0].input_schema, rich_tool().input_schema);
}

#[test]
fn every_family_names_tools_by_id() {
    let tools = vec![search_tool(), rich_tool()];

    for family in [
        ProviderFamily::OpenAi,
        ProviderFamily::Anthropic,
        ProviderFamily::Gemini,
    ] {
        let projected = project_tools(family, Some(&tools)).unwrap();
        let names: Vec<&str> = match family {
            ProviderFamily::OpenAi => projected
                .as_array()
                .unwrap()
                .iter()
                .map(|t| t["function"]["name"].as_str().unwrap())
                .collect(),
            ProviderFamily::Anthropic => projected
                .as_array()
                .unwrap()
                .iter()
                .map(|t| t["name"].as_str().unwrap())
                .collect(),
            ProviderFamily::Gemini => projected[0]["functionDeclarations"]
                .as_array()
                .unwrap()
                .iter()
                .map(|t| t["name"].as_str().unwrap())
                .collect(),
        };
        assert_eq!(names, ["t1", "fs__read"], "family {family}");
    }
}

#[test]
fn gemini_projection_of_nothing_is_empty() {
    assert_eq!(
        serde_json::to_value(mcp_tools_to_gemini_tools(None)).unwrap(),
        json!([])
    );
    assert_eq!(
        serde_json::to_value(mcp_tools_to_gemini_tools(Some(&[]))).unwrap(),
        json!([])
    );
}

#[test]
fn tool_without_properties_projects_empty_property_map() {
    let tool = McpTool::new("bare", "s1", "ping", json!({"type": "object"}));
    let openai = mcp_tools_to_openai_tools(&[tool]);
    assert!(openai[0].function.parameters.properties.is_empty());
    assert!(openai[0].function.description.is_none());
}
