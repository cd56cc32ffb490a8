use depgraph_layout::{FilterSpec, LayoutConfig, LayoutDump, LayoutEngine, parse_graph};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutOptions {
    search: Option<String>,
    language: Option<String>,
    role: Option<String>,
    absolute: Option<bool>,
    layout: Option<LayoutConfig>,
}

fn build_filter(options: &LayoutOptions) -> Result<FilterSpec, String> {
    let mut filter = FilterSpec::default();
    if let Some(search) = &options.search {
        filter.search = search.clone();
    }
    if let Some(language) = &options.language {
        filter.language = FilterSpec::parse_language(language);
    }
    if let Some(role) = &options.role {
        filter.role = FilterSpec::parse_role(role).map_err(|error| error.to_string())?;
    }
    Ok(filter)
}

fn layout_to_json(graph_json: &str, options: LayoutOptions) -> Result<String, String> {
    let graph = parse_graph(graph_json).map_err(|error| error.to_string())?;
    let filter = build_filter(&options)?;
    let engine = LayoutEngine::new(options.layout.clone().unwrap_or_default())
        .map_err(|error| error.to_string())?;
    let result = engine.layout(&graph, &filter);
    LayoutDump::from_layout(&result, options.absolute.unwrap_or(false))
        .to_json()
        .map_err(|error| error.to_string())
}

/// Lays out the analyzer graph and returns the layout dump as JSON.
#[wasm_bindgen]
pub fn layout_graph(graph_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<LayoutOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        LayoutOptions::default()
    };

    layout_to_json(graph_json, options).map_err(|error| JsValue::from_str(&error))
}

#[cfg(test)]
mod tests {
    use crate::{LayoutOptions, layout_to_json};

    const GRAPH: &str = r#"{
        "nodes": [
            {"id": "a", "path": "web/auth.ts", "category": "frontend", "role": "service"},
            {"id": "b", "path": "web/utils.ts", "category": "frontend", "role": "utility"}
        ],
        "edges": [{"source": "a", "target": "b"}]
    }"#;

    #[test]
    fn lays_out_filtered_graph() {
        let options: LayoutOptions = serde_json::from_str(r#"{"search": "auth"}"#).unwrap();
        let json = layout_to_json(GRAPH, options).unwrap();
        assert!(json.contains("role:frontend:service"));
        assert!(!json.contains("utils.ts"));
    }

    #[test]
    fn invalid_layout_options_are_reported() {
        let options: LayoutOptions =
            serde_json::from_str(r#"{"layout": {"columns": 0}}"#).unwrap();
        let error = layout_to_json(GRAPH, options).unwrap_err();
        assert!(error.contains("column"));
    }
}
