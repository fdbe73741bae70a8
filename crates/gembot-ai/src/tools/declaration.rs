//! Tool declarations: the capability surface shown to the model.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Integer,
    Boolean,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolParameter {
    pub name: String,
    pub kind: ParamType,
    pub description: String,
}

/// Name, description and typed parameter list of one tool.
///
/// Built with [`ToolDeclaration::new`] and the `param` builders; there are no
/// setters afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDeclaration {
    name: String,
    description: String,
    parameters: Vec<ToolParameter>,
    required: Vec<String>,
}

impl ToolDeclaration {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            required: Vec::new(),
        }
    }

    /// Add an optional parameter.
    pub fn param(
        mut self,
        name: impl Into<String>,
        kind: ParamType,
        description: impl Into<String>,
    ) -> Self {
        self.parameters.push(ToolParameter {
            name: name.into(),
            kind,
            description: description.into(),
        });
        self
    }

    /// Add a required parameter.
    pub fn required_param(
        self,
        name: impl Into<String>,
        kind: ParamType,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let mut decl = self.param(name.clone(), kind, description);
        decl.required.push(name);
        decl
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &[ToolParameter] {
        &self.parameters
    }

    pub fn is_required(&self, param: &str) -> bool {
        self.required.iter().any(|r| r == param)
    }

    /// JSON schema for the parameters, or `None` for a tool that takes none.
    pub fn parameters_schema(&self) -> Option<Value> {
        if self.parameters.is_empty() {
            return None;
        }

        let properties: Map<String, Value> = self
            .parameters
            .iter()
            .map(|p| {
                (
                    p.name.clone(),
                    json!({ "type": p.kind.as_str(), "description": p.description }),
                )
            })
            .collect();

        Some(json!({
            "type": "object",
            "properties": properties,
            "required": self.required,
        }))
    }

    /// Human-readable documentation: a signature line, the description, then
    /// one line per parameter.
    pub fn describe(&self) -> String {
        let signature: Vec<String> = self
            .parameters
            .iter()
            .map(|p| {
                let marker = if self.is_required(&p.name) { "" } else { "?" };
                format!("{}{marker}: {}", p.name, p.kind.as_str())
            })
            .collect();

        let mut out = format!("{}({})\n    {}", self.name, signature.join(", "), self.description);
        for p in &self.parameters {
            let requirement = if self.is_required(&p.name) {
                "required"
            } else {
                "optional"
            };
            out.push_str(&format!(
                "\n    {} ({}, {requirement}): {}",
                p.name,
                p.kind.as_str(),
                p.description
            ));
        }
        out
    }
}

/// Convert a declaration to a Gemini `functionDeclarations` entry.
pub fn to_gemini_tool(decl: &ToolDeclaration) -> Value {
    let mut tool = json!({
        "name": decl.name(),
        "description": decl.description(),
    });
    if let Some(schema) = decl.parameters_schema() {
        tool["parameters"] = schema;
    }
    tool
}
