//! Intermediate specification model extracted from an OpenAPI document
//!
//! The model is built once per run, read by the generator and then dropped.

/// One query parameter or one top-level request body property
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    /// Parameter or property name
    pub name: String,
    /// Declared schema type (`string`, `number`, `integer`, `boolean`, `object`, `array`, ...)
    pub schema_type: String,
    /// Declared `example`, if any
    pub example: Option<serde_json::Value>,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, schema_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema_type: schema_type.into(),
            example: None,
        }
    }

    /// Attach an example value
    pub fn with_example(mut self, example: serde_json::Value) -> Self {
        self.example = Some(example);
        self
    }
}

/// One HTTP method defined on a path
#[derive(Debug, Clone, PartialEq)]
pub struct OperationSpec {
    /// Lowercase HTTP verb
    pub method: String,
    /// Declared parameters; empty when there are none
    pub params: Vec<ParamSpec>,
    /// Top-level `application/json` body properties; empty when there are none
    pub body: Vec<ParamSpec>,
}

impl OperationSpec {
    /// Whether the request body declares any properties
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

/// One documented path with its operations
#[derive(Debug, Clone, PartialEq)]
pub struct PathSpec {
    /// File-system-safe name derived from `path`
    pub dir_name: String,
    /// Raw OpenAPI path template, e.g. `/users/{id}`
    pub path: String,
    pub methods: Vec<OperationSpec>,
}
