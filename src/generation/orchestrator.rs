//! Generation orchestration - renders the scaffold tree for every operation

use std::collections::HashMap;
use std::path::Path;

use tera::Context;
use tracing::{debug, info, warn};

use crate::core::config::RegenConfig;
use crate::core::error::{Error, Result};
use crate::core::templates::{TemplateKind, TemplateSet};
use crate::core::utils::rewrite_path;
use crate::generation::synthesizer::synthesize;
use crate::generation::types::{GenerationOptions, GenerationReport};
use crate::infrastructure::generation::TeraTemplateRenderer;
use crate::infrastructure::openapi::{OperationSpec, PathSpec};
use crate::infrastructure::output::FileSystemOutputService;

/// `bodies` binding for operations with body properties
pub const JSON_BODY_REFERENCE: &str = "application/json: \"{{ vars.req.body }}\"";
/// `bodies` binding for non-GET operations without body properties
pub const EMPTY_JSON_BODY: &str = "application/json: []";
/// `bodies` binding for GET operations without body properties
pub const NULL_BODY: &str = "null";

/// Suffix of the no-auth scenario description
const DESC_SUFFIX: &str = "のテスト";

/// What happened to one operation's `data.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataOutcome {
    Written,
    Preserved,
}

/// Orchestrates the scaffold generation workflow
pub struct GenerationOrchestrator {
    renderer: TeraTemplateRenderer,
    output_service: FileSystemOutputService,
}

impl GenerationOrchestrator {
    /// Compile `templates` once for the whole run
    pub fn new(templates: &TemplateSet) -> Result<Self> {
        Ok(Self {
            renderer: TeraTemplateRenderer::new(templates)?,
            output_service: FileSystemOutputService::new(),
        })
    }

    /// Render every path/method pair in `specs` under `options.output_dir`.
    ///
    /// Stops at the first error; files written by earlier operations stay on disk.
    pub fn generate(
        &self,
        specs: &[PathSpec],
        options: &GenerationOptions,
    ) -> Result<GenerationReport> {
        check_dir_names(specs)?;

        info!(
            paths = specs.len(),
            output = %options.output_dir.display(),
            "Generating scaffold"
        );

        let mut report = GenerationReport::default();
        for spec in specs {
            for operation in &spec.methods {
                match self.generate_operation(spec, operation, options)? {
                    DataOutcome::Written => report.data_written += 1,
                    DataOutcome::Preserved => report.data_preserved += 1,
                }
                report.operations += 1;
            }
        }

        Ok(report)
    }

    fn generate_operation(
        &self,
        spec: &PathSpec,
        operation: &OperationSpec,
        options: &GenerationOptions,
    ) -> Result<DataOutcome> {
        let method = operation.method.as_str();
        debug!(path = %spec.path, method, dir_name = %spec.dir_name, "Rendering operation");

        let base_dir = options.base_dir(&spec.dir_name, method);
        let no_auth_dir = options.no_auth_dir(&spec.dir_name, method);
        self.output_service.ensure_directory(&base_dir)?;
        self.output_service.ensure_directory(&no_auth_dir)?;

        let mut base = Context::new();
        base.insert("method", method);
        base.insert("path", &rewrite_path(&spec.path));
        base.insert("bodies", bodies_binding(operation));
        base.insert("host", &options.host);
        self.emit(TemplateKind::Base, &base, &base_dir)?;

        let mut no_auth = Context::new();
        no_auth.insert("desc", &format!("({method}) {}{DESC_SUFFIX}", spec.path));
        no_auth.insert("method", method);
        no_auth.insert("dirname", &spec.dir_name);
        self.emit(TemplateKind::NoAuth, &no_auth, &no_auth_dir)?;

        if let Some(config) = RegenConfig::load_from_dir(&no_auth_dir)? {
            if !config.allow_override {
                warn!(
                    path = %spec.path,
                    method,
                    "allowOverride is false, keeping existing test data"
                );
                return Ok(DataOutcome::Preserved);
            }
        }

        let mut data = Context::new();
        data.insert("jsonBody", &synthesize(&operation.body)?);
        data.insert("jsonQuery", &synthesize(&operation.params)?);
        self.emit(TemplateKind::Data, &data, &no_auth_dir)?;

        Ok(DataOutcome::Written)
    }

    fn emit(&self, kind: TemplateKind, context: &Context, dir: &Path) -> Result<()> {
        let content = self.renderer.render(kind, context)?;
        self.output_service
            .write_file(&dir.join(kind.output_file_name()), &content)
    }
}

/// Body-shape rule for the base request definition
pub fn bodies_binding(operation: &OperationSpec) -> &'static str {
    if operation.has_body() {
        JSON_BODY_REFERENCE
    } else if operation.method != "get" {
        EMPTY_JSON_BODY
    } else {
        NULL_BODY
    }
}

/// Reject documents where two distinct paths share a directory name, or
/// where a directory name would resolve outside `0_base/` or `1_noAuth/`
pub fn check_dir_names(specs: &[PathSpec]) -> Result<()> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(specs.len());

    for spec in specs {
        if matches!(spec.dir_name.as_str(), "." | "..") {
            return Err(Error::InvalidDirName {
                path: spec.path.clone(),
                dir_name: spec.dir_name.clone(),
            });
        }

        if let Some(first) = seen.insert(&spec.dir_name, &spec.path) {
            if first != spec.path {
                return Err(Error::DirNameCollision {
                    dir_name: spec.dir_name.clone(),
                    first: first.to_string(),
                    second: spec.path.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::openapi::ParamSpec;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn operation(method: &str, params: Vec<ParamSpec>, body: Vec<ParamSpec>) -> OperationSpec {
        OperationSpec {
            method: method.to_string(),
            params,
            body,
        }
    }

    fn path_spec(dir_name: &str, path: &str, methods: Vec<OperationSpec>) -> PathSpec {
        PathSpec {
            dir_name: dir_name.to_string(),
            path: path.to_string(),
            methods,
        }
    }

    fn plain_templates() -> TemplateSet {
        TemplateSet::new(
            "<< .method >>|<< .path >>|<< .bodies >>|<< .host >>",
            "<< .desc >>|<< .method >>|<< .dirname >>",
            "<< .jsonBody >>|<< .jsonQuery >>",
        )
    }

    fn read(root: &Path, relative: &str) -> String {
        fs::read_to_string(root.join(relative))
            .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
    }

    #[test]
    fn test_bodies_binding() {
        let with_body = operation("put", vec![], vec![ParamSpec::new("name", "string")]);
        assert_eq!(bodies_binding(&with_body), JSON_BODY_REFERENCE);

        let get_with_body = operation("get", vec![], vec![ParamSpec::new("q", "string")]);
        assert_eq!(bodies_binding(&get_with_body), JSON_BODY_REFERENCE);

        assert_eq!(bodies_binding(&operation("delete", vec![], vec![])), EMPTY_JSON_BODY);
        assert_eq!(bodies_binding(&operation("get", vec![], vec![])), NULL_BODY);
    }

    #[test]
    fn test_check_dir_names_accepts_distinct() {
        let specs = vec![
            path_spec("Users", "/users", vec![]),
            path_spec("UsersId", "/users/{id}", vec![]),
        ];
        assert!(check_dir_names(&specs).is_ok());
    }

    #[test]
    fn test_check_dir_names_rejects_collision() {
        let specs = vec![
            path_spec("UsersId", "/users/{id}", vec![]),
            path_spec("UsersId", "/users/id", vec![]),
        ];

        match check_dir_names(&specs).unwrap_err() {
            Error::DirNameCollision {
                dir_name,
                first,
                second,
            } => {
                assert_eq!(dir_name, "UsersId");
                assert_eq!(first, "/users/{id}");
                assert_eq!(second, "/users/id");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_check_dir_names_rejects_dot_segments() {
        for (dir_name, path) in [("..", "/.."), (".", "/.")] {
            let specs = vec![path_spec(dir_name, path, vec![])];

            match check_dir_names(&specs).unwrap_err() {
                Error::InvalidDirName {
                    dir_name: rejected,
                    path: source,
                } => {
                    assert_eq!(rejected, dir_name);
                    assert_eq!(source, path);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_generate_parent_dir_name_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out");
        let orchestrator = GenerationOrchestrator::new(&plain_templates()).unwrap();
        let options = GenerationOptions::new(&output, "http://localhost");

        let specs = vec![path_spec(
            &crate::core::utils::dir_name("/..", "/"),
            "/..",
            vec![operation("get", vec![], vec![])],
        )];

        let err = orchestrator.generate(&specs, &options).unwrap_err();
        assert!(matches!(err, Error::InvalidDirName { .. }));
        assert!(!output.exists());
        assert!(!temp.path().join("get").exists());
    }

    #[test]
    fn test_generate_writes_all_files() {
        let temp = TempDir::new().unwrap();
        let orchestrator = GenerationOrchestrator::new(&plain_templates()).unwrap();
        let options = GenerationOptions::new(temp.path(), "http://localhost:8080");

        let specs = vec![path_spec(
            "ItemsId",
            "/items/{id}",
            vec![
                operation("get", vec![ParamSpec::new("id", "string")], vec![]),
                operation(
                    "post",
                    vec![],
                    vec![ParamSpec::new("name", "string").with_example(json!("widget"))],
                ),
            ],
        )];

        let report = orchestrator.generate(&specs, &options).unwrap();
        assert_eq!(
            report,
            GenerationReport {
                operations: 2,
                data_written: 2,
                data_preserved: 0,
            }
        );

        let root = temp.path();
        assert_eq!(
            read(root, "0_base/ItemsId/get/base.yml"),
            "get|/items/{{ vars.req.query.id }}|null|http://localhost:8080"
        );
        assert_eq!(
            read(root, "0_base/ItemsId/post/base.yml"),
            "post|/items/{{ vars.req.query.id }}|application/json: \"{{ vars.req.body }}\"|http://localhost:8080"
        );
        assert_eq!(
            read(root, "1_noAuth/ItemsId/get/base.yml"),
            "(get) /items/{id}のテスト|get|ItemsId"
        );
        assert_eq!(read(root, "1_noAuth/ItemsId/get/data.json"), "{}|{\"id\":\"dummy\"}");
        assert_eq!(read(root, "1_noAuth/ItemsId/post/data.json"), "{\"name\":\"widget\"}|{}");
    }

    #[test]
    fn test_generate_preserves_data_when_override_disabled() {
        let temp = TempDir::new().unwrap();
        let orchestrator = GenerationOrchestrator::new(&plain_templates()).unwrap();
        let options = GenerationOptions::new(temp.path(), "http://localhost");

        let no_auth_dir = options.no_auth_dir("Items", "post");
        fs::create_dir_all(&no_auth_dir).unwrap();
        fs::write(no_auth_dir.join("config.toml"), "allowOverride = false\n").unwrap();
        fs::write(no_auth_dir.join("data.json"), "hand written").unwrap();

        let specs = vec![path_spec(
            "Items",
            "/items",
            vec![operation("post", vec![], vec![ParamSpec::new("name", "string")])],
        )];

        let report = orchestrator.generate(&specs, &options).unwrap();
        assert_eq!(report.data_preserved, 1);
        assert_eq!(report.data_written, 0);
        assert_eq!(fs::read_to_string(no_auth_dir.join("data.json")).unwrap(), "hand written");
        // Scenario files are still regenerated
        assert!(no_auth_dir.join("base.yml").exists());
    }

    #[test]
    fn test_generate_overwrites_data_when_override_allowed() {
        let temp = TempDir::new().unwrap();
        let orchestrator = GenerationOrchestrator::new(&plain_templates()).unwrap();
        let options = GenerationOptions::new(temp.path(), "http://localhost");

        let no_auth_dir = options.no_auth_dir("Items", "get");
        fs::create_dir_all(&no_auth_dir).unwrap();
        fs::write(no_auth_dir.join("config.toml"), "# no keys\n").unwrap();
        fs::write(no_auth_dir.join("data.json"), "stale").unwrap();

        let specs = vec![path_spec("Items", "/items", vec![operation("get", vec![], vec![])])];

        let report = orchestrator.generate(&specs, &options).unwrap();
        assert_eq!(report.data_written, 1);
        assert_eq!(fs::read_to_string(no_auth_dir.join("data.json")).unwrap(), "{}|{}");
    }

    #[test]
    fn test_generate_rejects_invalid_override_config() {
        let temp = TempDir::new().unwrap();
        let orchestrator = GenerationOrchestrator::new(&plain_templates()).unwrap();
        let options = GenerationOptions::new(temp.path(), "http://localhost");

        let no_auth_dir = options.no_auth_dir("Items", "get");
        fs::create_dir_all(&no_auth_dir).unwrap();
        fs::write(no_auth_dir.join("config.toml"), "allowOverride = \"nope\"").unwrap();

        let specs = vec![path_spec("Items", "/items", vec![operation("get", vec![], vec![])])];

        let err = orchestrator.generate(&specs, &options).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_generate_collision_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let orchestrator = GenerationOrchestrator::new(&plain_templates()).unwrap();
        let options = GenerationOptions::new(temp.path(), "http://localhost");

        let specs = vec![
            path_spec("AB", "/a/b", vec![operation("get", vec![], vec![])]),
            path_spec("AB", "/{a}/b", vec![operation("get", vec![], vec![])]),
        ];

        assert!(orchestrator.generate(&specs, &options).is_err());
        assert!(!temp.path().join("0_base").exists());
    }

    #[test]
    fn test_generate_fails_fast_on_render_error() {
        let temp = TempDir::new().unwrap();
        let templates = TemplateSet::new("<< .method >>", "<< .missing >>", "x");
        let orchestrator = GenerationOrchestrator::new(&templates).unwrap();
        let options = GenerationOptions::new(temp.path(), "http://localhost");

        let specs = vec![
            path_spec("A", "/a", vec![operation("get", vec![], vec![])]),
            path_spec("B", "/b", vec![operation("get", vec![], vec![])]),
        ];

        let err = orchestrator.generate(&specs, &options).unwrap_err();
        assert!(matches!(err, Error::Template { .. }));
        assert_eq!(read(temp.path(), "0_base/A/get/base.yml"), "get");
        assert!(!temp.path().join("0_base/B").exists());
    }

    #[test]
    fn test_generate_empty_document() {
        let temp = TempDir::new().unwrap();
        let orchestrator = GenerationOrchestrator::new(&plain_templates()).unwrap();
        let options = GenerationOptions::new(temp.path().join("out"), "http://localhost");

        let report = orchestrator.generate(&[], &options).unwrap();
        assert_eq!(report, GenerationReport::default());
    }
}
