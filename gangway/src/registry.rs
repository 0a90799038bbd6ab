//! The collaborator-facing registry.

use std::path::Path;

use eyre::Result;
use gangway_codegen::{ClientCodegen, GenerateResult, PreviewFile};
use gangway_codegen_typescript::{ApiEmitter, Error, ModelEmitter};
use gangway_core::File;
use gangway_ir::{ModelDescriptor, RouteDescriptor, Schema};

/// Owned aggregate of the model and route registries.
///
/// Constructed once at startup, handed by mutable reference to the
/// registration call sites, and read once by the generator.
#[derive(Default)]
pub struct Registry {
    models: ModelEmitter,
    apis: ApiEmitter,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model descriptor.
    pub fn register_model(&mut self, model: ModelDescriptor) {
        self.models.add(model);
    }

    /// Register a model through its [`Schema`] impl.
    pub fn register_schema<T: Schema>(&mut self) {
        self.models.add(T::descriptor());
    }

    /// Register a route.
    ///
    /// The route's request and response shapes are fed into the model
    /// registry alongside the route itself, so one call per route
    /// registration covers both artifacts.
    pub fn register_route(&mut self, route: RouteDescriptor) {
        if let Some(request) = &route.request {
            self.models.add(request.clone());
        }
        if let Some(response) = &route.response {
            self.models.add_type(response);
        }
        self.apis.add(route);
    }

    /// Render both artifacts in memory.
    pub fn generate(&self) -> Result<ClientSources, Error> {
        let models = self.models.to_source()?;
        let api = self.apis.to_source()?;
        Ok(ClientSources {
            models,
            api: api.source,
            warnings: api.warnings,
        })
    }

    /// Render both artifacts and write `model.ts` and `api.ts` under `dir`.
    ///
    /// Skipped-route warnings are echoed to stderr so they surface where the
    /// generator runs, and returned on the result for callers that report
    /// differently.
    pub fn write_to(&self, dir: &Path) -> Result<GenerateResult> {
        let sources = self.generate()?;
        for warning in &sources.warnings {
            eprintln!("warning: {}", warning);
        }
        File::new(dir.join("model.ts"), sources.models.as_str()).write()?;
        File::new(dir.join("api.ts"), sources.api.as_str()).write()?;
        Ok(GenerateResult {
            written: vec!["model.ts".to_string(), "api.ts".to_string()],
            warnings: sources.warnings,
        })
    }
}

impl ClientCodegen for Registry {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        let sources = self.generate()?;
        Ok(vec![
            PreviewFile {
                path: "model.ts".to_string(),
                content: sources.models,
            },
            PreviewFile {
                path: "api.ts".to_string(),
                content: sources.api,
            },
        ])
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.write_to(output_dir)
    }
}

/// The two rendered client artifacts plus any skipped-route warnings.
#[derive(Debug, Clone)]
pub struct ClientSources {
    pub models: String,
    pub api: String,
    pub warnings: Vec<String>,
}
