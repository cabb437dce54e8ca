//! Vite single-page apps.

use tracing::instrument;

use forgekit_core::{
    application::{
        GenerationError,
        ports::{CommandSpec, GenerationRequest, ServiceGenerator},
        services::prerequisite_service::{GIT, NODE},
    },
    domain::{FrameworkConfig, FrameworkService, ServiceType},
};

use super::{FlowContext, PackageManager, PatchError};

const VITE_CONFIG: &str = "vite.config.ts";
const DEFINE_CONFIG: &str = "defineConfig({";

pub struct SpaGenerator {
    context: FlowContext,
}

impl SpaGenerator {
    pub fn new(context: FlowContext) -> Self {
        Self { context }
    }

    fn command(&self, request: &GenerationRequest) -> CommandSpec {
        let settings = self.context.settings();
        let template = settings.spa_template.as_str();
        let name = request.name.as_str();
        match settings.package_manager {
            PackageManager::Npm => CommandSpec::new(
                "npm",
                ["create", "vite@latest", name, "--", "--template", template],
            ),
            pm => CommandSpec::new(pm.as_str(), ["create", "vite", name, "--template", template]),
        }
    }
}

impl ServiceGenerator for SpaGenerator {
    #[instrument(skip_all, fields(service = %request.name, port = request.port))]
    fn generate(
        &self,
        request: &GenerationRequest,
        _config: &FrameworkConfig,
    ) -> Result<FrameworkService, GenerationError> {
        let package_manager = self.context.settings().package_manager.tool();
        let workspace = self
            .context
            .prepare(request, &[NODE, package_manager, GIT])?;

        self.context
            .execute(request, self.command(request).in_dir(workspace))?;

        let vite_config = request.directory.join(VITE_CONFIG);
        let port = request.port;
        let result = self.context.patch_file(&vite_config, |source| {
            set_dev_server_port(source, port).ok_or_else(|| PatchError::AnchorNotFound {
                file: vite_config.clone(),
                anchor: DEFINE_CONFIG,
            })
        });
        self.context.settle(request, "set dev server port", result);

        Ok(FrameworkService::listening(
            request.name.clone(),
            ServiceType::Spa,
            request.port,
        ))
    }
}

/// Pin the Vite dev server to `port`.
fn set_dev_server_port(source: &str, port: u16) -> Option<String> {
    let at = source.find(DEFINE_CONFIG)? + DEFINE_CONFIG.len();
    let mut patched = String::with_capacity(source.len() + 48);
    patched.push_str(&source[..at]);
    patched.push_str(&format!("\n  server: {{ port: {port}, strictPort: true }},"));
    patched.push_str(&source[at..]);
    Some(patched)
}
