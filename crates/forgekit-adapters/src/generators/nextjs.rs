//! Next.js apps via `create-next-app`.

use serde_json::{Map, Value};
use tracing::instrument;

use forgekit_core::{
    application::{
        GenerationError,
        ports::{CommandSpec, GenerationRequest, ServiceGenerator},
        services::prerequisite_service::{GIT, NODE, NPX},
    },
    domain::{FrameworkConfig, FrameworkService, ServiceType},
};

use super::{FlowContext, PatchError};

const PACKAGE_JSON: &str = "package.json";

pub struct NextJsGenerator {
    context: FlowContext,
}

impl NextJsGenerator {
    pub fn new(context: FlowContext) -> Self {
        Self { context }
    }
}

impl ServiceGenerator for NextJsGenerator {
    #[instrument(skip_all, fields(service = %request.name, port = request.port))]
    fn generate(
        &self,
        request: &GenerationRequest,
        _config: &FrameworkConfig,
    ) -> Result<FrameworkService, GenerationError> {
        create_next_app(&self.context, request)?;

        Ok(FrameworkService::listening(
            request.name.clone(),
            ServiceType::NextJs,
            request.port,
        ))
    }
}

/// Run `create-next-app` and pin the dev and start scripts to the port.
pub(super) fn create_next_app(
    context: &FlowContext,
    request: &GenerationRequest,
) -> Result<(), GenerationError> {
    let settings = context.settings();
    let workspace = context.prepare(
        request,
        &[NODE, NPX, settings.package_manager.tool(), GIT],
    )?;

    let use_pm = format!("--use-{}", settings.package_manager);
    let command = CommandSpec::new(
        "npx",
        [
            format!("create-next-app@{}", settings.nextjs_version),
            request.name.clone(),
            "--ts".into(),
            "--eslint".into(),
            "--app".into(),
            "--src-dir".into(),
            "--import-alias".into(),
            "@/*".into(),
            use_pm,
            "--yes".into(),
        ],
    )
    .in_dir(workspace);
    context.execute(request, command)?;

    let manifest = request.directory.join(PACKAGE_JSON);
    let port = request.port;
    let result = context.patch_file(&manifest, |raw| {
        set_script_ports(raw, port).map_err(|source| PatchError::Json {
            file: manifest.clone(),
            source,
        })
    });
    context.settle(request, "set script ports", result);
    Ok(())
}

/// Add `-p <port>` to the `dev` and `start` scripts of a package.json.
fn set_script_ports(raw: &str, port: u16) -> Result<String, serde_json::Error> {
    let mut manifest: Value = serde_json::from_str(raw)?;

    if let Some(root) = manifest.as_object_mut() {
        let scripts = root
            .entry("scripts")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Some(scripts) = scripts.as_object_mut() {
            for (script, default) in [("dev", "next dev"), ("start", "next start")] {
                let current = scripts
                    .get(script)
                    .and_then(Value::as_str)
                    .unwrap_or(default);
                let updated = with_port_flag(current, port);
                scripts.insert(script.to_string(), Value::String(updated));
            }
        }
    }

    let mut out = serde_json::to_string_pretty(&manifest)?;
    out.push('\n');
    Ok(out)
}

fn with_port_flag(script: &str, port: u16) -> String {
    let mut kept = Vec::new();
    let mut words = script.split_whitespace();
    while let Some(word) = words.next() {
        match word {
            "-p" | "--port" => {
                words.next();
            }
            w if w.starts_with("--port=") => {}
            w => kept.push(w),
        }
    }
    format!("{} -p {port}", kept.join(" "))
}
