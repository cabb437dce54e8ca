//! Next.js apps wired to the project's auth backend.

use tracing::{debug, instrument};

use forgekit_core::{
    application::{
        GenerationError,
        ports::{GenerationRequest, ServiceGenerator},
    },
    domain::{FrameworkConfig, FrameworkService, ServiceType},
};

use super::{FlowContext, nextjs::create_next_app};

const ENV_FILE: &str = ".env.local";
const AUTH_CLIENT: &str = "src/lib/auth.ts";

const AUTH_CLIENT_SOURCE: &str = r#"const AUTH_URL = process.env.NEXT_PUBLIC_AUTH_URL ?? '';

export type Session = { accessToken: string };

export async function signIn(email: string, password: string): Promise<Session> {
  const res = await fetch(`${AUTH_URL}/login`, {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ email, password }),
    credentials: 'include',
  });
  if (!res.ok) throw new Error(`sign-in failed: ${res.status}`);
  return res.json();
}

export async function signOut(): Promise<void> {
  await fetch(`${AUTH_URL}/logout`, { method: 'POST', credentials: 'include' });
}
"#;

pub struct NextJsAuthGenerator {
    context: FlowContext,
}

impl NextJsAuthGenerator {
    pub fn new(context: FlowContext) -> Self {
        Self { context }
    }
}

impl ServiceGenerator for NextJsAuthGenerator {
    #[instrument(skip_all, fields(service = %request.name, port = request.port))]
    fn generate(
        &self,
        request: &GenerationRequest,
        config: &FrameworkConfig,
    ) -> Result<FrameworkService, GenerationError> {
        create_next_app(&self.context, request)?;

        let auth = config.auth_service();
        debug!(auth = ?auth.map(|s| s.name.as_str()), "Resolved auth backend");

        let env = request.directory.join(ENV_FILE);
        let result = self.context.add_file(&env, &auth_env(auth));
        self.context.settle(request, "write auth env", result);

        let client = request.directory.join(AUTH_CLIENT);
        let result = self.context.add_file(&client, AUTH_CLIENT_SOURCE);
        self.context.settle(request, "write auth client", result);

        let entry = FrameworkService::listening(
            request.name.clone(),
            ServiceType::NextJsAuth,
            request.port,
        );
        Ok(match auth {
            Some(auth) => entry.with_base_service(auth.name.clone()),
            None => entry,
        })
    }
}

fn auth_env(auth: Option<&FrameworkService>) -> String {
    match auth.and_then(|s| s.port.map(|port| (s, port))) {
        Some((service, port)) => {
            let prefix = service
                .global_prefix
                .as_deref()
                .map(|p| format!("/{p}"))
                .unwrap_or_default();
            format!("NEXT_PUBLIC_AUTH_URL=http://localhost:{port}{prefix}\n")
        }
        None => "# Point this at your auth service, e.g. http://localhost:3001/auth\n\
                 NEXT_PUBLIC_AUTH_URL=\n"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_support::{context, request};
    use crate::{MemoryFilesystem, ScriptedProcessRunner};

    fn project_with_auth() -> FrameworkConfig {
        let mut config = FrameworkConfig::new("shop");
        config.services.push(
            FrameworkService::listening("auth-service", ServiceType::NestJs, 3000)
                .with_global_prefix("auth"),
        );
        config
    }

    #[test]
    fn env_points_at_auth_backend() {
        let config = project_with_auth();
        assert_eq!(
            auth_env(config.auth_service()),
            "NEXT_PUBLIC_AUTH_URL=http://localhost:3000/auth\n"
        );
        assert!(auth_env(None).contains("NEXT_PUBLIC_AUTH_URL=\n"));
    }

    #[test]
    fn records_base_service_and_writes_client() {
        let fs = MemoryFilesystem::new();
        let runner = ScriptedProcessRunner::succeeding();

        let entry = NextJsAuthGenerator::new(context(&runner, &fs))
            .generate(
                &request(ServiceType::NextJsAuth, "portal", 3001, None),
                &project_with_auth(),
            )
            .unwrap();

        assert_eq!(entry.service_type, "nextjs-auth");
        assert_eq!(entry.base_service.as_deref(), Some("auth-service"));
        assert!(
            fs.read_file("/proj/apps/portal/.env.local")
                .unwrap()
                .contains("localhost:3000/auth")
        );
        assert!(fs.read_file("/proj/apps/portal/src/lib/auth.ts").is_some());
    }

    #[test]
    fn without_auth_backend_no_base_service() {
        let fs = MemoryFilesystem::new();
        let runner = ScriptedProcessRunner::succeeding();

        let entry = NextJsAuthGenerator::new(context(&runner, &fs))
            .generate(
                &request(ServiceType::NextJsAuth, "portal", 3000, None),
                &FrameworkConfig::new("shop"),
            )
            .unwrap();

        assert!(entry.base_service.is_none());
    }
}
