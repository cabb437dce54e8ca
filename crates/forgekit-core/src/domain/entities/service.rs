use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DatabaseType, ServiceType};

/// One entry of the `services` list in `forgekit.json`.
///
/// `service_type` stays a plain string: hand-edited documents may carry
/// worker-style types this tool does not generate, and those must survive a
/// load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkService {
    pub name: String,

    #[serde(rename = "type")]
    pub service_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_database: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_service: Option<String>,
}

impl FrameworkService {
    /// Bare entry with every optional field unset.
    pub fn new(name: impl Into<String>, service_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            service_type: service_type.into(),
            port: None,
            global_prefix: None,
            has_database: None,
            database_type: None,
            database_port: None,
            base_service: None,
        }
    }

    /// Entry for a listening service without a database.
    pub fn listening(name: impl Into<String>, service_type: ServiceType, port: u16) -> Self {
        Self {
            port: Some(port),
            has_database: Some(false),
            ..Self::new(name, service_type.as_str())
        }
    }

    pub fn with_global_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.global_prefix = Some(prefix.into());
        self
    }

    pub fn with_database(mut self, database: DatabaseType, port: u16) -> Self {
        self.has_database = Some(true);
        self.database_type = Some(database.as_str().into());
        self.database_port = Some(port);
        self
    }

    pub fn with_base_service(mut self, base: impl Into<String>) -> Self {
        self.base_service = Some(base.into());
        self
    }

    /// Parsed type, or `None` for types this tool does not know.
    pub fn kind(&self) -> Option<ServiceType> {
        self.service_type.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let service = FrameworkService::listening("dashboard", ServiceType::Spa, 3001);
        let json = serde_json::to_value(&service).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "dashboard",
                "type": "spa",
                "port": 3001,
                "hasDatabase": false
            })
        );
    }

    #[test]
    fn camel_case_fields_deserialize() {
        let service: FrameworkService = serde_json::from_str(
            r#"{"name":"orders-service","type":"nestjs","port":3002,"globalPrefix":"orders",
                "hasDatabase":true,"databaseType":"postgres","databasePort":5432}"#,
        )
        .unwrap();

        assert_eq!(service.global_prefix.as_deref(), Some("orders"));
        assert_eq!(service.database_port, Some(5432));
        assert_eq!(service.kind(), Some(ServiceType::NestJs));
    }

    #[test]
    fn unknown_type_is_preserved() {
        let service: FrameworkService =
            serde_json::from_str(r#"{"name":"mailer","type":"worker"}"#).unwrap();
        assert_eq!(service.kind(), None);
        assert_eq!(service.port, None);
        assert!(serde_json::to_string(&service).unwrap().contains("\"worker\""));
    }
}
