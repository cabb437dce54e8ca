//! End-to-end `add` runs with real flows and test doubles for the outside world.

use std::path::Path;
use std::sync::Arc;

use forgekit_adapters::{
    GeneratorSettings, JsonConfigStore, LocalFilesystem, MemoryConfigStore, MemoryFilesystem,
    ScriptedProcessRunner, standard_generators,
};
use forgekit_core::{
    application::{
        AddServiceRequest, ApplicationError, AvailabilityError, ServiceOrchestrator,
        ports::{ConfigStore, Filesystem},
    },
    domain::{DatabaseType, FrameworkConfig, ServiceType},
    error::ForgeError,
};

fn memory_orchestrator(
    store: &MemoryConfigStore,
    fs: &MemoryFilesystem,
    runner: &ScriptedProcessRunner,
) -> ServiceOrchestrator {
    ServiceOrchestrator::new(
        "/proj",
        Box::new(store.clone()),
        Box::new(fs.clone()),
        standard_generators(
            Arc::new(runner.clone()),
            Arc::new(fs.clone()),
            GeneratorSettings::default(),
        ),
    )
}

fn add(name: &str, service_type: ServiceType) -> AddServiceRequest {
    AddServiceRequest {
        name: Some(name.into()),
        service_type: Some(service_type),
        database: None,
    }
}

#[test]
fn spa_round_trips_through_forgekit_json() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonConfigStore::in_project(dir.path());
    store.save(&FrameworkConfig::new("shop")).unwrap();

    let orchestrator = ServiceOrchestrator::new(
        dir.path(),
        Box::new(store.clone()),
        Box::new(LocalFilesystem::new()),
        standard_generators(
            Arc::new(ScriptedProcessRunner::succeeding()),
            Arc::new(LocalFilesystem::new()),
            GeneratorSettings::default(),
        ),
    );

    orchestrator
        .add_service(add("dashboard", ServiceType::Spa))
        .unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(
        raw["services"],
        serde_json::json!([
            { "name": "dashboard", "type": "spa", "port": 3000, "hasDatabase": false }
        ])
    );
    assert!(dir.path().join("apps").is_dir());
}

#[test]
fn ports_and_links_accumulate_across_adds() {
    let store = MemoryConfigStore::with_config(FrameworkConfig::new("shop"));
    let fs = MemoryFilesystem::new();
    let runner = ScriptedProcessRunner::succeeding();
    let orchestrator = memory_orchestrator(&store, &fs, &runner);

    orchestrator.add_service(add("web", ServiceType::Spa)).unwrap();
    orchestrator
        .add_service(add("auth-service", ServiceType::NestJs))
        .unwrap();
    orchestrator
        .add_service(add("portal", ServiceType::NextJsAuth))
        .unwrap();
    orchestrator
        .add_service(AddServiceRequest {
            database: Some(DatabaseType::Postgres),
            ..add("orders-service", ServiceType::NestJs)
        })
        .unwrap();

    let config = store.snapshot().unwrap();
    let ports: Vec<_> = config.services.iter().map(|s| s.port).collect();
    assert_eq!(ports, vec![Some(3000), Some(3001), Some(3002), Some(3003)]);

    let portal = config.service("portal").unwrap();
    assert_eq!(portal.base_service.as_deref(), Some("auth-service"));

    let orders = config.service("orders-service").unwrap();
    assert_eq!(orders.global_prefix.as_deref(), Some("orders"));
    assert_eq!(orders.database_port, Some(5432));

    assert_eq!(store.save_count(), 4);
    assert!(config.validate().is_ok());
}

#[test]
fn nestjs_name_without_suffix_changes_nothing() {
    let store = MemoryConfigStore::with_config(FrameworkConfig::new("shop"));
    let fs = MemoryFilesystem::new();
    let runner = ScriptedProcessRunner::succeeding();

    let err = memory_orchestrator(&store, &fs, &runner)
        .add_service(add("order-api", ServiceType::NestJs))
        .unwrap_err();

    assert_eq!(err.to_string(), "NestJS service names must end with -service");
    assert!(runner.history().is_empty());
    assert!(fs.list_files().is_empty());
    assert_eq!(store.save_count(), 0);
}

#[test]
fn existing_folder_blocks_the_name() {
    let store = MemoryConfigStore::with_config(FrameworkConfig::new("shop"));
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/proj/apps/dashboard")).unwrap();
    let runner = ScriptedProcessRunner::succeeding();

    let err = memory_orchestrator(&store, &fs, &runner)
        .add_service(add("dashboard", ServiceType::Spa))
        .unwrap_err();

    assert!(matches!(
        err,
        ForgeError::Availability(AvailabilityError::FolderExists { ref name, .. }) if name == "dashboard"
    ));
    assert!(err.to_string().contains("/proj/apps/dashboard"));
    assert!(runner.history().is_empty());
}

#[test]
fn failed_generator_leaves_workspace_but_not_the_entry() {
    let store = MemoryConfigStore::with_config(FrameworkConfig::new("shop"));
    let fs = MemoryFilesystem::new();
    let runner = ScriptedProcessRunner::succeeding().with_exit_code(1);

    let err = memory_orchestrator(&store, &fs, &runner)
        .add_service(add("dashboard", ServiceType::Spa))
        .unwrap_err();

    assert!(matches!(err, ForgeError::Generation(_)));
    assert!(store.snapshot().unwrap().services.is_empty());
    assert_eq!(store.save_count(), 0);
    // No rollback: whatever the flow created stays.
    assert!(fs.exists(Path::new("/proj/apps")));
}

#[test]
fn missing_document_is_reported_before_anything_runs() {
    let store = MemoryConfigStore::new();
    let fs = MemoryFilesystem::new();
    let runner = ScriptedProcessRunner::succeeding();

    let err = memory_orchestrator(&store, &fs, &runner)
        .add_service(add("dashboard", ServiceType::Spa))
        .unwrap_err();

    assert!(matches!(
        err,
        ForgeError::Application(ApplicationError::ConfigNotFound { .. })
    ));
    assert!(runner.history().is_empty());
}
