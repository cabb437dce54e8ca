//! Port allocation over the registered services.
//!
//! Ports grow monotonically: the next port is one past the highest port in
//! use. Freed ports below the maximum are never reused.

use crate::domain::{entities::FrameworkService, error::DomainError, value_objects::DatabaseType};

/// First HTTP port handed out in an empty project.
pub const BASE_PORT: u16 = 3000;

/// Next HTTP port for a new service.
///
/// Services without a `port` (workers) are ignored. Fails once a service
/// holds port 65535, since nothing lies above it.
pub fn next_port(services: &[FrameworkService]) -> Result<u16, DomainError> {
    let Some((highest, owner)) = services
        .iter()
        .filter_map(|s| s.port.map(|port| (port, s)))
        .max_by_key(|(port, _)| *port)
    else {
        return Ok(BASE_PORT);
    };

    highest
        .checked_add(1)
        .ok_or_else(|| DomainError::PortsExhausted {
            highest,
            owner: owner.name.clone(),
        })
}

/// Next host port for a database of the given engine.
///
/// Only services already using the same engine take part, so a project with
/// a MySQL and a Postgres service gets `3306` and `5432` respectively.
pub fn next_database_port(services: &[FrameworkService], database: DatabaseType) -> u16 {
    services
        .iter()
        .filter(|s| s.database_type.as_deref() == Some(database.as_str()))
        .filter_map(|s| s.database_port)
        .max()
        .map_or(database.base_port(), |max| max.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_port(name: &str, port: Option<u16>) -> FrameworkService {
        let mut service = FrameworkService::new(name, "nestjs");
        service.port = port;
        service
    }

    #[test]
    fn empty_project_starts_at_base() {
        assert_eq!(next_port(&[]), Ok(3000));
    }

    #[test]
    fn consecutive_ports_increment() {
        let services = [with_port("a1", Some(3000)), with_port("b1", Some(3001))];
        assert_eq!(next_port(&services), Ok(3002));
    }

    #[test]
    fn services_without_port_are_ignored() {
        let services = [with_port("a1", Some(3000)), with_port("worker", None)];
        assert_eq!(next_port(&services), Ok(3001));
    }

    #[test]
    fn only_workers_falls_back_to_base() {
        assert_eq!(next_port(&[with_port("worker", None)]), Ok(3000));
    }

    #[test]
    fn gaps_are_not_filled() {
        let services = [with_port("a1", Some(3000)), with_port("b1", Some(3010))];
        assert_eq!(next_port(&services), Ok(3011));
    }

    #[test]
    fn allocation_is_stable() {
        let services = [with_port("a1", Some(3004)), with_port("b1", Some(3002))];
        assert_eq!(next_port(&services), next_port(&services));
        assert_eq!(next_port(&services), Ok(3005));
    }

    #[test]
    fn highest_port_cannot_be_exceeded() {
        let services = [with_port("a1", Some(3000)), with_port("edge", Some(u16::MAX))];
        assert_eq!(
            next_port(&services),
            Err(DomainError::PortsExhausted {
                highest: u16::MAX,
                owner: "edge".into(),
            })
        );
        assert_eq!(next_port(&[with_port("a1", Some(u16::MAX - 1))]), Ok(u16::MAX));
    }

    #[test]
    fn database_ports_are_per_engine() {
        let mut pg = FrameworkService::new("orders-service", "nestjs");
        pg.database_type = Some("postgres".into());
        pg.database_port = Some(5432);

        let services = [pg];
        assert_eq!(next_database_port(&services, DatabaseType::Postgres), 5433);
        assert_eq!(next_database_port(&services, DatabaseType::Mysql), 3306);
        assert_eq!(next_database_port(&[], DatabaseType::Mongodb), 27017);
    }
}
