//! Health entities: component status, database information and the nested
//! health report tree.

use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

/// Name reported for the database when its details cannot be retrieved.
pub const UNKNOWN_DATABASE_NAME: &str = "DATABASE";

/// Liveness of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentStatus {
    Up,
    Down,
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentStatus::Up => f.write_str("UP"),
            ComponentStatus::Down => f.write_str("DOWN"),
        }
    }
}

/// Name, version and connectivity of the backing database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseInfo {
    pub name: String,
    pub version: String,
    pub connectivity: ComponentStatus,
}

impl DatabaseInfo {
    /// Parses a server version banner such as
    /// `PostgreSQL 16.2 on x86_64-pc-linux-gnu, compiled by gcc ...`.
    ///
    /// The first token is the name and the second the version. A banner that
    /// does not carry both yields [`DatabaseInfo::unavailable`].
    pub fn from_version_string(banner: &str) -> Self {
        let mut tokens = banner.split_whitespace();

        match (tokens.next(), tokens.next()) {
            (Some(name), Some(version)) => Self {
                name: name.to_string(),
                version: version.trim_end_matches(',').to_string(),
                connectivity: ComponentStatus::Up,
            },
            _ => Self::unavailable(),
        }
    }

    /// Database reachable but reported nothing usable.
    pub fn unavailable() -> Self {
        Self {
            name: UNKNOWN_DATABASE_NAME.to_string(),
            version: String::new(),
            connectivity: ComponentStatus::Down,
        }
    }
}

/// Health of one component together with the components it depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthReport {
    pub checked_at: DateTime<Local>,
    pub component_name: String,
    pub component_version: String,
    pub status: ComponentStatus,
    pub children: Vec<HealthReport>,
}

impl HealthReport {
    /// Creates a leaf report checked now.
    pub fn new(
        component_name: impl Into<String>,
        component_version: impl Into<String>,
        status: ComponentStatus,
    ) -> Self {
        Self {
            checked_at: Local::now(),
            component_name: component_name.into(),
            component_version: component_version.into(),
            status,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: HealthReport) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_up(&self) -> bool {
        self.status == ComponentStatus::Up
    }
}

impl From<DatabaseInfo> for HealthReport {
    fn from(info: DatabaseInfo) -> Self {
        HealthReport::new(info.name, info.version, info.connectivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_postgres_banner() {
        let info = DatabaseInfo::from_version_string(
            "PostgreSQL 16.2 on x86_64-pc-linux-gnu, compiled by gcc (GCC) 12.2.0, 64-bit",
        );

        assert_eq!(info.name, "PostgreSQL");
        assert_eq!(info.version, "16.2");
        assert_eq!(info.connectivity, ComponentStatus::Up);
    }

    #[test]
    fn test_parse_banner_with_trailing_comma() {
        let info = DatabaseInfo::from_version_string("PostgreSQL 15.4, compiled by Visual C++");
        assert_eq!(info.version, "15.4");
    }

    #[test]
    fn test_parse_short_banner() {
        assert_eq!(
            DatabaseInfo::from_version_string("PostgreSQL"),
            DatabaseInfo::unavailable()
        );
        assert_eq!(
            DatabaseInfo::from_version_string("   "),
            DatabaseInfo::unavailable()
        );
    }

    #[test]
    fn test_unavailable_is_down() {
        let info = DatabaseInfo::unavailable();
        assert_eq!(info.name, UNKNOWN_DATABASE_NAME);
        assert!(info.version.is_empty());
        assert_eq!(info.connectivity, ComponentStatus::Down);
    }

    #[test]
    fn test_report_tree() {
        let report = HealthReport::new("APP", "1.0", ComponentStatus::Up)
            .with_child(HealthReport::new("PostgreSQL", "16.2", ComponentStatus::Up));

        assert!(report.is_up());
        assert_eq!(report.children.len(), 1);
        assert_eq!(report.children[0].component_name, "PostgreSQL");
        assert!(report.children[0].children.is_empty());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_value(ComponentStatus::Up).unwrap(),
            serde_json::json!("UP")
        );
        assert_eq!(ComponentStatus::Down.to_string(), "DOWN");
    }
}
