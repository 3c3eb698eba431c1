// file: src/health.rs
// description: readiness checks behind the `check` command

use crate::config::Config;
use crate::loader::CorpusLoader;
use crate::utils::Validator;
use std::fmt;
use std::net::TcpListener;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Dataset,
    ListenAddress,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Dataset => f.write_str("dataset"),
            Component::ListenAddress => f.write_str("listen address"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HealthCheck {
    pub component: Component,
    pub status: HealthStatus,
    pub detail: String,
}

impl HealthCheck {
    fn new(component: Component, status: HealthStatus, detail: String) -> Self {
        Self {
            component,
            status,
            detail,
        }
    }
}

/// Loads the dataset the way `serve` would. An empty dataset serves, but only `[]`.
pub fn check_dataset(path: &Path) -> HealthCheck {
    match CorpusLoader::new().load_with_metrics(path) {
        Ok((corpus, _)) if corpus.is_empty() => HealthCheck::new(
            Component::Dataset,
            HealthStatus::Degraded,
            format!("{} contains no records", path.display()),
        ),
        Ok((_, metrics)) => HealthCheck::new(
            Component::Dataset,
            HealthStatus::Healthy,
            format!("{}: {}", path.display(), metrics.format()),
        ),
        Err(e) => HealthCheck::new(Component::Dataset, HealthStatus::Unhealthy, e.to_string()),
    }
}

/// An unparsable address is fatal; one that is merely busy right now is not.
pub fn check_listen_address(config: &Config) -> HealthCheck {
    let addr = match config
        .server
        .socket_addr()
        .and_then(|addr| Validator::validate_port(addr.port()).map(|_| addr))
    {
        Ok(addr) => addr,
        Err(e) => {
            return HealthCheck::new(Component::ListenAddress, HealthStatus::Unhealthy, e.to_string());
        }
    };

    match TcpListener::bind(addr) {
        Ok(_) => HealthCheck::new(Component::ListenAddress, HealthStatus::Healthy, addr.to_string()),
        Err(e) => HealthCheck::new(
            Component::ListenAddress,
            HealthStatus::Degraded,
            format!("{} is not bindable right now: {}", addr, e),
        ),
    }
}

#[derive(Debug, Clone)]
pub struct ReadinessReport {
    pub checks: Vec<HealthCheck>,
}

impl ReadinessReport {
    pub fn run(config: &Config) -> Self {
        Self {
            checks: vec![
                check_dataset(&config.dataset.path),
                check_listen_address(config),
            ],
        }
    }

    /// Worst status across all checks.
    pub fn overall(&self) -> HealthStatus {
        self.checks
            .iter()
            .map(|c| c.status)
            .max()
            .unwrap_or(HealthStatus::Healthy)
    }

    pub fn is_ready(&self) -> bool {
        self.overall() != HealthStatus::Unhealthy
    }

    pub fn format(&self) -> String {
        let mut output = format!("Overall: {:?}\n", self.overall());
        for check in &self.checks {
            let icon = match check.status {
                HealthStatus::Healthy => "✓",
                HealthStatus::Degraded => "⚠",
                HealthStatus::Unhealthy => "✗",
            };
            output.push_str(&format!("{} {}: {}\n", icon, check.component, check.detail));
        }
        output
    }
}
