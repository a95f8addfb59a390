//! Client for a hosted status page: component status and incident records
//! over the service's REST API.

pub mod client;
pub mod commands;
pub mod config;
pub mod registry;
pub mod report;
pub mod telemetry;

pub use client::{CliError, Ctx, build_ctx};
pub use commands::{Command, dispatch, incidents::update_incident_by_id};
pub use crate::config::{CliArgs, IncidentOrder, Settings};
pub use registry::ComponentRegistry;
pub use report::Report;
