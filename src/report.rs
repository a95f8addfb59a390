use statuspage_api_types::{Component, Incident};

use crate::client::CliError;

/// Printable outcome of a command.
///
/// Informational outcomes such as an unrecognized verb are reports rather
/// than errors: they print and the process still exits successfully.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    ComponentListing(Vec<Component>),
    ComponentStatus { name: String, status: String },
    ComponentUpdated { name: String, status: String },
    UnresolvedIncidents(Vec<Incident>),
    IncidentCreated { name: String },
    IncidentUpdated { name: String, status: String },
    NoOpenIncidents,
    InvalidIncidentCommand,
    UnrecognizedCommand,
}

impl Report {
    pub fn render(&self) -> Result<String, CliError> {
        let text = match self {
            Report::ComponentListing(components) => serde_json::to_string_pretty(components)
                .map_err(|e| CliError::Server(format!("failed to render output: {e}")))?,
            Report::ComponentStatus { name, status } => format!("Status of {name}: {status}"),
            Report::ComponentUpdated { name, status } => {
                format!("Status for {name} is now {status}")
            }
            Report::UnresolvedIncidents(incidents) if incidents.is_empty() => {
                "No unresolved incidents".to_string()
            }
            Report::UnresolvedIncidents(incidents) => {
                let mut out = String::from("Unresolved incidents:");
                for i in incidents {
                    out.push_str(&format!(
                        "\n{} - status: {}, created at {}",
                        i.name, i.status, i.created_at
                    ));
                }
                out
            }
            Report::IncidentCreated { name } => format!("Created new incident: {name}"),
            Report::IncidentUpdated { name, status } => {
                format!("Updated incident '{name}' status to {status}")
            }
            Report::NoOpenIncidents => "No open incidents".to_string(),
            Report::InvalidIncidentCommand => "Invalid command".to_string(),
            Report::UnrecognizedCommand => "Command not recognized".to_string(),
        };
        Ok(text)
    }
}

pub fn print_report(report: &Report) -> Result<(), CliError> {
    let out = report.render()?;
    println!("{out}");
    Ok(())
}
