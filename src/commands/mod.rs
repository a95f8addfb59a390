pub mod components;
pub mod incidents;

use tracing::debug;

use crate::client::{CliError, Ctx};
use crate::config::IncidentOrder;
use crate::registry::ComponentRegistry;
use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Components,
    Incidents,
    Unknown,
}

impl Command {
    pub fn parse(verb: Option<&str>) -> Self {
        match verb {
            Some("components") => Command::Components,
            Some("incidents") => Command::Incidents,
            _ => Command::Unknown,
        }
    }
}

/// Route `args` (verb first) to the matching handler.
pub async fn dispatch(
    ctx: &Ctx,
    registry: &ComponentRegistry,
    order: IncidentOrder,
    args: &[String],
) -> Result<Report, CliError> {
    let (verb, rest) = match args.split_first() {
        Some((verb, rest)) => (Some(verb.as_str()), rest),
        None => (None, args),
    };

    let command = Command::parse(verb);
    debug!(?command, args = rest.len(), "dispatching");

    match command {
        Command::Components => components::handle(ctx, registry, rest).await,
        Command::Incidents => incidents::handle(ctx, order, rest).await,
        Command::Unknown => Ok(Report::UnrecognizedCommand),
    }
}
