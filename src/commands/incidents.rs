use reqwest::Method;
use statuspage_api_types::{Incident, IncidentStatus};
use tracing::{info, warn};

use crate::client::{CliError, Ctx};
use crate::config::IncidentOrder;
use crate::report::Report;

const OPEN_USAGE: &str = "incidents open <status> <message> <name>";
const UPDATE_USAGE: &str = "incidents update <status> <message>";

/// `incidents`, `incidents open ...`, `incidents update ...`.
pub async fn handle(ctx: &Ctx, order: IncidentOrder, args: &[String]) -> Result<Report, CliError> {
    let unresolved: Vec<Incident> = ctx
        .list_incidents()
        .await?
        .into_iter()
        .filter(Incident::is_unresolved)
        .collect();

    match args.split_first() {
        None => Ok(Report::UnresolvedIncidents(unresolved)),
        Some((verb, rest)) if verb == "open" => open(ctx, rest).await,
        Some((verb, rest)) if verb == "update" => {
            update(ctx, latest(unresolved, order), rest).await
        }
        Some(_) => Ok(Report::InvalidIncidentCommand),
    }
}

/// Incident `update` targets when several are open.
///
/// `Newest` keeps the earliest-listed incident on equal or unparseable
/// timestamps, so it falls back to API order.
pub fn latest(unresolved: Vec<Incident>, order: IncidentOrder) -> Option<Incident> {
    let mut incidents = unresolved.into_iter();
    let first = incidents.next()?;
    match order {
        IncidentOrder::Api => Some(first),
        IncidentOrder::Newest => Some(incidents.fold(first, |best, candidate| {
            if candidate.created_at_time() > best.created_at_time() {
                candidate
            } else {
                best
            }
        })),
    }
}

async fn open(ctx: &Ctx, args: &[String]) -> Result<Report, CliError> {
    let [status, message, name, ..] = args else {
        return Err(CliError::Usage(OPEN_USAGE));
    };
    note_unknown_status(status);

    let fields = [
        ("incident[name]", name.as_str()),
        ("incident[status]", status.as_str()),
        ("incident[message]", message.as_str()),
    ];
    let created: Incident = ctx
        .send(Method::POST, "incidents.json", Some(&fields[..]))
        .await?;
    info!(incident = %created.id, name = %created.name, "incident created");

    Ok(Report::IncidentCreated { name: created.name })
}

async fn update(ctx: &Ctx, target: Option<Incident>, args: &[String]) -> Result<Report, CliError> {
    let Some(target) = target else {
        return Ok(Report::NoOpenIncidents);
    };
    let [status, message, ..] = args else {
        return Err(CliError::Usage(UPDATE_USAGE));
    };
    note_unknown_status(status);

    let updated = update_incident_by_id(ctx, status, message, &target.id).await?;
    Ok(Report::IncidentUpdated {
        name: updated.name,
        status: updated.status,
    })
}

/// Patch status and message of incident `id` directly, without checking that
/// it exists or is still open.
pub async fn update_incident_by_id(
    ctx: &Ctx,
    status: &str,
    message: &str,
    id: &str,
) -> Result<Incident, CliError> {
    let path = format!("incidents/{id}.json");
    let fields = [("incident[status]", status), ("incident[message]", message)];
    let updated: Incident = ctx.send(Method::PATCH, &path, Some(&fields[..])).await?;
    info!(incident = %updated.id, status = %updated.status, "incident updated");
    Ok(updated)
}

// Statuses go to the API verbatim; an unfamiliar one is only worth a warning.
fn note_unknown_status(status: &str) {
    if IncidentStatus::parse(status).is_none() {
        warn!(status, "not a standard incident status, sending as given");
    }
}
