use reqwest::Method;
use statuspage_api_types::{Component, ComponentStatus};
use tracing::info;

use crate::client::{CliError, Ctx};
use crate::registry::ComponentRegistry;
use crate::report::Report;

/// `components`, `components <name>`, `components <name> <status>`.
pub async fn handle(
    ctx: &Ctx,
    registry: &ComponentRegistry,
    args: &[String],
) -> Result<Report, CliError> {
    match args {
        [] => list(ctx).await,
        [name] => show(ctx, registry, name).await,
        [name, status, ..] => set_status(ctx, registry, name, status).await,
    }
}

async fn list(ctx: &Ctx) -> Result<Report, CliError> {
    let components = ctx.list_components().await?;
    Ok(Report::ComponentListing(components))
}

async fn show(ctx: &Ctx, registry: &ComponentRegistry, name: &str) -> Result<Report, CliError> {
    let resolved = registry.resolve(name)?;
    let components = ctx.list_components().await?;
    let component = components
        .into_iter()
        .find(|c| c.id == resolved.id)
        .ok_or_else(|| {
            CliError::Server(format!(
                "component {} ({}) is no longer listed",
                resolved.name, resolved.id
            ))
        })?;

    Ok(Report::ComponentStatus {
        status: component.status_label(),
        name: component.name,
    })
}

async fn set_status(
    ctx: &Ctx,
    registry: &ComponentRegistry,
    name: &str,
    status: &str,
) -> Result<Report, CliError> {
    let new_status =
        ComponentStatus::match_fragment(status).ok_or_else(|| CliError::InvalidStatus {
            value: status.to_string(),
            valid: ComponentStatus::labels(),
        })?;
    let resolved = registry.resolve(name)?;

    let path = format!("components/{}.json", resolved.id);
    let fields = [("component[status]", new_status.as_str())];
    let updated: Component = ctx.send(Method::PATCH, &path, Some(&fields[..])).await?;
    info!(component = %updated.name, status = %updated.status, "component status updated");

    Ok(Report::ComponentUpdated {
        status: updated.status_label(),
        name: updated.name,
    })
}
