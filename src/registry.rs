//! Case-insensitive component name index built once per invocation.

use std::collections::BTreeMap;

use statuspage_api_types::Component;
use tracing::debug;

use crate::client::{CliError, Ctx};

/// Lowercased component name → component id.
///
/// Keys iterate in lexicographic order, which is also the order fuzzy lookups
/// pick from when several names match.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    by_name: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub name: &'a str,
    pub id: &'a str,
}

impl ComponentRegistry {
    pub async fn build(ctx: &Ctx) -> Result<Self, CliError> {
        let components = ctx.list_components().await?;
        let registry = Self::from_components(&components);
        debug!(components = registry.len(), "component registry built");
        Ok(registry)
    }

    /// Later components overwrite earlier ones sharing a lowercased name.
    pub fn from_components<'a>(components: impl IntoIterator<Item = &'a Component>) -> Self {
        let by_name = components
            .into_iter()
            .map(|c| (c.name.to_lowercase(), c.id.clone()))
            .collect();
        Self { by_name }
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// First name (lexicographically) containing `fragment`, ignoring case.
    pub fn resolve(&self, fragment: &str) -> Result<Resolved<'_>, CliError> {
        let needle = fragment.to_lowercase();
        let mut matches = self
            .by_name
            .iter()
            .filter(|(name, _)| name.contains(needle.as_str()));

        let Some((name, id)) = matches.next() else {
            return Err(CliError::UnknownComponent {
                fragment: fragment.to_string(),
            });
        };

        let others: Vec<&str> = matches.map(|(n, _)| n.as_str()).collect();
        if !others.is_empty() {
            debug!(fragment, chosen = %name, ?others, "component name is ambiguous");
        }

        Ok(Resolved { name, id })
    }
}
