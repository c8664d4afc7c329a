use pmhub_schema::SchemaRegistry;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

#[derive(Serialize)]
struct SchemaListResponse {
    schemas: Vec<&'static str>,
}

/// Handle `pmhub schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new()?;

    let Some(name) = args.name.as_deref() else {
        return output(
            &SchemaListResponse {
                schemas: registry.list(),
            },
            flags.format,
        );
    };

    let schema = registry.get(name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown schema '{name}' (available: {})",
            registry.list().join(", ")
        )
    })?;
    output(schema, flags.format)
}
