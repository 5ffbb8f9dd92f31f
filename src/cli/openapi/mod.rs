//! OpenAPI command - prints the generated document to stdout

use std::io::Write;

use utoipa::OpenApi;

use crate::api::ApiDoc;

pub fn run() -> anyhow::Result<()> {
    let json = ApiDoc::openapi().to_pretty_json()?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;

    Ok(())
}
