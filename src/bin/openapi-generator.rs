//! Print the OpenAPI document as pretty JSON, e.g. to feed client generators.

use fruit_catcher_back::services::documentation::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let doc = ApiDoc::openapi();
    println!("{}", doc.to_pretty_json()?);
    Ok(())
}
