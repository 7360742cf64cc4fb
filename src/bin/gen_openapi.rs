use utoipa::OpenApi;
use comic_press::openapi::ApiDoc;

fn main() -> anyhow::Result<()> {
    let yaml = ApiDoc::openapi().to_yaml()?;
    println!("{}", yaml);
    Ok(())
}
