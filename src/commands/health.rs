use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let client = ctx.salon_client()?;
    let payload = client.health().await?;

    let text = format!(
        "{} is up\n{}",
        client.base_url(),
        serde_json::to_string_pretty(&payload)?
    );
    ctx.output.emit(&text, &payload)
}
