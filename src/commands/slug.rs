use serde::Serialize;

use crate::cli::PageArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::page::slug;

use super::show::page_context;

#[derive(Debug, Serialize)]
struct ResolvedSlug<'a> {
    slug: &'a str,
}

pub fn run(ctx: &AppContext, args: PageArgs) -> AppResult<()> {
    let slug = slug::resolve(&page_context(&args)).map_err(|err| AppError::Page(err.to_string()))?;

    ctx.output.emit(
        slug.as_str(),
        &ResolvedSlug {
            slug: slug.as_str(),
        },
    )
}
