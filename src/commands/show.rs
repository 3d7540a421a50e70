use std::time::Duration;

use crate::cli::{PageArgs, ShowArgs};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::{Output, OutputMode, text};
use crate::page::{PageContext, ProfileLoader, ViewState, load_unresolved, slug};

pub async fn run(ctx: &AppContext, args: ShowArgs) -> AppResult<()> {
    let mut updates = UpdatePrinter::new(ctx.output, args.updates);

    let state = match slug::resolve(&page_context(&args.page)) {
        Ok(slug) => {
            let loader = ProfileLoader::new(ctx.salon_client()?);
            let deadline = Duration::from_millis(args.wait_ms);
            loader
                .load_within(Ok(slug), deadline, |state| updates.print(state))
                .await
        }
        Err(err) => load_unresolved(err, |state| updates.print(state)),
    };
    updates.finish()?;

    render(ctx.output, args.updates, &state, args.wait_ms)
}

pub fn page_context(args: &PageArgs) -> PageContext {
    PageContext::new(args.slug.clone(), &args.url)
}

fn render(output: Output, updates: bool, state: &ViewState, wait_ms: u64) -> AppResult<()> {
    match state {
        ViewState::Ready { salon, metrics } => {
            if updates && output.mode() == OutputMode::Json {
                return Ok(());
            }
            let block = text::profile_block(salon, metrics.as_ref());
            output.emit(&block, state)
        }
        ViewState::Error { message } => {
            if !updates && output.mode() == OutputMode::Json {
                output.emit(message, state)?;
            }
            Err(AppError::Page(message.clone()))
        }
        ViewState::Loading => {
            if !updates {
                output.emit(&text::state_line(state), state)?;
            }
            Err(AppError::Api(format!(
                "salon api did not answer within {wait_ms}ms"
            )))
        }
    }
}

struct UpdatePrinter {
    output: Output,
    enabled: bool,
    error: Option<AppError>,
}

impl UpdatePrinter {
    fn new(output: Output, enabled: bool) -> Self {
        Self {
            output,
            enabled,
            error: None,
        }
    }

    fn print(&mut self, state: &ViewState) {
        if !self.enabled || self.error.is_some() {
            return;
        }
        if let Err(err) = self.output.emit_line(&text::state_line(state), state) {
            self.error = Some(err);
        }
    }

    fn finish(self) -> AppResult<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
