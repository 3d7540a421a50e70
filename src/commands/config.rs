use serde::Serialize;

use crate::api::SalonClient;
use crate::cli::ConfigCommand;
use crate::config;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct ProfileSettingsView {
    profile: String,
    settings_file: String,
    api_base: Option<String>,
}

pub fn run(ctx: &AppContext, command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show => {
            let view = ProfileSettingsView {
                profile: ctx.profile.clone(),
                settings_file: ctx.paths.settings_file(&ctx.profile).display().to_string(),
                api_base: ctx.settings.api_base().ok().map(ToOwned::to_owned),
            };

            let text = format!(
                "profile: {}\nsettings: {}\napi base: {}",
                view.profile,
                view.settings_file,
                view.api_base.as_deref().unwrap_or("(not set)")
            );
            ctx.output.emit(&text, &view)
        }
        ConfigCommand::SetBase(args) => {
            let client = SalonClient::new(&args.url)?;
            let api_base = client.base_url().to_string();

            // Reload from disk so env/flag overrides are not persisted.
            let mut settings = config::load_settings(&ctx.paths, &ctx.profile)?;
            settings.api_base = Some(api_base.clone());
            config::save_settings(&ctx.paths, &ctx.profile, &settings)?;

            let view = ProfileSettingsView {
                profile: ctx.profile.clone(),
                settings_file: ctx.paths.settings_file(&ctx.profile).display().to_string(),
                api_base: Some(api_base),
            };
            let text = format!("api base for `{}` set to {}", view.profile, client.base_url());
            ctx.output.emit(&text, &view)
        }
    }
}
