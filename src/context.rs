use crate::api::SalonClient;
use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub profile: String,
    pub verbose: u8,
    pub paths: AppPaths,
    pub settings: Settings,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        profile: String,
        api_base: Option<String>,
        json: bool,
        verbose: u8,
    ) -> AppResult<Self> {
        let profile = config::resolve_profile(&profile)?;
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths, &profile)?.with_override(api_base);
        let output = Output::new(json);

        Ok(Self {
            profile,
            verbose,
            paths,
            settings,
            output,
        })
    }

    pub fn salon_client(&self) -> AppResult<SalonClient> {
        SalonClient::new(self.settings.api_base()?)
    }
}
