//! `btpkit provider` - resolve provider settings

use anyhow::{Context as AnyhowContext, Result};

use crate::Context;
use crate::cli::ProviderArgs;
use crate::config;
use crate::provider::{ProviderConfig, ProviderSettings};
use crate::ui;

pub fn run(ctx: &Context, args: &ProviderArgs) -> Result<()> {
    let provider_config = match &args.file {
        Some(path) => config::load_record::<ProviderConfig>(path)?.unwrap_or_default(),
        None => ProviderConfig::default(),
    };

    let settings = resolve(&provider_config, &args.terraform_version)?;
    log::debug!("Resolved {settings:?}");

    let mut login = cliparams::to_params(&settings.login_request())
        .context("Could not build login parameters")?;
    if let Some(password) = login.get_mut("password") {
        *password = ui::mask(password);
    }

    if !ctx.quiet {
        ui::header("Provider");
    }
    if settings.server_url.scheme() != "https" {
        ui::warn("CLI server URL does not use https");
    }
    ui::kv("server", settings.server_url.as_str());
    ui::kv("global account", &settings.global_account);
    ui::kv("user", &settings.username);
    ui::kv("password", &ui::mask(&settings.password));
    ui::kv(
        "idp",
        if settings.idp.is_empty() {
            "(default)"
        } else {
            settings.idp.as_str()
        },
    );
    ui::kv("user agent", &settings.user_agent);

    ui::section("Login parameters");
    super::params::print_params(&login);

    Ok(())
}

fn resolve(provider_config: &ProviderConfig, terraform_version: &str) -> Result<ProviderSettings> {
    provider_config
        .resolve(|name| std::env::var(name).ok(), terraform_version)
        .context("Unable to create client")
}
