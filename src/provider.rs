//! Provider settings resolution.
//!
//! Turns the provider configuration block plus environment variables into the
//! settings a CLI client would be created with. Nothing here talks to the
//! server; the login request is only shaped.

use cliparams::{Value, cli_params};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;
use url::Url;

/// Server used when the configuration does not name one
pub const DEFAULT_SERVER_URL: &str = "https://cli.btp.cloud.sap";

pub const ENV_USERNAME: &str = "BTP_USERNAME";
pub const ENV_PASSWORD: &str = "BTP_PASSWORD";
pub const ENV_IDP: &str = "BTP_IDP";

/// The provider configuration block
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub cli_server_url: Value<String>,
    pub globalaccount: Value<String>,
    pub username: Value<String>,
    pub password: Value<String>,
    pub idp: Value<String>,
}

/// Errors that prevent a client from being created
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An attribute is not known yet, e.g. during planning
    #[error("cannot use unknown value as {0}")]
    UnknownValue(&'static str),

    /// The server URL does not parse
    #[error("invalid CLI server URL '{url}': {source}")]
    InvalidServerUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Credentials are missing from both configuration and environment
    #[error("globalaccount, username and password must be given")]
    MissingCredentials,
}

/// Settings a CLI client is created with
#[derive(Clone)]
pub struct ProviderSettings {
    pub server_url: Url,
    pub global_account: String,
    pub username: String,
    pub password: String,
    pub idp: String,
    pub user_agent: String,
}

// The password never shows up in logs.
impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("server_url", &self.server_url.as_str())
            .field("global_account", &self.global_account)
            .field("username", &self.username)
            .field("password", &"***")
            .field("idp", &self.idp)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Login parameters; an empty identity provider means the default one
#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    pub custom_idp: String,
    pub subdomain: String,
    pub user_name: String,
    pub password: String,
}

cli_params!(LoginRequest {
    custom_idp => "customIdp",
    subdomain => "subdomain",
    user_name => "userName",
    password => "password",
});

impl ProviderConfig {
    /// Resolve settings, falling back to `env` for null credentials.
    ///
    /// `env` looks up an environment variable; pass `|name| std::env::var(name).ok()`
    /// outside of tests.
    pub fn resolve<E>(
        &self,
        env: E,
        terraform_version: &str,
    ) -> Result<ProviderSettings, ProviderError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let url = match &self.cli_server_url {
            Value::Unknown => return Err(ProviderError::UnknownValue("CLI server URL")),
            Value::Null => DEFAULT_SERVER_URL,
            Value::Known(url) => url.as_str(),
        };
        let server_url = Url::parse(url).map_err(|source| ProviderError::InvalidServerUrl {
            url: url.to_string(),
            source,
        })?;

        let idp = from_config_or_env(&self.idp, "identity provider", ENV_IDP, &env)?;
        let username = from_config_or_env(&self.username, "username", ENV_USERNAME, &env)?;
        let password = from_config_or_env(&self.password, "password", ENV_PASSWORD, &env)?;
        let global_account = self.globalaccount.as_known().cloned().unwrap_or_default();

        if username.is_empty() || password.is_empty() {
            return Err(ProviderError::MissingCredentials);
        }

        Ok(ProviderSettings {
            server_url,
            global_account,
            username,
            password,
            idp,
            user_agent: user_agent(terraform_version),
        })
    }
}

impl ProviderSettings {
    /// The login request a client would send with these settings
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            custom_idp: self.idp.clone(),
            subdomain: self.global_account.clone(),
            user_name: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// User agent sent by the client
pub fn user_agent(terraform_version: &str) -> String {
    format!(
        "Terraform/{terraform_version} btpkit/{}",
        env!("CARGO_PKG_VERSION")
    )
}

fn from_config_or_env<E>(
    value: &Value<String>,
    attribute: &'static str,
    var: &str,
    env: &E,
) -> Result<String, ProviderError>
where
    E: Fn(&str) -> Option<String>,
{
    match value {
        Value::Unknown => Err(ProviderError::UnknownValue(attribute)),
        Value::Null => Ok(env(var).unwrap_or_default()),
        Value::Known(v) => Ok(v.clone()),
    }
}
