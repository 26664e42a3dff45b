pub mod models;
pub mod validate;

use crate::cli::globals::UpdateTarget;
use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, instrument};
use url::Url;

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Path of the user upsert endpoint.
pub const UPSERT_USER_ENDPOINT: &str = "/rest/user/v1/upsertUser";

/// Path of the user login endpoint.
pub const LOGIN_USER_ENDPOINT: &str = "/rest/user/v1/loginUser";

/// Deployment targets the client knows how to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Embedded database server run from the IDE, port 8082.
    #[default]
    LocalDb,
    /// Tomcat on the remote host, application context `/squareit`.
    RemoteTomcat,
    /// Tomcat on localhost, application context `/squareit`.
    LocalTomcat,
}

impl Environment {
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::LocalDb => "http://localhost:8082",
            Self::RemoteTomcat => "http://178.251.131.62:8080/squareit",
            Self::LocalTomcat => "http://localhost:8080/squareit",
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local-db" => Ok(Self::LocalDb),
            "remote-tomcat" => Ok(Self::RemoteTomcat),
            "local-tomcat" => Ok(Self::LocalTomcat),
            _ => Err(format!("unknown environment: {s}")),
        }
    }
}

/// Build an absolute endpoint URL from the configured base URL, normalizing
/// scheme, host, and port, and keeping any application context path.
#[instrument]
pub fn endpoint_url(base_url: &str, endpoint: &str) -> Result<String> {
    let url = Url::parse(base_url)?;

    let scheme = url.scheme();

    let host = url
        .host()
        .ok_or_else(|| anyhow!("Error parsing URL: no host specified"))?
        .to_owned();

    let port = match url.port() {
        Some(p) => p,
        None => match scheme {
            "http" => 80,
            "https" => 443,
            _ => return Err(anyhow!("Error parsing URL: unsupported scheme {}", scheme)),
        },
    };

    let context = url.path().trim_end_matches('/');

    let endpoint_url = format!("{scheme}://{host}:{port}{context}{endpoint}");

    debug!("endpoint URL: {}", endpoint_url);

    Ok(endpoint_url)
}

/// URL of the upsert endpoint; with an update target, addresses the
/// `/{email}/{token}` variant that modifies an existing user.
pub fn upsert_user_url(base_url: &str, update: Option<&UpdateTarget>) -> Result<String> {
    match update {
        Some(target) => endpoint_url(
            base_url,
            &format!("{UPSERT_USER_ENDPOINT}/{}/{}", target.email, target.token),
        ),
        None => endpoint_url(base_url, UPSERT_USER_ENDPOINT),
    }
}

/// URL of the login endpoint.
pub fn login_user_url(base_url: &str) -> Result<String> {
    endpoint_url(base_url, LOGIN_USER_ENDPOINT)
}

/// PUT the payload to the endpoint as JSON. The outcome is logged only:
/// no caller-visible result, no retry, no timeout.
#[instrument(skip(payload))]
pub async fn send_request(url: &str, payload: &Value) {
    let client = match Client::builder().user_agent(APP_USER_AGENT).build() {
        Ok(client) => client,
        Err(e) => {
            error!("Error creating reqwest client: {e:?}");
            return;
        }
    };

    debug!("PUT {url}: {payload}");

    match client.put(url).json(payload).send().await {
        Ok(response) => {
            let status = response.status();

            match response.json::<Value>().await {
                Ok(body) if status.is_success() => {
                    info!("{}", models::describe_response(&body));
                }
                Ok(body) => {
                    error!("{url} - {status}, {body}");
                }
                Err(e) => {
                    error!("Error parsing JSON response: {e:?}");
                }
            }
        }
        Err(e) => {
            error!("Error sending request: {e:?}");
        }
    }
}
