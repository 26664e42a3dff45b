use crate::{
    api::{validate, Environment},
    cli::{
        actions::Action,
        globals::{GlobalArgs, UpdateTarget},
    },
};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;
use uuid::Uuid;

/// Build the run configuration from the global arguments.
pub fn globals(matches: &clap::ArgMatches) -> GlobalArgs {
    let base_url = matches.get_one::<String>("base-url").map_or_else(
        || {
            matches
                .get_one::<Environment>("env")
                .copied()
                .unwrap_or_default()
                .base_url()
                .to_string()
        },
        ToString::to_string,
    );

    let mut globals = GlobalArgs::new(base_url);
    globals.login_enabled = matches.get_flag("enable-login");

    globals
}

pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    let mut globals = globals(matches);

    match matches.subcommand() {
        Some(("create-user", sub)) => {
            if let (Some(email), Some(token)) = (
                sub.get_one::<String>("previous-email"),
                sub.get_one::<String>("token"),
            ) {
                validate::validate_email(email)?;

                Uuid::parse_str(token).context("invalid verification token")?;

                globals.update = Some(UpdateTarget {
                    email: email.to_string(),
                    token: token.to_string(),
                });
            }

            let arg = |name: &str| -> Result<String> {
                sub.get_one::<String>(name)
                    .map(ToString::to_string)
                    .ok_or_else(|| anyhow!("missing required argument: --{name}"))
            };

            Ok((
                Action::CreateUser {
                    first_name: arg("first-name")?,
                    last_name: arg("last-name")?,
                    user_name: arg("user-name")?,
                    email: arg("email")?,
                    password: SecretString::from(arg("password")?),
                    confirm_password: SecretString::from(arg("confirm-password")?),
                },
                globals,
            ))
        }
        Some(("login-user", sub)) => {
            let arg = |name: &str| -> Result<String> {
                sub.get_one::<String>(name)
                    .map(ToString::to_string)
                    .ok_or_else(|| anyhow!("missing required argument: --{name}"))
            };

            Ok((
                Action::LoginUser {
                    email: arg("email")?,
                    password: SecretString::from(arg("password")?),
                },
                globals,
            ))
        }
        _ => Err(anyhow!("missing subcommand")),
    }
}
