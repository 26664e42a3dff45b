use crate::{
    api::validate,
    cli::{actions::Action, globals::GlobalArgs},
    form::{controller, ids, MemoryForm},
};
use anyhow::{bail, Result};
use secrecy::ExposeSecret;
use tracing::{debug, warn};

/// Handle a form submission: fill the in-memory page, run the gating checks,
/// and send the request only when the submit button would be clickable.
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    match action {
        Action::CreateUser {
            first_name,
            last_name,
            user_name,
            email,
            password,
            confirm_password,
        } => {
            let mut form = MemoryForm::new();
            form.set_value(ids::CREATE_USER_FIRST_NAME, &first_name);
            form.set_value(ids::CREATE_USER_LAST_NAME, &last_name);
            form.set_value(ids::CREATE_USER_USER_NAME, &user_name);
            form.set_value(ids::CREATE_USER_EMAIL, &email);
            form.set_value(ids::CREATE_USER_PASSWORD, password.expose_secret());
            form.set_value(
                ids::CREATE_USER_CONFIRM_PASSWORD,
                confirm_password.expose_secret(),
            );

            controller::check_create_user(&mut form);

            if form.button(ids::CREATE_BUTTON).disabled {
                debug!(
                    "confirm password background: {}",
                    form.background(ids::CREATE_USER_CONFIRM_PASSWORD).css()
                );

                bail!("create user form is incomplete or invalid");
            }

            // the backend repeats these checks, failures here are advisory
            if let Err(e) = validate::validate_create_user(&controller::create_user_request(&form))
            {
                warn!("the backend is expected to reject this request: {e}");
            }

            controller::init_request(&form, globals, controller::CREATE_USER_ACTION).await;
        }
        Action::LoginUser { email, password } => {
            if !globals.login_enabled {
                warn!("login is disabled, enable it with --enable-login");
                return Ok(());
            }

            let mut form = MemoryForm::new();
            form.set_value(ids::LOGIN_USER_EMAIL, &email);
            form.set_value(ids::LOGIN_USER_PASSWORD, password.expose_secret());

            controller::check_login_user(&mut form);

            if form.button(ids::LOGIN_BUTTON).disabled {
                bail!("login form is incomplete or invalid");
            }

            controller::init_request(&form, globals, controller::LOGIN_USER_ACTION).await;
        }
    }

    Ok(())
}
