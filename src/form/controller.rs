use crate::{
    api::{
        self,
        models::{CreateUserRequest, LoginRequest, RoleType},
        validate,
    },
    cli::globals::GlobalArgs,
    form::{ids, FieldColor, FormPage, BUTTON_CLASS, BUTTON_DISABLED_CLASS},
};
use regex::Regex;
use serde_json::Value;
use tracing::{debug, error};

/// Form action tag of the registration page submit.
pub const CREATE_USER_ACTION: &str = "createUser";

/// Form action tag of the login page submit.
pub const LOGIN_USER_ACTION: &str = "loginUser";

/// Dispatch a form action: assemble the payload from the current field
/// values and hand it to the request sender. Unrecognized tags are ignored.
pub async fn init_request(form: &impl FormPage, globals: &GlobalArgs, action: &str) {
    if let Some((url, payload)) = build_request(form, globals, action) {
        api::send_request(&url, &payload).await;
    }
}

/// Assemble the endpoint URL and JSON payload for a form action, or `None`
/// when the action should not produce a request.
pub fn build_request(
    form: &impl FormPage,
    globals: &GlobalArgs,
    action: &str,
) -> Option<(String, Value)> {
    match action {
        CREATE_USER_ACTION => {
            let request = create_user_request(form);

            let url = match api::upsert_user_url(&globals.base_url, globals.update.as_ref()) {
                Ok(url) => url,
                Err(e) => {
                    error!("Error building upsert URL: {e}");
                    return None;
                }
            };

            serde_json::to_value(&request)
                .ok()
                .map(|payload| (url, payload))
        }
        LOGIN_USER_ACTION if globals.login_enabled => {
            let request = LoginRequest {
                email: form.value(ids::LOGIN_USER_EMAIL),
                password: form.value(ids::LOGIN_USER_PASSWORD),
            };

            let url = match api::login_user_url(&globals.base_url) {
                Ok(url) => url,
                Err(e) => {
                    error!("Error building login URL: {e}");
                    return None;
                }
            };

            serde_json::to_value(&request)
                .ok()
                .map(|payload| (url, payload))
        }
        _ => {
            debug!("ignoring form action: {action}");
            None
        }
    }
}

/// Read the registration payload out of the create form. `role` is always
/// `USER_ROLE` and accounts start disabled until activated on the backend.
#[must_use]
pub fn create_user_request(form: &impl FormPage) -> CreateUserRequest {
    CreateUserRequest {
        first_name: form.value(ids::CREATE_USER_FIRST_NAME),
        last_name: form.value(ids::CREATE_USER_LAST_NAME),
        user_name: form.value(ids::CREATE_USER_USER_NAME),
        email: form.value(ids::CREATE_USER_EMAIL),
        password: form.value(ids::CREATE_USER_PASSWORD),
        confirm_password: form.value(ids::CREATE_USER_CONFIRM_PASSWORD),
        role: RoleType::UserRole,
        enabled: false,
    }
}

/// Validate the password pair on the registration page: both fields must be
/// non-empty, equal, and at least 8 characters. Colors the fields as a side
/// effect: green when valid, red when the confirmation is present but wrong,
/// reset when the confirmation is empty.
pub fn check_pass(form: &mut impl FormPage) -> bool {
    let password = form.value(ids::CREATE_USER_PASSWORD);
    let confirm_password = form.value(ids::CREATE_USER_CONFIRM_PASSWORD);

    if !password.is_empty()
        && password == confirm_password
        && password.chars().count() >= validate::MIN_PASSWORD
    {
        form.set_background(ids::CREATE_USER_PASSWORD, FieldColor::Valid);
        form.set_background(ids::CREATE_USER_CONFIRM_PASSWORD, FieldColor::Valid);

        return true;
    } else if !confirm_password.is_empty() {
        form.set_background(ids::CREATE_USER_CONFIRM_PASSWORD, FieldColor::Invalid);
    } else {
        form.set_background(ids::CREATE_USER_CONFIRM_PASSWORD, FieldColor::Reset);
    }

    false
}

/// Gate the create button: disabled unless first name, username, and email
/// pass native validity, the password pair validates, and the email matches
/// the address pattern. Meant to run on every keystroke.
pub fn check_create_user(form: &mut impl FormPage) {
    form.button_state(ids::CREATE_BUTTON, true, BUTTON_DISABLED_CLASS, BUTTON_CLASS);

    check_pass(form);

    if form.validity(ids::CREATE_USER_FIRST_NAME)
        && form.validity(ids::CREATE_USER_EMAIL)
        && form.validity(ids::CREATE_USER_USER_NAME)
        && check_pass(form)
        && check_email(&form.value(ids::CREATE_USER_EMAIL))
    {
        form.button_state(ids::CREATE_BUTTON, false, BUTTON_CLASS, BUTTON_DISABLED_CLASS);
    }
}

/// Gate the login button: disabled unless the password passes native
/// validity and the email matches the address pattern.
pub fn check_login_user(form: &mut impl FormPage) {
    form.button_state(ids::LOGIN_BUTTON, true, BUTTON_DISABLED_CLASS, BUTTON_CLASS);

    if form.validity(ids::LOGIN_USER_PASSWORD) && check_email(&form.value(ids::LOGIN_USER_EMAIL)) {
        form.button_state(ids::LOGIN_BUTTON, false, BUTTON_CLASS, BUTTON_DISABLED_CLASS);
    }
}

/// Match an address against the page pattern: dotted word-character local
/// part, word-character domain labels, 2-6 letter TLD with an optional
/// 2-letter country suffix.
#[must_use]
pub fn check_email(email: &str) -> bool {
    Regex::new(
        r"(?i)^([\w-]+(?:\.[\w-]+)*)@((?:[\w-]+\.)*\w[\w-]{0,66})\.([a-z]{2,6}(?:\.[a-z]{2})?)$",
    )
    .map_or(false, |re| re.is_match(email))
}
