pub mod submit;

use secrecy::SecretString;

/// Form submissions the CLI can drive.
#[derive(Debug)]
pub enum Action {
    CreateUser {
        first_name: String,
        last_name: String,
        user_name: String,
        email: String,
        password: SecretString,
        confirm_password: SecretString,
    },
    LoginUser {
        email: String,
        password: SecretString,
    },
}
