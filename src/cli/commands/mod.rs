use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

use crate::api::Environment;

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn validator_environment() -> ValueParser {
    ValueParser::from(
        move |env: &str| -> std::result::Result<Environment, String> { env.parse() },
    )
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("userform")
        .about("User registration and login form client")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("env")
                .short('e')
                .long("env")
                .help("Deployment environment: local-db, local-tomcat, remote-tomcat")
                .default_value("local-db")
                .env("USERFORM_ENV")
                .global(true)
                .value_parser(validator_environment()),
        )
        .arg(
            Arg::new("base-url")
                .short('b')
                .long("base-url")
                .help("Base URL of the backend, overrides --env")
                .env("USERFORM_BASE_URL")
                .global(true),
        )
        .arg(
            Arg::new("enable-login")
                .long("enable-login")
                .help("Enable the login request branch")
                .env("USERFORM_ENABLE_LOGIN")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("USERFORM_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(
            Command::new("create-user")
                .about("Validate the registration form and upsert the user")
                .arg(
                    Arg::new("first-name")
                        .long("first-name")
                        .help("First name")
                        .required(true),
                )
                .arg(
                    Arg::new("last-name")
                        .long("last-name")
                        .help("Last name")
                        .default_value(""),
                )
                .arg(
                    Arg::new("user-name")
                        .long("user-name")
                        .help("Username")
                        .required(true),
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .help("Email address")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("Password")
                        .required(true),
                )
                .arg(
                    Arg::new("confirm-password")
                        .long("confirm-password")
                        .help("Password confirmation")
                        .required(true),
                )
                .arg(
                    Arg::new("previous-email")
                        .long("previous-email")
                        .help("Existing email when updating a user")
                        .requires("token"),
                )
                .arg(
                    Arg::new("token")
                        .long("token")
                        .help("Verification token when updating a user")
                        .requires("previous-email"),
                ),
        )
        .subcommand(
            Command::new("login-user")
                .about("Validate the login form and request a login")
                .arg(
                    Arg::new("email")
                        .long("email")
                        .help("Email address")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("Password")
                        .required(true),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "userform");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "User registration and login form client"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_check_create_user_args() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "userform",
            "create-user",
            "--first-name",
            "Jane",
            "--user-name",
            "jane_doe",
            "--email",
            "jane.doe@example.com",
            "--password",
            "abcdefgh",
            "--confirm-password",
            "abcdefgh",
        ]);

        assert_eq!(
            matches.get_one::<Environment>("env").copied(),
            Some(Environment::LocalDb)
        );

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "create-user");
        assert_eq!(
            sub.get_one::<String>("first-name").map(String::as_str),
            Some("Jane")
        );
        assert_eq!(
            sub.get_one::<String>("last-name").map(String::as_str),
            Some("")
        );
        assert_eq!(
            sub.get_one::<String>("email").map(String::as_str),
            Some("jane.doe@example.com")
        );
    }

    #[test]
    fn test_check_update_args_require_each_other() {
        let command = new();
        let result = command.try_get_matches_from(vec![
            "userform",
            "create-user",
            "--first-name",
            "Jane",
            "--user-name",
            "jane_doe",
            "--email",
            "jane.doe@example.com",
            "--password",
            "abcdefgh",
            "--confirm-password",
            "abcdefgh",
            "--previous-email",
            "old@example.com",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("USERFORM_ENV", Some("remote-tomcat")),
                ("USERFORM_BASE_URL", Some("http://localhost:9090")),
                ("USERFORM_ENABLE_LOGIN", Some("true")),
                ("USERFORM_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec![
                    "userform",
                    "login-user",
                    "--email",
                    "jane.doe@example.com",
                    "--password",
                    "abcdefgh",
                ]);

                assert_eq!(
                    matches.get_one::<Environment>("env").copied(),
                    Some(Environment::RemoteTomcat)
                );
                assert_eq!(
                    matches.get_one::<String>("base-url").map(String::as_str),
                    Some("http://localhost:9090")
                );
                assert!(matches.get_flag("enable-login"));
                assert_eq!(matches.get_one::<u8>("verbosity").copied(), Some(2));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("USERFORM_LOG_LEVEL", Some(level))], || {
                let command = new();
                let matches = command.get_matches_from(vec![
                    "userform",
                    "login-user",
                    "--email",
                    "jane.doe@example.com",
                    "--password",
                    "abcdefgh",
                ]);

                assert_eq!(
                    matches.get_one::<u8>("verbosity").copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("USERFORM_LOG_LEVEL", None::<String>)], || {
                let mut args = vec![
                    "userform".to_string(),
                    "login-user".to_string(),
                    "--email".to_string(),
                    "jane.doe@example.com".to_string(),
                    "--password".to_string(),
                    "abcdefgh".to_string(),
                ];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let command = new();

                let matches = command.get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>("verbosity").copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_environment_parser() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "userform",
            "--env",
            "local-tomcat",
            "login-user",
            "--email",
            "jane.doe@example.com",
            "--password",
            "abcdefgh",
        ]);

        assert_eq!(
            matches.get_one::<Environment>("env").copied(),
            Some(Environment::LocalTomcat)
        );

        let command = new();
        let result = command.try_get_matches_from(vec![
            "userform",
            "--env",
            "production",
            "login-user",
            "--email",
            "jane.doe@example.com",
            "--password",
            "abcdefgh",
        ]);

        assert!(result.is_err());
    }
}
