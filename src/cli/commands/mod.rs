pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ArgAction, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_WEB_URL: &str = "web-url";
pub const ARG_EMAIL: &str = "email";
pub const ARG_OTP: &str = "otp";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_NO_WAIT: &str = "no-wait";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("verimail")
        .about("Verify email ownership with a one-time passcode")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Base URL of the API, example: https://app.tld")
                .default_value("http://localhost:3000")
                .env("VERIMAIL_API_URL"),
        )
        .arg(
            Arg::new(ARG_WEB_URL)
                .long("web-url")
                .help("Base URL of the web frontend serving /login, defaults to --api-url")
                .env("VERIMAIL_WEB_URL"),
        )
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long("email")
                .help("Email address to verify")
                .env("VERIMAIL_EMAIL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_OTP)
                .long("otp")
                .help("One-time passcode received by email")
                .env("VERIMAIL_OTP")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .short('t')
                .long("timeout")
                .help("Request timeout in seconds")
                .default_value("10")
                .env("VERIMAIL_TIMEOUT")
                .value_parser(clap::value_parser!(u64).range(1..=300)),
        )
        .arg(
            Arg::new(ARG_NO_WAIT)
                .long("no-wait")
                .help("Dismiss the outcome notification immediately")
                .action(ArgAction::SetTrue),
        );

    logging::with_args(command)
}
