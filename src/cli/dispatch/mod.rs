use crate::cli::{
    actions::{verify::Args, Action},
    commands::{ARG_API_URL, ARG_EMAIL, ARG_NO_WAIT, ARG_OTP, ARG_TIMEOUT, ARG_WEB_URL},
};
use anyhow::{Context, Result};
use secrecy::SecretString;
use std::time::Duration;
use url::Url;

/// # Errors
/// Returns an error if required arguments are missing or a URL is invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let api_url = matches
        .get_one::<String>(ARG_API_URL)
        .context("missing required argument: --api-url")?;
    let api_url = Url::parse(api_url).context("invalid VERIMAIL_API_URL")?;

    // The login page is served by the API origin unless a web origin is given.
    let web_url = match matches.get_one::<String>(ARG_WEB_URL) {
        Some(web_url) => Url::parse(web_url).context("invalid VERIMAIL_WEB_URL")?,
        None => api_url.clone(),
    };

    let email = matches
        .get_one::<String>(ARG_EMAIL)
        .cloned()
        .context("missing required argument: --email")?;

    let otp = matches
        .get_one::<String>(ARG_OTP)
        .cloned()
        .map(SecretString::from)
        .context("missing required argument: --otp")?;

    let timeout = matches.get_one::<u64>(ARG_TIMEOUT).copied().unwrap_or(10);

    Ok(Action::Verify(Args {
        api_url,
        web_url,
        email,
        otp,
        timeout: Duration::from_secs(timeout),
        wait: !matches.get_flag(ARG_NO_WAIT),
    }))
}
