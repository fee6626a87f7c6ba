//! Navigation capability injected into the form, so the form never reaches
//! for a global router and tests can record redirects.

use tracing::info;

/// Route shown after a confirmed verification.
pub const LOGIN_ROUTE: &str = "/login";

pub trait Navigator {
    fn navigate_to(&mut self, path: &str);
}

/// Keeps every visited path, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&mut self, path: &str) {
        self.visited.push(path.to_string());
    }
}

/// Terminal navigator: resolves the route against the web origin and prints it.
#[derive(Clone, Debug)]
pub struct TerminalNavigator {
    origin: url::Url,
}

impl TerminalNavigator {
    #[must_use]
    pub const fn new(origin: url::Url) -> Self {
        Self { origin }
    }

    #[must_use]
    pub fn resolve(&self, path: &str) -> String {
        self.origin
            .join(path)
            .map_or_else(|_| path.to_string(), |url| url.to_string())
    }
}

impl Navigator for TerminalNavigator {
    fn navigate_to(&mut self, path: &str) {
        let target = self.resolve(path);
        info!(location = %target, "redirecting");
        println!("Continue at {target}");
    }
}
