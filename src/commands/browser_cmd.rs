use async_trait::async_trait;
use tracing::warn;
use crate::commands::{Arity, Command, CommandContext, CommandResult};
use crate::error::ShellError;

/// Opens a DuckDuckGo search. Registered as both `browser` and `ddg`.
pub struct BrowserCommand {
    name: &'static str,
}

impl BrowserCommand {
    pub const BROWSER: BrowserCommand = BrowserCommand { name: "browser" };
    pub const DDG: BrowserCommand = BrowserCommand { name: "ddg" };
}

const USAGE: &str = "Usage: browser [search query] (e.g., browser html os)";

const SEARCH_URL: &str = "https://duckduckgo.com/?q=";

/// Percent-encode everything outside the URI-component unreserved set.
fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || "-_.!~*'()".contains(c) {
            out.push(c);
        } else {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{:02X}", b));
            }
        }
    }
    out
}

pub fn search_url(query: &str) -> String {
    format!("{}{}", SEARCH_URL, encode_uri_component(query))
}

#[async_trait]
impl Command for BrowserCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn arity(&self) -> Arity {
        Arity::Required { what: "search query for browser", usage: Some(USAGE) }
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let query = ctx.text();
        let url = search_url(&query);
        if let Err(e) = ctx.services.link_opener.open(&url) {
            warn!(%url, error = %e, "failed to open link");
            return CommandResult::error(ShellError::LinkOpen { url, reason: e.to_string() });
        }
        CommandResult::line(format!("Opening DuckDuckGo in a new tab for query: \"{}\"", query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use crate::commands::types::test_support::{run_with, texts};
    use crate::commands::Services;
    use crate::host::LinkOpener;
    use crate::session::ShellSession;

    #[derive(Default)]
    struct Recorder {
        opened: Mutex<Vec<String>>,
    }

    impl LinkOpener for Recorder {
        fn open(&self, url: &str) -> io::Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl LinkOpener for Broken {
        fn open(&self, _url: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no opener"))
        }
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("html os"), "html%20os");
        assert_eq!(encode_uri_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_uri_component("(it's)"), "(it's)");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[tokio::test]
    async fn test_browser_opens_search() {
        let recorder = Arc::new(Recorder::default());
        let services = Services { link_opener: recorder.clone(), ..Services::default() };
        let mut session = ShellSession::new();
        let result = run_with(&BrowserCommand::BROWSER, &mut session, &services, &["rust", "lang"]).await;
        assert_eq!(texts(&result), vec!["Opening DuckDuckGo in a new tab for query: \"rust lang\""]);
        assert_eq!(
            *recorder.opened.lock().unwrap(),
            vec!["https://duckduckgo.com/?q=rust%20lang".to_string()]
        );
    }

    #[tokio::test]
    async fn test_ddg_is_an_alias() {
        let recorder = Arc::new(Recorder::default());
        let services = Services { link_opener: recorder.clone(), ..Services::default() };
        let mut session = ShellSession::new();
        let result = run_with(&BrowserCommand::DDG, &mut session, &services, &["x"]).await;
        assert!(result.is_success());
        assert_eq!(recorder.opened.lock().unwrap().len(), 1);
        assert_eq!(BrowserCommand::DDG.arity(), BrowserCommand::BROWSER.arity());
    }

    #[tokio::test]
    async fn test_opener_failure_reported() {
        let services = Services { link_opener: Arc::new(Broken), ..Services::default() };
        let mut session = ShellSession::new();
        let result = run_with(&BrowserCommand::BROWSER, &mut session, &services, &["x"]).await;
        assert_eq!(result.exit_code, 1);
        assert_eq!(
            texts(&result),
            vec!["Error: Could not open https://duckduckgo.com/?q=x: no opener"]
        );
    }
}
