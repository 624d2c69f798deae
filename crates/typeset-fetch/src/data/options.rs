use std::time::Duration;

use url::Url;

/// Configuration for the transport behind a loader.
///
/// The loader itself has no knobs; everything here is handed to the HTTP
/// client when it is built.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use typeset_fetch::data::ClientOptions;
/// use url::Url;
///
/// let options = ClientOptions::default()
///     .timeout(Duration::from_secs(10))
///     .base_url(Url::parse("https://cdn.example.com/assets/").unwrap())
///     .user_agent("typeset/0.1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Whole-request timeout.
    ///
    /// Default: None (the transport's own default applies)
    pub timeout: Option<Duration>,

    /// Base against which relative locators are resolved.
    ///
    /// Without a base, relative locators fail at the transport.
    ///
    /// Default: None
    pub base_url: Option<Url>,

    /// Proxies to route through. `https` proxies handle HTTPS traffic,
    /// all others handle plain HTTP.
    ///
    /// Default: empty
    pub proxies: Vec<Url>,

    /// Honour proxies from the environment (`HTTP_PROXY` and friends).
    /// Ignored when explicit [`proxies`](Self::proxies) are set.
    ///
    /// Default: true
    pub system_proxy: bool,

    /// Value of the `User-Agent` header.
    ///
    /// Default: None
    pub user_agent: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout:      None,
            base_url:     None,
            proxies:      Vec::new(),
            system_proxy: true,
            user_agent:   None,
        }
    }
}

impl ClientOptions {
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    #[must_use]
    pub fn proxy(mut self, proxy: Url) -> Self {
        self.proxies.push(proxy);
        self
    }

    #[must_use]
    pub fn no_system_proxy(mut self) -> Self {
        self.system_proxy = false;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Split the configured proxies into `(secure, insecure)` by scheme.
    pub fn partition_proxies(&self) -> (Vec<&Url>, Vec<&Url>) {
        self.proxies.iter().partition(|u| u.scheme() == "https")
    }

    /// Resolve a locator against [`base_url`](Self::base_url).
    ///
    /// Absolute locators are returned as-is; relative ones need a base.
    pub fn resolve(&self, locator: &str) -> Result<Url, url::ParseError> {
        match Url::parse(locator) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => base.join(locator),
                None => Err(url::ParseError::RelativeUrlWithoutBase),
            },
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_overrides() {
        let options = ClientOptions::default();
        assert_eq!(options.timeout, None);
        assert_eq!(options.base_url, None);
        assert!(options.proxies.is_empty());
        assert!(options.system_proxy);
        assert_eq!(options.user_agent, None);
    }

    #[test]
    fn resolve_absolute_ignores_base() {
        let options = ClientOptions::default()
            .base_url(Url::parse("https://cdn.example.com/assets/").unwrap());
        let url = options.resolve("http://other.example.com/a.json").unwrap();
        assert_eq!(url.as_str(), "http://other.example.com/a.json");
    }

    #[test]
    fn resolve_relative_against_base() {
        let options = ClientOptions::default()
            .base_url(Url::parse("https://cdn.example.com/assets/").unwrap());
        let url = options.resolve("fonts/roboto.json").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/assets/fonts/roboto.json");

        let url = options.resolve("/root.json").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/root.json");
    }

    #[test]
    fn resolve_relative_without_base_fails() {
        let err = ClientOptions::default().resolve("fonts/roboto.json").unwrap_err();
        assert_eq!(err, url::ParseError::RelativeUrlWithoutBase);
    }

    #[test]
    fn proxies_partition_by_scheme() {
        let options = ClientOptions::default()
            .proxy(Url::parse("https://secure.proxy:443").unwrap())
            .proxy(Url::parse("http://plain.proxy:8080").unwrap())
            .proxy(Url::parse("socks5://socks.proxy:1080").unwrap());
        let (secure, insecure) = options.partition_proxies();
        assert_eq!(secure.len(), 1);
        assert_eq!(insecure.len(), 2);
        assert_eq!(secure[0].host_str(), Some("secure.proxy"));
    }
}
