use reqwest::Url;
use tracing::warn;

/// Logged before credentials or tokens travel over an unencrypted scheme.
pub(crate) const INSECURE_TRANSPORT_WARNING: &str =
    "credentials are transmitted via an insecure connection - use HTTPS to keep them secure";

/// Whether a URL uses a scheme that encrypts traffic.
/// Relative and unparseable URLs count as insecure.
pub(crate) fn is_secure_url(url: &str) -> bool {
    Url::parse(url)
        .map(|url| url.scheme() == "https")
        .unwrap_or(false)
}

pub(crate) fn warn_if_insecure(url: &str) {
    if !is_secure_url(url) {
        warn!("{}", INSECURE_TRANSPORT_WARNING);
    }
}
