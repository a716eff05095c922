use url::Url;

/// True if `arg` parses as an absolute `http` or `https` URL.
pub fn is_valid_link(arg: &str) -> bool {
    Url::parse(arg)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}
