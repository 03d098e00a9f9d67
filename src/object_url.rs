use url::{Position, Url};

/// Builds the path-style URL (`scheme://host[/prefix]/bucket/key`) under which
/// an uploaded object is served.
///
/// Any path on the endpoint is kept as a prefix, so stores mounted under a
/// sub-path work. Query and fragment are dropped. The key is inserted as-is:
/// callers must percent-encode it themselves if it contains reserved
/// characters.
pub fn build_object_url(endpoint: &str, bucket: &str, key: &str) -> Result<String, url::ParseError> {
    let parsed = Url::parse(endpoint)?;

    // scheme://userinfo@host:port
    let mut base = parsed[..Position::BeforePath].to_owned();

    let path = parsed.path();
    if !path.is_empty() && path != "/" {
        base.push_str(path);
    }

    Ok(format!("{}/{bucket}/{key}", base.trim_end_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::build_object_url;

    #[test]
    fn plain_endpoint() {
        assert_eq!(
            build_object_url("https://store.example", "mybucket", "a.png").unwrap(),
            "https://store.example/mybucket/a.png"
        );
    }

    #[test]
    fn endpoint_with_sub_path() {
        assert_eq!(
            build_object_url("https://store.example/sub", "b", "k.jpg").unwrap(),
            "https://store.example/sub/b/k.jpg"
        );
        assert_eq!(
            build_object_url("https://store.example/s3/v1/", "b", "k.jpg").unwrap(),
            "https://store.example/s3/v1/b/k.jpg"
        );
    }

    #[test]
    fn trailing_slash_does_not_double() {
        assert_eq!(
            build_object_url("https://store.example/", "b", "k.jpg").unwrap(),
            "https://store.example/b/k.jpg"
        );
    }

    #[test]
    fn port_and_credentials_are_kept() {
        assert_eq!(
            build_object_url("http://user@localhost:9000", "b", "k.png").unwrap(),
            "http://user@localhost:9000/b/k.png"
        );
    }

    #[test]
    fn query_and_fragment_are_dropped() {
        assert_eq!(
            build_object_url("https://store.example/sub?region=x#frag", "b", "k.gif").unwrap(),
            "https://store.example/sub/b/k.gif"
        );
    }

    #[test]
    fn key_is_not_encoded() {
        assert_eq!(
            build_object_url("https://store.example", "b", "my photo.png").unwrap(),
            "https://store.example/b/my photo.png"
        );
    }

    #[test]
    fn relative_endpoint_is_an_error() {
        assert!(build_object_url("store.example", "b", "k.png").is_err());
    }
}
