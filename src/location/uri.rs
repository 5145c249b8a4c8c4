//! Percent-encoding and Unicode normalization for track locations

use unicode_normalization::UnicodeNormalization;

const FILE_SCHEME: &str = "file://";

/// Drop a leading `file://` scheme, and a `localhost` host if present
///
/// Values without the scheme are returned unchanged.
pub fn strip_scheme(location: &str) -> &str {
    match location.strip_prefix(FILE_SCHEME) {
        Some(rest) => match rest.strip_prefix("localhost") {
            Some(path) if path.starts_with('/') => path,
            _ => rest,
        },
        None => location,
    }
}

/// Decode `%XX` escapes
///
/// Malformed escapes are kept literally and invalid UTF-8 is replaced, so
/// this never fails.
pub fn percent_decode(value: &str) -> String {
    let bytes = urlencoding::decode_binary(value.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Percent-encode a path, keeping `/` separators intact
///
/// Unreserved characters (`A-Z a-z 0-9 - _ . ~`) pass through, everything
/// else is encoded as UTF-8 `%XX` with uppercase hex.
pub fn percent_encode_path(path: &str) -> String {
    path.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

/// Canonical composition (NFC), so combining sequences collapse to their
/// precomposed form
pub fn normalize(value: &str) -> String {
    value.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("file:///Users/a/b.mp3"), "/Users/a/b.mp3");
        assert_eq!(
            strip_scheme("file://localhost/C:/Users/a/b.mp3"),
            "/C:/Users/a/b.mp3"
        );
        assert_eq!(strip_scheme("/foo/bar.mp3"), "/foo/bar.mp3");
    }

    #[test]
    fn test_decode() {
        assert_eq!(percent_decode("01%20Track.m4a"), "01 Track.m4a");
        assert_eq!(percent_decode("Beyonc%C3%A9"), "Beyoncé");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("50%zz"), "50%zz");
    }

    #[test]
    fn test_encode_keeps_separators() {
        assert_eq!(
            percent_encode_path("/foo/bar/Jimmy Buffett/01 Track.m4a"),
            "/foo/bar/Jimmy%20Buffett/01%20Track.m4a"
        );
        assert_eq!(percent_encode_path("/a/Beyoncé & co"), "/a/Beyonc%C3%A9%20%26%20co");
        assert_eq!(percent_encode_path("/a-b_c.d~e/"), "/a-b_c.d~e/");
    }

    #[test]
    fn test_encode_decode_idempotent_on_safe_paths() {
        for path in [
            "/foo/bar/baz.mp3",
            "/foo/bar/Artist/Album/01%20Track.m4a",
            "/music/A%26B/%C3%A9t%C3%A9.flac",
        ] {
            assert_eq!(percent_encode_path(&percent_decode(path)), path);
        }
    }

    #[test]
    fn test_normalize_composes() {
        // "e" followed by COMBINING ACUTE ACCENT
        let decomposed = "Beyonce\u{0301}";
        assert_eq!(normalize(decomposed), "Beyonc\u{00e9}");
        assert_eq!(normalize("plain"), "plain");
    }
}
