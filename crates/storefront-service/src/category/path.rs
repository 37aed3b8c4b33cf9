//! Conversion between slug chains and nested path strings.
//!
//! A nested path is the `/`-joined chain of ancestor slugs carried in the
//! storefront's catch-all route segment, e.g. `electronics/phones`.
//! Empty segments carry no meaning and are dropped on the way in.

/// Path separator between slugs.
pub const SEPARATOR: char = '/';

/// Join slugs into a nested path, skipping empty ones.
pub fn encode<S: AsRef<str>>(slugs: &[S]) -> String {
    let mut out = String::new();
    for slug in slugs.iter().map(AsRef::as_ref).filter(|s| !s.is_empty()) {
        if !out.is_empty() {
            out.push(SEPARATOR);
        }
        out.push_str(slug);
    }
    out
}

/// Split a nested path into its slugs, dropping empty segments.
pub fn decode(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty()).collect()
}

/// Canonical form of a path: no leading, trailing or doubled separators.
pub fn normalize(path: &str) -> String {
    encode(decode(path).as_slice())
}

/// Append one slug to an existing path.
pub fn join(parent: &str, slug: &str) -> String {
    encode(&[parent, slug])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode(&["electronics", "phones", "smartphones"]), "electronics/phones/smartphones");
        assert_eq!(encode::<&str>(&[]), "");
        assert_eq!(encode(&["", "phones", ""]), "phones");
    }

    #[test]
    fn test_decode_tolerates_degenerate_slashes() {
        assert_eq!(decode("/electronics//phones/"), vec!["electronics", "phones"]);
        assert!(decode("").is_empty());
        assert!(decode("///").is_empty());
    }

    #[test]
    fn test_round_trip() {
        let cases: [&[&str]; 4] = [
            &[],
            &["electronics"],
            &["electronics", "phones"],
            &["a", "b-c", "d_e", "f.g"],
        ];
        for slugs in cases {
            assert_eq!(decode(&encode(slugs)), slugs.to_vec());
        }
    }

    #[test]
    fn test_normalize_and_join() {
        assert_eq!(normalize("//electronics/phones//"), "electronics/phones");
        assert_eq!(join("", "electronics"), "electronics");
        assert_eq!(join("electronics", "phones"), "electronics/phones");
    }
}
