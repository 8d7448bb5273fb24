use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::signing::params::ParameterSet;
use crate::signing::signer::SIGNATURE;

/// RFC 3986 unreserved characters stay as-is: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_' and '~'.
static POP_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode `input` the way the POP protocol expects.
///
/// After the generic escape, `+` becomes `%20`, `*` becomes `%2A` and `%7E`
/// becomes `~`. The result never contains a literal `+`, `*` or `%7E`.
pub fn special_url_encode(input: &str) -> String {
    utf8_percent_encode(input, &POP_ENCODE_SET)
        .to_string()
        .replace('+', "%20")
        .replace('*', "%2A")
        .replace("%7E", "~")
}

/// Build the canonical query string of `params`.
///
/// Keys and values are encoded with [`special_url_encode`], sorted by the
/// encoded key and joined as `k=v&k=v`. A `Signature` entry, if present, is
/// left out.
pub fn canonical_query_string(params: &ParameterSet) -> String {
    let mut pairs = params
        .iter()
        .filter(|(k, _)| *k != SIGNATURE)
        .map(|(k, v)| (special_url_encode(k), special_url_encode(v)))
        .collect::<Vec<_>>();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    pairs
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_url_encode_applies_pop_corrections() {
        assert_eq!(special_url_encode("a b*c+d~e/f"), "a%20b%2Ac%2Bd~e%2Ff");
        assert_eq!(special_url_encode("/"), "%2F");
        assert_eq!(special_url_encode("{}"), "%7B%7D");
        assert_eq!(
            special_url_encode("2017-01-01T00:00:00Z"),
            "2017-01-01T00%3A00%3A00Z"
        );
    }

    #[test]
    fn special_url_encode_encodes_utf8_bytes() {
        assert_eq!(special_url_encode("阿里"), "%E9%98%BF%E9%87%8C");
    }

    #[test]
    fn special_url_encode_never_leaves_forbidden_sequences() {
        let inputs = ["+*~", "%7E", "a+b", "**", "~~~", " + * ~ ", "100%", "x=y&z"];
        for input in inputs {
            let encoded = special_url_encode(input);
            assert!(!encoded.contains('+'), "{input:?} -> {encoded}");
            assert!(!encoded.contains('*'), "{input:?} -> {encoded}");
            assert!(!encoded.contains("%7E"), "{input:?} -> {encoded}");
        }
    }

    #[test]
    fn canonical_query_is_sorted_by_encoded_key() {
        let params: ParameterSet = [
            ("Version", "2017-05-25"),
            ("Action", "SendSms"),
            ("SignName", "a b"),
            ("AccessKeyId", "id1"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            canonical_query_string(&params),
            "AccessKeyId=id1&Action=SendSms&SignName=a%20b&Version=2017-05-25"
        );
    }

    #[test]
    fn canonical_query_does_not_depend_on_insertion_order() {
        let forward: ParameterSet = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        let backward: ParameterSet = [("c", "3"), ("a", "1"), ("b", "2")].into_iter().collect();

        assert_eq!(
            canonical_query_string(&forward),
            canonical_query_string(&backward)
        );
    }

    #[test]
    fn canonical_query_orders_by_encoded_rather_than_raw_key() {
        // Raw "a0" < "a:", but ':' encodes to "%3A" and '%' sorts before '0'.
        let params: ParameterSet = [("a0", "1"), ("a:", "2"), ("aZ", "3")].into_iter().collect();

        assert_eq!(canonical_query_string(&params), "a%3A=2&a0=1&aZ=3");
    }

    #[test]
    fn canonical_query_pairs_are_strictly_ascending() {
        let params: ParameterSet = [
            ("TemplateParam", "{}"),
            ("PhoneNumbers", "1,2"),
            ("Timestamp", "t"),
            ("Format", "JSON"),
            ("SignatureNonce", "n"),
        ]
        .into_iter()
        .collect();

        let query = canonical_query_string(&params);
        let keys = query
            .split('&')
            .map(|pair| pair.split_once('=').map(|(k, _)| k).unwrap_or(pair))
            .collect::<Vec<_>>();
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "{keys:?}");
    }

    #[test]
    fn canonical_query_excludes_signature() {
        let mut params: ParameterSet = [("Action", "SendSms")].into_iter().collect();
        let before = canonical_query_string(&params);
        params.set(SIGNATURE, "abc%3D");

        assert_eq!(canonical_query_string(&params), before);
    }

    #[test]
    fn canonical_query_of_empty_set_is_empty() {
        assert_eq!(canonical_query_string(&ParameterSet::new()), "");
    }
}
