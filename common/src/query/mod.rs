//! Query-string state of the jobs list.
//!
//! The list page keeps no state of its own: the page number comes from the
//! URL and the filters come from the filter form every time a fetch is
//! triggered. These helpers turn both into the URL of the next request.

/// Page number from a URL query string such as `?page=3&foo=bar`.
///
/// Parsing is lenient in the way `parseInt` is: leading digits are used and
/// anything after them is ignored. A missing, non-numeric or zero value
/// yields page 1.
pub fn page_from_query(query: &str) -> u32 {
    query_param(query, "page")
        .and_then(|raw| leading_number(&raw))
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

/// First value of `name` in `query`, form-decoded.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| form_decode(key) == name)
        .map(|(_, value)| form_decode(value))
}

fn leading_number(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn form_decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Encodes a form component the way browsers serialize forms:
/// `encodeURIComponent` followed by `%20` → `+`.
fn form_encode(raw: &str) -> String {
    urlencoding::encode(raw)
        .replace("%20", "+")
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Serializes form fields in document order as `name=value&name=value`.
///
/// Fields without a name or without a value are left out, as an unselected
/// option of a multi-select is.
pub fn serialize_fields<N, V>(fields: &[(N, V)]) -> String
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    fields
        .iter()
        .filter(|(name, value)| !name.as_ref().is_empty() && !value.as_ref().is_empty())
        .map(|(name, value)| format!("{}={}", form_encode(name.as_ref()), form_encode(value.as_ref())))
        .collect::<Vec<_>>()
        .join("&")
}

/// URL of the jobs request for `page` under the given filters.
pub fn list_url<N, V>(action: &str, fields: &[(N, V)], page: u32) -> String
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    let serialized = serialize_fields(fields);
    if serialized.is_empty() {
        format!("{}?page={}", action, page)
    } else {
        format!("{}?{}&page={}", action, serialized, page)
    }
}

/// Job id when `path` is a detail page (`/jobs/{job_id}`): the final
/// non-empty path segment, provided it follows a `jobs` segment.
pub fn detail_job_id(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [.., "jobs", job_id] => Some(*job_id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(page_from_query(""), 1);
        assert_eq!(page_from_query("?"), 1);
        assert_eq!(page_from_query("?job_type=ingest"), 1);
        assert_eq!(page_from_query("?page="), 1);
        assert_eq!(page_from_query("?page=abc"), 1);
        assert_eq!(page_from_query("?page=0"), 1);
        assert_eq!(page_from_query("?page=-2"), 1);
    }

    #[test]
    fn page_is_read_like_parse_int() {
        assert_eq!(page_from_query("?page=3"), 3);
        assert_eq!(page_from_query("outcome=error&page=12"), 12);
        assert_eq!(page_from_query("?page=7abc"), 7);
        assert_eq!(page_from_query("?page=4&page=9"), 4);
    }

    #[test]
    fn fields_serialize_like_a_browser_form() {
        let fields = [
            ("job_type", "ingest feed"),
            ("outcome", "error"),
            ("outcome", "more-work"),
            ("notes", ""),
            ("", "orphan"),
            ("q", "a&b=c"),
        ];
        assert_eq!(
            serialize_fields(&fields),
            "job_type=ingest+feed&outcome=error&outcome=more-work&q=a%26b%3Dc"
        );
    }

    #[test]
    fn list_url_appends_page_after_filters() {
        let none: [(&str, &str); 0] = [];
        assert_eq!(list_url("/api/jobs", &none, 1), "/api/jobs?page=1");
        assert_eq!(
            list_url("/api/jobs", &[("outcome", "error")], 2),
            "/api/jobs?outcome=error&page=2"
        );
    }

    #[test]
    fn query_params_are_form_decoded() {
        assert_eq!(
            query_param("?job_type=ingest+feed%21", "job_type").as_deref(),
            Some("ingest feed!")
        );
        assert_eq!(query_param("?flag", "flag").as_deref(), Some(""));
        assert_eq!(query_param("?a=1", "b"), None);
    }

    #[test]
    fn detail_paths() {
        assert_eq!(detail_job_id("/jobs/abc"), Some("abc"));
        assert_eq!(detail_job_id("/jobs/abc?x=1#top"), Some("abc"));
        assert_eq!(detail_job_id("/gui/jobs/abc/"), Some("abc"));
        assert_eq!(detail_job_id("/jobs"), None);
        assert_eq!(detail_job_id("/jobs/"), None);
        assert_eq!(detail_job_id("/"), None);
    }
}
