//! Keeps the storefront search box and the `q` URL parameter in sync.

pub use reqwest::Url;

/// Query parameter carrying the search text
pub const QUERY_PARAM: &str = "q";

/// Trim and collapse internal whitespace; `None` for blank input
pub fn normalize_query(raw: &str) -> Option<String> {
    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Read `q` from a full URL, a path with a query, or a bare `?q=...`
pub fn query_from_url(url: &str) -> Option<String> {
    let query = match url.split_once('?') {
        Some((_, query)) => query,
        None => return None,
    };
    let query = query.split('#').next().unwrap_or_default();

    // Parsing against a dummy base reuses the form-urlencoded decoder.
    let parsed = Url::parse(&format!("http://localhost/?{}", query)).ok()?;
    let value = parsed
        .query_pairs()
        .find(|(key, _)| *key == QUERY_PARAM)
        .map(|(_, value)| value.into_owned())?;
    normalize_query(&value)
}

/// Set or remove `q`, leaving the other parameters in place
pub fn url_with_query(url: &Url, query: Option<&str>) -> Url {
    let others: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| *key != QUERY_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let query = query.and_then(normalize_query);

    let mut next = url.clone();
    if others.is_empty() && query.is_none() {
        next.set_query(None);
        return next;
    }

    {
        let mut pairs = next.query_pairs_mut();
        pairs.clear();
        for (key, value) in &others {
            pairs.append_pair(key, value);
        }
        if let Some(query) = &query {
            pairs.append_pair(QUERY_PARAM, query);
        }
    }
    next
}

/// Case-insensitive match of every query word against `text`
pub fn matches(query: Option<&str>, text: &str) -> bool {
    let Some(query) = query.and_then(normalize_query) else {
        return true;
    };
    let haystack = text.to_lowercase();
    query
        .to_lowercase()
        .split(' ')
        .all(|word| haystack.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_query("  red   shoes "), Some("red shoes".to_string()));
        assert_eq!(normalize_query(" \t\n"), None);
        assert_eq!(normalize_query(""), None);
    }

    #[test]
    fn test_query_from_url() {
        assert_eq!(query_from_url("/?q=red+shoes"), Some("red shoes".to_string()));
        assert_eq!(
            query_from_url("https://shop.example/search?page=2&q=caf%C3%A9#top"),
            Some("café".to_string())
        );
        assert_eq!(query_from_url("/?q="), None);
        assert_eq!(query_from_url("/products"), None);
        assert_eq!(query_from_url("/?page=2"), None);
    }

    #[test]
    fn test_url_with_query_sets_and_removes() {
        let url = Url::parse("https://shop.example/?page=2").unwrap();

        let with = url_with_query(&url, Some(" rain  coat "));
        assert_eq!(with.as_str(), "https://shop.example/?page=2&q=rain+coat");
        assert_eq!(query_from_url(with.as_str()), Some("rain coat".to_string()));

        let without = url_with_query(&with, None);
        assert_eq!(without.as_str(), "https://shop.example/?page=2");

        let bare = url_with_query(&Url::parse("https://shop.example/?q=x").unwrap(), Some("  "));
        assert_eq!(bare.as_str(), "https://shop.example/");
    }

    #[test]
    fn test_matches() {
        assert!(matches(None, "Shoes"));
        assert!(matches(Some(""), "Shoes"));
        assert!(matches(Some("SHO"), "Running Shoes"));
        assert!(matches(Some("run shoe"), "Running Shoes"));
        assert!(!matches(Some("hat"), "Running Shoes"));
    }
}
