//! Query Construction Module
//!
//! Builds request URLs in the remote catalog API's filter/sort grammar.
//! The query strings must be reproduced exactly: the bracketed term and
//! sort keys stay literal while user-supplied values are percent-encoded.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// == Field Lists ==
/// Fields requested for result lists.
pub const SUMMARY_FIELDS: &str =
    "id,title,artist_display,date_display,medium_display,image_id,is_public_domain,genre_titles,thumbnail";

/// Extended field list for single-record detail fetches.
pub const DETAIL_FIELDS: &str =
    "id,title,artist_display,date_display,medium_display,image_id,is_public_domain,genre_titles,thumbnail,\
description,provenance_text,dimensions,credit_line,gallery_title,department_title,classification_title,\
place_of_origin,style_title,colorfulness,has_educational_resources,artist_id,artist_title";

/// Fields requested for agent (artist) lookups.
pub const AGENT_FIELDS: &str = "id,title,birth_date,death_date,description";

/// Default IIIF render width in pixels.
pub const DEFAULT_IMAGE_WIDTH: u32 = 843;

// Characters escaped the way encodeURIComponent does: everything except
// alphanumerics and - _ . ! ~ * ' ( )
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// == Sort Option ==
/// Result ordering. Unset means relevance (the API's default ordering).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Ascending sort on the keyword-normalized title field
    Title,
    /// Ascending sort on the earliest date field
    Date,
}

// == Search Parameters ==
/// UI-level search parameters translated into the remote query grammar.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Free-text query
    pub query: Option<String>,
    /// Exact-match department filter
    pub department: Option<String>,
    /// Exact-match classification filter
    pub classification: Option<String>,
    /// At most one sort clause may be active
    pub sort_by: Option<SortBy>,
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub limit: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: None,
            department: None,
            classification: None,
            sort_by: None,
            page: 1,
            limit: 24,
        }
    }
}

// == URL Builders ==

/// Percent-encodes a single query-string value.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Builds the search URL for the given parameters.
///
/// Every search carries the requested-fields list, pagination, and the
/// hard public-domain term filter regardless of any other filters.
pub fn search_url(api_base: &str, params: &SearchParams) -> String {
    let mut parts = vec![
        format!("fields={SUMMARY_FIELDS}"),
        format!("limit={}", params.limit),
        format!("page={}", params.page),
        "query[term][is_public_domain]=true".to_string(),
    ];

    if let Some(query) = params.query.as_deref().filter(|q| !q.is_empty()) {
        parts.push(format!("q={}", encode_component(query)));
    }
    if let Some(department) = params.department.as_deref().filter(|d| !d.is_empty()) {
        parts.push(format!(
            "query[term][department_title]={}",
            encode_component(department)
        ));
    }
    if let Some(classification) = params.classification.as_deref().filter(|c| !c.is_empty()) {
        parts.push(format!(
            "query[term][classification_title]={}",
            encode_component(classification)
        ));
    }
    match params.sort_by {
        Some(SortBy::Title) => parts.push("sort[title.keyword][order]=asc".to_string()),
        Some(SortBy::Date) => parts.push("sort[date_start][order]=asc".to_string()),
        None => {}
    }

    format!("{api_base}/artworks/search?{}", parts.join("&"))
}

/// Builds the batch-by-ids URL. Matches are returned unordered.
pub fn batch_url(api_base: &str, ids: &[i64]) -> String {
    let joined = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("{api_base}/artworks?ids={joined}&fields={SUMMARY_FIELDS}")
}

/// Builds the single-record detail URL with the extended field list.
pub fn detail_url(api_base: &str, id: i64) -> String {
    format!("{api_base}/artworks/{id}?fields={DETAIL_FIELDS}")
}

/// Builds the agent (artist) lookup URL.
pub fn agent_url(api_base: &str, id: i64) -> String {
    format!("{api_base}/agents/{id}?fields={AGENT_FIELDS}")
}

/// Builds the works-by-artist search URL.
pub fn artist_works_url(api_base: &str, artist_id: i64) -> String {
    format!(
        "{api_base}/artworks/search?query[term][artist_id]={artist_id}&fields={SUMMARY_FIELDS}&limit=24&query[term][is_public_domain]=true"
    )
}

/// Builds an IIIF image URL at the requested render width.
pub fn iiif_url(iiif_base: &str, image_id: &str, width: Option<u32>) -> String {
    let width = width.unwrap_or(DEFAULT_IMAGE_WIDTH);
    format!("{iiif_base}/{image_id}/full/{width},/0/default.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.artic.edu/api/v1";

    #[test]
    fn test_search_url_defaults() {
        let url = search_url(BASE, &SearchParams::default());
        assert_eq!(
            url,
            format!(
                "{BASE}/artworks/search?fields={SUMMARY_FIELDS}&limit=24&page=1&query[term][is_public_domain]=true"
            )
        );
    }

    #[test]
    fn test_search_url_always_contains_public_domain_term() {
        let params = SearchParams {
            query: Some("monet".to_string()),
            sort_by: Some(SortBy::Title),
            ..Default::default()
        };
        let url = search_url(BASE, &params);
        assert!(url.contains("query[term][is_public_domain]=true"));
    }

    #[test]
    fn test_search_url_encodes_free_text_query() {
        let params = SearchParams {
            query: Some("water lilies & ponds".to_string()),
            ..Default::default()
        };
        let url = search_url(BASE, &params);
        assert!(url.contains("q=water%20lilies%20%26%20ponds"));
    }

    #[test]
    fn test_search_url_encodes_department() {
        let params = SearchParams {
            department: Some("Asian Art".to_string()),
            ..Default::default()
        };
        let url = search_url(BASE, &params);
        assert!(url.contains("query[term][department_title]=Asian%20Art"));
    }

    #[test]
    fn test_search_url_encodes_classification() {
        let params = SearchParams {
            classification: Some("oil on canvas".to_string()),
            ..Default::default()
        };
        let url = search_url(BASE, &params);
        assert!(url.contains("query[term][classification_title]=oil%20on%20canvas"));
    }

    #[test]
    fn test_search_url_sort_by_title() {
        let params = SearchParams {
            sort_by: Some(SortBy::Title),
            ..Default::default()
        };
        let url = search_url(BASE, &params);
        assert!(url.ends_with("&sort[title.keyword][order]=asc"));
        assert!(!url.contains("sort[date_start]"));
    }

    #[test]
    fn test_search_url_sort_by_date() {
        let params = SearchParams {
            sort_by: Some(SortBy::Date),
            ..Default::default()
        };
        let url = search_url(BASE, &params);
        assert!(url.ends_with("&sort[date_start][order]=asc"));
        assert!(!url.contains("sort[title.keyword]"));
    }

    #[test]
    fn test_search_url_pagination() {
        let params = SearchParams {
            page: 3,
            limit: 12,
            ..Default::default()
        };
        let url = search_url(BASE, &params);
        assert!(url.contains("limit=12&page=3"));
    }

    #[test]
    fn test_search_url_empty_strings_are_omitted() {
        let params = SearchParams {
            query: Some(String::new()),
            department: Some(String::new()),
            ..Default::default()
        };
        let url = search_url(BASE, &params);
        assert!(!url.contains("q="));
        assert!(!url.contains("department_title"));
    }

    #[test]
    fn test_batch_url() {
        let url = batch_url(BASE, &[27992, 28560, 14598]);
        assert_eq!(
            url,
            format!("{BASE}/artworks?ids=27992,28560,14598&fields={SUMMARY_FIELDS}")
        );
    }

    #[test]
    fn test_detail_url() {
        let url = detail_url(BASE, 129884);
        assert_eq!(url, format!("{BASE}/artworks/129884?fields={DETAIL_FIELDS}"));
        assert!(url.contains("has_educational_resources"));
    }

    #[test]
    fn test_agent_url() {
        let url = agent_url(BASE, 40482);
        assert_eq!(
            url,
            format!("{BASE}/agents/40482?fields=id,title,birth_date,death_date,description")
        );
    }

    #[test]
    fn test_artist_works_url() {
        let url = artist_works_url(BASE, 40482);
        assert_eq!(
            url,
            format!(
                "{BASE}/artworks/search?query[term][artist_id]=40482&fields={SUMMARY_FIELDS}&limit=24&query[term][is_public_domain]=true"
            )
        );
    }

    #[test]
    fn test_iiif_url_default_width() {
        let url = iiif_url("https://www.artic.edu/iiif/2", "abc-123", None);
        assert_eq!(
            url,
            "https://www.artic.edu/iiif/2/abc-123/full/843,/0/default.jpg"
        );
    }

    #[test]
    fn test_iiif_url_explicit_width() {
        let url = iiif_url("https://www.artic.edu/iiif/2", "abc-123", Some(400));
        assert_eq!(
            url,
            "https://www.artic.edu/iiif/2/abc-123/full/400,/0/default.jpg"
        );
    }

    #[test]
    fn test_encode_component_matches_encode_uri_component() {
        // encodeURIComponent leaves - _ . ! ~ * ' ( ) unescaped
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_component("a b/c?d=e&f"), "a%20b%2Fc%3Fd%3De%26f");
    }
}
