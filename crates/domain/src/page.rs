//! Pagination envelope returned by list endpoints.

use serde::{Deserialize, Serialize};

/// A server-computed page of records.
///
/// The metadata fields are merged verbatim into the student slice on every
/// list fetch; the client never recomputes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub result: Vec<T>,
    pub total_rows: u64,
    pub total_page: u64,
    pub page: u64,
    pub limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_camel_case_metadata() {
        let json = r#"{
            "result": ["a", "b"],
            "totalRows": 12,
            "totalPage": 2,
            "page": 0,
            "limit": 10
        }"#;

        let page: Paginated<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.result.len(), 2);
        assert_eq!(page.total_rows, 12);
        assert_eq!(page.total_page, 2);
    }
}
