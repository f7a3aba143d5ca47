//! Wire contract of the data grid widget.
//!
//! The widget posts a [`GridRequest`] on every refresh and expects a
//! [`GridResponse`] envelope back; the `draw` token is echoed verbatim so the
//! widget can discard stale in-flight responses.

use serde::{Deserialize, Serialize};

use crate::repository::SortDirection;

/// Paging/sorting/search request issued by the grid widget.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridRequest {
    #[serde(default)]
    pub draw: i64,
    #[serde(default)]
    pub columns: Vec<GridColumn>,
    #[serde(default)]
    pub order: Vec<GridOrder>,
    #[serde(default)]
    pub start: i64,
    #[serde(default)]
    pub length: i64,
    #[serde(default)]
    pub search: GridSearch,
}

/// Column descriptor; `name` must match a serialized row field.
#[derive(Debug, Clone, Deserialize)]
pub struct GridColumn {
    pub name: String,
    /// Per-column sort directive, used when no `order` entry is present.
    #[serde(default)]
    pub sort: Option<GridSort>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GridSort {
    pub direction: SortDirection,
}

/// Ordering directive referencing a column by index.
#[derive(Debug, Clone, Deserialize)]
pub struct GridOrder {
    pub column: usize,
    pub dir: SortDirection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridSearch {
    #[serde(default)]
    pub value: Option<String>,
}

impl GridRequest {
    /// The trimmed search term, or `None` when the filter should be skipped.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .value
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

/// Response envelope consumed by the grid widget.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse<T> {
    pub draw: i64,
    pub records_total: usize,
    pub records_filtered: usize,
    pub data: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::Customer;

    #[test]
    fn deserializes_full_widget_request() {
        let request: GridRequest = serde_json::from_str(
            r#"{
                "draw": 3,
                "columns": [
                    { "name": "name", "sort": { "direction": "asc" } },
                    { "name": "phone", "sort": null }
                ],
                "order": [ { "column": 0, "dir": "desc" } ],
                "start": 20,
                "length": 10,
                "search": { "value": "555" }
            }"#,
        )
        .unwrap();

        assert_eq!(request.draw, 3);
        assert_eq!(request.columns.len(), 2);
        assert_eq!(request.columns[0].name, "name");
        assert_eq!(
            request.columns[0].sort.as_ref().unwrap().direction,
            SortDirection::Asc
        );
        assert!(request.columns[1].sort.is_none());
        assert_eq!(request.order[0].column, 0);
        assert_eq!(request.order[0].dir, SortDirection::Desc);
        assert_eq!(request.start, 20);
        assert_eq!(request.length, 10);
        assert_eq!(request.search_term(), Some("555"));
    }

    #[test]
    fn missing_fields_default() {
        let request: GridRequest = serde_json::from_str(r#"{ "draw": 1 }"#).unwrap();
        assert!(request.columns.is_empty());
        assert!(request.order.is_empty());
        assert_eq!(request.start, 0);
        assert_eq!(request.length, 0);
        assert_eq!(request.search_term(), None);
    }

    #[test]
    fn blank_search_is_no_search() {
        let request: GridRequest =
            serde_json::from_str(r#"{ "draw": 1, "search": { "value": "   " } }"#).unwrap();
        assert_eq!(request.search_term(), None);

        let request: GridRequest =
            serde_json::from_str(r#"{ "draw": 1, "search": { "value": null } }"#).unwrap();
        assert_eq!(request.search_term(), None);
    }

    #[test]
    fn response_serializes_widget_field_names() {
        let response = GridResponse {
            draw: 7,
            records_total: 50,
            records_filtered: 3,
            data: vec![Customer {
                id: 1,
                name: "Alice".to_string(),
                phone: "(030) 555-0101".to_string(),
                address: "12 Main St".to_string(),
                postal_code: "10115".to_string(),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["draw"], 7);
        assert_eq!(json["recordsTotal"], 50);
        assert_eq!(json["recordsFiltered"], 3);
        assert_eq!(json["data"][0]["postalCode"], "10115");
        assert_eq!(json["data"][0]["name"], "Alice");
    }
}
