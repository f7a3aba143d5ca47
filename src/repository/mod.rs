use serde::Deserialize;

use crate::db::DbPool;
use crate::domain::customer::{Customer, NewCustomer};
use crate::repository::errors::RepositoryResult;

pub mod customer;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Direction of an ordering clause, as sent by the grid widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Columns a caller is allowed to sort the customer list by.
///
/// Client-supplied column names resolve through [`SortField::from_column`];
/// anything outside this set is rejected before the query is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Phone,
    Address,
    PostalCode,
}

impl SortField {
    /// Resolves a grid column name against the allow-list.
    ///
    /// Names match the camelCase field names the rows are serialized with.
    pub fn from_column(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "phone" => Some(Self::Phone),
            "address" => Some(Self::Address),
            "postalCode" => Some(Self::PostalCode),
            _ => None,
        }
    }
}

/// Offset/limit window applied after filtering and ordering.
#[derive(Debug, Clone, Copy)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

/// Query over the customer list: optional substring search, ordering and
/// paging window.
///
/// Defaults to no search, `id` ascending, no window.
#[derive(Debug, Clone)]
pub struct CustomerListQuery {
    pub search: Option<String>,
    pub sort: SortField,
    pub direction: SortDirection,
    pub window: Option<PageWindow>,
}

impl CustomerListQuery {
    pub fn new() -> Self {
        Self {
            search: None,
            sort: SortField::Id,
            direction: SortDirection::Asc,
            window: None,
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn order_by(mut self, sort: SortField, direction: SortDirection) -> Self {
        self.sort = sort;
        self.direction = direction;
        self
    }

    pub fn window(mut self, offset: i64, limit: i64) -> Self {
        self.window = Some(PageWindow { offset, limit });
        self
    }
}

impl Default for CustomerListQuery {
    fn default() -> Self {
        Self::new()
    }
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
    /// Number of customers with no filter applied.
    fn count_customers(&self) -> RepositoryResult<usize>;
    /// Returns the filtered total together with the requested page of rows.
    ///
    /// Both are computed against the same filter state, so the total stays
    /// valid even when the window lies past the end of the list.
    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)>;
}

pub trait CustomerWriter {
    fn create_customers(&self, new_customers: &[NewCustomer]) -> RepositoryResult<usize>;
    fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()>;
}

/// Diesel-backed implementation of the repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> Result<crate::db::DbConnection, diesel::r2d2::PoolError> {
        self.pool.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_resolves_allow_listed_columns() {
        assert_eq!(SortField::from_column("id"), Some(SortField::Id));
        assert_eq!(SortField::from_column("name"), Some(SortField::Name));
        assert_eq!(SortField::from_column("phone"), Some(SortField::Phone));
        assert_eq!(SortField::from_column("address"), Some(SortField::Address));
        assert_eq!(
            SortField::from_column("postalCode"),
            Some(SortField::PostalCode)
        );
    }

    #[test]
    fn sort_field_rejects_unknown_columns() {
        assert_eq!(SortField::from_column("postal_code"), None);
        assert_eq!(SortField::from_column("Name"), None);
        assert_eq!(SortField::from_column("DROP TABLE"), None);
        assert_eq!(SortField::from_column(""), None);
    }

    #[test]
    fn list_query_builder_chains() {
        let query = CustomerListQuery::new()
            .search("555")
            .order_by(SortField::Name, SortDirection::Desc)
            .window(10, 20);
        assert_eq!(query.search.as_deref(), Some("555"));
        assert_eq!(query.sort, SortField::Name);
        assert_eq!(query.direction, SortDirection::Desc);
        let window = query.window.unwrap();
        assert_eq!(window.offset, 10);
        assert_eq!(window.limit, 20);
    }
}
