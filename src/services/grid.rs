//! The grid query adapter: translates a widget request into repository calls
//! and assembles the response envelope.

use crate::domain::customer::Customer;
use crate::dto::grid::{GridRequest, GridResponse};
use crate::repository::{CustomerListQuery, CustomerReader, SortDirection, SortField};
use crate::services::{ServiceError, ServiceResult};

/// Runs one grid refresh: count all, filter, count filtered, order, window,
/// materialize.
///
/// The request is validated up front; no store call happens once validation
/// fails. With no sort directive the list is ordered by `id` ascending so the
/// response stays deterministic.
pub fn query_customers<R>(repo: &R, request: &GridRequest) -> ServiceResult<GridResponse<Customer>>
where
    R: CustomerReader + ?Sized,
{
    let (sort, direction) = resolve_sort(request)?;

    let offset = request.start.max(0);
    let limit = request.length.max(0);

    let records_total = repo.count_customers()?;

    let mut query = CustomerListQuery::new()
        .order_by(sort, direction)
        .window(offset, limit);
    if let Some(term) = request.search_term() {
        query = query.search(term);
    }

    let (records_filtered, data) = repo.list_customers(query)?;

    Ok(GridResponse {
        draw: request.draw,
        records_total,
        records_filtered,
        data,
    })
}

/// Resolves the requested ordering against the sortable-column allow-list.
///
/// The first `order` entry wins; its column index must be in range and the
/// named column must be allow-listed. Without `order` entries, the first
/// column carrying an embedded directive is used. An unrecognized column is
/// an error, never a silent no-sort.
fn resolve_sort(request: &GridRequest) -> ServiceResult<(SortField, SortDirection)> {
    if let Some(order) = request.order.first() {
        let column = request.columns.get(order.column).ok_or_else(|| {
            ServiceError::Validation(format!(
                "sort column index {} is out of range",
                order.column
            ))
        })?;
        let field = resolve_column(&column.name)?;
        return Ok((field, order.dir));
    }

    if let Some(column) = request.columns.iter().find(|c| c.sort.is_some()) {
        let field = resolve_column(&column.name)?;
        let direction = column
            .sort
            .as_ref()
            .map(|s| s.direction)
            .unwrap_or(SortDirection::Asc);
        return Ok((field, direction));
    }

    Ok((SortField::Id, SortDirection::Asc))
}

fn resolve_column(name: &str) -> ServiceResult<SortField> {
    SortField::from_column(name)
        .ok_or_else(|| ServiceError::Validation(format!("unknown sort column: {name}")))
}
