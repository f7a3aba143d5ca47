use diesel::prelude::*;

use crate::domain::customer::{Customer, NewCustomer};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CustomerListQuery, CustomerReader, CustomerWriter, DieselRepository, SortDirection, SortField,
};

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let customer = customers::table
            .find(id)
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }

    fn count_customers(&self) -> RepositoryResult<usize> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let total: i64 = customers::table.count().get_result(&mut conn)?;

        Ok(total as usize)
    }

    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.conn()?;

        // SQLite LIKE is case-insensitive for ASCII.
        let pattern = query.search.as_ref().map(|term| format!("%{term}%"));

        let total: i64 = match &pattern {
            Some(pattern) => customers::table
                .filter(
                    customers::name
                        .like(pattern.clone())
                        .or(customers::phone.like(pattern.clone()))
                        .or(customers::address.like(pattern.clone()))
                        .or(customers::postal_code.like(pattern.clone())),
                )
                .count()
                .get_result(&mut conn)?,
            None => customers::table.count().get_result(&mut conn)?,
        };

        let mut items_query = customers::table.into_boxed();
        if let Some(pattern) = &pattern {
            items_query = items_query.filter(
                customers::name
                    .like(pattern.clone())
                    .or(customers::phone.like(pattern.clone()))
                    .or(customers::address.like(pattern.clone()))
                    .or(customers::postal_code.like(pattern.clone())),
            );
        }

        // Every non-id ordering carries an id tie-break so repeated queries
        // return rows in the same order.
        items_query = match (query.sort, query.direction) {
            (SortField::Id, SortDirection::Asc) => items_query.order(customers::id.asc()),
            (SortField::Id, SortDirection::Desc) => items_query.order(customers::id.desc()),
            (SortField::Name, SortDirection::Asc) => items_query
                .order(customers::name.asc())
                .then_order_by(customers::id.asc()),
            (SortField::Name, SortDirection::Desc) => items_query
                .order(customers::name.desc())
                .then_order_by(customers::id.asc()),
            (SortField::Phone, SortDirection::Asc) => items_query
                .order(customers::phone.asc())
                .then_order_by(customers::id.asc()),
            (SortField::Phone, SortDirection::Desc) => items_query
                .order(customers::phone.desc())
                .then_order_by(customers::id.asc()),
            (SortField::Address, SortDirection::Asc) => items_query
                .order(customers::address.asc())
                .then_order_by(customers::id.asc()),
            (SortField::Address, SortDirection::Desc) => items_query
                .order(customers::address.desc())
                .then_order_by(customers::id.asc()),
            (SortField::PostalCode, SortDirection::Asc) => items_query
                .order(customers::postal_code.asc())
                .then_order_by(customers::id.asc()),
            (SortField::PostalCode, SortDirection::Desc) => items_query
                .order(customers::postal_code.desc())
                .then_order_by(customers::id.asc()),
        };

        if let Some(window) = query.window {
            items_query = items_query.limit(window.limit).offset(window.offset);
        }

        let items = items_query
            .load::<DbCustomer>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Customer>>();

        Ok((total as usize, items))
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customers(&self, new_customers: &[NewCustomer]) -> RepositoryResult<usize> {
        use crate::models::customer::NewCustomer as DbNewCustomer;
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewCustomer> = new_customers.iter().map(Into::into).collect();
        let affected = diesel::insert_into(customers::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let affected = diesel::delete(customers::table.find(customer_id)).execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
