use diesel::prelude::*;

use crate::domain::customer::{Customer as DomainCustomer, NewCustomer as DomainNewCustomer};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::customers)]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub postal_code: &'a str,
}

impl From<Customer> for DomainCustomer {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            phone: customer.phone,
            address: customer.address,
            postal_code: customer.postal_code,
        }
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainNewCustomer) -> Self {
        Self {
            name: customer.name.as_str(),
            phone: customer.phone.as_str(),
            address: customer.address.as_str(),
            postal_code: customer.postal_code.as_str(),
        }
    }
}
