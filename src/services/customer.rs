use validator::Validate;

use crate::domain::customer::NewCustomer;
use crate::forms::customer::AddCustomerForm;
use crate::repository::CustomerWriter;
use crate::services::{ServiceError, ServiceResult};

/// Validates the add-customer form and persists a new record.
pub fn add_customer<R>(repo: &R, form: AddCustomerForm) -> ServiceResult<()>
where
    R: CustomerWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        return Err(ServiceError::Validation(err.to_string()));
    }

    let new_customer: NewCustomer = (&form).into();

    repo.create_customers(&[new_customer]).map_err(|err| {
        log::error!("Failed to add a customer: {err}");
        ServiceError::from(err)
    })?;

    Ok(())
}

/// Removes a single customer row; a missing row surfaces as `NotFound`.
pub fn delete_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<()>
where
    R: CustomerWriter + ?Sized,
{
    repo.delete_customer(customer_id).map_err(ServiceError::from)
}
