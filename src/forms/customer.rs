use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::NewCustomer;

#[derive(Deserialize, Validate)]
/// Form data for adding a new customer.
pub struct AddCustomerForm {
    #[validate(length(min = 1))]
    pub name: String,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
}

impl From<&AddCustomerForm> for NewCustomer {
    fn from(form: &AddCustomerForm) -> Self {
        NewCustomer::new(
            form.name.clone(),
            form.phone.clone(),
            form.address.clone(),
            form.postal_code.clone(),
        )
    }
}
