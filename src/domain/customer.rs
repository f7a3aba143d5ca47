use serde::{Deserialize, Serialize};

/// A single row of the customer directory.
///
/// Serialized field names are camelCase so rows can be handed to the grid
/// widget verbatim.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
}

impl NewCustomer {
    #[must_use]
    pub fn new(name: String, phone: String, address: String, postal_code: String) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            address: address.trim().to_string(),
            postal_code: postal_code.trim().to_string(),
        }
    }
}
