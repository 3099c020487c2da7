use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_email, validate_non_empty_string};
use serde::{Deserialize, Serialize};

/// A registered customer. Only constructible through validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewCustomer", into = "NewCustomer")]
pub struct Customer {
    id: String,
    name: String,
    email: String,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self> {
        let (id, name, email) = (id.into(), name.into(), email.into());

        validate_non_empty_string("id", &id)?;
        validate_non_empty_string("name", &name)?;
        validate_email("email", &email)?;

        Ok(Self { id, name, email })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Unvalidated registration input, as read from config files or callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl NewCustomer {
    pub fn new(id: &str, name: &str, email: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

impl TryFrom<NewCustomer> for Customer {
    type Error = RegistryError;

    fn try_from(value: NewCustomer) -> Result<Self> {
        Customer::new(value.id, value.name, value.email)
    }
}

impl From<Customer> for NewCustomer {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
        }
    }
}

/// A customer entry keyed by number, filtered by name and city.
#[derive(Debug, Clone)]
pub struct CustomerRecord {
    pub id: u32,
    pub name: String,
    pub city: String,
}

impl CustomerRecord {
    pub fn new(id: u32, name: &str, city: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            city: city.to_string(),
        }
    }
}

// Identity is the id alone.
impl PartialEq for CustomerRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CustomerRecord {}

impl std::hash::Hash for CustomerRecord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_customer() {
        let customer = Customer::new("1", "Alice", "alice@test.com").unwrap();
        assert_eq!(customer.id(), "1");
        assert_eq!(customer.name(), "Alice");
        assert_eq!(customer.email(), "alice@test.com");
    }

    #[test]
    fn test_invalid_email() {
        let result = Customer::new("2", "Bob", "invalid-email");
        assert!(matches!(
            result,
            Err(RegistryError::InvalidArgument { ref field, .. }) if field == "email"
        ));
        assert!(Customer::new("2", "Bob", "johndoe.com").is_err());
        assert!(Customer::new("2", "Bob", "").is_err());
    }

    #[test]
    fn test_blank_name_and_id() {
        assert!(matches!(
            Customer::new("3", "", "valid@test.com"),
            Err(RegistryError::InvalidArgument { ref field, .. }) if field == "name"
        ));
        assert!(matches!(
            Customer::new("   ", "Alice", "alice@test.com"),
            Err(RegistryError::InvalidArgument { ref field, .. }) if field == "id"
        ));
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let ok: Customer =
            serde_json::from_str(r#"{"id":"1","name":"Alice","email":"alice@test.com"}"#).unwrap();
        assert_eq!(ok.name(), "Alice");

        let bad = serde_json::from_str::<Customer>(r#"{"id":"1","name":"Alice","email":"nope"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_serialize_round_trip_shape() {
        let customer = Customer::new("1", "Alice", "alice@test.com").unwrap();
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["email"], "alice@test.com");
    }

    #[test]
    fn test_record_equality_by_id() {
        let a = CustomerRecord::new(1, "Name one", "Montreal");
        let b = CustomerRecord::new(1, "Other", "Quebec");
        assert_eq!(a, b);
        assert_ne!(a, CustomerRecord::new(2, "Name one", "Montreal"));
    }
}
