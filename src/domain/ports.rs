use crate::domain::model::Customer;
use crate::utils::error::Result;
use std::fmt::Debug;
use std::hash::Hash;

/// Keys accepted by a [`Repository`]. Every value of the key type is a valid id.
pub trait RepositoryKey: Eq + Hash + Clone + Debug {}

impl<K: Eq + Hash + Clone + Debug> RepositoryKey for K {}

/// Matching criteria over `T`. Implementations must be pure.
pub trait Specification<T> {
    fn is_satisfied_by(&self, item: &T) -> bool;
}

/// Generic keyed storage.
///
/// `save` overwrites an existing entry. `find_by` treats an empty result as an
/// error while `find_by_specification` returns an empty `Vec`.
pub trait Repository<ID: RepositoryKey, T> {
    fn save(&mut self, id: ID, entity: T) -> Result<()>;
    fn find_by_id(&self, id: &ID) -> Result<T>;
    fn find_all(&self) -> Vec<T>;
    fn delete_by_id(&mut self, id: &ID) -> Result<T>;
    /// Prefer [`Repository::find_by_specification`] for reusable criteria.
    fn find_by(&self, predicate: &dyn Fn(&T) -> bool) -> Result<Vec<T>>;
    fn find_by_specification(&self, specification: &dyn Specification<T>) -> Result<Vec<T>>;
    fn count(&self) -> usize;
}

/// Customer storage that refuses to overwrite. A miss is `Ok(None)`.
pub trait CustomerRepository: Send + Sync {
    fn save(&self, customer: Customer) -> Result<()>;
    fn find_by_id(&self, id: &str) -> Result<Option<Customer>>;
    fn find_all(&self) -> Result<Vec<Customer>>;
    fn delete_by_id(&self, id: &str) -> Result<Option<Customer>>;
}

/// Observability side channel injected into stores and services.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str, cause: &dyn std::error::Error);
}
