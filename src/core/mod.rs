pub mod customer_repository;
pub mod customer_service;
pub mod repository;
pub mod specification;

pub use crate::domain::model::{Customer, CustomerRecord, NewCustomer};
pub use crate::domain::ports::{
    CustomerRepository, Logger, Repository, RepositoryKey, Specification,
};
pub use crate::utils::error::Result;
pub use customer_repository::InMemoryCustomerRepository;
pub use customer_service::CustomerService;
pub use repository::InMemoryRepository;
pub use specification::{
    spec_fn, CustomerFilter, EmailDomain, FnSpecification, SpecificationExt,
};
