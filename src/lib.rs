pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::RegistryConfig;

pub use core::{
    CustomerFilter, CustomerService, InMemoryCustomerRepository, InMemoryRepository, Repository,
    Specification,
};
pub use domain::container::{Container, Pair};
pub use utils::error::{RegistryError, Result};
