use crate::core::{CustomerRepository, Logger, Specification};
use crate::domain::model::{Customer, NewCustomer};
use crate::utils::error::{RegistryError, Result};
use rayon::prelude::*;
use std::sync::Arc;

pub struct CustomerService<R: CustomerRepository> {
    repository: R,
    logger: Arc<dyn Logger>,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repository: R, logger: Arc<dyn Logger>) -> Self {
        CustomerService { repository, logger }
    }

    /// Validates and stores a new customer. Invalid input never reaches the repository.
    pub fn register_customer(&self, id: &str, name: &str, email: &str) -> Result<Customer> {
        let customer = Customer::new(id, name, email)?;

        if let Err(e) = self.repository.save(customer.clone()) {
            self.logger.error("Registration failed", &e);
            return Err(e);
        }

        self.logger
            .info(&format!("Registered new customer with ID: {}", id));
        Ok(customer)
    }

    /// Registers every request on the rayon pool. Results keep the request order.
    pub fn register_all(&self, requests: &[NewCustomer]) -> Vec<Result<Customer>> {
        let results: Vec<Result<Customer>> = requests
            .par_iter()
            .map(|request| self.register_customer(&request.id, &request.name, &request.email))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        self.logger.info(&format!(
            "Batch registration finished: {} registered, {} failed",
            results.len() - failed,
            failed
        ));
        results
    }

    pub fn get_customer(&self, id: &str) -> Result<Customer> {
        match self.repository.find_by_id(id)? {
            Some(customer) => {
                self.logger
                    .info(&format!("Customer with ID: {} found.", id));
                Ok(customer)
            }
            None => {
                self.logger
                    .warn(&format!("Customer with ID: {} not found.", id));
                Err(RegistryError::CustomerNotFound { id: id.to_string() })
            }
        }
    }

    pub fn list_customers(&self) -> Result<Vec<Customer>> {
        let customers = self.repository.find_all()?;
        self.logger
            .info(&format!("Return a list of {} customer(s)", customers.len()));
        Ok(customers)
    }

    pub fn list_by(&self, specification: &dyn Specification<Customer>) -> Result<Vec<Customer>> {
        let mut customers = self.repository.find_all()?;
        customers.retain(|c| specification.is_satisfied_by(c));
        self.logger
            .info(&format!("Specification matched {} customer(s)", customers.len()));
        Ok(customers)
    }

    pub fn unregister_customer(&self, id: &str) -> Result<Customer> {
        match self.repository.delete_by_id(id)? {
            Some(customer) => {
                self.logger
                    .info(&format!("Unregistered customer with ID: {}", id));
                Ok(customer)
            }
            None => {
                self.logger
                    .warn(&format!("Cannot unregister - no customer with ID: {}", id));
                Err(RegistryError::CustomerNotFound { id: id.to_string() })
            }
        }
    }
}
