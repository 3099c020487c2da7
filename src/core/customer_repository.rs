use crate::core::{CustomerRepository, Logger};
use crate::domain::model::Customer;
use crate::utils::error::{RegistryError, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<String, Customer>>,
    logger: Arc<dyn Logger>,
}

impl InMemoryCustomerRepository {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        logger.info("InMemoryCustomerRepository created");
        Self {
            customers: RwLock::new(HashMap::new()),
            logger,
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Customer>>> {
        self.customers.read().map_err(|_| {
            self.logger
                .error("Customer store read failed", &RegistryError::StorePoisoned);
            RegistryError::StorePoisoned
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, Customer>>> {
        self.customers.write().map_err(|_| {
            self.logger
                .error("Customer store write failed", &RegistryError::StorePoisoned);
            RegistryError::StorePoisoned
        })
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn save(&self, customer: Customer) -> Result<()> {
        let mut customers = self.write()?;
        // Checked and inserted under one write guard.
        match customers.entry(customer.id().to_string()) {
            Entry::Occupied(entry) => {
                self.logger
                    .warn(&format!("Already existing customer with ID: {}", entry.key()));
                Err(RegistryError::DuplicateCustomer {
                    id: entry.key().clone(),
                })
            }
            Entry::Vacant(entry) => {
                self.logger
                    .info(&format!("Saving customer with ID: {}", entry.key()));
                entry.insert(customer);
                Ok(())
            }
        }
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Customer>> {
        let found = self.read()?.get(id).cloned();
        match &found {
            Some(_) => self.logger.info(&format!("Customer with ID: {} found.", id)),
            None => self
                .logger
                .info(&format!("Customer with ID: {} not found.", id)),
        }
        Ok(found)
    }

    fn find_all(&self) -> Result<Vec<Customer>> {
        let all: Vec<Customer> = self.read()?.values().cloned().collect();
        self.logger
            .info(&format!("List of {} customers found.", all.len()));
        Ok(all)
    }

    fn delete_by_id(&self, id: &str) -> Result<Option<Customer>> {
        let removed = self.write()?.remove(id);
        if removed.is_some() {
            self.logger
                .info(&format!("Deleted customer with ID: {}", id));
        }
        Ok(removed)
    }
}
