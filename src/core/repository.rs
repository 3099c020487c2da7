use crate::core::{Logger, Repository, RepositoryKey, Specification};
use crate::utils::error::{RegistryError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// `HashMap`-backed [`Repository`]. Mutation needs `&mut self`, so callers
/// sharing it across threads must provide their own lock.
pub struct InMemoryRepository<ID, T> {
    storage: HashMap<ID, T>,
    logger: Arc<dyn Logger>,
}

impl<ID: RepositoryKey, T: Clone> InMemoryRepository<ID, T> {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        logger.info("InMemoryRepository created");
        InMemoryRepository {
            storage: HashMap::new(),
            logger,
        }
    }

    fn matching(&self, accept: impl Fn(&T) -> bool) -> Vec<T> {
        self.storage
            .values()
            .filter(|entity| accept(*entity))
            .cloned()
            .collect()
    }
}

impl<ID: RepositoryKey, T: Clone> Repository<ID, T> for InMemoryRepository<ID, T> {
    fn save(&mut self, id: ID, entity: T) -> Result<()> {
        self.logger.info(&format!("Saved entity with ID={:?}", id));
        self.storage.insert(id, entity);
        Ok(())
    }

    fn find_by_id(&self, id: &ID) -> Result<T> {
        match self.storage.get(id) {
            Some(entity) => {
                self.logger.info(&format!("Found entity with ID={:?}", id));
                Ok(entity.clone())
            }
            None => {
                self.logger
                    .warn(&format!("Entity with ID={:?} not found", id));
                Err(RegistryError::EntityNotFound {
                    id: format!("{:?}", id),
                })
            }
        }
    }

    fn find_all(&self) -> Vec<T> {
        self.logger.info("Fetching all entities");
        self.storage.values().cloned().collect()
    }

    fn delete_by_id(&mut self, id: &ID) -> Result<T> {
        match self.storage.remove(id) {
            Some(entity) => {
                self.logger.info(&format!("Deleted entity with ID={:?}", id));
                Ok(entity)
            }
            None => {
                self.logger
                    .warn(&format!("Cannot delete - no entity with ID={:?}", id));
                Err(RegistryError::EntityNotFound {
                    id: format!("{:?}", id),
                })
            }
        }
    }

    fn find_by(&self, predicate: &dyn Fn(&T) -> bool) -> Result<Vec<T>> {
        let found = self.matching(predicate);
        if found.is_empty() {
            self.logger.warn("No entity matches the predicate");
            return Err(RegistryError::NoMatch);
        }
        self.logger
            .info(&format!("Predicate matched {} entities", found.len()));
        Ok(found)
    }

    fn find_by_specification(&self, specification: &dyn Specification<T>) -> Result<Vec<T>> {
        let found = self.matching(|entity| specification.is_satisfied_by(entity));
        self.logger
            .info(&format!("Specification matched {} entities", found.len()));
        Ok(found)
    }

    fn count(&self) -> usize {
        self.storage.len()
    }
}
