use crate::domain::model::NewCustomer;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub registry: RegistrySection,
    #[serde(default)]
    pub customers: Vec<NewCustomer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySection {
    pub name: String,
    pub workers: Option<usize>,
}

impl RegistryConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| RegistryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn workers(&self) -> usize {
        self.registry.workers.unwrap_or(4)
    }

    /// Worker count after applying a command-line override, which must be at least 1.
    pub fn resolve_workers(&self, cli_override: Option<usize>) -> Result<usize> {
        match cli_override {
            Some(workers) => {
                validate_positive_number("workers", workers, 1)?;
                Ok(workers)
            }
            None => Ok(self.workers()),
        }
    }
}

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("registry.name", &self.registry.name)?;
        if let Some(workers) = self.registry.workers {
            validate_positive_number("registry.workers", workers, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SEED: &str = r#"
[registry]
name = "demo"
workers = 2

[[customers]]
id = "1234-4321"
name = "John Doe"
email = "johndoe@email.com"

[[customers]]
id = "1234-4322"
name = "Jane Doe"
email = "janedoe@email.com"
"#;

    #[test]
    fn test_parse_seed() {
        let config = RegistryConfig::from_toml_str(SEED).unwrap();
        assert_eq!(config.registry.name, "demo");
        assert_eq!(config.workers(), 2);
        assert_eq!(config.customers.len(), 2);
        assert_eq!(config.customers[0].email, "johndoe@email.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_and_validation() {
        let config = RegistryConfig::from_toml_str("[registry]\nname = \"empty\"\n").unwrap();
        assert_eq!(config.workers(), 4);
        assert!(config.customers.is_empty());

        let config = RegistryConfig::from_toml_str("[registry]\nname = \"\"\nworkers = 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(RegistryError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_resolve_workers_override() {
        let config = RegistryConfig::from_toml_str(SEED).unwrap();
        assert_eq!(config.resolve_workers(None).unwrap(), 2);
        assert_eq!(config.resolve_workers(Some(8)).unwrap(), 8);
        assert!(matches!(
            config.resolve_workers(Some(0)),
            Err(RegistryError::InvalidArgument { ref field, .. }) if field == "workers"
        ));
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("SMALL_REGISTRY_TEST_NAME", "from-env");
        let config =
            RegistryConfig::from_toml_str("[registry]\nname = \"${SMALL_REGISTRY_TEST_NAME}\"\n")
                .unwrap();
        assert_eq!(config.registry.name, "from-env");

        let untouched = RegistryConfig::substitute_env_vars("${SMALL_REGISTRY_UNSET_VAR}");
        assert_eq!(untouched, "${SMALL_REGISTRY_UNSET_VAR}");
    }

    #[test]
    fn test_invalid_toml() {
        let result = RegistryConfig::from_toml_str("[registry\nname=");
        assert!(matches!(result, Err(RegistryError::ConfigError { .. })));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let config = RegistryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.customers.len(), 2);

        let missing = RegistryConfig::from_file("/definitely/not/here.toml");
        assert!(matches!(missing, Err(RegistryError::IoError(_))));
    }
}
