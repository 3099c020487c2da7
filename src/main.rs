use anyhow::Context;
use clap::Parser;
use small_registry::config::LogFormat;
use small_registry::core::{EmailDomain, Logger};
use small_registry::utils::validation::Validate;
use small_registry::utils::{logger, logger::TracingLogger};
use small_registry::{CliConfig, CustomerService, InMemoryCustomerRepository, RegistryConfig};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("Starting small-registry");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match RegistryConfig::from_file(&cli.seed) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load seed file '{}': {}", cli.seed, e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {} ({:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let workers = match config.resolve_workers(cli.workers) {
        Ok(workers) => workers,
        Err(e) => {
            tracing::error!("Invalid --workers override: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()
        .context("failed to configure the registration worker pool")?;

    let registry_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("customer-store"));
    let service_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("customer-service"));
    let service = CustomerService::new(
        InMemoryCustomerRepository::new(registry_logger),
        service_logger,
    );

    tracing::info!(
        "Registering {} customer(s) into '{}' with {} worker(s)",
        config.customers.len(),
        config.registry.name,
        workers
    );

    let results = service.register_all(&config.customers);
    let mut failures = 0;
    for (request, result) in config.customers.iter().zip(&results) {
        if let Err(e) = result {
            failures += 1;
            eprintln!("⚠️  {}: {}", request.id, e.user_friendly_message());
        }
    }

    let mut customers = match cli.domain.as_deref() {
        Some(domain) => service.list_by(&EmailDomain::new(domain))?,
        None => service.list_customers()?,
    };
    customers.sort_by(|a, b| a.id().cmp(b.id()));

    if cli.json {
        let output =
            serde_json::to_string_pretty(&customers).context("failed to serialize customers")?;
        println!("{}", output);
    } else {
        for customer in &customers {
            println!("{}\t{}\t{}", customer.id(), customer.name(), customer.email());
        }
    }

    tracing::info!(
        "Done: {} listed, {} registration failure(s)",
        customers.len(),
        failures
    );

    if failures > 0 {
        std::process::exit(2);
    }

    Ok(())
}
