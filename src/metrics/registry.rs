use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::inventory::InventoryService;

use super::{DISCOVERY_KEY, Error, PLACEHOLDER_KEYS, Result, TEST_PARAMETER};

/// Computes the value of an item from its parameters.
pub type Handler = Box<dyn Fn(&[String]) -> Result<String> + Send + Sync>;

/// A registered item key.
pub struct Metric {
    key: &'static str,
    /// `Some` if the key takes parameters; holds the parameter used for testing.
    test_parameter: Option<&'static str>,
    handler: Handler,
}

impl Metric {
    /// Creates a metric that takes no parameters.
    pub fn new(
        key: &'static str,
        handler: impl Fn(&[String]) -> Result<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            test_parameter: None,
            handler: Box::new(handler),
        }
    }

    /// Marks the metric as taking parameters, with `test_parameter` for self-tests.
    pub fn with_parameters(mut self, test_parameter: &'static str) -> Self {
        self.test_parameter = Some(test_parameter);
        self
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn accepts_parameters(&self) -> bool {
        self.test_parameter.is_some()
    }

    pub fn test_parameter(&self) -> Option<&'static str> {
        self.test_parameter
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.test_parameter {
            Some(param) => write!(f, "{}[{}]", self.key, param),
            None => f.write_str(self.key),
        }
    }
}

impl fmt::Debug for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metric")
            .field("key", &self.key)
            .field("test_parameter", &self.test_parameter)
            .finish_non_exhaustive()
    }
}

/// Maps item keys to their handlers. Built once at startup.
#[derive(Debug, Default)]
pub struct Registry {
    metrics: BTreeMap<&'static str, Metric>,
}

impl Registry {
    /// Builds the registry with every key this module exposes.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use proc_inventory::config::Config;
    /// use proc_inventory::inventory::InventoryService;
    /// use proc_inventory::metrics::{self, Registry};
    ///
    /// let service = Arc::new(InventoryService::new(Config::default()));
    /// let registry = Registry::with_defaults(service);
    /// assert!(registry.get(metrics::DISCOVERY_KEY).is_some());
    /// ```
    pub fn with_defaults(service: Arc<InventoryService>) -> Self {
        let mut registry = Self::default();

        registry.register(Metric::new(DISCOVERY_KEY, move |_| {
            Ok(service.discover()?.to_json()?)
        }));

        for key in PLACEHOLDER_KEYS {
            registry.register(
                Metric::new(key, move |_| Err(Error::NotImplemented(key)))
                    .with_parameters(TEST_PARAMETER),
            );
        }

        registry
    }

    /// Adds a metric, replacing any metric already registered under its key.
    pub fn register(&mut self, metric: Metric) {
        if let Some(previous) = self.metrics.insert(metric.key, metric) {
            log::warn!("Replaced handler for item key `{}`", previous.key);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Metric> {
        self.metrics.get(key)
    }

    /// Registered metrics ordered by key.
    pub fn metrics(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.values()
    }

    /// Invokes the handler registered for `key`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownKey`] if nothing is registered for `key`.
    /// - [`Error::UnexpectedParameters`] if parameters are passed to a key that takes none.
    /// - Any error returned by the handler.
    pub fn invoke(&self, key: &str, params: &[String]) -> Result<String> {
        let metric = self
            .get(key)
            .ok_or_else(|| Error::UnknownKey(key.to_owned()))?;

        if !metric.accepts_parameters() && !params.is_empty() {
            return Err(Error::UnexpectedParameters {
                key: metric.key,
                count: params.len(),
            });
        }

        log::debug!("Invoking `{}` with {} parameters", metric.key, params.len());
        (metric.handler)(params)
    }
}
