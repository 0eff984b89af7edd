use std::sync::Arc;
use std::time::Duration;

use dwell_core::source::SourceKey;
use dwell_core::{DwellConfig, DwellError, TrendSource};

/// Orchestrator that retrieves samples from a trend source and computes
/// time-in-state distributions over them.
pub struct Dwell {
    pub(crate) source: Arc<dyn TrendSource>,
    pub(crate) cfg: DwellConfig,
}

/// Builder for constructing a `Dwell` orchestrator with custom configuration.
pub struct DwellBuilder {
    source: Option<Arc<dyn TrendSource>>,
    cfg: DwellConfig,
}

impl Default for DwellBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DwellBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Starts with no source; register one via [`with_source`](Self::with_source).
    /// Defaults: `"Not trended"` sentinel label, 5s source timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: DwellConfig::default(),
        }
    }

    /// Register the trend source. A later call replaces an earlier one.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn TrendSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the whole configuration, e.g. one deserialized from a file.
    #[must_use]
    pub fn config(mut self, cfg: DwellConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Label for time with no known state and for the no-data result row.
    #[must_use]
    pub fn sentinel_label(mut self, label: impl Into<String>) -> Self {
        self.cfg.sentinel_label = label.into();
        self
    }

    /// Upper bound for the single trend source call made per computation.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Build the `Dwell` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source was registered, the sentinel label is
    /// blank, or the source timeout is zero.
    pub fn build(self) -> Result<Dwell, DwellError> {
        let Some(source) = self.source else {
            return Err(DwellError::InvalidArg(
                "no trend source registered; add one via with_source(...)".to_string(),
            ));
        };
        if self.cfg.sentinel_label.trim().is_empty() {
            return Err(DwellError::InvalidArg("sentinel label is blank".to_string()));
        }
        if self.cfg.source_timeout.is_zero() {
            return Err(DwellError::InvalidArg("source timeout is zero".to_string()));
        }
        Ok(Dwell {
            source,
            cfg: self.cfg,
        })
    }
}

/// Report any source error as a retrieval failure tagged with the source name.
pub(crate) fn tag_err(source_name: &str, e: DwellError) -> DwellError {
    match e {
        e @ DwellError::RetrievalFailure { .. } => e,
        other => DwellError::retrieval(source_name, other.to_string()),
    }
}

impl Dwell {
    /// Start building a new `Dwell` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// let dwell = dwell::Dwell::builder()
    ///     .with_source(Arc::new(HistorianSource::connect("...")?))
    ///     .source_timeout(Duration::from_secs(10))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> DwellBuilder {
        DwellBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &DwellConfig {
        &self.cfg
    }

    /// Key of the registered trend source.
    #[must_use]
    pub fn source_key(&self) -> SourceKey {
        self.source.key()
    }

    /// Wrap a source future with a timeout, mapping expiry to a retrieval failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dwell::core::source_call_with_timeout",
            skip(fut),
            fields(
                source = source_name,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        source_name: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, DwellError>
    where
        Fut: core::future::Future<Output = Result<T, DwellError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(DwellError::retrieval(
                source_name,
                format!("timed out after {}ms", timeout.as_millis()),
            ))
        })
    }
}
