use chrono::{DateTime, Utc};
use dwell_core::{DurationReport, DwellError, ParameterId, ResultRow, Sample, Window};

use crate::Dwell;

impl Dwell {
    /// Compute how long `parameter` spent in each state over `window`.
    ///
    /// The trend source is called exactly once. A parameter without any trend
    /// records yields a single sentinel row at 100% and zero seconds, flagged by
    /// `no_data` on the report.
    ///
    /// # Errors
    /// Returns `RetrievalFailure` if the source fails or exceeds the configured
    /// timeout, and `Internal` on pipeline invariant violations.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dwell::distribution",
            skip(self, parameter, window),
            fields(
                parameter = %parameter,
                source = self.source.name(),
                start = %window.start(),
                end = %window.end(),
            ),
        )
    )]
    pub async fn distribution(
        &self,
        parameter: &ParameterId,
        window: Window,
    ) -> Result<DurationReport, DwellError> {
        let samples = self.fetch_samples(parameter, &window).await?;
        let no_data = samples.is_empty();
        let rows = dwell_core::distribution(samples, &window, &self.cfg.sentinel_label)?;
        let total_seconds = rows.iter().map(|r| r.absolute).sum();

        #[cfg(feature = "tracing")]
        tracing::debug!(rows = rows.len(), total_seconds, no_data, "distribution computed");

        Ok(DurationReport {
            parameter: parameter.to_string(),
            source: self.source.name().to_string(),
            start: window.start().timestamp(),
            end: window.end().timestamp(),
            total_seconds,
            no_data,
            rows,
        })
    }

    /// Like [`distribution`](Self::distribution), returning only the rows.
    ///
    /// # Errors
    /// Same as [`distribution`](Self::distribution).
    pub async fn rows(
        &self,
        parameter: &ParameterId,
        window: Window,
    ) -> Result<Vec<ResultRow>, DwellError> {
        Ok(self.distribution(parameter, window).await?.rows)
    }

    /// Validate raw arguments, then compute the distribution.
    ///
    /// Validation happens before the source is contacted.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a malformed parameter identifier, `InvalidWindow`
    /// if `start >= end` at whole-second precision, and otherwise the errors of
    /// [`distribution`](Self::distribution).
    pub async fn distribution_between(
        &self,
        parameter: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<DurationReport, DwellError> {
        let parameter: ParameterId = parameter.parse()?;
        let window = Window::new(start, end)?;
        self.distribution(&parameter, window).await
    }

    async fn fetch_samples(
        &self,
        parameter: &ParameterId,
        window: &Window,
    ) -> Result<Vec<Sample>, DwellError> {
        let name = self.source.name();
        Self::source_call_with_timeout(
            name,
            self.cfg.source_timeout,
            self.source.retrieve_samples(parameter, window),
        )
        .await
        .map_err(|e| crate::core::tag_err(name, e))
    }
}
