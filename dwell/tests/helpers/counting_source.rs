use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dwell::{DwellError, ParameterId, Sample, TrendSource, Window};

/// Source returning fixed samples and counting how often it was called.
pub struct CountingSource {
    samples: Vec<Sample>,
    calls: AtomicUsize,
}

impl CountingSource {
    pub fn new(samples: Vec<Sample>) -> Arc<Self> {
        Arc::new(Self {
            samples,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TrendSource for CountingSource {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn retrieve_samples(
        &self,
        _parameter: &ParameterId,
        _window: &Window,
    ) -> Result<Vec<Sample>, DwellError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.samples.clone())
    }
}
