//! Run configuration

/// How long to run and what to record
///
/// # Example
///
/// ```rust
/// use hybrid_pic::simulation::SimulationConfiguration;
///
/// let config = SimulationConfiguration::time_evolution(1000)
///     .record_every(10)
///     .with_energy_tolerance(1e-3);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.recorded_steps(), 101);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfiguration {
    /// Number of time steps to advance
    pub time_steps: usize,

    /// Record a snapshot every `record_every` steps (the last step is always recorded)
    pub record_every: usize,

    /// Relative total-energy drift above which a warning is logged
    ///
    /// `None` disables the check, which is what driven runs (non-zero
    /// prescribed E) usually want.
    pub energy_tolerance: Option<f64>,
}

impl SimulationConfiguration {
    /// Create a configuration
    pub fn new(time_steps: usize, record_every: usize) -> Self {
        Self {
            time_steps,
            record_every,
            energy_tolerance: None,
        }
    }

    /// Run `time_steps` steps and record every one of them
    pub fn time_evolution(time_steps: usize) -> Self {
        Self::new(time_steps, 1)
    }

    /// Builder pattern: set the recording stride
    pub fn record_every(mut self, record_every: usize) -> Self {
        self.record_every = record_every;
        self
    }

    /// Builder pattern: warn when total energy drifts by more than `tolerance`
    pub fn with_energy_tolerance(mut self, tolerance: f64) -> Self {
        self.energy_tolerance = Some(tolerance);
        self
    }

    /// Number of snapshots a run produces, the initial state included
    pub fn recorded_steps(&self) -> usize {
        if self.record_every == 0 {
            return 1;
        }
        let strided = self.time_steps / self.record_every;
        let tail = usize::from(self.time_steps % self.record_every != 0);
        1 + strided + tail
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.time_steps == 0 {
            return Err("Number of time steps must be positive".to_string());
        }
        if self.record_every == 0 {
            return Err("Recording stride must be at least 1".to_string());
        }
        if let Some(tolerance) = self.energy_tolerance {
            if !(tolerance.is_finite() && tolerance > 0.0) {
                return Err(format!(
                    "Energy tolerance must be positive and finite, got {}",
                    tolerance
                ));
            }
        }
        Ok(())
    }
}
