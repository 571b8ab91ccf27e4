use std::path::Path;

use anyhow::{bail, Context, Result};
use matgrid::Dimensions;
use serde::{Deserialize, Serialize};

/// Parameters for the demonstration walkthrough.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub mono_shape: Dimensions,
    pub mono_values: Vec<u64>,
    pub poly_shape: Dimensions,
    pub poly_rows: Vec<Vec<u64>>,
    pub prime_shape: Dimensions,
    pub prime_limit: u64,
    pub prime_low: u64,
    pub prime_high: u64,
    pub random_min: u64,
    pub random_max: u64,
    pub seed: Option<u64>,
    pub addition_values: Vec<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            mono_shape: Dimensions::new(2, 3),
            mono_values: vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4, 5, 6],
            poly_shape: Dimensions::new(5, 6),
            poly_rows: vec![
                vec![23, 54, 76, 34, 44, 77],
                vec![27, 38, 29, 10, 11, 12],
                vec![13, 14, 15, 16, 17, 18],
                vec![19, 20, 21, 22, 23, 24],
                vec![25, 26, 27, 28, 29, 30],
            ],
            prime_shape: Dimensions::new(9, 15),
            prime_limit: 1000,
            prime_low: 100,
            prime_high: 999,
            random_min: 100,
            random_max: 999,
            seed: None,
            addition_values: vec![1, 2, 3, 4, 5, 6],
        }
    }
}

impl DemoConfig {
    /// Reject shapes whose cell count does not fit in `usize`.
    pub fn validate(&self) -> Result<()> {
        for (name, shape) in [
            ("mono_shape", self.mono_shape),
            ("poly_shape", self.poly_shape),
            ("prime_shape", self.prime_shape),
        ] {
            if shape.checked_size().is_none() {
                bail!("{} {} is too large", name, shape);
            }
        }
        Ok(())
    }
}

/// Load a demo configuration from a JSON file.
pub fn load_demo_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DemoConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
