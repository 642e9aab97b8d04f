//! Output type for gridded resampling.

use nox_grid::{AxisPair, Field, GridData};

use crate::config::ResampleConfig;

/// A resampled field, its derived axes, and the configuration that produced it.
#[derive(Debug, Clone)]
pub struct ResampleResult {
    grid: GridData,
    config: ResampleConfig,
}

impl ResampleResult {
    pub(crate) fn new(grid: GridData, config: ResampleConfig) -> Self {
        Self { grid, config }
    }

    /// Returns the resampled field.
    pub fn field(&self) -> &Field {
        self.grid.field()
    }

    /// Returns the resampled axes.
    pub fn axes(&self) -> &AxisPair {
        self.grid.axes()
    }

    /// Returns the field and axes together.
    pub fn grid(&self) -> &GridData {
        &self.grid
    }

    /// Returns the configuration used.
    pub fn config(&self) -> &ResampleConfig {
        &self.config
    }

    /// Consumes the result and returns the grid.
    pub fn into_grid(self) -> GridData {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let field = Field::filled(4, 6, 1.0).unwrap();
        let axes = AxisPair::global(4, 6).unwrap();
        let grid = GridData::new(field.clone(), axes.clone()).unwrap();
        let config = ResampleConfig::new().with_factor(2);
        let result = ResampleResult::new(grid.clone(), config.clone());
        assert_eq!(result.field(), &field);
        assert_eq!(result.axes(), &axes);
        assert_eq!(result.config(), &config);
        assert_eq!(result.into_grid(), grid);
    }
}
