use crate::error::ParamsError;

/// User-facing options for OH block construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OhParams {
    /// Point count along each new spoke curve. `0` leaves them undimensioned.
    pub radial_dimension: usize,
    /// Fraction of the node-to-centroid distance kept between the outer loop
    /// and the core, in `(0, 1)`. Larger values give a smaller core.
    pub radial_extent: f64,
    /// Run the elliptic solver over the new regions.
    pub run_solver: bool,
    /// Interpolate grid-line angles where the radial regions meet the outer loop.
    pub interpolate_edge_angle: bool,
}

impl Default for OhParams {
    fn default() -> Self {
        Self {
            radial_dimension: 10,
            radial_extent: 0.5,
            run_solver: true,
            interpolate_edge_angle: false,
        }
    }
}

impl OhParams {
    /// Checks every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::InvalidRadialDimension`] for a radial dimension
    /// of 1, or [`ParamsError::OutOfRange`] for a radial extent outside `(0, 1)`.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.radial_dimension == 1 {
            return Err(ParamsError::InvalidRadialDimension(self.radial_dimension));
        }
        check_radial_extent(self.radial_extent)
    }
}

/// Checks that a radial extent lies strictly between 0 and 1.
pub(crate) fn check_radial_extent(value: f64) -> Result<(), ParamsError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ParamsError::OutOfRange {
            parameter: "radial_extent",
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}
