//----------------------------------------
// estimate mod types
//----------------------------------------

/// Inputs for a proportion (binary) metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryRequest {
    /// Expected rate in the control group, in (0, 1)
    pub baseline_rate: f64,
    /// Effect to detect, as a fraction of the baseline rate
    pub mde: f64,
    /// Size of a treatment arm relative to control
    pub allocation_ratio: f64,
    pub two_sided: bool,
}

/// Inputs for a mean (continuous) metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousRequest {
    pub baseline_value: f64,
    pub variance: f64,
    /// Effect to detect, as a fraction of the baseline value
    pub mde: f64,
    /// Size of a treatment arm relative to control
    pub allocation_ratio: f64,
    pub two_sided: bool,
}
