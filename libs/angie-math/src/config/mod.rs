//! Math-level configuration built on the shared `angie-config` crate.
//!
//! Carries the unit-length tolerance and the literal separator used by
//! [`Vec3::is_normalized_config`](crate::Vec3::is_normalized_config) and
//! [`Vec3::read_str_config`](crate::Vec3::read_str_config).

use angie_config::constants::{ConfigError, GlobalConfig};

/// Tolerance and literal settings for vector operations.
///
/// # Examples
/// ```
/// use angie_math::config::VectorConfig;
/// use angie_math::Vec3;
///
/// let cfg = VectorConfig::new(1.0e-3, ";").unwrap();
/// let mut v = Vec3::default();
/// v.read_str_config("[1; 0; 0.0005]", &cfg);
/// assert!(v.is_normalized_config(&cfg));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VectorConfig {
    /// Tolerance for unit-length checks.
    pub tolerance: f64,
    /// Separator for reading vector literals.
    pub separator: String,
}

impl VectorConfig {
    /// Validates `tolerance` and `separator` through [`GlobalConfig::new`].
    pub fn new(tolerance: f64, separator: &str) -> Result<Self, VectorConfigError> {
        GlobalConfig::new(tolerance, separator)
            .map(Self::from)
            .map_err(VectorConfigError)
    }
}

impl From<GlobalConfig> for VectorConfig {
    fn from(global: GlobalConfig) -> Self {
        Self {
            tolerance: global.tolerance,
            separator: global.separator,
        }
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        GlobalConfig::default().into()
    }
}

/// Rejected vector configuration.
#[derive(Debug, PartialEq)]
pub struct VectorConfigError(pub ConfigError);

impl std::fmt::Display for VectorConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid vector config: {}", self.0)
    }
}

impl std::error::Error for VectorConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

#[cfg(test)]
mod tests;
