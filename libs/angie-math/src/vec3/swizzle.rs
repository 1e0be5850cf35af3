//! Swizzles: component permutations copied out into plain arrays.

use super::Vec3;
use crate::error::SwizzleError;
use angie_config::constants::MAX_SWIZZLE_LEN;

impl Vec3 {
    /// Components in `(x, y, z)` order.
    pub fn xyz(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Components in `(x, y)` order.
    pub fn xy(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Components in `(y, x, z)` order.
    pub fn yxz(&self) -> [f64; 3] {
        [self.y, self.x, self.z]
    }

    /// Components in `(z, y, x)` order.
    pub fn zyx(&self) -> [f64; 3] {
        [self.z, self.y, self.x]
    }

    /// Same as [`Vec3::xyz`].
    pub fn to_array(&self) -> [f64; 3] {
        self.xyz()
    }

    /// Reads any permutation of `x`, `y` and `z`, repeats allowed.
    ///
    /// ```rust
    /// use angie_math::Vec3;
    /// let v = Vec3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.swizzle("zzx").unwrap(), vec![3.0, 3.0, 1.0]);
    /// assert!(v.swizzle("xw").is_err());
    /// ```
    pub fn swizzle(&self, pattern: &str) -> Result<Vec<f64>, SwizzleError> {
        if pattern.is_empty() {
            return Err(SwizzleError::Empty);
        }
        let len = pattern.chars().count();
        if len > MAX_SWIZZLE_LEN {
            return Err(SwizzleError::TooLong {
                len,
                max: MAX_SWIZZLE_LEN,
            });
        }
        pattern
            .chars()
            .map(|ch| match ch {
                'x' => Ok(self.x),
                'y' => Ok(self.y),
                'z' => Ok(self.z),
                _ => Err(SwizzleError::InvalidComponent { ch }),
            })
            .collect()
    }
}
