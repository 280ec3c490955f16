/* ************************************************************************ **
** This file is part of fixmat, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Settings for the decomposition.
//!
//! With the `serde-support` feature these can be embedded in an application's
//! own config file, e.g. as `lu: { pivoting: magnitude }`.

/// Settings for `lu_with` and `Lu::with_config`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct LuConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub pivoting: Pivoting,
}

/// How the pivot row for each column is chosen.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Pivoting {
    /// Choose the row with the largest signed value in the input matrix.
    ///
    /// This does not count as partial pivoting in the textbook sense; a column
    /// dominated by a large negative entry will not pivot to it, and earlier
    /// swaps are not seen, so an invertible matrix can still meet a zero pivot.
    Raw,
    /// Partial pivoting.  The row with the largest absolute value is chosen
    /// from the partly eliminated matrix, after all earlier swaps.
    Magnitude,
}

impl Default for Pivoting {
    fn default() -> Self { Pivoting::Raw }
}

impl LuConfig {
    pub fn new() -> Self { Self::default() }

    pub fn pivoting(mut self, pivoting: Pivoting) -> Self {
        self.pivoting = pivoting;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let config = LuConfig::new().pivoting(Pivoting::Magnitude);
        let json = ::serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"pivoting":"magnitude"}"#);
        assert_eq!(::serde_json::from_str::<LuConfig>(&json).unwrap(), config);
    }

    #[test]
    fn serde_defaults() {
        let config: LuConfig = ::serde_json::from_str("{}").unwrap();
        assert_eq!(config, LuConfig::default());
        assert_eq!(config.pivoting, Pivoting::Raw);
    }
}
