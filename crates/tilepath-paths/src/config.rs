use tilepath_core::{Cost, DEFAULT_COST};

/// Construction parameters for a [`Grid`](crate::Grid).
///
/// Dimensions are fixed once the grid exists; changing them means building a
/// new grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    /// Movement cost given to every cell at creation.
    pub default_cost: Cost,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            default_cost: DEFAULT_COST,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: GridConfig = serde_json::from_str(r#"{"width": 8}"#).unwrap();
        assert_eq!(cfg.width, 8);
        assert_eq!(cfg.height, 20);
        assert_eq!(cfg.default_cost, DEFAULT_COST);
    }
}
