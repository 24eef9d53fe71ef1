/// How a neighbour that is already in the open set is treated when it is
/// reached again from a different node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rediscovery {
    /// Replace the open node's costs and parent with the new values, even
    /// when the new `g` is worse. This can make the returned path longer
    /// than the shortest one.
    #[default]
    Overwrite,
    /// Replace the open node only when the new `g` is strictly lower.
    /// This is textbook A* and changes expansion order relative to
    /// [`Overwrite`](Self::Overwrite).
    IfBetter,
}

/// Tunables for an [`AStarSearch`](crate::AStarSearch).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub rediscovery: Rediscovery,
}

impl SearchConfig {
    /// Config that only updates open nodes on strict improvement.
    pub fn if_better() -> Self {
        Self {
            rediscovery: Rediscovery::IfBetter,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::if_better();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.rediscovery, Rediscovery::Overwrite);
    }
}
