/// Bounds applied by every search a [`Router`](crate::Router) runs.
///
/// The defaults are the limits of the movement protocol; they are not
/// scaled by entity size or map region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteConfig {
    /// Half extent of the primary search window around the source.
    pub window_radius: i32,
    /// Per-axis distance beyond which a destination is not routed at all.
    pub max_route_distance: i32,
    /// Maximum number of waypoints handed back.
    pub max_checkpoints: usize,
    /// Half extent of the fallback candidate window.
    pub fallback_radius: i32,
    /// Path-length ceiling of the fallback exploration.
    pub fallback_max_distance: i32,
}

impl RouteConfig {
    pub const DEFAULT: Self = Self {
        window_radius: 64,
        max_route_distance: 50,
        max_checkpoints: 25,
        fallback_radius: 10,
        fallback_max_distance: 100,
    };
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = RouteConfig::default();
        assert_eq!(c.window_radius, 64);
        assert_eq!(c.max_route_distance, 50);
        assert_eq!(c.max_checkpoints, 25);
        assert_eq!(c.fallback_radius, 10);
        assert_eq!(c.fallback_max_distance, 100);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let c: RouteConfig = serde_json::from_str(r#"{ "window_radius": 32 }"#).unwrap();
        assert_eq!(c.window_radius, 32);
        assert_eq!(c.max_checkpoints, 25);
    }

    #[test]
    fn config_round_trip() {
        let c = RouteConfig {
            fallback_radius: 4,
            ..RouteConfig::default()
        };
        let json = serde_json::to_string(&c).unwrap();
        let back: RouteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
