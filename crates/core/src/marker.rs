//! Map marker descriptors keyed by severity tier.
//!
//! The rendering layer owns marker placement and popups; this module only
//! resolves a [`SeverityTier`] to the icon assets and pixel geometry a
//! web-map pin needs. Geometry follows the stock Leaflet marker: the
//! tiers differ only in icon colour, never in shape or anchoring.

use serde::Serialize;

use crate::severity::{classify, SeverityTier};
use crate::telemetry::TelemetryReading;

/// Width/height pair in pixels.
pub type PixelSize = (u32, u32);

/// x/y offset in pixels, relative to the icon's top-left corner.
pub type PixelOffset = (i32, i32);

// ---------------------------------------------------------------------------
// Canonical assets and geometry
// ---------------------------------------------------------------------------

/// Icon asset for critical units.
pub const ICON_CRITICAL: &str = "icons/marker-red.png";
/// Icon asset for degraded units.
pub const ICON_WARNING: &str = "icons/marker-yellow.png";
/// Icon asset for healthy units.
pub const ICON_NORMAL: &str = "icons/marker-green.png";
/// Shadow asset shared by every tier.
pub const ICON_SHADOW: &str = "icons/marker-shadow.png";

/// Marker icon size.
pub const MARKER_ICON_SIZE: PixelSize = (25, 41);
/// Hot-spot inside the icon that sits on the geographic coordinate.
pub const MARKER_ICON_ANCHOR: PixelOffset = (12, 41);
/// Where the popup opens, relative to the icon anchor.
pub const MARKER_POPUP_ANCHOR: PixelOffset = (1, -34);
/// Marker shadow size.
pub const MARKER_SHADOW_SIZE: PixelSize = (41, 41);

// ---------------------------------------------------------------------------
// MarkerDescriptor
// ---------------------------------------------------------------------------

/// The assets and pixel geometry needed to render one map pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerDescriptor {
    /// Opaque reference to the icon image.
    pub icon_asset: &'static str,
    /// Opaque reference to the shadow image.
    pub shadow_asset: &'static str,
    pub icon_size: PixelSize,
    pub icon_anchor: PixelOffset,
    pub popup_anchor: PixelOffset,
    pub shadow_size: PixelSize,
}

const fn pin(icon_asset: &'static str) -> MarkerDescriptor {
    MarkerDescriptor {
        icon_asset,
        shadow_asset: ICON_SHADOW,
        icon_size: MARKER_ICON_SIZE,
        icon_anchor: MARKER_ICON_ANCHOR,
        popup_anchor: MARKER_POPUP_ANCHOR,
        shadow_size: MARKER_SHADOW_SIZE,
    }
}

// ---------------------------------------------------------------------------
// MarkerRegistry
// ---------------------------------------------------------------------------

/// Immutable tier → descriptor mapping, built once and passed by
/// reference to whatever component places pins.
///
/// One field per tier makes coverage of the tier set a compile-time
/// property: [`MarkerRegistry::descriptor`] is total and cannot fail at
/// runtime, and adding a tier without a descriptor refuses to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerRegistry {
    critical: MarkerDescriptor,
    warning: MarkerDescriptor,
    normal: MarkerDescriptor,
}

impl MarkerRegistry {
    /// The canonical registry: red/yellow/green pins sharing one shadow
    /// and one geometry.
    pub const fn new() -> Self {
        Self {
            critical: pin(ICON_CRITICAL),
            warning: pin(ICON_WARNING),
            normal: pin(ICON_NORMAL),
        }
    }

    /// Resolve a tier to its descriptor. Total; every tier is covered.
    pub fn descriptor(&self, tier: SeverityTier) -> &MarkerDescriptor {
        match tier {
            SeverityTier::Critical => &self.critical,
            SeverityTier::Warning => &self.warning,
            SeverityTier::Normal => &self.normal,
        }
    }

    /// Classify a reading against the canonical thresholds and resolve
    /// the resulting tier in one step.
    pub fn for_reading(&self, reading: TelemetryReading) -> &MarkerDescriptor {
        self.descriptor(classify(reading))
    }
}

impl Default for MarkerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Lookup totality -----------------------------------------------------

    #[test]
    fn every_tier_resolves_to_a_descriptor() {
        let registry = MarkerRegistry::new();
        for tier in SeverityTier::ALL {
            let descriptor = registry.descriptor(tier);
            assert!(!descriptor.icon_asset.is_empty());
            assert!(!descriptor.shadow_asset.is_empty());
        }
    }

    #[test]
    fn icon_assets_are_distinct_per_tier() {
        let registry = MarkerRegistry::new();
        let assets: Vec<&str> = SeverityTier::ALL
            .iter()
            .map(|tier| registry.descriptor(*tier).icon_asset)
            .collect();
        assert_eq!(assets, vec![ICON_CRITICAL, ICON_WARNING, ICON_NORMAL]);
    }

    #[test]
    fn geometry_is_identical_across_tiers() {
        let registry = MarkerRegistry::new();
        let normal = registry.descriptor(SeverityTier::Normal);
        for tier in [SeverityTier::Critical, SeverityTier::Warning] {
            let descriptor = registry.descriptor(tier);
            assert_eq!(descriptor.icon_size, normal.icon_size);
            assert_eq!(descriptor.icon_anchor, normal.icon_anchor);
            assert_eq!(descriptor.popup_anchor, normal.popup_anchor);
            assert_eq!(descriptor.shadow_size, normal.shadow_size);
            assert_eq!(descriptor.shadow_asset, normal.shadow_asset);
        }
    }

    // -- Reading resolution ------------------------------------------------

    #[test]
    fn overheating_reading_resolves_to_red_pin() {
        let registry = MarkerRegistry::new();
        let descriptor = registry.for_reading(TelemetryReading::new(95.0, 50.0));
        assert_eq!(descriptor.icon_asset, ICON_CRITICAL);
    }

    #[test]
    fn low_fuel_reading_resolves_to_yellow_pin() {
        let registry = MarkerRegistry::new();
        let descriptor = registry.for_reading(TelemetryReading::new(70.0, 20.0));
        assert_eq!(descriptor.icon_asset, ICON_WARNING);
    }

    #[test]
    fn healthy_reading_resolves_to_green_pin() {
        let registry = MarkerRegistry::new();
        let descriptor = registry.for_reading(TelemetryReading::new(70.0, 50.0));
        assert_eq!(descriptor.icon_asset, ICON_NORMAL);
    }

    // -- Serialization -----------------------------------------------------

    #[test]
    fn descriptor_serializes_geometry_as_pixel_pairs() {
        let registry = MarkerRegistry::new();
        let json =
            serde_json::to_value(registry.descriptor(SeverityTier::Critical)).unwrap();

        assert_eq!(json["icon_asset"], ICON_CRITICAL);
        assert_eq!(json["icon_size"], serde_json::json!([25, 41]));
        assert_eq!(json["icon_anchor"], serde_json::json!([12, 41]));
        assert_eq!(json["popup_anchor"], serde_json::json!([1, -34]));
        assert_eq!(json["shadow_size"], serde_json::json!([41, 41]));
    }

    // -- Construction --------------------------------------------------------

    #[test]
    fn default_equals_new() {
        assert_eq!(MarkerRegistry::default(), MarkerRegistry::new());
    }
}
