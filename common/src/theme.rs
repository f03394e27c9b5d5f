//! Temperature-driven theme derivation.
//!
//! The view's palette is a pure function of the latest temperature reading.
//! Four buckets, selected by inclusive lower bounds from [`crate::thresholds`]:
//!
//! | Temperature | Tier |
//! |-------------|------|
//! | ≥ 80°F | [`ThemeTier::Hot`] |
//! | 70-80°F | [`ThemeTier::Warm`] |
//! | 60-70°F | [`ThemeTier::Pleasant`] |
//! | < 60°F | [`ThemeTier::Cool`] |
//!
//! There is no interpolation between buckets: the step function is the whole
//! contract. Visual smoothing happens later in
//! [`ColorTransition`](crate::animations::ColorTransition).

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{
    COOL_ACCENT, COOL_PRIMARY, COOL_SECONDARY, HOT_ACCENT, HOT_PRIMARY, HOT_SECONDARY, PLEASANT_ACCENT,
    PLEASANT_PRIMARY, PLEASANT_SECONDARY, WARM_ACCENT, WARM_PRIMARY, WARM_SECONDARY,
};
use crate::thresholds::{TEMP_HOT_MIN, TEMP_PLEASANT_MIN, TEMP_WARM_MIN};

/// Temperature bucket.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ThemeTier {
    Hot,
    Warm,
    #[default]
    Pleasant,
    Cool,
}

impl ThemeTier {
    /// Select the bucket for a temperature in °F.
    ///
    /// NaN compares false against every threshold and lands in `Cool`.
    pub fn for_temperature(temperature: f32) -> Self {
        if temperature >= TEMP_HOT_MIN {
            Self::Hot
        } else if temperature >= TEMP_WARM_MIN {
            Self::Warm
        } else if temperature >= TEMP_PLEASANT_MIN {
            Self::Pleasant
        } else {
            Self::Cool
        }
    }

    /// Short label for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Pleasant => "pleasant",
            Self::Cool => "cool",
        }
    }
}

/// Opaque reference to a palette slot.
///
/// The view stores tokens rather than raw colors; the style layer resolves
/// them with [`ColorToken::rgb`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorToken {
    HotPrimary,
    HotSecondary,
    HotAccent,
    WarmPrimary,
    WarmSecondary,
    WarmAccent,
    PleasantPrimary,
    PleasantSecondary,
    PleasantAccent,
    CoolPrimary,
    CoolSecondary,
    CoolAccent,
}

impl ColorToken {
    /// Resolve the token to its display color.
    pub const fn rgb(self) -> Rgb565 {
        match self {
            Self::HotPrimary => HOT_PRIMARY,
            Self::HotSecondary => HOT_SECONDARY,
            Self::HotAccent => HOT_ACCENT,
            Self::WarmPrimary => WARM_PRIMARY,
            Self::WarmSecondary => WARM_SECONDARY,
            Self::WarmAccent => WARM_ACCENT,
            Self::PleasantPrimary => PLEASANT_PRIMARY,
            Self::PleasantSecondary => PLEASANT_SECONDARY,
            Self::PleasantAccent => PLEASANT_ACCENT,
            Self::CoolPrimary => COOL_PRIMARY,
            Self::CoolSecondary => COOL_SECONDARY,
            Self::CoolAccent => COOL_ACCENT,
        }
    }
}

/// Palette triple for one temperature bucket.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Theme {
    pub tier: ThemeTier,
    pub primary: ColorToken,
    pub secondary: ColorToken,
    pub accent: ColorToken,
}

impl Theme {
    /// The fixed token triple for a bucket.
    pub const fn for_tier(tier: ThemeTier) -> Self {
        let (primary, secondary, accent) = match tier {
            ThemeTier::Hot => (ColorToken::HotPrimary, ColorToken::HotSecondary, ColorToken::HotAccent),
            ThemeTier::Warm => (ColorToken::WarmPrimary, ColorToken::WarmSecondary, ColorToken::WarmAccent),
            ThemeTier::Pleasant => (
                ColorToken::PleasantPrimary,
                ColorToken::PleasantSecondary,
                ColorToken::PleasantAccent,
            ),
            ThemeTier::Cool => (ColorToken::CoolPrimary, ColorToken::CoolSecondary, ColorToken::CoolAccent),
        };
        Self {
            tier,
            primary,
            secondary,
            accent,
        }
    }

    /// Resolved colors in slot order: primary, secondary, accent.
    pub const fn colors(&self) -> [Rgb565; 3] { [self.primary.rgb(), self.secondary.rgb(), self.accent.rgb()] }
}

impl Default for Theme {
    fn default() -> Self { Self::for_tier(ThemeTier::Pleasant) }
}

/// Derive the theme for a temperature reading.
///
/// A missing reading keeps `previous` as is, so the palette never jumps while
/// data is unavailable.
pub fn derive_theme(temperature: Option<f32>, previous: Theme) -> Theme {
    match temperature {
        None => previous,
        Some(t) => Theme::for_tier(ThemeTier::for_temperature(t)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TIERS: [ThemeTier; 4] = [ThemeTier::Hot, ThemeTier::Warm, ThemeTier::Pleasant, ThemeTier::Cool];

    #[test]
    fn test_default_is_pleasant() {
        assert_eq!(Theme::default(), Theme::for_tier(ThemeTier::Pleasant));
        assert_eq!(Theme::default().accent, ColorToken::PleasantAccent);
    }

    #[test]
    fn test_hot_and_pleasant_scenarios() {
        assert_eq!(derive_theme(Some(82.0), Theme::default()).tier, ThemeTier::Hot);
        assert_eq!(derive_theme(Some(65.0), Theme::default()).tier, ThemeTier::Pleasant);
    }

    #[test]
    fn test_boundaries_resolve_to_upper_bucket() {
        assert_eq!(ThemeTier::for_temperature(80.0), ThemeTier::Hot);
        assert_eq!(ThemeTier::for_temperature(70.0), ThemeTier::Warm);
        assert_eq!(ThemeTier::for_temperature(60.0), ThemeTier::Pleasant);
        assert_eq!(ThemeTier::for_temperature(79.99), ThemeTier::Warm);
        assert_eq!(ThemeTier::for_temperature(69.99), ThemeTier::Pleasant);
        assert_eq!(ThemeTier::for_temperature(59.99), ThemeTier::Cool);
    }

    #[test]
    fn test_step_function_over_range() {
        let mut t = -40.0f32;
        while t < 130.0 {
            let expected = if t >= 80.0 {
                ThemeTier::Hot
            } else if t >= 70.0 {
                ThemeTier::Warm
            } else if t >= 60.0 {
                ThemeTier::Pleasant
            } else {
                ThemeTier::Cool
            };
            let theme = derive_theme(Some(t), Theme::default());
            assert_eq!(theme, Theme::for_tier(expected), "t = {t}");
            // Same input, same output
            assert_eq!(theme, derive_theme(Some(t), Theme::for_tier(ThemeTier::Cool)));
            t += 0.5;
        }
    }

    #[test]
    fn test_missing_temperature_keeps_previous() {
        for tier in ALL_TIERS {
            let prev = Theme::for_tier(tier);
            assert_eq!(derive_theme(None, prev), prev);
        }
    }

    #[test]
    fn test_nan_is_cool() {
        assert_eq!(ThemeTier::for_temperature(f32::NAN), ThemeTier::Cool);
    }

    #[test]
    fn test_tiers_have_distinct_triples() {
        for (i, a) in ALL_TIERS.iter().enumerate() {
            for b in &ALL_TIERS[i + 1..] {
                assert_ne!(Theme::for_tier(*a), Theme::for_tier(*b));
            }
        }
    }

    #[test]
    fn test_colors_resolve_tokens() {
        let theme = Theme::for_tier(ThemeTier::Hot);
        assert_eq!(theme.colors(), [HOT_PRIMARY, HOT_SECONDARY, HOT_ACCENT]);
    }
}
