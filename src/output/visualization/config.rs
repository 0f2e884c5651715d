//! Plot configuration shared by the profile and trajectory plots

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Example
///
/// ```rust
/// use hybrid_pic::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::field_profile("Bz after one step");
/// config.series_colors = Some(vec![BLUE, RED]);
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (set by the plot type)
    pub xlabel: String,

    /// Y-axis label (set by the plot type)
    pub ylabel: String,

    /// Optional colors, one per series
    ///
    /// If None, uses the default palette [RED, BLUE, GREEN, MAGENTA, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(),
            ylabel: String::new(),
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `&str`/`String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Config for field profiles: value against position
    pub fn field_profile(title: impl IntoOptionalTitle) -> Self {
        Self {
            xlabel: "x".to_string(),
            ylabel: "Field".to_string(),
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Field Profile".to_string()),
            ..Self::default()
        }
    }

    /// Config for particle trajectories: velocity components against time
    pub fn trajectory(title: impl IntoOptionalTitle) -> Self {
        Self {
            xlabel: "t".to_string(),
            ylabel: "Velocity".to_string(),
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Particle Trajectory".to_string()),
            ..Self::default()
        }
    }

    /// Color of the series at `index`
    ///
    /// Uses custom colors if provided, otherwise falls back to the default palette
    pub(crate) fn series_color(&self, index: usize) -> RGBColor {
        if let Some(colors) = &self.series_colors {
            if index < colors.len() {
                return colors[index];
            }
        }

        let default_colors = [
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),  // Orange
            RGBColor(128, 0, 128),  // Purple
        ];

        default_colors[index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(config.show_grid);
    }

    #[test]
    fn test_field_profile_config() {
        let config = PlotConfig::field_profile(NO_TITLE);
        assert_eq!(config.xlabel, "x");
        assert_eq!(config.title, "Field Profile");

        let config = PlotConfig::field_profile(format!("Bz at step {}", 10));
        assert_eq!(config.title, "Bz at step 10");
    }

    #[test]
    fn test_trajectory_config() {
        let config = PlotConfig::trajectory("Gyration");
        assert_eq!(config.xlabel, "t");
        assert_eq!(config.title, "Gyration");
    }

    #[test]
    fn test_series_color() {
        let config = PlotConfig::default();
        assert_eq!(config.series_color(0), RED);
        assert_eq!(config.series_color(1), BLUE);
        assert_eq!(config.series_color(8), RED);

        let custom = PlotConfig {
            series_colors: Some(vec![GREEN]),
            ..PlotConfig::default()
        };
        assert_eq!(custom.series_color(0), GREEN);
        assert_eq!(custom.series_color(1), BLUE);
    }
}
