//! Field profile plots

use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use super::{plot_series, Series};
use crate::physics::{Field, GridLayout};

/// Plot the interior profile of one or more fields against position
///
/// Fields may have different centerings; each is drawn at its own
/// coordinates.
///
/// # Example
///
/// ```rust,ignore
/// plot_field_profile(&layout, &[b.z(), j.y()], "profile.png", None)?;
/// ```
pub fn plot_field_profile(
    layout: &GridLayout<1>,
    fields: &[&Field<1>],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if fields.is_empty() {
        return Err("No field provided".into());
    }

    let default_config = PlotConfig::field_profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let series: Vec<Series> = fields
        .iter()
        .map(|field| Series {
            label: field.quantity().to_string(),
            points: field
                .interior_coordinates(layout)
                .into_iter()
                .zip(field.interior(layout).iter().copied())
                .collect(),
        })
        .collect();

    plot_series(&series, output_path, config)
}
