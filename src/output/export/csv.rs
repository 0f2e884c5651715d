//! CSV export of field profiles and particle trajectories
//!
//! CSV files open in spreadsheets, pandas, MATLAB and most data analysis tools.
//!
//! # Features
//!
//! - **Field profiles**: one coordinate column plus one column per field
//! - **Trajectories**: step, time, position and velocity of one particle
//! - **Metadata support**: optional `#` header with the run parameters
//! - **Customizable**: delimiter, decimal separator, precision
//! - **Validation**: checks for NaN, empty data, mismatched centerings
//!
//! # Field profile
//!
//! ```rust,no_run
//! use hybrid_pic::output::export::export_field_profile_csv;
//! use hybrid_pic::physics::{GridLayout, VecField, VectorQuantity};
//!
//! let layout = GridLayout::<1>::new([100], [0.1], 0.05, 1)?;
//! let b = VecField::from_fns(&layout, VectorQuantity::B, |_| 0.0, |_| 0.0, |x| x.sin());
//! let j = VecField::new(&layout, VectorQuantity::J);
//!
//! // Bz and Jx are both dual: they share the coordinate column
//! export_field_profile_csv(&layout, &[b.z(), j.x()], "profile.csv", None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! **Output** (`profile.csv`):
//! ```csv
//! x,Bz,Jx
//! 0.050000,0.049979,0.000000
//! 0.150000,0.149438,0.000000
//! ...
//! ```
//!
//! # With metadata
//!
//! ```csv
//! # Hybrid PIC Simulation Data
//! # Generated: 2026-10-18T09:30:00+00:00
//! # Pusher: Boris
//! # Boundary: periodic
//! # Cells: 1000
//! # Cell Size: 0.1
//! # Time Step: 0.05
//! # Time Steps: 200
//! #
//! step,time,x,vx,vy,vz
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::physics::{Direction, Field, GridLayout};
use crate::simulation::SimulationResult;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use hybrid_pic::output::export::CsvConfig;
///
/// let config = CsvConfig::default().delimiter(';').precision(10);
/// assert_eq!(config.delimiter, ';');
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header of the coordinate column of field profiles (default: "x")
    pub coordinate_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            coordinate_header: "x".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon delimiter, comma decimal separator)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are set are written.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Pusher name (e.g. "Boris")
    pub pusher_name: Option<String>,

    /// Boundary condition name (e.g. "periodic")
    pub boundary_name: Option<String>,

    /// Number of cells
    pub cells: Option<usize>,

    /// Cell size Δx
    pub cell_size: Option<f64>,

    /// Time step Δt
    pub time_step: Option<f64>,

    /// Number of time steps
    pub time_steps: Option<usize>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Collect metadata from the description attached to a run
    pub fn from_result(result: &SimulationResult) -> Self {
        let text = |key: &str| result.metadata.get(key).cloned();
        let number = |key: &str| result.metadata.get(key).and_then(|v| v.parse::<f64>().ok());
        let count = |key: &str| result.metadata.get(key).and_then(|v| v.parse::<usize>().ok());

        Self {
            pusher_name: text("pusher"),
            boundary_name: text("boundary"),
            cells: count("cells"),
            cell_size: number("dx"),
            time_step: number("dt"),
            time_steps: count("time steps"),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(
    writer: &mut W,
    metadata: &CsvMetadata,
) -> Result<(), Box<dyn Error>> {
    writeln!(writer, "# Hybrid PIC Simulation Data")?;

    let now = chrono::Utc::now();
    writeln!(writer, "# Generated: {}", now.to_rfc3339())?;

    if let Some(pusher) = &metadata.pusher_name {
        writeln!(writer, "# Pusher: {}", pusher)?;
    }
    if let Some(boundary) = &metadata.boundary_name {
        writeln!(writer, "# Boundary: {}", boundary)?;
    }
    if let Some(cells) = metadata.cells {
        writeln!(writer, "# Cells: {}", cells)?;
    }
    if let Some(dx) = metadata.cell_size {
        writeln!(writer, "# Cell Size: {}", dx)?;
    }
    if let Some(dt) = metadata.time_step {
        writeln!(writer, "# Time Step: {}", dt)?;
    }
    if let Some(time_steps) = metadata.time_steps {
        writeln!(writer, "# Time Steps: {}", time_steps)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(writer, "# {}: {}", key, value)?;
    }

    writeln!(writer, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Write one delimited row
fn write_row<W: Write>(
    writer: &mut W,
    values: &[f64],
    config: &CsvConfig,
) -> Result<(), Box<dyn Error>> {
    let row: Vec<String> = values.iter().map(|v| format_number(*v, config)).collect();
    writeln!(writer, "{}", row.join(&config.delimiter.to_string()))?;
    Ok(())
}

fn open_with_metadata(output_path: &str, config: &CsvConfig) -> Result<File, Box<dyn Error>> {
    let mut file = File::create(output_path)?;
    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }
    Ok(file)
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export interior profiles of fields sharing one centering
///
/// Writes a coordinate column followed by one column per field, over the
/// interior domain (ghosts excluded).
///
/// # Errors
///
/// - No field given
/// - Fields with different centerings (they would not share coordinates)
/// - A field not allocated on `layout`
/// - NaN or Inf values
/// - File creation errors
pub fn export_field_profile_csv(
    layout: &GridLayout<1>,
    fields: &[&Field<1>],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    let first = fields.first().ok_or("Empty data: at least one field is required")?;
    let centering = first.centering();

    for field in fields {
        if field.centering() != centering {
            return Err(format!(
                "Centering mismatch: {} is {} but {} is {}",
                field.quantity(),
                field.centering(),
                first.quantity(),
                centering
            )
            .into());
        }

        let expected = layout.allocation_size(Direction::X, centering);
        if field.len() != expected {
            return Err(format!(
                "{} has {} entries, layout allocates {}",
                field.quantity(),
                field.len(),
                expected
            )
            .into());
        }

        if field.interior(layout).iter().any(|v| !v.is_finite()) {
            return Err(format!("Invalid data: NaN or Inf detected in {}", field.quantity()).into());
        }
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Write ==================================

    let mut file = open_with_metadata(output_path, configuration)?;

    let mut header = vec![configuration.coordinate_header.clone()];
    header.extend(fields.iter().map(|f| f.quantity().to_string()));
    writeln!(file, "{}", header.join(&configuration.delimiter.to_string()))?;

    let coordinates = first.interior_coordinates(layout);
    let columns: Vec<&[f64]> = fields.iter().map(|f| f.interior(layout)).collect();

    for (row, x) in coordinates.iter().enumerate() {
        let mut values = Vec::with_capacity(columns.len() + 1);
        values.push(*x);
        values.extend(columns.iter().map(|column| column[row]));
        write_row(&mut file, &values, configuration)?;
    }

    Ok(())
}

/// Export the recorded history of one particle
///
/// Columns: `step, time, x, vx, vy, vz`.
///
/// # Errors
///
/// - Empty result
/// - `particle_index` missing from a snapshot
/// - NaN or Inf values
/// - File creation errors
pub fn export_trajectory_csv(
    result: &SimulationResult,
    particle_index: usize,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if result.is_empty() {
        return Err("Empty data: the simulation result holds no snapshot".into());
    }

    let trajectory = result.trajectory(particle_index).ok_or_else(|| {
        format!(
            "Particle {} is missing from at least one snapshot",
            particle_index
        )
    })?;

    if trajectory.iter().any(|particle| !particle.is_finite()) {
        return Err(format!("Invalid data: NaN or Inf detected in particle {}", particle_index).into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);
    let delimiter = configuration.delimiter;

    // ============================= Write ==================================

    let mut file = open_with_metadata(output_path, configuration)?;

    writeln!(
        file,
        "step{d}time{d}x{d}vx{d}vy{d}vz",
        d = delimiter
    )?;

    for ((step, time), particle) in result.steps.iter().zip(&result.time_points).zip(&trajectory) {
        write!(file, "{}{}", step, delimiter)?;
        write_row(
            &mut file,
            &[*time, particle.position[0], particle.v[0], particle.v[1], particle.v[2]],
            configuration,
        )?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
