//! tl-losses: transformer loss curves and efficiency for the analyzer.
//!
//! Provides:
//! - Nameplate input parameters and the positivity gate
//! - The swept load axis (0 to rated power)
//! - Iron, copper, stray and dielectric loss curves plus efficiency
//! - Axis bounds and a progressive-reveal animation schedule
//! - YAML/JSON parameter files
//!
//! # Example
//!
//! ```
//! use tl_losses::{InputParameters, compute};
//!
//! let params = InputParameters {
//!     primary_voltage: 230.0,
//!     secondary_voltage: 115.0,
//!     rated_power: 100.0,
//!     frequency: 50.0,
//!     winding_resistance: 2.0,
//!     core_size: 50.0,
//!     temperature: 25.0,
//!     load_level_percent: 50,
//!     ..Default::default()
//! };
//!
//! let analysis = compute(&params).unwrap();
//! assert_eq!(analysis.sweep.len(), 50);
//! assert!((analysis.curves.copper[49] - 200.0).abs() < 1e-9);
//! assert_eq!(analysis.frames().last().map(|f| f.len), Some(50));
//! ```

pub mod animation;
pub mod calculator;
pub mod config;
pub mod error;
pub mod model;
pub mod params;
pub mod sweep;

pub use animation::{AnimationFrames, Frame, FrameIter, Rgb, Trace, TraceKind, TraceStyle};
pub use calculator::{AxisBounds, LossAnalysis, LossSummary, OperatingPoint, compute};
pub use config::{load_json, load_yaml, save_json, save_yaml};
pub use error::{ConfigError, ConfigResult, ValidationError};
pub use model::{LossCurveSet, LossModel, efficiency_percent};
pub use params::{CoreType, InputParameters};
pub use sweep::{LoadSweep, SWEEP_POINTS};
