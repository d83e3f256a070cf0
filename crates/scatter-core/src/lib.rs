// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; loads cyclist records and renders the doping scatter plot.

pub mod axis;
pub mod builder;
pub mod config;
pub mod error;
pub mod geometry;
pub mod loader;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod transform;
pub mod types;

pub use axis::{Axis, AxisOrient, Tick};
pub use builder::{Extents, Scales};
pub use config::ChartConfig;
pub use error::{LoadError, TransformError};
pub use geometry::Point;
pub use loader::{fetch_records, load, load_file, parse_records, DATA_URL};
pub use pipeline::{build_scene, load_scene};
pub use record::Record;
pub use render::RenderOptions;
pub use scale::{CategoryScale, LinearScale, Scale, TimeScale};
pub use scene::{Legend, Marker, Scene};
pub use theme::Theme;
pub use tooltip::{Tooltip, Visibility};
pub use transform::{derive_points, Dataset, DerivedPoint, TimeOfDay};
pub use types::{Insets, Layout};
