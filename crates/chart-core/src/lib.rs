// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the viewport engine, renderer and chart API.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod provider;
pub mod render;
pub mod scale;
pub mod series;
pub mod surface;
pub mod telemetry;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{AxisRenderer, Tick};
pub use chart::Chart;
pub use config::{ChartConfig, PriceRangeMode};
pub use error::{BarError, ChartError, ChartResult, ParseError, ProviderError};
pub use format::{ChronoDateFormatter, DateFormatter, PriceFormatter};
pub use geometry::{Point, Rect};
pub use input::{InputAction, InputController, WheelEvent, WheelOutcome};
pub use provider::{decode_chunked_json, decode_csv, BarProvider, CsvFileProvider, JsonFileProvider};
pub use render::{CandleGeometry, ChartRenderer, RenderStats};
pub use scale::PriceScale;
pub use series::{Bar, BarSeries, Direction, PriceRange};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use theme::Theme;
pub use types::{Color, Font, FontFamily, Size};
pub use view::Viewport;
