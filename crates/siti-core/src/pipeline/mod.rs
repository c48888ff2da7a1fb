//! Pipeline configuration and the frame-by-frame orchestrator.

pub mod calculator;
pub mod config;
pub mod results;

pub use calculator::{FrameCallback, SitiCalculator};
pub use config::{
    CalculationDomain, ColorRange, EotfFunction, HdrMode, PipelineConfig, Pu21Mode, SitiOptions,
};
pub use results::{Settings, SitiResults};
