use ndarray::Array2;
use tracing::debug;

use crate::consts::METRIC_SCALE_8BIT;
use crate::error::Result;
use crate::frame::FrameMetrics;
use crate::io::FrameSource;
use crate::metrics;
use crate::range;
use crate::transfer::{display, hlg, pq, pu21};

use super::config::{CalculationDomain, ColorRange, HdrMode, PipelineConfig};
use super::results::{Settings, SitiResults};

/// Per-frame observer, invoked synchronously after each processed frame.
/// Callbacks must not mutate pipeline state.
pub type FrameCallback = Box<dyn Fn(&FrameMetrics) + Send>;

/// Sequences the SI/TI pipeline frame by frame and holds the cross-frame
/// state (previous transformed frame, accumulated metric values).
///
/// One instance serves one input at a time: state is reset at the start
/// of each [`calculate`](Self::calculate) call and must not be shared
/// across overlapping calls.
pub struct SitiCalculator {
    config: PipelineConfig,
    callbacks: Vec<FrameCallback>,
    previous_frame: Option<Array2<f64>>,
    si_values: Vec<f64>,
    ti_values: Vec<f64>,
    frame_count: usize,
}

impl SitiCalculator {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            callbacks: Vec::new(),
            previous_frame: None,
            si_values: Vec::new(),
            ti_values: Vec::new(),
            frame_count: 0,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Register a per-frame callback. Callbacks run synchronously, in
    /// registration order, after each frame's metrics are computed.
    pub fn add_callback(&mut self, callback: impl Fn(&FrameMetrics) + Send + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    fn reset(&mut self) {
        self.previous_frame = None;
        self.si_values.clear();
        self.ti_values.clear();
        self.frame_count = 0;
    }

    /// Transform raw decoded samples into the configured calculation
    /// domain, in place.
    fn transform(&self, data: &mut Array2<f64>) -> Result<()> {
        if self.config.legacy {
            // Legacy path: range adjustment only, in the raw integer
            // domain. Every transfer stage is skipped.
            if self.config.color_range == ColorRange::Limited {
                range::handle_limited_range_legacy(data)?;
            }
            return Ok(());
        }

        range::normalize_between_0_1(data, self.config.bit_depth);
        if self.config.color_range == ColorRange::Limited {
            range::handle_limited_range(data, self.config.bit_depth)?;
        }

        match self.config.hdr_mode {
            HdrMode::Sdr => {
                display::apply_display_model(
                    data,
                    self.config.eotf_function,
                    self.config.l_max,
                    self.config.l_min,
                    self.config.gamma,
                )?;
                self.encode(data);
            }
            // HDR10 is assumed already PQ-encoded by the mastering side.
            HdrMode::Hdr10 => {}
            HdrMode::Hlg => {
                hlg::apply(data, self.config.l_min, self.config.l_max);
                self.encode(data);
            }
        }
        Ok(())
    }

    fn encode(&self, data: &mut Array2<f64>) {
        match self.config.calculation_domain {
            CalculationDomain::Pq => data.mapv_inplace(pq::oetf),
            CalculationDomain::Pu21 => {
                let mode = self.config.pu21_mode;
                data.mapv_inplace(|l| pu21::encode(l, mode));
            }
        }
    }

    /// Calculate SI/TI over all frames of `source`, or over the first
    /// `num_frames` if given. Any range or decode error aborts the whole
    /// input; there is no skip-and-continue.
    pub fn calculate(
        &mut self,
        source: &mut dyn FrameSource,
        num_frames: Option<usize>,
    ) -> Result<SitiResults> {
        self.reset();

        while num_frames.map_or(true, |limit| self.frame_count < limit) {
            let Some(frame) = source.next_frame()? else {
                break;
            };
            let mut data = frame.data;

            if self.frame_count == 0 {
                let min = data.iter().copied().fold(f64::INFINITY, f64::min);
                let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let mean = data.iter().sum::<f64>() / data.len() as f64;
                debug!(min, max, mean, "first frame raw sample statistics");
            }

            self.transform(&mut data)?;

            let scale = if self.config.legacy {
                1.0
            } else {
                METRIC_SCALE_8BIT
            };
            let si = metrics::si(&data) * scale;
            let ti = metrics::ti(&data, self.previous_frame.as_ref())?.map(|t| t * scale);

            let frame_metrics = FrameMetrics {
                si,
                ti,
                frame_index: self.frame_count,
            };
            for callback in &self.callbacks {
                callback(&frame_metrics);
            }

            self.si_values.push(si);
            if let Some(ti) = ti {
                self.ti_values.push(ti);
            }
            self.previous_frame = Some(data);
            self.frame_count += 1;
        }

        Ok(SitiResults {
            input_file: None,
            si: self.si_values.clone(),
            ti: self.ti_values.clone(),
            num_frames: self.frame_count,
            settings: Settings::new(self.config.clone()),
        })
    }
}
