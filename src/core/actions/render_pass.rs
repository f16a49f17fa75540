use crate::core::colour::factory::colour_map_factory;
use crate::core::colour::map::ColourMap;
use crate::core::config::EngineConfig;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::refinement::RefinementLevel;
use crate::core::data::surface::SurfaceSize;
use crate::core::data::viewport::Viewport;
use crate::core::escape::algorithm::EscapeAlgorithm;
use crate::core::escape::errors::EscapeAlgorithmError;
use crate::core::escape::factory::escape_algorithm_factory;
use crate::core::util::screen_to_plane::screen_to_plane;

/// One rung of the coarse-to-fine render: evaluates a single sample per
/// block and floods the block with that colour. Which rung runs, and when,
/// is the scheduler's business; a pass is a pure function of the viewport,
/// the refinement level and the buffer it paints into.
pub struct ProgressiveRasterizer {
    surface: SurfaceSize,
    algorithm: Box<dyn EscapeAlgorithm>,
    colour_map: Box<dyn ColourMap>,
}

impl ProgressiveRasterizer {
    #[must_use]
    pub fn new(
        surface: SurfaceSize,
        algorithm: Box<dyn EscapeAlgorithm>,
        colour_map: Box<dyn ColourMap>,
    ) -> Self {
        Self {
            surface,
            algorithm,
            colour_map,
        }
    }

    pub fn from_config(
        config: &EngineConfig,
        surface: SurfaceSize,
    ) -> Result<Self, EscapeAlgorithmError> {
        let algorithm = escape_algorithm_factory(
            config.escape_kind,
            config.max_iterations,
            config.escape_radius_squared,
        )?;

        Ok(Self::new(
            surface,
            algorithm,
            colour_map_factory(config.colour_map_kind),
        ))
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Paints one refinement pass into `buffer`. At `Block(edge)` each
    /// block is flooded with the count sampled `edge / 2` pixels up-left
    /// of its origin; at `Block(1)` the sample is the pixel itself.
    /// `Complete` and a zero-edge block paint nothing.
    pub fn render_pass(
        &self,
        viewport: &Viewport,
        level: RefinementLevel,
        buffer: &mut PixelBuffer,
    ) {
        let Some(edge) = level.block_edge() else {
            return;
        };

        let sample_offset = if edge == 1 { 0.0 } else { f64::from(edge / 2) };

        let mut y = 0;
        while y < self.surface.height() {
            let mut x = 0;
            while x < self.surface.width() {
                let c = screen_to_plane(
                    f64::from(x) - sample_offset,
                    f64::from(y) - sample_offset,
                    self.surface,
                    viewport,
                );
                let colour = self.colour_map.map(self.algorithm.compute(c));

                buffer.fill_block(x, y, edge, colour);
                x += edge;
            }
            y += edge;
        }
    }
}
