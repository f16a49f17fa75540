use crate::core::actions::render_pass::ProgressiveRasterizer;
use crate::core::config::EngineConfig;
use crate::core::data::engine_state::EngineState;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::write_ppm::write_ppm;
use log::info;
use std::error::Error;
use std::path::Path;

/// Renders one fully refined frame without a window or a frame loop: the
/// same refinement ladder the interactive scheduler walks, driven to
/// completion in a tight loop, then written out as binary PPM.
pub fn render_snapshot(
    config: &EngineConfig,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    let surface = config.surface()?;
    let rasterizer = ProgressiveRasterizer::from_config(config, surface)?;
    let mut state = EngineState::new(config.initial_viewport()?, config.initial_refinement()?);
    let mut buffer = PixelBuffer::new(surface);

    while state.is_dirty() {
        let viewport = *state.viewport();
        rasterizer.render_pass(&viewport, state.refinement(), &mut buffer);
        state.mark_pass_complete();
    }

    write_ppm(&buffer, &filepath)?;
    info!("snapshot written to {}", filepath.as_ref().display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::refinement::RefinementLevel;
    use std::fs;

    fn small_config() -> EngineConfig {
        EngineConfig {
            surface_width: 16,
            surface_height: 12,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn snapshot_writes_a_complete_ppm_file() {
        let path = std::env::temp_dir().join("snapshot_complete_test.ppm");

        render_snapshot(&small_config(), &path).unwrap();
        let bytes = fs::read(&path).unwrap();
        let _ = fs::remove_file(&path);

        let header = b"P6\n16 12\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(bytes.len(), header.len() + 16 * 12 * 3);
    }

    #[test]
    fn snapshot_matches_a_single_full_resolution_pass() {
        let config = small_config();
        let path = std::env::temp_dir().join("snapshot_full_res_test.ppm");

        render_snapshot(&config, &path).unwrap();
        let snapshot_bytes = fs::read(&path).unwrap();
        let _ = fs::remove_file(&path);

        // the ladder's last rung paints every pixel from its own sample,
        // so the finished frame equals one pixel-by-pixel pass
        let surface = config.surface().unwrap();
        let rasterizer = ProgressiveRasterizer::from_config(&config, surface).unwrap();
        let viewport = config.initial_viewport().unwrap();
        let mut reference = PixelBuffer::new(surface);
        rasterizer.render_pass(&viewport, RefinementLevel::Block(1), &mut reference);

        let header_len = b"P6\n16 12\n255\n".len();
        let body: Vec<u8> = reference
            .as_slice()
            .iter()
            .flat_map(|p| [p.red(), p.green(), p.blue()])
            .collect();

        assert_eq!(&snapshot_bytes[header_len..], body.as_slice());
    }
}
