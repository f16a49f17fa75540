use crate::core::data::complex::Complex;
use crate::core::data::surface::SurfaceSize;
use crate::core::data::viewport::Viewport;

/// Maps a screen-space x coordinate to the real axis of the plane. Total
/// over f64: coordinates off the surface (including negative ones, which
/// block sampling produces at the top-left edge) extrapolate linearly.
#[must_use]
pub fn screen_to_plane_x(screen_x: f64, surface: SurfaceSize, viewport: &Viewport) -> f64 {
    (screen_x / f64::from(surface.width()) - 0.5) * viewport.scale() + viewport.offset_x()
}

/// Maps a screen-space y coordinate to the imaginary axis. Screen y grows
/// downwards, plane y grows upwards, so the sign flips; the aspect ratio
/// keeps plane pixels square on non-square surfaces.
#[must_use]
pub fn screen_to_plane_y(screen_y: f64, surface: SurfaceSize, viewport: &Viewport) -> f64 {
    let ratio = surface.aspect_ratio();

    -(screen_y / f64::from(surface.height()) * ratio - ratio / 2.0) * viewport.scale()
        + viewport.offset_y()
}

#[must_use]
pub fn screen_to_plane(
    screen_x: f64,
    screen_y: f64,
    surface: SurfaceSize,
    viewport: &Viewport,
) -> Complex {
    Complex {
        real: screen_to_plane_x(screen_x, surface, viewport),
        imag: screen_to_plane_y(screen_y, surface, viewport),
    }
}
