use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let file = std::fs::File::create(filepath)?;
    let mut writer = BufWriter::new(file);

    // PPM header: P6 means binary RGB, then width height max_colour
    let surface = buffer.surface();

    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", surface.width(), surface.height())?;
    writeln!(writer, "255")?;

    // packed ARGB flattens to RGB byte triplets, alpha dropped
    for pixel in buffer.as_slice() {
        writer.write_all(&[pixel.red(), pixel.green(), pixel.blue()])?;
    }

    writer.flush()
}
