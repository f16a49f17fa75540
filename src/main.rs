fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    std::fs::create_dir_all("output")?;

    let config = mandelzoom::EngineConfig::default();
    mandelzoom::render_snapshot(&config, "output/mandelbrot.ppm")?;

    Ok(())
}
