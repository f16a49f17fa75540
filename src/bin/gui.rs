fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = mandelzoom::EngineConfig::default();
    mandelzoom::run_gui(&config)
}
