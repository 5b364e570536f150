use log::LevelFilter;

fn main() {
    // initialize logger; stdout carries only the result line
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    if !iconpack::create_icon() {
        std::process::exit(1);
    }
}
