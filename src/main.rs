use driftfield::FieldConfig;

fn main() {
    env_logger::init();

    let config = FieldConfig::default();
    log::info!(
        "starting field: {} particles, disk diameter {}",
        config.count,
        config.group_diameter
    );

    if let Err(err) = driftfield::window::run(config) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
