use log::LevelFilter;
use simplelog::{ConfigBuilder, SimpleLogger};

pub fn setup_simple_logger() -> anyhow::Result<()> {
    let logger_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("insta_reply")
        .build();

    Ok(SimpleLogger::init(LevelFilter::Info, logger_config)?)
}

/// Routes panics through the logger so a crash leaves a trace in the
/// structured log stream instead of only on stderr.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        log::error!("process panic: {panic_info}");
        default_hook(panic_info);
    }));
}
