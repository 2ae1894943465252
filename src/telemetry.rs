use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

/// Logs go to stdout, which is what serverless hosts collect. `json` switches to one
/// JSON object per line.
pub fn setup_tracing(json: bool) {
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stdout));
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stdout)
    });

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("sheets_append", tracing::Level::TRACE)
                .with_default(tracing::Level::INFO),
        )
        .with(text_layer)
        .with(json_layer)
        .init();
}

pub fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
