use std::path::Path;

use crate::{
    infra::{
        self, clock::SystemClock, config::FileConfigAdapter, contracts::ConfigAdapter,
        delivery_log::FileDeliveryLog,
    },
    usecases::{
        context::AppContext,
        dispatch::{BasicDispatcher, LoggingDispatcher},
    },
};

pub type AppDispatcher = LoggingDispatcher<BasicDispatcher<SystemClock>, FileDeliveryLog>;

pub fn bootstrap(config_path: Option<&Path>) -> anyhow::Result<AppContext> {
    let context = build_context(config_path)?;
    infra::logging::init(&context.config.logging)?;

    Ok(context)
}

/// Dispatcher writing to the configured delivery log file.
pub fn compose_dispatcher(context: &AppContext) -> AppDispatcher {
    LoggingDispatcher::new(
        BasicDispatcher::new(),
        FileDeliveryLog::new(&context.config.delivery.log_file),
    )
}

fn build_context(config_path: Option<&Path>) -> anyhow::Result<AppContext> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load()?;

    Ok(AppContext::new(config))
}
