use anyhow::{Context, Result};
use mobile_analytics::event::internal_event::InternalEvent;
use mobile_analytics::{
    AnalyticsContextBuilder, ChannelObserver, DefaultEventClient, EventClient, JsonConfiguration,
    LoggingObserver, StaticDeviceDetails,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

const CHANNEL_CAPACITY: usize = 64;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Optional JSON configuration as the first argument
    let configuration = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => JsonConfiguration::load(&path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => JsonConfiguration::new(),
    };

    let device = StaticDeviceDetails::from_env();
    tracing::info!(
        locale = %device.locale,
        platform = %device.platform,
        "Analytics client starting"
    );

    let context = AnalyticsContextBuilder::new()
        .with_configuration(Arc::new(configuration))
        .with_device_details(Arc::new(device))
        .build();

    let (channel_observer, rx) = ChannelObserver::channel(CHANNEL_CAPACITY);
    let mut client = DefaultEventClient::new(Arc::new(context), true);
    client.add_event_observer(Arc::new(LoggingObserver));
    client.add_event_observer(Arc::new(channel_observer));
    client.add_global_attribute("source", "cli");

    let consumer = tokio::spawn(print_events(rx));

    let event = client
        .create_event("localeEvent")
        .context("failed to create event")?
        .with_metric("argc", std::env::args().count() as f64);
    client.record_event(&event);

    // Dropping the client closes the channel and ends the consumer.
    drop(client);
    let printed = consumer.await.context("event consumer panicked")?;
    tracing::info!(printed, "Analytics client finished");

    Ok(())
}

async fn print_events(mut rx: mpsc::Receiver<Arc<InternalEvent>>) -> usize {
    let mut printed = 0;
    while let Some(event) = rx.recv().await {
        println!("{}", event.to_json_string());
        printed += 1;
    }
    printed
}
