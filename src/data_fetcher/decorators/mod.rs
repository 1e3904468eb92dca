pub mod logging;
pub mod observable;

pub use logging::LoggingClient;
pub use observable::{
    CacheMetricsObserver, DataEvent, DataObserver, LoggingObserver, ObservableClient,
};
