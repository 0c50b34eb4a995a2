pub mod analytics;
pub mod locale;

pub use analytics::{AnalyticsEvent, AnalyticsSink, ConsentGate, NullSink, TracingSink};
pub use locale::{EnvLocale, LocaleProvider, StaticLocale};
