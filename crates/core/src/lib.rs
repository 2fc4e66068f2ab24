pub mod booking;
pub mod config;
pub mod metrics;
pub mod notifier;
pub mod session;
pub mod testing;

pub use booking::{
    validate_user_input, BookingError, BookingRecord, BookingRequest, BookingStore,
    ValidationFailure, ValidationOutcome,
};
pub use config::{
    load_config, load_config_from_str, load_default_config, validate_config, ConferenceConfig,
    Config, ConfigError, MetricsConfig, NotifierConfig,
};
pub use metrics::encode_metrics;
pub use notifier::{
    render_banner, ConsoleNotifier, DrainReport, NotificationScope, Notifier, NotifyError,
    TicketNotice,
};
pub use session::{Session, SessionEnd, SessionError, SessionSummary, TokenReader};
