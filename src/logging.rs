use once_cell::sync::OnceCell;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceCell<()> = OnceCell::new();

/// Installs the stderr subscriber once. `RUST_LOG` wins when set; otherwise
/// warnings only, or everything down to `trace` when `debug` is on.
pub fn init(debug: bool) {
    INIT.get_or_init(|| {
        let default = if debug { Level::TRACE } else { Level::WARN };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default.as_str().to_ascii_lowercase()));
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init();
    });
}
