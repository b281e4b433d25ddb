use std::sync::OnceLock;
use tracing::debug;

/// `sslmode` requested by every connection URI, the transport must be encrypted
pub const SSL_MODE: &str = "require";

static CRYPTO_PROVIDER_INIT: OnceLock<()> = OnceLock::new();

/// Ensure the rustls crypto provider is initialized
///
/// Safe to call multiple times, initialization only happens once. A provider
/// installed by someone else beforehand is kept.
pub fn ensure_crypto_provider() {
    CRYPTO_PROVIDER_INIT.get_or_init(|| {
        if rustls::crypto::ring::default_provider()
            .install_default()
            .is_err()
        {
            debug!("rustls crypto provider already installed");
        }
    });
}
