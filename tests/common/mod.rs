//! Shared setup for Pact contract tests.

use std::sync::Once;

static RUSTLS_INIT: Once = Once::new();

/// Install the ring crypto provider before the first TLS connection.
///
/// rustls 0.23 requires an explicit default provider when none is selected
/// via features; this must run before any async operation that uses rustls.
pub fn init_rustls() {
    RUSTLS_INIT.call_once(|| {
        rustls::crypto::ring::default_provider()
            .install_default()
            .expect("Failed to install rustls crypto provider");
    });
}
