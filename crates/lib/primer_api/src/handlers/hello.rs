//! Root endpoint — bootstrap greeting.

/// `GET /` — plain-text greeting with the core crate version.
pub async fn hello_world() -> String {
    primer_core::hello::hello_world()
}
