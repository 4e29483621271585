//! Profiler wiring
//!
//! Scopes are recorded through the `profiling` crate; which backend (if any)
//! receives them is picked by cargo feature.

/// Keeps the profiler backend alive. Dropping it stops serving.
#[derive(Default)]
pub struct Profiler {
    #[cfg(feature = "profile-with-puffin")]
    _server: Option<puffin_http::Server>,
}

/// Start the puffin HTTP server so `puffin_viewer` can attach
#[cfg(feature = "profile-with-puffin")]
pub fn start_profiler() -> Profiler {
    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&addr) {
        Ok(server) => {
            puffin::set_scopes_on(true);
            tracing::info!(%addr, "puffin server listening");
            Profiler { _server: Some(server) }
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not start puffin server");
            Profiler::default()
        }
    }
}

#[cfg(not(feature = "profile-with-puffin"))]
pub fn start_profiler() -> Profiler {
    Profiler::default()
}

/// Mark the end of a UI frame for the active profiler backend
pub fn finish_frame() {
    profiling::finish_frame!();
}
