#[cfg(target_arch = "wasm32")]
thread_local! {
    static PERFORMANCE: Option<web_sys::Performance> =
        web_sys::window().and_then(|w| w.performance());
}

/// Milliseconds from the browser Performance API; 0.0 outside a browser.
#[cfg(target_arch = "wasm32")]
pub fn performance_now() -> f64 {
    PERFORMANCE.with(|perf| perf.as_ref().map(|p| p.now()).unwrap_or(0.0))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn performance_now() -> f64 {
    0.0
}

/// Run `f` and report how long it took, or 0.0 when no clock is available.
pub fn measure<F, T>(f: F) -> (T, f64)
where
    F: FnOnce() -> T,
{
    let start = performance_now();
    let result = f();
    (result, elapsed_since(start))
}

fn elapsed_since(start: f64) -> f64 {
    if start <= 0.0 {
        return 0.0;
    }
    let end = performance_now();
    if end >= start {
        end - start
    } else {
        0.0
    }
}
