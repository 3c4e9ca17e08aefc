/// Milliseconds on the host clock: `Date.now()` in the browser
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::sync::OnceLock;
        use std::time::Instant;

        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }
}

/// Tick stopwatch split into phases.
///
/// `lap` closes the current phase and opens the next; `total_ms` covers
/// everything since `start`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    started_ms: f64,
    lap_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let now = now_ms();
        PerfTimer { started_ms: now, lap_ms: now }
    }

    /// Milliseconds since the previous lap (or `start`)
    pub(crate) fn lap(&mut self) -> f64 {
        let now = now_ms();
        let phase = (now - self.lap_ms).max(0.0);
        self.lap_ms = now;
        phase
    }

    pub(crate) fn total_ms(&self) -> f64 {
        (now_ms() - self.started_ms).max(0.0)
    }
}
