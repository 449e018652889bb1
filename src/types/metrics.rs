/// Timing and size of the most recent move search
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchMetrics {
    pub last_search_duration_ms: f64,
    pub last_candidate_count: usize,
}

impl SearchMetrics {
    pub fn update_search(&mut self, duration: f64, candidate_count: usize) {
        if duration >= 0.0 {
            self.last_search_duration_ms = duration;
        }
        self.last_candidate_count = candidate_count;
    }
}
