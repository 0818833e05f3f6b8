use std::collections::VecDeque;

/// Block glyphs used for sparklines, lowest to highest.
const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Rolling history of CPU usage samples, used by the CPU graph.
#[derive(Debug, Clone)]
pub struct CpuHistory {
    samples:  VecDeque<f32>,
    capacity: usize,
}

impl CpuHistory {
    /// A zero capacity is bumped to one so the latest sample is always kept.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::new(),
            capacity,
        }
    }

    /// Push a new sample, evicting the oldest if at capacity.
    pub fn push(&mut self, value: f32) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn latest(&self) -> Option<f32> {
        self.samples.back().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Average of all samples in the history window.
    pub fn average(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f32>() / self.samples.len() as f32
    }

    /// One block glyph per sample, scaled against 100%.
    pub fn sparkline(&self) -> String {
        self.samples
            .iter()
            .map(|v| {
                let level = (v.clamp(0.0, 100.0) / 100.0 * (BARS.len() - 1) as f32).round();
                BARS[level as usize]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_sample() {
        let mut history = CpuHistory::new(2);
        history.push(10.0);
        history.push(20.0);
        history.push(30.0);

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest(), Some(30.0));
        assert_eq!(history.average(), 25.0);
    }

    #[test]
    fn sparkline_scales_to_blocks() {
        let mut history = CpuHistory::new(3);
        history.push(0.0);
        history.push(100.0);
        history.push(250.0);

        assert_eq!(history.sparkline(), "▁██");
    }

    #[test]
    fn huge_capacity_allocates_lazily() {
        let mut history = CpuHistory::new(usize::MAX);
        history.push(5.0);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn zero_capacity_keeps_one() {
        let mut history = CpuHistory::new(0);
        history.push(1.0);
        history.push(2.0);
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), Some(2.0));
    }
}
