/// In-memory topic frequency table, scoped to one session.
///
/// Entries keep first-insertion order so that `top_n` ties resolve stably;
/// counts only ever increment. The table is small (one entry per distinct
/// topic keyword), so a linear scan beats a hash map here.
#[derive(Debug, Default, Clone)]
pub struct TopicTracker {
    counts: Vec<(String, u32)>,
}

impl TopicTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add 1 to the topic's count, creating it at 1 if absent
    pub fn increment(&mut self, topic: &str) {
        match self.counts.iter_mut().find(|(t, _)| t == topic) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((topic.to_string(), 1)),
        }
    }

    /// Topics sorted by count descending, ties stable on first-insertion
    /// order, truncated to `limit`
    pub fn top_n(&self, limit: usize) -> Vec<(String, u32)> {
        let mut ranked = self.counts.clone();
        // sort_by is stable, so equal counts keep insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
