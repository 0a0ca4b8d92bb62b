use super::Verb;

/// Counts derived from the verb collection. Recomputed from scratch on every
/// frame; nothing here is cached.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StudyProgress {
    pub total: usize,
    pub studied_count: usize,
    pub mastered_count: usize,
}

impl StudyProgress {
    pub fn from_verbs(verbs: &[Verb]) -> Self {
        Self {
            total: verbs.len(),
            studied_count: verbs.iter().filter(|v| v.is_studied()).count(),
            mastered_count: verbs.iter().filter(|v| v.is_mastered()).count(),
        }
    }

    pub fn studied_percentage(&self) -> f32 {
        percentage(self.studied_count, self.total)
    }

    pub fn mastered_percentage(&self) -> f32 {
        percentage(self.mastered_count, self.total)
    }
}

fn percentage(part: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    part as f32 / total as f32 * 100.0
}

/// Studied verbs, most studied first. Ties keep collection order.
pub fn studied_ranking(verbs: &[Verb]) -> Vec<&Verb> {
    let mut ranking: Vec<&Verb> = verbs.iter().filter(|v| v.is_studied()).collect();
    ranking.sort_by(|a, b| b.studied_count.cmp(&a.studied_count));
    ranking
}
