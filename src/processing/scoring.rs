//! Weighted aggregation of category scores into the composite score

use crate::config::ScoringConfig;
use crate::processing::issues::Category;

impl ScoringConfig {
    pub fn weight(&self, category: Category) -> f32 {
        match category {
            Category::Formatting => self.formatting_weight,
            Category::Sections => self.sections_weight,
            Category::Keywords => self.keywords_weight,
            Category::Contact => self.contact_weight,
            Category::Bullets => self.bullets_weight,
        }
    }
}

/// Weighted mean of the category scores that are present.
///
/// Weights are renormalized over the supplied categories, so a partial
/// analysis still lands on the 0..=100 scale. Returns 0 when the supplied
/// categories carry no weight.
pub fn composite_score(scores: &[(Category, u8)], weights: &ScoringConfig) -> u8 {
    let (weighted, total_weight) = scores.iter().fold((0.0f32, 0.0f32), |(sum, total), (category, score)| {
        let weight = weights.weight(*category);
        (sum + *score as f32 * weight, total + weight)
    });

    if total_weight <= 0.0 {
        return 0;
    }

    (weighted / total_weight).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Category; 5] = [
        Category::Formatting,
        Category::Sections,
        Category::Keywords,
        Category::Contact,
        Category::Bullets,
    ];

    #[test]
    fn test_all_perfect_scores_give_100() {
        let scores: Vec<(Category, u8)> = ALL.iter().map(|c| (*c, 100)).collect();
        assert_eq!(composite_score(&scores, &ScoringConfig::default()), 100);
    }

    #[test]
    fn test_default_weighting() {
        let scores = [
            (Category::Formatting, 90),
            (Category::Sections, 50),
            (Category::Keywords, 70),
            (Category::Contact, 70),
            (Category::Bullets, 65),
        ];
        // 18 + 10 + 21 + 10.5 + 9.75 = 69.25
        assert_eq!(composite_score(&scores, &ScoringConfig::default()), 69);
    }

    #[test]
    fn test_partial_analysis_is_renormalized() {
        let scores = [(Category::Keywords, 80), (Category::Contact, 40)];
        // (80 * 0.30 + 40 * 0.15) / 0.45 = 66.67
        assert_eq!(composite_score(&scores, &ScoringConfig::default()), 67);
    }

    #[test]
    fn test_empty_or_weightless_is_zero() {
        assert_eq!(composite_score(&[], &ScoringConfig::default()), 0);

        let weights = ScoringConfig {
            formatting_weight: 0.0,
            ..ScoringConfig::default()
        };
        assert_eq!(composite_score(&[(Category::Formatting, 100)], &weights), 0);
    }
}
