use crate::models::resume::ExperienceLevel;

/// Points per listed skill, up to [`MAX_SKILL_POINTS`].
const POINTS_PER_SKILL: usize = 8;
const MAX_SKILL_POINTS: usize = 60;
/// Fixed presentation component. Kept constant so equal inputs score equally.
const FORMAT_POINTS: usize = 25;

/// Résumé fitness score in [0, 100]: skill component plus format component.
pub fn score(skill_count: usize) -> u8 {
    let total = skill_component(skill_count) + FORMAT_POINTS;
    total.min(100) as u8
}

fn skill_component(skill_count: usize) -> usize {
    skill_count.saturating_mul(POINTS_PER_SKILL).min(MAX_SKILL_POINTS)
}

/// Experience level from skill count: >10 Senior, >7 Intermediate, else Junior.
pub fn experience_level(skill_count: usize) -> ExperienceLevel {
    if skill_count > 10 {
        ExperienceLevel::Senior
    } else if skill_count > 7 {
        ExperienceLevel::Intermediate
    } else {
        ExperienceLevel::Junior
    }
}

/// Match confidence derived from the score, kept within 85–95.
pub fn match_confidence(score: u8) -> u8 {
    score.saturating_add(5).clamp(85, 95)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_skills_scores_format_only() {
        assert_eq!(skill_component(0), 0);
        assert_eq!(score(0), 25);
    }

    #[test]
    fn test_skill_component_saturates_at_eight() {
        assert_eq!(skill_component(7), 56);
        assert_eq!(skill_component(8), 60);
        assert_eq!(skill_component(50), 60);
        assert_eq!(score(8), 85);
    }

    #[test]
    fn test_score_always_bounded() {
        for count in [0, 1, 5, 8, 100, usize::MAX] {
            assert!(score(count) <= 100);
        }
    }

    #[test]
    fn test_experience_thresholds() {
        assert_eq!(experience_level(0), ExperienceLevel::Junior);
        assert_eq!(experience_level(7), ExperienceLevel::Junior);
        assert_eq!(experience_level(8), ExperienceLevel::Intermediate);
        assert_eq!(experience_level(10), ExperienceLevel::Intermediate);
        assert_eq!(experience_level(11), ExperienceLevel::Senior);
    }

    #[test]
    fn test_match_confidence_range() {
        assert_eq!(match_confidence(0), 85);
        assert_eq!(match_confidence(85), 90);
        assert_eq!(match_confidence(100), 95);
        assert_eq!(match_confidence(u8::MAX), 95);
    }
}
