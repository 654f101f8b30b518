use crate::club::player::Player;

/// First-team promotion gates for academy prospects.
#[derive(Debug, Clone, Copy)]
pub struct PromotionRules {
    pub promotion_age: u8,
    pub min_ability: f32,
    pub min_potential: f32,
}

impl Default for PromotionRules {
    fn default() -> Self {
        PromotionRules {
            promotion_age: 18,
            min_ability: 55.0,
            min_potential: 65.0,
        }
    }
}

/// An academy player: a regular player record tagged with the year it joined
/// the intake. Current ability sits below first-team level; potential is the
/// interesting number.
#[derive(Debug, Clone)]
pub struct YouthProspect {
    pub player: Player,
    pub entry_year: i32,
}

impl YouthProspect {
    pub fn is_promotion_candidate(&self, rules: &PromotionRules) -> bool {
        self.player.age >= rules.promotion_age
            && self.player.overall_rating >= rules.min_ability
            && self.player.potential >= rules.min_potential
    }
}

/// Prospects clearing every gate, strongest potential first. Callers take the
/// head of the list when an annual promotion quota applies.
pub fn promotion_candidates<'p>(
    prospects: &'p [YouthProspect],
    rules: &PromotionRules,
) -> Vec<&'p YouthProspect> {
    let mut candidates: Vec<&YouthProspect> = prospects
        .iter()
        .filter(|p| p.is_promotion_candidate(rules))
        .collect();

    candidates.sort_by(|a, b| {
        b.player
            .potential
            .partial_cmp(&a.player.potential)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    candidates
}
