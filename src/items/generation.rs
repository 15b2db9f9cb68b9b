use super::templates::{templates_for, ItemTemplate};
use super::types::{EquipmentSlot, Item, Rarity};
use crate::character::stats::{StatType, Stats};
use rand::seq::SliceRandom;
use rand::Rng;

/// Spends `budget` points one at a time on uniformly chosen stats from
/// `allowed`. Each point adds that stat's weight; totals are rounded at the end.
pub fn distribute_budget(budget: u32, allowed: &[StatType], rng: &mut impl Rng) -> Stats {
    let mut totals = [0.0_f64; crate::character::stats::STAT_COUNT];
    if allowed.is_empty() {
        return Stats::new();
    }

    for _ in 0..budget {
        let stat = allowed[rng.gen_range(0..allowed.len())];
        totals[stat.index()] += stat.point_weight();
    }

    let mut stats = Stats::new();
    for stat in StatType::ALL {
        stats.set(stat, totals[stat.index()].round() as u32);
    }
    stats
}

/// Rolls an item of `rarity` from `template` with the given stat budget.
pub fn generate_from_template(
    template: &ItemTemplate,
    rarity: Rarity,
    budget: u32,
    rng: &mut impl Rng,
) -> Item {
    let bonuses = distribute_budget(budget, template.allowed_stats, rng);
    let prefix = rarity.prefixes().choose(rng).copied().unwrap_or("Plain");

    Item {
        name: format!("{} {}", prefix, template.name),
        icon: template.icon.to_string(),
        slot: template.slot,
        rarity,
        bonuses,
        cost: None,
        weapon_type: template.weapon_type,
        two_handed: template.two_handed,
    }
}

/// Picks a uniformly random template for `slot`.
pub fn roll_template(slot: EquipmentSlot, rng: &mut impl Rng) -> Option<&'static ItemTemplate> {
    templates_for(slot).choose(rng).copied()
}

pub fn roll_random_slot(rng: &mut impl Rng) -> EquipmentSlot {
    EquipmentSlot::ALL[rng.gen_range(0..EquipmentSlot::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::templates::ITEM_TEMPLATES;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_single_stat_budget_is_exact() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let stats = distribute_budget(6, &[StatType::Strength], &mut rng);
        assert_eq!(stats.get(StatType::Strength), 6);
        assert_eq!(stats.iter_nonzero().count(), 1);
    }

    #[test]
    fn test_weighted_budget_uses_point_weight() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let stats = distribute_budget(4, &[StatType::MaxHp], &mut rng);
        assert_eq!(stats.get(StatType::MaxHp), 20);
    }

    #[test]
    fn test_fractional_weights_round_to_nearest() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        // 3 points * 0.5 = 1.5, rounds away from zero
        let stats = distribute_budget(3, &[StatType::CritRate], &mut rng);
        assert_eq!(stats.get(StatType::CritRate), 2);
        // 1 point * 0.25 = 0.25, rounds to zero and disappears from the sparse view
        let stats = distribute_budget(1, &[StatType::Lifesteal], &mut rng);
        assert!(stats.is_empty());
    }

    #[test]
    fn test_only_allowed_stats_receive_points() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let allowed = [StatType::Dexterity, StatType::Evasion];
        for _ in 0..50 {
            let stats = distribute_budget(12, &allowed, &mut rng);
            for (stat, _) in stats.iter_nonzero() {
                assert!(allowed.contains(&stat), "{:?} was not allowed", stat);
            }
        }
    }

    #[test]
    fn test_empty_allowed_list_yields_no_stats() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(distribute_budget(10, &[], &mut rng).is_empty());
    }

    #[test]
    fn test_generate_from_template_names_item() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let template = &ITEM_TEMPLATES[0];
        let item = generate_from_template(template, Rarity::Rare, 5, &mut rng);

        assert!(item.name.ends_with(template.name));
        let prefix = item.name.trim_end_matches(template.name).trim_end();
        assert!(Rarity::Rare.prefixes().contains(&prefix));
        assert_eq!(item.slot, template.slot);
        assert_eq!(item.weapon_type, template.weapon_type);
        assert!(item.cost.is_none());
    }

    #[test]
    fn test_roll_random_slot_all_slots_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(roll_random_slot(&mut rng));
        }
        assert_eq!(seen.len(), EquipmentSlot::ALL.len());
    }

    #[test]
    fn test_roll_template_matches_slot() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for slot in EquipmentSlot::ALL {
            let template = roll_template(slot, &mut rng).expect("template for slot");
            assert_eq!(template.slot, slot);
        }
    }
}
