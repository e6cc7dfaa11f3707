//! Integration test: stat checker -> pre-engrave -> zone ranking
//!
//! Walks the worked two-weapon scenario through the public API.

use essence_core::{
    calculate_drop_chance, compute_optimal_pre_engrave, evaluate_candidates, rank_zones,
    score_query, Catalog, FixedStatType, MatchLevel, QueryMatches, RankingWeights, SecondaryStat,
    StatQuery, Weapon, WeaponType, Zone,
};

fn weapon(name: &str, primary: &str, secondary: Option<&str>, skill: &str) -> Weapon {
    Weapon {
        name: name.to_string(),
        rarity: 6,
        weapon_type: WeaponType::Sword,
        primary_attr: primary.into(),
        secondary_stat: secondary.map(SecondaryStat::from),
        skill_stat: skill.into(),
    }
}

fn zone(id: &str, secondary: &[&str], skill: &[&str]) -> Zone {
    Zone {
        id: id.to_string(),
        name: id.to_string(),
        region: "Valley IV".to_string(),
        enemy: "Enemy".to_string(),
        secondary_stats: secondary.iter().map(|&s| s.into()).collect(),
        skill_stats: skill.iter().map(|&s| s.into()).collect(),
    }
}

fn weapon_a() -> Weapon {
    weapon("A", "Strength", Some("Atk Boost"), "Pursuit")
}

fn weapon_b() -> Weapon {
    weapon("B", "Agility", Some("Atk Boost"), "Infliction")
}

fn catalog() -> Catalog {
    Catalog {
        primary_attrs: vec!["Strength".into(), "Agility".into(), "Will".into()],
        secondary_stats: vec!["Atk Boost".into(), "HP Boost".into(), "Crit Rate".into()],
        skill_stats: vec!["Pursuit".into(), "Infliction".into(), "Flow".into()],
        weapons: vec![weapon_a(), weapon_b()],
        zones: vec![
            zone("no_pursuit", &["Atk Boost", "HP Boost"], &["Infliction", "Flow"]),
            zone("pursuit_only", &["HP Boost", "Crit Rate"], &["Pursuit", "Flow"]),
            zone("both", &["HP Boost"], &["Pursuit", "Infliction"]),
        ],
    }
}

#[test]
fn test_checker_primary_only() {
    let catalog = catalog();
    assert!(catalog.validate().is_ok());

    let results = score_query(&StatQuery::new().with_primary("Strength"), catalog.weapons());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].weapon.name, "A");
    assert_eq!((results[0].match_count, results[0].total), (1, 1));

    let matches = QueryMatches::from_results(results);
    assert_eq!(matches.perfect.len(), 1);
    assert!(matches.partial.is_empty());
}

#[test]
fn test_pre_engrave_scenario() {
    let weapons = vec![weapon_a(), weapon_b()];
    let weights = RankingWeights::default();

    let candidates = evaluate_candidates(&weapons[0], &weapons, &weights);
    assert_eq!(candidates[0].score, 11);
    assert_eq!(candidates[1].score, 10);

    let config = compute_optimal_pre_engrave(&weapons[0], &weapons, &weights);
    assert_eq!(config.fixed_stat_type(), FixedStatType::Secondary);
    assert_eq!(config.fixed_stat(), "Atk Boost");
}

#[test]
fn test_ranking_scenario() {
    let catalog = catalog();
    let weapons = vec![weapon_a(), weapon_b()];
    let weights = RankingWeights::default();
    let config = compute_optimal_pre_engrave(&weapons[0], &weapons, &weights);

    let rankings = rank_zones(&weapons[0], &weapons, catalog.zones(), &config, &weights);
    let ids: Vec<_> = rankings.iter().map(|r| r.zone.id.as_str()).collect();
    assert_eq!(ids, vec!["both", "pursuit_only"]);

    // Both weapons perfect: 10*3 + 1*3
    assert_eq!(rankings[0].score, 33);
    assert_eq!(rankings[0].perfect_count, 2);

    // B keeps its locked secondary but cannot roll Infliction: one stat short.
    // That makes B "good" (weight 2), so this zone scores 32 rather than the
    // 31 a primary-only B would give.
    let b = &rankings[1].weapon_matches[1];
    assert_eq!(b.weapon, "B");
    assert_eq!(b.level, MatchLevel::Good);
    assert_eq!(rankings[1].score, 10 * 3 + 2);

    for ranking in &rankings {
        assert_eq!(ranking.weapon_matches[0].level, MatchLevel::Perfect);
    }
}

#[test]
fn test_chance_breakdown_in_rankings() {
    let catalog = catalog();
    let weapons = vec![weapon_a(), weapon_b()];
    let weights = RankingWeights::default();
    let config = compute_optimal_pre_engrave(&weapons[0], &weapons, &weights);

    let rankings = rank_zones(&weapons[0], &weapons, catalog.zones(), &config, &weights);
    for ranking in &rankings {
        for w in &weapons {
            let direct = calculate_drop_chance(w, &ranking.zone, &config);
            assert_eq!(ranking.weapon_chances[&w.name], direct);
        }
    }

    let pursuit_only = &rankings[1];
    assert_eq!(pursuit_only.weapon_chances["B"].chance, 0.0);
}

#[test]
fn test_no_viable_zone_is_empty() {
    let weapons = vec![weapon("P", "Will", Some("HP Boost"), "Assault")];
    let zones = vec![zone("z", &["HP Boost"], &["Pursuit"])];
    let config = compute_optimal_pre_engrave(&weapons[0], &weapons, &RankingWeights::default());

    // Locking HP Boost cannot help when no zone rolls Assault
    assert!(rank_zones(&weapons[0], &weapons, &zones, &config, &RankingWeights::default()).is_empty());
}
