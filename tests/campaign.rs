// tests/campaign.rs
#![cfg(feature = "genre-city")]
use idle_sim::config::{EconomyConfig, SimConfig};
use idle_sim::genres::city::run_campaign;
use idle_sim::genres::report::Termination;
use idle_sim::mechanics::experience_gain;
use idle_sim::systems::economy::{CityLevel, build_generators};
use idle_sim::systems::research::Research;
use idle_sim::systems::reset_prestige::{Phase, Prestige, PrestigeParams};
use idle_sim::systems::sdk::{Hook, PurchaseEvent, ResetEvent};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Tally {
    purchases: u64,
    resets: Vec<(CityLevel, f64)>,
    finished: u32,
}

struct Recorder(Rc<RefCell<Tally>>);

impl Hook for Recorder {
    fn on_purchase(&mut self, _ev: &PurchaseEvent<'_>) -> idle_sim::Result<()> {
        self.0.borrow_mut().purchases += 1;
        Ok(())
    }
    fn on_reset(&mut self, ev: &ResetEvent) {
        self.0.borrow_mut().resets.push((ev.city_level, ev.experience));
    }
    fn on_finish(&mut self) -> idle_sim::Result<()> {
        self.0.borrow_mut().finished += 1;
        Ok(())
    }
}

fn recorded() -> (Rc<RefCell<Tally>>, Vec<Box<dyn Hook>>) {
    let tally = Rc::new(RefCell::new(Tally::default()));
    let hooks: Vec<Box<dyn Hook>> = vec![Box::new(Recorder(Rc::clone(&tally)))];
    (tally, hooks)
}

/* ──────────────────────────────────────────────────────────────────────────
1) Prestige controller: the reset transition
────────────────────────────────────────────────────────────────────────── */

#[test]
fn reset_banks_experience_and_rebuilds_the_roster() {
    let cfg = EconomyConfig::default();
    let mut p = Prestige::new(cfg.clone(), PrestigeParams::default(), Research::default());
    let mut hooks: Vec<Box<dyn Hook>> = Vec::new();
    let mut ticks = 0u64;
    // Past the farm's level-25 upgrade, far from the completion level.
    while p.economy().generators[0].level() <= 25 {
        assert_eq!(p.advance(&mut hooks).unwrap(), Phase::Running);
        ticks += 1;
        assert!(ticks < 200_000, "farm never passed level 25");
    }
    assert!(p.economy().generators[0].base_gain() > 0.1 * 2.9);
    let all_gain = p.economy().all_gain;

    let ev = p.reset(&mut hooks).unwrap();
    assert_eq!(ev.ticks, ticks);
    assert_eq!(p.history(), &[ticks][..]);
    assert_eq!(p.total_ticks(), ticks);
    assert!((p.experience() - (20.0 + experience_gain(all_gain))).abs() < 1e-12);
    assert_eq!(p.economy().resource, 0.0);
    assert_eq!(p.economy().tick, 0);
    assert_eq!(p.city_level(), CityLevel::Village);

    let fresh = build_generators(
        cfg.gain_growth,
        cfg.cost_growth,
        cfg.base_gain,
        cfg.base_cost,
        &cfg.cost_factors,
        &cfg.upgrades,
    );
    for (g, base) in p.economy().generators.iter().zip(&fresh) {
        assert_eq!(g.level(), 0);
        assert_eq!(g.base_gain(), base.base_gain(), "upgrade survived the reset");
    }
}

#[test]
fn reset_is_deferred_to_the_next_purchase() {
    // Two generators, done at inn level 1; a tiny experience makes the yield
    // condition turn true a while after the inn was bought.
    let cfg = EconomyConfig {
        cost_factors: vec![1.1, 1.1],
        upgrades: vec![vec![], vec![]],
        ..EconomyConfig::default()
    };
    let params = PrestigeParams { start_experience: 2e-3, target_experience: 1e9, completion_level: 1 };
    let mut p = Prestige::new(cfg, params, Research::default());
    let (tally, mut hooks) = recorded();

    let mut deferred_ticks = 0u32;
    for _ in 0..100_000 {
        let bought_before = tally.borrow().purchases;
        p.advance(&mut hooks).unwrap();
        let bought = tally.borrow().purchases > bought_before;
        if !p.history().is_empty() {
            assert!(bought, "reset on a tick without purchase");
            break;
        }
        let due = p.economy().top_level() >= 1
            && experience_gain(p.economy().all_gain) >= p.experience();
        if due {
            assert!(!bought);
            assert!(!p.should_reset(false));
            assert!(p.should_reset(true));
            deferred_ticks += 1;
        }
    }
    assert_eq!(p.history().len(), 1);
    assert!(deferred_ticks > 0, "the reset was never due before a purchase");
}

#[test]
fn reset_needs_a_finished_run() {
    let p = Prestige::new(EconomyConfig::default(), PrestigeParams::default(), Research::default());
    assert!(!p.should_reset(false));
    assert!(!p.should_reset(true));
}

#[test]
fn reset_after_the_target_changes_nothing() {
    let params = PrestigeParams { start_experience: 1e9, ..PrestigeParams::default() };
    let mut p = Prestige::new(EconomyConfig::default(), params, Research::default());
    let mut hooks: Vec<Box<dyn Hook>> = Vec::new();
    assert_eq!(p.phase(), Phase::Done);
    assert!(p.reset(&mut hooks).is_none());
    assert_eq!(p.advance(&mut hooks).unwrap(), Phase::Done);
    assert!(p.history().is_empty());
    assert_eq!(p.experience(), 1e9);
}

#[test]
fn promotion_zeroes_experience_and_adds_infrastructure() {
    let params = PrestigeParams { start_experience: 1_500.0, ..PrestigeParams::default() };
    let mut p = Prestige::new(EconomyConfig::default(), params, Research::default());
    let mut hooks: Vec<Box<dyn Hook>> = Vec::new();
    p.advance(&mut hooks).unwrap();
    let ev = p.reset(&mut hooks).unwrap();
    assert_eq!(ev.city_level, CityLevel::Town);
    assert_eq!(p.experience(), 0.0);
    assert_eq!(p.economy().infrastructure.len(), 3);
}

#[test]
fn town_reset_settles_affordable_research() {
    let params = PrestigeParams { start_experience: 5e4, ..PrestigeParams::default() };
    let research = Research::from_choices(&[0, 1, 2, -1, 1]);
    let mut p = Prestige::new(EconomyConfig::default(), params, research)
        .with_city_level(CityLevel::Town);
    let mut hooks: Vec<Box<dyn Hook>> = Vec::new();
    p.advance(&mut hooks).unwrap();
    p.reset(&mut hooks).unwrap();

    assert_eq!(p.city_level(), CityLevel::Town);
    assert!((p.locked_experience() - 2.5e4).abs() < 1e-9);
    assert_eq!(p.research().markers(), [Some(-1), Some(-1), Some(2), None, Some(1)]);
    // Reserved experience no longer feeds the multiplier.
    assert!(p.experience_multiplier() < idle_sim::mechanics::experience_multiplier(p.experience(), 0.0));
    // Town infrastructure ignores variants; generator bonuses apply at once.
    assert_eq!(p.economy().infrastructure[0].cost_factor(), 1.6);
    assert!((p.economy().generators[0].mult - 1.5).abs() < 1e-12);
    assert!((p.economy().generators[0].boni - 1.5).abs() < 1e-12);
}

#[test]
fn metropolis_reset_settles_research() {
    let params = PrestigeParams { start_experience: 1e6, ..PrestigeParams::default() };
    let research = Research::from_choices(&[0, 1, 2, -1, 1]);
    let mut p = Prestige::new(EconomyConfig::default(), params, research)
        .with_city_level(CityLevel::Metropolis);
    let mut hooks: Vec<Box<dyn Hook>> = Vec::new();
    p.advance(&mut hooks).unwrap();
    p.reset(&mut hooks).unwrap();

    assert_eq!(p.research().researched_count(), 4);
    assert!((p.locked_experience() - 625_000.0).abs() < 1e-6);
    assert_eq!(p.economy().infrastructure[0].cost_factor(), 1.55);
    assert!((p.economy().generators[0].mult - 2.0).abs() < 1e-12);
}

/* ──────────────────────────────────────────────────────────────────────────
2) City campaign: end to end
────────────────────────────────────────────────────────────────────────── */

#[test]
fn campaign_reaches_the_target() {
    let (tally, hooks) = recorded();
    let out = run_campaign(&SimConfig::default(), hooks).unwrap();

    assert_eq!(out.termination, Termination::Completed);
    assert!(out.experience >= 1e9);
    assert_eq!(out.city_level, CityLevel::Metropolis);
    assert!(!out.history.is_empty());
    assert!(out.history.iter().all(|&t| t > 0));
    assert_eq!(out.history.iter().sum::<u64>(), out.total_ticks);

    let tally = tally.borrow();
    assert_eq!(tally.resets.len(), out.history.len());
    assert_eq!(tally.finished, 1);
    assert!(tally.purchases > 0);
    // Experience only drops on promotion.
    for pair in tally.resets.windows(2) {
        let ((c0, e0), (c1, e1)) = (pair[0], pair[1]);
        if c0 == c1 {
            assert!(e1 >= e0, "experience fell within city {c0}: {e0} -> {e1}");
        }
    }
    let summary = out.summary().unwrap();
    assert_eq!(summary.ticks, out.total_ticks);
    assert_eq!(summary.entries, out.history.len());
}

#[test]
fn campaign_already_at_target_does_nothing() {
    let mut cfg = SimConfig::default();
    cfg.campaign.start_experience = 1e9;
    let (tally, hooks) = recorded();
    let out = run_campaign(&cfg, hooks).unwrap();
    assert_eq!(out.termination, Termination::Completed);
    assert!(out.history.is_empty());
    assert_eq!(out.total_ticks, 0);
    assert!(out.summary().is_none());
    assert_eq!(tally.borrow().finished, 1);
}

#[test]
fn campaign_stops_on_tick_budget() {
    let mut cfg = SimConfig::default();
    cfg.campaign.max_total_ticks = Some(1_000);
    let out = run_campaign(&cfg, Vec::new()).unwrap();
    assert_eq!(out.termination, Termination::TickBudget { ticks: 1_000 });
    assert!(out.history.is_empty());
    assert_eq!(out.total_ticks, 1_000);
    assert!(out.experience >= 20.0);
}

#[test]
fn campaign_rejects_invalid_config() {
    let mut cfg = SimConfig::default();
    cfg.economy.cost_factors.clear();
    assert!(run_campaign(&cfg, Vec::new()).is_err());
}
