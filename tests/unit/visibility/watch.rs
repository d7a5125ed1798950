use super::*;

fn cfg(threshold: f64, once: bool) -> WatchConfig {
    WatchConfig {
        threshold,
        once,
        ..WatchConfig::default()
    }
}

/// Feeds ratios, settling after each firing; returns the number of firings.
fn drive(state: &mut WatchState, config: &WatchConfig, ratios: &[f64]) -> usize {
    let mut fired = 0;
    for &r in ratios {
        if state.observe(r, config) == Transition::Fired {
            fired += 1;
            state.settle(config);
        }
    }
    fired
}

#[test]
fn defaults() {
    let c = WatchConfig::default();
    assert_eq!(c.threshold, 0.15);
    assert!(c.once);
    assert_eq!(c.marker, "animate-item");
    assert!(c.validate().is_ok());
}

#[test]
fn threshold_must_be_in_unit_interval() {
    for bad in [0.0, -0.1, 1.01, f64::NAN] {
        assert!(cfg(bad, true).validate().is_err(), "{bad}");
    }
    assert!(cfg(1.0, true).validate().is_ok());
    assert!(WatchConfig::default().with_marker(" ").validate().is_err());
}

#[test]
fn unarmed_ignores_observations() {
    let mut s = WatchState::default();
    assert_eq!(s.observe(1.0, &cfg(0.2, true)), Transition::Stay);
    assert_eq!(s, WatchState::Unarmed);
}

#[test]
fn arm_only_from_unarmed() {
    let mut s = WatchState::Unarmed;
    assert_eq!(s.arm(), Transition::Armed);
    assert_eq!(s, WatchState::Watching { inside: false });
    assert_eq!(s.arm(), Transition::Stay);
    s.dispose();
    assert_eq!(s.arm(), Transition::Stay);
    assert_eq!(s, WatchState::Disposed);
}

#[test]
fn once_fires_a_single_time_across_reentries() {
    let config = cfg(0.2, true);
    let mut s = WatchState::Unarmed;
    s.arm();
    let fired = drive(&mut s, &config, &[0.0, 0.1, 0.3, 0.0, 0.5, 1.0, 0.0, 0.9]);
    assert_eq!(fired, 1);
    assert_eq!(s, WatchState::Disposed);
}

#[test]
fn repeating_fires_on_each_entry_never_on_exit() {
    let config = cfg(0.2, false);
    let mut s = WatchState::Unarmed;
    s.arm();
    assert_eq!(drive(&mut s, &config, &[0.5]), 1);
    assert_eq!(s, WatchState::Watching { inside: true });
    // staying inside and leaving do not fire
    assert_eq!(drive(&mut s, &config, &[0.6, 0.9, 0.19, 0.0]), 0);
    assert_eq!(drive(&mut s, &config, &[0.25, 0.1, 0.2]), 2);
}

#[test]
fn threshold_is_inclusive() {
    let config = cfg(0.5, true);
    let mut s = WatchState::Unarmed;
    s.arm();
    assert_eq!(s.observe(0.5, &config), Transition::Fired);
}

#[test]
fn fired_ignores_observations_until_settled() {
    let config = cfg(0.2, false);
    let mut s = WatchState::Unarmed;
    s.arm();
    assert_eq!(s.observe(1.0, &config), Transition::Fired);
    assert_eq!(s, WatchState::Fired);
    assert_eq!(s.observe(0.0, &config), Transition::Stay);
    assert_eq!(s.observe(1.0, &config), Transition::Stay);
    assert_eq!(s.settle(&config), Transition::Stay);
    assert_eq!(s, WatchState::Watching { inside: true });
}

#[test]
fn once_settles_into_disposed() {
    let config = cfg(0.2, true);
    let mut s = WatchState::Unarmed;
    s.arm();
    s.observe(1.0, &config);
    assert_eq!(s.settle(&config), Transition::Disposed);
    assert_eq!(s.settle(&config), Transition::Stay);
}

#[test]
fn dispose_from_watching_without_firing() {
    let mut s = WatchState::Unarmed;
    s.arm();
    assert_eq!(s.dispose(), Transition::Disposed);
    assert_eq!(s.dispose(), Transition::Stay);
    assert_eq!(s.observe(1.0, &cfg(0.1, true)), Transition::Stay);
}
