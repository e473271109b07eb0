use brain_core::assets::AssetManifest;
use brain_core::loading::{DisplayPercent, LoadOutcome, LoadProgress};

#[test]
fn percent_reaches_100_only_when_all_settled() {
    let total = AssetManifest::default().len() as u32;
    let mut p = LoadProgress::new(total);
    let mut last = p.percent();
    assert_eq!(last, 0);
    for i in 0..total {
        let outcome = if i % 4 == 3 {
            LoadOutcome::Failed
        } else {
            LoadOutcome::Loaded
        };
        assert!(p.record(outcome));
        let pct = p.percent();
        assert!(pct >= last);
        assert_eq!(pct == 100, p.is_complete());
        last = pct;
    }
    assert_eq!(p.percent(), 100);
    assert_eq!(p.loaded() + p.failed(), total);
    assert!(p.failed() > 0);
}

#[test]
fn nine_of_ten_is_not_complete() {
    let mut p = LoadProgress::new(10);
    for _ in 0..9 {
        p.record(LoadOutcome::Loaded);
    }
    assert_eq!(p.percent(), 90);
    assert!(!p.is_complete());
}

#[test]
fn extra_callbacks_are_ignored() {
    let mut p = LoadProgress::new(2);
    p.record(LoadOutcome::Loaded);
    p.record(LoadOutcome::Failed);
    assert!(!p.record(LoadOutcome::Loaded));
    assert_eq!(p.settled(), 2);
    assert_eq!(p.percent(), 100);
}

#[test]
fn display_chases_target_without_overshoot() {
    let mut d = DisplayPercent::default();
    assert_eq!(d.step(100), 20);
    assert_eq!(d.step(100), 36);
    let mut last = d.shown();
    let mut ticks = 2;
    while !d.is_full() {
        let v = d.step(100);
        assert!(v > last && v <= 100);
        last = v;
        ticks += 1;
        assert!(ticks < 100);
    }
    // target below the readout never moves it back
    assert_eq!(d.step(40), 100);
}

#[test]
fn display_steps_by_one_near_target() {
    let mut d = DisplayPercent::default();
    assert_eq!(d.step(3), 1);
    assert_eq!(d.step(3), 2);
    assert_eq!(d.step(3), 3);
    assert_eq!(d.step(3), 3);
}
