use on_the_line::Problem;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn generated_problems_respect_all_ranges() {
    let mut rng = seeded(7);
    for _ in 0..10_000 {
        let p = Problem::generate(&mut rng);
        assert_ne!(p.slope, 0);
        assert!((-5..=5).contains(&p.slope), "slope {}", p.slope);
        assert!((-8..=8).contains(&p.intercept), "intercept {}", p.intercept);
        assert!((-10..=10).contains(&p.x), "x {}", p.x);
        assert!((-10.0..=10.0).contains(&p.y), "y {}", p.y);
    }
}

#[test]
fn on_line_points_inside_the_range_are_exact() {
    let mut rng = seeded(21);
    for _ in 0..10_000 {
        let p = Problem::generate(&mut rng);
        // Points strictly inside the display range were never clamped, so
        // the on-line guarantee must hold exactly, not within epsilon.
        if p.on_line && p.y.abs() < 10.0 {
            assert_eq!(p.y, p.line_y(p.x), "{p:?}");
        }
    }
}

#[test]
fn off_line_points_sit_at_least_one_unit_away_unless_clamped() {
    let mut rng = seeded(33);
    for _ in 0..10_000 {
        let p = Problem::generate(&mut rng);
        if !p.on_line && p.y.abs() < 10.0 {
            let residual = (p.y - p.line_y(p.x)).abs();
            assert!((1.0..=4.0).contains(&residual), "{p:?}");
        }
    }
}

#[test]
fn clamping_can_pull_an_on_line_point_off_the_line() {
    // Known wart in the sampling scheme: when a steep line leaves the
    // display range for every sampled x, y gets clamped while the intent
    // flag stays true. The displayed verdict recomputes from geometry, so
    // the flag and the verdict are allowed to disagree here.
    let mut rng = seeded(3);
    let mut clamped = 0;
    for _ in 0..50_000 {
        let p = Problem::generate(&mut rng);
        if p.on_line && !p.is_on_line() {
            clamped += 1;
            assert!(p.y == 10.0 || p.y == -10.0, "{p:?}");
        }
    }
    // Steep slopes with large intercepts exhaust the attempt budget often
    // enough that a 50k sample reliably contains such problems.
    assert!(clamped > 0);
}

#[test]
fn generation_is_deterministic_for_a_fixed_seed() {
    let mut a = seeded(99);
    let mut b = seeded(99);
    for _ in 0..100 {
        assert_eq!(Problem::generate(&mut a), Problem::generate(&mut b));
    }
}
