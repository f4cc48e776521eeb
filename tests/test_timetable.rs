use std::time::Duration;

use annealing::{
    constraints::{Constraint, ConstraintViolation},
    model::Model,
    models::{Timetable, TimetableShape},
    rng::RandomNumberGenerator,
    search::{Annealer, AnnealingConfig, AnnealingObserver, SearchStats},
};

#[derive(Debug, Default)]
struct ValidityAudit {
    accepted: usize,
    invalid_accepted: usize,
}

impl AnnealingObserver<Timetable> for ValidityAudit {
    fn on_accept(&mut self, _temperature: f64, snapshot: &Timetable) {
        self.accepted += 1;
        if !snapshot.is_valid() {
            self.invalid_accepted += 1;
        }
    }
}

fn standard() -> TimetableShape {
    TimetableShape::new(3, 5, 3, 5)
}

#[test]
fn test_timetable_fills_up() {
    let config = AnnealingConfig::new(1e6, 1e-10, 0.05, 100, Duration::from_secs(15)).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(31);
    let start = Timetable::random_valid(standard(), 0.1, &mut rng);
    assert!(start.is_valid());

    let mut timetable = start.clone();
    let mut audit = ValidityAudit::default();
    Annealer::new(config)
        .run_observed(&mut timetable, &mut rng, &mut audit)
        .unwrap();

    assert!(timetable.is_valid());
    assert!(timetable.score() > start.score());
    // every period ends with each course in its own room
    assert_eq!(timetable.assigned(), timetable.max_assignments());
    assert!(audit.accepted > 0);
    assert_eq!(audit.invalid_accepted, 0);
}

#[test]
fn test_invalid_start_is_never_adopted() {
    let config = AnnealingConfig::new(1e3, 1.0, 0.5, 100, Duration::from_secs(15)).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(5);
    let start = Timetable::random(standard(), &mut rng);
    assert!(!start.is_valid());

    let mut timetable = start.clone();
    let mut stats = SearchStats::default();
    Annealer::new(config)
        .run_observed(&mut timetable, &mut rng, &mut stats)
        .unwrap();

    // no single toggle walk within a level gets anywhere near a valid grid
    assert_eq!(stats.committed, 0);
    assert_eq!(stats.unchanged, 0);
    assert_eq!(stats.rejected, stats.trials);
    assert_eq!(timetable, start);
}

#[test]
fn test_empty_timetable_gains_assignments() {
    let config = AnnealingConfig::new(1e3, 1e-6, 0.1, 100, Duration::from_secs(15)).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(77);
    let mut timetable = Timetable::new(standard());

    Annealer::new(config).run(&mut timetable, &mut rng).unwrap();

    assert!(timetable.is_valid());
    assert!(timetable.assigned() > 0);
    assert!(timetable.violations().is_empty());
}

#[derive(Debug)]
struct WorkloadCap(usize);

impl Constraint<Timetable> for WorkloadCap {
    fn check(&self, timetable: &Timetable) -> Vec<ConstraintViolation> {
        if timetable.assigned() > self.0 {
            vec![ConstraintViolation::new(
                "WorkloadCap",
                format!("More than {} assignments", self.0),
            )]
        } else {
            Vec::new()
        }
    }
}

#[test]
fn test_extra_rule_bounds_the_search() {
    let config = AnnealingConfig::new(1e6, 1e-10, 0.05, 100, Duration::from_secs(15)).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(13);
    let mut timetable = Timetable::new(standard()).with_constraint(WorkloadCap(10));

    Annealer::new(config).run(&mut timetable, &mut rng).unwrap();

    assert!(timetable.is_valid());
    assert_eq!(timetable.assigned(), 10);
    assert_eq!(timetable.constraints().len(), 3);
}
