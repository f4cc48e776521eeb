//! # Timetable
//!
//! A binary course × room × time-slot × weekday assignment grid. A cell set
//! to `true` means the course is taught in that room at that slot on that
//! day. The score is the number of assigned cells, and a timetable is valid
//! when every rule in its [`ConstraintSet`] holds. Every timetable starts out
//! with the double-booking rules:
//!
//! - [`RoomDoubleBooking`]: at most one course per (room, slot, weekday).
//! - [`CourseDoubleBooking`]: at most one room per (course, slot, weekday).
//!
//! ```rust
//! use annealing::model::Model;
//! use annealing::models::{Timetable, TimetableShape};
//!
//! let mut timetable = Timetable::new(TimetableShape::new(3, 5, 3, 5));
//! timetable.set(0, 0, 0, 0, true);
//! timetable.set(1, 0, 0, 0, true); // room 0 is now double-booked
//!
//! assert_eq!(timetable.score(), 2.0);
//! assert!(!timetable.is_valid());
//! assert_eq!(timetable.violations().len(), 1);
//! ```

use crate::constraints::{Constraint, ConstraintSet, ConstraintViolation};
use crate::error::Result;
use crate::model::Model;
use crate::rng::RandomNumberGenerator;

/// Dimensions of a timetable grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimetableShape {
    pub courses: usize,
    pub rooms: usize,
    pub slots: usize,
    pub weekdays: usize,
}

impl TimetableShape {
    pub fn new(courses: usize, rooms: usize, slots: usize, weekdays: usize) -> Self {
        Self {
            courses,
            rooms,
            slots,
            weekdays,
        }
    }

    /// Total number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.courses * self.rooms * self.slots * self.weekdays
    }

    fn index(&self, course: usize, room: usize, slot: usize, weekday: usize) -> usize {
        assert!(
            course < self.courses
                && room < self.rooms
                && slot < self.slots
                && weekday < self.weekdays,
            "cell ({}, {}, {}, {}) is outside a {:?} timetable",
            course,
            room,
            slot,
            weekday,
            self
        );
        ((course * self.rooms + room) * self.slots + slot) * self.weekdays + weekday
    }

    fn coordinates(&self, index: usize) -> (usize, usize, usize, usize) {
        let weekday = index % self.weekdays;
        let rest = index / self.weekdays;
        let slot = rest % self.slots;
        let rest = rest / self.slots;
        let room = rest % self.rooms;
        let course = rest / self.rooms;
        (course, room, slot, weekday)
    }
}

fn double_booking_rules() -> ConstraintSet<Timetable> {
    ConstraintSet::new()
        .with_constraint(RoomDoubleBooking)
        .with_constraint(CourseDoubleBooking)
}

/// A course/room/slot/weekday assignment grid.
///
/// Two timetables are equal when their grids are, whatever rules they carry.
#[derive(Debug, Clone)]
pub struct Timetable {
    shape: TimetableShape,
    cells: Vec<bool>,
    constraints: ConstraintSet<Timetable>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new(shape: TimetableShape) -> Self {
        Self {
            shape,
            cells: vec![false; shape.cells()],
            constraints: double_booking_rules(),
        }
    }

    /// Creates a timetable with every cell assigned by a fair coin flip.
    ///
    /// Such a grid is almost always double-booked somewhere.
    pub fn random(shape: TimetableShape, rng: &mut RandomNumberGenerator) -> Self {
        let cells = (0..shape.cells()).map(|_| rng.coin()).collect();
        Self {
            shape,
            cells,
            constraints: double_booking_rules(),
        }
    }

    /// Creates a valid timetable by visiting the cells in random order and
    /// assigning each with probability `fill`, provided the assignment keeps
    /// the grid free of double bookings.
    pub fn random_valid(
        shape: TimetableShape,
        fill: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let mut timetable = Self::new(shape);
        let mut order: Vec<usize> = (0..shape.cells()).collect();
        rng.shuffle(&mut order);

        for index in order {
            let (course, room, slot, weekday) = shape.coordinates(index);
            if rng.chance(fill)
                && timetable.room_is_free(room, slot, weekday)
                && timetable.course_is_free(course, slot, weekday)
            {
                timetable.cells[index] = true;
            }
        }
        timetable
    }

    /// Adds a rule on top of the double-booking ones, builder style.
    pub fn with_constraint<C>(mut self, constraint: C) -> Self
    where
        C: Constraint<Timetable> + 'static,
    {
        self.constraints.add_constraint(constraint);
        self
    }

    pub fn shape(&self) -> TimetableShape {
        self.shape
    }

    pub fn constraints(&self) -> &ConstraintSet<Timetable> {
        &self.constraints
    }

    /// Returns whether `course` is taught in `room` at `slot` on `weekday`.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is outside the shape.
    pub fn get(&self, course: usize, room: usize, slot: usize, weekday: usize) -> bool {
        self.cells[self.shape.index(course, room, slot, weekday)]
    }

    pub fn set(&mut self, course: usize, room: usize, slot: usize, weekday: usize, value: bool) {
        let index = self.shape.index(course, room, slot, weekday);
        self.cells[index] = value;
    }

    pub fn toggle(&mut self, course: usize, room: usize, slot: usize, weekday: usize) {
        let index = self.shape.index(course, room, slot, weekday);
        self.cells[index] = !self.cells[index];
    }

    /// Number of assigned cells.
    pub fn assigned(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Largest number of assignments a valid timetable of this shape can hold.
    pub fn max_assignments(&self) -> usize {
        self.shape.slots * self.shape.weekdays * self.shape.courses.min(self.shape.rooms)
    }

    /// Lists every broken rule in the grid.
    pub fn violations(&self) -> Vec<ConstraintViolation> {
        self.constraints.check_all(self)
    }

    fn courses_in_room(&self, room: usize, slot: usize, weekday: usize) -> usize {
        (0..self.shape.courses)
            .filter(|&course| self.get(course, room, slot, weekday))
            .count()
    }

    fn rooms_for_course(&self, course: usize, slot: usize, weekday: usize) -> usize {
        (0..self.shape.rooms)
            .filter(|&room| self.get(course, room, slot, weekday))
            .count()
    }

    fn room_is_free(&self, room: usize, slot: usize, weekday: usize) -> bool {
        self.courses_in_room(room, slot, weekday) == 0
    }

    fn course_is_free(&self, course: usize, slot: usize, weekday: usize) -> bool {
        self.rooms_for_course(course, slot, weekday) == 0
    }

    fn periods(&self) -> impl Iterator<Item = (usize, usize)> {
        let weekdays = self.shape.weekdays;
        (0..self.shape.slots).flat_map(move |slot| (0..weekdays).map(move |day| (slot, day)))
    }
}

impl Model for Timetable {
    fn score(&self) -> f64 {
        self.assigned() as f64
    }

    /// Flips one uniformly chosen cell.
    fn perturb(&mut self, rng: &mut RandomNumberGenerator) {
        if self.cells.is_empty() {
            return;
        }
        let index = rng.gen_range(0..self.cells.len());
        self.cells[index] = !self.cells[index];
    }

    fn copy_from(&mut self, other: &Self) -> Result<()> {
        self.shape = other.shape;
        self.cells.clone_from(&other.cells);
        self.constraints.clone_from(&other.constraints);
        Ok(())
    }

    fn is_valid(&self) -> bool {
        self.constraints.is_valid(self)
    }
}

impl PartialEq for Timetable {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.cells == other.cells
    }
}

impl Eq for Timetable {}

/// At most one course may use a room in any (slot, weekday).
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomDoubleBooking;

impl Constraint<Timetable> for RoomDoubleBooking {
    fn check(&self, timetable: &Timetable) -> Vec<ConstraintViolation> {
        let mut violations = Vec::new();
        for (slot, weekday) in timetable.periods() {
            for room in 0..timetable.shape.rooms {
                let courses = timetable.courses_in_room(room, slot, weekday);
                if courses > 1 {
                    violations.push(ConstraintViolation::with_severity(
                        "RoomDoubleBooking",
                        format!(
                            "Room {} holds {} courses in slot {} on weekday {}",
                            room, courses, slot, weekday
                        ),
                        (courses - 1) as f64,
                    ));
                }
            }
        }
        violations
    }

    fn is_satisfied(&self, timetable: &Timetable) -> bool {
        timetable.periods().all(|(slot, weekday)| {
            (0..timetable.shape.rooms)
                .all(|room| timetable.courses_in_room(room, slot, weekday) <= 1)
        })
    }
}

/// A course may be taught in at most one room in any (slot, weekday).
#[derive(Debug, Clone, Copy, Default)]
pub struct CourseDoubleBooking;

impl Constraint<Timetable> for CourseDoubleBooking {
    fn check(&self, timetable: &Timetable) -> Vec<ConstraintViolation> {
        let mut violations = Vec::new();
        for (slot, weekday) in timetable.periods() {
            for course in 0..timetable.shape.courses {
                let rooms = timetable.rooms_for_course(course, slot, weekday);
                if rooms > 1 {
                    violations.push(ConstraintViolation::with_severity(
                        "CourseDoubleBooking",
                        format!(
                            "Course {} is in {} rooms in slot {} on weekday {}",
                            course, rooms, slot, weekday
                        ),
                        (rooms - 1) as f64,
                    ));
                }
            }
        }
        violations
    }

    fn is_satisfied(&self, timetable: &Timetable) -> bool {
        timetable.periods().all(|(slot, weekday)| {
            (0..timetable.shape.courses)
                .all(|course| timetable.rooms_for_course(course, slot, weekday) <= 1)
        })
    }
}
