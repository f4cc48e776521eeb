//! # Models
//!
//! Ready-made problem instances for the annealing engine.
//!
//! - [`Quadratic`]: a parabola searched over its argument.
//! - [`Timetable`]: a course/room/slot/weekday grid that must stay free of
//!   double bookings.

pub mod quadratic;
pub mod timetable;

pub use quadratic::Quadratic;
pub use timetable::{CourseDoubleBooking, RoomDoubleBooking, Timetable, TimetableShape};
