use crate::model::Model;
use crate::rng::RandomNumberGenerator;

/// Largest `k` in the `10^-k` step scale of [`Quadratic::perturb`].
const MAX_STEP_EXPONENT: i32 = 8;

/// The parabola `f(x) = a x² + b x + c`, searched over `x`.
///
/// The score is `f(x)` itself, so annealing a parabola that opens downwards
/// (`a < 0`) drives `x` towards the vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    a: f64,
    b: f64,
    c: f64,
    x: f64,
}

impl Quadratic {
    pub fn new(a: f64, b: f64, c: f64, x: f64) -> Self {
        Self { a, b, c, x }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Evaluates `f` at the current `x`.
    pub fn value(&self) -> f64 {
        self.a * self.x * self.x + self.b * self.x + self.c
    }

    /// The `x` of the parabola's turning point, or `None` for a line.
    pub fn vertex(&self) -> Option<f64> {
        if self.a == 0.0 {
            None
        } else {
            Some(-self.b / (2.0 * self.a))
        }
    }
}

impl Model for Quadratic {
    fn score(&self) -> f64 {
        self.value()
    }

    /// Shifts `x` by a signed step of magnitude `10^-k * u`, with `k` drawn
    /// uniformly from `0..=8` and `u` from `[0, 1)`.
    fn perturb(&mut self, rng: &mut RandomNumberGenerator) {
        let exponent = rng.gen_range(0..=MAX_STEP_EXPONENT);
        let step = 10f64.powi(-exponent) * rng.uniform();
        if rng.coin() {
            self.x += step;
        } else {
            self.x -= step;
        }
    }

    fn is_valid(&self) -> bool {
        true
    }
}
