use rand::Rng;

/// Slopes are sampled from `[-SLOPE_RANGE, SLOPE_RANGE]`, excluding 0.
pub const SLOPE_RANGE: i32 = 5;
/// Intercepts are sampled from `[-INTERCEPT_RANGE, INTERCEPT_RANGE]`.
pub const INTERCEPT_RANGE: i32 = 8;
/// Candidate x-coordinates are sampled from `[-SAMPLE_X_RANGE, SAMPLE_X_RANGE]`.
pub const SAMPLE_X_RANGE: i32 = 9;
/// Everything shown on the canvas must land in `[-DISPLAY_RANGE, DISPLAY_RANGE]`.
pub const DISPLAY_RANGE: i32 = 10;

/// Off-line points are pushed away from the line by a magnitude in
/// `[1, MAX_OFFSET]` with a random sign.
const MAX_OFFSET: i32 = 4;
/// How many times to resample x before giving up and clamping y.
const MAX_ATTEMPTS: u32 = 10;

/// One generated quiz instance: a line `y = slope*x + intercept` and a
/// candidate point `(x, y)` that was intended to be on or off the line.
///
/// Immutable once generated; the session appends these to its history and
/// never rewrites them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Problem {
    pub slope: i32,
    pub intercept: i32,
    pub x: i32,
    pub y: f64,
    /// Generation intent. Display code must not trust this: clamping can
    /// leave an "on line" point off the line (see [`Problem::is_on_line`]).
    pub on_line: bool,
}

impl Problem {
    /// Generates a random problem from the injected random source.
    ///
    /// Pure function of `rng`: no other inputs, no side effects, so tests
    /// can drive it with a seeded `StdRng`.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut slope = rng.random_range(-SLOPE_RANGE..=SLOPE_RANGE);
        while slope == 0 {
            slope = rng.random_range(-SLOPE_RANGE..=SLOPE_RANGE);
        }
        let intercept = rng.random_range(-INTERCEPT_RANGE..=INTERCEPT_RANGE);
        let on_line = rng.random_bool(0.5);
        let (x, y) = sample_point(rng, slope, intercept, on_line);

        Self {
            slope,
            intercept,
            // Redundant given the sampling range, enforced anyway.
            x: x.clamp(-DISPLAY_RANGE, DISPLAY_RANGE),
            y,
            on_line,
        }
    }

    /// The y-value of the line at `x`.
    pub fn line_y(&self, x: i32) -> f64 {
        f64::from(self.slope * x + self.intercept)
    }

    /// Whether the candidate point actually sits on the line.
    ///
    /// Recomputed from the stored coordinates rather than the `on_line`
    /// flag, so the verdict stays honest even for clamped problems.
    pub fn is_on_line(&self) -> bool {
        (self.y - self.line_y(self.x)).abs() < 1e-6
    }
}

/// Samples a candidate point for the given line, retrying up to
/// [`MAX_ATTEMPTS`] times until y lands in the display range.
///
/// When every attempt misses, the last y is clamped into range. For
/// `on_line` problems that clamp breaks the on-the-line guarantee; the
/// verdict recomputation in [`Problem::is_on_line`] covers for it.
fn sample_point(rng: &mut impl Rng, slope: i32, intercept: i32, on_line: bool) -> (i32, f64) {
    let limit = f64::from(DISPLAY_RANGE);
    let mut attempts = 0;
    loop {
        let x = rng.random_range(-SAMPLE_X_RANGE..=SAMPLE_X_RANGE);
        let mut y = f64::from(slope * x + intercept);
        if !on_line {
            let offset = rng.random_range(1..=MAX_OFFSET);
            y += f64::from(if rng.random_bool(0.5) { offset } else { -offset });
        }
        attempts += 1;
        if (-limit..=limit).contains(&y) || attempts >= MAX_ATTEMPTS {
            return (x, y.clamp(-limit, limit));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_y_evaluates_the_equation() {
        let p = Problem {
            slope: 3,
            intercept: -2,
            x: 0,
            y: 0.0,
            on_line: false,
        };
        assert_eq!(p.line_y(4), 10.0);
        assert_eq!(p.line_y(-1), -5.0);
    }

    #[test]
    fn is_on_line_uses_geometry_not_the_flag() {
        let mut p = Problem {
            slope: 2,
            intercept: -1,
            x: 3,
            y: 5.0,
            on_line: false,
        };
        assert!(p.is_on_line());

        p.y = 6.0;
        p.on_line = true;
        assert!(!p.is_on_line());
    }
}
