use rand::Rng;

use crate::problem::Problem;

/// Ordered history of generated problems plus the navigation cursor.
///
/// The session moves through three states: no problem yet, problem shown
/// but not revealed, and problem shown with the answer revealed. Revealing
/// never mutates the problem itself; it only flips the display flag, and
/// any navigation clears it again.
///
/// History only grows: visiting an old slot never regenerates it, and
/// nothing is ever removed for the lifetime of the session.
#[derive(Debug, Default)]
pub struct Session {
    history: Vec<Problem>,
    current: usize,
    revealed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a fresh problem, appends it and moves the cursor to it.
    pub fn new_problem(&mut self, rng: &mut impl Rng) {
        let problem = Problem::generate(rng);
        log::info!(
            "problem {}: y = {}x + {}, candidate ({}, {}), intent on_line={}",
            self.history.len() + 1,
            problem.slope,
            problem.intercept,
            problem.x,
            problem.y,
            problem.on_line,
        );
        self.history.push(problem);
        self.current = self.history.len() - 1;
        self.revealed = false;
    }

    /// Marks the current problem as revealed. Idempotent; a no-op while
    /// the history is still empty.
    pub fn reveal(&mut self) {
        if !self.history.is_empty() {
            self.revealed = true;
        }
    }

    /// Jumps to `index`, hiding the answer again. Out-of-range indices are
    /// silently ignored.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.history.len() {
            return;
        }
        self.current = index;
        self.revealed = false;
    }

    /// Steps back one problem if there is one.
    pub fn previous(&mut self) {
        if self.current > 0 {
            self.go_to(self.current - 1);
        }
    }

    /// Steps forward, generating a new problem only past the end of the
    /// history.
    pub fn next(&mut self, rng: &mut impl Rng) {
        if self.current + 1 < self.history.len() {
            self.go_to(self.current + 1);
        } else {
            self.new_problem(rng);
        }
    }

    pub fn current(&self) -> Option<&Problem> {
        self.history.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}
