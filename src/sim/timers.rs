//! Cancellable delayed actions on the simulation clock
//!
//! Replaces ad-hoc timeouts: every delayed action gets a handle so a
//! superseding call can drop the stale one deterministically.

/// Handle to a scheduled action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Pending<A> {
    id: TimerId,
    due: f64,
    action: A,
}

/// Pending actions ordered by due time, then by scheduling order
#[derive(Debug, Clone)]
pub struct Timers<A> {
    now: f64,
    next_id: u64,
    pending: Vec<Pending<A>>,
}

impl<A> Default for Timers<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Timers<A> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            next_id: 1,
            pending: Vec::new(),
        }
    }

    /// Schedule `action` to fire `delay` seconds from now
    pub fn schedule(&mut self, delay: f32, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.now + delay.max(0.0) as f64,
            action,
        });
        id
    }

    /// Drop a pending action. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance the clock and return every action that came due, in order
    pub fn advance(&mut self, dt: f32) -> Vec<A> {
        self.now += dt as f64;
        // Absorb f32 step accumulation error
        let horizon = self.now + 1e-6;

        if !self.pending.iter().any(|p| p.due <= horizon) {
            return Vec::new();
        }

        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= horizon);
        self.pending = rest;
        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.id.cmp(&b.id)));
        due.into_iter().map(|p| p.action).collect()
    }
}
