//! Heuristic evaluator trait.

/// State evaluator used to order and rank search nodes.
///
/// Lower is better. Must be a pure function of the state.
pub trait Heuristic<S> {
    /// Estimate the cost of `state`.
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> f64,
{
    fn evaluate(&self, state: &S) -> f64 {
        self(state)
    }
}

/// Heuristic that rates every state equally.
///
/// With it, node cost reduces to depth and best-first degenerates to
/// breadth-first order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn evaluate(&self, _state: &S) -> f64 {
        0.0
    }
}
