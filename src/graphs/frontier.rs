use std::mem;

/// Level-by-level work queue for breadth-first traversals.
///
/// Holding a whole layer at a time gives the same order as a FIFO queue:
/// every item of the current layer is handed out before anything produced
/// while expanding it.
pub trait Frontier<T> {
    /// Expands the current layer into the next one and returns the current
    /// layer, or `None` once nothing is left.
    fn step<F>(&mut self, expand: F) -> Option<Vec<T>>
    where
        F: FnMut(&[T], &mut Vec<T>);
}

#[derive(Debug)]
pub struct LayeredFrontier<T> {
    frontier: Vec<T>,
    next: Vec<T>,
    depth: usize,
}

impl<T> Default for LayeredFrontier<T> {
    fn default() -> Self {
        Self {
            frontier: Vec::new(),
            next: Vec::new(),
            depth: 0,
        }
    }
}

impl<T> LayeredFrontier<T> {
    pub fn new<I: IntoIterator<Item = T>>(initial: I) -> Self {
        Self {
            frontier: initial.into_iter().collect(),
            next: Vec::new(),
            depth: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    /// The layer that the next call to `step` will hand out.
    pub fn layer(&self) -> &[T] {
        &self.frontier
    }

    pub fn len(&self) -> usize {
        self.frontier.len()
    }

    /// Number of layers handed out so far.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<T> Frontier<T> for LayeredFrontier<T> {
    fn step<F>(&mut self, mut expand: F) -> Option<Vec<T>>
    where
        F: FnMut(&[T], &mut Vec<T>),
    {
        if self.frontier.is_empty() {
            return None;
        }

        let current = mem::take(&mut self.frontier);
        self.next.clear();

        expand(&current, &mut self.next);

        self.frontier = mem::take(&mut self.next);
        self.depth += 1;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_frontier_yields_nothing() {
        let mut frontier = LayeredFrontier::<u32>::default();
        assert!(frontier.is_empty());
        assert!(frontier.step(|_, _| unreachable!()).is_none());
        assert_eq!(frontier.depth(), 0);
    }

    #[test]
    fn layers_come_out_in_fifo_order() {
        // Each value n expands to 2n and 2n + 1 while below 8.
        let mut frontier = LayeredFrontier::new([1u32]);
        let mut flat = Vec::new();

        while let Some(layer) = frontier.step(|current, next| {
            for &n in current {
                if n < 8 {
                    next.push(2 * n);
                    next.push(2 * n + 1);
                }
            }
        }) {
            flat.extend(layer);
        }

        assert_eq!(flat, (1..16).collect::<Vec<_>>());
        assert_eq!(frontier.depth(), 4);
        assert!(frontier.layer().is_empty());
    }
}
