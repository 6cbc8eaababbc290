use std::iter::FusedIterator;

use crate::graph::Graph;
use crate::index::ShortestPathIndex;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// The buffer holds a path not yet handed out
    Pending,
    /// The buffer holds the last path handed out
    Emitted,
    Exhausted,
}

/// Lazy enumeration of every distinct shortest path from the index source to
/// one target
///
/// Created by [`ShortestPathIndex::shortest_paths_to`]. The first path is the
/// one [`ShortestPathIndex::shortest_path_to`] returns. Each following path is
/// found by advancing the lowest path position (nearest the source) that still
/// has an untried predecessor, then refilling every position below it with
/// first-match choices. Once exhausted the iterator stays exhausted; call
/// `shortest_paths_to` again to start over.
#[derive(Debug)]
pub struct ShortestPaths<'a, G: ?Sized> {
    index: &'a ShortestPathIndex<'a, G>,
    /// Current path, source first
    path: Vec<usize>,
    /// `cursors[i]` is the index into `neighbors(path[i + 1])` that produced `path[i]`
    cursors: Vec<usize>,
    state: State,
}

impl<'a, G> ShortestPaths<'a, G>
where
    G: Graph + ?Sized,
{
    pub(crate) fn new(index: &'a ShortestPathIndex<'a, G>, target: usize) -> Result<Self> {
        let length = index.distance_to(target)?;

        let mut path = vec![index.source(); length + 1];
        let mut cursors = vec![0; length];
        path[length] = target;
        if length > 0 {
            index.complete_path(&mut path, &mut cursors, length - 1)?;
        }

        Ok(ShortestPaths {
            index,
            path,
            cursors,
            state: State::Pending,
        })
    }

    /// Moves the buffer to the next path, returning false when none is left
    fn advance(&mut self) -> bool {
        for i in 0..self.cursors.len() {
            let next = self.path[i + 1];
            let Some((cursor, vertex)) =
                self.index.next_predecessor(next, i, self.cursors[i] + 1)
            else {
                continue;
            };

            self.path[i] = vertex;
            self.cursors[i] = cursor;
            if i > 0 {
                if let Err(e) = self.index.complete_path(&mut self.path, &mut self.cursors, i - 1) {
                    log::error!("abandoning path enumeration: {}", e);
                    return false;
                }
            }
            log::trace!("advanced position {}: {:?}", i, self.path);
            return true;
        }
        false
    }
}

impl<G> Iterator for ShortestPaths<'_, G>
where
    G: Graph + ?Sized,
{
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        match self.state {
            State::Pending => {}
            State::Emitted => {
                if !self.advance() {
                    self.state = State::Exhausted;
                    return None;
                }
            }
            State::Exhausted => return None,
        }
        self.state = State::Emitted;
        Some(self.path.clone())
    }
}

impl<G> FusedIterator for ShortestPaths<'_, G> where G: Graph + ?Sized {}
