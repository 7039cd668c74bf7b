//! Tick-driven tree processing.
//!
//! A [`Processor`] owns one [`DecisionTree`] and advances it once per external
//! tick (one game frame, one turn). The root's top-level children form an
//! implicit sequence that is run over and over:
//!
//! - The current child is ticked once per tick until it stops `Running`
//! - `Success` moves on to the next child; after the last one the whole tree
//!   is reset and a new run starts on the next tick
//! - `Failure` aborts the run **without** resetting the tree; the next tick
//!   starts a new run at the first child, and nodes keep whatever progress
//!   they had made
//!
//! Stopping is simply no longer calling [`Processor::tick`];
//! [`Processor::stop`] hands the tree back.

use crate::{DecisionTree, Status};

/// Drives a tree forever, one tick at a time.
#[derive(Debug)]
pub struct Processor<C> {
    tree: DecisionTree<C>,
    position: usize,
    in_run: bool,
    ticks: u64,
    completed_runs: u64,
    aborted_runs: u64,
}

impl<C> Processor<C> {
    /// Takes ownership of a tree and starts processing it.
    pub fn start(tree: DecisionTree<C>) -> Self {
        Self {
            tree,
            position: 0,
            in_run: false,
            ticks: 0,
            completed_runs: 0,
            aborted_runs: 0,
        }
    }

    /// Advances the tree by one tick.
    ///
    /// Returns the status of the top-level child ticked this time. A root
    /// without children completes an (empty) run on every tick.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        self.ticks += 1;
        if !self.in_run {
            tracing::debug!("Running decision tree {:?}", self.tree.name());
            self.in_run = true;
        }

        let children = self.tree.root_mut().children_mut();
        let total = children.len();
        let status = match children.get_mut(self.position) {
            Some(child) => child.tick(ctx),
            None => Status::Success,
        };

        match status {
            Status::Running => {}
            Status::Failure => {
                tracing::debug!(
                    "Decision tree {:?} failed at top-level child {}, restarting",
                    self.tree.name(),
                    self.position
                );
                self.position = 0;
                self.in_run = false;
                self.aborted_runs += 1;
            }
            Status::Success => {
                self.position += 1;
                if self.position >= total {
                    self.tree.reset();
                    tracing::debug!(
                        "Decision tree {:?} completed, tree reset",
                        self.tree.name()
                    );
                    self.position = 0;
                    self.in_run = false;
                    self.completed_runs += 1;
                }
            }
        }

        status
    }

    /// Stops processing and returns the tree as it is.
    pub fn stop(self) -> DecisionTree<C> {
        tracing::debug!(
            "Stopped decision tree {:?} after {} ticks",
            self.tree.name(),
            self.ticks
        );
        self.tree
    }

    pub fn tree(&self) -> &DecisionTree<C> {
        &self.tree
    }

    /// Index of the top-level child the next tick evaluates.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs that ended with every top-level child succeeding.
    pub fn completed_runs(&self) -> u64 {
        self.completed_runs
    }

    /// Runs cut short by a failing top-level child.
    pub fn aborted_runs(&self) -> u64 {
        self.aborted_runs
    }
}

/// Starts processing a tree. See [`Processor::start`].
pub fn start_processing<C>(tree: DecisionTree<C>) -> Processor<C> {
    Processor::start(tree)
}
