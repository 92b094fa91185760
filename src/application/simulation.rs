use crate::config::SimConfig;
use crate::domain::Grid;
use crate::error::ConfigError;
use log::{debug, trace};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Whether the scheduler is currently advancing generations.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Commands accepted by the scheduler task.
enum Command {
    Start,
    Stop,
    Replace(Grid),
}

/// Handle to a spawned simulation.
///
/// Commands travel over an mpsc channel to the scheduler task, which
/// owns the run state and the current grid; each new generation is
/// published over a watch channel that collaborators (rendering, UI)
/// subscribe to. Dropping the handle closes the command channel and
/// ends the task.
pub struct Simulation {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Grid>,
    config: SimConfig,
    task: JoinHandle<()>,
}

impl Simulation {
    /// Validate `config`, seed an all-dead grid and spawn the scheduler
    /// task. Must be called from within a tokio runtime.
    pub fn spawn(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let initial = Grid::new(config.rows, config.cols)?;

        let (commands, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshots) = watch::channel(initial.clone());

        let scheduler = Scheduler {
            grid: initial,
            run_state: RunState::Stopped,
            generation: 0,
            tick_delay: config.tick_delay,
            commands: command_rx,
            snapshots: snapshot_tx,
        };
        let task = tokio::spawn(scheduler.run());

        Ok(Self {
            commands,
            snapshots,
            config,
            task,
        })
    }

    /// Begin the tick loop; the first generation is computed
    /// immediately. No-op when already running.
    pub fn start(&self) {
        self.send(Command::Start);
    }

    /// Halt the tick loop. Takes effect before the next tick's
    /// computation; a tick already armed does nothing further once it
    /// observes the stop. No-op when already stopped.
    pub fn stop(&self) {
        self.send(Command::Stop);
    }

    /// Install a fresh all-dead grid as the current snapshot.
    pub fn clear(&self) -> Result<(), ConfigError> {
        self.replace(Grid::cleared(self.config.rows, self.config.cols)?)
    }

    /// Install an independently randomized grid; `alive_probability`
    /// must lie in [0, 1].
    pub fn randomize(&self, alive_probability: f64) -> Result<(), ConfigError> {
        self.replace(Grid::random(
            self.config.rows,
            self.config.cols,
            alive_probability,
        )?)
    }

    /// Install an externally built snapshot, e.g. a grid seeded with a
    /// [`Pattern`]. Its dimensions must match the simulation's.
    ///
    /// [`Pattern`]: crate::domain::Pattern
    pub fn replace(&self, grid: Grid) -> Result<(), ConfigError> {
        let expected = (self.config.rows, self.config.cols);
        let got = grid.dimensions();
        if got != expected {
            return Err(ConfigError::DimensionMismatch { expected, got });
        }
        self.send(Command::Replace(grid));
        Ok(())
    }

    /// Subscribe to published snapshots.
    pub fn subscribe(&self) -> watch::Receiver<Grid> {
        self.snapshots.clone()
    }

    /// The most recently published snapshot.
    pub fn latest(&self) -> Grid {
        self.snapshots.borrow().clone()
    }

    pub const fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Close the command channel and wait for the task to wind down.
    pub async fn shutdown(self) {
        drop(self.commands);
        let _ = self.task.await;
    }

    fn send(&self, command: Command) {
        // The task only exits once the last handle is gone, so a closed
        // channel means there is nothing left to command.
        let _ = self.commands.send(command);
    }
}

/// The scheduler task: a two-state loop that owns the run state, the
/// current grid and the generation counter. While stopped it sits on
/// the command channel; while running it steps, publishes, and re-arms
/// after `tick_delay`. Ticks are strictly sequential.
struct Scheduler {
    grid: Grid,
    run_state: RunState,
    generation: u64,
    tick_delay: Duration,
    commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<Grid>,
}

impl Scheduler {
    async fn run(mut self) {
        let (rows, cols) = self.grid.dimensions();
        debug!("scheduler started for a {rows}x{cols} grid");

        loop {
            match self.run_state {
                RunState::Stopped => {
                    let Some(command) = self.commands.recv().await else {
                        break;
                    };
                    self.apply(command);
                }
                RunState::Running => {
                    self.tick();
                    if !self.rearm().await {
                        break;
                    }
                }
            }
        }

        debug!("scheduler finished after {} generations", self.generation);
    }

    /// Compute and publish the next generation.
    fn tick(&mut self) {
        let next = self.grid.step();
        self.generation += 1;
        trace!(
            "generation {}: {} live cells",
            self.generation,
            next.population()
        );
        self.publish(next);
    }

    /// Wait out the tick delay, applying commands as they arrive. A
    /// stop cuts the wait short so the stopped state is observed before
    /// any further computation. Returns false once the command channel
    /// has closed.
    async fn rearm(&mut self) -> bool {
        let delay = tokio::time::sleep(self.tick_delay);
        tokio::pin!(delay);

        loop {
            tokio::select! {
                _ = &mut delay => return true,
                command = self.commands.recv() => match command {
                    Some(command) => {
                        self.apply(command);
                        if self.run_state == RunState::Stopped {
                            return true;
                        }
                    }
                    None => return false,
                },
            }
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Start if self.run_state == RunState::Stopped => {
                debug!("start at generation {}", self.generation);
                self.run_state = RunState::Running;
            }
            Command::Stop if self.run_state == RunState::Running => {
                debug!("stop at generation {}", self.generation);
                self.run_state = RunState::Stopped;
            }
            // redundant start/stop commands are no-ops
            Command::Start | Command::Stop => {}
            Command::Replace(grid) => {
                self.generation = 0;
                self.publish(grid);
            }
        }
    }

    fn publish(&mut self, grid: Grid) {
        self.grid = grid.clone();
        self.snapshots.send_replace(grid);
    }
}
