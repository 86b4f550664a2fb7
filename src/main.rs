//! Terminal grid world runner (default binary).
//!
//! Wires the sample rules, the frame scheduler and the crossterm backend
//! together. Arrow keys (or wasd / hjkl) move, Esc or q quits.

use anyhow::Result;

use gridwalk::app::App;
use gridwalk::core::{SampleRules, Session, WorldConfig};
use gridwalk::engine::{Backend, FrameScheduler, SchedulerConfig, StatusSurface};
use gridwalk::logging;
use gridwalk::term::{RepaintFlag, TerminalBackend, TerminalInput};

fn main() -> Result<()> {
    let _log_guard = match logging::log_path_from_env() {
        Some(path) => Some(logging::init(&path)?),
        None => None,
    };

    // Configuration errors surface before the terminal is touched.
    let world_config = WorldConfig::from_env();
    let session = Session::from_config(&world_config, SampleRules::new(world_config.seed))?;
    tracing::info!(
        columns = world_config.columns,
        rows = world_config.rows,
        seed = world_config.seed,
        "world created"
    );

    let mut app = App::new(session);
    let repaint = RepaintFlag::new();
    let mut scheduler = FrameScheduler::new(
        SchedulerConfig::from_env(),
        TerminalBackend::new().with_repaint(repaint.clone()),
        TerminalInput::new().with_repaint(repaint),
    );

    let result = run(&mut scheduler, &mut app);

    // Always try to restore terminal state.
    let _ = scheduler.backend_mut().shutdown();
    result
}

fn run(
    scheduler: &mut FrameScheduler<TerminalBackend, TerminalInput>,
    app: &mut App<SampleRules>,
) -> Result<()> {
    scheduler.initialize()?;
    scheduler.backend_mut().set_status("0")?;
    scheduler.run(app)
}
