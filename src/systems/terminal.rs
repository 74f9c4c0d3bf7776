//! Terminal front end
//!
//! Owns the frame loop for the character-cell variant: poll keys without
//! blocking, update the interaction state, project, rasterize, downsample and
//! write one synchronized frame, then sleep out the frame interval.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Print, ResetColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use polyhedra_core::ShapeCatalog;
use polyhedra_input::{Command, Controls, InteractionState};
use polyhedra_render::{project_shape, CharGrid, DepthCanvas, GlyphRamp, ProjectedVertex, ProjectionParams};

use super::frame_clock::FrameClock;
use super::status::Status;
use crate::config::TerminalConfig;
use crate::input::InputMapper;

/// Terminal error types
#[derive(Debug)]
pub enum TerminalError {
    /// Terminal I/O failed
    Io(io::Error),
    /// The glyph ramp has no characters
    InvalidRamp,
    /// Nothing to display
    EmptyCatalog,
}

impl std::fmt::Display for TerminalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalError::Io(e) => write!(f, "Terminal I/O error: {}", e),
            TerminalError::InvalidRamp => write!(f, "Glyph ramp is empty"),
            TerminalError::EmptyCatalog => write!(f, "No shapes to display"),
        }
    }
}

impl std::error::Error for TerminalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerminalError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TerminalError {
    fn from(e: io::Error) -> Self {
        TerminalError::Io(e)
    }
}

/// Raw mode and alternate screen, restored on drop
pub struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    pub fn start() -> Result<Self, TerminalError> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(e) = execute!(
            out,
            EnterAlternateScreen,
            DisableLineWrap,
            cursor::Hide,
            Clear(ClearType::All)
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(e.into());
        }
        Ok(Self { out })
    }

    pub fn out(&mut self) -> &mut Stdout {
        &mut self.out
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            EndSynchronizedUpdate,
            ResetColor,
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Write the header and grid as one synchronized update
pub fn present<W: Write>(out: &mut W, header: &[String], grid: &CharGrid) -> io::Result<()> {
    queue!(out, BeginSynchronizedUpdate)?;

    // Rows past the last addressable terminal row are dropped
    for (y, line) in header.iter().enumerate() {
        let Ok(y) = u16::try_from(y) else {
            break;
        };
        queue!(
            out,
            cursor::MoveTo(0, y),
            Print(line),
            Clear(ClearType::UntilNewLine)
        )?;
    }

    let top = header.len();
    let mut text = String::with_capacity(grid.cols());
    for (y, row) in grid.lines().enumerate() {
        let Ok(y) = u16::try_from(top + y) else {
            break;
        };
        text.clear();
        text.extend(row.iter());
        queue!(out, cursor::MoveTo(0, y), Print(&text))?;
    }

    queue!(out, EndSynchronizedUpdate)?;
    out.flush()
}

/// Character-cell viewer
pub struct TerminalSystem {
    catalog: ShapeCatalog,
    controls: Controls,
    state: InteractionState,
    params: ProjectionParams,
    canvas: DepthCanvas,
    grid: CharGrid,
    ramp: GlyphRamp,
    mark_vertices: bool,
    vertex_glyph: Option<char>,
    projected: Vec<ProjectedVertex>,
    clock: FrameClock,
}

impl TerminalSystem {
    /// Allocate the frame buffers for the configured size
    pub fn new(
        config: &TerminalConfig,
        controls: Controls,
        catalog: ShapeCatalog,
    ) -> Result<Self, TerminalError> {
        if catalog.is_empty() {
            return Err(TerminalError::EmptyCatalog);
        }
        let ramp = GlyphRamp::new(&config.ramp).ok_or(TerminalError::InvalidRamp)?;
        let supersample = config.supersample.max(1);

        Ok(Self {
            catalog,
            controls,
            state: InteractionState::new(),
            params: ProjectionParams::terminal(config.width, config.height, supersample),
            canvas: DepthCanvas::new(config.width, config.height, supersample),
            grid: CharGrid::new(config.width, config.height),
            ramp,
            mark_vertices: config.mark_vertices,
            vertex_glyph: config.mark_vertices.then_some(config.vertex_glyph),
            projected: Vec::new(),
            clock: FrameClock::from_millis(config.frame_ms),
        })
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn grid(&self) -> &CharGrid {
        &self.grid
    }

    /// Apply one command; returns `false` when the viewer should quit
    pub fn handle(&mut self, command: Command) -> bool {
        if command == Command::Quit {
            return false;
        }
        self.state.apply(command, &self.controls, self.catalog.len());
        true
    }

    /// Project and rasterize the current shape into the grid
    pub fn render(&mut self) {
        let Some(shape) = self.catalog.get(self.state.shape_index) else {
            return;
        };
        project_shape(shape, &self.state, &self.params, &mut self.projected);
        self.canvas.draw_wireframe(shape, &self.projected, self.mark_vertices);
        self.canvas.resolve(&mut self.grid, &self.ramp, self.vertex_glyph);
    }

    /// Header lines for the current frame
    pub fn header(&self) -> Vec<String> {
        match self.catalog.get(self.state.shape_index) {
            Some(shape) => Status::new(shape, &self.state).header_lines(),
            None => Vec::new(),
        }
    }

    /// Advance the state by one frame and redraw
    pub fn step(&mut self) {
        self.state.tick(&self.controls);
        self.render();
    }

    /// Run until the quit key
    pub fn run(&mut self) -> Result<(), TerminalError> {
        log::info!(
            "Starting terminal viewer: {}x{} cells, {} shapes, {} ms frames",
            self.grid.cols(),
            self.grid.rows(),
            self.catalog.len(),
            self.clock.interval().as_millis()
        );

        let mut session = TerminalSession::start()?;
        loop {
            self.clock.begin_frame();
            if !self.poll_input()? {
                break;
            }
            self.step();
            present(session.out(), &self.header(), &self.grid)?;
            self.clock.wait();
        }
        drop(session);

        log::info!("Terminal viewer closed after {} frames", self.clock.frames());
        Ok(())
    }

    /// Drain pending key events; `false` once quit was requested
    fn poll_input(&mut self) -> Result<bool, TerminalError> {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = InputMapper::map_terminal(&key) {
                    if !self.handle(command) {
                        return Ok(false);
                    }
                }
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyhedra_core::ShapeKind;

    fn system() -> TerminalSystem {
        let config = TerminalConfig {
            width: 40,
            height: 20,
            ..TerminalConfig::default()
        };
        TerminalSystem::new(&config, Controls::terminal(), ShapeCatalog::builtin()).unwrap()
    }

    #[test]
    fn test_render_draws_something() {
        let mut system = system();
        system.render();
        let drawn = system
            .grid()
            .lines()
            .flat_map(|row| row.iter())
            .filter(|c| **c != ' ')
            .count();
        assert!(drawn > 0);
    }

    #[test]
    fn test_vertex_markers_present() {
        let mut system = system();
        system.render();
        let markers = system
            .grid()
            .lines()
            .flat_map(|row| row.iter())
            .filter(|c| **c == 'O')
            .count();
        assert!(markers > 0);
    }

    #[test]
    fn test_quit_stops() {
        let mut system = system();
        assert!(system.handle(Command::NextShape));
        assert_eq!(system.state().shape_index, 1);
        assert!(!system.handle(Command::Quit));
    }

    #[test]
    fn test_step_advances_auto_rotation() {
        let mut system = system();
        system.step();
        let rates = Controls::terminal().auto_rotate;
        assert_eq!(system.state().angle_x, rates.x);
        assert_eq!(system.state().angle_zw, rates.zw);
    }

    #[test]
    fn test_digit_beyond_catalog_clamps() {
        let config = TerminalConfig::default();
        let catalog = ShapeCatalog::from_kinds(&[ShapeKind::Cube, ShapeKind::Tesseract]);
        let mut system = TerminalSystem::new(&config, Controls::terminal(), catalog).unwrap();
        system.handle(Command::SelectShape(8));
        assert_eq!(system.state().shape_index, 1);
        assert!(system.header()[1].starts_with("Shape: Tesseract"));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = TerminalSystem::new(&TerminalConfig::default(), Controls::terminal(), ShapeCatalog::new());
        assert!(matches!(result, Err(TerminalError::EmptyCatalog)));
    }

    #[test]
    fn test_empty_ramp_rejected() {
        let config = TerminalConfig {
            ramp: String::new(),
            ..TerminalConfig::default()
        };
        let result = TerminalSystem::new(&config, Controls::terminal(), ShapeCatalog::builtin());
        assert!(matches!(result, Err(TerminalError::InvalidRamp)));
    }

    #[test]
    fn test_present_writes_header_and_rows() {
        let mut system = system();
        system.render();
        let mut out = Vec::new();
        present(&mut out, &system.header(), system.grid()).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("--- POLYHEDRA ---"));
        assert!(text.contains("Shape: Cube"));
    }

    #[test]
    fn test_present_drops_rows_past_u16() {
        let header = vec![String::new(); u16::MAX as usize];
        let grid = CharGrid::new(1, 2);
        let mut out = Vec::new();
        present(&mut out, &header, &grid).unwrap();
        let text = String::from_utf8_lossy(&out);
        // One cursor move per header line plus the single grid row that fits
        assert_eq!(text.matches(";1H").count(), u16::MAX as usize + 1);
        assert!(text.contains("\x1b[65536;1H"));
    }
}
