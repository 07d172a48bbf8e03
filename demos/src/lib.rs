//! Shared code for the gridpath terminal demo.
//!
//! Loading and saving scenarios, a plain-text overlay of a finished search,
//! and a paced crossterm replay of the exploration stream.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::Path as FsPath;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{self, Color, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridpath_core::{Cell, Coord, Grid, GridSnapshot, Terrain};
use gridpath_gen::Scenario;
use gridpath_search::{ReplayEvent, SearchReport};

type DemoResult<T> = Result<T, Box<dyn Error>>;

/// Pacing of the terminal replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayConfig {
    /// Pause after each expanded cell.
    pub visit_delay: Duration,
    /// Pause after each path cell.
    pub path_delay: Duration,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            visit_delay: Duration::from_millis(20),
            path_delay: Duration::from_millis(50),
        }
    }
}

impl ReplayConfig {
    /// Scale both delays by `factor`; `0.0` disables pacing.
    ///
    /// Fails for negative or non-finite factors and for delays too long to
    /// represent.
    pub fn scaled(self, factor: f64) -> DemoResult<Self> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(format!("invalid pace {factor} (expected a finite value >= 0)").into());
        }
        Ok(Self {
            visit_delay: Duration::try_from_secs_f64(self.visit_delay.as_secs_f64() * factor)?,
            path_delay: Duration::try_from_secs_f64(self.path_delay.as_secs_f64() * factor)?,
        })
    }
}

/// Read a scenario from `path`.
///
/// Files ending in `.json` hold a [`GridSnapshot`]; anything else is parsed
/// as an ASCII map (see [`Grid::parse`]).
pub fn load_scenario(path: &FsPath) -> DemoResult<Scenario> {
    let text = fs::read_to_string(path)?;
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        let snapshot: GridSnapshot = serde_json::from_str(&text)?;
        let grid = snapshot.to_grid()?;
        log::debug!("loaded {}x{} snapshot from {}", grid.rows(), grid.cols(), path.display());
        Ok(Scenario {
            grid,
            start: snapshot.start,
            end: snapshot.end,
        })
    } else {
        let map = Grid::parse(&text)?;
        log::debug!("parsed {}x{} map from {}", map.grid.rows(), map.grid.cols(), path.display());
        Ok(Scenario {
            grid: map.grid,
            start: map.start,
            end: map.end,
        })
    }
}

/// Write `scenario` to `path` as a pretty-printed [`GridSnapshot`].
pub fn save_scenario(path: &FsPath, scenario: &Scenario) -> DemoResult<()> {
    let snapshot = GridSnapshot::from_grid(&scenario.grid, scenario.start, scenario.end);
    fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
    log::info!("wrote snapshot to {}", path.display());
    Ok(())
}

/// What a cell shows during replay, in increasing precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Mark {
    Plain,
    Visited,
    Path,
    Start,
    End,
}

fn terrain_color(cell: Cell) -> Color {
    if cell.blocked {
        return Color::Rgb { r: 40, g: 40, b: 40 };
    }
    match Terrain::from_weight(cell.weight) {
        Some(Terrain::Normal) => Color::Rgb { r: 200, g: 200, b: 200 },
        Some(Terrain::Grass) => Color::Rgb { r: 110, g: 170, b: 80 },
        Some(Terrain::Water) => Color::Rgb { r: 70, g: 120, b: 200 },
        Some(Terrain::Mountain) => Color::Rgb { r: 130, g: 100, b: 70 },
        None => {
            // Shade custom weights from light to dark.
            let shade = 200u32.saturating_sub(cell.weight.min(20) * 8) as u8;
            Color::Rgb { r: shade, g: shade, b: 160 }
        }
    }
}

fn mark_color(mark: Mark, cell: Cell) -> Color {
    match mark {
        Mark::Plain => terrain_color(cell),
        Mark::Visited => Color::Rgb { r: 120, g: 200, b: 220 },
        Mark::Path => Color::Rgb { r: 240, g: 210, b: 60 },
        Mark::Start => Color::Rgb { r: 40, g: 180, b: 60 },
        Mark::End => Color::Rgb { r: 210, g: 50, b: 50 },
    }
}

/// Render the grid with the report's visits and path as text.
///
/// `S`/`E` mark the endpoints, `*` the path, `o` expanded cells and `#`
/// obstacles; other cells use the grid's own notation.
pub fn overlay(grid: &Grid, report: &SearchReport) -> String {
    let mut marks = vec![Mark::Plain; grid.len()];
    let mut put = |c: Coord, m: Mark| {
        if let Some(i) = grid.index(c) {
            marks[i] = marks[i].max(m);
        }
    };
    for &c in &report.visited {
        put(c, Mark::Visited);
    }
    if let Some(path) = report.path() {
        for &c in path.cells() {
            put(c, Mark::Path);
        }
    }
    put(report.start, Mark::Start);
    put(report.end, Mark::End);

    let plain = grid.to_string();
    let mut out = String::with_capacity(plain.len());
    for (r, line) in plain.lines().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            let idx = r * grid.cols() as usize + c;
            out.push(match marks[idx] {
                Mark::Plain => ch,
                Mark::Visited => 'o',
                Mark::Path => '*',
                Mark::Start => 'S',
                Mark::End => 'E',
            });
        }
        out.push('\n');
    }
    out
}

/// One-line summary of a report.
pub fn summary(report: &SearchReport) -> String {
    match report.path() {
        Some(path) => format!(
            "{} ({}): path of {} steps, cost {}, {} cells expanded",
            report.algorithm,
            report.adjacency,
            path.edges(),
            path.cost(),
            report.expanded
        ),
        None => format!(
            "{} ({}): no path, {} cells expanded",
            report.algorithm, report.adjacency, report.expanded
        ),
    }
}

/// Terminal position of a cell, or `None` if it lies beyond what a
/// terminal can address. Two columns per cell keeps cells roughly square.
fn screen_pos(c: Coord) -> Option<(u16, u16)> {
    let x = u16::try_from(c.col.checked_mul(2)?).ok()?;
    let y = u16::try_from(c.row).ok()?;
    // Both columns of the cell must be addressable.
    x.checked_add(1)?;
    Some((x, y))
}

/// Row of the status line, one below the grid.
fn status_row(grid: &Grid) -> u16 {
    u16::try_from(grid.rows().saturating_add(1)).unwrap_or(u16::MAX)
}

/// Raw-mode alternate screen, restored on drop.
pub struct Screen {
    out: io::Stdout,
}

impl Screen {
    pub fn open() -> DemoResult<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }

    fn paint(&mut self, grid: &Grid, c: Coord, mark: Mark) -> io::Result<()> {
        let (Some(cell), Some((x, y))) = (grid.at(c), screen_pos(c)) else {
            return Ok(());
        };
        queue!(
            self.out,
            cursor::MoveTo(x, y),
            SetBackgroundColor(mark_color(mark, cell)),
            style::Print("  "),
            SetBackgroundColor(Color::Reset)
        )
    }

    fn status(&mut self, grid: &Grid, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, status_row(grid)),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Reset),
            style::Print(text)
        )?;
        self.out.flush()
    }

    /// Draw `grid` with its endpoints and no search state.
    fn draw_grid(&mut self, grid: &Grid, start: Coord, end: Coord) -> io::Result<()> {
        for (c, _) in grid.iter() {
            self.paint(grid, c, Mark::Plain)?;
        }
        self.paint(grid, start, Mark::Start)?;
        self.paint(grid, end, Mark::End)?;
        self.out.flush()
    }

    /// Play back `report` over `grid` with `config` pacing.
    ///
    /// `q` or Esc skips to the end of the replay. Returns once a key is
    /// pressed after the replay finishes.
    pub fn replay(&mut self, grid: &Grid, report: &SearchReport, config: ReplayConfig) -> DemoResult<()> {
        let (start, end) = (report.start, report.end);
        self.draw_grid(grid, start, end)?;
        self.status(grid, &format!("{}: searching...", report.algorithm))?;

        let mut skip = false;
        for ev in report.replay() {
            let delay = match ev {
                ReplayEvent::Visit(c) => {
                    if c != start && c != end {
                        self.paint(grid, c, Mark::Visited)?;
                    }
                    config.visit_delay
                }
                ReplayEvent::PathStep(c) => {
                    if c != start && c != end {
                        self.paint(grid, c, Mark::Path)?;
                    }
                    config.path_delay
                }
                ReplayEvent::Finished { .. } => {
                    self.status(grid, &format!("{}  [press any key]", summary(report)))?;
                    break;
                }
            };
            if skip || delay.is_zero() {
                continue;
            }
            self.out.flush()?;
            if quit_requested(delay)? {
                skip = true;
            }
        }
        self.out.flush()?;
        wait_for_key()?;
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Wait up to `timeout` for input; true if it was a quit key.
fn quit_requested(timeout: Duration) -> io::Result<bool> {
    if !event::poll(timeout)? {
        return Ok(false);
    }
    Ok(matches!(
        event::read()?,
        Event::Key(KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            kind: KeyEventKind::Press,
            ..
        })
    ))
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(KeyEvent {
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(());
        }
    }
}
