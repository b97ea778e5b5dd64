/// Interactive terminal animation loop.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::game::Grid;

struct Animation<'a> {
    grid: &'a mut Grid,
    generation: u64,
    playing: bool,
}

/// Animate the grid in an alternate-screen terminal UI, advancing one
/// generation per tick while playing.
///
/// Keys: space play/pause, enter single-step when paused, q to quit.
pub fn run(grid: &mut Grid, tick: Duration) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let animation = Animation {
        grid,
        generation: 0,
        playing: true,
    };
    let result = animate(&mut terminal, animation, tick);

    // Best-effort restore so a failed run does not wedge the shell.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

fn animate(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut animation: Animation<'_>,
    tick: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw(frame, &animation))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') => animation.playing = !animation.playing,
                    KeyCode::Enter if !animation.playing => {
                        animation.grid.step();
                        animation.generation += 1;
                    }
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= tick {
            if animation.playing {
                animation.grid.step();
                animation.generation += 1;
            }
            last_tick = Instant::now();
        }
    }
}

fn draw(frame: &mut ratatui::Frame, animation: &Animation<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    let n = animation.grid.dimension();
    let mut board = String::with_capacity(n * (n + 1));
    for row in 0..n {
        for col in 0..n {
            board.push(if animation.grid.get(row, col).is_alive() {
                '█'
            } else {
                ' '
            });
        }
        board.push('\n');
    }

    let board = Paragraph::new(board)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Game of Life [space: play/pause | enter: step | q: quit]"),
        );
    frame.render_widget(board, chunks[0]);

    let status = format!(
        "generation: {}   population: {}   {}",
        animation.generation,
        animation.grid.live_count(),
        if animation.playing { "running" } else { "paused" },
    );
    let status =
        Paragraph::new(status).block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[1]);
}
