//! The live terminal display.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use lifegrid_lib::Universe;
use std::{
    io::{self, Stdout, Write},
    thread,
    time::Duration,
};

/// Delay between displayed generations.
const FRAME_DELAY: Duration = Duration::from_millis(50);

/// The live display: one frame per generation.
///
/// Runs on the alternate screen so that the final grid, printed after the
/// run, lands on the normal screen. The screen is restored on drop, also
/// on error paths.
pub(crate) struct Screen {
    stdout: Stdout,
}

impl Screen {
    /// Switches to the alternate screen and hides the cursor.
    pub(crate) fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Self { stdout })
    }

    /// Draws one generation.
    ///
    /// Live cells get a marker at their grid position, dead cells stay
    /// blank, and a status line below the grid shows the generation number
    /// and the population.
    pub(crate) fn draw(&mut self, universe: &Universe, generation: u64) -> io::Result<()> {
        queue!(self.stdout, Clear(ClearType::All))?;
        for (r, c) in universe.live_cells() {
            queue!(self.stdout, MoveTo(c as u16, r as u16), Print('o'))?;
        }
        queue!(
            self.stdout,
            MoveTo(0, universe.rows() as u16 + 1),
            Print(format!(
                "Gen: {}  Cells: {}",
                generation,
                universe.population()
            ))
        )?;
        self.stdout.flush()?;
        thread::sleep(FRAME_DELAY);
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
    }
}
