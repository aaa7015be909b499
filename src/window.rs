use {
    super::*,
    crossterm::{
        ExecutableCommand, cursor,
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
        terminal,
    },
    std::io::Write,
};

/// the alternate screen, in raw mode.
///
/// the terminal is restored when this is dropped.
struct Screen(());

impl<S: TraceSource> App<S> {
    /// shows the chart until the user dismisses it.
    pub fn tui(self) -> Result<(), crate::Error> {
        let chart = self.chart()?;
        debug!(rows = chart.rows().len(), "showing chart");

        let screen = Screen::enter()?;
        loop {
            let size = terminal::size()?;
            let mut stdout = io::stdout();
            chart.draw(&mut stdout, size)?;
            stdout.flush()?;

            // anything other than a dismissal, a resize included, redraws the chart.
            match event::read()? {
                Event::Key(key) if Self::dismisses(&key) => break,
                _ => {}
            }
        }
        drop(screen);

        debug!("chart dismissed");
        Ok(())
    }

    fn dismisses(
        &KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }: &KeyEvent,
    ) -> bool {
        if kind != KeyEventKind::Press {
            return false;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => true,
            KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }
}

// === impl Screen ===

impl Screen {
    fn enter() -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        let screen = Self(());

        io::stdout()
            .execute(terminal::EnterAlternateScreen)?
            .execute(cursor::Hide)?;

        Ok(screen)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
