use {
    crossterm::{
        QueueableCommand, cursor,
        style::{self, Color, Stylize},
    },
    std::{io::Write, iter::repeat_n},
};

/// one horizontal bar of the chart.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bar {
    /// the leftmost column.
    pub x: u16,
    /// the row.
    pub y: u16,
    /// the number of columns covered.
    pub width: u16,
    pub color: Color,
}

// === impl Bar ===

impl Bar {
    const FILL: char = '█';

    pub fn draw(&self, writer: &mut impl Write) -> std::io::Result<()> {
        let Self { x, y, width, color } = *self;

        if width == 0 {
            return Ok(());
        }

        let bar = repeat_n(Self::FILL, width.into()).collect::<String>();
        writer
            .queue(cursor::MoveTo(x, y))?
            .queue(style::PrintStyledContent(bar.with(color)))?;

        Ok(())
    }
}
