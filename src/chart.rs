use {
    self::{palette::Palette, scale::Scale},
    crate::{
        bar::Bar,
        interval::{Interval, Intervals, Pair},
        trace::TimeSlot,
    },
    crossterm::{
        QueueableCommand, cursor,
        style::{self, Color, StyledContent, Stylize},
        terminal,
    },
    std::io::{self, Write},
};

mod palette;
mod scale;


/// a gantt chart of cpu occupancy.
#[derive(Clone, Debug)]
pub struct Chart {
    /// one row per (cpu, process) pair, in ascending order.
    rows: Vec<Row>,
    /// one entry per process, in order of first appearance.
    legend: Vec<LegendEntry>,
    /// the earliest and latest slots on the time axis.
    span: (TimeSlot, TimeSlot),
}

/// a row of the chart.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Row {
    /// `CPU <n>`.
    pub label: String,
    pub pair: Pair,
    pub interval: Interval,
    pub color: Color,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LegendEntry {
    /// `p<n>s`.
    pub label: String,
    pub color: Color,
}

/// where each part of the chart goes on screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Frame {
    cols: u16,
    /// the width of the row label column.
    labels: u16,
    /// the first row bars may be drawn on.
    top: u16,
    /// the row of the time axis. bars are drawn above it.
    axis: u16,
    scale: Scale,
}

// === impl Chart ===

impl Chart {
    pub const TITLE: &str = "Gantt chart of process execution";
    pub const X_LABEL: &str = "Time Slots";

    /// the smallest terminal the chart will be drawn in.
    const MIN_SIZE: (u16, u16) = (24, 6);

    pub fn new(intervals: &Intervals) -> Self {
        let mut palette = Palette::default();
        let mut legend = Vec::<LegendEntry>::new();
        let mut rows = Vec::with_capacity(intervals.len());

        for (&pair, &interval) in intervals {
            let color = palette.color(pair.process);

            let name = format!("p{}s", pair.process);
            if legend.iter().all(|entry| entry.label != name) {
                legend.push(LegendEntry { label: name, color });
            }

            rows.push(Row {
                label: format!("CPU {}", pair.cpu),
                pair,
                interval,
                color,
            });
        }

        let span = intervals
            .span()
            .unwrap_or((TimeSlot::new(0), TimeSlot::new(1)));

        Self { rows, legend, span }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    pub fn span(&self) -> (TimeSlot, TimeSlot) {
        self.span
    }

    /// draws the chart onto a terminal of the given size.
    ///
    /// commands are queued, not flushed. rows that do not fit are left out.
    pub fn draw(&self, writer: &mut impl Write, (cols, rows): (u16, u16)) -> io::Result<()> {
        writer.queue(terminal::Clear(terminal::ClearType::All))?;

        let Some(frame) = self.frame(cols, rows) else {
            return Self::print(writer, 0, 0, "terminal too small".red());
        };

        self.title(writer, &frame)?;
        self.axes(writer, &frame)?;
        self.bars(writer, &frame)?;
        self.key(writer, &frame)?;

        Ok(())
    }

    fn frame(&self, cols: u16, rows: u16) -> Option<Frame> {
        let (min_cols, min_rows) = Self::MIN_SIZE;
        if cols < min_cols || rows < min_rows {
            return None;
        }

        let labels = self
            .rows
            .iter()
            .map(|row| row.label.len())
            .max()
            .unwrap_or("CPU 0".len()) as u16;

        // label column, a space, the vertical axis, and a margin on the right.
        let x = labels + 2;
        let width = cols.checked_sub(x + 1).filter(|w| *w > 0)?;

        Some(Frame {
            cols,
            labels,
            top: 2,
            axis: rows - 3,
            scale: Scale::new(self.span, x, width),
        })
    }

    fn title(&self, writer: &mut impl Write, frame: &Frame) -> io::Result<()> {
        let x = frame.cols.saturating_sub(Self::TITLE.len() as u16) / 2;
        Self::print(writer, x, 0, Self::TITLE.bold())
    }

    fn axes(&self, writer: &mut impl Write, frame: &Frame) -> io::Result<()> {
        let Frame {
            cols,
            labels,
            top,
            axis,
            scale,
        } = *frame;
        let (left, right) = (scale.column(self.span.0), scale.column(self.span.1));

        // the dashed grid, behind everything else.
        let ticks = scale.ticks();
        for tick in ticks.iter() {
            let x = scale.column(*tick);
            for y in top..axis {
                Self::print(writer, x, y, "┆".dark_grey())?;
            }
        }

        // the vertical axis.
        for y in top..axis {
            Self::print(writer, labels + 1, y, "│".grey())?;
        }

        // the horizontal axis, with its ticks and their labels.
        let line = std::iter::once('└')
            .chain(std::iter::repeat_n('─', usize::from(right - left + 1)))
            .collect::<String>();
        Self::print(writer, labels + 1, axis, line.grey())?;
        for tick in ticks.iter() {
            let x = scale.column(*tick);
            Self::print(writer, x, axis, "┴".grey())?;

            let label = tick.to_string();
            let width = label.len() as u16;
            let x = x.saturating_sub(width / 2).min(cols.saturating_sub(width));
            Self::print(writer, x, axis + 1, label.grey())?;
        }

        let x = left + (right - left).saturating_sub(Self::X_LABEL.len() as u16) / 2;
        Self::print(writer, x, axis + 2, Self::X_LABEL.stylize())
    }

    fn bars(&self, writer: &mut impl Write, frame: &Frame) -> io::Result<()> {
        let Frame {
            labels,
            top,
            axis,
            scale,
            ..
        } = *frame;

        // row 0 sits just above the axis.
        let ys = (top..axis).rev();
        for (row, y) in self.rows.iter().zip(ys) {
            let Row {
                label,
                pair: _,
                interval,
                color,
            } = row;

            let x = labels.saturating_sub(label.len() as u16);
            Self::print(writer, x, y, label.as_str().grey())?;

            let (x, width) = scale.bar(interval);
            Bar {
                x,
                y,
                width,
                color: *color,
            }
            .draw(writer)?;
        }

        Ok(())
    }

    /// draws the legend in the top-right corner.
    fn key(&self, writer: &mut impl Write, frame: &Frame) -> io::Result<()> {
        let Frame {
            cols, top, axis, ..
        } = *frame;

        let width = self
            .legend
            .iter()
            .map(|entry| entry.label.len() as u16 + 3)
            .max()
            .unwrap_or(0);
        let x = cols.saturating_sub(width + 1);

        for (LegendEntry { label, color }, y) in self.legend.iter().zip(top..axis) {
            Self::print(writer, x, y, "██".with(*color))?;
            Self::print(writer, x + 2, y, format!(" {label:<w$}", w = width as usize - 3).stylize())?;
        }

        Ok(())
    }

    fn print<D: std::fmt::Display>(
        writer: &mut impl Write,
        x: u16,
        y: u16,
        content: StyledContent<D>,
    ) -> io::Result<()> {
        writer
            .queue(cursor::MoveTo(x, y))?
            .queue(style::PrintStyledContent(content))
            .map(drop)
    }
}
