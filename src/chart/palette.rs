use {crate::trace::ProcessId, crossterm::style::Color, std::collections::BTreeMap};

/// assigns each process a color.
///
/// colors are drawn from a fixed categorical palette by process id, and remembered so that a
/// process keeps its color on every row it appears in.
#[derive(Debug, Default)]
pub struct Palette {
    cache: BTreeMap<ProcessId, Color>,
}

// === impl Palette ===

impl Palette {
    /// the "tab10" categorical colors.
    pub const COLORS: [Color; 10] = [
        Color::Rgb { r: 31, g: 119, b: 180 },
        Color::Rgb { r: 255, g: 127, b: 14 },
        Color::Rgb { r: 44, g: 160, b: 44 },
        Color::Rgb { r: 214, g: 39, b: 40 },
        Color::Rgb { r: 148, g: 103, b: 189 },
        Color::Rgb { r: 140, g: 86, b: 75 },
        Color::Rgb { r: 227, g: 119, b: 194 },
        Color::Rgb { r: 127, g: 127, b: 127 },
        Color::Rgb { r: 188, g: 189, b: 34 },
        Color::Rgb { r: 23, g: 190, b: 207 },
    ];

    /// returns the color of the given process.
    pub fn color(&mut self, process: ProcessId) -> Color {
        let Self { cache } = self;

        *cache.entry(process).or_insert_with(|| {
            let i = process.get() as usize % Self::COLORS.len();
            Self::COLORS[i]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around() {
        let mut palette = Palette::default();
        let a = palette.color(ProcessId::new(3));
        let b = palette.color(ProcessId::new(13));
        assert_eq!(a, b);
        assert_eq!(a, Palette::COLORS[3]);
    }

    #[test]
    fn stable() {
        let mut palette = Palette::default();
        let first = palette.color(ProcessId::new(7));
        palette.color(ProcessId::new(2));
        assert_eq!(palette.color(ProcessId::new(7)), first);
    }

    #[test]
    fn distinct_neighbors() {
        let mut palette = Palette::default();
        let colors = (0..10)
            .map(ProcessId::new)
            .map(|p| palette.color(p))
            .collect::<Vec<_>>();
        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| a != b));
        }
    }
}
