//! Wheel rendering.
//!
//! [`WheelPainter`] turns a rotation into a backend-agnostic draw list.
//! [`CommandRenderer`] keeps the latest list for a drawing backend to
//! consume, [`TextRenderer`] shows a one-line status in a terminal, and
//! [`ConsolePresenter`] prints the selected verse.

use std::f64::consts::TAU;
use std::io::Write;

use wisdom_core::angle::resolve_segment;
use wisdom_core::{Presenter, Renderer, Segment, WheelError, WheelResult};

use crate::layout::{Marker, Placement, WheelLayout};
use crate::style::{Color, Palette, Theme};

/// A draw command for one frame of the wheel.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Fill the whole canvas.
    Clear {
        /// Fill color.
        color: Color,
    },
    /// One segment wedge with a radial gradient.
    Wedge {
        /// Segment index.
        index: usize,
        /// Start angle on screen.
        start: f64,
        /// End angle on screen.
        end: f64,
        /// Rim radius.
        radius: f64,
        /// Gradient color at the hub.
        inner: Color,
        /// Gradient color at the rim.
        outer: Color,
    },
    /// One line of a segment label.
    Label {
        /// Text content.
        text: String,
        /// Position and rotation.
        placement: Placement,
        /// Font size.
        font_size: f64,
    },
    /// The center hub over the segment tips.
    Hub {
        /// Hub radius.
        radius: f64,
        /// Radius the emblem is clipped to.
        emblem_radius: f64,
        /// Hub fill.
        color: Color,
    },
    /// The fixed marker.
    Marker(Marker),
}

/// Builds draw lists for a wheel.
#[derive(Debug, Clone)]
pub struct WheelPainter {
    /// Canvas geometry.
    pub layout: WheelLayout,
    /// Segment colors.
    pub palette: Palette,
    /// Page theme; the canvas is cleared to its background.
    pub theme: Theme,
}

impl WheelPainter {
    /// Creates a painter with the default palette.
    #[must_use]
    pub fn new(layout: WheelLayout, theme: Theme) -> Self {
        Self {
            layout,
            palette: Palette::default(),
            theme,
        }
    }

    /// Draw list for the wheel at `rotation`.
    #[must_use]
    pub fn paint(&self, rotation: f64, segments: &[Segment]) -> Vec<RenderCommand> {
        let arcs = self.layout.segment_arcs(rotation, segments.len());
        let font_size = self.layout.font_size();

        let mut commands = Vec::with_capacity(3 + segments.len() * 4);
        commands.push(RenderCommand::Clear {
            color: self.theme.background,
        });

        for (arc, segment) in arcs.iter().zip(segments) {
            let colors = self.palette.for_segment(arc.index);
            commands.push(RenderCommand::Wedge {
                index: arc.index,
                start: arc.start,
                end: arc.end,
                radius: self.layout.radius,
                inner: colors.inner,
                outer: colors.outer,
            });
            for line in self.layout.wrap_label(&segment.text) {
                commands.push(RenderCommand::Label {
                    placement: self.layout.place(arc.mid(), line.radius),
                    text: line.text,
                    font_size,
                });
            }
        }

        commands.push(RenderCommand::Hub {
            radius: self.layout.hub_radius(),
            emblem_radius: self.layout.hub_emblem_radius(),
            color: Color::WHITE,
        });
        commands.push(RenderCommand::Marker(self.layout.marker()));
        commands
    }
}

/// Keeps the latest frame's draw list for a drawing backend.
#[derive(Debug, Clone)]
pub struct CommandRenderer {
    painter: WheelPainter,
    frame: Vec<RenderCommand>,
    frames: u64,
}

impl CommandRenderer {
    /// Creates a renderer around a painter.
    #[must_use]
    pub fn new(painter: WheelPainter) -> Self {
        Self {
            painter,
            frame: Vec::new(),
            frames: 0,
        }
    }

    /// Draw list of the most recent frame.
    #[must_use]
    pub fn frame(&self) -> &[RenderCommand] {
        &self.frame
    }

    /// Frames rendered so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for CommandRenderer {
    fn render(&mut self, rotation: f64, segments: &[Segment]) -> WheelResult<()> {
        self.frame = self.painter.paint(rotation, segments);
        self.frames += 1;
        Ok(())
    }
}

/// One-line terminal status: turns so far and the verse under the marker.
pub struct TextRenderer<W: Write> {
    out: W,
    frames: u64,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Frames rendered so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Consumes the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, rotation: f64, segments: &[Segment]) -> WheelResult<()> {
        if segments.is_empty() {
            return Err(WheelError::Render("no segments to draw".into()));
        }
        let index = resolve_segment(rotation, segments.len());
        let turns = rotation / TAU;
        write!(
            self.out,
            "\r  ◄ {:>8.2} turns  [{:>2}/{}] {:<10}",
            turns,
            index + 1,
            segments.len(),
            segments[index].reference
        )
        .and_then(|()| self.out.flush())
        .map_err(|e| WheelError::Render(e.to_string()))?;
        self.frames += 1;
        Ok(())
    }
}

/// Prints the selected verse, optionally in the segment's color.
pub struct ConsolePresenter<W: Write> {
    out: W,
    palette: Palette,
    color: bool,
}

impl<W: Write> ConsolePresenter<W> {
    /// Creates a presenter writing plain text to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            palette: Palette::default(),
            color: false,
        }
    }

    /// Enables 24-bit ANSI color using the segment's hub color.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Consumes the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn present(&mut self, index: usize, segment: &Segment) -> WheelResult<()> {
        let (open, close) = if self.color {
            (self.palette.for_segment(index).inner.ansi_bold(), "\x1b[0m")
        } else {
            (String::new(), "")
        };

        writeln!(
            self.out,
            "\n\n{open}Lord Krishna says:\n\"{}\"\n— {}{close}\n",
            segment.text, segment.reference
        )
        .and_then(|()| self.out.flush())
        .map_err(|e| WheelError::Present(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wisdom_core::Wheel;

    #[test]
    fn test_paint_structure() {
        let wheel = Wheel::bhagavad_gita();
        let painter = WheelPainter::new(WheelLayout::square(1200.0), Theme::LIGHT);
        let commands = painter.paint(0.5, wheel.segments());

        assert_eq!(
            commands.first(),
            Some(&RenderCommand::Clear {
                color: Theme::LIGHT.background
            })
        );
        assert!(matches!(commands.last(), Some(RenderCommand::Marker(_))));
        assert!(matches!(
            commands[commands.len() - 2],
            RenderCommand::Hub { radius, .. } if radius == 80.0
        ));

        let wedges: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Wedge { index, start, .. } => Some((*index, *start)),
                _ => None,
            })
            .collect();
        assert_eq!(wedges.len(), 12);
        assert_eq!(wedges[0], (0, 0.5));

        let labels = commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Label { .. }))
            .count();
        assert!(labels >= 12);
    }

    #[test]
    fn test_command_renderer_keeps_latest_frame() {
        let wheel = Wheel::bhagavad_gita();
        let mut renderer =
            CommandRenderer::new(WheelPainter::new(WheelLayout::square(600.0), Theme::DARK));

        renderer.render(0.0, wheel.segments()).unwrap();
        renderer.render(1.0, wheel.segments()).unwrap();

        assert_eq!(renderer.frames(), 2);
        assert!(matches!(
            renderer.frame()[1],
            RenderCommand::Wedge { start, .. } if start == 1.0
        ));
    }

    #[test]
    fn test_text_renderer_reports_segment_under_marker() {
        let wheel = Wheel::bhagavad_gita();
        let rotation = wisdom_core::angle::final_rotation(0.0, 4.0, 10, 12);

        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(rotation, wheel.segments()).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("[11/12]"), "{text}");
        assert!(text.contains("BG 6.5"), "{text}");
    }

    #[test]
    fn test_text_renderer_rejects_empty_slice() {
        let mut renderer = TextRenderer::new(Vec::new());
        let result = renderer.render(0.0, &[]);
        assert!(matches!(result, Err(WheelError::Render(_))));
        assert_eq!(renderer.frames(), 0);
    }

    #[test]
    fn test_console_presenter_plain() {
        let mut presenter = ConsolePresenter::new(Vec::new());
        presenter
            .present(0, &Segment::new("Rise up", "BG 6.5"))
            .unwrap();

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(text.contains("Lord Krishna says:"));
        assert!(text.contains("\"Rise up\""));
        assert!(text.contains("— BG 6.5"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_console_presenter_colored() {
        let mut presenter = ConsolePresenter::new(Vec::new()).with_color(true);
        presenter.present(0, &Segment::new("Rise up", "BG 6.5")).unwrap();

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        // Segment 0 hub color is #FF6B6B.
        assert!(text.contains("\x1b[1;38;2;255;107;107m"));
        assert!(text.ends_with("\x1b[0m\n\n"));
    }
}
