// File: crates/finboard-core/src/path.rs
// Summary: Backend-neutral path description; serializes to SVG `d` strings and feeds the Skia rasterizer.

use std::fmt::Write as _;

/// A single drawing command. Coordinates are absolute pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CubicTo { x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
    /// Elliptical arc with the SVG flag semantics (`sweep == true` is clockwise on screen).
    ArcTo { rx: f64, ry: f64, large_arc: bool, sweep: bool, x: f64, y: f64 },
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    cmds: Vec<PathCmd>,
}

impl PathData {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.cmds.push(PathCmd::MoveTo { x, y });
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.cmds.push(PathCmd::LineTo { x, y });
        self
    }

    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> &mut Self {
        self.cmds.push(PathCmd::CubicTo { x1, y1, x2, y2, x, y });
        self
    }

    pub fn arc_to(&mut self, r: f64, large_arc: bool, sweep: bool, x: f64, y: f64) -> &mut Self {
        self.cmds.push(PathCmd::ArcTo { rx: r, ry: r, large_arc, sweep, x, y });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Serialize as an SVG path `d` attribute.
    pub fn to_svg_d(&self) -> String {
        let mut out = String::with_capacity(self.cmds.len() * 24);
        for (i, cmd) in self.cmds.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match *cmd {
                PathCmd::MoveTo { x, y } => {
                    let _ = write!(out, "M {} {}", fmt_num(x), fmt_num(y));
                }
                PathCmd::LineTo { x, y } => {
                    let _ = write!(out, "L {} {}", fmt_num(x), fmt_num(y));
                }
                PathCmd::CubicTo { x1, y1, x2, y2, x, y } => {
                    let _ = write!(
                        out,
                        "C {} {} {} {} {} {}",
                        fmt_num(x1),
                        fmt_num(y1),
                        fmt_num(x2),
                        fmt_num(y2),
                        fmt_num(x),
                        fmt_num(y)
                    );
                }
                PathCmd::ArcTo { rx, ry, large_arc, sweep, x, y } => {
                    let _ = write!(
                        out,
                        "A {} {} 0 {} {} {} {}",
                        fmt_num(rx),
                        fmt_num(ry),
                        large_arc as u8,
                        sweep as u8,
                        fmt_num(x),
                        fmt_num(y)
                    );
                }
                PathCmd::Close => out.push('Z'),
            }
        }
        out
    }
}

/// Compact number formatting for SVG output: three decimals, trailing zeros trimmed, no `-0`.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() || v.abs() < 0.0005 {
        return "0".to_string();
    }
    let mut s = format!("{:.3}", v);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

