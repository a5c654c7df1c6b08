// Copyright 2026 the Ribbon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path representation.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::{Path, PathEl};

impl Path {
    /// Convert the path to an SVG path string representation.
    ///
    /// The current implementation doesn't take any special care to produce a
    /// short string (reducing precision, using relative movement).
    ///
    /// # Examples
    ///
    /// ```
    /// use ribbon::{Path, Point};
    ///
    /// let path = Path::from_polyline(&[Point::new(0.0, 0.0), Point::new(10.0, 5.5)]);
    /// assert_eq!(path.to_svg(), "M0 0L10 5.5");
    /// ```
    pub fn to_svg(&self) -> String {
        let mut result = String::new();
        // Formatting into a `String` never fails.
        let _ = self.write_svg(&mut result);
        result
    }

    /// Write the SVG representation of this path to the provided writer.
    pub fn write_svg<W: Write>(&self, mut writer: W) -> fmt::Result {
        for el in self.elements() {
            match *el {
                PathEl::MoveTo(p) => write!(writer, "M{} {}", p.x, p.y)?,
                PathEl::LineTo(p) => write!(writer, "L{} {}", p.x, p.y)?,
                PathEl::ClosePath => write!(writer, "Z")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Path, Point};

    #[test]
    fn closed_path_to_svg() {
        let mut path = Path::new();
        path.move_to((1.0, 2.0));
        path.line_to((3.0, -4.25));
        path.close_path();
        assert_eq!(path.to_svg(), "M1 2L3 -4.25Z");
    }

    #[test]
    fn empty_path_to_svg() {
        assert_eq!(Path::new().to_svg(), "");
        assert_eq!(Path::from_polyline(&[Point::new(7.0, 7.0)]).to_svg(), "M7 7");
    }
}
