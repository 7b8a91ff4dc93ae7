#![deny(warnings)]
#![cfg_attr(test, deny(warnings))]

use std::fmt;
use std::io::{self, Write};
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use log::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A coordinate left the `i32` range.
    Overflow,
    /// Text that is not of the form `x,y`.
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Overflow => write!(f, "point coordinate overflow"),
            Error::Parse(s) => write!(f, "expected a point like `x,y`, got `{s}`"),
        }
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// `|x1 - x2| + |y1 - y2|`, wide enough for any pair of points.
    pub fn manhattan_distance(&self, other: &Point) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// Moves this point by `by`. Panics on overflow in debug builds, like
    /// plain integer addition.
    pub fn translate(&mut self, by: Point) {
        self.x += by.x;
        self.y += by.y;
    }

    pub fn checked_translate(&mut self, by: Point) -> Result<(), Error> {
        let x = self.x.checked_add(by.x).ok_or(Error::Overflow)?;
        let y = self.y.checked_add(by.y).ok_or(Error::Overflow)?;
        *self = Point { x, y };
        trace!("translated by {by} to {self}");
        Ok(())
    }

    pub fn print_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    pub fn print(&self) -> io::Result<()> {
        self.print_to(io::stdout().lock())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(mut self, rhs: Point) -> Point {
        self.translate(rhs);
        self
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.translate(rhs);
    }
}

impl FromStr for Point {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::Parse(s.to_string());
        let inner = s.trim();
        let inner = inner
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(inner);
        let (x, y) = inner.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Point { x, y })
    }
}
