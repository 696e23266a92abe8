//! ANSI terminal escape codes.
//!
//! An `Escape` pairs the sequence that turns an effect on with the one that
//! turns it off again:
//!
//! ```
//! use seqtools::ansi::{blue, bold, italic};
//!
//! let title = bold() + blue();
//! println!("{}", title.paint("heading"));
//! println!("{}emphasis{}", italic(), !italic());
//! ```
use core::fmt;
use core::ops;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Select Graphic Rendition sequence for `code`.
pub fn sgr(code: &str) -> String {
	format!("{}{}m", CSI, code)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Escape {
	pub set: String,
	pub reset: String,
}

impl Escape {
	pub fn new(set: impl Into<String>, reset: impl Into<String>) -> Self {
		Self { set: set.into(), reset: reset.into() }
	}

	fn graphic(set: &str, reset: &str) -> Self {
		Self::new(sgr(set), sgr(reset))
	}

	/// `text` between the set and reset sequences.
	pub fn paint(&self, text: &str) -> String {
		let mut out = String::with_capacity(self.set.len() + text.len() + self.reset.len());
		out.push_str(&self.set);
		out.push_str(text);
		out.push_str(&self.reset);
		out
	}

	/// Both effects at once. Sets and resets are each concatenated in order.
	pub fn combine(&self, other: &Self) -> Self {
		Self::new(
			format!("{}{}", self.set, other.set),
			format!("{}{}", self.reset, other.reset),
		)
	}
}

/// Writes only the set sequence.
impl fmt::Display for Escape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.set)
	}
}

impl ops::Add for Escape {
	type Output = Escape;

	fn add(self, other: Self) -> Self::Output {
		self.combine(&other)
	}
}

impl ops::Add<&Escape> for &Escape {
	type Output = Escape;

	fn add(self, other: &Escape) -> Self::Output {
		self.combine(other)
	}
}

/// The reset sequence.
impl ops::Not for Escape {
	type Output = String;

	fn not(self) -> Self::Output {
		self.reset
	}
}

impl ops::Not for &Escape {
	type Output = String;

	fn not(self) -> Self::Output {
		self.reset.clone()
	}
}

macro_rules! graphics {
	($($name:ident = $set:literal / $reset:literal;)*) => {$(
		pub fn $name() -> Escape {
			Escape::graphic($set, $reset)
		}
	)*};
}

graphics! {
	reset = "0" / "0";
	bold = "1" / "22";
	faint = "2" / "22";
	italic = "3" / "23";
	underline = "4" / "24";
	blink = "5" / "25";
	reverse_video = "7" / "27";
	strike = "9" / "29";

	black = "30" / "39";
	red = "31" / "39";
	green = "32" / "39";
	yellow = "33" / "39";
	blue = "34" / "39";
	magenta = "35" / "39";
	cyan = "36" / "39";
	white = "37" / "39";
	gray = "90" / "39";
	bright_red = "91" / "39";
	bright_green = "92" / "39";
	bright_yellow = "93" / "39";
	bright_blue = "94" / "39";
	bright_magenta = "95" / "39";
	bright_cyan = "96" / "39";
	bright_white = "97" / "39";

	black_bg = "40" / "49";
	red_bg = "41" / "49";
	green_bg = "42" / "49";
	yellow_bg = "43" / "49";
	blue_bg = "44" / "49";
	magenta_bg = "45" / "49";
	cyan_bg = "46" / "49";
	white_bg = "47" / "49";
	gray_bg = "100" / "49";
	bright_red_bg = "101" / "49";
	bright_green_bg = "102" / "49";
	bright_yellow_bg = "103" / "49";
	bright_blue_bg = "104" / "49";
	bright_magenta_bg = "105" / "49";
	bright_cyan_bg = "106" / "49";
	bright_white_bg = "107" / "49";
}

/// Foreground from the 256 colour palette.
pub fn color(index: u8) -> Escape {
	Escape::graphic(&format!("38;5;{}", index), "39")
}

pub fn color_bg(index: u8) -> Escape {
	Escape::graphic(&format!("48;5;{}", index), "49")
}

/// 24 bit foreground.
pub fn rgb(r: u8, g: u8, b: u8) -> Escape {
	Escape::graphic(&format!("38;2;{};{};{}", r, g, b), "39")
}

pub fn rgb_bg(r: u8, g: u8, b: u8) -> Escape {
	Escape::graphic(&format!("48;2;{};{};{}", r, g, b), "49")
}

/// Cursor up.
pub fn cuu(n: u32) -> String {
	format!("{}{}A", CSI, n)
}

/// Cursor down.
pub fn cud(n: u32) -> String {
	format!("{}{}B", CSI, n)
}

/// Cursor forward.
pub fn cuf(n: u32) -> String {
	format!("{}{}C", CSI, n)
}

/// Cursor back.
pub fn cub(n: u32) -> String {
	format!("{}{}D", CSI, n)
}

/// Cursor to column `x`, 1-based.
pub fn cha(x: u32) -> String {
	format!("{}{}G", CSI, x)
}

/// Cursor to column `x` of row `y`, both 1-based.
pub fn cup(x: u32, y: u32) -> String {
	format!("{}{};{}H", CSI, y, x)
}

/// Clears the screen and scrollback, then homes the cursor.
pub fn clear_screen() -> Escape {
	Escape::new(format!("{0}2J{0}3J{1}", CSI, cup(1, 1)), "")
}

pub fn clear_line() -> Escape {
	Escape::new(format!("{}2K{}", CSI, cha(1)), "")
}

pub fn show_cursor() -> Escape {
	Escape::new(format!("{}?25h", CSI), "")
}

pub fn hide_cursor() -> Escape {
	Escape::new(format!("{}?25l", CSI), "")
}
