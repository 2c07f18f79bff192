use crate::Error;
use std::str::FromStr;

/// Display unit for sizes, binary multiples (1 Kb = 1024 B).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizeUnit {
	#[default]
	B,
	K,
	M,
	G,
	T,
}

impl SizeUnit {
	pub fn bytes(&self) -> u64 {
		match self {
			SizeUnit::B => 1,
			SizeUnit::K => 1 << 10,
			SizeUnit::M => 1 << 20,
			SizeUnit::G => 1 << 30,
			SizeUnit::T => 1 << 40,
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			SizeUnit::B => "B",
			SizeUnit::K => "Kb",
			SizeUnit::M => "Mb",
			SizeUnit::G => "Gb",
			SizeUnit::T => "Tb",
		}
	}

	/// Only place where sizes become floating point.
	pub fn convert(&self, size: u64) -> f64 {
		size as f64 / self.bytes() as f64
	}
}

impl FromStr for SizeUnit {
	type Err = Error;

	fn from_str(val: &str) -> Result<Self, Self::Err> {
		match val.to_lowercase().as_str() {
			"b" => Ok(SizeUnit::B),
			"k" | "kb" => Ok(SizeUnit::K),
			"m" | "mb" => Ok(SizeUnit::M),
			"g" | "gb" => Ok(SizeUnit::G),
			"t" | "tb" => Ok(SizeUnit::T),
			_ => Err(Error::InvalidSizeUnit(val.to_string())),
		}
	}
}
