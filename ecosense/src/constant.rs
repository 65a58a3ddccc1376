use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn from_label(label: u8) -> Self {
        if label == 1 { Self::Up } else { Self::Down }
    }

    pub fn as_label(self) -> u8 {
        match self {
            Self::Up => 1,
            Self::Down => 0,
        }
    }
}

#[derive(Debug, Clone)]
pub enum PipelineError {
    InsufficientData,
    NumericDegeneracy(String),
}

impl Display for PipelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientData => write!(f, "insufficient data for estimation"),
            Self::NumericDegeneracy(msg) => write!(f, "numeric degeneracy: {msg}"),
        }
    }
}

impl std::error::Error for PipelineError {}

pub struct Const;

impl Const {
    pub const MIN_CLEAN_LEN: usize = 3;
    pub const UP_FACTOR: f64 = 1.05;
    pub const DOWN_FACTOR: f64 = 0.95;
    pub const VAR_FLOOR: f64 = 1e-9;
}
