use crate::constant::{Const, Trend};
use crate::utils::round2;

pub fn project(trend: Trend, last_value: f64) -> f64 {
    let factor = match trend {
        Trend::Up => Const::UP_FACTOR,
        Trend::Down => Const::DOWN_FACTOR,
    };
    round2(last_value * factor)
}
