pub(crate) const MINUTES_IN_DEGREE: u8 = 60;
pub(crate) const SECONDS_IN_MINUTE: u8 = 60;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';

pub(crate) const FULL_TURN_DEG: u16 = 360;
pub(crate) const HALF_TURN_DEG: u16 = FULL_TURN_DEG >> 1;
pub(crate) const QUARTER_TURN_DEG: u16 = HALF_TURN_DEG >> 1;

/// The maximum number of decimal digits of the arc seconds when formatting
pub const MAX_PRECISION: u8 = 9;

/// The number of decimal digits of the arc seconds used when no preference given
pub const DEFAULT_PRECISION: u8 = 3;
