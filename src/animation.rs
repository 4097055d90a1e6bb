pub(crate) mod driver;
pub(crate) mod ease;
pub(crate) mod ramp;
pub(crate) mod tween;
