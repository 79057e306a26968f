mod makeup;
mod ratio;
mod threshold;
mod time;

use libm::powf;

#[must_use]
pub fn db_to_linear(db: f32) -> f32 {
    powf(10.0, db * 0.05)
}
