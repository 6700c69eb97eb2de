mod generate;
mod measure;

#[allow(unused_imports)]
pub use generate::{impulse, sine, two_tone};
#[allow(unused_imports)]
pub use measure::{attenuation_db, rms};
