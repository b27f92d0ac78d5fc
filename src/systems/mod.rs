pub mod body;
pub mod impulse;
pub mod pins;
