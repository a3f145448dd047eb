pub mod consciousness;
pub mod heart_rate;
pub mod oxygen_saturation;
pub mod respiratory_rate;
pub mod supplemental_oxygen;
pub mod systolic_bp;
pub mod temperature;
