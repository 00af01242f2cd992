pub mod backup;
pub mod clock;
pub mod hours;
