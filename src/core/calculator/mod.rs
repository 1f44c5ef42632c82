pub mod hours;
pub mod pay;
