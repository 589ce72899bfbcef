pub mod email;
pub mod external;
pub mod health;
pub mod standard;
