pub mod email;
pub mod external;
pub mod goal_item;
pub mod goal_type;
pub mod standard;
