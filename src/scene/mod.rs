pub mod level;
pub mod prefabs;
