pub mod dist_info;

pub use dist_info::DistInfoInventory;
