pub mod alphabet;
pub mod codec;
pub mod config;
pub mod decode_table;
