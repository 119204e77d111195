// file: src/extractor/mod.rs
// description: entity recognizer module exports
// reference: internal module structure

pub mod email;
pub mod entities;
pub mod hash;
pub mod ip;
pub mod patterns;
pub mod phone;
pub mod platform;
pub mod username;

pub use email::recognize_emails;
pub use entities::EntityExtractor;
pub use hash::recognize_hashes;
pub use ip::{IpShape, IpSighting, recognize_ip_timestamps};
pub use phone::recognize_phones;
pub use platform::recognize_platforms;
pub use username::recognize_usernames;
