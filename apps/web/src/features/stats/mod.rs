//! Dashboard analytics feeds. The widgets render static mock arrays shaped
//! like the reporting API payloads until that API lands.

pub(crate) mod data;
pub(crate) mod types;
