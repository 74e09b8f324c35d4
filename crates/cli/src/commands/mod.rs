pub(crate) mod render;
pub(crate) mod serve;
pub(crate) mod timezones;
