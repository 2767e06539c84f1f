mod parse;
mod profile;

pub use profile::ProfileV1;
