//! Network-facing collaborators.

pub(crate) mod translations;
