//! Request guards shared by controllers.

pub mod auth;
pub mod json;

#[cfg(test)]
mod test;
