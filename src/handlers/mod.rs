pub mod add;
pub mod redirect;
