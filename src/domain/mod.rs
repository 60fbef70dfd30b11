pub mod account;
pub mod errors;
pub mod page;
pub mod post;
pub mod site;
pub mod slug;
pub mod taxonomy;
