pub mod errors;
pub mod db;
pub mod comment;

#[cfg(test)]
mod tests;
